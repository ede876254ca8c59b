use std::collections::HashMap;
use std::hash::Hash;

/// Where a glyph bitmap landed inside the atlas texture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AtlasSlot {
    pub x: u32,
    pub y: u32,
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
}

/// Shelf packer for a square glyph atlas.
///
/// Glyphs fill rows left to right; a glyph that does not fit horizontally
/// opens a new shelf below the tallest glyph of the current one. Once a
/// glyph does not fit vertically the atlas reports full and stays full
/// until [`GlyphAtlas::reset`].
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    size: u32,
    padding: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl GlyphAtlas {
    pub fn new(size: u32, padding: u32) -> Self {
        Self {
            size,
            padding,
            cursor_x: padding,
            cursor_y: padding,
            row_height: 0,
            full: false,
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Forgets every allocation. Slots handed out earlier become invalid.
    pub fn reset(&mut self) {
        *self = Self::new(self.size, self.padding);
    }

    /// Reserves a `w × h` region. `None` once the atlas is exhausted.
    pub fn allocate(&mut self, w: u32, h: u32) -> Option<AtlasSlot> {
        if self.full {
            return None;
        }

        if self.cursor_x + w + self.padding > self.size {
            self.cursor_y += self.row_height + self.padding;
            self.cursor_x = self.padding;
            self.row_height = 0;
        }

        if self.cursor_x + w + self.padding > self.size
            || self.cursor_y + h + self.padding > self.size
        {
            log::warn!(
                "glyph atlas is full ({0}×{0}); some glyphs will not be rendered",
                self.size
            );
            self.full = true;
            return None;
        }

        let (x, y) = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + self.padding;
        self.row_height = self.row_height.max(h);

        let s = self.size as f32;
        Some(AtlasSlot {
            x,
            y,
            uv_min: [x as f32 / s, y as f32 / s],
            uv_max: [(x + w) as f32 / s, (y + h) as f32 / s],
        })
    }
}

/// Glyph slots keyed by raster config, backed by one [`GlyphAtlas`].
///
/// A full atlas is recycled wholesale: [`GlyphCache::recycle_if_full`]
/// drops every slot so the texture can be repacked with the glyphs still
/// in use. Call it between frames, never while slots are queued for drawing.
#[derive(Debug, Clone)]
pub struct GlyphCache<K> {
    atlas: GlyphAtlas,
    slots: HashMap<K, AtlasSlot>,
}

impl<K: Hash + Eq> GlyphCache<K> {
    pub fn new(size: u32, padding: u32) -> Self {
        Self { atlas: GlyphAtlas::new(size, padding), slots: HashMap::new() }
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<AtlasSlot> {
        self.slots.get(key).copied()
    }

    /// Reserves a slot for `key`. `None` when the atlas has no room left.
    pub fn insert(&mut self, key: K, w: u32, h: u32) -> Option<AtlasSlot> {
        let slot = self.atlas.allocate(w, h)?;
        self.slots.insert(key, slot);
        Some(slot)
    }

    /// Empties the cache if the atlas filled up. Returns whether it did.
    pub fn recycle_if_full(&mut self) -> bool {
        if !self.atlas.is_full() {
            return false;
        }
        log::debug!("recycling glyph atlas after {} glyphs", self.slots.len());
        self.clear();
        true
    }

    pub fn clear(&mut self) {
        self.atlas.reset();
        self.slots.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Snaps a physical pixel size to the half-pixel grid so animated text
/// sizes reuse a bounded set of rasterized glyphs.
#[inline]
pub fn quantize_px(px: f32) -> f32 {
    (px * 2.0).round() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── shelf packing ──────────────────────────────────────────────────────

    #[test]
    fn glyphs_fill_a_row_then_wrap() {
        let mut atlas = GlyphAtlas::new(32, 1);
        let a = atlas.allocate(10, 8).unwrap();
        let b = atlas.allocate(10, 5).unwrap();
        assert_eq!((a.x, a.y), (1, 1));
        assert_eq!((b.x, b.y), (12, 1));

        // 23 + 10 + 1 > 32: new shelf below the tallest glyph (8) + padding.
        let c = atlas.allocate(10, 4).unwrap();
        assert_eq!((c.x, c.y), (1, 10));
    }

    #[test]
    fn uvs_are_normalized() {
        let mut atlas = GlyphAtlas::new(100, 0);
        let slot = atlas.allocate(50, 25).unwrap();
        assert_eq!(slot.uv_min, [0.0, 0.0]);
        assert_eq!(slot.uv_max, [0.5, 0.25]);
    }

    #[test]
    fn full_atlas_stays_full() {
        let mut atlas = GlyphAtlas::new(16, 1);
        assert!(atlas.allocate(14, 14).is_some());
        assert!(atlas.allocate(14, 14).is_none());
        assert!(atlas.is_full());
        assert!(atlas.allocate(1, 1).is_none());
    }

    #[test]
    fn oversized_glyph_is_rejected() {
        let mut atlas = GlyphAtlas::new(16, 1);
        assert!(atlas.allocate(20, 2).is_none());
    }

    #[test]
    fn reset_makes_room_again() {
        let mut atlas = GlyphAtlas::new(16, 1);
        atlas.allocate(14, 14).unwrap();
        assert!(atlas.allocate(14, 14).is_none());
        atlas.reset();
        assert!(!atlas.is_full());
        let slot = atlas.allocate(14, 14).unwrap();
        assert_eq!((slot.x, slot.y), (1, 1));
    }

    // ── glyph cache ────────────────────────────────────────────────────────

    #[test]
    fn quantized_sizes_snap_to_half_pixels() {
        assert_eq!(quantize_px(12.0), 12.0);
        assert_eq!(quantize_px(12.2), 12.0);
        assert_eq!(quantize_px(12.3), 12.5);
        assert_eq!(quantize_px(12.74), 12.5);
        assert_eq!(quantize_px(12.76), 13.0);
    }

    #[test]
    fn sweeping_sizes_keeps_the_key_set_bounded() {
        // A numeral growing smoothly from 4 to 60 px, as a dial does while
        // the window is dragged, touches each half-pixel step once.
        let mut cache: GlyphCache<(char, u32)> = GlyphCache::new(2048, 1);
        let mut px = 4.0_f32;
        while px <= 60.0 {
            let q = quantize_px(px);
            for digit in ['1', '2', '5', '9'] {
                let key = (digit, q.to_bits());
                if cache.get(&key).is_none() {
                    let side = q.ceil() as u32;
                    assert!(cache.insert(key, side, side).is_some(), "atlas ran out at {q}px");
                }
            }
            px += 0.013;
        }
        assert_eq!(cache.len(), 4 * 113);
    }

    #[test]
    fn full_cache_is_recycled_and_accepts_glyphs_again() {
        let mut cache: GlyphCache<u32> = GlyphCache::new(64, 1);
        let mut rejected = None;
        for size in 0..1000u32 {
            if cache.insert(size, 10, 10).is_none() {
                rejected = Some(size);
                break;
            }
        }
        let rejected = rejected.expect("a 64px atlas cannot hold 1000 glyphs");
        assert!(!cache.is_empty());

        assert!(cache.recycle_if_full());
        assert!(cache.is_empty());
        assert!(cache.get(&0).is_none());
        assert!(cache.insert(rejected, 10, 10).is_some());
        assert!(!cache.recycle_if_full());
    }
}
