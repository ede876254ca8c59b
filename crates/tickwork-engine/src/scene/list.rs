use super::{DrawCmd, ZIndex};

/// Paint-order key: `z` first, then recording order. Field order matters for
/// the derived `Ord`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey { z, order }, cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Keys are unique, so an unstable sort gives a stable order.
        let items = &self.items;
        self.sorted_indices.sort_unstable_by(|&a, &b| items[a].key.cmp(&items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn labels(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.radius,
                _ => -1.0,
            })
            .collect()
    }

    fn dot(list: &mut DrawList, z: i32, tag: f32) {
        list.push_solid_circle(ZIndex(z), Vec2::zero(), tag, Color::white());
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn lower_z_paints_first() {
        let mut list = DrawList::new();
        dot(&mut list, 5, 1.0);
        dot(&mut list, -1, 2.0);
        dot(&mut list, 3, 3.0);
        assert_eq!(labels(&mut list), vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn equal_z_keeps_insertion_order() {
        let mut list = DrawList::new();
        for tag in 1..=20 {
            dot(&mut list, 0, tag as f32);
        }
        let expected: Vec<f32> = (1..=20).map(|t| t as f32).collect();
        assert_eq!(labels(&mut list), expected);
    }

    #[test]
    fn pushing_after_iteration_resorts() {
        let mut list = DrawList::new();
        dot(&mut list, 2, 1.0);
        assert_eq!(labels(&mut list), vec![1.0]);
        dot(&mut list, 1, 2.0);
        assert_eq!(labels(&mut list), vec![2.0, 1.0]);
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn sort_key_orders_by_z_then_order() {
        let a = SortKey { z: ZIndex(0), order: 9 };
        let b = SortKey { z: ZIndex(1), order: 0 };
        let c = SortKey { z: ZIndex(1), order: 1 };
        assert!(a < b && b < c);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        dot(&mut list, 0, 1.0);
        dot(&mut list, 0, 2.0);
        list.clear();
        assert!(list.is_empty());
        dot(&mut list, 0, 3.0);
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(labels(&mut list), vec![3.0]);
    }
}
