use tickwork_engine::paint::Color;
use tickwork_engine::text::FontId;
use tickwork_mech::Rgb8;

/// Warm workshop palette: amber ink on cream paper.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub page: Color,
    pub card: Color,
    pub card_edge: Color,
    pub dial_face: Color,
    pub dial_ink: Color,

    pub amber_50: Color,
    pub amber_100: Color,
    pub amber_200: Color,
    pub amber_400: Color,
    pub amber_500: Color,
    pub amber_600: Color,
    pub amber_700: Color,
    pub amber_800: Color,
    pub amber_900: Color,
    pub amber_950: Color,

    pub emerald_100: Color,
    pub emerald_400: Color,
    pub emerald_900: Color,
    pub blue_100: Color,
    pub blue_900: Color,
    pub muted: Color,
}

impl Palette {
    pub fn warm() -> Self {
        Self {
            page: Color::hex(0xFDF6E3),
            card: Color::white(),
            card_edge: Color::hex(0xFEF3C7),
            dial_face: Color::hex(0xFFFDF7),
            dial_ink: Color::hex(0x78350F),

            amber_50: Color::hex(0xFFFBEB),
            amber_100: Color::hex(0xFEF3C7),
            amber_200: Color::hex(0xFDE68A),
            amber_400: Color::hex(0xFBBF24),
            amber_500: Color::hex(0xF59E0B),
            amber_600: Color::hex(0xD97706),
            amber_700: Color::hex(0xB45309),
            amber_800: Color::hex(0x92400E),
            amber_900: Color::hex(0x78350F),
            amber_950: Color::hex(0x451A03),

            emerald_100: Color::hex(0xD1FAE5),
            emerald_400: Color::hex(0x34D399),
            emerald_900: Color::hex(0x064E3B),
            blue_100: Color::hex(0xDBEAFE),
            blue_900: Color::hex(0x1E3A8A),
            muted: Color::hex(0x6B7280),
        }
    }
}

/// Everything views need to draw: colors plus the loaded font.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: Palette,
    pub font: FontId,
}

impl Theme {
    pub fn new(font: FontId) -> Self {
        Self { palette: Palette::warm(), font }
    }
}

/// Catalog color at the given opacity.
#[inline]
pub fn metal(c: Rgb8, opacity: f32) -> Color {
    Color::from_srgb_u8(c.r, c.g, c.b, 255).faded(opacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metal_fades_premultiplied() {
        let full = metal(Rgb8::hex(0xFFFFFF), 1.0);
        assert!((full.a - 1.0).abs() < 1e-6);
        assert!((full.r - 1.0).abs() < 1e-5);

        let ghost = metal(Rgb8::hex(0xFFFFFF), 0.02);
        assert!((ghost.a - 0.02).abs() < 1e-6);
        assert!((ghost.r - 0.02).abs() < 1e-6);
    }
}
