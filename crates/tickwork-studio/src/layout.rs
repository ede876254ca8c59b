use tickwork_engine::coords::{Rect, Vec2};

const MARGIN: f32 = 24.0;
const GAP: f32 = 24.0;
const HEADER_H: f32 = 78.0;
const FOOTER_H: f32 = 30.0;
const CARD_PAD: f32 = 20.0;
const CHIPS_H: f32 = 34.0;
const CONTROLS_H: f32 = 96.0;
const DETAILS_H: f32 = 236.0;
const XRAY_BUTTON: Vec2 = Vec2::new(176.0, 44.0);
const MAX_DIAL: f32 = 560.0;

/// Where each part of the page goes for a given window size.
///
/// The left card holds the dial, part chips and transport controls; the
/// right column stacks the tip panel over the part details.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub header: Rect,
    pub footer: Rect,
    pub clock_card: Rect,
    pub xray_button: Rect,
    pub dial: Rect,
    pub chips: Rect,
    pub controls: Rect,
    pub tip_panel: Rect,
    pub details: Rect,
}

impl PageLayout {
    pub fn compute(window: Vec2) -> Self {
        let w = window.x.max(0.0);
        let h = window.y.max(0.0);
        let content_w = (w - 2.0 * MARGIN).max(0.0);

        let header = Rect::new(MARGIN, MARGIN * 0.5, content_w, HEADER_H);
        let footer = Rect::new(MARGIN, (h - FOOTER_H - MARGIN * 0.5).max(0.0), content_w, FOOTER_H);

        let main_top = header.max().y + GAP * 0.5;
        let main_h = (footer.origin.y - GAP * 0.5 - main_top).max(0.0);

        let left_w = ((content_w - GAP) * 2.0 / 3.0).max(0.0);
        let right_w = (content_w - GAP - left_w).max(0.0);

        let clock_card = Rect::new(MARGIN, main_top, left_w, main_h);
        let right_x = clock_card.max().x + GAP;

        let details_h = DETAILS_H.min(main_h * 0.5);
        let tip_panel = Rect::new(right_x, main_top, right_w, (main_h - details_h - GAP).max(0.0));
        let details = Rect::new(right_x, tip_panel.max().y + GAP, right_w, details_h);

        let inner = clock_card.inset(CARD_PAD);
        let controls = Rect::new(
            inner.origin.x,
            (inner.max().y - CONTROLS_H).max(inner.origin.y),
            inner.size.x,
            CONTROLS_H.min(inner.size.y),
        );
        let chips = Rect::new(
            inner.origin.x,
            (controls.origin.y - 16.0 - CHIPS_H).max(inner.origin.y),
            inner.size.x,
            CHIPS_H,
        );

        let dial_side = (chips.origin.y - 12.0 - inner.origin.y)
            .min(inner.size.x)
            .clamp(0.0, MAX_DIAL);
        let dial = Rect::new(
            inner.center().x - dial_side * 0.5,
            inner.origin.y,
            dial_side,
            dial_side,
        );

        let xray_button = Rect::new(
            (clock_card.max().x - 16.0 - XRAY_BUTTON.x).max(clock_card.origin.x),
            clock_card.origin.y + 16.0,
            XRAY_BUTTON.x,
            XRAY_BUTTON.y,
        );

        Self { header, footer, clock_card, xray_button, dial, chips, controls, tip_panel, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inside(inner: Rect, outer: Rect) -> bool {
        inner.origin.x >= outer.origin.x - 1e-3
            && inner.origin.y >= outer.origin.y - 1e-3
            && inner.max().x <= outer.max().x + 1e-3
            && inner.max().y <= outer.max().y + 1e-3
    }

    #[test]
    fn default_window_stacks_card_sections() {
        let l = PageLayout::compute(Vec2::new(1200.0, 820.0));

        assert_eq!(l.dial.size.x, l.dial.size.y);
        assert!(l.dial.size.x > 300.0);
        assert!(inside(l.dial, l.clock_card));
        assert!(inside(l.chips, l.clock_card));
        assert!(inside(l.controls, l.clock_card));
        assert!(l.dial.max().y <= l.chips.origin.y);
        assert!(l.chips.max().y <= l.controls.origin.y);
        assert!(inside(l.xray_button, l.clock_card));
    }

    #[test]
    fn right_column_sits_beside_the_card() {
        let l = PageLayout::compute(Vec2::new(1200.0, 820.0));
        assert!(l.tip_panel.origin.x >= l.clock_card.max().x);
        assert!(l.details.origin.y >= l.tip_panel.max().y);
        assert!(l.details.max().y <= l.footer.origin.y);
        assert!(l.clock_card.size.x > l.tip_panel.size.x);
    }

    #[test]
    fn tiny_window_never_goes_negative() {
        let l = PageLayout::compute(Vec2::new(50.0, 40.0));
        for r in [l.header, l.footer, l.clock_card, l.dial, l.chips, l.controls, l.tip_panel, l.details] {
            assert!(r.size.x >= 0.0 && r.size.y >= 0.0, "{r:?}");
        }
    }

    #[test]
    fn dial_is_capped_on_huge_windows() {
        let l = PageLayout::compute(Vec2::new(4000.0, 3000.0));
        assert_eq!(l.dial.size.x, MAX_DIAL);
    }
}
