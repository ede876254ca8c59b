use tickwork_mech::GearSpec;
use tickwork_ui::prelude::*;

use crate::theme::Theme;

/// One bob cycle, seconds.
const CYCLE: f32 = 4.0;
/// Share of the first cycle spent fading in.
const ENTER: f32 = 0.15;
const ENTER_DROP: f32 = 15.0;
const BOB_HEIGHT: f32 = 8.0;
const MAX_WIDTH: f32 = 360.0;

fn smoothstep(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Vertical offset and opacity of the tooltip `elapsed` seconds after it
/// appeared.
///
/// The first cycle slides up from 15 px below while fading in; every cycle
/// then rises 8 px by mid-cycle and settles back.
pub fn float_at(elapsed: f32) -> (f32, f32) {
    let elapsed = elapsed.max(0.0);
    let phase = (elapsed % CYCLE) / CYCLE;

    if phase < ENTER {
        if elapsed < CYCLE {
            let e = smoothstep(phase / ENTER);
            return (ENTER_DROP * (1.0 - e), e);
        }
        return (0.0, 1.0);
    }
    let offset = if phase < 0.5 {
        -BOB_HEIGHT * smoothstep((phase - ENTER) / (0.5 - ENTER))
    } else {
        -BOB_HEIGHT * (1.0 - smoothstep((phase - 0.5) / 0.5))
    };
    (offset, 1.0)
}

/// Remembers when the current tooltip appeared so the float restarts for
/// each newly hovered part.
#[derive(Debug, Default)]
pub struct TooltipFloat {
    shown: Option<(&'static str, f32)>,
}

impl TooltipFloat {
    /// `(offset, opacity)` for this frame, or `None` when hidden.
    pub fn update(&mut self, spec: Option<&'static GearSpec>, now: f32) -> Option<(f32, f32)> {
        let Some(spec) = spec else {
            self.shown = None;
            return None;
        };
        let since = match self.shown {
            Some((label, since)) if label == spec.label => since,
            _ => {
                self.shown = Some((spec.label, now));
                now
            }
        };
        Some(float_at(now - since))
    }
}

/// The floating card with the hovered part's name and story.
pub fn tooltip(spec: &GearSpec, theme: &Theme, opacity: f32) -> Element {
    let p = &theme.palette;
    Container::new()
        .background(Color::white().faded(0.95 * opacity))
        .border(Border::new(2.0, p.amber_500.faded(opacity)))
        .corner_radius(16.0)
        .padding(Edges::symmetric(16.0, 20.0))
        .child(
            Flex::column()
                .spacing(6.0)
                .child(Label::new(spec.label, theme.font, 20.0, p.amber_600.faded(opacity)))
                .child(Label::new(spec.description, theme.font, 15.0, p.amber_950.faded(opacity))),
        )
        .into()
}

/// Where the tooltip goes: centered near the top of the dial, raised by
/// `offset`.
pub fn tooltip_rect(card: &Element, dial: Rect, offset: f32, ctx: &LayoutCtx) -> Rect {
    let width = MAX_WIDTH.min((dial.size.x - 32.0).max(0.0));
    let c = Constraints { min: Vec2::new(width, 0.0), max: Vec2::new(width, f32::INFINITY) };
    let size = card.measure(c, ctx);
    Rect::new(dial.center().x - size.x * 0.5, dial.origin.y + 16.0 + offset, size.x, size.y)
}

#[cfg(test)]
mod tests {
    use tickwork_engine::text::FontSystem;
    use tickwork_mech::PartId;

    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn first_cycle_fades_in_from_below() {
        assert_eq!(float_at(0.0), (ENTER_DROP, 0.0));
        let (y, a) = float_at(CYCLE * ENTER);
        assert!(close(y, 0.0) && close(a, 1.0));
    }

    #[test]
    fn bob_peaks_mid_cycle_and_settles() {
        let (y, _) = float_at(CYCLE * 0.5);
        assert!(close(y, -BOB_HEIGHT));
        let (y, a) = float_at(CYCLE * 0.999);
        assert!(y.abs() < 0.01 && close(a, 1.0));
    }

    #[test]
    fn later_cycles_stay_opaque() {
        let (y, a) = float_at(CYCLE + 0.1);
        assert_eq!((y, a), (0.0, 1.0));
    }

    #[test]
    fn float_restarts_for_a_new_part() {
        let mut f = TooltipFloat::default();
        assert_eq!(f.update(None, 1.0), None);

        let minute = PartId::Minute.spec();
        assert_eq!(f.update(Some(minute), 10.0), Some(float_at(0.0)));
        assert_eq!(f.update(Some(minute), 12.0), Some(float_at(2.0)));

        let hour = PartId::Hour.spec();
        assert_eq!(f.update(Some(hour), 13.0), Some(float_at(0.0)));
    }

    #[test]
    fn card_is_centered_over_the_dial() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let theme = Theme::new(FontId::from_index(0));
        let card = tooltip(PartId::Escape.spec(), &theme, 1.0);
        let dial = Rect::new(100.0, 50.0, 500.0, 500.0);

        let r = tooltip_rect(&card, dial, -4.0, &ctx);
        assert_eq!(r.size.x, MAX_WIDTH);
        assert!(close(r.center().x, dial.center().x));
        assert_eq!(r.origin.y, 62.0);
    }
}
