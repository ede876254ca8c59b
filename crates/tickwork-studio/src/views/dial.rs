use tickwork_engine::coords::Vec2;
use tickwork_engine::scene::shapes::{Border, GearCmd};
use tickwork_mech::hands::HUB;
use tickwork_mech::train::{hit_test, DIAL_CENTER};
use tickwork_mech::{ExplorerState, PartId, Point, HANDS, TRAIN};
use tickwork_ui::painter::Painter;

use crate::theme::{metal, Theme};
use crate::transform::DialTransform;

/// Dimmed wheels keep this share of the layer opacity.
const DIMMED_GEAR: f32 = 0.35;

const FACE_RADIUS: f64 = 290.0;
const RIM_WIDTH: f64 = 10.0;
const TICK_OUTER: f64 = 276.0;
const NUMERAL_RADIUS: f64 = 236.0;
const NUMERAL_SIZE: f64 = 30.0;

/// Topmost wheel under the pointer, if the pointer is over the dial.
pub fn hovered_part(t: &DialTransform, pointer: Option<Vec2>) -> Option<PartId> {
    pointer.and_then(|p| t.to_design(p)).and_then(hit_test)
}

/// Paints the clock: face, gear layer, dial markings, hands and hub, back
/// to front.
pub fn paint_dial(painter: &mut Painter, t: &DialTransform, state: &ExplorerState, theme: &Theme) {
    let center = t.to_screen(DIAL_CENTER);
    painter.fill_circle(center, t.len(FACE_RADIUS), theme.palette.dial_face, None);

    paint_gears(painter, t, state, theme);
    paint_markings(painter, t, theme);
    paint_hands(painter, t, state);
}

fn paint_gears(painter: &mut Painter, t: &DialTransform, state: &ExplorerState, theme: &Theme) {
    let layer = state.gear_layer_opacity();
    let angles = state.clock.angles();

    for spec in &TRAIN {
        let opacity = if state.is_dimmed(spec.id) { layer * DIMMED_GEAR } else { layer };
        let center = t.to_screen(spec.center);
        let radius = t.len(spec.radius);

        let border = if state.is_focused(spec.id) {
            painter.ring(center, radius + t.len(8.0), t.len(5.0), theme.palette.amber_400.faded(0.6 * layer));
            Some(Border::new(t.len(3.0).max(1.5), theme.palette.amber_600.faded(layer)))
        } else {
            None
        };

        painter.gear(GearCmd {
            center,
            radius,
            teeth: spec.teeth,
            rotation_deg: angles.of(spec.id) as f32,
            fill: metal(spec.color, opacity),
            border,
            skeleton: spec.skeleton,
        });
    }
}

fn paint_markings(painter: &mut Painter, t: &DialTransform, theme: &Theme) {
    let ink = theme.palette.dial_ink;
    let center = t.to_screen(DIAL_CENTER);
    painter.ring(center, t.len(FACE_RADIUS), t.len(RIM_WIDTH), ink);

    for i in 0..60u32 {
        let dir = Point::from_dial_angle(f64::from(i) * 6.0);
        let (len, width) = if i % 5 == 0 { (22.0, 6.0) } else { (10.0, 2.0) };
        let outer = DIAL_CENTER + dir * TICK_OUTER;
        let inner = DIAL_CENTER + dir * (TICK_OUTER - len);
        painter.line(t.to_screen(inner), t.to_screen(outer), t.len(width), ink);
    }

    let size = t.len(NUMERAL_SIZE);
    if size < 4.0 {
        return;
    }
    for hour in 1..=12u32 {
        let label = hour.to_string();
        let at = t.to_screen(DIAL_CENTER + Point::from_dial_angle(f64::from(hour) * 30.0) * NUMERAL_RADIUS);
        let extent = painter.measure_text(&label, theme.font, size, None);
        let origin = Vec2::new(at.x - extent.x * 0.5, at.y - extent.y * 0.5);
        painter.text(label, theme.font, size, ink, origin, None);
    }
}

fn paint_hands(painter: &mut Painter, t: &DialTransform, state: &ExplorerState) {
    let angles = state.clock.angles();
    let center = t.to_screen(DIAL_CENTER);

    for hand in &HANDS {
        let color = metal(hand.color, state.hand_opacity(hand.driver));
        painter.line(center, t.to_screen(hand.tip(&angles)), t.len(hand.width), color);
    }
    for (radius, color) in HUB {
        painter.fill_circle(center, t.len(radius), metal(color, 1.0), None);
    }
}
