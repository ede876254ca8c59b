use tickwork_mech::state::{MAX_SPEED, MIN_SPEED};
use tickwork_mech::train::CHIP_ORDER;
use tickwork_mech::{Action, ExplorerState};
use tickwork_ui::prelude::*;

use super::{Msg, Outbox};
use crate::theme::{metal, Theme};

/// X-ray toggle in the clock card's corner.
pub fn xray_button(state: &ExplorerState, theme: &Theme, outbox: &Outbox) -> Element {
    let p = &theme.palette;
    let (caption, ink) = if state.xray { ("Hide internals", Color::white()) } else { ("See inside", p.amber_800) };

    let button = Button::new(Label::new(caption, theme.font, 15.0, ink).no_wrap())
        .corner_radius(22.0)
        .padding(Edges::symmetric(10.0, 20.0))
        .on_click(outbox.sender(Msg::Explorer(Action::ToggleXray)));

    if state.xray {
        button.colors(p.amber_600, p.amber_700, p.amber_800).into()
    } else {
        button
            .colors(p.amber_100, p.amber_200, p.amber_200)
            .border(Border::new(2.0, p.amber_200))
            .into()
    }
}

/// One chip per part, in chip order. The hovered part's chip is lit.
pub fn part_chips(state: &ExplorerState, theme: &Theme, outbox: &Outbox) -> Element {
    let p = &theme.palette;
    Flex::row()
        .spacing(12.0)
        .align(Align::Center)
        .children(CHIP_ORDER.iter().map(|&id| {
            let spec = id.spec();
            let active = state.is_focused(id);
            Chip::new(spec.label, theme.font, 13.0, metal(spec.color, 1.0))
                .text_color(if active { Color::white() } else { p.amber_900 })
                .backgrounds(Color::white(), p.amber_600)
                .active(active)
                .on_hover(outbox.sender(Msg::ChipHovered(id)))
        }))
        .into()
}

/// Transport bar: pause/resume, speed slider with its readout, sync.
pub fn transport(state: &ExplorerState, theme: &Theme, outbox: &Outbox) -> Element {
    let p = &theme.palette;
    let clock = &state.clock;

    let pause = Button::new(
        Label::new(if clock.is_paused() { "Play" } else { "Pause" }, theme.font, 16.0, Color::white()).no_wrap(),
    )
    .colors(p.amber_600, p.amber_700, p.amber_800)
    .corner_radius(32.0)
    .min_size(88.0, 64.0)
    .on_click(outbox.sender(Msg::Explorer(Action::TogglePause)));

    let speed_outbox = outbox.clone();
    let speed = Flex::column()
        .spacing(8.0)
        .child(
            Flex::row()
                .child(Label::new("Speed", theme.font, 14.0, p.amber_900).no_wrap())
                .child(Spacer)
                .child(Label::new(format!("{}x", clock.speed()), theme.font, 14.0, p.amber_900).no_wrap()),
        )
        .child(
            Slider::new(MIN_SPEED, MAX_SPEED, clock.speed())
                .colors(p.amber_200, p.amber_600, Color::white())
                .thumb_radius(10.0)
                .on_change(move |v| speed_outbox.send(Msg::Explorer(Action::SetSpeed(v)))),
        );

    let sync = Button::new(Label::new("Sync to now", theme.font, 15.0, p.amber_700).no_wrap())
        .colors(Color::white(), p.amber_100, p.amber_200)
        .border(Border::new(2.0, p.amber_600))
        .corner_radius(16.0)
        .padding(Edges::symmetric(12.0, 22.0))
        .on_click(outbox.sender(Msg::Sync));

    Flex::row()
        .spacing(28.0)
        .align(Align::Center)
        .child(pause)
        .child(speed)
        .child(sync)
        .into()
}

/// `rect` narrowed to `content`'s measured width and centered, full height.
pub fn centered_in(content: &Element, rect: Rect, ctx: &LayoutCtx) -> Rect {
    let size = content.measure(Constraints::loose(Vec2::new(rect.size.x, rect.size.y)), ctx);
    let w = size.x.min(rect.size.x);
    Rect::new(rect.center().x - w * 0.5, rect.origin.y, w, rect.size.y)
}

#[cfg(test)]
mod tests {
    use tickwork_engine::scene::ZIndex;
    use tickwork_engine::text::FontSystem;
    use tickwork_mech::{ClockState, PartId};

    use super::*;

    fn theme() -> Theme {
        Theme::new(FontId::from_index(0))
    }

    #[test]
    fn hovering_a_chip_posts_its_part() {
        let outbox = Outbox::new();
        let state = ExplorerState::new(ClockState::new(0.0));
        let mut scene = UiScene::new(FontSystem::new());

        let row = part_chips(&state, &theme(), &outbox);
        let rect = Rect::new(0.0, 0.0, 2000.0, 34.0);
        // Chips are laid out left to right; the first is the escape wheel.
        scene.frame(row, rect, ZIndex(0), &UiInput::hovering(Vec2::new(5.0, 17.0)));
        assert_eq!(outbox.drain(), vec![Msg::ChipHovered(PartId::Escape)]);

        let row = part_chips(&state, &theme(), &outbox);
        scene.frame(row, rect, ZIndex(0), &UiInput::hovering(Vec2::new(1990.0, 17.0)));
        assert!(outbox.drain().is_empty());
    }

    #[test]
    fn transport_buttons_post_actions() {
        let outbox = Outbox::new();
        let state = ExplorerState::new(ClockState::new(0.0));
        let mut scene = UiScene::new(FontSystem::new());
        let rect = Rect::new(0.0, 0.0, 600.0, 96.0);

        // Pause button is the first child, starting at the left edge.
        let click = UiInput {
            mouse_pos: Some(Vec2::new(10.0, 48.0)),
            events: vec![UiEvent::Click { pos: Vec2::new(10.0, 48.0) }],
            ..UiInput::default()
        };
        scene.frame(transport(&state, &theme(), &outbox), rect, ZIndex(0), &click);
        assert_eq!(outbox.drain(), vec![Msg::Explorer(Action::TogglePause)]);
    }

    #[test]
    fn xray_button_toggles() {
        let outbox = Outbox::new();
        let state = ExplorerState::new(ClockState::new(0.0));
        let mut scene = UiScene::new(FontSystem::new());
        let rect = Rect::new(0.0, 0.0, 176.0, 44.0);
        let click = UiInput {
            mouse_pos: Some(Vec2::new(80.0, 20.0)),
            events: vec![UiEvent::Click { pos: Vec2::new(80.0, 20.0) }],
            ..UiInput::default()
        };
        scene.frame(xray_button(&state, &theme(), &outbox), rect, ZIndex(0), &click);
        assert_eq!(outbox.drain(), vec![Msg::Explorer(Action::ToggleXray)]);
    }

    #[test]
    fn centered_in_keeps_height() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let block: Element = Container::new().min_size(100.0, 10.0).into();
        let r = centered_in(&block, Rect::new(0.0, 20.0, 400.0, 50.0), &ctx);
        assert_eq!(r, Rect::new(150.0, 20.0, 100.0, 50.0));
    }
}
