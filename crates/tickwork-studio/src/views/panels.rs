use tickwork_tips::{TipTask, LOADING_TIP, PRESET_TOPICS};
use tickwork_ui::prelude::*;

use super::{Msg, Outbox};
use crate::theme::Theme;

pub fn header(theme: &Theme) -> Element {
    let p = &theme.palette;
    Flex::column()
        .spacing(6.0)
        .align(Align::Center)
        .child(Label::new("Little Watchmaker: Inside the Clock", theme.font, 34.0, p.amber_900).no_wrap())
        .child(
            Label::new(
                "The secrets of a precision timekeeper, peeled back layer by layer.",
                theme.font,
                16.0,
                p.amber_800,
            )
            .no_wrap(),
        )
        .into()
}

pub fn footer(theme: &Theme) -> Element {
    Flex::column()
        .align(Align::Center)
        .child(
            Label::new(
                "MECHANICAL TIMEKEEPER EXPLORER  \u{2022}  PRECISION AND STABILITY",
                theme.font,
                11.0,
                theme.palette.amber_900.faded(0.3),
            )
            .no_wrap(),
        )
        .into()
}

/// The watchmaker's panel: current tip text and the preset questions.
pub fn tip_panel(tips: &TipTask, theme: &Theme, outbox: &Outbox) -> Element {
    let p = &theme.palette;

    let body = if tips.is_loading() {
        Label::new(LOADING_TIP, theme.font, 15.0, p.amber_800)
    } else {
        Label::new(format!("\u{201C}{}\u{201D}", tips.text()), theme.font, 17.0, p.amber_950)
    };

    let mut column = Flex::column()
        .spacing(14.0)
        .child(Label::new("Watchmaker's Secrets", theme.font, 24.0, p.amber_900))
        .child(
            Container::new()
                .background(Color::white().faded(0.9))
                .border(Border::new(1.0, p.amber_200))
                .corner_radius(24.0)
                .padding_all(20.0)
                .min_size(0.0, 160.0)
                .child(body),
        );

    for (index, topic) in PRESET_TOPICS.iter().enumerate() {
        column = column.child(
            Button::new(Label::new(topic.label, theme.font, 14.0, Color::white()))
                .colors(p.amber_600, p.amber_700, p.amber_800)
                .corner_radius(16.0)
                .padding(Edges::symmetric(14.0, 16.0))
                .on_click(outbox.sender(Msg::Ask(index))),
        );
    }

    column = column.child(
        Label::new(format!("answers from: {}", tips.source_name()), theme.font, 11.0, p.muted).no_wrap(),
    );

    Container::new()
        .background(p.amber_100)
        .border(Border::new(2.0, p.amber_200))
        .corner_radius(32.0)
        .padding_all(28.0)
        .child(column)
        .into()
}

/// Static notes on how to read the model.
pub fn details_panel(theme: &Theme) -> Element {
    let p = &theme.palette;

    let note = |badge: Color, ink: Color, title: &str, text: &str| {
        Flex::column()
            .spacing(6.0)
            .child(
                Flex::row()
                    .spacing(12.0)
                    .align(Align::Center)
                    .child(Container::new().background(badge).corner_radius(10.0).min_size(28.0, 28.0))
                    .child(Label::new(title, theme.font, 16.0, ink).no_wrap()),
            )
            .child(Label::new(text, theme.font, 13.0, p.muted))
    };

    Container::new()
        .background(Color::white())
        .border(Border::new(2.0, p.emerald_400))
        .corner_radius(32.0)
        .padding_all(28.0)
        .child(
            Flex::column()
                .spacing(16.0)
                .child(Label::new("Part Details", theme.font, 24.0, p.emerald_900))
                .child(note(
                    p.emerald_100,
                    p.emerald_900,
                    "Layered touch",
                    "Point straight at the inner second wheel, or peek at it through the gaps in the hour wheel.",
                ))
                .child(note(
                    p.blue_100,
                    p.blue_900,
                    "Precise ratios",
                    "Every wheel's tooth count is worked out exactly so the hands keep true time.",
                )),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tickwork_engine::scene::{DrawCmd, ZIndex};
    use tickwork_engine::text::FontSystem;
    use tickwork_tips::{OfflineSource, GREETING};

    use super::*;

    fn texts(scene: &mut UiScene) -> Vec<String> {
        scene
            .draw_list
            .iter_in_paint_order()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    fn task(rt: &tokio::runtime::Runtime) -> TipTask {
        TipTask::new(rt.handle().clone(), Arc::new(OfflineSource))
    }

    #[test]
    fn tip_panel_shows_greeting_then_loading() {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let mut tips = task(&rt);
        let theme = Theme::new(FontId::from_index(0));
        let outbox = Outbox::new();
        let rect = Rect::new(0.0, 0.0, 380.0, 520.0);

        let mut scene = UiScene::new(FontSystem::new());
        scene.frame(tip_panel(&tips, &theme, &outbox), rect, ZIndex(0), &UiInput::default());
        assert!(texts(&mut scene).iter().any(|t| t.contains(GREETING)));

        tips.request(PRESET_TOPICS[0].prompt);
        scene.clear();
        scene.frame(tip_panel(&tips, &theme, &outbox), rect, ZIndex(0), &UiInput::default());
        assert!(texts(&mut scene).iter().any(|t| t == LOADING_TIP));
    }

    #[test]
    fn preset_buttons_ask_their_topic() {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let tips = task(&rt);
        let theme = Theme::new(FontId::from_index(0));
        let outbox = Outbox::new();
        let mut scene = UiScene::new(FontSystem::new());
        let rect = Rect::new(0.0, 0.0, 380.0, 520.0);

        // Sweep clicks down the middle of the panel; only the two preset
        // buttons react.
        let mut asked = Vec::new();
        for y in (0..520).step_by(4) {
            let pos = Vec2::new(190.0, y as f32);
            let click = UiInput { mouse_pos: Some(pos), events: vec![UiEvent::Click { pos }], ..UiInput::default() };
            scene.clear();
            scene.frame(tip_panel(&tips, &theme, &outbox), rect, ZIndex(0), &click);
            asked.extend(outbox.drain());
        }
        assert!(asked.contains(&Msg::Ask(0)));
        assert!(asked.contains(&Msg::Ask(1)));
        assert!(asked.iter().all(|m| matches!(m, Msg::Ask(_))));
    }
}
