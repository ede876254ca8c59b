use std::time::Instant;

use tickwork_engine::core::{App, AppControl, FrameCtx};
use tickwork_engine::render::SceneRenderer;
use tickwork_engine::text::{FontId, FontSystem};
use tickwork_engine::time::IntervalTimer;
use tickwork_engine::window::CursorIcon;
use tickwork_mech::{Action, ClockState, ExplorerState, PartId, WallClock};
use tickwork_tips::{TipTask, PRESET_TOPICS};
use tickwork_ui::prelude::*;

use crate::config::StudioConfig;
use crate::keys::key_messages;
use crate::layout::PageLayout;
use crate::theme::Theme;
use crate::transform::DialTransform;
use crate::views::controls::{centered_in, part_chips, transport, xray_button};
use crate::views::dial::{hovered_part, paint_dial};
use crate::views::panels::{details_panel, footer, header, tip_panel};
use crate::views::tooltip::{tooltip, tooltip_rect, TooltipFloat};
use crate::views::{Msg, Outbox};

/// Most ticks replayed in one frame after a stall; the rest are dropped.
const MAX_CATCH_UP: u32 = 10;

/// The explorer window: owns the model, the tip task and the UI scene.
pub struct StudioApp {
    // Model
    explorer: ExplorerState,
    wall:     Box<dyn WallClock>,
    timer:    IntervalTimer,
    tips:     TipTask,

    // Presentation
    theme:    Theme,
    scene:    UiScene,
    renderer: SceneRenderer,
    pointer:  PointerTracker,
    outbox:   Outbox,
    tooltip:  TooltipFloat,
    cursor:   CursorIcon,
    started:  Instant,
}

impl StudioApp {
    pub fn new(
        config: &StudioConfig,
        tips: TipTask,
        fonts: FontSystem,
        font: FontId,
        wall: Box<dyn WallClock>,
    ) -> Self {
        let mut clock = match config.start_at {
            Some(t) => ClockState::new(t),
            None => ClockState::from_wall(wall.as_ref()),
        };
        clock.set_speed(config.speed);

        let mut explorer = ExplorerState::new(clock);
        explorer.xray = config.xray;

        let now = Instant::now();
        let mut timer = IntervalTimer::new(config.tick_period);
        timer.start(now);
        log::info!(
            "clock starts at {:.1}s past twelve, ticking every {:?} at {}x",
            explorer.clock.time(),
            timer.period(),
            explorer.clock.speed(),
        );

        Self {
            explorer,
            wall,
            timer,
            tips,
            theme: Theme::new(font),
            scene: UiScene::new(fonts),
            renderer: SceneRenderer::new(),
            pointer: PointerTracker::new(),
            outbox: Outbox::new(),
            tooltip: TooltipFloat::default(),
            cursor: CursorIcon::Default,
            started: now,
        }
    }

    /// Applies the timer periods elapsed by `now`.
    fn advance(&mut self, now: Instant) -> u32 {
        let due = self.timer.poll(now);
        let ticks = due.min(MAX_CATCH_UP);
        if due > ticks {
            log::debug!("frame stalled; dropping {} of {due} ticks", due - ticks);
        }
        let period = self.timer.period().as_secs_f64();
        for _ in 0..ticks {
            self.explorer.clock.tick(period);
        }
        ticks
    }

    /// Applies one frame of messages. Returns `true` when the user asked to
    /// quit.
    ///
    /// Hover is recomputed each frame: a chip under the pointer wins over
    /// the dial, and no source at all clears it.
    fn handle(&mut self, msgs: Vec<Msg>, dial_hover: Option<PartId>) -> bool {
        let chip_hover = msgs.iter().find_map(|m| match m {
            Msg::ChipHovered(id) => Some(*id),
            _ => None,
        });
        let hovered = chip_hover.or(dial_hover);
        if hovered != self.explorer.hovered {
            self.explorer.apply(Action::Hover(hovered));
        }

        let mut quit = false;
        for msg in msgs {
            match msg {
                Msg::Explorer(action) => self.explorer.apply(action),
                Msg::Sync => {
                    let now = self.wall.seconds_into_period();
                    self.explorer.apply(Action::Sync { now });
                }
                Msg::Ask(index) => match PRESET_TOPICS.get(index) {
                    Some(topic) => self.tips.request(topic.prompt),
                    None => log::warn!("no preset tip topic #{index}"),
                },
                Msg::ChipHovered(_) => {}
                Msg::Quit => quit = true,
            }
        }
        quit
    }

    /// Records the whole page into the scene's draw list.
    fn paint(&mut self, layout: &PageLayout, dial: &DialTransform, input: &UiInput, now: f32) {
        let theme = self.theme;
        let p = theme.palette;

        // ── Cards and dial ────────────────────────────────────────────────
        let mut z = {
            let mut painter = self.scene.painter(ZIndex(0), input);
            painter.fill_rounded_rect(layout.clock_card, 24.0, p.card, Some(Border::new(4.0, p.card_edge)));
            painter.fill_rounded_rect(layout.controls, 24.0, p.amber_50, Some(Border::new(2.0, p.amber_100)));
            paint_dial(&mut painter, dial, &self.explorer, &theme);
            painter.z()
        };

        // ── Widgets ───────────────────────────────────────────────────────
        z = self.scene.frame(header(&theme), layout.header, z, input);
        z = self.scene.frame(footer(&theme), layout.footer, z, input);

        let chips = part_chips(&self.explorer, &theme, &self.outbox);
        let chips_rect = centered_in(&chips, layout.chips, &LayoutCtx { fonts: &self.scene.font_system });
        z = self.scene.frame(chips, chips_rect, z, input);

        let bar = transport(&self.explorer, &theme, &self.outbox);
        let bar_rect = centered_in(&bar, layout.controls, &LayoutCtx { fonts: &self.scene.font_system });
        z = self.scene.frame(bar, bar_rect, z, input);

        z = self.scene.frame(xray_button(&self.explorer, &theme, &self.outbox), layout.xray_button, z, input);
        z = self.scene.frame(tip_panel(&self.tips, &theme, &self.outbox), layout.tip_panel, z, input);
        z = self.scene.frame(details_panel(&theme), layout.details, z, input);

        // ── Tooltip, above everything ─────────────────────────────────────
        let spec = self.explorer.tooltip();
        if let (Some(spec), Some((offset, opacity))) = (spec, self.tooltip.update(spec, now)) {
            let card = tooltip(spec, &theme, opacity);
            let rect = tooltip_rect(&card, layout.dial, offset, &LayoutCtx { fonts: &self.scene.font_system });
            self.scene.frame(card, rect, z, input);
        }
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.advance(ctx.time.now);
        if self.tips.poll() {
            log::debug!("tip panel updated");
        }

        let input = self.pointer.update(ctx.input, ctx.input_frame);
        let layout = PageLayout::compute(ctx.window.logical_size());
        let dial = DialTransform::fit(layout.dial);

        self.scene.clear();
        let now = ctx.time.now.saturating_duration_since(self.started).as_secs_f32();
        self.paint(&layout, &dial, &input, now);

        let mut msgs = key_messages(ctx.input_frame, ctx.input.modifiers);
        msgs.extend(self.outbox.drain());

        let over_button = input.mouse_pos.is_some_and(|p| layout.xray_button.contains(p));
        let dial_hover = if over_button || self.pointer.is_dragging() {
            None
        } else {
            hovered_part(&dial, input.mouse_pos)
        };
        if self.handle(msgs, dial_hover) {
            log::info!("quit requested");
            ctx.exit();
        }

        let cursor = if self.explorer.hovered.is_some() { CursorIcon::Help } else { CursorIcon::Default };
        if cursor != self.cursor {
            ctx.window.set_cursor(cursor);
            self.cursor = cursor;
        }

        // ── Render ────────────────────────────────────────────────────────
        let renderer = &mut self.renderer;
        let scene = &mut self.scene;
        ctx.render(self.theme.palette.page, |rctx, target| {
            renderer.render(rctx, target, &mut scene.draw_list, &scene.font_system);
        })
    }

    fn on_exit(&mut self) {
        self.timer.stop();
        log::info!(
            "stopping at {:.1}s past twelve after {:.0?}",
            self.explorer.clock.time(),
            self.started.elapsed(),
        );
    }
}
