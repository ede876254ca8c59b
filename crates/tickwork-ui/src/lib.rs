//! Tickwork UI: small widget toolkit on top of `tickwork-engine`.
//!
//! Widget trees are rebuilt every frame. Each frame the tree is measured,
//! painted into the shared [`DrawList`](tickwork_engine::scene::DrawList)
//! and then handed the frame's [`UiEvent`](event::UiEvent)s; callbacks on
//! widgets report what the user did.
//!
//! ```rust,ignore
//! let input = tracker.update(ctx.input, ctx.input_frame);
//! ui.frame(
//!     Button::new(Label::new("Pause", font, 14.0, ink)).on_click(move || outbox.send(Msg::Pause)),
//!     panel_rect,
//!     ZIndex(100),
//!     &input,
//! );
//! ```

pub mod constraints;
pub mod event;
pub mod input;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build views.
pub mod prelude {
    pub use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::input::{PointerTracker, UiInput};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        button::Button,
        chip::Chip,
        container::Container,
        flex::{Align, Flex, Spacer},
        label::Label,
        slider::Slider,
    };

    pub use tickwork_engine::coords::{Rect, Vec2};
    pub use tickwork_engine::paint::Color;
    pub use tickwork_engine::scene::shapes::Border;
    pub use tickwork_engine::scene::ZIndex;
    pub use tickwork_engine::text::FontId;
}
