use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// A run of text laid out from its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub origin: Vec2,
    /// Lines break at this width; `None` keeps one line.
    pub max_width: Option<f32>,
}

impl TextCmd {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) -> Self {
        Self { text: text.into(), font, size, color, origin, max_width: None }
    }

    #[inline]
    pub fn wrap_at(mut self, max_width: Option<f32>) -> Self {
        self.max_width = max_width;
        self
    }
}

impl DrawList {
    /// Records `cmd` unless it has nothing to show.
    pub fn push_text(&mut self, z: ZIndex, cmd: TextCmd) {
        if cmd.text.is_empty() || cmd.color.a <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::Text(cmd));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_invisible_text_is_skipped() {
        let font = FontId::from_index(0);
        let mut list = DrawList::new();
        list.push_text(ZIndex(0), TextCmd::new("", font, 12.0, Color::white(), Vec2::zero()));
        list.push_text(ZIndex(0), TextCmd::new("hi", font, 12.0, Color::transparent(), Vec2::zero()));
        assert!(list.is_empty());

        list.push_text(ZIndex(0), TextCmd::new("hi", font, 12.0, Color::white(), Vec2::zero()).wrap_at(Some(40.0)));
        match &list.items()[0].cmd {
            DrawCmd::Text(t) => assert_eq!(t.max_width, Some(40.0)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
