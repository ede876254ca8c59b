use tickwork_engine::coords::{Rect, Vec2};

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Fill the cross axis.
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    fn main(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    #[inline]
    fn cross(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.y,
            Axis::Vertical => v.x,
        }
    }

    #[inline]
    fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(main, cross),
            Axis::Vertical => Vec2::new(cross, main),
        }
    }

    fn padding(self, e: Edges) -> (f32, f32) {
        match self {
            Axis::Horizontal => (e.h(), e.v()),
            Axis::Vertical => (e.v(), e.h()),
        }
    }
}

/// Row or column of children.
///
/// Children keep their measured main-axis size; flexible children (see
/// [`Spacer`]) split whatever is left.
///
/// ```rust,ignore
/// Flex::row()
///     .spacing(8.0)
///     .child(title)
///     .child(Spacer)
///     .child(xray_button)
/// ```
pub struct Flex {
    axis: Axis,
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
    align: Align,
}

impl Flex {
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    fn new(axis: Axis) -> Self {
        Self { axis, children: Vec::new(), spacing: 0.0, padding: Edges::default(), align: Align::Stretch }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }

    // ── layout ────────────────────────────────────────────────────────────

    fn child_constraints(&self, inner_cross: f32) -> Constraints {
        let min_cross = if self.align == Align::Stretch && inner_cross.is_finite() {
            inner_cross
        } else {
            0.0
        };
        Constraints {
            min: self.axis.pack(0.0, min_cross),
            max: self.axis.pack(f32::INFINITY, inner_cross),
        }
    }

    fn spacing_total(&self) -> f32 {
        self.children.len().saturating_sub(1) as f32 * self.spacing
    }

    fn total_flex(&self) -> f32 {
        self.children.iter().map(Element::flex).filter(|f| *f > 0.0).sum()
    }

    /// Child rects inside `rect`, in child order.
    fn layout(&self, rect: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let axis = self.axis;
        let inner = inset_rect(rect, self.padding);
        let inner_main = axis.main(inner.size);
        let inner_cross = axis.cross(inner.size);
        let c = self.child_constraints(inner_cross);

        let mut sizes: Vec<Vec2> = self.children.iter().map(|ch| ch.measure(c, ctx)).collect();

        let total_flex = self.total_flex();
        if total_flex > 0.0 {
            let fixed: f32 = sizes
                .iter()
                .zip(&self.children)
                .filter(|(_, ch)| ch.flex() <= 0.0)
                .map(|(s, _)| axis.main(*s))
                .sum();
            let remaining = (inner_main - fixed - self.spacing_total()).max(0.0);
            for (s, ch) in sizes.iter_mut().zip(&self.children) {
                let f = ch.flex();
                if f > 0.0 {
                    *s = axis.pack(remaining * f / total_flex, axis.cross(*s));
                }
            }
        }

        let cross_origin = axis.cross(inner.origin);
        let mut cursor = axis.main(inner.origin);
        sizes
            .into_iter()
            .map(|s| {
                let free = inner_cross - axis.cross(s);
                let offset = match self.align {
                    Align::Stretch | Align::Start => 0.0,
                    Align::Center => free * 0.5,
                    Align::End => free,
                };
                let origin = axis.pack(cursor, cross_origin + offset);
                cursor += axis.main(s) + self.spacing;
                Rect::from_origin_size(origin, s)
            })
            .collect()
    }
}

impl Widget for Flex {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let axis = self.axis;
        let (pad_main, pad_cross) = axis.padding(self.padding);
        let avail_main = axis.main(constraints.max);
        let avail_cross = axis.cross(constraints.max);

        let c = self.child_constraints((avail_cross - pad_cross).max(0.0));
        let sizes: Vec<Vec2> = self.children.iter().map(|ch| ch.measure(c, ctx)).collect();

        let main = if self.total_flex() > 0.0 && avail_main.is_finite() {
            avail_main
        } else {
            sizes.iter().map(|s| axis.main(*s)).sum::<f32>() + self.spacing_total() + pad_main
        };
        let cross = if self.align == Align::Stretch && avail_cross.is_finite() {
            avail_cross
        } else {
            sizes.iter().map(|s| axis.cross(*s)).fold(0.0f32, f32::max) + pad_cross
        };

        constraints.constrain(axis.pack(main, cross))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        for (child, r) in self.children.iter().zip(self.layout(rect, &ctx)) {
            child.paint(painter, r);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let rects = self.layout(rect, ctx);
        for (child, r) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, r, ctx).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

/// Flexible empty space inside a [`Flex`].
pub struct Spacer;

impl Widget for Spacer {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(Vec2::zero())
    }

    fn paint(&self, _painter: &mut Painter, _rect: Rect) {}

    fn flex(&self) -> f32 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_util::{fonts, Block};

    fn block(w: f32, h: f32) -> Block {
        Block(Vec2::new(w, h))
    }

    // ── row ───────────────────────────────────────────────────────────────

    #[test]
    fn row_places_children_left_to_right() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let row = Flex::row().spacing(5.0).align(Align::Start).child(block(10.0, 4.0)).child(block(20.0, 8.0));
        let rects = row.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx);
        assert_eq!(rects, vec![Rect::new(0.0, 0.0, 10.0, 4.0), Rect::new(15.0, 0.0, 20.0, 8.0)]);
    }

    #[test]
    fn spacer_pushes_last_child_to_the_end() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let row = Flex::row()
            .padding(Edges::all(2.0))
            .align(Align::Center)
            .child(block(10.0, 4.0))
            .child(Spacer)
            .child(block(20.0, 4.0));
        let rects = row.layout(Rect::new(0.0, 0.0, 104.0, 12.0), &ctx);
        assert_eq!(rects[2], Rect::new(82.0, 4.0, 20.0, 4.0));
        assert_eq!(rects[1].size.x, 70.0);
    }

    #[test]
    fn row_with_spacer_measures_full_width() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let row = Flex::row().align(Align::Start).child(block(10.0, 4.0)).child(Spacer);
        let size = row.measure(Constraints::loose(Vec2::new(300.0, 50.0)), &ctx);
        assert_eq!(size, Vec2::new(300.0, 4.0));
    }

    // ── column ────────────────────────────────────────────────────────────

    #[test]
    fn column_stretches_children_across() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let col = Flex::column().spacing(4.0).child(block(10.0, 6.0)).child(block(30.0, 6.0));
        let rects = col.layout(Rect::new(10.0, 20.0, 50.0, 100.0), &ctx);
        assert_eq!(rects, vec![Rect::new(10.0, 20.0, 50.0, 6.0), Rect::new(10.0, 30.0, 50.0, 6.0)]);

        let size = col.measure(Constraints::loose(Vec2::new(50.0, f32::INFINITY)), &ctx);
        assert_eq!(size, Vec2::new(50.0, 16.0));
    }
}
