//! Draw surface - minimal primitive interface between the draw pass and
//! any concrete backend.
//!
//! The renderer emits world-space (canvas y-down) primitives through
//! `DrawSurface`; `render.rs` presents a recorded pass with Bevy
//! sprites/meshes/text, and tests assert against the same recording.

use bevy::prelude::*;

/// Stroke style for outlines. Dashed is used only by structure previews.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// The primitive set a backend must provide. Coordinates are world
/// pixels in canvas convention; `z` ordering is the call order.
pub trait DrawSurface {
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32, style: LineStyle);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32);
    fn fill_rect(&mut self, center: Vec2, size: Vec2, color: Color);
    fn text(&mut self, center: Vec2, text: &str, font_size: f32, color: Color);
}

/// One recorded primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    FillPolygon { points: Vec<Vec2>, color: Color },
    StrokePolygon { points: Vec<Vec2>, color: Color, width: f32, style: LineStyle },
    FillCircle { center: Vec2, radius: f32, color: Color },
    StrokeCircle { center: Vec2, radius: f32, color: Color, width: f32 },
    FillRect { center: Vec2, size: Vec2, color: Color },
    Text { center: Vec2, text: String, font_size: f32, color: Color },
}

/// Recording backend: collects calls in issue order. The Bevy presenter
/// replays a log into entities; tests assert on it directly.
#[derive(Default, Debug)]
pub struct CallLog {
    pub calls: Vec<DrawCall>,
}

impl CallLog {
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Count of filled circles, for glyph assertions.
    pub fn fill_circles(&self) -> usize {
        self.calls.iter()
            .filter(|c| matches!(c, DrawCall::FillCircle { .. }))
            .count()
    }

    /// Count of filled polygons (terrain fills, walls).
    pub fn fill_polygons(&self) -> usize {
        self.calls.iter()
            .filter(|c| matches!(c, DrawCall::FillPolygon { .. }))
            .count()
    }

    /// Count of stroked polygons matching a style.
    pub fn strokes(&self, style: LineStyle) -> usize {
        self.calls.iter()
            .filter(|c| matches!(c, DrawCall::StrokePolygon { style: s, .. } if *s == style))
            .count()
    }

    /// All recorded text labels.
    pub fn texts(&self) -> Vec<&str> {
        self.calls.iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for CallLog {
    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(DrawCall::FillPolygon { points: points.to_vec(), color });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32, style: LineStyle) {
        self.calls.push(DrawCall::StrokePolygon {
            points: points.to_vec(),
            color,
            width,
            style,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.calls.push(DrawCall::StrokeCircle { center, radius, color, width });
    }

    fn fill_rect(&mut self, center: Vec2, size: Vec2, color: Color) {
        self.calls.push(DrawCall::FillRect { center, size, color });
    }

    fn text(&mut self, center: Vec2, text: &str, font_size: f32, color: Color) {
        self.calls.push(DrawCall::Text {
            center,
            text: text.to_string(),
            font_size,
            color,
        });
    }
}
