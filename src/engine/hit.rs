//! Priority-ordered hit testing.
//!
//! Pager buttons, then label cells, then bar shapes are tested before the
//! background, so a press on a bar never reaches the dismiss handler.

use bevy_math::{Rect, Vec2};

use super::MIN_BAR_HIT_HEIGHT;
use super::layout::{BarLayout, ChartGeometry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerDirection {
    Prev,
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Pager(PagerDirection),
    Label(usize),
    Bar(usize),
    Background,
    Outside,
}

/// Everything the hit test needs, captured at press time
pub struct HitScene<'a> {
    pub geometry: &'a ChartGeometry,
    pub layout: Option<&'a BarLayout>,
    pub scroll_offset: f32,
    /// Current animated height of each bar
    pub bar_heights: &'a [f32],
}

pub fn hit_test(scene: &HitScene<'_>, point: Vec2) -> HitTarget {
    let geo = scene.geometry;
    if !geo.container.contains(point) {
        return HitTarget::Outside;
    }

    if geo.pager_prev.is_some_and(|r| r.contains(point)) {
        return HitTarget::Pager(PagerDirection::Prev);
    }
    if geo.pager_next.is_some_and(|r| r.contains(point)) {
        return HitTarget::Pager(PagerDirection::Next);
    }

    let Some(layout) = scene.layout else {
        return HitTarget::Background;
    };

    // Labels and bars are clipped to the canvas' horizontal span
    let in_span = point.x >= geo.canvas.min.x && point.x <= geo.canvas.max.x;
    if !in_span {
        return HitTarget::Background;
    }
    let content_x = point.x - geo.canvas.min.x + scene.scroll_offset;

    if geo.label_row.contains(point) {
        if let Some(index) = layout.bar_at(content_x) {
            return HitTarget::Label(index);
        }
    }

    if geo.canvas.contains(point) {
        if let Some(index) = layout.bar_at(content_x) {
            let height = scene.bar_heights.get(index).copied().unwrap_or(0.0);
            if bar_hit_rect(geo.canvas, height).contains(point) {
                return HitTarget::Bar(index);
            }
        }
    }

    HitTarget::Background
}

/// Vertical extent of a bar's touch target: its drawn rect, extended upward
/// so short and zero-height bars stay pressable
fn bar_hit_rect(canvas: Rect, height: f32) -> Rect {
    let touch = height.max(MIN_BAR_HIT_HEIGHT).min(canvas.height());
    Rect::new(canvas.min.x, canvas.max.y - touch, canvas.max.x, canvas.max.y)
}
