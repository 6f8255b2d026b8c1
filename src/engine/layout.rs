//! Fit decision and chart geometry.
//!
//! All rectangles are in container space: origin at the container's top-left
//! corner, y grows downward.

use bevy_math::{Rect, Vec2};

use super::{
    AXIS_GUTTER_WIDTH, LABEL_ROW_HEIGHT, MAX_BARS_WITHOUT_SCROLL, MIN_BAR_WIDTH,
    PAGER_BUTTON_SIZE, PAGER_STRIP_HEIGHT,
};
use crate::model::ChartConfig;

/// Result of fitting `bar_count` bars into the measured container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub container_width: f32,
    pub chart_width: f32,
    pub bar_count: usize,
    pub bar_width: f32,
    pub gap: f32,
    pub total_content_width: f32,
    pub fits_without_scroll: bool,
}

impl BarLayout {
    /// Left edge of bar `index` in content space
    pub fn bar_x(&self, index: usize) -> f32 {
        index as f32 * (self.bar_width + self.gap)
    }

    pub fn bar_center_x(&self, index: usize) -> f32 {
        self.bar_x(index) + self.bar_width * 0.5
    }

    /// Largest scroll offset that still keeps the canvas filled
    pub fn max_scroll_offset(&self) -> f32 {
        (self.total_content_width - self.chart_width).max(0.0)
    }

    /// Index of the bar whose slot contains content-space `x`, if any.
    /// The gap between two bars belongs to neither.
    pub fn bar_at(&self, content_x: f32) -> Option<usize> {
        if content_x < 0.0 || self.bar_count == 0 {
            return None;
        }
        let pitch = self.bar_width + self.gap;
        let index = (content_x / pitch).floor() as usize;
        if index >= self.bar_count {
            return None;
        }
        (content_x - self.bar_x(index) <= self.bar_width).then_some(index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutState {
    /// No usable width yet; nothing is drawn
    Unmeasured,
    /// Measured, but there is nothing to plot
    Empty,
    Ready(BarLayout),
}

impl LayoutState {
    pub fn ready(&self) -> Option<&BarLayout> {
        match self {
            LayoutState::Ready(layout) => Some(layout),
            _ => None,
        }
    }
}

/// Width left for bars once the axis gutter and padding are taken out
pub fn chart_width(container_width: f32, padding: f32) -> f32 {
    container_width - AXIS_GUTTER_WIDTH - 2.0 * padding
}

/// Pager controls depend on the item count only, not on the live fit, so
/// the affordance does not flicker while the container width jitters.
pub fn shows_pagination(bar_count: usize) -> bool {
    bar_count > MAX_BARS_WITHOUT_SCROLL
}

pub fn compute_layout(container_width: f32, bar_count: usize, config: &ChartConfig) -> LayoutState {
    if !container_width.is_finite() || container_width <= 0.0 {
        return LayoutState::Unmeasured;
    }

    let chart_width = chart_width(container_width, config.padding);
    if chart_width <= 0.0 {
        return LayoutState::Unmeasured;
    }

    if bar_count == 0 {
        return LayoutState::Empty;
    }

    let gap = config.gap;
    let n = bar_count as f32;
    let gaps = (n - 1.0) * gap;
    let naive_bar_width = (chart_width - gaps) / n;

    let fits_without_scroll =
        bar_count <= MAX_BARS_WITHOUT_SCROLL && naive_bar_width >= MIN_BAR_WIDTH;
    let bar_width = if fits_without_scroll {
        naive_bar_width.max(MIN_BAR_WIDTH)
    } else {
        MIN_BAR_WIDTH
    };
    let total_content_width = chart_width.max(n * bar_width + gaps);

    LayoutState::Ready(BarLayout {
        container_width,
        chart_width,
        bar_count,
        bar_width,
        gap,
        total_content_width,
        fits_without_scroll,
    })
}

/// Rectangles of every chart region, derived from width, count and config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub container: Rect,
    pub pager_prev: Option<Rect>,
    pub pager_next: Option<Rect>,
    pub gutter: Rect,
    pub canvas: Rect,
    pub label_row: Rect,
}

impl ChartGeometry {
    pub fn new(container_width: f32, bar_count: usize, config: &ChartConfig) -> Self {
        let padding = config.padding;
        let width = container_width.max(0.0);
        let strip = if shows_pagination(bar_count) {
            PAGER_STRIP_HEIGHT
        } else {
            0.0
        };

        let canvas_top = padding + strip;
        let canvas_left = padding + AXIS_GUTTER_WIDTH;
        let canvas_right = (width - padding).max(canvas_left);
        let canvas_bottom = canvas_top + config.height;
        let label_bottom = canvas_bottom + LABEL_ROW_HEIGHT;
        let height = label_bottom + padding;

        let (pager_prev, pager_next) = if strip > 0.0 {
            let y = padding + (strip - PAGER_BUTTON_SIZE) * 0.5;
            let size = Vec2::splat(PAGER_BUTTON_SIZE);
            let prev_min = Vec2::new(canvas_left, y);
            let next_min = Vec2::new(canvas_right - PAGER_BUTTON_SIZE, y);
            (
                Some(Rect::from_corners(prev_min, prev_min + size)),
                Some(Rect::from_corners(next_min, next_min + size)),
            )
        } else {
            (None, None)
        };

        Self {
            container: Rect::new(0.0, 0.0, width, height),
            pager_prev,
            pager_next,
            gutter: Rect::new(padding, canvas_top, canvas_left, canvas_bottom),
            canvas: Rect::new(canvas_left, canvas_top, canvas_right, canvas_bottom),
            label_row: Rect::new(canvas_left, canvas_bottom, canvas_right, label_bottom),
        }
    }

    /// Height of the whole chart, used by hosts to size the container
    pub fn total_height(&self) -> f32 {
        self.container.height()
    }
}
