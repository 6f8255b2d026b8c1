//! Headless bar-chart engine.
//!
//! `BarChart` owns the data, the derived layout and all interaction state.
//! It never touches the renderer: Bevy systems feed it measurements, time and
//! presses, and read back rectangles to draw.
//!
//! - `layout`: fit decision and region geometry
//! - `animation`: staggered per-bar grow animation
//! - `scroll`: shared horizontal offset and paging
//! - `tooltip`: selection state machine and placement
//! - `hit`: priority-ordered press resolution

pub mod animation;
pub mod hit;
pub mod layout;
pub mod scroll;
pub mod tooltip;

use std::sync::Arc;
use std::time::Duration;

use bevy::log::{debug, trace};
use bevy_math::{Rect, Vec2};

use crate::model::{BarDatum, ChartConfig};
use animation::{AnimationController, animated_height, animated_y, series_max, value_ratio};
pub use hit::{HitTarget, PagerDirection};
use hit::{HitScene, hit_test};
pub use layout::{BarLayout, ChartGeometry, LayoutState};
use layout::{compute_layout, shows_pagination};
use scroll::ScrollController;
pub use tooltip::TooltipState;
use tooltip::{TooltipMachine, place_tooltip, pop};

pub const AXIS_GUTTER_WIDTH: f32 = 40.0;
pub const MIN_BAR_WIDTH: f32 = 24.0;
pub const MAX_BARS_WITHOUT_SCROLL: usize = 7;
/// Share of the visible width moved by one prev/next step
pub const PAGE_FRACTION: f32 = 0.7;
pub const STAGGER_DELAY: Duration = Duration::from_millis(60);
/// Headroom above the tallest bar
pub const BAR_TOP_INSET: f32 = 20.0;
pub const LABEL_ROW_HEIGHT: f32 = 28.0;
pub const PAGER_STRIP_HEIGHT: f32 = 32.0;
pub const PAGER_BUTTON_SIZE: f32 = 28.0;
pub const MIN_BAR_HIT_HEIGHT: f32 = 12.0;
pub const TOOLTIP_WIDTH: f32 = 160.0;
pub const TOOLTIP_HEIGHT: f32 = 56.0;
pub const TOOLTIP_GAP: f32 = 8.0;
pub const TOOLTIP_MIN_TOP: f32 = 4.0;
pub const TOOLTIP_MIN_SCALE: f32 = 0.8;
pub const TOOLTIP_DURATION: Duration = Duration::from_millis(150);

pub type PressCallback = Arc<dyn Fn(usize, &BarDatum) + Send + Sync>;

/// What a press ended up doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    Selected(usize),
    Paged(PagerDirection),
    Dismissed,
    Ignored,
}

/// Everything needed to draw the tooltip this frame
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
    pub index: usize,
    /// Top-left corner in container space
    pub position: Vec2,
    pub size: Vec2,
    pub opacity: f32,
    pub scale: f32,
    pub title: String,
    pub value_text: String,
}

/// One y-axis tick: its value and container-space y
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f32,
    pub y: f32,
}

pub struct BarChart {
    data: Vec<BarDatum>,
    config: ChartConfig,
    container_width: f32,
    layout: LayoutState,
    geometry: ChartGeometry,
    max_value: f32,
    animation: AnimationController,
    scroll: ScrollController,
    tooltip: TooltipMachine,
    on_bar_press: Option<PressCallback>,
    revision: u64,
}

impl BarChart {
    pub fn new(config: ChartConfig) -> Self {
        let animation = AnimationController::new(
            0,
            Duration::from_millis(config.animation_duration_ms),
            STAGGER_DELAY,
            config.loading,
        );
        let geometry = ChartGeometry::new(0.0, 0, &config);
        Self {
            data: vec![],
            config,
            container_width: 0.0,
            layout: LayoutState::Unmeasured,
            geometry,
            max_value: 1.0,
            animation,
            scroll: ScrollController::new(),
            tooltip: TooltipMachine::new(TOOLTIP_DURATION),
            on_bar_press: None,
            revision: 0,
        }
    }

    pub fn with_data(mut self, data: Vec<BarDatum>) -> Self {
        self.set_data(data);
        self
    }

    pub fn with_press_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, &BarDatum) + Send + Sync + 'static,
    {
        self.on_bar_press(f);
        self
    }

    pub fn on_bar_press<F>(&mut self, f: F)
    where
        F: Fn(usize, &BarDatum) + Send + Sync + 'static,
    {
        self.on_bar_press = Some(Arc::new(f));
    }

    /* -------------------- INPUTS -------------------- */

    /// Replace the series. Scroll and selection always reset; the entrance
    /// animation restarts when the number of bars changes.
    pub fn set_data(&mut self, data: Vec<BarDatum>) {
        let len_changed = data.len() != self.data.len();
        self.data = data;
        self.max_value = series_max(self.data.iter().map(BarDatum::magnitude));
        self.scroll.reset();
        self.tooltip.clear();
        if len_changed {
            self.animation.restart(self.data.len());
        }
        self.relayout();
        debug!(
            "bar chart data set: {} bars, max {}, animation restarted: {}",
            self.data.len(),
            self.max_value,
            len_changed
        );
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
        if self.animation.set_loading(loading) {
            if loading {
                self.tooltip.clear();
            }
            debug!("bar chart loading: {}", loading);
        }
    }

    pub fn set_config(&mut self, config: ChartConfig) {
        let loading = config.loading;
        self.animation
            .set_duration(Duration::from_millis(config.animation_duration_ms));
        self.config = config;
        self.set_loading(loading);
        self.relayout();
        self.reanchor_tooltip();
    }

    /// Feed the measured container width. Returns true if the layout changed.
    pub fn measure(&mut self, container_width: f32) -> bool {
        // Non-finite widths are unmeasured
        let container_width = if container_width.is_finite() {
            container_width
        } else {
            0.0
        };
        if container_width == self.container_width {
            return false;
        }
        self.container_width = container_width;
        self.relayout();
        self.reanchor_tooltip();
        true
    }

    /// Advance bar and tooltip animations by `dt`
    pub fn tick(&mut self, dt: Duration) {
        self.animation.tick(dt);
        self.tooltip.tick(dt);
        if self.tooltip.drop_if_stale(self.data.len()) {
            debug!("tooltip dropped: selection past end of {} bars", self.data.len());
        }
    }

    /// Resolve a press at `point` (container space) and act on it.
    /// Bars and labels are claimed before the background can dismiss.
    pub fn press(&mut self, point: Vec2) -> PressOutcome {
        // Anchor against the offset in effect at press time
        let offset = self.scroll.offset();
        let heights = self.bar_heights();
        let scene = HitScene {
            geometry: &self.geometry,
            layout: self.layout.ready(),
            scroll_offset: offset,
            bar_heights: &heights,
        };
        let target = hit_test(&scene, point);
        trace!("press at {:?} hit {:?}", point, target);

        match target {
            HitTarget::Pager(PagerDirection::Prev) => {
                self.prev();
                PressOutcome::Paged(PagerDirection::Prev)
            }
            HitTarget::Pager(PagerDirection::Next) => {
                self.next();
                PressOutcome::Paged(PagerDirection::Next)
            }
            HitTarget::Bar(index) | HitTarget::Label(index) => self.select(index, offset),
            HitTarget::Background => {
                if self.tooltip.hide() {
                    PressOutcome::Dismissed
                } else {
                    PressOutcome::Ignored
                }
            }
            HitTarget::Outside => PressOutcome::Ignored,
        }
    }

    /// Same as tapping bar `index` or its label
    pub fn press_bar(&mut self, index: usize) -> PressOutcome {
        let offset = self.scroll.offset();
        self.select(index, offset)
    }

    /// Hide the tooltip with its fade, e.g. when the caller switches timeframe
    pub fn dismiss_tooltip(&mut self) -> bool {
        self.tooltip.hide()
    }

    pub fn scroll_to_offset(&mut self, x: f32) -> f32 {
        self.scroll.scroll_to_offset(x)
    }

    pub fn scroll_by(&mut self, dx: f32) -> f32 {
        self.scroll.scroll_by(dx)
    }

    pub fn next(&mut self) -> f32 {
        self.scroll.next()
    }

    pub fn prev(&mut self) -> f32 {
        self.scroll.prev()
    }

    /* -------------------- VIEWS -------------------- */

    pub fn data(&self) -> &[BarDatum] {
        &self.data
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn layout(&self) -> LayoutState {
        self.layout
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    /// Bumped whenever the set of things to draw changes shape
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn max_scroll_offset(&self) -> f32 {
        self.scroll.max_offset()
    }

    pub fn can_prev(&self) -> bool {
        self.scroll.can_prev()
    }

    pub fn can_next(&self) -> bool {
        self.scroll.can_next()
    }

    /// Translation of the label layer; always the negated canvas offset
    pub fn label_translation(&self) -> f32 {
        self.scroll.label_translation()
    }

    pub fn pagination_visible(&self) -> bool {
        shows_pagination(self.data.len())
    }

    pub fn is_loading(&self) -> bool {
        self.animation.is_loading()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.tooltip.selected_index()
    }

    pub fn tooltip_state(&self) -> TooltipState {
        self.tooltip.state()
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    pub fn max_bar_height(&self) -> f32 {
        (self.config.height - BAR_TOP_INSET).max(0.0)
    }

    pub fn progress(&self, index: usize) -> f32 {
        self.animation.progress(index)
    }

    /// Fully grown height of bar `index`
    pub fn target_height(&self, index: usize) -> f32 {
        self.data
            .get(index)
            .map(|d| value_ratio(d.magnitude(), self.max_value) * self.max_bar_height())
            .unwrap_or(0.0)
    }

    /// Height of bar `index` at its current animation progress
    pub fn bar_height(&self, index: usize) -> f32 {
        animated_height(self.target_height(index), self.progress(index))
    }

    pub fn bar_heights(&self) -> Vec<f32> {
        (0..self.data.len()).map(|i| self.bar_height(i)).collect()
    }

    /// On-screen rect of bar `index` in container space, before canvas clipping
    pub fn bar_rect(&self, index: usize) -> Option<Rect> {
        let layout = self.layout.ready()?;
        if index >= layout.bar_count {
            return None;
        }
        let canvas = self.geometry.canvas;
        let x = canvas.min.x + layout.bar_x(index) - self.scroll.offset();
        let top = canvas.min.y
            + animated_y(
                self.config.height,
                self.target_height(index),
                self.progress(index),
            );
        Some(Rect::new(x, top, x + layout.bar_width, canvas.max.y))
    }

    /// Center of the label under bar `index` in container space
    pub fn label_center(&self, index: usize) -> Option<Vec2> {
        let layout = self.layout.ready()?;
        if index >= layout.bar_count {
            return None;
        }
        let row = self.geometry.label_row;
        Some(Vec2::new(
            row.min.x + layout.bar_center_x(index) + self.scroll.label_translation(),
            row.center().y,
        ))
    }

    /// Zero, half and full scale of the series
    pub fn axis_ticks(&self) -> Vec<AxisTick> {
        if self.layout.ready().is_none() {
            return vec![];
        }
        let baseline = self.geometry.canvas.max.y;
        let span = self.max_bar_height();
        [0.0, 0.5, 1.0]
            .into_iter()
            .map(|f| AxisTick {
                value: self.max_value * f,
                y: baseline - span * f,
            })
            .collect()
    }

    pub fn tooltip_view(&self) -> Option<TooltipView> {
        let (index, anchor, progress) = match self.tooltip.state() {
            TooltipState::Hidden => return None,
            TooltipState::Showing {
                index,
                anchor,
                progress,
            }
            | TooltipState::Hiding {
                index,
                anchor,
                progress,
            } => (index, anchor, progress),
        };
        // Selection can outlive a shrinking series until the next tick
        let datum = self.data.get(index)?;
        let (opacity, scale) = pop(progress);
        let mut value_text = format_value(datum.value);
        if let Some(suffix) = &self.config.value_suffix {
            value_text.push_str(suffix);
        }
        Some(TooltipView {
            index,
            position: place_tooltip(anchor, self.container_width, self.config.padding),
            size: Vec2::new(TOOLTIP_WIDTH, TOOLTIP_HEIGHT),
            opacity,
            scale,
            title: datum.title().to_string(),
            value_text,
        })
    }

    /* -------------------- INTERNALS -------------------- */

    fn relayout(&mut self) {
        let n = self.data.len();
        self.layout = compute_layout(self.container_width, n, &self.config);
        self.geometry = ChartGeometry::new(self.container_width, n, &self.config);
        match &self.layout {
            LayoutState::Ready(layout) => {
                self.scroll
                    .set_extent(layout.chart_width, layout.total_content_width);
                debug!(
                    "bar layout: width {} chart {} bar {} content {} fits {}",
                    layout.container_width,
                    layout.chart_width,
                    layout.bar_width,
                    layout.total_content_width,
                    layout.fits_without_scroll
                );
            }
            other => {
                self.scroll.set_extent(0.0, 0.0);
                trace!("bar layout: {:?}", other);
            }
        }
        self.revision += 1;
    }

    fn anchor_for(&self, index: usize, offset: f32) -> Option<Vec2> {
        let layout = self.layout.ready()?;
        if index >= layout.bar_count {
            return None;
        }
        let canvas = self.geometry.canvas;
        let x = canvas.min.x + layout.bar_center_x(index) - offset;
        let y = canvas.min.y
            + animated_y(
                self.config.height,
                self.target_height(index),
                self.progress(index),
            );
        Some(Vec2::new(x, y))
    }

    fn select(&mut self, index: usize, offset: f32) -> PressOutcome {
        let Some(anchor) = self.anchor_for(index, offset) else {
            return PressOutcome::Ignored;
        };
        self.tooltip.show(index, anchor);
        debug!("bar {} selected, anchor {:?}", index, anchor);

        if let (Some(callback), Some(datum)) = (&self.on_bar_press, self.data.get(index)) {
            callback(index, datum);
        }
        PressOutcome::Selected(index)
    }

    fn reanchor_tooltip(&mut self) {
        let Some(index) = self.tooltip.selected_index() else {
            return;
        };
        match self.anchor_for(index, self.scroll.offset()) {
            Some(anchor) => {
                if let TooltipState::Showing { .. } = self.tooltip.state() {
                    self.tooltip.show(index, anchor);
                }
            }
            None => self.tooltip.clear(),
        }
    }
}

/// Compact number formatting for tooltips and axis ticks
pub fn format_value(val: f32) -> String {
    if !val.is_finite() {
        "-".to_string()
    } else if val.abs() < 0.001 && val != 0.0 {
        format!("{:.1e}", val)
    } else if val.abs() >= 1_000_000.0 {
        format!("{:.1}M", val / 1_000_000.0)
    } else if val.abs() >= 10_000.0 {
        format!("{:.1}k", val / 1_000.0)
    } else if val.fract().abs() < 0.001 {
        format!("{:.0}", val)
    } else if val.abs() < 1.0 {
        format!("{:.2}", val)
    } else {
        format!("{:.1}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn week() -> Vec<BarDatum> {
        ["Mon", "Tue", "Wed", "Thu", "Fri"]
            .iter()
            .enumerate()
            .map(|(i, l)| BarDatum::new((i + 1) as f32 * 10.0, *l))
            .collect()
    }

    fn settled(data: Vec<BarDatum>, width: f32) -> BarChart {
        let mut chart = BarChart::new(ChartConfig::default()).with_data(data);
        chart.measure(width);
        chart.tick(Duration::from_secs(5));
        chart
    }

    #[test]
    fn height_ratios_follow_series_max() {
        let data = vec![
            BarDatum::new(10.0, "a"),
            BarDatum::new(20.0, "b"),
            BarDatum::new(40.0, "c"),
        ];
        let chart = settled(data, 300.0);
        let max = chart.max_bar_height();
        assert_eq!(chart.bar_height(2), max);
        assert!((chart.bar_height(0) - 0.25 * max).abs() < 1e-4);
        assert!((chart.bar_height(1) - 0.5 * max).abs() < 1e-4);
    }

    #[test]
    fn all_zero_series_is_flat() {
        let data = vec![BarDatum::new(0.0, "a"), BarDatum::new(0.0, "b")];
        let chart = settled(data, 300.0);
        assert_eq!(chart.max_value(), 1.0);
        assert_eq!(chart.bar_heights(), vec![0.0, 0.0]);
        let rect = chart.bar_rect(0).unwrap();
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn bar_rect_is_bottom_anchored() {
        let mut chart = BarChart::new(ChartConfig::default()).with_data(week());
        chart.measure(300.0);
        let baseline = chart.geometry().canvas.max.y;
        let before = chart.bar_rect(4).unwrap();
        assert_eq!(before.min.y, baseline);
        chart.tick(Duration::from_millis(400));
        let during = chart.bar_rect(4).unwrap();
        assert_eq!(during.max.y, baseline);
        assert!(during.min.y < baseline);
    }

    #[test]
    fn loading_keeps_bars_flat() {
        let config = ChartConfig {
            loading: true,
            ..ChartConfig::default()
        };
        let mut chart = BarChart::new(config).with_data(week());
        chart.measure(300.0);
        chart.tick(Duration::from_secs(3));
        assert!(chart.bar_heights().iter().all(|&h| h == 0.0));

        chart.set_loading(false);
        chart.tick(Duration::from_millis(100));
        assert!(chart.bar_height(0) > 0.0);
        assert_eq!(chart.bar_height(4), 0.0);
    }

    #[test]
    fn callback_fires_for_bar_and_label() {
        let seen = Arc::new(Mutex::new(vec![]));
        let sink = Arc::clone(&seen);
        let mut chart = settled(week(), 300.0);
        chart.on_bar_press(move |i, d| sink.lock().unwrap().push((i, d.label.clone())));

        let bar = chart.bar_rect(1).unwrap();
        assert_eq!(chart.press(bar.center()), PressOutcome::Selected(1));
        let label = chart.label_center(3).unwrap();
        assert_eq!(chart.press(label), PressOutcome::Selected(3));

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![(1, "Tue".to_string()), (3, "Thu".to_string())]
        );
    }

    #[test]
    fn background_press_without_tooltip_is_ignored() {
        let mut chart = settled(week(), 300.0);
        let gutter = chart.geometry().gutter.center();
        assert_eq!(chart.press(gutter), PressOutcome::Ignored);
    }

    #[test]
    fn anchor_uses_offset_at_press_time() {
        let data: Vec<_> = (0..12).map(|i| BarDatum::new(i as f32, "x")).collect();
        let mut chart = settled(data, 300.0);
        chart.scroll_to_offset(50.0);
        let label = chart.label_center(5).unwrap();
        chart.press(label);
        // Scrolling afterwards does not move the captured anchor
        chart.scroll_to_offset(0.0);
        chart.tick(Duration::from_millis(200));
        let view = chart.tooltip_view().unwrap();
        let layout = *chart.layout().ready().unwrap();
        let expected_x = chart.geometry().canvas.min.x + layout.bar_center_x(5) - 50.0;
        let expected_left = (expected_x - TOOLTIP_WIDTH * 0.5)
            .min(300.0 - TOOLTIP_WIDTH - 16.0)
            .max(16.0);
        assert_eq!(view.position.x, expected_left);
    }

    #[test]
    fn shrinking_data_resets_selection() {
        let mut chart = settled(week(), 300.0);
        chart.press_bar(4);
        assert_eq!(chart.selected_index(), Some(4));
        chart.set_data(week()[..2].to_vec());
        assert_eq!(chart.selected_index(), None);
        assert!(chart.tooltip_view().is_none());
    }

    #[test]
    fn data_change_resets_scroll() {
        let data: Vec<_> = (0..12).map(|i| BarDatum::new(i as f32, "x")).collect();
        let mut chart = settled(data.clone(), 300.0);
        chart.next();
        assert!(chart.scroll_offset() > 0.0);
        chart.set_data(data);
        assert_eq!(chart.scroll_offset(), 0.0);
    }

    #[test]
    fn same_length_update_keeps_animation() {
        let mut chart = settled(week(), 300.0);
        let mut data = week();
        data[0].value = 99.0;
        chart.set_data(data);
        assert_eq!(chart.progress(0), 1.0);
    }

    #[test]
    fn press_bar_out_of_range_is_ignored() {
        let mut chart = settled(week(), 300.0);
        assert_eq!(chart.press_bar(9), PressOutcome::Ignored);
        assert_eq!(chart.selected_index(), None);
    }

    #[test]
    fn unmeasured_chart_ignores_presses() {
        let mut chart = BarChart::new(ChartConfig::default()).with_data(week());
        assert_eq!(chart.layout(), LayoutState::Unmeasured);
        assert_eq!(chart.press(Vec2::new(10.0, 10.0)), PressOutcome::Ignored);
        assert!(chart.bar_rect(0).is_none());
        assert!(chart.axis_ticks().is_empty());
    }

    #[test]
    fn measure_reports_changes_and_bumps_revision() {
        let mut chart = BarChart::new(ChartConfig::default()).with_data(week());
        let rev = chart.revision();
        assert!(chart.measure(300.0));
        assert!(!chart.measure(300.0));
        assert!(chart.revision() > rev);
    }

    #[test]
    fn config_change_reanchors_showing_tooltip() {
        let mut chart = settled(week(), 600.0);
        chart.press_bar(1);
        let before = chart.tooltip_view().unwrap().position;

        chart.set_config(ChartConfig {
            height: 400.0,
            padding: 40.0,
            ..ChartConfig::default()
        });
        chart.tick(Duration::from_millis(200));

        let bar = chart.bar_rect(1).unwrap();
        let view = chart.tooltip_view().unwrap();
        let expected_left = (bar.center().x - TOOLTIP_WIDTH * 0.5)
            .min(600.0 - TOOLTIP_WIDTH - 40.0)
            .max(40.0);
        let expected_top = (bar.min.y - TOOLTIP_HEIGHT - TOOLTIP_GAP).max(TOOLTIP_MIN_TOP);
        assert!((view.position.x - expected_left).abs() < 1e-3);
        assert!((view.position.y - expected_top).abs() < 1e-3);
        assert_ne!(view.position, before);
    }

    #[test]
    fn set_config_applies_loading_and_layout() {
        let mut chart = settled(week(), 300.0);
        chart.press_bar(2);
        let rev = chart.revision();
        chart.set_config(ChartConfig {
            loading: true,
            gap: 4.0,
            ..ChartConfig::default()
        });
        assert!(chart.revision() > rev);
        assert!(chart.is_loading());
        assert_eq!(chart.layout().ready().unwrap().gap, 4.0);
        assert!(chart.tooltip_view().is_none());
    }

    #[test]
    fn dismiss_fades_then_hides() {
        let mut chart = settled(week(), 300.0);
        assert!(!chart.dismiss_tooltip());

        chart.press_bar(1);
        chart.tick(Duration::from_millis(200));
        assert!(chart.dismiss_tooltip());
        assert!(matches!(
            chart.tooltip_state(),
            TooltipState::Hiding { index: 1, .. }
        ));
        assert!(chart.tooltip_view().is_some());

        chart.tick(Duration::from_millis(200));
        assert_eq!(chart.tooltip_state(), TooltipState::Hidden);
        assert!(!chart.dismiss_tooltip());
    }

    #[test]
    fn non_finite_width_is_unmeasured_and_stable() {
        let mut chart = BarChart::new(ChartConfig::default()).with_data(week());
        assert!(!chart.measure(f32::NAN));
        let rev = chart.revision();
        assert!(!chart.measure(f32::NAN));
        assert!(!chart.measure(f32::INFINITY));
        assert_eq!(chart.revision(), rev);
        assert_eq!(chart.layout(), LayoutState::Unmeasured);

        chart.measure(300.0);
        assert!(chart.measure(f32::NAN));
        assert_eq!(chart.container_width(), 0.0);
        assert_eq!(chart.layout(), LayoutState::Unmeasured);
    }

    #[test]
    fn tooltip_text_uses_full_label_and_suffix() {
        let config = ChartConfig {
            value_suffix: Some(" kWh".into()),
            ..ChartConfig::default()
        };
        let data = vec![BarDatum::new(12.5, "Mon").full_label("Monday 12th")];
        let mut chart = BarChart::new(config).with_data(data);
        chart.measure(300.0);
        chart.press_bar(0);
        let view = chart.tooltip_view().unwrap();
        assert_eq!(view.title, "Monday 12th");
        assert_eq!(view.value_text, "12.5 kWh");
        assert_eq!(view.opacity, 0.0);
        assert_eq!(view.scale, TOOLTIP_MIN_SCALE);
    }

    #[test]
    fn axis_ticks_span_baseline_to_top() {
        let chart = settled(week(), 300.0);
        let ticks = chart.axis_ticks();
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[0].value, 0.0);
        assert_eq!(ticks[0].y, chart.geometry().canvas.max.y);
        assert_eq!(ticks[2].value, 50.0);
        assert_eq!(ticks[2].y, chart.geometry().canvas.max.y - chart.max_bar_height());
    }

    #[test]
    fn format_value_variants() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(3.4), "3.4");
        assert_eq!(format_value(0.5), "0.50");
        assert_eq!(format_value(12_500.0), "12.5k");
        assert_eq!(format_value(2_000_000.0), "2.0M");
        assert_eq!(format_value(f32::NAN), "-");
    }
}
