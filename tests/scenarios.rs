use std::sync::{Arc, Mutex};
use std::time::Duration;

use bevy_math::Vec2;
use proptest::prelude::*;
use vidi_bars::prelude::*;

fn series(n: usize) -> Vec<BarDatum> {
    (0..n)
        .map(|i| BarDatum::new((i % 5 + 1) as f32 * 3.0, format!("#{i}")))
        .collect()
}

fn measured(data: Vec<BarDatum>, width: f32) -> BarChart {
    let mut chart = BarChart::new(ChartConfig::default()).with_data(data);
    chart.measure(width);
    chart
}

fn ready(chart: &BarChart) -> BarLayout {
    *chart.layout().ready().expect("layout should be ready")
}

#[test]
fn two_bars_fit_without_controls() {
    let data = vec![BarDatum::new(5.0, "Mon"), BarDatum::new(15.0, "Tue")];
    let chart = measured(data, 300.0);
    let layout = ready(&chart);

    assert!(layout.fits_without_scroll);
    assert_eq!(layout.bar_count, 2);
    assert!(!chart.pagination_visible());
    assert!(chart.geometry().pager_prev.is_none());
    assert_eq!(chart.max_scroll_offset(), 0.0);
    assert!(chart.bar_rect(0).is_some());
    assert!(chart.bar_rect(1).is_some());
    assert!(chart.bar_rect(2).is_none());
}

#[test]
fn ten_bars_page_and_clamp() {
    let mut chart = measured(series(10), 300.0);
    let layout = ready(&chart);
    assert!(chart.pagination_visible());
    assert!(!layout.fits_without_scroll);

    let step = 0.7 * layout.chart_width;
    let max = layout.total_content_width - layout.chart_width;
    assert_eq!(chart.next(), step.min(max));
    assert_eq!(chart.next(), max);
    assert!(!chart.can_next());
    assert!(chart.can_prev());
}

#[test]
fn long_series_pages_by_fraction_of_visible_width() {
    let mut chart = measured(series(20), 300.0);
    let layout = ready(&chart);
    let step = 0.7 * layout.chart_width;

    assert!((chart.next() - step).abs() < 1e-3);
    assert!((chart.next() - 2.0 * step).abs() < 1e-3);
    assert!((chart.prev() - step).abs() < 1e-3);
    assert_eq!(chart.label_translation(), -chart.scroll_offset());
}

#[test]
fn select_then_dismiss_on_background() {
    let mut chart = measured(series(4), 320.0);
    chart.tick(Duration::from_secs(2));

    assert_eq!(chart.press_bar(1), PressOutcome::Selected(1));
    assert!(matches!(
        chart.tooltip_state(),
        TooltipState::Showing { index: 1, .. }
    ));

    let gutter = chart.geometry().gutter.center();
    assert_eq!(chart.press(gutter), PressOutcome::Dismissed);
    assert!(matches!(chart.tooltip_state(), TooltipState::Hiding { .. }));

    chart.tick(Duration::from_millis(200));
    assert_eq!(chart.tooltip_state(), TooltipState::Hidden);
    assert!(chart.tooltip_view().is_none());
}

#[test]
fn press_on_bar_never_reaches_background() {
    let mut chart = measured(series(4), 320.0);
    chart.tick(Duration::from_secs(2));
    chart.press_bar(0);

    // A tap on another bar swaps the selection without hiding
    let target = chart.bar_rect(2).expect("bar 2").center();
    assert_eq!(chart.press(target), PressOutcome::Selected(2));
    assert!(matches!(
        chart.tooltip_state(),
        TooltipState::Showing { index: 2, .. }
    ));
}

#[test]
fn height_ratios_for_ten_twenty_forty() {
    let data = vec![
        BarDatum::new(10.0, "a"),
        BarDatum::new(20.0, "b"),
        BarDatum::new(40.0, "c"),
    ];
    let mut chart = measured(data, 300.0);
    chart.tick(Duration::from_secs(2));

    let max = chart.max_bar_height();
    let heights = chart.bar_heights();
    assert_eq!(heights[2], max);
    assert!((heights[0] / max - 0.25).abs() < 1e-5);
    assert!((heights[1] / max - 0.5).abs() < 1e-5);
}

#[test]
fn zero_series_renders_flat() {
    let data = vec![BarDatum::new(0.0, "a"), BarDatum::new(0.0, "b")];
    let mut chart = measured(data, 300.0);
    chart.tick(Duration::from_secs(2));
    assert!(chart.bar_heights().iter().all(|h| *h == 0.0));
    assert!(chart.bar_rect(1).expect("bar 1").height() == 0.0);
}

#[test]
fn tooltip_stays_inside_narrow_container() {
    let mut chart = measured(series(5), 320.0);
    chart.tick(Duration::from_secs(2));
    chart.press_bar(4);
    let view = chart.tooltip_view().expect("tooltip");
    let padding = chart.config().padding;
    assert!(view.position.x <= 320.0 - TOOLTIP_WIDTH - padding);
    assert!(view.position.x >= padding);
    assert!(view.position.y >= TOOLTIP_MIN_TOP);
}

#[test]
fn empty_and_unmeasured_states() {
    let mut chart = BarChart::new(ChartConfig::default());
    assert_eq!(chart.layout(), LayoutState::Unmeasured);
    chart.measure(300.0);
    assert_eq!(chart.layout(), LayoutState::Empty);
    assert_eq!(chart.press(Vec2::new(150.0, 100.0)), PressOutcome::Ignored);

    let mut chart = BarChart::new(ChartConfig::default()).with_data(series(3));
    chart.measure(0.0);
    assert_eq!(chart.layout(), LayoutState::Unmeasured);
}

#[test]
fn callback_sees_pressed_datum() {
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    let mut chart = BarChart::new(ChartConfig::default())
        .with_data(vec![BarDatum::new(5.0, "Mon"), BarDatum::new(15.0, "Tue")])
        .with_press_handler(move |i, d| {
            *sink.lock().unwrap() = Some((i, d.value));
        });
    chart.measure(300.0);
    chart.press_bar(1);
    assert_eq!(*seen.lock().unwrap(), Some((1, 15.0)));
}

#[test]
fn json_description_drives_the_engine() {
    let spec = BarChartSpec::from_json(
        r#"{ "data": [{ "value": 3, "label": "a" }, { "value": 6, "label": "b" }],
             "config": { "gap": 4, "animation_duration_ms": 0 } }"#,
    )
    .unwrap();
    let mut chart = BarChart::new(spec.config).with_data(spec.data);
    chart.measure(300.0);
    // Zero duration: each bar snaps up once its stagger delay has passed
    chart.tick(Duration::from_millis(100));
    assert_eq!(chart.bar_height(1), chart.max_bar_height());
    assert_eq!(ready(&chart).gap, 4.0);
}

proptest! {
    #[test]
    fn small_counts_fit_when_wide_enough(count in 1usize..=7, width in 100.0f32..2000.0) {
        let chart = measured(series(count), width);
        let config = ChartConfig::default();
        let chart_width = width - AXIS_GUTTER_WIDTH - 2.0 * config.padding;
        let naive = (chart_width - (count as f32 - 1.0) * config.gap) / count as f32;
        prop_assume!(naive >= MIN_BAR_WIDTH);

        let layout = ready(&chart);
        prop_assert!(layout.fits_without_scroll);
        prop_assert!(!chart.pagination_visible());
    }

    #[test]
    fn large_counts_always_show_pager(count in 8usize..60, width in 1.0f32..3000.0) {
        let chart = measured(series(count), width);
        prop_assert!(chart.pagination_visible());
        prop_assert!(chart.geometry().pager_next.is_some());
    }

    #[test]
    fn scroll_offset_stays_in_range(count in 1usize..60, width in 80.0f32..1500.0, x in -5000.0f32..5000.0) {
        let mut chart = measured(series(count), width);
        let applied = chart.scroll_to_offset(x);
        let max = match chart.layout() {
            LayoutState::Ready(layout) => (layout.total_content_width - layout.chart_width).max(0.0),
            _ => 0.0,
        };
        prop_assert!(applied >= 0.0);
        prop_assert!(applied <= max + 1e-3);
        prop_assert_eq!(applied, chart.scroll_offset());
    }
}
