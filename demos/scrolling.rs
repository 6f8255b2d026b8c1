//! Thirty days of steps: more bars than fit, so the chart scrolls.
//!
//! Use the wheel, the pager buttons or the arrow keys to move through the
//! month. Escape hides the tooltip.

use std::time::Duration;

use vidi_bars::prelude::*;

fn main() {
    let days = (1..=30).map(|day| {
        // Weekends are lazier
        let weekend = day % 7 == 6 || day % 7 == 0;
        let base = if weekend { 4_500.0 } else { 8_000.0 };
        let wobble = ((day as f32) * 1.7).sin() * 2_500.0;
        BarDatum::new((base + wobble).round(), day.to_string())
            .full_label(format!("June {day}"))
    });

    bars()
        .title("Steps in June")
        .data(days)
        .gradient(Color::rgb(0.55, 0.92, 0.70), Color::rgb(0.12, 0.55, 0.45))
        .value_suffix(" steps")
        .gap(8.0)
        .simulate_loading(Duration::from_millis(800))
        .window_size(420.0, None)
        .run_local();
}
