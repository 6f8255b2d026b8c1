//! Seven days of sleep, small enough to fit without scrolling.
//!
//! Tap a bar or its label to see the full day name and value.

use vidi_bars::prelude::*;

fn main() {
    bars()
        .title("Sleep this week")
        .bar_full(6.5, "Mon", "Monday")
        .bar_full(7.2, "Tue", "Tuesday")
        .bar_full(5.8, "Wed", "Wednesday")
        .bar_full(8.1, "Thu", "Thursday")
        .bar_full(6.9, "Fri", "Friday")
        .bar_full(9.4, "Sat", "Saturday")
        .bar_full(8.7, "Sun", "Sunday")
        .value_suffix(" h")
        .height(240.0)
        .on_press(|index, datum| {
            println!("pressed #{index}: {} = {}", datum.title(), datum.value);
        })
        .run_local();
}
