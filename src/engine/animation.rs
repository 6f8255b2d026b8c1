//! Staggered per-bar entrance animation.
//!
//! One shared clock drives every bar. Bar `i` starts `i * stagger` after the
//! clock starts, and its progress is an indexed cell owned by the controller.

use std::time::Duration;

/// Cubic ease-out, monotonic on [0, 1]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Bar height for progress `t`, growing from zero
pub fn animated_height(target_height: f32, t: f32) -> f32 {
    lerp(0.0, target_height, t)
}

/// Bar top for progress `t`, starting at the baseline (`canvas_height`)
pub fn animated_y(canvas_height: f32, target_height: f32, t: f32) -> f32 {
    lerp(canvas_height, canvas_height - target_height, t)
}

/// Largest value in the series, floored at 1 so ratios stay finite
pub fn series_max(values: impl IntoIterator<Item = f32>) -> f32 {
    values.into_iter().fold(1.0f32, f32::max)
}

pub fn value_ratio(value: f32, max_value: f32) -> f32 {
    (value / max_value).clamp(0.0, 1.0)
}

#[derive(Clone, Debug)]
pub struct AnimationController {
    progress: Vec<f32>,
    elapsed: Duration,
    duration: Duration,
    stagger: Duration,
    loading: bool,
}

impl AnimationController {
    pub fn new(bar_count: usize, duration: Duration, stagger: Duration, loading: bool) -> Self {
        Self {
            progress: vec![0.0; bar_count],
            elapsed: Duration::ZERO,
            duration,
            stagger,
            loading,
        }
    }

    /// Drop every progress cell and start over from bar 0
    pub fn restart(&mut self, bar_count: usize) {
        self.progress = vec![0.0; bar_count];
        self.elapsed = Duration::ZERO;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Pins all bars flat while loading; clearing the flag restarts the stagger.
    /// Returns true when the flag actually changed.
    pub fn set_loading(&mut self, loading: bool) -> bool {
        if self.loading == loading {
            return false;
        }
        self.loading = loading;
        let n = self.progress.len();
        self.restart(n);
        true
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.loading || self.is_settled() {
            return;
        }
        self.elapsed += dt;

        for (i, cell) in self.progress.iter_mut().enumerate() {
            let delay = self.stagger * i as u32;
            let local = self.elapsed.saturating_sub(delay);
            let linear = if self.duration.is_zero() {
                if self.elapsed >= delay { 1.0 } else { 0.0 }
            } else {
                local.as_secs_f32() / self.duration.as_secs_f32()
            };
            // max() keeps the cell monotonic even if the duration changes mid-flight
            *cell = cell.max(ease_out_cubic(linear));
        }
    }

    /// Progress of bar `index`; out-of-range bars read as flat
    pub fn progress(&self, index: usize) -> f32 {
        if self.loading {
            return 0.0;
        }
        self.progress.get(index).copied().unwrap_or(0.0)
    }

    pub fn is_settled(&self) -> bool {
        !self.loading && self.progress.iter().all(|&t| t >= 1.0)
    }
}
