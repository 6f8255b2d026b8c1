use std::time::Duration;

use crate::engine::BarChart;
use crate::model::{BarChartSpec, BarDatum, ChartConfig, Color, Gradient};
use crate::runtime::RunOptions;

pub fn bars() -> BarsBuilder {
    BarsBuilder {
        spec: BarChartSpec::default(),
        on_press: None,
        options: RunOptions::default(),
    }
}

type PressFn = Box<dyn Fn(usize, &BarDatum) + Send + Sync>;

pub struct BarsBuilder {
    spec: BarChartSpec,
    on_press: Option<PressFn>,
    options: RunOptions,
}

impl BarsBuilder {
    pub fn from_spec(spec: BarChartSpec) -> Self {
        Self {
            spec,
            ..bars()
        }
    }

    pub fn bar(mut self, value: f32, label: impl Into<String>) -> Self {
        self.spec.data.push(BarDatum::new(value, label));
        self
    }

    /// Bar whose tooltip shows `full_label` instead of the axis caption
    pub fn bar_full(
        mut self,
        value: f32,
        label: impl Into<String>,
        full_label: impl Into<String>,
    ) -> Self {
        self.spec
            .data
            .push(BarDatum::new(value, label).full_label(full_label));
        self
    }

    pub fn datum(mut self, datum: BarDatum) -> Self {
        self.spec.data.push(datum);
        self
    }

    pub fn data(mut self, data: impl IntoIterator<Item = BarDatum>) -> Self {
        self.spec.data.extend(data);
        self
    }

    pub fn config(mut self, config: ChartConfig) -> Self {
        self.spec.config = config;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.spec.config.height = height;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.spec.config.padding = padding;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.spec.config.gap = gap;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.spec.config.corner_radius = radius;
        self
    }

    pub fn animation_ms(mut self, ms: u64) -> Self {
        self.spec.config.animation_duration_ms = ms;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.spec.config.loading = loading;
        self
    }

    pub fn background(mut self, c: Color) -> Self {
        self.spec.config.background = c;
        self
    }

    pub fn gradient(mut self, start: Color, end: Color) -> Self {
        self.spec.config.gradient = Gradient { start, end };
        self
    }

    pub fn label_color(mut self, c: Color) -> Self {
        self.spec.config.label_color = c;
        self
    }

    pub fn value_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.spec.config.value_suffix = Some(suffix.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.spec.config.title = Some(title.into());
        self
    }

    pub fn on_press<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, &BarDatum) + Send + Sync + 'static,
    {
        self.on_press = Some(Box::new(f));
        self
    }

    /// Window size in logical pixels; height defaults to the chart's own
    pub fn window_size(mut self, width: f32, height: Option<f32>) -> Self {
        self.options.window_width = width;
        self.options.window_height = height;
        self
    }

    /// Start in the loading state and leave it after `duration`
    pub fn simulate_loading(mut self, duration: Duration) -> Self {
        self.options.loading_for = Some(duration);
        self
    }

    /// Get the chart description without running it
    pub fn build(self) -> BarChartSpec {
        self.spec
    }

    /// Build the headless engine, press handler included
    pub fn into_chart(self) -> BarChart {
        let mut chart = BarChart::new(self.spec.config).with_data(self.spec.data);
        if let Some(f) = self.on_press {
            chart.on_bar_press(f);
        }
        chart
    }

    /// Run the chart locally using Bevy (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_local(self) {
        let options = self.options.clone();
        let _ = crate::runtime::run_chart(self.into_chart(), options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn builder_collects_bars_and_config() {
        let spec = bars()
            .bar(5.0, "Mon")
            .bar_full(15.0, "Tue", "Tuesday")
            .height(180.0)
            .gap(8.0)
            .value_suffix(" h")
            .build();
        assert_eq!(spec.data.len(), 2);
        assert_eq!(spec.data[1].title(), "Tuesday");
        assert_eq!(spec.config.height, 180.0);
        assert_eq!(spec.config.gap, 8.0);
        assert_eq!(spec.config.value_suffix.as_deref(), Some(" h"));
        assert_eq!(spec.config.padding, ChartConfig::default().padding);
    }

    #[test]
    fn from_spec_keeps_description() {
        let spec = BarChartSpec::new(
            vec![BarDatum::new(3.0, "a"), BarDatum::new(6.0, "b")],
            ChartConfig {
                gap: 4.0,
                ..ChartConfig::default()
            },
        );
        let built = BarsBuilder::from_spec(spec.clone()).bar(9.0, "c").build();
        assert_eq!(built.config, spec.config);
        assert_eq!(built.data.len(), 3);
        assert_eq!(built.data[2].label, "c");
    }

    #[test]
    fn press_handler_reaches_engine() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut chart = bars()
            .bar(1.0, "a")
            .bar(2.0, "b")
            .on_press(move |i, _| {
                counter.fetch_add(i + 1, Ordering::SeqCst);
            })
            .into_chart();
        chart.measure(300.0);
        chart.press_bar(1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
