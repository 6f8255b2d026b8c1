//! Viewer configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use vidi_bars::model::{BarChartSpec, ChartConfig};
use vidi_bars::runtime::RunOptions;

use crate::demo;
use crate::error::{Result, ViewerError};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    /// Seven days, fits without scrolling
    Weekly,
    /// Twelve months, scrolls with pager buttons
    Monthly,
    /// No data, shows the empty state
    Empty,
}

/// vidi-bars chart viewer
#[derive(Parser, Clone, Debug)]
#[command(name = "vidi-bars-viewer")]
#[command(about = "Open an interactive bar chart in a native window")]
pub struct Config {
    /// Chart description file: {"data": [...], "config": {...}}
    #[arg(long, conflicts_with = "demo")]
    pub data: Option<PathBuf>,

    /// Built-in data set used when no file is given
    #[arg(long, value_enum, default_value_t = Demo::Weekly)]
    pub demo: Demo,

    /// Canvas height in logical pixels
    #[arg(long)]
    pub height: Option<f32>,

    #[arg(long)]
    pub padding: Option<f32>,

    /// Space between bars
    #[arg(long)]
    pub gap: Option<f32>,

    #[arg(long)]
    pub corner_radius: Option<f32>,

    /// Entrance animation length per bar
    #[arg(long)]
    pub animation_ms: Option<u64>,

    /// Show the loading state for this long before animating in
    #[arg(long)]
    pub loading_ms: Option<u64>,

    #[arg(long, default_value = "480")]
    pub window_width: f32,

    /// Defaults to the chart's own height
    #[arg(long)]
    pub window_height: Option<f32>,
}

impl Config {
    /// Load the file or demo, then layer CLI overrides on top
    pub fn load_spec(&self) -> Result<BarChartSpec> {
        let mut spec = match &self.data {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| ViewerError::Read {
                    path: path.clone(),
                    source,
                })?;
                BarChartSpec::from_json(&json).map_err(|report| ViewerError::Chart {
                    path: path.clone(),
                    message: format!("{:?}", report),
                })?
            }
            None => BarChartSpec::new(demo::data(self.demo), ChartConfig::default()),
        };

        self.apply_overrides(&mut spec.config);
        spec.config
            .validate()
            .map_err(|report| ViewerError::InvalidConfig(report.current_context().to_string()))?;
        Ok(spec)
    }

    pub fn apply_overrides(&self, config: &mut ChartConfig) {
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        if let Some(gap) = self.gap {
            config.gap = gap;
        }
        if let Some(radius) = self.corner_radius {
            config.corner_radius = radius;
        }
        if let Some(ms) = self.animation_ms {
            config.animation_duration_ms = ms;
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            window_width: self.window_width,
            window_height: self.window_height,
            loading_for: self.loading_ms.map(Duration::from_millis),
            // The viewer installs its own tracing subscriber
            bevy_log: false,
            canvas_id: None,
        }
    }
}
