use std::time::Duration;

use bevy::log::{LogPlugin, debug};
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::engine::BarChart;
use crate::engine::layout::ChartGeometry;
use crate::render::{BarChartPlugin, ChartRes};

const DEFAULT_WINDOW_WIDTH: f32 = 480.0;

#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Logical window width; the chart is measured against it
    pub window_width: f32,
    /// Defaults to the chart's own height at `window_width`
    pub window_height: Option<f32>,
    /// Hold the loading state for this long after startup
    pub loading_for: Option<Duration>,
    /// Keep Bevy's own log subscriber. Turn off when the host installs one.
    pub bevy_log: bool,
    /// HTML canvas id (wasm only)
    pub canvas_id: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: None,
            loading_for: None,
            bevy_log: true,
            canvas_id: None,
        }
    }
}

/// Ends a simulated loading phase once its timer runs out
#[derive(Resource)]
pub struct LoadingTimer(pub Timer);

pub fn finish_loading(
    time: Res<Time>,
    mut timer: ResMut<LoadingTimer>,
    mut chart: ResMut<ChartRes>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        debug!("loading phase finished");
        chart.0.set_loading(false);
    }
}

fn primary_window(chart: &BarChart, options: &RunOptions) -> Window {
    let config = chart.config();
    let width = options.window_width.max(1.0);
    let height = options.window_height.unwrap_or_else(|| {
        ChartGeometry::new(width, chart.data().len(), config).total_height()
    });
    let title = config
        .title
        .clone()
        .unwrap_or_else(|| "vidi-bars".to_string());

    let mut resolution = WindowResolution::default();
    resolution.set(width, height.max(1.0));

    let mut window = Window {
        title,
        resolution,
        ..default()
    };
    if let Some(canvas_id) = &options.canvas_id {
        window.canvas = Some(format!("#{}", canvas_id));
        window.fit_canvas_to_parent = true;
    }
    window
}

/// Window clear color, converted the same way as bar and label colors
fn clear_color(chart: &BarChart) -> ClearColor {
    ClearColor(chart.config().background.into())
}

/// Assemble the Bevy app for `chart` without running it
pub fn build_app(mut chart: BarChart, options: RunOptions) -> App {
    if options.loading_for.is_some() {
        chart.set_loading(true);
    }
    let window = primary_window(&chart, &options);

    let plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        })
        .set(ImagePlugin::default_nearest());
    let plugins = if options.bevy_log {
        plugins
    } else {
        plugins.disable::<LogPlugin>()
    };

    let mut app = App::new();
    app.insert_resource(clear_color(&chart))
        .insert_resource(ChartRes::new(chart))
        .add_plugins((plugins, BarChartPlugin));

    if let Some(duration) = options.loading_for {
        app.insert_resource(LoadingTimer(Timer::new(duration, TimerMode::Once)))
            .add_systems(Update, finish_loading);
    }
    app
}

#[cfg(not(target_arch = "wasm32"))]
pub fn run_chart(chart: BarChart, options: RunOptions) -> AppExit {
    build_app(chart, options).run()
}
