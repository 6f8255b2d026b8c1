//! WASM API exports for JavaScript interop
//!
//! `JsBarChart` wraps a chart description and runs it on an HTML canvas.
//! Bar presses are forwarded to an optional JavaScript callback.

#![cfg(target_arch = "wasm32")]

use std::sync::Arc;
use std::time::Duration;

use bevy::prelude::*;
use parking_lot::Mutex;
use wasm_bindgen::prelude::*;

use crate::engine::BarChart;
use crate::model::{BarChartSpec, BarDatum};
use crate::render::BarPressed;
use crate::runtime::{RunOptions, build_app};

/// JS callback, kept on the main thread
struct JsPressHandler(js_sys::Function);

fn forward_presses(handler: NonSend<JsPressHandler>, mut pressed: MessageReader<BarPressed>) {
    for event in pressed.read() {
        let datum = datum_to_js(&event.datum);
        if let Err(err) = handler
            .0
            .call2(&JsValue::NULL, &JsValue::from(event.index as u32), &datum)
        {
            web_sys::console::error_2(&"onBarPress callback failed:".into(), &err);
        }
    }
}

fn datum_to_js(datum: &BarDatum) -> JsValue {
    serde_json::to_string(datum)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
        .unwrap_or(JsValue::NULL)
}

fn parse_spec(json: &str) -> Result<BarChartSpec, JsValue> {
    BarChartSpec::from_json(json)
        .map_err(|report| JsValue::from_str(&format!("invalid chart description: {}", report)))
}

#[wasm_bindgen]
pub struct JsBarChart {
    spec: Arc<Mutex<BarChartSpec>>,
    canvas_id: String,
    on_press: Option<js_sys::Function>,
    loading_ms: Option<u32>,
    started: bool,
}

#[wasm_bindgen]
impl JsBarChart {
    /// * `json` - `{ "data": [...], "config": {...} }`
    /// * `canvas_id` - HTML canvas element ID (without #)
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str, canvas_id: &str) -> Result<JsBarChart, JsValue> {
        Ok(JsBarChart {
            spec: Arc::new(Mutex::new(parse_spec(json)?)),
            canvas_id: canvas_id.to_string(),
            on_press: None,
            loading_ms: None,
            started: false,
        })
    }

    /// Called as `callback(index, datum)` whenever a bar or its label is tapped
    #[wasm_bindgen(js_name = onBarPress)]
    pub fn on_bar_press(&mut self, callback: js_sys::Function) {
        self.on_press = Some(callback);
    }

    /// Show the flat loading state for `ms` after start
    #[wasm_bindgen(js_name = simulateLoading)]
    pub fn simulate_loading(&mut self, ms: u32) {
        self.loading_ms = Some(ms);
    }

    /// Replace the chart description before `start`
    #[wasm_bindgen(js_name = setSpec)]
    pub fn set_spec(&mut self, json: &str) -> Result<(), JsValue> {
        if self.started {
            web_sys::console::warn_1(&"Chart already started; description ignored".into());
            return Ok(());
        }
        *self.spec.lock() = parse_spec(json)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.spec
            .lock()
            .to_json()
            .map_err(|report| JsValue::from_str(&format!("{}", report)))
    }

    /// Start the Bevy render loop. Only the first call has any effect.
    #[wasm_bindgen]
    pub fn start(&mut self) {
        if self.started {
            web_sys::console::warn_1(&"Chart already started".into());
            return;
        }
        self.started = true;

        let spec = self.spec.lock().clone();
        let chart = BarChart::new(spec.config).with_data(spec.data);
        let options = RunOptions {
            canvas_id: Some(self.canvas_id.clone()),
            loading_for: self.loading_ms.map(|ms| Duration::from_millis(ms.into())),
            ..RunOptions::default()
        };

        let mut app = build_app(chart, options);
        if let Some(callback) = self.on_press.take() {
            app.insert_non_send_resource(JsPressHandler(callback))
                .add_systems(Update, forward_presses);
        }
        app.run();
    }
}
