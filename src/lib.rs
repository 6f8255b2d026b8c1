pub mod model;
pub mod dash;
pub mod engine;
pub mod render;
pub mod runtime;
pub mod wasm_api;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A chart description could not be decoded
    Parse,
    /// A configuration value is outside its allowed range
    InvalidConfig(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Parse => write!(f, "failed to parse chart description"),
            ChartError::InvalidConfig(field) => write!(f, "invalid chart config: {}", field),
        }
    }
}

impl std::error::Error for ChartError {}

pub type Result<T> = std::result::Result<T, error_stack::Report<ChartError>>;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

pub mod prelude {
    pub use crate::model::*;
    pub use crate::dash::*;
    pub use crate::engine::*;
    pub use crate::render::*;
    pub use crate::runtime::*;
}
