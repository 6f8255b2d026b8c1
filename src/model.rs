use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};

use crate::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
    pub const fn with_a(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear blend, `t = 0` gives `self`
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
}

impl From<Color> for bevy::prelude::Color {
    #[inline]
    fn from(c: Color) -> Self {
        bevy::prelude::Color::linear_rgba(c.r, c.g, c.b, c.a)
    }
}

/// Two-stop vertical gradient; `start` is the top of the bar
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            start: Color::rgb(0.45, 0.62, 1.0),
            end: Color::rgb(0.22, 0.30, 0.86),
        }
    }
}

/// One labeled value, rendered as a single bar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub value: f32,
    /// Short caption under the bar
    pub label: String,
    /// Longer caption preferred by the tooltip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_start: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_end: Option<Color>,
}

impl BarDatum {
    pub fn new(value: f32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            full_label: None,
            color_start: None,
            color_end: None,
        }
    }

    pub fn full_label(mut self, full: impl Into<String>) -> Self {
        self.full_label = Some(full.into());
        self
    }

    pub fn colors(mut self, start: Color, end: Color) -> Self {
        self.color_start = Some(start);
        self.color_end = Some(end);
        self
    }

    /// Caption shown in the tooltip
    pub fn title(&self) -> &str {
        self.full_label.as_deref().unwrap_or(&self.label)
    }

    /// Value used for bar heights: negative and non-finite values count as zero
    pub fn magnitude(&self) -> f32 {
        if self.value.is_finite() {
            self.value.max(0.0)
        } else {
            0.0
        }
    }

    pub fn gradient(&self, fallback: Gradient) -> Gradient {
        Gradient {
            start: self.color_start.unwrap_or(fallback.start),
            end: self.color_end.unwrap_or(fallback.end),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Canvas height, excluding label row and pager strip
    pub height: f32,
    pub padding: f32,
    /// Horizontal space between bars
    pub gap: f32,
    pub corner_radius: f32,
    pub animation_duration_ms: u64,
    pub loading: bool,
    pub background: Color,
    pub gradient: Gradient,
    pub label_color: Color,
    pub value_suffix: Option<String>,
    pub title: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 220.0,
            padding: 16.0,
            gap: 12.0,
            corner_radius: 6.0,
            animation_duration_ms: 600,
            loading: false,
            background: Color::rgba(0.05, 0.05, 0.09, 1.0),
            gradient: Gradient::default(),
            label_color: Color::rgba(0.75, 0.75, 0.8, 0.9),
            value_suffix: None,
            title: None,
        }
    }
}

impl ChartConfig {
    /// Reject values the layout math cannot work with
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("padding", self.padding),
            ("gap", self.gap),
            ("corner_radius", self.corner_radius),
            ("height", self.height),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(Report::new(ChartError::InvalidConfig(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                ))));
            }
        }

        if self.height <= crate::engine::BAR_TOP_INSET {
            return Err(Report::new(ChartError::InvalidConfig(format!(
                "height must exceed {} (got {})",
                crate::engine::BAR_TOP_INSET,
                self.height
            ))));
        }

        Ok(())
    }
}

/// Serializable chart description: the data plus its configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BarChartSpec {
    #[serde(default)]
    pub data: Vec<BarDatum>,
    #[serde(default)]
    pub config: ChartConfig,
}

impl BarChartSpec {
    pub fn new(data: Vec<BarDatum>, config: ChartConfig) -> Self {
        Self { data, config }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let spec: Self = serde_json::from_str(json).change_context(ChartError::Parse)?;
        spec.config.validate()?;
        Ok(spec)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).change_context(ChartError::Parse)
    }
}
