use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FigureConfig {
    /// Canvas width in pixels; 2400 is 8 inches at 300 dpi.
    #[serde(default = "FigureConfig::default_width_px")]
    pub width_px: u32,
    #[serde(default = "FigureConfig::default_height_px")]
    pub height_px: u32,
}

impl FigureConfig {
    fn default_width_px() -> u32 {
        2400
    }
    fn default_height_px() -> u32 {
        2400
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_px: Self::default_width_px(),
            height_px: Self::default_height_px(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleConfig {
    /// Opacity of the dashed grey envelope curve.
    #[serde(default = "StyleConfig::default_envelope_opacity")]
    pub envelope_opacity: f64,
    #[serde(default = "StyleConfig::default_stroke_width")]
    pub stroke_width: u32,
}

impl StyleConfig {
    fn default_envelope_opacity() -> f64 {
        0.7
    }
    fn default_stroke_width() -> u32 {
        2
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            envelope_opacity: Self::default_envelope_opacity(),
            stroke_width: Self::default_stroke_width(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlotConfig {
    #[serde(default)]
    pub figure: FigureConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

impl PlotConfig {
    /// Read the config TOML when it exists, otherwise use defaults.
    ///
    /// Never writes the file back: the tool promises exactly one output file
    /// per run (the image). A malformed config is reported and ignored.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if !path_obj.exists() {
            return Self::default();
        }
        match fs::read_to_string(path_obj) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("Failed to read config {path}: {err}. Using defaults.");
                Self::default()
            }
        }
    }
}
