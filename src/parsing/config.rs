use crate::presets;
use crate::shading::PixelFormat;

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: presets::WIDTH,
            height: presets::HEIGHT,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RendererType {
    #[default]
    Naive,
    Tiled { tile_height: usize },
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    pub resolution: Resolution,
    pub pixel_format: PixelFormat,
    pub renderer: RendererType,
    pub threads: Option<u16>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            resolution: Resolution::default(),
            pixel_format: presets::PIXEL_FORMAT,
            renderer: RendererType::default(),
            threads: None,
        }
    }
}

/// Everything that can be changed without a rebuild. The scene and camera are fixed.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub raw_output: String,
    pub png_output: String,
    pub render_settings: RenderSettings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            raw_output: String::from("image.bin"),
            png_output: String::from("image.png"),
            render_settings: RenderSettings::default(),
        }
    }
}
