extern crate rust_voxeltracer as root;

use root::logging::{init_logging, parse_log_level};
use root::parsing::config::Config;
use root::parsing::get_settings;
use root::raster::Image;
use root::shading::PixelFormat;

use anyhow::{bail, Context};
use structopt::StructOpt;
use tracing::{info, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// toml config shared with the renderer, supplies `raw_output` and `png_output`
    #[structopt(long)]
    pub config_file: Option<String>,
    /// overrides `raw_output` from the config
    #[structopt(short = "i", long)]
    pub input: Option<String>,
    /// overrides `png_output` from the config
    #[structopt(short = "o", long)]
    pub output: Option<String>,
    /// gray or rgb. inferred from the file size when absent
    #[structopt(long)]
    pub format: Option<String>,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_format(name: &str) -> anyhow::Result<PixelFormat> {
    match name.to_lowercase().as_str() {
        "gray" | "grey" => Ok(PixelFormat::Gray),
        "rgb" => Ok(PixelFormat::Rgb),
        other => bail!("unknown pixel format '{}', expected gray or rgb", other),
    }
}

/// Input and output paths, command line first, then the config.
fn io_paths(opts: &Opt, config: Config) -> (String, String) {
    (
        opts.input.clone().unwrap_or(config.raw_output),
        opts.output.clone().unwrap_or(config.png_output),
    )
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    init_logging(parse_log_level(&opts.log_level, Level::INFO))?;

    let config = match &opts.config_file {
        Some(path) => get_settings(path)?,
        None => Config::default(),
    };
    let (input, output) = io_paths(&opts, config);

    let format = opts.format.as_deref().map(parse_format).transpose()?;
    let image = Image::load_raw(&input, format)
        .with_context(|| format!("failure reading input file '{}'", input))?;
    image
        .save_png(&output)
        .with_context(|| format!("failure writing output file '{}'", output))?;
    info!(
        "converted {}x{} {:?} image to {}",
        image.width, image.height, image.format, output
    );
    Ok(())
}
