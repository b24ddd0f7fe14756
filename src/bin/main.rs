extern crate rust_voxeltracer as root;

use root::logging::{init_logging, parse_log_level};
use root::parsing::get_settings;
use root::prelude::*;
use root::presets;

use anyhow::Context;
use structopt::StructOpt;
use tracing::{info, warn, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// toml config, the built in defaults are used when absent
    #[structopt(long)]
    pub config_file: Option<String>,
    /// overrides `raw_output` from the config
    #[structopt(short = "o", long)]
    pub output: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    /// write the image rendered at build time instead of rendering now
    #[cfg(feature = "baked")]
    #[structopt(long)]
    pub baked: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(feature = "baked")]
fn write_baked(config: &Config, dry_run: bool) -> anyhow::Result<()> {
    info!("using the image baked at build time, render settings are ignored");
    let image = root::baked::image()?;
    if !dry_run {
        image
            .save_raw(&config.raw_output)
            .with_context(|| format!("failed writing to {}", config.raw_output))?;
    }
    Ok(())
}

#[cfg(not(feature = "baked"))]
fn write_baked(_config: &Config, _dry_run: bool) -> anyhow::Result<()> {
    anyhow::bail!("built without the baked feature")
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    init_logging(parse_log_level(&opts.log_level, Level::INFO))?;

    let mut config = match &opts.config_file {
        Some(path) => get_settings(path)?,
        None => {
            info!("no config file given, using defaults");
            Config::default()
        }
    };
    if let Some(output) = opts.output {
        config.raw_output = output;
    }

    let threads = config
        .render_settings
        .threads
        .map(|t| t as usize)
        .unwrap_or_else(num_cpus::get)
        .max(1);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to set up the render thread pool")?;

    #[cfg(feature = "baked")]
    let use_baked = opts.baked;
    #[cfg(not(feature = "baked"))]
    let use_baked = false;
    if use_baked {
        return write_baked(&config, opts.dry_run);
    }

    let world = World::default_scene();
    if opts.dry_run {
        warn!("dry run, nothing rendered");
        return Ok(());
    }
    let image = render(&world, &presets::VIEW, &config.render_settings)?;
    image
        .save_raw(&config.raw_output)
        .with_context(|| format!("failed writing to {}", config.raw_output))?;
    info!(
        "wrote {}x{} {:?} image to {}",
        image.width, image.height, image.format, config.raw_output
    );
    Ok(())
}
