//! `rune`: print the scaled asset candidates a loader would probe.
//!
//! Usage: `rune [--scale=<factor>] [--config=<file>] <path>...`

use anyhow::{Context, Result, bail};
use rune_config::RuneConfig;
use rune_scale::{ScaleFactor, logical_multiplier};

struct Args {
    scale: Option<f32>,
    config: Option<String>,
    paths: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        scale: None,
        config: None,
        paths: Vec::new(),
    };
    for arg in std::env::args().skip(1) {
        if let Some(v) = arg.strip_prefix("--scale=") {
            let factor = v
                .parse::<f32>()
                .with_context(|| format!("invalid --scale value {v:?}"))?;
            args.scale = Some(factor);
        } else if let Some(v) = arg.strip_prefix("--config=") {
            args.config = Some(v.to_owned());
        } else if arg.starts_with("--") {
            bail!("unknown option {arg}");
        } else {
            args.paths.push(arg);
        }
    }
    if args.paths.is_empty() {
        bail!("usage: rune [--scale=<factor>] [--config=<file>] <path>...");
    }
    Ok(args)
}

fn resolve_scale(args: &Args, config: &RuneConfig) -> Result<ScaleFactor> {
    if let Some(factor) = args.scale {
        return Ok(ScaleFactor::try_new(factor)?);
    }
    let display = &config.display;
    let factor = logical_multiplier(
        display.logical_pixels,
        display.scale_factor.unwrap_or(1.0),
        display.ui_scale,
    );
    Ok(ScaleFactor::try_new(factor)?)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let mut config = RuneConfig::load_from_file(path).map_err(anyhow::Error::msg)?;
            config.merge_with_env();
            config
        }
        None => RuneConfig::load(),
    };

    let scale = resolve_scale(&args, &config)?;
    log::debug!("resolved scale factor {}", scale);

    for path in &args.paths {
        let path = config.assets.resolve(path);
        for rsrc in scale.scaled_resources(&path) {
            println!("{rsrc}");
        }
    }
    Ok(())
}
