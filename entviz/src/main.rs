// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{bail, eyre, Result, WrapErr};

use entropy_classify::classify;
use entviz::render::{render, RenderOptions};

#[derive(Parser)]
#[command(name = "entviz")]
#[command(about = "Visualize entropy as an SVG file", long_about = None)]
struct Cli {
    /// The entropy token to classify and render
    entropy: String,

    /// Aspect ratio of the output as WIDTH:HEIGHT, each side 1-100
    #[arg(long = "ar", value_name = "RATIO", default_value = "1:1")]
    aspect_ratio: String,

    /// Caption font size in points, 6-30
    #[arg(long = "fs", value_name = "POINT", default_value_t = 12)]
    font_size: u32,

    /// Write the SVG here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn parse_aspect_ratio(s: &str) -> Result<(u32, u32)> {
    let invalid = || eyre!("invalid aspect ratio: {}", s);
    let (width, height) = s.split_once(':').ok_or_else(invalid)?;
    let width: u32 = width.parse().map_err(|_| invalid())?;
    let height: u32 = height.parse().map_err(|_| invalid())?;
    if !(1..=100).contains(&width) || !(1..=100).contains(&height) {
        return Err(invalid());
    }
    Ok((width, height))
}

fn main() -> Result<()> {
    entviz::logging::init();
    let cli = Cli::parse();

    let aspect_ratio = parse_aspect_ratio(&cli.aspect_ratio)?;
    if !(6..=30).contains(&cli.font_size) {
        bail!("invalid font size: {}", cli.font_size);
    }

    let token = cli.entropy.trim();
    let parsed =
        classify(token).ok_or_else(|| eyre!("unrecognized entropy: {}", token))?;
    log::info!("classified as {}", parsed.label);

    let markup = render(
        &parsed,
        &RenderOptions {
            aspect_ratio,
            font_size: cli.font_size,
        },
    );
    match cli.out {
        Some(path) => fs::write(&path, markup)
            .wrap_err_with(|| format!("cannot write {}", path.display()))?,
        None => println!("{}", markup),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_parsing() {
        assert_eq!(parse_aspect_ratio("1:1").unwrap(), (1, 1));
        assert_eq!(parse_aspect_ratio("16:9").unwrap(), (16, 9));
        assert!(parse_aspect_ratio("0:1").is_err());
        assert!(parse_aspect_ratio("1:101").is_err());
        assert!(parse_aspect_ratio("16x9").is_err());
        assert!(parse_aspect_ratio("a:b").is_err());
    }
}
