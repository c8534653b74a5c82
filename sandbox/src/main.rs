// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Sylva Sandbox
// Loads generator streams, decodes them and reports the resulting draw calls.

mod demo;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sylva_core::lane::Lane;
use sylva_io::{config::DEFAULT_SETTINGS_FILE, load_stream, DecoderSettings};
use sylva_lanes::{CoordinateConvention, RenderAssembly, RenderFrame};

#[derive(Parser, Debug)]
#[command(name = "sandbox")]
#[command(about = "Decode generator line and polygon streams into draw calls")]
struct Args {
    /// Decoder settings file (RON, or JSON with a .json extension)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Line stream file (.bin/.f64 for little-endian f64, text otherwise)
    #[arg(short, long)]
    lines: Option<PathBuf>,

    /// Polygon stream file (.bin/.f64 for little-endian f64, text otherwise)
    #[arg(short, long)]
    polygons: Option<PathBuf>,

    /// Decode the built-in demo tree
    #[arg(long, conflicts_with_all = ["lines", "polygons"])]
    demo: bool,

    /// Keep the generator's Y axis instead of negating it
    #[arg(long)]
    keep_y: bool,
}

impl Args {
    fn wants_demo(&self) -> bool {
        self.demo || (self.lines.is_none() && self.polygons.is_none())
    }
}

fn load_settings(args: &Args) -> Result<DecoderSettings> {
    if let Some(path) = &args.settings {
        return DecoderSettings::from_file(path)
            .with_context(|| format!("Failed to load settings from '{}'", path.display()));
    }

    let fallback = Path::new(DEFAULT_SETTINGS_FILE);
    if fallback.exists() {
        return DecoderSettings::from_file(fallback)
            .with_context(|| format!("Failed to load settings from '{}'", fallback.display()));
    }

    log::info!("No settings file, using defaults");
    Ok(if args.wants_demo() {
        demo::settings()
    } else {
        DecoderSettings::default()
    })
}

fn load_optional_stream(path: Option<&Path>) -> Result<Vec<f64>> {
    match path {
        Some(path) => load_stream(path)
            .with_context(|| format!("Failed to load stream '{}'", path.display())),
        None => Ok(Vec::new()),
    }
}

fn report(frame: &RenderFrame) {
    for (i, call) in frame.line_draws.iter().enumerate() {
        log::debug!(
            "line draw #{i}: width {}, {} segment(s), {} byte(s)",
            call.width,
            call.segment_count(),
            call.as_bytes().len()
        );
    }
    for (i, call) in frame.polygon_draws.iter().enumerate() {
        log::debug!(
            "polygon draw #{i}: color {}, {} triangle(s), normal {:?}",
            call.color.to_hex(),
            call.triangle_count(),
            call.normal
        );
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = load_settings(&args)?;
    let palette = settings
        .build_palette()
        .context("Invalid palette settings")?;

    let (lines, polygons) = if args.wants_demo() {
        demo::streams(&palette)?
    } else {
        (
            load_optional_stream(args.lines.as_deref())?,
            load_optional_stream(args.polygons.as_deref())?,
        )
    };

    let decoder = settings.scene_decoder();
    log::debug!(
        "Decoding with '{}' and '{}'",
        decoder.line_lane().strategy_name(),
        decoder.polygon_lane().strategy_name()
    );
    let scene = match decoder.decode(&lines, &polygons, &palette) {
        Ok(scene) => scene,
        Err(err) => {
            let partial = err.partial.summary();
            log::warn!(
                "Decoded {} batch(es) and {} polygon(s) before the failure",
                partial.batch_count,
                partial.polygon_count
            );
            return Err(err).context("Scene decode failed");
        }
    };

    let summary = scene.summary();
    log::info!(
        "{} line batch(es) ({} empty) holding {} segment(s), {} polygon(s) with {} vertex(es)",
        summary.batch_count,
        summary.empty_batch_count,
        summary.segment_count,
        summary.polygon_count,
        summary.vertex_count
    );
    if let Some(bounds) = scene.bounds() {
        log::info!(
            "Scene bounds: {:?} .. {:?} (center {:?}, extent {:?})",
            bounds.min,
            bounds.max,
            bounds.center(),
            bounds.extent()
        );
    }

    let assembly = RenderAssembly::with_convention(CoordinateConvention {
        flip_y: !args.keep_y,
    });
    let frame = assembly.assemble(&scene);
    log::info!("{} draw call(s) ready", frame.draw_call_count());
    report(&frame);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_conflicts_with_stream_files() {
        let err = Args::try_parse_from(["sandbox", "--demo", "--lines", "lines.bin"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        assert!(Args::try_parse_from(["sandbox", "--demo", "-p", "polygons.txt"]).is_err());
    }

    #[test]
    fn test_demo_is_the_fallback() {
        let args = Args::try_parse_from(["sandbox"]).unwrap();
        assert!(args.wants_demo());

        let args = Args::try_parse_from(["sandbox", "--lines", "lines.bin"]).unwrap();
        assert!(!args.wants_demo());
    }
}
