//! Scribble command-line renderer.
//!
//! Reads pointer samples as JSON, runs the stroke pipeline and prints SVG
//! path data (or a whole SVG document).

mod args;
mod error;
mod svg;

use args::{Command, RenderArgs};
use error::{CliError, CliResult};
use scribble_core::geometry::bounds;
use scribble_core::{get_stroke, RawSample, StrokeOptions};
use scribble_render::{emit_rough_path, emit_smooth_path};
use std::fs;
use std::path::Path;
use uuid::Uuid;

fn main() {
    env_logger::init();

    if let Err(e) = run(std::env::args().skip(1)) {
        log::error!("{}", e);
        eprintln!("scribble: {}", e);
        if matches!(e, CliError::Usage(_)) {
            eprintln!("\n{}", args::USAGE);
        }
        std::process::exit(1);
    }
}

fn run<I: IntoIterator<Item = String>>(argv: I) -> CliResult<()> {
    let render_args = match args::parse(argv)? {
        Command::Help => {
            println!("{}", args::USAGE);
            return Ok(());
        }
        Command::Render(render_args) => render_args,
    };

    let output = render(&render_args)?;

    match &render_args.output {
        Some(path) => {
            fs::write(path, &output).map_err(|e| {
                CliError::Io(format!("Failed to write {}: {}", path.display(), e))
            })?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

fn load_samples(path: &Path) -> CliResult<Vec<RawSample>> {
    let json = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&json)
        .map_err(|e| CliError::Samples(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Produce the requested output text for a samples file.
fn render(render_args: &RenderArgs) -> CliResult<String> {
    let samples = load_samples(&render_args.samples)?;
    let options = match &render_args.options {
        Some(path) => StrokeOptions::from_file(path)?,
        None => StrokeOptions::default(),
    };

    log::info!(
        "Rendering {} samples from {}",
        samples.len(),
        render_args.samples.display()
    );

    let outline = get_stroke(&samples, &options);
    if outline.is_empty() {
        log::warn!("Stroke produced an empty outline");
    }

    let path_data = if render_args.rough {
        let seed = render_args
            .seed
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        log::debug!("Hand-drawn seed: {}", seed);
        emit_rough_path(&seed, &outline, options.size).1
    } else {
        emit_smooth_path(&outline, true)
    };

    Ok(if render_args.svg {
        svg::document(&path_data, bounds(&outline))
    } else {
        path_data
    })
}
