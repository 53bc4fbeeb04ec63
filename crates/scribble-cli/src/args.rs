//! Command-line argument parsing.

use crate::error::{CliError, CliResult};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: scribble <samples.json> [options]

Render a freehand stroke from pointer samples as SVG path data.

Options:
  --options <file>   Stroke options as JSON (all fields optional)
  --seed <id>        Seed for the hand-drawn jitter (default: random)
  --rough            Emit the hand-drawn double path
  --svg              Wrap the path in a standalone SVG document
  --output <file>    Write to a file instead of stdout
  --help             Show this message";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Render(RenderArgs),
}

/// Arguments for rendering a stroke.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderArgs {
    pub samples: PathBuf,
    pub options: Option<PathBuf>,
    pub seed: Option<String>,
    pub rough: bool,
    pub svg: bool,
    pub output: Option<PathBuf>,
}

fn value_for<I: Iterator<Item = String>>(flag: &str, args: &mut I) -> CliResult<String> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("{} requires a value", flag)))
}

/// Parse arguments, not including the program name.
pub fn parse<I: IntoIterator<Item = String>>(args: I) -> CliResult<Command> {
    let mut args = args.into_iter();
    let mut samples = None;
    let mut render = RenderArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--options" => render.options = Some(value_for(&arg, &mut args)?.into()),
            "--seed" => render.seed = Some(value_for(&arg, &mut args)?),
            "--output" | "-o" => render.output = Some(value_for(&arg, &mut args)?.into()),
            "--rough" => render.rough = true,
            "--svg" => render.svg = true,
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("Unknown option: {}", flag)));
            }
            path => {
                if samples.replace(PathBuf::from(path)).is_some() {
                    return Err(CliError::Usage("Only one samples file may be given".to_string()));
                }
            }
        }
    }

    render.samples = samples.ok_or_else(|| CliError::Usage("Missing samples file".to_string()))?;
    Ok(Command::Render(render))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_minimal() {
        let command = parse(args(&["stroke.json"])).unwrap();
        assert_eq!(
            command,
            Command::Render(RenderArgs {
                samples: PathBuf::from("stroke.json"),
                ..RenderArgs::default()
            })
        );
    }

    #[test]
    fn test_parse_all_flags() {
        let command = parse(args(&[
            "--options", "opts.json", "--seed", "shape:1", "--rough", "--svg", "-o", "out.svg",
            "stroke.json",
        ]))
        .unwrap();

        let Command::Render(render) = command else {
            panic!("expected render command");
        };
        assert_eq!(render.samples, PathBuf::from("stroke.json"));
        assert_eq!(render.options, Some(PathBuf::from("opts.json")));
        assert_eq!(render.seed.as_deref(), Some("shape:1"));
        assert!(render.rough);
        assert!(render.svg);
        assert_eq!(render.output, Some(PathBuf::from("out.svg")));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(args(&["stroke.json", "--help"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(args(&[])), Err(CliError::Usage(_))));
        assert!(matches!(parse(args(&["a.json", "b.json"])), Err(CliError::Usage(_))));
        assert!(matches!(parse(args(&["a.json", "--seed"])), Err(CliError::Usage(_))));
        assert!(matches!(parse(args(&["a.json", "--bogus"])), Err(CliError::Usage(_))));
    }
}
