//! Command-line flags.

use std::fmt;
use std::path::PathBuf;

use export::ExportFormat;

pub const USAGE: &str = "\
Usage: resilience-sim [--export <dir> [--format csv|json|text]]

  (no flags)        open the interactive dashboard
  --export <dir>    write every module x scenario table to <dir> and exit
  --format <fmt>    output format for --export (default: csv)
  --help            print this message";

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Dashboard,
    BatchExport { dir: PathBuf, format: ExportFormat },
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    MissingValue(&'static str),
    UnknownFormat(String),
    UnknownFlag(String),
    FormatWithoutExport,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingValue(flag) => write!(f, "{flag} requires a value"),
            CliError::UnknownFormat(v) => {
                write!(f, "unknown format '{v}' (expected csv, json or text)")
            }
            CliError::UnknownFlag(v) => write!(f, "unknown argument '{v}'"),
            CliError::FormatWithoutExport => write!(f, "--format only applies with --export"),
        }
    }
}

impl std::error::Error for CliError {}

/// Parse arguments (without the program name).
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Mode, CliError> {
    let mut dir: Option<PathBuf> = None;
    let mut format: Option<ExportFormat> = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Mode::Help),
            "--export" => {
                let value = args.next().ok_or(CliError::MissingValue("--export"))?;
                dir = Some(PathBuf::from(value));
            }
            "--format" => {
                let value = args.next().ok_or(CliError::MissingValue("--format"))?;
                format = Some(ExportFormat::parse(&value).ok_or(CliError::UnknownFormat(value))?);
            }
            _ => return Err(CliError::UnknownFlag(arg)),
        }
    }

    match (dir, format) {
        (Some(dir), format) => Ok(Mode::BatchExport {
            dir,
            format: format.unwrap_or_default(),
        }),
        (None, Some(_)) => Err(CliError::FormatWithoutExport),
        (None, None) => Ok(Mode::Dashboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Mode, CliError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_opens_dashboard() {
        assert_eq!(parse(&[]), Ok(Mode::Dashboard));
    }

    #[test]
    fn test_export_defaults_to_csv() {
        assert_eq!(
            parse(&["--export", "out"]),
            Ok(Mode::BatchExport {
                dir: PathBuf::from("out"),
                format: ExportFormat::Csv,
            })
        );
    }

    #[test]
    fn test_export_with_format_either_order() {
        let expected = Ok(Mode::BatchExport {
            dir: PathBuf::from("out"),
            format: ExportFormat::Json,
        });
        assert_eq!(parse(&["--export", "out", "--format", "json"]), expected);
        assert_eq!(parse(&["--format", "json", "--export", "out"]), expected);
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(parse(&["--export"]), Err(CliError::MissingValue("--export")));
        assert_eq!(
            parse(&["--export", "out", "--format"]),
            Err(CliError::MissingValue("--format"))
        );
    }

    #[test]
    fn test_bad_format_and_flag() {
        assert_eq!(
            parse(&["--export", "out", "--format", "xml"]),
            Err(CliError::UnknownFormat("xml".into()))
        );
        assert_eq!(parse(&["--verbose"]), Err(CliError::UnknownFlag("--verbose".into())));
    }

    #[test]
    fn test_format_alone_rejected() {
        assert_eq!(parse(&["--format", "text"]), Err(CliError::FormatWithoutExport));
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["--export", "out", "--help"]), Ok(Mode::Help));
    }
}
