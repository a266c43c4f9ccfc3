use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::CliArgs;
use crate::image_pipeline::{ConversionError, Result};

/// Bare words that look like a mistyped flag when given without a format.
pub const RESERVED_KEYWORDS: [&str; 4] = ["formats", "info", "version", "doctor"];

/// The single behaviour an invocation resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatingMode {
    Help,
    ListFormats,
    ShowVersion,
    Doctor,
    ShowInfo(PathBuf),
    Convert {
        input: PathBuf,
        target_format: String,
    },
}

/// Decides the operating mode.
///
/// Flags win over everything else and are checked in a fixed order: help,
/// formats, version, doctor, info. Otherwise positional fields take
/// precedence over `--input` / `--format`, and a lone input means "describe
/// this file". Empty values count as absent.
pub fn resolve(args: CliArgs) -> Result<OperatingMode> {
    if args.help {
        return Ok(OperatingMode::Help);
    }
    if args.formats {
        return Ok(OperatingMode::ListFormats);
    }
    if args.version {
        return Ok(OperatingMode::ShowVersion);
    }
    if args.doctor {
        return Ok(OperatingMode::Doctor);
    }
    if let Some(path) = non_empty_path(args.info) {
        return Ok(OperatingMode::ShowInfo(path));
    }

    let input = non_empty_path(args.input_file).or_else(|| non_empty_path(args.input_file_opt));
    let target_format =
        non_empty(args.target_format).or_else(|| non_empty(args.target_format_opt));
    debug!(?input, ?target_format, "Resolved positional and named fields");

    match (input, target_format) {
        (Some(input), None) => {
            if let Some(keyword) = reserved_keyword(&input) {
                return Err(ConversionError::ReservedKeyword(keyword.to_string()));
            }
            Ok(OperatingMode::ShowInfo(input))
        }
        (Some(input), Some(target_format)) => Ok(OperatingMode::Convert {
            input,
            target_format,
        }),
        (None, _) => Err(ConversionError::MissingArgs),
    }
}

fn reserved_keyword(input: &Path) -> Option<&'static str> {
    RESERVED_KEYWORDS
        .into_iter()
        .find(|keyword| input.as_os_str() == *keyword)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_path(value: Option<PathBuf>) -> Option<PathBuf> {
    value.filter(|v| !v.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positional(input: &str, format: Option<&str>) -> CliArgs {
        CliArgs {
            input_file: Some(input.into()),
            target_format: format.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_flags_take_priority_in_order() {
        let everything = CliArgs {
            help: true,
            formats: true,
            version: true,
            doctor: true,
            info: Some("a.png".into()),
            ..positional("b.png", Some("webp"))
        };
        assert_eq!(resolve(everything.clone()).unwrap(), OperatingMode::Help);

        let args = CliArgs { help: false, ..everything };
        assert_eq!(resolve(args.clone()).unwrap(), OperatingMode::ListFormats);

        let args = CliArgs { formats: false, ..args };
        assert_eq!(resolve(args.clone()).unwrap(), OperatingMode::ShowVersion);

        let args = CliArgs { version: false, ..args };
        assert_eq!(resolve(args.clone()).unwrap(), OperatingMode::Doctor);

        let args = CliArgs { doctor: false, ..args };
        assert_eq!(resolve(args).unwrap(), OperatingMode::ShowInfo("a.png".into()));
    }

    #[test]
    fn test_single_argument_is_info() {
        assert_eq!(
            resolve(positional("photo.png", None)).unwrap(),
            OperatingMode::ShowInfo("photo.png".into())
        );
        let named = CliArgs {
            input_file_opt: Some("photo.png".into()),
            ..Default::default()
        };
        assert_eq!(resolve(named).unwrap(), OperatingMode::ShowInfo("photo.png".into()));
    }

    #[test]
    fn test_reserved_keyword_without_format() {
        for keyword in RESERVED_KEYWORDS {
            let err = resolve(positional(keyword, None)).unwrap_err();
            assert!(matches!(err, ConversionError::ReservedKeyword(ref k) if k == keyword));
        }
    }

    #[test]
    fn test_reserved_keyword_with_format_is_a_file() {
        assert_eq!(
            resolve(positional("formats", Some("custom"))).unwrap(),
            OperatingMode::Convert {
                input: "formats".into(),
                target_format: "custom".into(),
            }
        );
    }

    #[test]
    fn test_positional_beats_named() {
        let args = CliArgs {
            input_file_opt: Some("named.png".into()),
            target_format_opt: Some("avif".into()),
            ..positional("positional.png", Some("webp"))
        };
        assert_eq!(
            resolve(args).unwrap(),
            OperatingMode::Convert {
                input: "positional.png".into(),
                target_format: "webp".into(),
            }
        );
    }

    #[test]
    fn test_named_fields_fill_gaps() {
        let args = CliArgs {
            target_format_opt: Some("jpg".into()),
            ..positional("photo.png", None)
        };
        assert_eq!(
            resolve(args).unwrap(),
            OperatingMode::Convert {
                input: "photo.png".into(),
                target_format: "jpg".into(),
            }
        );
    }

    #[test]
    fn test_missing_args() {
        assert!(matches!(resolve(CliArgs::default()), Err(ConversionError::MissingArgs)));

        let format_only = CliArgs {
            target_format_opt: Some("png".into()),
            ..Default::default()
        };
        assert!(matches!(resolve(format_only), Err(ConversionError::MissingArgs)));

        let empty = CliArgs {
            info: Some(PathBuf::new()),
            input_file: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(matches!(resolve(empty), Err(ConversionError::MissingArgs)));
    }
}
