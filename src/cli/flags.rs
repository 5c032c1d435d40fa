//! Flag parsing for the download command
//!
//! The host passes a raw argument vector with positionals first (command
//! name, app name, optional remote path) and flags after. The grammar is
//! deliberately small and its error strings are part of the CLI contract,
//! so parsing is done here rather than through a derive-based parser.
//!
//! Recognized flags:
//! - `--overwrite` replace the contents of an existing download root
//! - `--verbose` per-file progress output
//! - `--i` / `--instance` application instance index (must be an integer)
//! - `--omit` skip remote paths containing this substring

use crate::constants::flags::DEFAULT_INSTANCE;
use crate::errors::{FlagError, FlagResult};

/// Parsed flag values for a download invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagVals {
    /// Overwrite an existing non-empty download root
    pub overwrite: bool,
    /// Print each file as it is written
    pub verbose: bool,
    /// Instance index to read files from, kept as the string the user gave
    pub instance: String,
    /// Remote-path substring to exclude; empty means no exclusion
    pub omit: String,
}

impl Default for FlagVals {
    fn default() -> Self {
        Self {
            overwrite: false,
            verbose: false,
            instance: DEFAULT_INSTANCE.to_string(),
            omit: String::new(),
        }
    }
}

/// Parse the flag portion of the raw argument vector
///
/// `args[0]` is the command name and `args[1]` the app name; both are
/// skipped. `args[2]` is skipped too when it is a path rather than a flag.
/// Empty tokens are ignored, so a fixed-size argv padded with empty strings
/// parses the same as a trimmed one.
///
/// # Errors
///
/// Returns `FlagError::NotDefined` for an unrecognized flag,
/// `FlagError::MissingValue` for a value-taking flag at the end of the
/// argument list, and `FlagError::InvalidValue` when the instance value is
/// not an integer.
pub fn parse_flags(args: &[String]) -> FlagResult<FlagVals> {
    let mut vals = FlagVals::default();

    // Positionals: command, app name, optional path argument.
    let mut start = 2.min(args.len());
    if let Some(path_arg) = args.get(2) {
        if !path_arg.is_empty() && !path_arg.starts_with('-') {
            start = 3;
        }
    }

    let mut iter = args[start..].iter().filter(|t| !t.is_empty());
    while let Some(token) = iter.next() {
        let (name, inline_value) = split_flag_token(token)?;

        match name {
            "overwrite" => vals.overwrite = parse_bool_flag(name, inline_value)?,
            "verbose" => vals.verbose = parse_bool_flag(name, inline_value)?,
            "i" | "instance" => {
                let value = take_value(name, inline_value, &mut iter)?;
                if value.parse::<i64>().is_err() {
                    return Err(FlagError::InvalidValue {
                        flag: name.to_string(),
                        value,
                    });
                }
                vals.instance = value;
            }
            "omit" => {
                vals.omit = take_value(name, inline_value, &mut iter)?;
            }
            _ => {
                return Err(FlagError::NotDefined {
                    token: format!("-{}", name),
                });
            }
        }
    }

    Ok(vals)
}

/// Split a token into its flag name and optional `=value` part
///
/// One or two leading dashes are accepted and are not distinguished.
fn split_flag_token(token: &str) -> FlagResult<(&str, Option<&str>)> {
    let stripped = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))
        .ok_or_else(|| FlagError::NotDefined {
            token: token.to_string(),
        })?;

    if stripped.is_empty() {
        return Err(FlagError::NotDefined {
            token: token.to_string(),
        });
    }

    match stripped.split_once('=') {
        Some((name, value)) => Ok((name, Some(value))),
        None => Ok((stripped, None)),
    }
}

/// Resolve a boolean flag, honoring an explicit `=true` / `=false`
fn parse_bool_flag(name: &str, inline_value: Option<&str>) -> FlagResult<bool> {
    match inline_value {
        None => Ok(true),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(FlagError::InvalidValue {
            flag: name.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Resolve a value-taking flag from either `=value` or the next token
fn take_value<'a, I>(name: &str, inline_value: Option<&str>, iter: &mut I) -> FlagResult<String>
where
    I: Iterator<Item = &'a String>,
{
    if let Some(value) = inline_value {
        return Ok(value.to_string());
    }
    iter.next()
        .map(|v| v.to_string())
        .ok_or_else(|| FlagError::MissingValue {
            token: format!("-{}", name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_flags() {
        let vals = parse_flags(&argv(&["download", "app", "app/files"])).unwrap();
        assert_eq!(vals, FlagVals::default());
        assert_eq!(vals.instance, "0");
    }

    #[test]
    fn test_equals_form() {
        let vals = parse_flags(&argv(&["download", "app", "--omit=app/node_modules"])).unwrap();
        assert_eq!(vals.omit, "app/node_modules");

        let vals = parse_flags(&argv(&["download", "app", "--instance=12"])).unwrap();
        assert_eq!(vals.instance, "12");
    }

    #[test]
    fn test_single_dash_accepted() {
        let vals = parse_flags(&argv(&["download", "app", "-verbose", "-i", "2"])).unwrap();
        assert!(vals.verbose);
        assert_eq!(vals.instance, "2");
    }

    #[test]
    fn test_missing_value_for_omit() {
        let err = parse_flags(&argv(&["download", "app", "--omit"])).unwrap_err();
        assert_eq!(
            err,
            FlagError::MissingValue {
                token: "-omit".to_string()
            }
        );
    }

    #[test]
    fn test_negative_instance_is_still_an_integer() {
        let vals = parse_flags(&argv(&["download", "app", "--i", "-1"])).unwrap();
        assert_eq!(vals.instance, "-1");
    }

    #[test]
    fn test_bool_flag_with_explicit_value() {
        let vals = parse_flags(&argv(&["download", "app", "--overwrite=false"])).unwrap();
        assert!(!vals.overwrite);

        let err = parse_flags(&argv(&["download", "app", "--verbose=maybe"])).unwrap_err();
        assert_eq!(
            err,
            FlagError::InvalidValue {
                flag: "verbose".to_string(),
                value: "maybe".to_string()
            }
        );
    }
}
