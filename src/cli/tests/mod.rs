//! Table-driven tests over the flag grammar and directory-context rules
//!
//! These mirror how users actually invoke the tool: a raw argument vector
//! with positionals first, flags after, and any mix of leading/trailing
//! slashes on the path argument.

use std::path::{Path, PathBuf};

use crate::cli::context::DirectoryContext;
use crate::cli::flags::{parse_flags, FlagVals};
use crate::errors::FlagError;

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Pad to a fixed argv size the way a host runtime hands arguments over
fn padded_argv(tokens: &[&str]) -> Vec<String> {
    let mut args = argv(tokens);
    args.resize(7, String::new());
    args
}

#[test]
fn flag_combinations() {
    struct Case {
        name: &'static str,
        args: Vec<String>,
        expect: FlagVals,
    }

    let cases = vec![
        Case {
            name: "overwrite after path",
            args: padded_argv(&["download", "app", "app/files/htdocs", "--overwrite"]),
            expect: FlagVals {
                overwrite: true,
                ..FlagVals::default()
            },
        },
        Case {
            name: "verbose without path",
            args: padded_argv(&["download", "app", "--verbose"]),
            expect: FlagVals {
                verbose: true,
                ..FlagVals::default()
            },
        },
        Case {
            name: "short instance flag",
            args: padded_argv(&["download", "app", "--i", "3"]),
            expect: FlagVals {
                instance: "3".to_string(),
                ..FlagVals::default()
            },
        },
        Case {
            name: "long instance flag",
            args: padded_argv(&["download", "app", "--instance", "2"]),
            expect: FlagVals {
                instance: "2".to_string(),
                ..FlagVals::default()
            },
        },
        Case {
            name: "omit flag",
            args: padded_argv(&["download", "app", "--omit", "app/node_modules"]),
            expect: FlagVals {
                omit: "app/node_modules".to_string(),
                ..FlagVals::default()
            },
        },
        Case {
            name: "everything at once",
            args: argv(&[
                "download",
                "app",
                "app/files",
                "--overwrite",
                "--verbose",
                "--i",
                "1",
                "--omit",
                "logs",
            ]),
            expect: FlagVals {
                overwrite: true,
                verbose: true,
                instance: "1".to_string(),
                omit: "logs".to_string(),
            },
        },
        Case {
            name: "no flags at all",
            args: padded_argv(&["download", "app"]),
            expect: FlagVals::default(),
        },
    ];

    for case in cases {
        let vals = parse_flags(&case.args)
            .unwrap_or_else(|e| panic!("case '{}' failed: {}", case.name, e));
        assert_eq!(vals, case.expect, "case '{}'", case.name);
    }
}

#[test]
fn unknown_flag_reports_the_token() {
    let err = parse_flags(&padded_argv(&["download", "test", "-ooverwrite"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "flag provided but not defined: -ooverwrite"
    );
}

#[test]
fn non_integer_instance_is_rejected() {
    let err = parse_flags(&padded_argv(&["download", "test", "-i", "hello"])).unwrap_err();
    assert_eq!(
        err,
        FlagError::InvalidValue {
            flag: "i".to_string(),
            value: "hello".to_string()
        }
    );
    assert!(err.to_string().contains("invalid value \"hello\""));
}

#[test]
fn directory_context_slash_permutations() {
    // 0, 1, or both leading/trailing slashes resolve identically
    let inputs = [
        "app/src/node",
        "/app/src/node",
        "app/src/node/",
        "/app/src/node/",
    ];

    let cwd = Path::new("/home/user/work");
    for input in inputs {
        let args = padded_argv(&["download", "app_name", input, "--verbose"]);
        let context = DirectoryContext::resolve(cwd, &args);

        let expected_root: PathBuf = cwd
            .join("app-download")
            .join("app_name")
            .join("app")
            .join("src")
            .join("node");
        assert_eq!(context.download_root, expected_root, "input: {input}");
        assert_eq!(context.starting_path, "/app/src/node/", "input: {input}");
    }
}

#[test]
fn directory_context_uses_native_cwd_prefix() {
    let cwd = std::env::current_dir().unwrap();
    let args = padded_argv(&["download", "app_name", "app/src/node", "--verbose"]);
    let context = DirectoryContext::resolve(&cwd, &args);

    assert!(
        context.download_root.starts_with(&cwd),
        "{} does not start with {}",
        context.download_root.display(),
        cwd.display()
    );
}

#[test]
fn directory_context_without_path_argument() {
    let cwd = Path::new("/home/user/work");

    // Path slot missing entirely
    let context = DirectoryContext::resolve(cwd, &argv(&["download", "app_name"]));
    assert_eq!(
        context.download_root,
        cwd.join("app-download").join("app_name")
    );
    assert_eq!(context.starting_path, "/");

    // Path slot holding a flag
    let context =
        DirectoryContext::resolve(cwd, &padded_argv(&["download", "app_name", "--verbose"]));
    assert_eq!(
        context.download_root,
        cwd.join("app-download").join("app_name")
    );
    assert_eq!(context.starting_path, "/");
}

#[test]
fn directory_context_root_path_argument() {
    let cwd = Path::new("/home/user/work");
    let context = DirectoryContext::resolve(cwd, &padded_argv(&["download", "app_name", "/"]));
    assert_eq!(
        context.download_root,
        cwd.join("app-download").join("app_name")
    );
    assert_eq!(context.starting_path, "/");
}

#[test]
fn directory_context_single_segment() {
    let cwd = Path::new("/home/user/work");
    let context =
        DirectoryContext::resolve(cwd, &padded_argv(&["download", "app_name", "htdocs/"]));
    assert_eq!(
        context.download_root,
        cwd.join("app-download").join("app_name").join("htdocs")
    );
    assert_eq!(context.starting_path, "/htdocs/");
}
