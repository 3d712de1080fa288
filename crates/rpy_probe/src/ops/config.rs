use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use rpy_support::BuildConfig;

use crate::ExitStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Toml,
}

#[derive(clap::Args)]
pub struct Args {
    /// Output format
    #[clap(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// A TOML file with the configuration the build is expected to have. The command fails if the
    /// library was built differently.
    #[clap(long)]
    expect: Option<PathBuf>,
}

/// Prints the build configuration, optionally verifying it against an expected one.
pub fn config(args: Args) -> anyhow::Result<ExitStatus> {
    let current = BuildConfig::CURRENT;

    match args.format {
        Format::Text => println!("{current}"),
        Format::Toml => print!("{}", current.to_toml_string()?),
    }

    let Some(path) = args.expect else {
        return Ok(ExitStatus::Success);
    };

    let source = fs::read_to_string(&path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let expected = BuildConfig::from_toml_str(&source)
        .with_context(|| format!("invalid build configuration in '{}'", path.display()))?;

    let fields = [
        (
            "assertions-enabled",
            expected.assertions_enabled,
            current.assertions_enabled,
        ),
        (
            "ll-assertions-enabled",
            expected.ll_assertions_enabled,
            current.ll_assertions_enabled,
        ),
        ("sandboxed", expected.sandboxed, current.sandboxed),
    ];

    let mut matches = true;
    for (key, expected, found) in fields {
        if expected != found {
            log::error!("`{key}` is expected to be {expected} but the library was built with {found}");
            matches = false;
        }
    }

    if matches {
        log::info!("build matches '{}'", path.display());
    }
    Ok(matches.into())
}
