use std::fmt;

use serde::{Deserialize, Serialize};

/// An error that occurs while reading or writing a [`BuildConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input is not a valid TOML build configuration.
    #[error("failed to parse build configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration could not be written as TOML.
    #[error("failed to serialize build configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Which implementation of [`MemoryAccess`](crate::MemoryAccess) a build uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// Every access validates its precondition and aborts on violation.
    Checked,
    /// Accesses compile to the raw pointer expression.
    Unchecked,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Checked => f.write_str("checked"),
            AccessMode::Unchecked => f.write_str("unchecked"),
        }
    }
}

/// The safety configuration of a build.
///
/// The configuration of the running program is fixed at compile time and available as
/// [`BuildConfig::CURRENT`]. Other values only describe hypothetical builds, e.g. the options a
/// translation was requested with, so they can be compared against the linked runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildConfig {
    /// `rpy_assert!` checks are compiled in.
    pub assertions_enabled: bool,
    /// All field and array accesses are checked.
    pub ll_assertions_enabled: bool,
    /// The program executes untrusted code, which always requires checked access.
    pub sandboxed: bool,
}

impl BuildConfig {
    /// The configuration this crate was compiled with.
    pub const CURRENT: BuildConfig = BuildConfig {
        assertions_enabled: cfg!(feature = "assertions"),
        ll_assertions_enabled: cfg!(feature = "ll-assertions"),
        sandboxed: cfg!(feature = "sandboxed"),
    };

    /// Returns true if field and array accesses go through the checked implementation.
    pub const fn checked_access(&self) -> bool {
        self.ll_assertions_enabled || self.sandboxed
    }

    /// Returns the access implementation selected by this configuration.
    pub const fn access_mode(&self) -> AccessMode {
        if self.checked_access() {
            AccessMode::Checked
        } else {
            AccessMode::Unchecked
        }
    }

    /// Parses a configuration from TOML. Missing keys default to `false`.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "assertions:    {}", on_off(self.assertions_enabled))?;
        writeln!(f, "ll-assertions: {}", on_off(self.ll_assertions_enabled))?;
        writeln!(f, "sandboxed:     {}", on_off(self.sandboxed))?;
        write!(f, "access:        {}", self.access_mode())
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
