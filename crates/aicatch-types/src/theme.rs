//! Light/dark presentation mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Colour scheme used by rendered views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the viewer's `prefers-color-scheme`.
    #[default]
    Auto,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        };
        f.write_str(s)
    }
}

impl FromStr for ThemeMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(CatalogError::invalid_input(format!(
                "unknown theme '{other}' (expected light, dark or auto)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("neon".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn default_follows_viewer() {
        assert_eq!(ThemeMode::default(), ThemeMode::Auto);
        assert_eq!(ThemeMode::Auto.to_string(), "auto");
    }
}
