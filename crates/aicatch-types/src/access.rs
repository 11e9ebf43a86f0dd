//! Access policy for the catalog endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Which requests must carry the bearer token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessPolicy {
    /// No authentication anywhere.
    #[default]
    Open,
    /// Reads are public; create, update and delete need the token.
    ProtectMutations,
    /// Every catalog request needs the token, including the HTML browse
    /// page at `/`, which browsers cannot authenticate. Health probes stay
    /// open.
    ProtectAll,
}

impl AccessPolicy {
    /// Returns true if a request of this kind must be authenticated.
    pub fn requires_token(&self, is_mutation: bool) -> bool {
        match self {
            Self::Open => false,
            Self::ProtectMutations => is_mutation,
            Self::ProtectAll => true,
        }
    }
}

impl fmt::Display for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Open => "open",
            Self::ProtectMutations => "protect_mutations",
            Self::ProtectAll => "protect_all",
        };
        f.write_str(s)
    }
}

impl FromStr for AccessPolicy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "open" => Ok(Self::Open),
            "protect_mutations" => Ok(Self::ProtectMutations),
            "protect_all" => Ok(Self::ProtectAll),
            other => Err(CatalogError::invalid_input(format!(
                "unknown access policy '{other}'"
            ))),
        }
    }
}
