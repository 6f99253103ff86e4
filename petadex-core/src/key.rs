use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Upper bound on the length of any lookup key. Callers are expected to reject longer keys
/// before they reach the [`Facade`](crate::Facade).
pub const MAX_KEY_LEN: usize = 64;

/// Identifier of one biological sequence entry, shared by every accession-keyed table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessionKey(String);

/// Identifier of one synthesized-gene construct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneId(String);

macro_rules! string_key {
    ($key:ident) => {
        impl $key {
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $key {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $key {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $key {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Display for $key {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_key!(AccessionKey);
string_key!(GeneId);

/// How gene metadata is looked up: by its own id, or by the accession it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneLookup {
    Gene(GeneId),
    Accession(AccessionKey),
    All,
}
