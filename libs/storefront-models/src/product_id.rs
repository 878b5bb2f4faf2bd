//! Validated product identifiers

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static PRODUCT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^MLA[0-9]+$").expect("product id pattern is valid"));

/// Catalog product ID of the form `MLA` followed by digits (e.g. `MLA1423041613`).
///
/// Construction is the only place the format is checked, so holding a
/// `ProductId` means the value is well-formed. Whether a product with that
/// ID exists is a separate question answered by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(id: &str) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(Error::EmptyProductId);
        }
        if !PRODUCT_ID_PATTERN.is_match(id) {
            return Err(Error::InvalidProductId(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for ProductId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
