//! Barcode validation and the deduplicating collection.

use std::collections::HashSet;
use std::fmt;

/// Barcodes this short are almost always data-entry noise
const MIN_LEN_EXCLUSIVE: usize = 3;

/// A release barcode that passed the validity rule: non-empty, ASCII
/// decimal digits only, and longer than three characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Barcode(String);

impl Barcode {
    /// Validate a raw barcode string from the catalog.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() > MIN_LEN_EXCLUSIVE && raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique valid barcodes, in no particular order
#[derive(Debug, Clone, Default)]
pub struct BarcodeSet {
    inner: HashSet<Barcode>,
}

impl BarcodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `candidate` if it is a valid barcode not seen before.
    ///
    /// Returns `true` if the set grew.
    pub fn offer(&mut self, candidate: Option<&str>) -> bool {
        match candidate.and_then(Barcode::parse) {
            Some(barcode) => self.inner.insert(barcode),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, barcode: &str) -> bool {
        Barcode::parse(barcode).is_some_and(|b| self.inner.contains(&b))
    }

    /// Up to `limit` members, in set iteration order.
    ///
    /// When the set holds more than `limit`, which members come back is
    /// unspecified - only that they are distinct members of the set.
    pub fn take(&self, limit: usize) -> Vec<&Barcode> {
        self.inner.iter().take(limit).collect()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Barcode> {
        self.inner.iter()
    }
}
