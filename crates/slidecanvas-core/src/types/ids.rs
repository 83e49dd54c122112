//! Identifier types shared across crates.

use serde::{Deserialize, Serialize};

/// Stable identity of a text overlay.
///
/// Ids are generated by the overlay store in increasing order and are never
/// reused, so a stale id can only ever miss, never alias another overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OverlayId(pub u64);

impl OverlayId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OverlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "overlay#{}", self.0)
    }
}

impl From<u64> for OverlayId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
