//! Added/removed bit computation between two flag sets.

use super::flags::StateFlags;
use serde::{Deserialize, Serialize};

/// Bits that became set (`added`) and bits that became unset (`removed`).
///
/// Diffs are derived values: they are computed from two states and never
/// stored in a container.
///
/// # Example
///
/// ```rust
/// use flagstate::core::{RawStates, StateDiff};
///
/// let old = RawStates::from_bits_retain(0b0110);
/// let new = RawStates::from_bits_retain(0b0011);
/// let diff = StateDiff::between(old, new);
///
/// assert_eq!(diff.added.bits(), 0b0001);
/// assert_eq!(diff.removed.bits(), 0b0100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDiff<F> {
    /// Bits unset before and set after
    pub added: F,
    /// Bits set before and unset after
    pub removed: F,
}

impl<F: StateFlags> StateDiff<F> {
    /// A diff with no added and no removed bits.
    pub fn none() -> Self {
        Self {
            added: F::empty(),
            removed: F::empty(),
        }
    }

    /// Diff of a full replacement from `old` to `new`.
    ///
    /// `added = ~old & new`, `removed = old & ~new`.
    pub fn between(old: F, new: F) -> Self {
        Self {
            added: Self::added(old, new),
            removed: Self::removed(old, new),
        }
    }

    /// Bits in `new` that are not in `old`.
    pub fn added(old: F, new: F) -> F {
        new.difference(old)
    }

    /// Bits in `old` that are not in `new`.
    pub fn removed(old: F, new: F) -> F {
        old.difference(new)
    }

    /// True when neither side has any bit.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
