//! Flag-set bounds shared by every bitmask state machine.
//!
//! Any type generated by [`bitflags::bitflags!`] is a valid flag set. Owners
//! that want raw, untyped masks use [`RawStates`], where every bit of a `u32`
//! is a known flag.

use bitflags::Flags;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Bound for bitmask states.
///
/// Blanket-implemented for every `bitflags` type that is `Copy`, comparable
/// and debuggable, so flag sets from different domains stay distinct types.
pub trait StateFlags: Flags + Copy + PartialEq + Debug {}

impl<F> StateFlags for F where F: Flags + Copy + PartialEq + Debug {}

bitflags::bitflags! {
    /// Untyped 32-bit state mask.
    ///
    /// Every bit is treated as a known flag, so no bit is ever truncated.
    ///
    /// ```rust
    /// use flagstate::core::RawStates;
    ///
    /// let idle = RawStates::from_bits_retain(0b0010);
    /// assert_eq!(idle.bits(), 2);
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct RawStates: u32 {
        const _ = !0;
    }
}

impl Default for RawStates {
    fn default() -> Self {
        Self::empty()
    }
}

/// Generic set helpers for any flag type.
///
/// Replaces the per-enum `has/add/remove/toggle` helpers with a single
/// implementation. All methods are pure and return new values.
///
/// # Example
///
/// ```rust
/// use flagstate::core::{FlagSetExt, RawStates};
///
/// let a = RawStates::from_bits_retain(0b0110);
/// let b = RawStates::from_bits_retain(0b0100);
///
/// assert!(a.has_flag(b));
/// assert_eq!(a.without_flag(b).bits(), 0b0010);
/// assert_eq!(a.toggled(RawStates::from_bits_retain(0b0011)).bits(), 0b0101);
/// ```
pub trait FlagSetExt: StateFlags {
    /// True when every bit of `flags` is set in `self`.
    fn has_flag(self, flags: Self) -> bool {
        self.union(flags) == self
    }

    /// True when at least one bit of `flags` is set in `self`.
    fn has_any_flag(self, flags: Self) -> bool {
        !self.intersection(flags).is_empty()
    }

    fn with_flag(self, flags: Self) -> Self {
        self.union(flags)
    }

    fn without_flag(self, flags: Self) -> Self {
        self.difference(flags)
    }

    fn toggled(self, flags: Self) -> Self {
        self.symmetric_difference(flags)
    }
}

impl<F: StateFlags> FlagSetExt for F {}

#[cfg(test)]
mod tests {
    use super::*;

    bitflags::bitflags! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        struct Axes: u8 {
            const X = 0b001;
            const Y = 0b010;
            const Z = 0b100;
        }
    }

    fn raw(bits: u32) -> RawStates {
        RawStates::from_bits_retain(bits)
    }

    #[test]
    fn raw_states_keep_every_bit() {
        let mask = raw(0x8000_0001);
        assert_eq!(mask.bits(), 0x8000_0001);
        assert_eq!(RawStates::all().bits(), u32::MAX);
    }

    #[test]
    fn raw_states_default_is_empty() {
        assert!(RawStates::default().is_empty());
    }

    #[test]
    fn has_flag_requires_every_bit() {
        let state = Axes::X | Axes::Y;
        assert!(state.has_flag(Axes::X));
        assert!(state.has_flag(Axes::X | Axes::Y));
        assert!(!state.has_flag(Axes::X | Axes::Z));
        assert!(state.has_flag(Axes::empty()));
    }

    #[test]
    fn has_any_flag_requires_one_bit() {
        let state = Axes::X | Axes::Y;
        assert!(state.has_any_flag(Axes::Y | Axes::Z));
        assert!(!state.has_any_flag(Axes::Z));
        assert!(!state.has_any_flag(Axes::empty()));
    }

    #[test]
    fn with_and_without_flag() {
        assert_eq!(Axes::X.with_flag(Axes::Z), Axes::X | Axes::Z);
        assert_eq!((Axes::X | Axes::Z).without_flag(Axes::Z), Axes::X);
        assert_eq!(Axes::X.without_flag(Axes::Y), Axes::X);
    }

    #[test]
    fn toggled_flips_only_requested_bits() {
        assert_eq!((Axes::X | Axes::Y).toggled(Axes::Y | Axes::Z), Axes::X | Axes::Z);
        assert_eq!(Axes::X.toggled(Axes::X), Axes::empty());
    }

    #[test]
    fn raw_states_serialize_round_trip() {
        let mask = raw(0b0110);
        let json = serde_json::to_string(&mask).unwrap();
        let back: RawStates = serde_json::from_str(&json).unwrap();
        assert_eq!(mask, back);
    }
}
