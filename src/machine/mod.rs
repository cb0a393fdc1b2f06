//! Transition engines and the notification protocol.
//!
//! Owners implement a capability trait ([`FlagStateMachine`] or
//! [`FiniteStateMachine`]) and get the transition operations from the
//! blanket extension traits ([`FlagTransitions`], [`FiniteTransitions`]).
//!
//! Every operation is synchronous and runs to completion: compute the new
//! state, write the container, then fire callbacks on the same owner.
//! Concurrent owners must be serialized externally.

mod finite;
mod flag;
mod protocol;

pub use finite::FiniteTransitions;
pub use flag::{FlagTransition, FlagTransitions};
pub use protocol::{FiniteStateMachine, FlagStateMachine};
