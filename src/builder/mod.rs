//! Builder API for ergonomic state machine setup.
//!
//! This module provides the fluent [`ContainerBuilder`] and the
//! [`state_enum!`](crate::state_enum) macro for declaring discrete states
//! with minimal boilerplate.

pub mod container;
pub mod error;
pub mod macros;

pub use container::ContainerBuilder;
pub use error::BuildError;
