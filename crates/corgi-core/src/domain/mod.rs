//! Domain entities for corgi.
//!
//! This module contains pure business logic with no infrastructure
//! dependencies.  Code in outer layers (the `corgi` application crate) reads
//! the environment and touches the filesystem, then hands plain values to
//! the functions defined here.

/// The persisted configuration entity and its default locations.
pub mod config;

/// OS identity and config-home resolution.
pub mod platform;
