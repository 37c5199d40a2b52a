//! Infrastructure layer.
//!
//! Contains OS-facing adapters for the traits defined in
//! `application::config_manager`:
//!
//! - **`platform`** – process environment, OS identity and `$PATH` lookup.
//! - **`storage`** – the real filesystem and an in-memory stand-in.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `corgi_core`, but MUST NOT be imported by the `application` layer outside
//! of its tests.

pub mod platform;
pub mod storage;
