//! glyphmesh core
//!
//! Utilities shared by the glyphmesh crates: logging setup, profiling scopes
//! and the math types used for vertex attributes.

pub mod logging;
pub mod math;
pub mod profiling;
