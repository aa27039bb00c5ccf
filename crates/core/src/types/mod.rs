//! Core types for NEDGE.
//!
//! This module provides type-safe wrappers for catalog identifiers.

pub mod id;

pub use id::*;
