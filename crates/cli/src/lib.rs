//! NEDGE CLI library.
//!
//! The `nedge` binary is a thin shell around these modules so they can be
//! tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;
pub mod error;
pub mod storage;
