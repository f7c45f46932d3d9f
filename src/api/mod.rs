//! Pitch-class set helpers WASM API
//!
//! This module provides the JavaScript-facing API for the set analysis views.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, logging
//!   and the `localStorage` preference read
//! - `pcset`: Formatting, keyboard and transposition exports

pub mod helpers;
pub mod pcset;

pub use pcset::*;
