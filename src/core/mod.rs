//! Core data types and structures
//!
//! This module contains the dependency edge types used throughout
//! deps2mermaid, separated from graph construction and rendering.

pub mod types;

pub use types::*;
