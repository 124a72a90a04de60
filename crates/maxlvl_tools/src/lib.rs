//! # Max Levels Tools
//!
//! Plumbing around `maxlvl_core`:
//! - Dataset and configuration loaders
//! - Data validators
//! - The `maxlvl` command-line tool

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod loader;
pub mod validate;
