//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod merge;
pub mod rating;
pub mod recalc;
pub mod top;
pub mod validate;
