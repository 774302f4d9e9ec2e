//! Algotrace Core Library
//!
//! Graph and sorting algorithms that record a replayable step trace, plus
//! the input models, configuration, and output helpers shared by the CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod model;
pub mod records;
pub mod sort;
pub mod trace;
