//! CLI commands for algotrace

pub mod algorithms;
pub mod dispatch;
pub mod format;
pub mod mst;
pub mod path;
pub mod sort;
