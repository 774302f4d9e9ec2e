pub mod support;

mod config;
mod logging;
mod mst;
mod path;
mod sort;
