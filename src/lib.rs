#![forbid(unsafe_code)]

pub use rawaddr;

pub mod client;
pub mod config;
pub mod errors;
pub mod model;
pub mod report;
