//! Application service layer - config, quote adapter, batch loading, analytics sinks

pub mod app;
pub mod batch;
pub mod config;
pub mod sink;
