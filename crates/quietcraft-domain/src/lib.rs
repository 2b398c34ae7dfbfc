//! Domain models and services for quietcraft
//!
//! Everything here is synchronous and side-effect free. UI adapters read the
//! returned state and apply it.

pub mod model;
pub mod service;
