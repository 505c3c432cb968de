//! Intermediate model for extracted presentations.
//!
//! This module defines the data structures the extraction pipeline produces
//! and the renderers consume: per-slide records, the media map built during
//! extraction, and deck configuration entries for batch generation.

mod config;
mod media;
mod slide;

pub use config::*;
pub use media::*;
pub use slide::*;
