//! Shared configuration types for Hilite.
//!
//! These types are serialized to the persisted config file and shared
//! between the core classification engine and the overlay renderer.

mod config;

pub use config::{GROUP_COUNT, GroupConfig, HighlightConfig, RenderStyle};
