//! NPC highlight classification
//!
//! This module provides:
//! - **Tracker**: signal handler that owns the five membership sets
//! - **Snapshot**: copy-on-write view of those sets for the renderer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  HighlightConfig (persisted TOML)                │
//! │        "group 1 is red and applies to 'Man*, Cow'"               │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!            GameSignal::NpcSpawned / NpcDespawned / ...
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │              HighlightTracker (membership sets)                  │
//! │          "group 1 currently covers NPCs {3, 17, 42}"             │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                 HighlightSnapshot → Overlay Renderer
//! ```

pub mod tracker;


pub use tracker::{HighlightSnapshot, HighlightTracker};
