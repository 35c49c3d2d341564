pub mod config;
pub mod events;
pub mod highlights;
pub mod pattern;
pub mod service;
pub mod world;

// Re-exports for convenience
pub use events::{GameSignal, SignalHandler};
pub use highlights::{HighlightSnapshot, HighlightTracker};
pub use service::{HighlightService, ServiceHandle};
pub use world::{GameState, Hull, NpcId, WorldView};
