use crate::world::{GameState, NpcId};

/// Signals forwarded by the host wiring layer for cross-cutting concerns.
/// These represent "interesting things that happened" at a higher level
/// than raw client callbacks.
#[derive(Debug, Clone)]
pub enum GameSignal {
    /// The client moved to a new game state (login screen, loading, in
    /// world, world hop, ...)
    GameStateChanged { state: GameState },

    /// An NPC entered the live world
    NpcSpawned { npc: NpcId },

    /// An NPC left the live world
    NpcDespawned { npc: NpcId },

    /// A configuration value changed. `group` is the host config namespace
    /// the change belongs to; changes in foreign namespaces are ignored.
    ConfigChanged { group: String },
}
