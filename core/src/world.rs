//! Host world boundary
//!
//! The game client owns the world: which NPCs are live, what they are
//! called, where they sit on screen, and what state the client is in.
//! [`WorldView`] is the read-only window the classification and render
//! paths get into that world.

/// Opaque reference to a live NPC. The host assigns ids; the core only
/// stores them in membership sets and resolves them back through
/// [`WorldView`] when it needs a name or silhouette.
pub type NpcId = u64;

/// Client game state, reduced to the transitions the highlighter reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    LoginScreen,
    LoggingIn,
    Loading,
    LoggedIn,
    ConnectionLost,
    Hopping,
}

impl GameState {
    /// In the world, or streaming into it. Only these states allow a
    /// rebuild to populate membership sets.
    pub fn is_playing(self) -> bool {
        matches!(self, Self::LoggedIn | Self::Loading)
    }

    /// Leaving for the login screen or another world. Memberships are wiped
    /// immediately so stale highlights cannot leak across account or world
    /// switches.
    pub fn clears_highlights(self) -> bool {
        matches!(self, Self::LoginScreen | Self::Hopping)
    }
}

/// Screen-space silhouette of an NPC, supplied by the host per frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hull {
    /// Polygon vertices in screen coordinates
    pub points: Vec<(f32, f32)>,
}

impl Hull {
    pub fn new(points: Vec<(f32, f32)>) -> Self {
        Self { points }
    }
}

/// Read-only view of the live game world.
///
/// Every accessor is defensively optional: an NPC may have no display name
/// and no on-screen silhouette, and both cases are skipped rather than
/// treated as errors.
pub trait WorldView {
    /// Current client game state.
    fn game_state(&self) -> GameState;

    /// Ids of every currently-live NPC.
    fn npc_ids(&self) -> Vec<NpcId>;

    /// Display name of an NPC, if it has one.
    fn npc_name(&self, id: NpcId) -> Option<String>;

    /// Screen-space silhouette for this frame, if the NPC is on screen and
    /// its geometry is available.
    fn npc_hull(&self, id: NpcId) -> Option<Hull>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playing_states() {
        assert!(GameState::LoggedIn.is_playing());
        assert!(GameState::Loading.is_playing());
        assert!(!GameState::LoginScreen.is_playing());
        assert!(!GameState::LoggingIn.is_playing());
        assert!(!GameState::Hopping.is_playing());
        assert!(!GameState::ConnectionLost.is_playing());
    }

    #[test]
    fn test_clearing_states() {
        assert!(GameState::LoginScreen.clears_highlights());
        assert!(GameState::Hopping.clears_highlights());
        assert!(!GameState::LoggedIn.clears_highlights());
        assert!(!GameState::Loading.clears_highlights());
    }
}
