//! Highlight tracking handler
//!
//! Matches live NPC names against each group's wildcard pattern list and
//! maintains one membership set per group: rebuilt wholesale on login and
//! config changes, updated incrementally on spawn/despawn, wiped on
//! logout/world hop.

use hashbrown::HashSet;

use hilite_types::{GROUP_COUNT, HighlightConfig};

use crate::events::{GameSignal, SignalHandler};
use crate::pattern;
use crate::world::{GameState, NpcId, WorldView};

/// Point-in-time view of group memberships, published to the renderer.
/// Member lists are sorted so equal memberships compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSnapshot {
    /// Member NPC ids per group; index 0..4 is group 1..5
    pub groups: [Vec<NpcId>; GROUP_COUNT],
}

impl HighlightSnapshot {
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|members| members.is_empty())
    }

    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}

/// Tracks which NPCs each highlight group currently applies to.
///
/// Sets are independent: an NPC whose name matches several groups is a
/// member of all of them, and every one of those groups draws its own
/// overlay. The tracker itself is plain single-threaded state; the service
/// serializes all mutation onto one task.
#[derive(Debug)]
pub struct HighlightTracker {
    config: HighlightConfig,

    /// Parsed pattern lists, one per group, recompiled with the config
    patterns: [Vec<String>; GROUP_COUNT],

    /// Membership sets, one per group
    groups: [HashSet<NpcId>; GROUP_COUNT],
}

impl Default for HighlightTracker {
    fn default() -> Self {
        Self::new(HighlightConfig::default())
    }
}

impl HighlightTracker {
    pub fn new(config: HighlightConfig) -> Self {
        let patterns = compile_patterns(&config);
        Self {
            config,
            patterns,
            groups: Default::default(),
        }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Swap in a new configuration and reclassify everything. Any config
    /// edit invalidates all memberships since pattern lists may have
    /// changed.
    pub fn set_config(&mut self, config: HighlightConfig, world: &dyn WorldView) {
        self.patterns = compile_patterns(&config);
        self.config = config;
        self.rebuild_all(world);
    }

    /// Membership set for a group (0-based index).
    pub fn group(&self, index: usize) -> &HashSet<NpcId> {
        &self.groups[index]
    }

    pub fn member_count(&self) -> usize {
        self.groups.iter().map(HashSet::len).sum()
    }

    /// Rebuild every group's membership from the currently-live NPCs.
    ///
    /// All-or-nothing: the game-state check runs once, before any group is
    /// populated. When the client is open but not in the world, every set
    /// stays empty so nothing is highlighted from a stale roster.
    pub fn rebuild_all(&mut self, world: &dyn WorldView) {
        for group in &mut self.groups {
            group.clear();
        }

        if !world.game_state().is_playing() {
            return;
        }

        for id in world.npc_ids() {
            self.classify(id, world);
        }
        tracing::debug!(members = self.member_count(), "rebuilt highlight groups");
    }

    /// Drop all memberships (logout, world hop, deactivation).
    pub fn clear_all(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
    }

    /// Copy-on-write view for the renderer.
    pub fn snapshot(&self) -> HighlightSnapshot {
        let mut snapshot = HighlightSnapshot::default();
        for (members, group) in snapshot.groups.iter_mut().zip(&self.groups) {
            members.extend(group.iter().copied());
            members.sort_unstable();
        }
        snapshot
    }

    /// Insert the NPC into every group whose patterns match its name.
    /// Nameless NPCs never match anything.
    fn classify(&mut self, id: NpcId, world: &dyn WorldView) {
        let Some(name) = world.npc_name(id) else {
            return;
        };
        for (group, patterns) in self.groups.iter_mut().zip(&self.patterns) {
            if pattern::matches_any(&name, patterns) {
                group.insert(id);
            }
        }
    }

    /// Remove the NPC from every group. Idempotent if absent.
    fn remove(&mut self, id: NpcId) {
        for group in &mut self.groups {
            group.remove(&id);
        }
    }
}

impl SignalHandler for HighlightTracker {
    fn handle_signal(&mut self, signal: &GameSignal, world: &dyn WorldView) {
        match signal {
            GameSignal::GameStateChanged { state } => {
                if state.clears_highlights() {
                    self.clear_all();
                } else if *state == GameState::LoggedIn {
                    // Login repopulates; spawn events arriving during the
                    // load overlap harmlessly with the rebuild
                    self.rebuild_all(world);
                }
            }
            GameSignal::NpcSpawned { npc } => self.classify(*npc, world),
            GameSignal::NpcDespawned { npc } => self.remove(*npc),
            // Namespace filtering and the config reload happen in the
            // service; by the time the tracker sees this, reclassifying
            // with current patterns is all that is left to do
            GameSignal::ConfigChanged { .. } => self.rebuild_all(world),
        }
    }
}

fn compile_patterns(config: &HighlightConfig) -> [Vec<String>; GROUP_COUNT] {
    std::array::from_fn(|group| pattern::from_csv(&config.groups[group].npcs))
}
