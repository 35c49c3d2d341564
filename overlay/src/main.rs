//! Demo binary driving the highlight pipeline end to end
//!
//! Builds a synthetic world with a handful of NPCs, starts the highlight
//! service, renders one frame, and writes it to `highlights.png`.
//!
//! Run with: cargo run -p hilite-overlay

use std::sync::{Arc, Mutex};

use tiny_skia::Pixmap;
use tracing_subscriber::EnvFilter;

use hilite_core::{GameSignal, GameState, HighlightService, Hull, NpcId, WorldView};
use hilite_overlay::NpcHighlightOverlay;
use hilite_types::HighlightConfig;

struct DemoNpc {
    id: NpcId,
    name: Option<String>,
    hull: Option<Hull>,
}

/// Hand-built world standing in for the game client
struct DemoWorld {
    npcs: Mutex<Vec<DemoNpc>>,
}

impl DemoWorld {
    fn new() -> Self {
        Self {
            npcs: Mutex::new(Vec::new()),
        }
    }

    fn spawn(&self, id: NpcId, name: Option<&str>, hull: Option<Hull>) {
        self.npcs.lock().unwrap().push(DemoNpc {
            id,
            name: name.map(str::to_string),
            hull,
        });
    }
}

impl WorldView for DemoWorld {
    fn game_state(&self) -> GameState {
        GameState::LoggedIn
    }

    fn npc_ids(&self) -> Vec<NpcId> {
        self.npcs.lock().unwrap().iter().map(|npc| npc.id).collect()
    }

    fn npc_name(&self, id: NpcId) -> Option<String> {
        self.npcs
            .lock()
            .unwrap()
            .iter()
            .find(|npc| npc.id == id)
            .and_then(|npc| npc.name.clone())
    }

    fn npc_hull(&self, id: NpcId) -> Option<Hull> {
        self.npcs
            .lock()
            .unwrap()
            .iter()
            .find(|npc| npc.id == id)
            .and_then(|npc| npc.hull.clone())
    }
}

/// Diamond-ish silhouette centered at (cx, cy)
fn diamond(cx: f32, cy: f32, w: f32, h: f32) -> Hull {
    Hull::new(vec![
        (cx, cy - h / 2.0),
        (cx + w / 2.0, cy),
        (cx, cy + h / 2.0),
        (cx - w / 2.0, cy),
    ])
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = HighlightConfig::default();
    config.render_style.highlight_hull_fill = true;
    config.groups[0].npcs = "Goblin*".to_string();
    config.groups[1].npcs = "Chicken".to_string();
    config.groups[2].npcs = "G*".to_string();

    let world = Arc::new(DemoWorld::new());
    world.spawn(1, Some("Goblin"), Some(diamond(120.0, 140.0, 90.0, 140.0)));
    world.spawn(2, Some("Goblin brute"), Some(diamond(300.0, 200.0, 120.0, 180.0)));
    world.spawn(3, Some("Chicken"), Some(diamond(470.0, 300.0, 60.0, 70.0)));
    world.spawn(4, Some("Cow"), Some(diamond(540.0, 130.0, 100.0, 110.0)));
    // Off-screen straggler: no silhouette this frame
    world.spawn(5, Some("Goblin chief"), None);

    let (handle, task) = HighlightService::start(world.clone(), config.clone());

    // One more NPC wanders in after activation
    world.spawn(6, Some("Grizzly bear"), Some(diamond(180.0, 380.0, 130.0, 100.0)));
    let mut snapshots = handle.subscribe();
    if handle.signal(GameSignal::NpcSpawned { npc: 6 }).await.is_ok() {
        let _ = snapshots.changed().await;
    }

    let mut overlay = NpcHighlightOverlay::new(config);
    overlay.update_data(snapshots.borrow().clone());

    let Some(mut pixmap) = Pixmap::new(640, 480) else {
        eprintln!("Failed to allocate frame buffer");
        return;
    };
    overlay.render(&mut pixmap.as_mut(), world.as_ref());

    match pixmap.save_png("highlights.png") {
        Ok(()) => println!("Wrote highlights.png"),
        Err(e) => eprintln!("Failed to write highlights.png: {}", e),
    }

    let _ = handle.shutdown().await;
    let _ = task.await;
}
