//! Highlight service
//!
//! Owns the tracker on a single task: every membership mutation funnels
//! through one command channel and is processed in arrival order (the
//! host's "game logic" context), while the renderer reads copy-on-write
//! snapshots from a watch channel. Mutation and rendering never share a
//! data structure.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use hilite_types::HighlightConfig;

use crate::config::{CONFIG_GROUP, HighlightConfigExt};
use crate::events::{GameSignal, SignalHandler};
use crate::highlights::{HighlightSnapshot, HighlightTracker};
use crate::world::WorldView;

/// Commands accepted by the highlight service
#[derive(Debug)]
pub enum ServiceCommand {
    /// A game signal forwarded from the host
    Signal(GameSignal),
    /// Replace the configuration: persist it, then reclassify
    UpdateConfig(HighlightConfig),
    /// Stop the service, clearing all memberships
    Shutdown,
}

/// The service's command channel is closed (already shut down)
#[derive(Debug, Error)]
#[error("highlight service is not running")]
pub struct ServiceClosed;

/// Handle to a running highlight service
#[derive(Clone)]
pub struct ServiceHandle {
    cmd_tx: mpsc::Sender<ServiceCommand>,
    snapshot_rx: watch::Receiver<HighlightSnapshot>,
}

impl ServiceHandle {
    /// Forward a game signal to the classification task
    pub async fn signal(&self, signal: GameSignal) -> Result<(), ServiceClosed> {
        self.send(ServiceCommand::Signal(signal)).await
    }

    /// Persist a new configuration and reclassify all memberships
    pub async fn update_config(&self, config: HighlightConfig) -> Result<(), ServiceClosed> {
        self.send(ServiceCommand::UpdateConfig(config)).await
    }

    /// Deactivation hook: clears every set, publishes the empty snapshot,
    /// and stops the task
    pub async fn shutdown(&self) -> Result<(), ServiceClosed> {
        self.send(ServiceCommand::Shutdown).await
    }

    /// Subscribe to membership snapshots for rendering
    pub fn subscribe(&self) -> watch::Receiver<HighlightSnapshot> {
        self.snapshot_rx.clone()
    }

    async fn send(&self, cmd: ServiceCommand) -> Result<(), ServiceClosed> {
        self.cmd_tx.send(cmd).await.map_err(|_| ServiceClosed)
    }
}

/// The classification task: drains the command channel and republishes a
/// snapshot after every mutation.
pub struct HighlightService {
    tracker: HighlightTracker,
    world: Arc<dyn WorldView + Send + Sync>,
    cmd_rx: mpsc::Receiver<ServiceCommand>,
    snapshot_tx: watch::Sender<HighlightSnapshot>,
}

impl HighlightService {
    /// Activation hook: runs the initial full rebuild, publishes the first
    /// snapshot, and spawns the command loop. Must be called from within a
    /// tokio runtime.
    pub fn start(
        world: Arc<dyn WorldView + Send + Sync>,
        config: HighlightConfig,
    ) -> (ServiceHandle, JoinHandle<()>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(64);

        let mut tracker = HighlightTracker::new(config);
        tracker.rebuild_all(world.as_ref());
        let (snapshot_tx, snapshot_rx) = watch::channel(tracker.snapshot());

        let service = Self {
            tracker,
            world,
            cmd_rx,
            snapshot_tx,
        };
        let task = tokio::spawn(service.run());
        tracing::info!("highlight service started");

        (
            ServiceHandle {
                cmd_tx,
                snapshot_rx,
            },
            task,
        )
    }

    async fn run(mut self) {
        while let Some(cmd) = self.cmd_rx.recv().await {
            match cmd {
                ServiceCommand::Signal(signal) => self.handle_signal(signal),
                ServiceCommand::UpdateConfig(config) => {
                    if let Err(e) = config.save() {
                        tracing::warn!(error = %e, "failed to persist highlight config");
                    }
                    self.apply_config(config);
                }
                ServiceCommand::Shutdown => break,
            }
            self.publish();
        }

        // Nothing stays highlighted after the service stops
        self.tracker.clear_all();
        self.publish();
        tracing::info!("highlight service stopped");
    }

    fn handle_signal(&mut self, signal: GameSignal) {
        if let GameSignal::ConfigChanged { group } = &signal {
            if group.as_str() != CONFIG_GROUP {
                return;
            }
            // An edit in our namespace invalidates all memberships; reload
            // the persisted values and reclassify
            self.apply_config(HighlightConfig::load_or_default());
            return;
        }
        self.tracker.handle_signal(&signal, self.world.as_ref());
    }

    fn apply_config(&mut self, config: HighlightConfig) {
        self.tracker
            .set_config(config.sanitized(), self.world.as_ref());
        tracing::debug!(
            members = self.tracker.member_count(),
            "reclassified after config change"
        );
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.tracker.snapshot());
    }
}
