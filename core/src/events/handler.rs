use crate::events::GameSignal;
use crate::world::WorldView;

/// Implemented by components that react to game signals. The world view is
/// passed alongside each signal so handlers can query live state (game
/// state, NPC roster) while processing it.
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &GameSignal, world: &dyn WorldView);

    /// Handle a batch of signals in arrival order.
    fn handle_signals(&mut self, signals: &[GameSignal], world: &dyn WorldView) {
        for signal in signals {
            self.handle_signal(signal, world);
        }
    }
}
