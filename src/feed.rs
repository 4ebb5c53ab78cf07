//! Feed - snapshot delivery from the simulation/transport collaborator.
//!
//! The transport owns reconnection and protocol concerns; this side is
//! just a non-blocking inbox. Producers hold a `SnapshotSender` (raw
//! structs or JSON) and the drain system swaps the newest delivery into
//! the `WorldSnapshot` resource once per frame.

use bevy::prelude::*;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::sync::Mutex;

use crate::snapshot::WorldSnapshot;

/// Producer half, cloneable into whatever thread the transport runs on.
#[derive(Clone)]
pub struct SnapshotSender(Sender<WorldSnapshot>);

impl SnapshotSender {
    /// Deliver a ready snapshot. Returns false if the view is gone.
    pub fn send(&self, snapshot: WorldSnapshot) -> bool {
        self.0.send(snapshot).is_ok()
    }

    /// Decode a JSON snapshot and deliver it. Malformed payloads are
    /// logged and dropped — the view keeps showing the previous frame.
    pub fn send_json(&self, raw: &str) -> bool {
        match WorldSnapshot::from_json(raw) {
            Ok(snapshot) => self.send(snapshot),
            Err(err) => {
                warn!("discarding malformed snapshot: {err}");
                true
            }
        }
    }
}

/// Receiver half, held by the view. `Mutex` only because Bevy resources
/// must be `Sync`; the drain system is the sole consumer.
#[derive(Resource)]
pub struct SnapshotInbox(Mutex<Receiver<WorldSnapshot>>);

/// Create a connected sender/inbox pair.
pub fn snapshot_channel() -> (SnapshotSender, SnapshotInbox) {
    let (tx, rx) = channel();
    (SnapshotSender(tx), SnapshotInbox(Mutex::new(rx)))
}

/// Drain the inbox, keeping only the newest snapshot. Old deliveries
/// are superseded wholesale; there is no partial application.
pub fn drain_snapshots(inbox: Res<SnapshotInbox>, mut snap: ResMut<WorldSnapshot>) {
    let Ok(rx) = inbox.0.lock() else { return };

    let mut newest = None;
    loop {
        match rx.try_recv() {
            Ok(s) => newest = Some(s),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }

    if let Some(s) = newest {
        debug!(
            "snapshot: {} tiles, {} agents, {} stockpiles",
            s.tiles.len(),
            s.agents.len(),
            s.stockpiles.len()
        );
        *snap = s;
    }
}
