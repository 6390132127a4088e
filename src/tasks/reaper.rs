//! Idle Entry Reaper
//!
//! Background task that periodically sweeps idle entries out of the store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::ClipStore;

// == Reaper Handle ==
/// Owns the running reaper task.
///
/// Dropping the handle also ends the task, but without waiting for it;
/// call [`ReaperHandle::stop`] to end it deterministically.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the reaper to exit and waits until it has.
    ///
    /// A sweep already holding the store lock finishes first.
    pub async fn stop(self) {
        // Send fails only if the task already exited.
        let _ = self.shutdown.send(());
        if let Err(e) = self.task.await {
            warn!("Reaper task ended abnormally: {}", e);
        }
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns a task that calls [`ClipStore::sweep`] every `check_interval`,
/// evicting entries idle longer than `idle_timeout`.
///
/// The first sweep happens one full interval after spawning.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(ClipStore::new()));
/// let reaper = spawn_reaper(store.clone(), Duration::from_secs(3600), Duration::from_secs(86400));
/// // Later, during shutdown:
/// reaper.stop().await;
/// ```
pub fn spawn_reaper(
    store: Arc<RwLock<ClipStore>>,
    check_interval: Duration,
    idle_timeout: Duration,
) -> ReaperHandle {
    let (shutdown, mut shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        info!(
            "Starting reaper: check every {:?}, evict after {:?} idle",
            check_interval, idle_timeout
        );

        loop {
            tokio::select! {
                // Resolves on stop() or when the handle is dropped.
                _ = &mut shutdown_rx => {
                    debug!("Reaper shutting down");
                    break;
                }
                _ = tokio::time::sleep(check_interval) => {}
            }

            let (removed, remaining) = {
                let mut guard = store.write().await;
                let removed = guard.sweep(idle_timeout);
                (removed, guard.len())
            };

            if removed > 0 {
                info!(
                    "Reaper evicted {} idle entries, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("Reaper found no idle entries ({} live)", remaining);
            }
        }
    });

    ReaperHandle { shutdown, task }
}
