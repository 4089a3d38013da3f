use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tracing::{debug, warn};

use crate::engine::store::{ListenerId, Store};
use crate::storage::backend::KeyValueStorage;
use crate::storage::codec::encode;

enum PersistCommand {
    Write(String),
    Shutdown,
}

/// Background thread that writes saved boards to storage.
///
/// Writes are fire-and-forget: the store never waits on them and failures
/// are only logged. Dropping the worker flushes whatever is queued.
pub struct PersistWorker {
    tx: Sender<PersistCommand>,
    handle: Option<JoinHandle<()>>,
}

impl PersistWorker {
    pub fn spawn(storage: impl KeyValueStorage + 'static, key: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::channel();
        let key = key.into();

        let handle = std::thread::spawn(move || run(&storage, &key, rx));

        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Saves the board every time a persisted part of `store` changes.
    /// Changes that encode to the same blob, like toggling the settings
    /// window, are not written.
    pub fn attach(&self, store: &mut Store) -> ListenerId {
        let tx = self.tx.clone();
        let mut last = encode(store.state()).ok();
        store.subscribe(move |state| match encode(state) {
            Ok(json) if last.as_deref() == Some(json.as_str()) => {}
            Ok(json) => {
                // Worker already gone; nothing left to save to.
                let _ = tx.send(PersistCommand::Write(json.clone()));
                last = Some(json);
            }
            Err(e) => warn!(error = %e, "could not encode board"),
        })
    }

    /// Flushes pending writes and stops the thread.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        let _ = self.tx.send(PersistCommand::Shutdown);
        if handle.join().is_err() {
            warn!("persist worker panicked");
        }
    }
}

impl Drop for PersistWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(storage: &dyn KeyValueStorage, key: &str, rx: Receiver<PersistCommand>) {
    while let Ok(cmd) = rx.recv() {
        let PersistCommand::Write(mut latest) = cmd else {
            break;
        };

        // Only the newest queued board matters.
        let mut stop = false;
        while let Ok(next) = rx.try_recv() {
            match next {
                PersistCommand::Write(json) => latest = json,
                PersistCommand::Shutdown => {
                    stop = true;
                    break;
                }
            }
        }

        match storage.set_item(key, &latest) {
            Ok(()) => debug!(key, bytes = latest.len(), "board saved"),
            Err(e) => warn!(key, error = %e, "could not save board"),
        }

        if stop {
            break;
        }
    }
    debug!(key, "persist worker stopped");
}
