//! Merge notifications from several supervised processes into one stream.

use tokio::sync::mpsc;

use super::{ProcessOutcome, SupervisedProcess};

/// Completion-ordered fan-in over many [`SupervisedProcess`] handles.
///
/// Each added process still produces exactly one notification; `FanIn`
/// only forwards it, tagged with the caller's label.
pub struct FanIn<L> {
    tx: mpsc::UnboundedSender<(L, ProcessOutcome)>,
    rx: mpsc::UnboundedReceiver<(L, ProcessOutcome)>,
    pending: usize,
}

impl<L: Send + 'static> FanIn<L> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: 0,
        }
    }

    /// Start forwarding `process`'s outcome under `label`.
    pub fn add(&mut self, label: L, process: SupervisedProcess) {
        let tx = self.tx.clone();
        self.pending += 1;
        tokio::spawn(async move {
            let outcome = process.wait().await;
            let _ = tx.send((label, outcome));
        });
    }

    /// Processes added but not yet reported.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Next outcome in completion order, or `None` once every added
    /// process has reported.
    pub async fn next(&mut self) -> Option<(L, ProcessOutcome)> {
        if self.pending == 0 {
            return None;
        }
        let item = self.rx.recv().await;
        if item.is_some() {
            self.pending -= 1;
        }
        item
    }
}

impl<L: Send + 'static> Default for FanIn<L> {
    fn default() -> Self {
        Self::new()
    }
}
