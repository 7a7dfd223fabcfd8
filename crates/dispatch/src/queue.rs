//! Dispatch task queue — an unbounded FIFO shared between batch submitters
//! and the single dispatch worker.
//!
//! Built on a tokio unbounded channel created at startup and handed to the
//! worker, so ownership is explicit and dropping every [`TaskQueue`] clone
//! closes the queue, letting the worker drain and stop. Enqueueing never
//! blocks; depth is deliberately unbounded (submissions are accepted
//! synchronously and never rejected for backpressure).

use tokio::sync::mpsc;

use courier_common::types::Task;

/// Receiving half of the dispatch queue, owned by the worker.
pub type TaskReceiver = mpsc::UnboundedReceiver<Task>;

/// Producer handle to the dispatch queue. Cheap to clone; one clone per
/// submission path.
#[derive(Clone)]
pub struct TaskQueue {
    tx: mpsc::UnboundedSender<Task>,
}

impl TaskQueue {
    /// Append a task. FIFO order is preserved across all producers sharing
    /// this queue; tasks are never reordered or merged.
    pub fn enqueue(&self, task: Task) {
        if self.tx.send(task).is_err() {
            // Only possible during shutdown, after the worker has stopped.
            tracing::warn!("Dispatch queue closed, task dropped");
        }
    }
}

/// Create the dispatch queue, returning the producer handle and the
/// receiver to pass into the worker.
pub fn task_queue() -> (TaskQueue, TaskReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (TaskQueue { tx }, rx)
}
