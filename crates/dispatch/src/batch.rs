//! Batch decomposition and attachment lifecycle.
//!
//! A submitted batch is rendered and decomposed into tasks immediately:
//! one `SendMessage` per recipient in input order, then — iff the batch
//! carries an attachment — exactly one `CleanupFile` after all sends.
//! Because the queue is FIFO with a single consumer, that ordering
//! guarantees the shared file survives until the last delivery attempt of
//! its batch has run.
//!
//! A recipient whose substitutions are missing a template field is skipped
//! and reported in the receipt; the rest of the batch proceeds.

use courier_common::types::{Batch, DispatchReceipt, SkippedRecipient, Task};

use crate::queue::TaskQueue;
use crate::template::render;

/// Decompose `batch` into tasks on `queue` and return the receipt.
pub fn submit(queue: &TaskQueue, batch: Batch) -> DispatchReceipt {
    let mut enqueued = 0usize;
    let mut skipped = Vec::new();

    for recipient in &batch.recipients {
        let body = match render(&batch.template, &recipient.substitutions) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    batch_id = %batch.id,
                    address = %recipient.address,
                    error = %e,
                    "Recipient skipped, template could not be rendered"
                );
                skipped.push(SkippedRecipient {
                    address: recipient.address.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        queue.enqueue(Task::SendMessage {
            address: recipient.address.clone(),
            body,
            attachment_path: batch.attachment_path.clone(),
        });
        enqueued += 1;
    }

    schedule_cleanup(queue, &batch);

    tracing::info!(
        batch_id = %batch.id,
        enqueued,
        skipped = skipped.len(),
        has_attachment = batch.attachment_path.is_some(),
        "Batch enqueued"
    );

    DispatchReceipt {
        batch_id: batch.id,
        enqueued,
        skipped,
    }
}

/// Append the single cleanup task for a batch's attachment, strictly after
/// every `SendMessage` of that batch. No-op for attachment-less batches.
fn schedule_cleanup(queue: &TaskQueue, batch: &Batch) {
    if let Some(path) = &batch.attachment_path {
        queue.enqueue(Task::CleanupFile { path: path.clone() });
    }
}
