//! Frame-scoped parallel dispatch.
//!
//! One short-lived fan-out per frame: an owned buffer is moved into a batched
//! parallel-for on the rayon pool and handed back through the returned handle
//! at the join point. Dispatch never blocks; `JobHandle::join` is the single
//! synchronization barrier.

use std::sync::mpsc;

use rayon::prelude::*;

/// Completion handle for a dispatched job.
///
/// Joining hands the buffer back after every batch has finished. There is no
/// cancellation: a dispatched job always runs to completion.
#[must_use = "a dispatched job must be joined before its results are used"]
pub struct JobHandle<T> {
    rx: mpsc::Receiver<T>,
}

impl<T> JobHandle<T> {
    /// Block until the job completes and take the buffer back.
    pub fn join(self) -> T {
        // The worker drops its sender only after sending, so recv fails only
        // if the job panicked mid-run.
        self.rx
            .recv()
            .expect("parallel job panicked before completion")
    }
}

/// Run `op` over every element of `data` in parallel batches of `batch_size`.
///
/// Returns immediately with a handle to join once the results are needed.
/// `op` gets the element index and a mutable reference to the element; it
/// must depend only on that element and its captured state, never on other
/// elements, so batches may complete in any order.
pub fn dispatch<T, F>(mut data: Vec<T>, batch_size: usize, op: F) -> JobHandle<Vec<T>>
where
    T: Send + 'static,
    F: Fn(usize, &mut T) + Send + Sync + 'static,
{
    let batch_size = batch_size.max(1);
    let (tx, rx) = mpsc::channel();

    rayon::spawn(move || {
        data.par_chunks_mut(batch_size)
            .enumerate()
            .for_each(|(batch_idx, batch)| {
                let base = batch_idx * batch_size;
                for (offset, item) in batch.iter_mut().enumerate() {
                    op(base + offset, item);
                }
            });

        // The receiver may be gone if the dispatching side is being torn
        // down; the finished buffer is simply discarded then.
        let _ = tx.send(data);
    });

    JobHandle { rx }
}
