//! Background batch execution.
//!
//! Runs a batch on its own thread so an interactive front end stays
//! responsive, streaming one event per processed file over a channel.

use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver};

use crate::data::generator::{generate_with_progress, GenerateOptions};
use crate::data::stats::{BatchResult, FileReport};
use crate::error::TxtBatchError;
use crate::Result;

/// Progress message sent by a background batch.
#[derive(Debug)]
pub enum BatchEvent {
    /// One file finished, successfully or not
    FileProcessed(FileReport),
    /// The batch ended; always the last event
    Finished(Result<BatchResult>),
}

/// Handle on a batch running in the background.
pub struct BatchHandle {
    rx: Receiver<BatchEvent>,
    thread: JoinHandle<()>,
}

impl BatchHandle {
    /// Receiver for progress events.
    pub fn events(&self) -> &Receiver<BatchEvent> {
        &self.rx
    }

    /// Block until the batch finishes and return its result.
    ///
    /// Pending `FileProcessed` events are drained and dropped.
    pub fn wait(self) -> Result<BatchResult> {
        for event in self.rx.iter() {
            if let BatchEvent::Finished(result) = event {
                let _ = self.thread.join();
                return result;
            }
        }

        // Sender dropped without a Finished event: the thread died.
        match self.thread.join() {
            Ok(()) => Err(TxtBatchError::Worker(
                "worker exited without a result".to_string(),
            )),
            Err(_) => Err(TxtBatchError::Worker("worker thread panicked".to_string())),
        }
    }
}

/// Start a batch on a new thread.
pub fn spawn_generate(
    input_dir: impl Into<PathBuf>,
    output_dir: impl Into<PathBuf>,
    options: GenerateOptions,
) -> BatchHandle {
    let input_dir = input_dir.into();
    let output_dir = output_dir.into();
    let (tx, rx) = unbounded();

    let thread = thread::spawn(move || {
        let result = generate_with_progress(&input_dir, &output_dir, &options, |report| {
            let _ = tx.send(BatchEvent::FileProcessed(report.clone()));
        });
        let _ = tx.send(BatchEvent::Finished(result));
    });

    BatchHandle { rx, thread }
}
