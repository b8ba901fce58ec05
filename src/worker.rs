//! Off-thread execution of the tabulation engine.
//!
//! Parsing a large table must not block the caller's thread, so an analysis
//! is submitted once to a background thread and exactly one reply comes
//! back over a single-shot channel: the full [`AnalysisResult`] or one
//! terminal failure. There are no partial results and no retries.

use std::fs;
use std::path::PathBuf;
use std::thread::JoinHandle;

use anyhow::Context;
use crossbeam::channel::Receiver;
use log::debug;

use crate::data_structs::AnalysisResult;
use crate::tabulate::TabulationEngine;

/// Handle to one in-flight analysis.
pub struct AnalysisHandle {
    receiver:     Receiver<anyhow::Result<AnalysisResult>>,
    _join_handle: JoinHandle<()>,
}

impl AnalysisHandle {
    /// Blocks until the worker replies with the result or its terminal
    /// failure.
    pub fn wait(self) -> anyhow::Result<AnalysisResult> {
        match self.receiver.recv() {
            Ok(reply) => reply,
            Err(_) => {
                Err(anyhow::anyhow!(
                    "Analysis worker disconnected before replying"
                ))
            },
        }
    }

    /// Whether a reply is already available.
    pub fn is_finished(&self) -> bool { !self.receiver.is_empty() }
}

fn spawn_reply(
    task: impl FnOnce() -> anyhow::Result<AnalysisResult> + Send + 'static
) -> AnalysisHandle {
    let (sender, receiver) = crossbeam::channel::bounded(1);

    let join_handle = std::thread::spawn(move || {
        // The receiver may already be gone; dropping the reply is fine
        // then.
        sender.send(task()).ok();
    });

    AnalysisHandle {
        receiver,
        _join_handle: join_handle,
    }
}

/// Runs the engine over already-decoded text on a background thread.
pub fn spawn_tabulation(
    engine: TabulationEngine,
    raw_text: String,
) -> AnalysisHandle {
    spawn_reply(move || {
        debug!("Starting tabulation of {} bytes", raw_text.len());
        engine.tabulate(&raw_text)
    })
}

/// Reads a file to text on the background thread, then runs the engine.
///
/// A read or decode failure surfaces exactly like a structural failure:
/// one terminal error, no partial result.
pub fn spawn_tabulation_file(
    engine: TabulationEngine,
    path: PathBuf,
) -> AnalysisHandle {
    spawn_reply(move || {
        debug!("Reading {}", path.display());
        let raw_text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        engine.tabulate(&raw_text)
    })
}
