//! Background execution of alignments.
//!
//! The score matrix fill is CPU bound and can take noticeable time for long
//! inputs, so interactive callers run it on tokio's blocking pool. A timeout
//! only stops the caller from waiting: the computation itself has no early
//! exit, so it runs to completion and its result is dropped.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::sequence::Sequence;
use crate::matching::engine::{AlignmentEngine, AlignmentError, AlignmentReport, ScoringScheme};

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Alignment did not finish within {0:?}")]
    TimedOut(Duration),

    #[error("Alignment worker failed: {0}")]
    Join(String),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

/// Align two sequences on the blocking thread pool.
///
/// # Errors
///
/// Returns `WorkerError::TimedOut` if `timeout` elapses first,
/// `WorkerError::Join` if the worker panicked or was cancelled, and
/// `WorkerError::Alignment` for alignment input errors.
pub async fn align_in_background(
    a: Sequence,
    b: Sequence,
    scoring: ScoringScheme,
    timeout: Option<Duration>,
) -> Result<AlignmentReport, WorkerError> {
    debug!(
        "Dispatching alignment of '{}' ({}) vs '{}' ({}) to worker",
        a.name,
        a.len(),
        b.name,
        b.len()
    );

    let handle = tokio::task::spawn_blocking(move || {
        let engine = AlignmentEngine::with_scoring(scoring);
        engine
            .align(&a, &b)
            .map(|alignment| AlignmentReport::new(&a, &b, alignment))
    });

    let joined = match timeout {
        Some(limit) => match tokio::time::timeout(limit, handle).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!("Alignment exceeded {limit:?}; result will be discarded");
                return Err(WorkerError::TimedOut(limit));
            }
        },
        None => handle.await,
    };

    let report = joined.map_err(|e| WorkerError::Join(e.to_string()))??;
    Ok(report)
}
