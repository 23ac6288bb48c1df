// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Watch mode: both compilers resident, polled until one exits.

use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::Outcome;
use crate::compiler::Compiler;
use crate::config::types::WatchConfig;
use crate::core::process::handle::ProcessHandle;
use crate::error::{ProcessResult, Result};
use crate::subproject::Subproject;

/// Starts both compilers in watch mode and returns once either exits.
///
/// Compilers are polled in build order, so when both exited between two
/// polls the core compiler's code is reported. The survivor keeps running
/// unless `terminate_sibling` is set.
///
/// # Errors
///
/// Returns an error if a compiler cannot be launched or polled.
pub async fn run_watch(
    compiler: &Compiler,
    settings: &WatchConfig,
    token: CancellationToken,
) -> Result<Outcome> {
    let mut watched = Vec::with_capacity(Subproject::ALL.len());
    for subproject in Subproject::ALL {
        watched.push((subproject, compiler.start(subproject, compiler.watch_args())?));
    }

    let interval = settings.poll_interval();
    let mut tick: u64 = 0;
    loop {
        trace!(tick, "polling compilers");
        if let Some((index, code)) = first_exited(&mut watched)? {
            let subproject = watched[index].0;
            if settings.terminate_sibling {
                terminate_others(&mut watched, Some(index)).await?;
            }
            return Ok(Outcome::WatchExited { subproject, code });
        }

        tokio::select! {
            () = token.cancelled() => {
                warn!("Cancellation requested, leaving watch mode");
                if settings.terminate_sibling {
                    terminate_others(&mut watched, None).await?;
                }
                return Ok(Outcome::Interrupted);
            }
            () = tokio::time::sleep(interval) => {}
        }
        tick += 1;
    }
}

/// Returns the index and exit code of the first exited process, checking in
/// slice order.
pub(super) fn first_exited(
    watched: &mut [(Subproject, ProcessHandle)],
) -> ProcessResult<Option<(usize, i32)>> {
    for (index, (_, handle)) in watched.iter_mut().enumerate() {
        if let Some(code) = handle.try_exit_code()? {
            return Ok(Some((index, code)));
        }
    }
    Ok(None)
}

/// Kills every watched process except the one at `keep`.
async fn terminate_others(
    watched: &mut [(Subproject, ProcessHandle)],
    keep: Option<usize>,
) -> ProcessResult<()> {
    for (index, (subproject, handle)) in watched.iter_mut().enumerate() {
        if keep != Some(index) {
            debug!(subproject = %subproject, "terminating sibling compiler");
            handle.kill().await?;
        }
    }
    Ok(())
}
