//! Per-operation context: the host's cancellation signal

use std::future::Future;

use tokio::sync::watch;

use crate::error::{CoreError, CoreResult};

/// Context handed in by the host for a single lifecycle operation.
///
/// Wraps a `watch::Receiver<bool>`; once the host sends `true`, every remote
/// call still in flight through [`OperationContext::run`] is abandoned with
/// [`CoreError::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct OperationContext {
    cancel: Option<watch::Receiver<bool>>,
}

impl OperationContext {
    /// Context cancelled when `cancel` turns `true`.
    pub fn new(cancel: watch::Receiver<bool>) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    /// Context that is never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Fail fast if the signal has already fired.
    pub fn check(&self) -> CoreResult<()> {
        if self.is_cancelled() {
            Err(CoreError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Drive `fut` to completion unless the signal fires first.
    pub async fn run<F, T>(&self, fut: F) -> CoreResult<T>
    where
        F: Future<Output = T>,
    {
        let Some(rx) = &self.cancel else {
            return Ok(fut.await);
        };
        self.check()?;

        let mut rx = rx.clone();
        tokio::select! {
            biased;
            () = wait_cancelled(&mut rx) => Err(CoreError::Cancelled),
            out = fut => Ok(out),
        }
    }
}

/// Resolves once the signal is `true`; never resolves if the sender is gone.
async fn wait_cancelled(rx: &mut watch::Receiver<bool>) {
    if rx.wait_for(|cancelled| *cancelled).await.is_err() {
        std::future::pending::<()>().await;
    }
}
