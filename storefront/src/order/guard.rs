//! Submission guard
//!
//! At most one outbound submission may be pending. A second attempt while
//! the first is awaiting its channel is rejected instead of queued.

use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    pending: Arc<AtomicBool>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the submission slot; released when the ticket drops
    pub fn try_begin(&self) -> AppResult<SubmitTicket> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::new(ErrorCode::DispatchInFlight))?;
        Ok(SubmitTicket {
            pending: Arc::clone(&self.pending),
        })
    }

    /// Whether a submission is in flight (e.g. to disable the submit button)
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Held for the duration of one submission
#[derive(Debug)]
pub struct SubmitTicket {
    pending: Arc<AtomicBool>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.pending.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_rejected_until_drop() {
        let guard = SubmitGuard::new();
        let ticket = guard.try_begin().unwrap();
        assert!(guard.is_pending());

        let err = guard.clone().try_begin().unwrap_err();
        assert_eq!(err.code, ErrorCode::DispatchInFlight);
        assert!(err.user_message().is_some());

        drop(ticket);
        assert!(!guard.is_pending());
        assert!(guard.try_begin().is_ok());
    }
}
