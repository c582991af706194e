//! `tracing` events for rejected stack operations.


use super::StackError;

/// Target name used in emitted events.
#[cfg(feature = "tracing")]
pub(crate) const DIAGNOSTICS_TARGET: &str = "linkstack::stack";

/// Records that `operation` was rejected with `error`.
#[cfg(feature = "tracing")]
pub(crate) fn record_rejection(operation: &'static str, error: StackError) {
  tracing::event!(
    target: DIAGNOSTICS_TARGET,
    tracing::Level::TRACE,
    operation = operation,
    error = %error,
    "stack operation rejected"
  );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) const fn record_rejection(_operation: &'static str, _error: StackError) {}
