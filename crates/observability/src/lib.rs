//! Tracing, logging, metrics (shared setup).
//!
//! The domain crates never log; the process embedding them (binaries, test
//! harnesses) calls [`init`] once and decides how errors surface.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
