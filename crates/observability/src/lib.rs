//! Process-wide logging setup for card locker hosts.

/// Install the global subscriber, filtered by `RUST_LOG` (default `info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init();
}

/// Same as [`init`] with an explicit filter directive, ignoring `RUST_LOG`.
pub fn init_with_filter(directives: &str) {
    subscriber::init_with_filter(directives);
}

/// Subscriber configuration (filters, output format).
pub mod subscriber;
