//! Shared helper utilities for factory methods.

/// Counter for generating unique names in tests.
///
/// This atomic counter ensures each factory-created document gets distinct default
/// field values, which keeps lookups by name or userName unambiguous.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a document identifier the same way the repositories do.
///
/// # Returns
/// - `String` - Random UUID v4 in hyphenated form
pub fn document_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
