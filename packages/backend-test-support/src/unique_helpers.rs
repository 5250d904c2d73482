//! Unique labels for fixture rows.

use ulid::Ulid;

/// `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("licence");
/// assert_ne!(a, unique_str("licence"));
/// assert!(a.starts_with("licence-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
