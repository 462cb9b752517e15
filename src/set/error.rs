//! Error types for set construction.
//!
//! Ordinary set operations never fail: duplicate insertion is a no-op and
//! out-of-range diagnostic queries answer `0` or `false`. The only recoverable
//! error is asking for a hash table with no buckets.

/// Represents errors that can occur when constructing a set.
///
/// # Examples
///
/// ```rust
/// use setwise::set::SetError;
///
/// let error = SetError::ZeroCapacity;
/// assert_eq!(
///     format!("{error}"),
///     "hash table capacity must be a positive number of buckets"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// A hash table was requested with a capacity of zero buckets.
    ZeroCapacity,
}

impl std::fmt::Display for SetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity => write!(
                formatter,
                "hash table capacity must be a positive number of buckets"
            ),
        }
    }
}

impl std::error::Error for SetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_display() {
        assert_eq!(
            SetError::ZeroCapacity.to_string(),
            "hash table capacity must be a positive number of buckets"
        );
    }

    #[test]
    fn test_set_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_error: &E) {}
        assert_error(&SetError::ZeroCapacity);
    }

    #[test]
    fn test_set_error_boxes_into_dyn_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(SetError::ZeroCapacity);
        assert!(boxed.source().is_none());
    }
}
