//! Utility macros for the cafe crate.

/// A macro for early returns with an error if a condition is not met.
///
/// Like `assert!`, but returns `Err($error)` instead of panicking.
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
