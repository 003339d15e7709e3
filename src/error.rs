use thiserror::Error;

/// Errors raised by the scoring core.
///
/// The core raises synchronously and never retries or logs; callers decide
/// whether to skip the offending record or abort the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An out-of-range numeric input to the scorer, or a structurally
    /// invalid customer profile passed to evaluation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = Error::invalid("paymentHistory out of range");
        assert_eq!(
            err.to_string(),
            "invalid argument: paymentHistory out of range"
        );
    }
}
