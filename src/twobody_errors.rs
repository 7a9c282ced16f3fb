use thiserror::Error;

/// Errors produced by the solver.
///
/// Every failure mode of this crate is a caller-correctable input error: a
/// non-positive scalar handed to construction or to a query. Errors are
/// surfaced immediately and leave no internal state behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TwoBodyError {
    /// The message carries the offending parameter name, the constraint it
    /// violated, and the received value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
