/// Errors from building a [`Timestamp`](crate::Timestamp) out of raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    /// Nanosecond field of one second or more.
    #[error("nanoseconds out of range: {0} (maximum 999999999)")]
    NanosecondsOutOfRange(u32),
}
