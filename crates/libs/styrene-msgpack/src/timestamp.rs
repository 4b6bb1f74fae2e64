//! Timestamps carried as extension values.
//!
//! ```text
//! nanoseconds == 0:  d6 01 [seconds:32be]
//! nanoseconds != 0:  d7 01 [nanoseconds:30 | seconds:34]  (one 64-bit be word)
//! ```
//!
//! The 4-byte form keeps only the low 32 bits of the seconds. Out-of-range
//! seconds are truncated, never promoted to the wider form.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TimestampError;
use crate::payload::append_ext;

/// Extension kind byte used for timestamps.
pub const TIMESTAMP_EXT_KIND: i8 = 1;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const SECONDS_BITS: u32 = 34;
const SECONDS_MASK: u64 = (1 << SECONDS_BITS) - 1;

/// A point in time as seconds since the Unix epoch plus a nanosecond remainder.
///
/// `nanoseconds` is always in `0..1_000_000_000`. Instants before the epoch
/// have negative `seconds` and a non-negative remainder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    seconds: i64,
    nanoseconds: u32,
}

impl Timestamp {
    /// Build a timestamp, rejecting a nanosecond field of one second or more.
    pub fn new(seconds: i64, nanoseconds: u32) -> Result<Self, TimestampError> {
        if nanoseconds >= NANOS_PER_SECOND {
            return Err(TimestampError::NanosecondsOutOfRange(nanoseconds));
        }
        Ok(Self { seconds, nanoseconds })
    }

    /// Whole seconds since the epoch, with no sub-second part.
    pub fn from_unix_seconds(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        SystemTime::now().into()
    }

    /// Seconds since the Unix epoch (negative before it).
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond remainder in `0..1_000_000_000`.
    pub fn nanoseconds(&self) -> u32 {
        self.nanoseconds
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) => Self {
                seconds: i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
                nanoseconds: since.subsec_nanos(),
            },
            Err(err) => {
                let before = err.duration();
                let mut seconds = i64::try_from(before.as_secs()).map_or(i64::MIN, |s| -s);
                let mut nanoseconds = before.subsec_nanos();
                // Floor toward the past so the remainder stays non-negative.
                if nanoseconds > 0 {
                    seconds = seconds.saturating_sub(1);
                    nanoseconds = NANOS_PER_SECOND - nanoseconds;
                }
                Self { seconds, nanoseconds }
            }
        }
    }
}

#[cfg(feature = "time")]
impl From<time::OffsetDateTime> for Timestamp {
    fn from(time: time::OffsetDateTime) -> Self {
        Self { seconds: time.unix_timestamp(), nanoseconds: time.nanosecond() }
    }
}

/// Append `ts` as a timestamp extension.
pub fn append_timestamp(dst: &mut Vec<u8>, ts: Timestamp) {
    append_timestamp_parts(dst, ts.seconds, ts.nanoseconds);
}

/// Append a timestamp from raw parts without range checks.
///
/// Seconds that do not fit the selected form are truncated to it.
pub fn append_timestamp_parts(dst: &mut Vec<u8>, seconds: i64, nanoseconds: u32) {
    if nanoseconds == 0 {
        if u32::try_from(seconds).is_err() {
            log::debug!("timestamp: seconds {seconds} truncated to 32-bit form");
        }
        append_ext(dst, TIMESTAMP_EXT_KIND, &(seconds as u32).to_be_bytes());
    } else {
        // Seconds are masked so negative values never spill into the nanosecond bits.
        let word = (u64::from(nanoseconds) << SECONDS_BITS) | (seconds as u64 & SECONDS_MASK);
        append_ext(dst, TIMESTAMP_EXT_KIND, &word.to_be_bytes());
    }
}
