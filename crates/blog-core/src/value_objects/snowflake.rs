//! Snowflake ID - 64-bit time-ordered unique identifier
//!
//! Layout (most significant first):
//! - 42 bits: milliseconds since the custom epoch
//! - 10 bits: worker ID (0-1023)
//! - 12 bits: per-millisecond sequence (0-4095)
//!
//! IDs sort by creation time, which gives chronological ordering for free
//! on every listing query.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const WORKER_BITS: u8 = 10;
const SEQUENCE_BITS: u8 = 12;
const WORKER_MAX: u16 = (1 << WORKER_BITS) - 1;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;
const TIMESTAMP_SHIFT: u8 = WORKER_BITS + SEQUENCE_BITS;

/// Time-ordered 64-bit entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2022-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_640_995_200_000;

    /// Create a Snowflake from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check whether the Snowflake is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Milliseconds since the Unix epoch at which this ID was minted
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> TIMESTAMP_SHIFT) + Self::EPOCH
    }

    /// Worker ID embedded in this ID
    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) as u16) & WORKER_MAX
    }

    /// Per-millisecond sequence embedded in this ID
    #[inline]
    pub fn sequence(&self) -> u16 {
        (self.0 & SEQUENCE_MASK) as u16
    }

    /// Parse from the decimal string representation
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Serialized as a string: i64 does not survive a JavaScript number round-trip
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Accepted as either a string or a bare integer
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = Snowflake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer snowflake ID")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                Ok(Snowflake(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Snowflake)
                    .map_err(|_| de::Error::custom("snowflake out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                Snowflake::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Thread-safe Snowflake generator
///
/// The last-issued (millisecond, sequence) pair is packed into a single
/// atomic word and advanced with a CAS loop, so generation never takes a
/// lock. Up to 4096 IDs per millisecond per worker.
pub struct SnowflakeGenerator {
    worker_id: u16,
    // (millis << SEQUENCE_BITS) | sequence of the last issued ID
    state: AtomicI64,
}

impl SnowflakeGenerator {
    /// Create a generator with the given worker ID
    ///
    /// # Panics
    /// Panics if `worker_id` > 1023
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id <= WORKER_MAX, "Worker ID must be < 1024");
        Self {
            worker_id,
            state: AtomicI64::new(0),
        }
    }

    /// Generate the next unique Snowflake
    pub fn generate(&self) -> Snowflake {
        loop {
            let now = current_millis();
            let prev = self.state.load(Ordering::Acquire);
            let last_ms = prev >> SEQUENCE_BITS;
            let last_seq = prev & SEQUENCE_MASK;

            // Reuse last_ms when the clock reads earlier than the newest
            // issued ID (NTP step back), so ordering never regresses.
            let (ms, seq) = if now > last_ms {
                (now, 0)
            } else if last_seq < SEQUENCE_MASK {
                (last_ms, last_seq + 1)
            } else {
                // 4096 IDs burned inside one millisecond; wait it out
                std::hint::spin_loop();
                continue;
            };

            let next = (ms << SEQUENCE_BITS) | seq;
            if self
                .state
                .compare_exchange(prev, next, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                let id = ((ms - Snowflake::EPOCH) << TIMESTAMP_SHIFT)
                    | (i64::from(self.worker_id) << SEQUENCE_BITS)
                    | seq;
                return Snowflake::new(id);
            }
            // Lost the race to another thread, retry with fresh state
        }
    }

    /// Worker ID of this generator
    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[inline]
fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
