//! Request and result records exchanged with the outside world.
//!
//! Field names are camelCase on the wire so records can be handed to the
//! dispatch layer unchanged. Downstream storage keys records on
//! `(phoneNumber, timestamp)`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ErrorKind, VanityError};
use crate::rank::RESULT_COUNT;

/// An incoming generation request.
///
/// Missing or `null` fields deserialize as empty strings and fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VanityRequest {
    /// The caller's number.
    #[serde(deserialize_with = "null_as_empty")]
    pub phone_number: String,
    /// The number to turn into vanity words.
    #[serde(deserialize_with = "null_as_empty")]
    pub target_number: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The five ranked vanity numbers, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VanityNumbers {
    /// Highest ranked.
    pub first: String,
    /// Second.
    pub second: String,
    /// Third.
    pub third: String,
    /// Fourth.
    pub fourth: String,
    /// Fifth.
    pub fifth: String,
}

impl VanityNumbers {
    /// The numbers in rank order.
    pub fn as_array(&self) -> [&str; RESULT_COUNT] {
        [
            self.first.as_str(),
            self.second.as_str(),
            self.third.as_str(),
            self.fourth.as_str(),
            self.fifth.as_str(),
        ]
    }
}

impl From<[String; RESULT_COUNT]> for VanityNumbers {
    fn from([first, second, third, fourth, fifth]: [String; RESULT_COUNT]) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
            fifth,
        }
    }
}

/// Outcome of one generation event.
///
/// Exactly one of `vanity_numbers` or `error` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VanityRecord {
    /// Caller's number, echoed verbatim.
    pub phone_number: String,
    /// Target number, echoed verbatim.
    pub target_number: String,
    /// Identifies this generation event.
    pub timestamp: String,
    /// Ranked results on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vanity_numbers: Option<VanityNumbers>,
    /// Failure classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    /// User-facing explanation of the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VanityRecord {
    /// Build a success record.
    pub fn success(request: &VanityRequest, timestamp: String, numbers: VanityNumbers) -> Self {
        Self {
            phone_number: request.phone_number.clone(),
            target_number: request.target_number.clone(),
            timestamp,
            vanity_numbers: Some(numbers),
            error: None,
            message: None,
        }
    }

    /// Build a failure record carrying the user-facing message.
    pub fn failure(request: &VanityRequest, timestamp: String, error: &VanityError) -> Self {
        Self {
            phone_number: request.phone_number.clone(),
            target_number: request.target_number.clone(),
            timestamp,
            vanity_numbers: None,
            error: Some(error.kind()),
            message: Some(error.user_message().to_string()),
        }
    }

    /// Whether this record carries results.
    pub const fn is_success(&self) -> bool {
        self.vanity_numbers.is_some()
    }
}

static LAST_TIMESTAMP: AtomicU64 = AtomicU64::new(0);

/// Wall-clock milliseconds since the epoch, strictly increasing per process.
///
/// Two events in the same millisecond get consecutive values, so the
/// `(phoneNumber, timestamp)` key stays unique for records produced here.
pub fn next_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));

    let mut last = LAST_TIMESTAMP.load(Ordering::Relaxed);
    loop {
        let next = now.max(last.saturating_add(1));
        match LAST_TIMESTAMP.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return next.to_string(),
            Err(current) => last = current,
        }
    }
}
