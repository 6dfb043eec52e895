use chrono::{DateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;

/// Point in time as reported by the API: whole seconds since the Unix epoch.
///
/// Wraps `chrono::DateTime<Utc>`; serializes back to the integer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

/// Wire forms seen for epoch fields
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeconds {
    Int(i64),
    Text(String),
}

impl Timestamp {
    pub fn new(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }

    /// Current time truncated to whole seconds
    pub fn now() -> Self {
        let now = Utc::now();
        Timestamp::from_unix(now.timestamp()).unwrap_or(Timestamp(now))
    }

    /// Create a Timestamp from seconds since the epoch
    pub fn from_unix(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Timestamp)
    }

    /// Get the unix timestamp in seconds
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(t: Timestamp) -> Self {
        t.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.unix())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = match RawSeconds::deserialize(deserializer)? {
            RawSeconds::Int(secs) => secs,
            RawSeconds::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid epoch seconds: {text:?}")))?,
        };
        Timestamp::from_unix(secs)
            .ok_or_else(|| D::Error::custom(format!("epoch seconds out of range: {secs}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn test_timestamp_serialization() {
        let time = Timestamp::from_unix(1597242491).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "1597242491");
    }

    #[test]
    fn test_timestamp_deserialization() {
        let time: Timestamp = serde_json::from_str("1597242491").unwrap();
        assert_eq!(time.unix(), 1597242491);
        assert_eq!(time.format("%Y-%m-%d").to_string(), "2020-08-12");

        let quoted: Timestamp = serde_json::from_str(r#""1597242491""#).unwrap();
        assert_eq!(quoted, time);
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        let result: Result<Timestamp, _> = serde_json::from_str(r#""yesterday""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_timestamp_null() {
        let result: Result<Option<Timestamp>, _> = serde_json::from_str("null");
        assert!(result.unwrap().is_none());
    }
}
