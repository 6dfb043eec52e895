use crate::error::{Result, TumblrError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Params is the optional parameter mapping accepted by endpoint methods.
pub type Params = std::collections::HashMap<String, String>;

/// Status line carried by every API reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// The 3-digit HTTP status code (e.g. 200)
    pub status: u16,
    /// The HTTP reason phrase (e.g. "OK")
    #[serde(default)]
    pub msg: String,
}

impl Meta {
    /// 200 for reads, 201 for created posts
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

/// Envelope is the `{meta, response}` wrapper shared by all API replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub meta: Meta,

    /// Endpoint-specific payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.meta.is_success()
    }

    /// Turn a non-success envelope into an error
    pub fn check(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TumblrError::from_meta(&self.meta))
        }
    }

    /// Get the raw payload
    pub fn raw(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    /// Decode the payload into the provided type
    pub fn apply<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let payload = self.response.clone().unwrap_or(Value::Null);
        serde_json::from_value(payload).map_err(TumblrError::from)
    }

    /// Get a value from the payload by a slash-separated path.
    /// For example, "blog/name" accesses the "name" field inside the "blog" object.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = self.response.as_ref()?;

        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(arr) => arr.get(part.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Get a string value from the payload by a slash-separated path
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(|s| s.to_string()))
    }

    /// Get an unsigned id from the payload, accepting numbers or digit strings
    pub fn get_id(&self, path: &str) -> Option<u64> {
        match self.get(path)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}
