//! Pulling ids and payloads out of raw `/users` requests.

use serde_json::{Map, Value};

use crate::domain::NewUser;

use super::ApiError;

/// JSON body accepted by create and update.
///
/// Absent or null `name`/`email` decode as empty strings and are left for the
/// validator to reject. A present `id` must be an integer but is never used.
#[derive(Debug, Default)]
pub struct UserPayload {
    id: Option<i64>,
    name: Option<String>,
    email: Option<String>,
}

impl UserPayload {
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn into_candidate(self) -> NewUser {
        NewUser::new(self.name.unwrap_or_default(), self.email.unwrap_or_default())
    }
}

/// Decodes the first JSON value in the body. Anything after it is ignored.
///
/// The value must be an object or `null` (read as `{}`). Keys match field
/// names case-insensitively, an exact match taking precedence, and a repeated
/// key keeps its last value.
pub fn decode_payload(body: &[u8]) -> Result<UserPayload, ApiError> {
    let value = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .and_then(Result::ok)
        .ok_or(ApiError::InvalidBody)?;

    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => Map::new(),
        _ => return Err(ApiError::InvalidBody),
    };

    let id = match field(&fields, "id") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_i64().ok_or(ApiError::InvalidBody)?),
    };

    Ok(UserPayload {
        id,
        name: string_field(&fields, "name")?,
        email: string_field(&fields, "email")?,
    })
}

fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Result<Option<String>, ApiError> {
    match field(fields, name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ApiError::InvalidBody),
    }
}

pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidId)
}

/// Reads the id from the third `/`-separated segment, as in `/users/<id>`.
pub fn path_id(path: &str) -> Result<i64, ApiError> {
    let segment = path.split('/').nth(2).ok_or(ApiError::BadPath)?;
    parse_id(segment)
}

/// The first non-empty `id` query value, if any.
pub fn query_id(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
}
