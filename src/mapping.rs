//! Declarative translation between wire records and internal entities.
//!
//! Each entity declares a static table of [`Field`]s. Decoding walks the
//! table to build a camelCase object which serde then reads into the typed
//! entity; encoding walks it the other way. Decoding never fails: missing or
//! malformed values come back absent.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::{FetchParams, Record};

pub const ID_KEY: &str = "Id";
pub const NAME_KEY: &str = "Name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Copied unchanged both ways; omitted from writes when absent.
    Scalar,
    /// Copied unchanged; written as `""` when absent.
    OptionalText,
    /// `"1,2,3"` on the wire, `[1, 2, 3]` internally.
    IdList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub wire: &'static str,
    pub internal: &'static str,
    pub kind: FieldKind,
    pub writable: bool,
}

impl Field {
    pub const fn scalar(wire: &'static str, internal: &'static str) -> Self {
        Self {
            wire,
            internal,
            kind: FieldKind::Scalar,
            writable: true,
        }
    }

    pub const fn optional_text(wire: &'static str, internal: &'static str) -> Self {
        Self {
            wire,
            internal,
            kind: FieldKind::OptionalText,
            writable: true,
        }
    }

    pub const fn id_list(wire: &'static str, internal: &'static str) -> Self {
        Self {
            wire,
            internal,
            kind: FieldKind::IdList,
            writable: true,
        }
    }

    /// Projected and decoded, never written back.
    pub const fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }
}

/// A record type stored in one backend collection.
pub trait Entity: Serialize + DeserializeOwned + Default + Send + Sync + 'static {
    /// Singular name used in log lines and error messages.
    const NAME: &'static str;
    const COLLECTION: &'static str;
    const FIELDS: &'static [Field];

    /// Value written to the backend's `Name` column for entities that do not
    /// map it directly.
    fn display_name(&self) -> Option<String> {
        None
    }
}

/// Field projection for reads: `Name` followed by every mapped wire key.
pub fn projection<E: Entity>() -> FetchParams {
    let mut names = vec![NAME_KEY];
    names.extend(E::FIELDS.iter().map(|f| f.wire).filter(|w| *w != NAME_KEY));
    FetchParams::new(names)
}

pub fn decode_record<E: Entity>(record: &Record) -> E {
    let internal = decode_fields(E::FIELDS, record);
    serde_json::from_value(Value::Object(internal)).unwrap_or_else(|e| {
        tracing::warn!("Could not decode {} record: {}", E::NAME, e);
        E::default()
    })
}

/// Encodes `entity` for a write. `id` is included only for updates.
pub fn encode_entity<E: Entity>(
    entity: &E,
    id: Option<i64>,
) -> Result<Record, serde_json::Error> {
    let internal = match serde_json::to_value(entity)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let mut record = encode_fields(E::FIELDS, &internal);
    if let Some(name) = entity.display_name() {
        record.insert(NAME_KEY.to_string(), Value::String(name));
    }
    if let Some(id) = id {
        record.insert(ID_KEY.to_string(), Value::from(id));
    }
    Ok(record)
}

pub fn decode_fields(fields: &[Field], record: &Record) -> Map<String, Value> {
    let mut internal = Map::new();

    if let Some(id) = record.get(ID_KEY) {
        internal.insert(ID_KEY.to_string(), id.clone());
    }

    for field in fields {
        let value = record.get(field.wire);
        match field.kind {
            FieldKind::IdList => {
                let ids = decode_id_list(value).into_iter().map(Value::from).collect();
                internal.insert(field.internal.to_string(), Value::Array(ids));
            }
            FieldKind::Scalar | FieldKind::OptionalText => {
                if let Some(v) = value.filter(|v| !v.is_null()) {
                    internal.insert(field.internal.to_string(), v.clone());
                }
            }
        }
    }

    internal
}

pub fn encode_fields(fields: &[Field], internal: &Map<String, Value>) -> Record {
    let mut record = Record::new();

    for field in fields.iter().filter(|f| f.writable) {
        let value = internal.get(field.internal).filter(|v| !v.is_null());
        match field.kind {
            FieldKind::IdList => {
                let ids: Vec<i64> = value
                    .and_then(Value::as_array)
                    .map(|items| items.iter().filter_map(Value::as_i64).collect())
                    .unwrap_or_default();
                record.insert(field.wire.to_string(), Value::String(encode_id_list(&ids)));
            }
            FieldKind::OptionalText => {
                let v = value.cloned().unwrap_or_else(|| Value::String(String::new()));
                record.insert(field.wire.to_string(), v);
            }
            FieldKind::Scalar => {
                if let Some(v) = value {
                    record.insert(field.wire.to_string(), v.clone());
                }
            }
        }
    }

    record
}

pub fn decode_id_list(value: Option<&Value>) -> Vec<i64> {
    match value {
        Some(Value::String(s)) => s.split(',').filter_map(leading_integer).collect(),
        _ => Vec::new(),
    }
}

/// Reads an optional sign and the leading digits of `token`, ignoring
/// whatever follows them: `"12abc"` is 12, `"3.5"` is 3, `"abc"` is `None`.
fn leading_integer(token: &str) -> Option<i64> {
    let token = token.trim();
    let unsigned = token.trim_start_matches(['+', '-']);
    let sign_len = token.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    token[..sign_len + digits].parse().ok()
}

pub fn encode_id_list(ids: &[i64]) -> String {
    ids.iter().map(i64::to_string).collect::<Vec<_>>().join(",")
}

/// Tolerant field deserializers: a value of the wrong shape becomes `None`.
pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0)
                        .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                        .map(|f| f as i64)
                }),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }
}
