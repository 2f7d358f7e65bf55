//! JSON-forms data navigation.
//!
//! Form data is a free JSON tree attached to a host (a task, a process
//! entity, a tenant user's metadata, or a save command). Properties are
//! addressed with dotted paths such as `"user.name"` or `"users.0.name"`.
//!
//! Typed readers come in pairs: `find_*` returns `Ok(None)` when the path does
//! not resolve, `get_*` fails with [`Error::PropertyValueMissing`]. Both fail
//! with [`Error::TypeMismatch`] when a value is present but has the wrong
//! shape. Readers only borrow the host and never create anything.
//!
//! [`update_json_forms_property`] writes through the creating walk, so any
//! missing parent object or array is materialized on the way.

mod accessors;
mod path;

pub use path::{segment_implies_array, JsonFormsContainer, JsonFormsProperty};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::{Map, Number, Value};

use crate::{
    codec::{self, JsonFormsFile, JsonFormsPrincipal},
    errors::{Error, ExpectedKind, Result},
    models::JsonFormsData,
};

/// Read side of a JSON-forms host.
pub trait JsonFormDataSource {
    fn data(&self) -> Option<&JsonFormsData>;
}

/// Write side of a JSON-forms host.
pub trait JsonFormDataAccessor: JsonFormDataSource {
    fn data_mut(&mut self) -> Option<&mut JsonFormsData>;

    /// Replaces the data tree, creating any wrapper record on the way.
    fn set_data(&mut self, data: JsonFormsData);
}

/// Value accepted by [`update_json_forms_property`].
#[derive(Debug, Clone, PartialEq)]
pub enum JsonFormsSimpleValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Stored as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Stored as RFC 3339.
    DateTime(DateTime<FixedOffset>),
    /// Stored as a `kuflow-file:` string.
    File(JsonFormsFile),
    /// Stored as a `kuflow-principal:` string.
    Principal(JsonFormsPrincipal),
}

impl JsonFormsSimpleValue {
    /// Converts to the JSON value written into the tree.
    pub fn into_json(self) -> Result<Value> {
        let value = match self {
            JsonFormsSimpleValue::Text(text) => Value::String(text),
            JsonFormsSimpleValue::Integer(number) => Value::Number(number.into()),
            JsonFormsSimpleValue::Float(number) => Number::from_f64(number)
                .map(Value::Number)
                .ok_or_else(|| Error::UnsupportedValue(format!("non-finite number {number}")))?,
            JsonFormsSimpleValue::Bool(flag) => Value::Bool(flag),
            JsonFormsSimpleValue::Date(date) => Value::String(date.to_string()),
            JsonFormsSimpleValue::DateTime(date_time) => Value::String(date_time.to_rfc3339()),
            JsonFormsSimpleValue::File(file) => Value::String(file.to_string()),
            JsonFormsSimpleValue::Principal(principal) => Value::String(principal.to_string()),
        };
        Ok(value)
    }
}

macro_rules! impl_from_for_simple_value {
    ($($source:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$source> for JsonFormsSimpleValue {
                fn from(value: $source) -> Self {
                    JsonFormsSimpleValue::$variant(value.into())
                }
            }
        )+
    };
}

impl_from_for_simple_value!(
    &str => Text,
    String => Text,
    i64 => Integer,
    i32 => Integer,
    u32 => Integer,
    f64 => Float,
    bool => Bool,
    NaiveDate => Date,
    DateTime<FixedOffset> => DateTime,
    JsonFormsFile => File,
    JsonFormsPrincipal => Principal,
);

/// Resolves `path` with the creating walk.
///
/// With `create_missing_parents` the data tree itself and every missing
/// parent container are created. Returns `Ok(None)` when the path cannot be
/// resolved (missing parent without creation, index past the end of a list,
/// scalar in the middle of the path).
pub fn find_json_forms_property<'a, A: JsonFormDataAccessor + ?Sized>(
    accessor: &'a mut A,
    property_path: &str,
    create_missing_parents: bool,
) -> Result<Option<JsonFormsProperty<'a>>> {
    if accessor.data().is_none() {
        if !create_missing_parents {
            return Ok(None);
        }
        accessor.set_data(Map::new());
    }

    match accessor.data_mut() {
        Some(data) => path::walk(data, property_path, create_missing_parents),
        None => Ok(None),
    }
}

/// Current value at `property_path`, `None` when absent or `null`.
pub fn find_json_forms_property_value<'a, A: JsonFormDataSource + ?Sized>(
    accessor: &'a A,
    property_path: &str,
) -> Result<Option<&'a Value>> {
    match accessor.data() {
        Some(data) => path::resolve(data, property_path),
        None => Ok(None),
    }
}

macro_rules! json_forms_readers {
    ($(($get:ident, $find:ident, $ty:ty, $convert:ident)),+ $(,)?) => {
        $(
            pub fn $get<A: JsonFormDataSource + ?Sized>(
                accessor: &A,
                property_path: &str,
            ) -> Result<$ty> {
                $find(accessor, property_path)?.ok_or(Error::PropertyValueMissing)
            }

            pub fn $find<A: JsonFormDataSource + ?Sized>(
                accessor: &A,
                property_path: &str,
            ) -> Result<Option<$ty>> {
                find_json_forms_property_value(accessor, property_path)?
                    .map(|value| $convert(value, property_path))
                    .transpose()
            }
        )+
    };
}

json_forms_readers!(
    (get_json_forms_property_as_str, find_json_forms_property_as_str, String, value_as_str),
    (get_json_forms_property_as_int, find_json_forms_property_as_int, i64, value_as_int),
    (get_json_forms_property_as_float, find_json_forms_property_as_float, f64, value_as_float),
    (get_json_forms_property_as_date, find_json_forms_property_as_date, NaiveDate, value_as_date),
    (
        get_json_forms_property_as_datetime,
        find_json_forms_property_as_datetime,
        DateTime<FixedOffset>,
        value_as_datetime
    ),
    (
        get_json_forms_property_as_file,
        find_json_forms_property_as_file,
        JsonFormsFile,
        value_as_file
    ),
    (
        get_json_forms_property_as_principal,
        find_json_forms_property_as_principal,
        JsonFormsPrincipal,
        value_as_principal
    ),
    (get_json_forms_property_as_list, find_json_forms_property_as_list, Vec<Value>, value_as_list),
    (
        get_json_forms_property_as_dict,
        find_json_forms_property_as_dict,
        Map<String, Value>,
        value_as_dict
    ),
);

/// Writes `value` at `property_path`; `None` removes the property.
///
/// Missing parents are created. Inside a list the last segment must be an
/// index; writing at the append position pushes a new element, removing it
/// does nothing.
pub fn update_json_forms_property<A: JsonFormDataAccessor + ?Sized>(
    accessor: &mut A,
    property_path: &str,
    value: Option<JsonFormsSimpleValue>,
) -> Result<()> {
    let value = value.map(JsonFormsSimpleValue::into_json).transpose()?;

    let Some(property) = find_json_forms_property(accessor, property_path, true)? else {
        #[cfg(feature = "tracing")]
        tracing::warn!(property_path, "json forms property does not resolve");
        return Err(Error::PropertyNotFound {
            path: property_path.to_string(),
        });
    };

    let (container, segment) = property.into_parts();
    match container {
        JsonFormsContainer::Array(list) => {
            if !segment_implies_array(&segment) {
                #[cfg(feature = "tracing")]
                tracing::warn!(property_path, "list property addressed by key");
                return Err(Error::path_inconsistency(
                    &segment,
                    "parent path is not a List",
                ));
            }
            let index = segment.parse::<usize>().unwrap_or(usize::MAX);
            match value {
                Some(value) if index < list.len() => list[index] = value,
                Some(value) if index == list.len() => list.push(value),
                Some(_) => {
                    return Err(Error::PropertyNotFound {
                        path: property_path.to_string(),
                    })
                }
                None if index < list.len() => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(property_path, "removing json forms list element");
                    list.remove(index);
                }
                None => {}
            }
        }
        JsonFormsContainer::Object(map) => match value {
            Some(value) => {
                map.insert(segment, value);
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(property_path, "removing json forms property");
                map.remove(&segment);
            }
        },
    }
    Ok(())
}

fn value_as_str(value: &Value, _property_path: &str) -> Result<String> {
    Ok(match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

fn value_as_int(value: &Value, property_path: &str) -> Result<i64> {
    let number = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    number.ok_or_else(|| Error::type_mismatch(property_path, ExpectedKind::Int))
}

fn value_as_float(value: &Value, property_path: &str) -> Result<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .filter(|number| !number.is_nan())
        .ok_or_else(|| Error::type_mismatch(property_path, ExpectedKind::Float))
}

fn value_as_date(value: &Value, property_path: &str) -> Result<NaiveDate> {
    value
        .as_str()
        .and_then(|text| text.parse::<NaiveDate>().ok())
        .ok_or_else(|| Error::type_mismatch(property_path, ExpectedKind::Date))
}

fn value_as_datetime(value: &Value, property_path: &str) -> Result<DateTime<FixedOffset>> {
    value
        .as_str()
        .and_then(parse_datetime)
        .ok_or_else(|| Error::type_mismatch(property_path, ExpectedKind::DateTime))
}

/// RFC 3339 first; values without an offset are read as UTC, and a bare
/// date as its midnight.
fn parse_datetime(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time);
    }
    let naive = text
        .parse::<NaiveDateTime>()
        .ok()
        .or_else(|| text.parse::<NaiveDate>().ok()?.and_hms_opt(0, 0, 0))?;
    Some(naive.and_utc().fixed_offset())
}

fn value_as_file(value: &Value, property_path: &str) -> Result<JsonFormsFile> {
    value
        .as_str()
        .and_then(codec::parse_file)
        .ok_or_else(|| Error::type_mismatch(property_path, ExpectedKind::File))
}

fn value_as_principal(value: &Value, property_path: &str) -> Result<JsonFormsPrincipal> {
    value
        .as_str()
        .and_then(codec::parse_principal)
        .ok_or_else(|| Error::type_mismatch(property_path, ExpectedKind::Principal))
}

fn value_as_list(value: &Value, property_path: &str) -> Result<Vec<Value>> {
    value
        .as_array()
        .cloned()
        .ok_or_else(|| Error::type_mismatch(property_path, ExpectedKind::List))
}

fn value_as_dict(value: &Value, property_path: &str) -> Result<Map<String, Value>> {
    value
        .as_object()
        .cloned()
        .ok_or_else(|| Error::type_mismatch(property_path, ExpectedKind::Dict))
}
