//! Element value read/write operations.
//!
//! Every operation is written once against the accessor traits and reused by
//! each host shape (processes, tasks, page items, save-element commands)
//! through the façades in [`crate::utils`].
//!
//! Typed readers filter by tag: `str`/`float` read STRING and NUMBER entries,
//! `date` reads STRING entries as ISO-8601 dates, `dict` reads OBJECT entries,
//! `document`/`principal` read their own tags. Entries of other tags are
//! skipped silently.

mod accessors;

pub use accessors::{
    CodeElementValueAccessor, CommandElementValueAccessor, ElementValuesCommand,
    ElementValuesHost,
};

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::{Map, Number, Value};

use crate::{
    errors::{Error, ExpectedKind, Result},
    models::{DocumentItem, ElementValue, PrincipalItem},
};

/// Plain-language value accepted by the element value setters.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValueSimple {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Stored as an ISO-8601 `STRING`.
    Date(NaiveDate),
    /// Stored as an ISO-8601 `STRING`.
    DateTime(DateTime<FixedOffset>),
    Object(Map<String, Value>),
    Document(DocumentItem),
    Principal(PrincipalItem),
}

impl ElementValueSimple {
    fn kind(&self) -> &'static str {
        match self {
            ElementValueSimple::Text(_) => "text",
            ElementValueSimple::Integer(_) => "integer",
            ElementValueSimple::Float(_) => "float",
            ElementValueSimple::Date(_) => "date",
            ElementValueSimple::DateTime(_) => "date-time",
            ElementValueSimple::Object(_) => "object",
            ElementValueSimple::Document(_) => "document",
            ElementValueSimple::Principal(_) => "principal",
        }
    }
}

impl From<&str> for ElementValueSimple {
    fn from(value: &str) -> Self {
        ElementValueSimple::Text(value.to_string())
    }
}

impl From<String> for ElementValueSimple {
    fn from(value: String) -> Self {
        ElementValueSimple::Text(value)
    }
}

impl From<i64> for ElementValueSimple {
    fn from(value: i64) -> Self {
        ElementValueSimple::Integer(value)
    }
}

impl From<i32> for ElementValueSimple {
    fn from(value: i32) -> Self {
        ElementValueSimple::Integer(value.into())
    }
}

impl From<f64> for ElementValueSimple {
    fn from(value: f64) -> Self {
        ElementValueSimple::Float(value)
    }
}

impl From<NaiveDate> for ElementValueSimple {
    fn from(value: NaiveDate) -> Self {
        ElementValueSimple::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for ElementValueSimple {
    fn from(value: DateTime<FixedOffset>) -> Self {
        ElementValueSimple::DateTime(value)
    }
}

impl From<Map<String, Value>> for ElementValueSimple {
    fn from(value: Map<String, Value>) -> Self {
        ElementValueSimple::Object(value)
    }
}

impl From<DocumentItem> for ElementValueSimple {
    fn from(value: DocumentItem) -> Self {
        ElementValueSimple::Document(value)
    }
}

impl From<PrincipalItem> for ElementValueSimple {
    fn from(value: PrincipalItem) -> Self {
        ElementValueSimple::Principal(value)
    }
}

/// Element value domain of a host shape.
///
/// Processes only hold text and numbers; tasks additionally hold objects,
/// documents and principals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementValueDomain {
    Process,
    Task,
}

impl ElementValueDomain {
    /// Maps a simple value to the correctly tagged, valid [`ElementValue`].
    pub fn to_element_value(self, value: ElementValueSimple) -> Result<ElementValue> {
        match (self, value) {
            (_, ElementValueSimple::Text(text)) => Ok(ElementValue::string(text)),
            (_, ElementValueSimple::Integer(number)) => Ok(ElementValue::number(number)),
            (_, ElementValueSimple::Float(number)) => Number::from_f64(number)
                .map(ElementValue::number)
                .ok_or_else(|| Error::UnsupportedValue(format!("non-finite number {number}"))),
            (_, ElementValueSimple::Date(date)) => Ok(ElementValue::string(date.to_string())),
            (_, ElementValueSimple::DateTime(date_time)) => {
                Ok(ElementValue::string(date_time.to_rfc3339()))
            }
            (ElementValueDomain::Task, ElementValueSimple::Object(object)) => {
                Ok(ElementValue::object(object))
            }
            (ElementValueDomain::Task, ElementValueSimple::Document(document)) => {
                Ok(ElementValue::document(document))
            }
            (ElementValueDomain::Task, ElementValueSimple::Principal(principal)) => {
                Ok(ElementValue::principal(principal))
            }
            (ElementValueDomain::Process, other) => Err(Error::UnsupportedValue(format!(
                "{} in a process element value",
                other.kind()
            ))),
        }
    }
}

/// Read side of a holder of one element value list.
pub trait ElementValueSource {
    /// Current values, empty when the code is absent.
    fn element_values(&self) -> &[ElementValue];
}

/// Write side of a holder of one element value list.
pub trait ElementValueAccessor: ElementValueSource {
    /// Replaces the whole list. An empty list removes it from the host.
    fn set_element_values(&mut self, element_values: Vec<ElementValue>);

    fn to_element_value_object(&self, value: ElementValueSimple) -> Result<ElementValue>;
}

/// True if every value is valid (vacuously true when there are none).
pub fn get_element_value_valid<A: ElementValueSource + ?Sized>(accessor: &A) -> bool {
    accessor.element_values().iter().all(ElementValue::valid)
}

pub fn get_element_value_valid_at<A: ElementValueSource + ?Sized>(
    accessor: &A,
    index: usize,
) -> Result<bool> {
    accessor
        .element_values()
        .get(index)
        .map(ElementValue::valid)
        .ok_or(Error::IndexOutOfBounds { index })
}

pub fn set_element_value_valid<A: ElementValueAccessor + ?Sized>(accessor: &mut A, valid: bool) {
    let mut element_values = accessor.element_values().to_vec();
    if element_values.is_empty() {
        return;
    }
    for element_value in &mut element_values {
        element_value.set_valid(valid);
    }
    accessor.set_element_values(element_values);
}

pub fn set_element_value_valid_at<A: ElementValueAccessor + ?Sized>(
    accessor: &mut A,
    valid: bool,
    index: usize,
) -> Result<()> {
    let mut element_values = accessor.element_values().to_vec();
    let element_value = element_values
        .get_mut(index)
        .ok_or(Error::IndexOutOfBounds { index })?;
    element_value.set_valid(valid);
    accessor.set_element_values(element_values);
    Ok(())
}

/// Replaces the values with a single one; `None` removes them all.
pub fn set_element_value<A: ElementValueAccessor + ?Sized>(
    accessor: &mut A,
    element_value: Option<ElementValueSimple>,
) -> Result<()> {
    set_element_value_list(accessor, element_value.map(|value| vec![value]))
}

/// Replaces the values; `None` or an empty list removes them all.
pub fn set_element_value_list<A: ElementValueAccessor + ?Sized>(
    accessor: &mut A,
    element_values: Option<Vec<ElementValueSimple>>,
) -> Result<()> {
    let element_values = to_element_value_objects(accessor, element_values.unwrap_or_default())?;
    accessor.set_element_values(element_values);
    Ok(())
}

/// Appends one value after the current ones; `None` is a no-op.
pub fn add_element_value<A: ElementValueAccessor + ?Sized>(
    accessor: &mut A,
    element_value: Option<ElementValueSimple>,
) -> Result<()> {
    add_element_value_list(accessor, element_value.map(|value| vec![value]))
}

/// Appends values after the current ones; `None` or an empty list is a no-op.
pub fn add_element_value_list<A: ElementValueAccessor + ?Sized>(
    accessor: &mut A,
    element_values: Option<Vec<ElementValueSimple>>,
) -> Result<()> {
    let additions = to_element_value_objects(accessor, element_values.unwrap_or_default())?;
    if additions.is_empty() {
        return Ok(());
    }

    let mut element_values = accessor.element_values().to_vec();
    element_values.extend(additions);
    accessor.set_element_values(element_values);
    Ok(())
}

pub fn get_element_value_as_str<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<String> {
    find_element_value_as_str(accessor).ok_or(Error::ValueRequired)
}

pub fn find_element_value_as_str<A: ElementValueSource + ?Sized>(accessor: &A) -> Option<String> {
    get_element_value_as_str_list(accessor).into_iter().next()
}

pub fn get_element_value_as_str_list<A: ElementValueSource + ?Sized>(accessor: &A) -> Vec<String> {
    accessor
        .element_values()
        .iter()
        .filter_map(|element_value| match element_value {
            ElementValue::String { value, .. } => Some(value.clone()),
            ElementValue::Number { value, .. } => Some(value.to_string()),
            _ => None,
        })
        .collect()
}

pub fn get_element_value_as_float<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<f64> {
    find_element_value_as_float(accessor)?.ok_or(Error::ValueRequired)
}

pub fn find_element_value_as_float<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Option<f64>> {
    Ok(get_element_value_as_float_list(accessor)?.into_iter().next())
}

/// Numbers of the STRING and NUMBER entries. A STRING entry that is not
/// numeric is an error.
pub fn get_element_value_as_float_list<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Vec<f64>> {
    accessor
        .element_values()
        .iter()
        .filter_map(|element_value| match element_value {
            ElementValue::String { value, .. } => Some(parse_float(value)),
            ElementValue::Number { value, .. } => Some(number_as_float(value)),
            _ => None,
        })
        .collect()
}

pub fn get_element_value_as_date<A: ElementValueSource + ?Sized>(accessor: &A) -> Result<NaiveDate> {
    find_element_value_as_date(accessor)?.ok_or(Error::ValueRequired)
}

pub fn find_element_value_as_date<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Option<NaiveDate>> {
    Ok(get_element_value_as_date_list(accessor)?.into_iter().next())
}

/// Dates of the STRING entries. A STRING entry that is not an ISO-8601 date
/// is an error.
pub fn get_element_value_as_date_list<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Vec<NaiveDate>> {
    accessor
        .element_values()
        .iter()
        .filter_map(|element_value| match element_value {
            ElementValue::String { value, .. } => Some(parse_date(value)),
            _ => None,
        })
        .collect()
}

pub fn get_element_value_as_dict<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<Map<String, Value>> {
    find_element_value_as_dict(accessor).ok_or(Error::ValueRequired)
}

pub fn find_element_value_as_dict<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Option<Map<String, Value>> {
    get_element_value_as_dict_list(accessor).into_iter().next()
}

pub fn get_element_value_as_dict_list<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Vec<Map<String, Value>> {
    accessor
        .element_values()
        .iter()
        .filter_map(|element_value| match element_value {
            ElementValue::Object { value, .. } => Some(value.clone()),
            _ => None,
        })
        .collect()
}

pub fn get_element_value_as_document<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<DocumentItem> {
    find_element_value_as_document(accessor).ok_or(Error::ValueRequired)
}

pub fn find_element_value_as_document<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Option<DocumentItem> {
    get_element_value_as_document_list(accessor).into_iter().next()
}

pub fn get_element_value_as_document_list<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Vec<DocumentItem> {
    accessor
        .element_values()
        .iter()
        .filter_map(|element_value| match element_value {
            ElementValue::Document { value, .. } => Some(value.clone()),
            _ => None,
        })
        .collect()
}

pub fn get_element_value_as_principal<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Result<PrincipalItem> {
    find_element_value_as_principal(accessor).ok_or(Error::ValueRequired)
}

pub fn find_element_value_as_principal<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Option<PrincipalItem> {
    get_element_value_as_principal_list(accessor).into_iter().next()
}

pub fn get_element_value_as_principal_list<A: ElementValueSource + ?Sized>(
    accessor: &A,
) -> Vec<PrincipalItem> {
    accessor
        .element_values()
        .iter()
        .filter_map(|element_value| match element_value {
            ElementValue::Principal { value, .. } => Some(value.clone()),
            _ => None,
        })
        .collect()
}

fn to_element_value_objects<A: ElementValueAccessor + ?Sized>(
    accessor: &A,
    element_values: Vec<ElementValueSimple>,
) -> Result<Vec<ElementValue>> {
    element_values
        .into_iter()
        .map(|value| accessor.to_element_value_object(value))
        .collect()
}

fn number_as_float(value: &Number) -> Result<f64> {
    value.as_f64().ok_or_else(|| Error::InvalidElementValue {
        value: value.to_string(),
        expected: ExpectedKind::Float,
    })
}

fn parse_float(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidElementValue {
            value: value.to_string(),
            expected: ExpectedKind::Float,
        })
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    value
        .parse::<NaiveDate>()
        .map_err(|_| Error::InvalidElementValue {
            value: value.to_string(),
            expected: ExpectedKind::Date,
        })
}
