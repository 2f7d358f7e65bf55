//! Compound value codec.
//!
//! File, principal and group references are stored inside JSON-forms data as
//! plain strings:
//!
//! ```text
//! kuflow-file:uri=<enc>;type=<enc>;name=<enc>;size=<int>;
//! kuflow-principal:id=<enc>;type=<enc>;name=<enc>;
//! kuflow-group:id=<enc>;type=<enc>;name=<enc>;
//! ```
//!
//! `<enc>` is percent-encoding of every byte outside `A-Z a-z 0-9 - _ . ~`
//! (space becomes `%20`, never `+`). The emitted field order is fixed.
//! Parsing is order-independent and never fails loudly; a string that does
//! not encode a reference yields `None`.

use std::collections::HashMap;
use std::fmt;

use crate::identifiers::PrincipalType;

pub const FILE_PREFIX: &str = "kuflow-file:";
pub const PRINCIPAL_PREFIX: &str = "kuflow-principal:";
pub const GROUP_PREFIX: &str = "kuflow-group:";

/// File reference embedded in JSON-forms data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormsFile {
    /// Storage uri, e.g. `ku:xxx-yyy-zzz/aaa-bbb-ccc`.
    pub uri: String,
    /// Content type, e.g. `application/pdf`.
    pub file_type: String,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Name of the file as uploaded, when it differs from `name`.
    pub original_name: Option<String>,
}

impl JsonFormsFile {
    pub fn new(
        uri: impl Into<String>,
        file_type: impl Into<String>,
        name: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            uri: uri.into(),
            file_type: file_type.into(),
            name: name.into(),
            size,
            original_name: None,
        }
    }

    pub fn with_original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = Some(original_name.into());
        self
    }
}

impl fmt::Display for JsonFormsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            generate_file(&self.uri, &self.file_type, &self.name, self.size)
        )?;
        if let Some(original_name) = &self.original_name {
            write!(f, "original-name={};", encode(original_name))?;
        }
        Ok(())
    }
}

/// Principal reference embedded in JSON-forms data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormsPrincipal {
    pub id: String,
    pub principal_type: PrincipalType,
    pub name: String,
}

impl JsonFormsPrincipal {
    pub fn new(
        id: impl Into<String>,
        principal_type: impl Into<PrincipalType>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            principal_type: principal_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for JsonFormsPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            generate_principal(&self.id, self.principal_type.as_str(), &self.name)
        )
    }
}

/// Group reference embedded in JSON-forms data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormsGroup {
    pub id: String,
    pub group_type: String,
    pub name: String,
}

impl fmt::Display for JsonFormsGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", generate_group(&self.id, &self.group_type, &self.name))
    }
}

pub fn generate_file(uri: &str, file_type: &str, name: &str, size: u64) -> String {
    format!(
        "{FILE_PREFIX}uri={};type={};name={};size={size};",
        encode(uri),
        encode(file_type),
        encode(name)
    )
}

pub fn generate_principal(id: &str, principal_type: &str, name: &str) -> String {
    format!(
        "{PRINCIPAL_PREFIX}id={};type={};name={};",
        encode(id),
        encode(principal_type),
        encode(name)
    )
}

pub fn generate_group(id: &str, group_type: &str, name: &str) -> String {
    format!(
        "{GROUP_PREFIX}id={};type={};name={};",
        encode(id),
        encode(group_type),
        encode(name)
    )
}

/// Parses a `kuflow-file:` string. Returns `None` when `value` is not one.
pub fn parse_file(value: &str) -> Option<JsonFormsFile> {
    let mut fields = parse_fields(value, FILE_PREFIX)?;
    let size = fields.get("size")?.parse::<u64>().ok()?;

    Some(JsonFormsFile {
        uri: fields.remove("uri")?,
        file_type: fields.remove("type")?,
        name: fields.remove("name")?,
        size,
        original_name: fields.remove("original-name"),
    })
}

/// Parses a `kuflow-principal:` string. Returns `None` when `value` is not one.
pub fn parse_principal(value: &str) -> Option<JsonFormsPrincipal> {
    let mut fields = parse_fields(value, PRINCIPAL_PREFIX)?;

    Some(JsonFormsPrincipal {
        id: fields.remove("id")?,
        principal_type: PrincipalType::new(fields.remove("type")?),
        name: fields.remove("name")?,
    })
}

/// Parses a `kuflow-group:` string. Returns `None` when `value` is not one.
pub fn parse_group(value: &str) -> Option<JsonFormsGroup> {
    let mut fields = parse_fields(value, GROUP_PREFIX)?;

    Some(JsonFormsGroup {
        id: fields.remove("id")?,
        group_type: fields.remove("type")?,
        name: fields.remove("name")?,
    })
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Splits `prefix` + `key=value;...` into decoded pairs.
///
/// Chunks without `=` are skipped; a value that does not percent-decode to
/// UTF-8 rejects the whole string.
fn parse_fields<'a>(value: &'a str, prefix: &str) -> Option<HashMap<&'a str, String>> {
    let body = value.strip_prefix(prefix)?;

    let mut fields = HashMap::new();
    for chunk in body.split(';') {
        let Some((key, raw)) = chunk.split_once('=') else {
            continue;
        };
        let decoded = urlencoding::decode(raw).ok()?;
        fields.insert(key, decoded.into_owned());
    }
    Some(fields)
}
