//! Wire models consumed by the element-value and JSON-forms utilities.
//!
//! These mirror the subset of the KuFlow REST resources that own business
//! data: element values keyed by element definition code, and free-form
//! JSON-forms trees. The REST layer (out of scope here) (de)serializes them
//! with the camelCase field names used on the wire.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

use crate::identifiers::PrincipalType;

/// Element values of a host, keyed by element definition code.
///
/// A code with no values is represented by the absence of its key.
pub type ElementValues = HashMap<String, Vec<ElementValue>>;

/// Free-form JSON object used as the root of a JSON-forms tree.
pub type JsonFormsData = Map<String, Value>;

fn default_valid() -> bool {
    true
}

/// Discriminant of an [`ElementValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementValueType {
    String,
    Number,
    Object,
    Document,
    Principal,
}

/// One typed element value plus its validity flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementValue {
    String {
        value: String,
        #[serde(default = "default_valid")]
        valid: bool,
    },
    Number {
        value: Number,
        #[serde(default = "default_valid")]
        valid: bool,
    },
    Object {
        value: Map<String, Value>,
        #[serde(default = "default_valid")]
        valid: bool,
    },
    Document {
        value: DocumentItem,
        #[serde(default = "default_valid")]
        valid: bool,
    },
    Principal {
        value: PrincipalItem,
        #[serde(default = "default_valid")]
        valid: bool,
    },
}

impl ElementValue {
    pub fn string(value: impl Into<String>) -> Self {
        ElementValue::String {
            value: value.into(),
            valid: true,
        }
    }

    pub fn number(value: impl Into<Number>) -> Self {
        ElementValue::Number {
            value: value.into(),
            valid: true,
        }
    }

    pub fn object(value: Map<String, Value>) -> Self {
        ElementValue::Object { value, valid: true }
    }

    pub fn document(value: DocumentItem) -> Self {
        ElementValue::Document { value, valid: true }
    }

    pub fn principal(value: PrincipalItem) -> Self {
        ElementValue::Principal { value, valid: true }
    }

    /// Returns the same value with the given validity flag.
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.set_valid(valid);
        self
    }

    pub fn value_type(&self) -> ElementValueType {
        match self {
            ElementValue::String { .. } => ElementValueType::String,
            ElementValue::Number { .. } => ElementValueType::Number,
            ElementValue::Object { .. } => ElementValueType::Object,
            ElementValue::Document { .. } => ElementValueType::Document,
            ElementValue::Principal { .. } => ElementValueType::Principal,
        }
    }

    pub fn valid(&self) -> bool {
        match self {
            ElementValue::String { valid, .. }
            | ElementValue::Number { valid, .. }
            | ElementValue::Object { valid, .. }
            | ElementValue::Document { valid, .. }
            | ElementValue::Principal { valid, .. } => *valid,
        }
    }

    pub fn set_valid(&mut self, flag: bool) {
        match self {
            ElementValue::String { valid, .. }
            | ElementValue::Number { valid, .. }
            | ElementValue::Object { valid, .. }
            | ElementValue::Document { valid, .. }
            | ElementValue::Principal { valid, .. } => *valid = flag,
        }
    }
}

/// Document stored as an element value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_length: Option<u64>,
}

/// Principal (user, application...) stored as an element value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub principal_type: Option<PrincipalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// JSON-forms payload attached to a task or a process entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonFormsValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonFormsData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<ElementValues>,
    /// Process entity form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<JsonFormsValue>,
}

/// Process as returned by paginated listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPageItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<ElementValues>,
}

/// Request body to save the values of one process element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSaveElementCommand {
    pub element_definition_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<Vec<ElementValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinitionSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<TaskDefinitionSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<ElementValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_forms_value: Option<JsonFormsValue>,
}

/// Task as returned by paginated listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPageItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<TaskDefinitionSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<ElementValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_forms_value: Option<JsonFormsValue>,
}

/// Request body to save the values of one task element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSaveElementCommand {
    pub element_definition_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<Vec<ElementValue>>,
}

/// Request body to replace the JSON-forms data of a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskSaveJsonFormsValueDataCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonFormsData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenantUserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonFormsData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TenantUserMetadata>,
}
