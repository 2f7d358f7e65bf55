//! Per-model helpers.
//!
//! Each `*Utils` type binds the generic operations of [`crate::element_values`]
//! and [`crate::json_forms`] to one model. Hosts that key their values by
//! element definition code take the code as second argument; save commands
//! are already scoped to a single element.
//!
//! ```ignore
//! use kuflow_rest::{Task, TaskUtils};
//!
//! let mut task = Task::default();
//! TaskUtils::set_element_value(&mut task, "EV_STRING", Some("MY TEXT".into()))?;
//! assert_eq!(TaskUtils::get_element_value_as_str(&task, "EV_STRING")?, "MY TEXT");
//!
//! TaskUtils::update_json_forms_property(&mut task, "users.0.name", Some("Homer".into()))?;
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::{Map, Value};

use crate::{
    codec::{JsonFormsFile, JsonFormsPrincipal},
    element_values::{
        self, CodeElementValueAccessor, CommandElementValueAccessor, ElementValueSimple,
    },
    errors::Result,
    json_forms::{self, JsonFormsSimpleValue},
    models::{
        DocumentItem, Process, ProcessPageItem, ProcessSaveElementCommand, PrincipalItem, Task,
        TaskPageItem, TaskSaveElementCommand, TaskSaveJsonFormsValueDataCommand, TenantUser,
    },
};

macro_rules! element_value_writers {
    (keyed $host:ty) => {
        pub fn get_element_value_valid(host: &$host, element_definition_code: &str) -> bool {
            element_values::get_element_value_valid(&CodeElementValueAccessor::new(
                host,
                element_definition_code,
            ))
        }

        pub fn get_element_value_valid_at(
            host: &$host,
            element_definition_code: &str,
            index: usize,
        ) -> Result<bool> {
            element_values::get_element_value_valid_at(
                &CodeElementValueAccessor::new(host, element_definition_code),
                index,
            )
        }

        pub fn set_element_value_valid<'a>(
            host: &'a mut $host,
            element_definition_code: &str,
            valid: bool,
        ) -> &'a mut $host {
            element_values::set_element_value_valid(
                &mut CodeElementValueAccessor::new(&mut *host, element_definition_code),
                valid,
            );
            host
        }

        pub fn set_element_value_valid_at<'a>(
            host: &'a mut $host,
            element_definition_code: &str,
            valid: bool,
            index: usize,
        ) -> Result<&'a mut $host> {
            element_values::set_element_value_valid_at(
                &mut CodeElementValueAccessor::new(&mut *host, element_definition_code),
                valid,
                index,
            )?;
            Ok(host)
        }

        pub fn set_element_value<'a>(
            host: &'a mut $host,
            element_definition_code: &str,
            element_value: Option<ElementValueSimple>,
        ) -> Result<&'a mut $host> {
            element_values::set_element_value(
                &mut CodeElementValueAccessor::new(&mut *host, element_definition_code),
                element_value,
            )?;
            Ok(host)
        }

        pub fn set_element_value_list<'a>(
            host: &'a mut $host,
            element_definition_code: &str,
            element_values: Option<Vec<ElementValueSimple>>,
        ) -> Result<&'a mut $host> {
            element_values::set_element_value_list(
                &mut CodeElementValueAccessor::new(&mut *host, element_definition_code),
                element_values,
            )?;
            Ok(host)
        }

        pub fn add_element_value<'a>(
            host: &'a mut $host,
            element_definition_code: &str,
            element_value: Option<ElementValueSimple>,
        ) -> Result<&'a mut $host> {
            element_values::add_element_value(
                &mut CodeElementValueAccessor::new(&mut *host, element_definition_code),
                element_value,
            )?;
            Ok(host)
        }

        pub fn add_element_value_list<'a>(
            host: &'a mut $host,
            element_definition_code: &str,
            element_values: Option<Vec<ElementValueSimple>>,
        ) -> Result<&'a mut $host> {
            element_values::add_element_value_list(
                &mut CodeElementValueAccessor::new(&mut *host, element_definition_code),
                element_values,
            )?;
            Ok(host)
        }
    };
    (command $host:ty) => {
        pub fn get_element_value_valid(command: &$host) -> bool {
            element_values::get_element_value_valid(&CommandElementValueAccessor::new(command))
        }

        pub fn get_element_value_valid_at(command: &$host, index: usize) -> Result<bool> {
            element_values::get_element_value_valid_at(
                &CommandElementValueAccessor::new(command),
                index,
            )
        }

        pub fn set_element_value_valid(command: &mut $host, valid: bool) -> &mut $host {
            element_values::set_element_value_valid(
                &mut CommandElementValueAccessor::new(&mut *command),
                valid,
            );
            command
        }

        pub fn set_element_value_valid_at(
            command: &mut $host,
            valid: bool,
            index: usize,
        ) -> Result<&mut $host> {
            element_values::set_element_value_valid_at(
                &mut CommandElementValueAccessor::new(&mut *command),
                valid,
                index,
            )?;
            Ok(command)
        }

        pub fn set_element_value(
            command: &mut $host,
            element_value: Option<ElementValueSimple>,
        ) -> Result<&mut $host> {
            element_values::set_element_value(
                &mut CommandElementValueAccessor::new(&mut *command),
                element_value,
            )?;
            Ok(command)
        }

        pub fn set_element_value_list(
            command: &mut $host,
            element_values: Option<Vec<ElementValueSimple>>,
        ) -> Result<&mut $host> {
            element_values::set_element_value_list(
                &mut CommandElementValueAccessor::new(&mut *command),
                element_values,
            )?;
            Ok(command)
        }

        pub fn add_element_value(
            command: &mut $host,
            element_value: Option<ElementValueSimple>,
        ) -> Result<&mut $host> {
            element_values::add_element_value(
                &mut CommandElementValueAccessor::new(&mut *command),
                element_value,
            )?;
            Ok(command)
        }

        pub fn add_element_value_list(
            command: &mut $host,
            element_values: Option<Vec<ElementValueSimple>>,
        ) -> Result<&mut $host> {
            element_values::add_element_value_list(
                &mut CommandElementValueAccessor::new(&mut *command),
                element_values,
            )?;
            Ok(command)
        }
    };
}

macro_rules! element_value_readers {
    (keyed $host:ty; $($name:ident -> $ret:ty),+ $(,)?) => {
        $(
            pub fn $name(host: &$host, element_definition_code: &str) -> $ret {
                element_values::$name(&CodeElementValueAccessor::new(host, element_definition_code))
            }
        )+
    };
    (command $host:ty; $($name:ident -> $ret:ty),+ $(,)?) => {
        $(
            pub fn $name(command: &$host) -> $ret {
                element_values::$name(&CommandElementValueAccessor::new(command))
            }
        )+
    };
}

/// Operations shared by both element value domains.
macro_rules! process_element_value_fns {
    ($mode:ident $host:ty) => {
        element_value_writers!($mode $host);
        element_value_readers!($mode $host;
            get_element_value_as_str -> Result<String>,
            find_element_value_as_str -> Option<String>,
            get_element_value_as_str_list -> Vec<String>,
            get_element_value_as_float -> Result<f64>,
            find_element_value_as_float -> Result<Option<f64>>,
            get_element_value_as_float_list -> Result<Vec<f64>>,
            get_element_value_as_date -> Result<NaiveDate>,
            find_element_value_as_date -> Result<Option<NaiveDate>>,
            get_element_value_as_date_list -> Result<Vec<NaiveDate>>,
        );
    };
}

macro_rules! task_element_value_fns {
    ($mode:ident $host:ty) => {
        process_element_value_fns!($mode $host);
        element_value_readers!($mode $host;
            get_element_value_as_dict -> Result<Map<String, Value>>,
            find_element_value_as_dict -> Option<Map<String, Value>>,
            get_element_value_as_dict_list -> Vec<Map<String, Value>>,
            get_element_value_as_document -> Result<DocumentItem>,
            find_element_value_as_document -> Option<DocumentItem>,
            get_element_value_as_document_list -> Vec<DocumentItem>,
            get_element_value_as_principal -> Result<PrincipalItem>,
            find_element_value_as_principal -> Option<PrincipalItem>,
            get_element_value_as_principal_list -> Vec<PrincipalItem>,
        );
    };
}

macro_rules! json_forms_readers {
    ($host:ty; $($name:ident => $target:ident -> $ret:ty),+ $(,)?) => {
        $(
            pub fn $name(host: &$host, property_path: &str) -> Result<$ret> {
                json_forms::$target(host, property_path)
            }
        )+
    };
}

macro_rules! json_forms_update {
    ($host:ty, $name:ident) => {
        /// Writes `value` at `property_path`, creating missing parents;
        /// `None` removes the property.
        pub fn $name<'a>(
            host: &'a mut $host,
            property_path: &str,
            value: Option<JsonFormsSimpleValue>,
        ) -> Result<&'a mut $host> {
            json_forms::update_json_forms_property(&mut *host, property_path, value)?;
            Ok(host)
        }
    };
}

/// JSON-forms helpers. The first token names the form: `json_forms` for
/// task forms, `entity` for process entities, `metadata` for tenant users.
macro_rules! json_forms_fns {
    (json_forms $host:ty) => {
        json_forms_readers!($host;
            get_json_forms_property_as_str => get_json_forms_property_as_str -> String,
            find_json_forms_property_as_str => find_json_forms_property_as_str -> Option<String>,
            get_json_forms_property_as_int => get_json_forms_property_as_int -> i64,
            find_json_forms_property_as_int => find_json_forms_property_as_int -> Option<i64>,
            get_json_forms_property_as_float => get_json_forms_property_as_float -> f64,
            find_json_forms_property_as_float => find_json_forms_property_as_float -> Option<f64>,
            get_json_forms_property_as_date => get_json_forms_property_as_date -> NaiveDate,
            find_json_forms_property_as_date => find_json_forms_property_as_date -> Option<NaiveDate>,
            get_json_forms_property_as_datetime => get_json_forms_property_as_datetime -> DateTime<FixedOffset>,
            find_json_forms_property_as_datetime => find_json_forms_property_as_datetime -> Option<DateTime<FixedOffset>>,
            get_json_forms_property_as_file => get_json_forms_property_as_file -> JsonFormsFile,
            find_json_forms_property_as_file => find_json_forms_property_as_file -> Option<JsonFormsFile>,
            get_json_forms_property_as_principal => get_json_forms_property_as_principal -> JsonFormsPrincipal,
            find_json_forms_property_as_principal => find_json_forms_property_as_principal -> Option<JsonFormsPrincipal>,
            get_json_forms_property_as_list => get_json_forms_property_as_list -> Vec<Value>,
            find_json_forms_property_as_list => find_json_forms_property_as_list -> Option<Vec<Value>>,
            get_json_forms_property_as_dict => get_json_forms_property_as_dict -> Map<String, Value>,
            find_json_forms_property_as_dict => find_json_forms_property_as_dict -> Option<Map<String, Value>>,
        );
        json_forms_update!($host, update_json_forms_property);
    };
    (entity $host:ty) => {
        json_forms_readers!($host;
            get_entity_property_as_str => get_json_forms_property_as_str -> String,
            find_entity_property_as_str => find_json_forms_property_as_str -> Option<String>,
            get_entity_property_as_int => get_json_forms_property_as_int -> i64,
            find_entity_property_as_int => find_json_forms_property_as_int -> Option<i64>,
            get_entity_property_as_float => get_json_forms_property_as_float -> f64,
            find_entity_property_as_float => find_json_forms_property_as_float -> Option<f64>,
            get_entity_property_as_date => get_json_forms_property_as_date -> NaiveDate,
            find_entity_property_as_date => find_json_forms_property_as_date -> Option<NaiveDate>,
            get_entity_property_as_datetime => get_json_forms_property_as_datetime -> DateTime<FixedOffset>,
            find_entity_property_as_datetime => find_json_forms_property_as_datetime -> Option<DateTime<FixedOffset>>,
            get_entity_property_as_file => get_json_forms_property_as_file -> JsonFormsFile,
            find_entity_property_as_file => find_json_forms_property_as_file -> Option<JsonFormsFile>,
            get_entity_property_as_principal => get_json_forms_property_as_principal -> JsonFormsPrincipal,
            find_entity_property_as_principal => find_json_forms_property_as_principal -> Option<JsonFormsPrincipal>,
            get_entity_property_as_list => get_json_forms_property_as_list -> Vec<Value>,
            find_entity_property_as_list => find_json_forms_property_as_list -> Option<Vec<Value>>,
            get_entity_property_as_dict => get_json_forms_property_as_dict -> Map<String, Value>,
            find_entity_property_as_dict => find_json_forms_property_as_dict -> Option<Map<String, Value>>,
        );
        json_forms_update!($host, update_entity_property);
    };
    (metadata $host:ty) => {
        json_forms_readers!($host;
            get_metadata_property_as_str => get_json_forms_property_as_str -> String,
            find_metadata_property_as_str => find_json_forms_property_as_str -> Option<String>,
            get_metadata_property_as_int => get_json_forms_property_as_int -> i64,
            find_metadata_property_as_int => find_json_forms_property_as_int -> Option<i64>,
            get_metadata_property_as_float => get_json_forms_property_as_float -> f64,
            find_metadata_property_as_float => find_json_forms_property_as_float -> Option<f64>,
            get_metadata_property_as_date => get_json_forms_property_as_date -> NaiveDate,
            find_metadata_property_as_date => find_json_forms_property_as_date -> Option<NaiveDate>,
            get_metadata_property_as_datetime => get_json_forms_property_as_datetime -> DateTime<FixedOffset>,
            find_metadata_property_as_datetime => find_json_forms_property_as_datetime -> Option<DateTime<FixedOffset>>,
            get_metadata_property_as_file => get_json_forms_property_as_file -> JsonFormsFile,
            find_metadata_property_as_file => find_json_forms_property_as_file -> Option<JsonFormsFile>,
            get_metadata_property_as_principal => get_json_forms_property_as_principal -> JsonFormsPrincipal,
            find_metadata_property_as_principal => find_json_forms_property_as_principal -> Option<JsonFormsPrincipal>,
            get_metadata_property_as_list => get_json_forms_property_as_list -> Vec<Value>,
            find_metadata_property_as_list => find_json_forms_property_as_list -> Option<Vec<Value>>,
            get_metadata_property_as_dict => get_json_forms_property_as_dict -> Map<String, Value>,
            find_metadata_property_as_dict => find_json_forms_property_as_dict -> Option<Map<String, Value>>,
        );
        json_forms_update!($host, update_metadata_property);
    };
}

/// Helpers for [`Process`]: element values by code and the entity form.
pub struct ProcessUtils;

impl ProcessUtils {
    process_element_value_fns!(keyed Process);
    json_forms_fns!(entity Process);
}

/// Helpers for [`ProcessPageItem`] element values.
pub struct ProcessPageItemUtils;

impl ProcessPageItemUtils {
    process_element_value_fns!(keyed ProcessPageItem);
}

/// Helpers for [`ProcessSaveElementCommand`] element values.
pub struct ProcessSaveElementCommandUtils;

impl ProcessSaveElementCommandUtils {
    process_element_value_fns!(command ProcessSaveElementCommand);
}

/// Helpers for [`Task`]: element values by code and the JSON-forms value.
pub struct TaskUtils;

impl TaskUtils {
    task_element_value_fns!(keyed Task);
    json_forms_fns!(json_forms Task);
}

pub struct TaskPageItemUtils;

impl TaskPageItemUtils {
    task_element_value_fns!(keyed TaskPageItem);
    json_forms_fns!(json_forms TaskPageItem);
}

pub struct TaskSaveElementCommandUtils;

impl TaskSaveElementCommandUtils {
    task_element_value_fns!(command TaskSaveElementCommand);
}

pub struct TaskSaveJsonFormsValueDataCommandUtils;

impl TaskSaveJsonFormsValueDataCommandUtils {
    json_forms_fns!(json_forms TaskSaveJsonFormsValueDataCommand);
}

/// Helpers for the metadata form of a [`TenantUser`].
pub struct TenantUserUtils;

impl TenantUserUtils {
    json_forms_fns!(metadata TenantUser);
}
