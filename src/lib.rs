//! Element value and JSON-forms utilities for the KuFlow REST models.
//!
//! Processes and tasks carry business data in two shapes: typed, multi-valued
//! element values keyed by element definition code, and free JSON-forms
//! trees addressed by dotted paths. The `*Utils` helpers read and write both
//! in place on the models returned by (and sent to) the REST API.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codec;
pub mod element_values;
mod errors;
mod identifiers;
pub mod json_forms;
mod models;
mod utils;

pub use codec::{JsonFormsFile, JsonFormsGroup, JsonFormsPrincipal};
pub use element_values::{ElementValueDomain, ElementValueSimple};
pub use errors::{Error, ExpectedKind, Result};
pub use identifiers::PrincipalType;
pub use json_forms::JsonFormsSimpleValue;
pub use models::{
    DocumentItem, ElementValue, ElementValueType, ElementValues, JsonFormsData, JsonFormsValue,
    PrincipalItem, Process, ProcessPageItem, ProcessSaveElementCommand, Task,
    TaskDefinitionSummary, TaskPageItem, TaskSaveElementCommand,
    TaskSaveJsonFormsValueDataCommand, TenantUser, TenantUserMetadata,
};
pub use utils::{
    ProcessPageItemUtils, ProcessSaveElementCommandUtils, ProcessUtils, TaskPageItemUtils,
    TaskSaveElementCommandUtils, TaskSaveJsonFormsValueDataCommandUtils, TaskUtils,
    TenantUserUtils,
};
