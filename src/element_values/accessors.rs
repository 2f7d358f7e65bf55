//! Host adapters for the element value operations.
//!
//! Two host shapes exist: resources holding a map of value lists keyed by
//! element definition code ([`ElementValuesHost`]), and save commands holding
//! a single list ([`ElementValuesCommand`]). The adapters borrow the host
//! through any pointer (`&H` for reads, `&mut H` for writes).

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use super::{ElementValueAccessor, ElementValueDomain, ElementValueSimple, ElementValueSource};
use crate::{
    errors::Result,
    models::{
        ElementValue, ElementValues, Process, ProcessPageItem, ProcessSaveElementCommand, Task,
        TaskPageItem, TaskSaveElementCommand,
    },
};

/// Resource holding element values keyed by element definition code.
pub trait ElementValuesHost {
    const DOMAIN: ElementValueDomain;

    fn element_values_by_code(&self) -> Option<&ElementValues>;

    fn element_values_by_code_mut(&mut self) -> &mut Option<ElementValues>;
}

/// Command holding the values of a single element.
pub trait ElementValuesCommand {
    const DOMAIN: ElementValueDomain;

    fn element_value_list(&self) -> Option<&Vec<ElementValue>>;

    fn element_value_list_mut(&mut self) -> &mut Option<Vec<ElementValue>>;
}

macro_rules! impl_element_values_host {
    ($($host:ty => $domain:expr),+ $(,)?) => {
        $(
            impl ElementValuesHost for $host {
                const DOMAIN: ElementValueDomain = $domain;

                fn element_values_by_code(&self) -> Option<&ElementValues> {
                    self.element_values.as_ref()
                }

                fn element_values_by_code_mut(&mut self) -> &mut Option<ElementValues> {
                    &mut self.element_values
                }
            }
        )+
    };
}

macro_rules! impl_element_values_command {
    ($($host:ty => $domain:expr),+ $(,)?) => {
        $(
            impl ElementValuesCommand for $host {
                const DOMAIN: ElementValueDomain = $domain;

                fn element_value_list(&self) -> Option<&Vec<ElementValue>> {
                    self.element_values.as_ref()
                }

                fn element_value_list_mut(&mut self) -> &mut Option<Vec<ElementValue>> {
                    &mut self.element_values
                }
            }
        )+
    };
}

impl_element_values_host!(
    Process => ElementValueDomain::Process,
    ProcessPageItem => ElementValueDomain::Process,
    Task => ElementValueDomain::Task,
    TaskPageItem => ElementValueDomain::Task,
);

impl_element_values_command!(
    ProcessSaveElementCommand => ElementValueDomain::Process,
    TaskSaveElementCommand => ElementValueDomain::Task,
);

/// Accessor over the values stored under one code of a keyed host.
#[derive(Debug)]
pub struct CodeElementValueAccessor<H> {
    host: H,
    element_definition_code: String,
}

impl<H> CodeElementValueAccessor<H> {
    pub fn new(host: H, element_definition_code: impl Into<String>) -> Self {
        Self {
            host,
            element_definition_code: element_definition_code.into(),
        }
    }

    pub fn element_definition_code(&self) -> &str {
        &self.element_definition_code
    }
}

impl<H> ElementValueSource for CodeElementValueAccessor<H>
where
    H: Deref,
    H::Target: ElementValuesHost,
{
    fn element_values(&self) -> &[ElementValue] {
        self.host
            .element_values_by_code()
            .and_then(|values| values.get(&self.element_definition_code))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl<H> ElementValueAccessor for CodeElementValueAccessor<H>
where
    H: DerefMut,
    H::Target: ElementValuesHost,
{
    fn set_element_values(&mut self, element_values: Vec<ElementValue>) {
        let values = self
            .host
            .element_values_by_code_mut()
            .get_or_insert_with(HashMap::new);

        if element_values.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                code = %self.element_definition_code,
                "removing element values"
            );
            values.remove(&self.element_definition_code);
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                code = %self.element_definition_code,
                count = element_values.len(),
                "replacing element values"
            );
            values.insert(self.element_definition_code.clone(), element_values);
        }
    }

    fn to_element_value_object(&self, value: ElementValueSimple) -> Result<ElementValue> {
        <H::Target as ElementValuesHost>::DOMAIN.to_element_value(value)
    }
}

/// Accessor over the single value list of a save command.
#[derive(Debug)]
pub struct CommandElementValueAccessor<H> {
    command: H,
}

impl<H> CommandElementValueAccessor<H> {
    pub fn new(command: H) -> Self {
        Self { command }
    }
}

impl<H> ElementValueSource for CommandElementValueAccessor<H>
where
    H: Deref,
    H::Target: ElementValuesCommand,
{
    fn element_values(&self) -> &[ElementValue] {
        self.command
            .element_value_list()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl<H> ElementValueAccessor for CommandElementValueAccessor<H>
where
    H: DerefMut,
    H::Target: ElementValuesCommand,
{
    fn set_element_values(&mut self, element_values: Vec<ElementValue>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(count = element_values.len(), "replacing command element values");

        *self.command.element_value_list_mut() = if element_values.is_empty() {
            None
        } else {
            Some(element_values)
        };
    }

    fn to_element_value_object(&self, value: ElementValueSimple) -> Result<ElementValue> {
        <H::Target as ElementValuesCommand>::DOMAIN.to_element_value(value)
    }
}
