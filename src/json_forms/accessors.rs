use super::{JsonFormDataAccessor, JsonFormDataSource};
use crate::models::{
    JsonFormsData, Process, Task, TaskPageItem, TaskSaveJsonFormsValueDataCommand, TenantUser,
};

/// Implements the data accessors for hosts whose form data sits one level
/// down, inside an optional wrapper record.
macro_rules! impl_nested_json_form_data {
    ($($host:ty => $wrapper:ident . $field:ident),+ $(,)?) => {
        $(
            impl JsonFormDataSource for $host {
                fn data(&self) -> Option<&JsonFormsData> {
                    self.$wrapper.as_ref().and_then(|wrapper| wrapper.$field.as_ref())
                }
            }

            impl JsonFormDataAccessor for $host {
                fn data_mut(&mut self) -> Option<&mut JsonFormsData> {
                    self.$wrapper.as_mut().and_then(|wrapper| wrapper.$field.as_mut())
                }

                fn set_data(&mut self, data: JsonFormsData) {
                    self.$wrapper.get_or_insert_with(Default::default).$field = Some(data);
                }
            }
        )+
    };
}

impl_nested_json_form_data!(
    Task => json_forms_value.data,
    TaskPageItem => json_forms_value.data,
    Process => entity.data,
    TenantUser => metadata.value,
);

impl JsonFormDataSource for TaskSaveJsonFormsValueDataCommand {
    fn data(&self) -> Option<&JsonFormsData> {
        self.data.as_ref()
    }
}

impl JsonFormDataAccessor for TaskSaveJsonFormsValueDataCommand {
    fn data_mut(&mut self) -> Option<&mut JsonFormsData> {
        self.data.as_mut()
    }

    fn set_data(&mut self, data: JsonFormsData) {
        self.data = Some(data);
    }
}
