//! Tests for JSON-forms helpers on task page items and tenant users.

use kuflow_rest::{
    Error, JsonFormsFile, TaskPageItem, TaskPageItemUtils, TenantUser, TenantUserUtils,
};
use serde_json::json;

fn task_page_item() -> TaskPageItem {
    serde_json::from_value(json!({
        "id": "3b755d5e-b64f-4ec2-a830-173f006bdf8e",
        "elementValues": {
            "EV_OBJECT": [{"type": "OBJECT", "value": {"key": "value 1"}}]
        },
        "jsonFormsValue": {
            "data": {
                "documents": [
                    "kuflow-file:uri=xxx-yyy-zzz;type=application/pdf;size=500;name=dummy.pdf;"
                ]
            }
        }
    }))
    .expect("valid task page item fixture")
}

fn tenant_user() -> TenantUser {
    serde_json::from_value(json!({
        "id": "e68d8136-1166-455c-93d6-d106201c1856",
        "metadata": {
            "valid": true,
            "value": {
                "department": "Sector 7G",
                "shifts": [{"start": "2000-01-01T08:00:00+01:00"}]
            }
        }
    }))
    .expect("valid tenant user fixture")
}

// =============================================================================
// Task page items
// =============================================================================

#[test]
fn task_page_item_reads_element_values_and_forms() {
    let item = task_page_item();

    assert!(TaskPageItemUtils::get_element_value_valid(&item, "EV_OBJECT"));
    assert_eq!(
        TaskPageItemUtils::get_element_value_as_dict(&item, "EV_OBJECT")
            .unwrap()
            .get("key"),
        Some(&json!("value 1"))
    );
    assert_eq!(
        TaskPageItemUtils::get_json_forms_property_as_file(&item, "documents.0").unwrap(),
        JsonFormsFile::new("xxx-yyy-zzz", "application/pdf", "dummy.pdf", 500)
    );
}

#[test]
fn task_page_item_writes_forms() {
    let mut item = task_page_item();

    TaskPageItemUtils::update_json_forms_property(&mut item, "documents.0", None).unwrap();
    assert_eq!(
        TaskPageItemUtils::get_json_forms_property_as_list(&item, "documents").unwrap(),
        Vec::<serde_json::Value>::new()
    );

    let err =
        TaskPageItemUtils::update_json_forms_property(&mut item, "documents.name", Some("x".into()))
            .unwrap_err();
    assert!(matches!(err, Error::PathInconsistency { .. }));
}

// =============================================================================
// Tenant users
// =============================================================================

#[test]
fn tenant_user_metadata_properties() {
    let mut user = tenant_user();

    assert_eq!(
        TenantUserUtils::get_metadata_property_as_str(&user, "department").unwrap(),
        "Sector 7G"
    );
    assert_eq!(
        TenantUserUtils::get_metadata_property_as_datetime(&user, "shifts.0.start")
            .unwrap()
            .to_rfc3339(),
        "2000-01-01T08:00:00+01:00"
    );
    assert_eq!(
        TenantUserUtils::find_metadata_property_as_int(&user, "shifts.3.start").unwrap(),
        None
    );

    TenantUserUtils::update_metadata_property(&mut user, "shifts.1.start", Some("2000-01-02".into()))
        .unwrap();
    assert_eq!(
        TenantUserUtils::get_metadata_property_as_date(&user, "shifts.1.start")
            .unwrap()
            .to_string(),
        "2000-01-02"
    );
}

#[test]
fn tenant_user_without_metadata() {
    let mut user = TenantUser::default();

    assert_eq!(
        TenantUserUtils::get_metadata_property_as_str(&user, "department").unwrap_err(),
        Error::PropertyValueMissing
    );

    TenantUserUtils::update_metadata_property(&mut user, "department", Some("Sector 7G".into()))
        .unwrap();
    let metadata = user.metadata.expect("metadata created");
    assert_eq!(metadata.valid, None);
    assert_eq!(
        serde_json::to_value(metadata.value).unwrap(),
        json!({"department": "Sector 7G"})
    );
}
