//! Tests for the process and process page item helpers.

use chrono::NaiveDate;
use kuflow_rest::{
    DocumentItem, ElementValue, Error, JsonFormsPrincipal, PrincipalType, Process,
    ProcessPageItem, ProcessPageItemUtils, ProcessUtils,
};
use serde_json::{json, Value};

fn date(value: &str) -> NaiveDate {
    value.parse().expect("valid date")
}

fn element_values_json() -> Value {
    json!({
        "EV_STRING": [
            {"type": "STRING", "value": "MY TEXT 1", "valid": true},
            {"type": "STRING", "value": "MY TEXT 2", "valid": false}
        ],
        "EV_NUMBER": [
            {"type": "NUMBER", "value": 500, "valid": true},
            {"type": "NUMBER", "value": 600, "valid": true}
        ],
        "EV_DATE": [
            {"type": "STRING", "value": "2000-01-01", "valid": false},
            {"type": "STRING", "value": "1980-01-01", "valid": false}
        ]
    })
}

fn process() -> Process {
    serde_json::from_value(json!({
        "id": "3b755d5e-b64f-4ec2-a830-173f006bdf8e",
        "processDefinitionId": "e68d8136-1166-455c-93d6-d106201c1856",
        "elementValues": element_values_json(),
        "entity": {
            "valid": true,
            "data": {
                "customer": {"name": "Homer", "age": "39"},
                "owner": "kuflow-principal:id=xxx-yyy-zzz;type=USER;name=Homer%20Simpson;"
            }
        }
    }))
    .expect("valid process fixture")
}

fn process_page_item() -> ProcessPageItem {
    serde_json::from_value(json!({
        "id": "3b755d5e-b64f-4ec2-a830-173f006bdf8e",
        "elementValues": element_values_json()
    }))
    .expect("valid process page item fixture")
}

fn values<'a>(process: &'a Process, code: &str) -> Option<&'a Vec<ElementValue>> {
    process
        .element_values
        .as_ref()
        .and_then(|values| values.get(code))
}

// =============================================================================
// Process element values
// =============================================================================

#[test]
fn validity_flags() {
    let mut process = process();

    assert!(!ProcessUtils::get_element_value_valid(&process, "EV_STRING"));
    assert!(ProcessUtils::get_element_value_valid(&process, "EV_NUMBER"));
    assert!(ProcessUtils::get_element_value_valid(&process, "EV_UNKNOWN"));

    assert!(ProcessUtils::get_element_value_valid_at(&process, "EV_STRING", 0).unwrap());
    assert!(!ProcessUtils::get_element_value_valid_at(&process, "EV_STRING", 1).unwrap());
    assert_eq!(
        ProcessUtils::get_element_value_valid_at(&process, "EV_STRING", 10)
            .unwrap_err()
            .to_string(),
        "Array index out of bound: 10"
    );

    ProcessUtils::set_element_value_valid_at(&mut process, "EV_DATE", true, 0).unwrap();
    assert!(ProcessUtils::get_element_value_valid_at(&process, "EV_DATE", 0).unwrap());
    assert!(!ProcessUtils::get_element_value_valid_at(&process, "EV_DATE", 1).unwrap());

    ProcessUtils::set_element_value_valid(&mut process, "EV_DATE", true);
    assert!(ProcessUtils::get_element_value_valid(&process, "EV_DATE"));
}

#[test]
fn string_values() {
    let mut process = process();

    assert_eq!(
        ProcessUtils::get_element_value_as_str(&process, "EV_STRING").unwrap(),
        "MY TEXT 1"
    );
    assert_eq!(
        ProcessUtils::get_element_value_as_str_list(&process, "EV_STRING"),
        vec!["MY TEXT 1", "MY TEXT 2"]
    );
    assert_eq!(
        ProcessUtils::get_element_value_as_str(&process, "EV_UNKNOWN").unwrap_err(),
        Error::ValueRequired
    );

    ProcessUtils::add_element_value_list(
        &mut process,
        "EV_STRING",
        Some(vec!["MY TEXT 3".into(), "MY TEXT 4".into()]),
    )
    .unwrap();
    assert_eq!(
        values(&process, "EV_STRING").unwrap(),
        &vec![
            ElementValue::string("MY TEXT 1"),
            ElementValue::string("MY TEXT 2").with_valid(false),
            ElementValue::string("MY TEXT 3"),
            ElementValue::string("MY TEXT 4"),
        ]
    );

    ProcessUtils::set_element_value_list(&mut process, "EV_STRING", None).unwrap();
    assert_eq!(values(&process, "EV_STRING"), None);
}

#[test]
fn number_and_date_values() {
    let mut process = process();

    assert_eq!(
        ProcessUtils::get_element_value_as_float_list(&process, "EV_NUMBER").unwrap(),
        vec![500.0, 600.0]
    );
    assert_eq!(
        ProcessUtils::find_element_value_as_date(&process, "EV_DATE").unwrap(),
        Some(date("2000-01-01"))
    );

    ProcessUtils::set_element_value(&mut process, "EV_NUMBER", Some(700.into())).unwrap();
    assert_eq!(
        values(&process, "EV_NUMBER").unwrap(),
        &vec![ElementValue::number(700)]
    );

    ProcessUtils::add_element_value(&mut process, "EV_DATE", Some(date("2020-05-05").into()))
        .unwrap();
    assert_eq!(
        ProcessUtils::get_element_value_as_date_list(&process, "EV_DATE").unwrap(),
        vec![date("2000-01-01"), date("1980-01-01"), date("2020-05-05")]
    );
}

#[test]
fn structured_values_are_rejected() {
    let mut process = process();

    let err = ProcessUtils::set_element_value(
        &mut process,
        "EV_STRING",
        Some(DocumentItem::default().into()),
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnsupportedValue(_)));
    assert_eq!(values(&process, "EV_STRING").unwrap().len(), 2);
}

#[test]
fn writing_to_a_process_without_values_creates_the_map() {
    let mut process = Process::default();

    ProcessUtils::set_element_value(&mut process, "EV", Some("value".into())).unwrap();
    assert_eq!(values(&process, "EV").unwrap(), &vec![ElementValue::string("value")]);

    ProcessUtils::set_element_value(&mut process, "EV", None).unwrap();
    assert!(process.element_values.unwrap().is_empty());
}

// =============================================================================
// Process entity
// =============================================================================

#[test]
fn entity_properties() {
    let mut process = process();

    assert_eq!(
        ProcessUtils::get_entity_property_as_str(&process, "customer.name").unwrap(),
        "Homer"
    );
    assert_eq!(
        ProcessUtils::get_entity_property_as_int(&process, "customer.age").unwrap(),
        39
    );
    assert_eq!(
        ProcessUtils::get_entity_property_as_principal(&process, "owner").unwrap(),
        JsonFormsPrincipal::new("xxx-yyy-zzz", PrincipalType::user(), "Homer Simpson")
    );
    assert_eq!(
        ProcessUtils::find_entity_property_as_dict(&process, "customer.address").unwrap(),
        None
    );

    ProcessUtils::update_entity_property(&mut process, "customer.tags.0", Some("vip".into()))
        .unwrap();
    assert_eq!(
        ProcessUtils::get_entity_property_as_list(&process, "customer.tags").unwrap(),
        vec![json!("vip")]
    );
}

#[test]
fn entity_is_created_on_first_write() {
    let mut process = Process::default();
    assert_eq!(
        ProcessUtils::get_entity_property_as_str(&process, "key").unwrap_err(),
        Error::PropertyValueMissing
    );

    ProcessUtils::update_entity_property(&mut process, "key", Some("value".into())).unwrap();
    assert_eq!(
        process.entity.unwrap().data.unwrap().get("key"),
        Some(&json!("value"))
    );
}

// =============================================================================
// Process page items
// =============================================================================

#[test]
fn page_item_element_values() {
    let mut item = process_page_item();

    assert_eq!(
        ProcessPageItemUtils::get_element_value_as_float(&item, "EV_NUMBER").unwrap(),
        500.0
    );
    assert_eq!(
        ProcessPageItemUtils::get_element_value_as_str_list(&item, "EV_NUMBER"),
        vec!["500", "600"]
    );
    assert!(!ProcessPageItemUtils::get_element_value_valid(&item, "EV_DATE"));

    ProcessPageItemUtils::set_element_value_valid(&mut item, "EV_DATE", true);
    assert!(ProcessPageItemUtils::get_element_value_valid(&item, "EV_DATE"));

    ProcessPageItemUtils::set_element_value_list(&mut item, "EV_DATE", Some(vec![])).unwrap();
    assert!(!item
        .element_values
        .as_ref()
        .unwrap()
        .contains_key("EV_DATE"));
}
