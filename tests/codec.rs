//! Tests for the `kuflow-file:` / `kuflow-principal:` / `kuflow-group:` codec.

use kuflow_rest::codec::{
    generate_file, generate_group, generate_principal, parse_file, parse_group, parse_principal,
};
use kuflow_rest::{JsonFormsFile, JsonFormsPrincipal, PrincipalType};

// =============================================================================
// Files
// =============================================================================

#[test]
fn parse_file_with_original_name() {
    let file = parse_file(
        "kuflow-file:uri=ku:dummy/xxx-ssss-yyyy;type=application/pdf;size=11111;name=dummy.pdf;original-name=original-name.pdf;",
    )
    .expect("file reference");

    assert_eq!(
        file,
        JsonFormsFile::new("ku:dummy/xxx-ssss-yyyy", "application/pdf", "dummy.pdf", 11111)
            .with_original_name("original-name.pdf")
    );
}

#[test]
fn parse_file_without_optional_parts() {
    let file = parse_file(
        "kuflow-file:uri=ku:dummy/xxx-ssss-yyyy;type=application/pdf;size=11111;name=dummy.pdf;",
    )
    .expect("file reference");

    assert_eq!(file.size, 11111);
    assert_eq!(file.original_name, None);
}

#[test]
fn parse_file_rejects_incomplete_input() {
    let inputs = [
        "",
        "kuflow-file:type=application/pdf;size=11111;name=dummy.pdf;original-name=original-name.pdf;",
        "kuflow-file:uri=ku:dummy/xxx-ssss-yyyy;type=application/pdf;size=ABC;name=dummy.pdf;",
        "kuflow-file:uri=ku:dummy/xxx-ssss-yyyy;typeapplication/pdf;size=11111;name=dummy.pdf",
        "kuflow-principal:id=xxx-ssss-yyyy;type=USER;name=Homer;",
    ];

    for input in inputs {
        assert_eq!(parse_file(input), None, "{input}");
    }
}

#[test]
fn generated_file_round_trips() {
    let encoded = generate_file("ku:a b;c=d", "application/pdf", "my file; v=1.pdf", 500);
    assert_eq!(
        encoded,
        "kuflow-file:uri=ku%3Aa%20b%3Bc%3Dd;type=application%2Fpdf;name=my%20file%3B%20v%3D1.pdf;size=500;"
    );

    let file = parse_file(&encoded).expect("file reference");
    assert_eq!(file.uri, "ku:a b;c=d");
    assert_eq!(file.name, "my file; v=1.pdf");
    assert_eq!(file.to_string(), encoded);
}

// =============================================================================
// Principals and groups
// =============================================================================

#[test]
fn parse_principal_accepts_raw_and_encoded_spaces() {
    let raw = parse_principal("kuflow-principal:id=xxx-ssss-yyyy;type=USER;name=Homer Simpson;")
        .expect("principal reference");
    assert_eq!(
        raw,
        JsonFormsPrincipal::new("xxx-ssss-yyyy", PrincipalType::user(), "Homer Simpson")
    );

    let encoded =
        parse_principal("kuflow-principal:id=xxx-ssss-yyyy;type=USER;name=Homer%20Simpson%3B;")
            .expect("principal reference");
    assert_eq!(encoded.name, "Homer Simpson;");
}

#[test]
fn parse_principal_requires_every_field() {
    assert_eq!(
        parse_principal("kuflow-principal:id=xxx-ssss-yyyy;type=USER;"),
        None
    );
    assert_eq!(parse_principal("kuflow-file:uri=x;"), None);
}

#[test]
fn generate_principal_escapes_reserved_characters() {
    assert_eq!(
        generate_principal("id=xxx-ssss-yyyy;", "USER", "Homer"),
        "kuflow-principal:id=id%3Dxxx-ssss-yyyy%3B;type=USER;name=Homer;"
    );
    assert_eq!(
        generate_principal("id=xxx-ssss-yyyy;", "USER", ""),
        "kuflow-principal:id=id%3Dxxx-ssss-yyyy%3B;type=USER;name=;"
    );

    let principal = parse_principal(&generate_principal("a;b", "APPLICATION", "x = y"))
        .expect("principal reference");
    assert_eq!(principal.id, "a;b");
    assert_eq!(principal.principal_type, PrincipalType::application());
    assert_eq!(principal.name, "x = y");
}

#[test]
fn group_round_trip() {
    let encoded = generate_group("xxx-ssss-yyyy", "OTHERS", "Springfield Plant");
    assert_eq!(
        encoded,
        "kuflow-group:id=xxx-ssss-yyyy;type=OTHERS;name=Springfield%20Plant;"
    );

    let group = parse_group(&encoded).expect("group reference");
    assert_eq!(group.id, "xxx-ssss-yyyy");
    assert_eq!(group.group_type, "OTHERS");
    assert_eq!(group.name, "Springfield Plant");
    assert_eq!(parse_group("kuflow-group:id=x;"), None);
}
