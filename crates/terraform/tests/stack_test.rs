//! Stack synthesis with Akamai resources

use cloud_bindings_terraform::akamai::*;
use cloud_bindings_terraform::*;
use serde_json::json;

fn clientlist(id: &str) -> ClientlistList {
    let config = ClientlistListConfig::builder()
        .contract_id("C-1")
        .group_id(42)
        .name(id)
        .r#type("IP")
        .build()
        .unwrap();
    ClientlistList::new(id, config)
}

fn property() -> GtmProperty {
    let config = GtmPropertyConfig::builder()
        .domain("example.akadns.net")
        .handout_limit(8)
        .handout_mode("normal")
        .name("www")
        .score_aggregation_type("worst")
        .r#type("failover")
        .meta(
            MetaArguments::default()
                .depends_on("akamai_clientlist_list.blocked")
                .with_lifecycle(Lifecycle {
                    create_before_destroy: Some(true),
                    ..Default::default()
                }),
        )
        .build()
        .unwrap();
    GtmProperty::new("www", config)
}

#[test]
fn test_synth_groups_resources_by_type() {
    let mut stack = TerraformStack::new();
    stack.add(clientlist("blocked")).unwrap();
    stack.add(clientlist("allowed")).unwrap();
    stack.add(property()).unwrap();

    let document = stack.synth().unwrap();
    assert_eq!(
        document["resource"]["akamai_clientlist_list"]["allowed"],
        json!({"contract_id": "C-1", "group_id": 42, "name": "allowed", "type": "IP"})
    );
    assert_eq!(
        document["resource"]["akamai_gtm_property"]["www"]["depends_on"],
        json!(["akamai_clientlist_list.blocked"])
    );
    assert_eq!(
        document["resource"]["akamai_gtm_property"]["www"]["lifecycle"],
        json!({"create_before_destroy": true})
    );
    assert!(document.get("import").is_none());
    assert_eq!(
        document["terraform"]["required_providers"]["akamai"],
        json!({"source": PROVIDER_SOURCE})
    );
}

#[test]
fn test_duplicate_construct_id_rejected() {
    let mut stack = TerraformStack::new();
    stack.add(clientlist("blocked")).unwrap();
    let err = stack.add(clientlist("blocked")).unwrap_err();

    assert!(matches!(err, TerraformError::DuplicateConstruct(ref id) if id == "blocked"));
    assert_eq!(stack.resources().count(), 1);
}

#[test]
fn test_import_blocks() {
    let mut stack = TerraformStack::new();
    ClientlistList::generate_config_for_import(
        &mut stack,
        "legacy",
        "123_LEGACY",
        Some("akamai.edge"),
    );
    GtmProperty::generate_config_for_import(&mut stack, "www", "example.akadns.net:www", None);

    let document = stack.synth().unwrap();
    assert_eq!(
        document["import"],
        json!([
            {"to": "akamai_clientlist_list.legacy", "id": "123_LEGACY", "provider": "akamai.edge"},
            {"to": "akamai_gtm_property.www", "id": "example.akadns.net:www"}
        ])
    );
}

#[test]
fn test_reference_wires_computed_attribute() {
    let list = clientlist("blocked");
    let mut other = clientlist("mirror");
    other.set_notes(format!("mirrors {}", list.list_id()));

    assert_eq!(
        other.notes_input(),
        Some("mirrors ${akamai_clientlist_list.blocked.list_id}")
    );
    assert_eq!(list.address(), "akamai_clientlist_list.blocked");
}

#[test]
fn test_write_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("main.tf.json");

    let mut stack = TerraformStack::new();
    stack.add(property()).unwrap();
    stack.write_json(&path).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, stack.synth().unwrap());
}
