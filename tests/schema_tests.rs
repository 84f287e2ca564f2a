mod common;

use common::*;
use hl7v2_structure::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_group_schema_json_goes_through_builder() {
    let schema = create_test_group();
    let json = serde_json::to_string(&*schema).unwrap();

    let parsed: GroupSchema = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, *schema);
    assert_eq!(parsed.resolve("B"), Some(SlotId(1)));
}

fn single_slot_json(slot_position: usize, field_position: usize) -> serde_json::Value {
    json!({
        "name": "ZGR",
        "slots": [
            {
                "name": "ZA1",
                "element": {
                    "kind": "segment",
                    "schema": {
                        "name": "ZA1",
                        "fields": [
                            {
                                "required": true,
                                "repeating": false,
                                "datatype": "ST",
                                "position": field_position
                            }
                        ]
                    }
                },
                "required": true,
                "repeating": false,
                "position": slot_position
            }
        ]
    })
}

#[test]
fn test_matching_positions_load() {
    let schema: GroupSchema = serde_json::from_value(single_slot_json(0, 1)).unwrap();
    assert_eq!(schema.slots()[0].position, 0);

    let ElementSchema::Segment(segment) = &schema.slots()[0].element else {
        panic!("ZA1 should be a segment slot");
    };
    assert_eq!(segment.field(1).unwrap().position, 1);
    assert_eq!(segment.field(1).unwrap().max_length, 0);
}

#[test]
fn test_misplaced_slot_position_is_rejected() {
    let err = serde_json::from_value::<GroupSchema>(single_slot_json(7, 1)).unwrap_err();
    assert!(err.to_string().contains("position 7"));

    assert!(serde_json::from_value::<GroupSchema>(single_slot_json(0, 7)).is_err());
}

#[test]
fn test_invalid_json_schema_is_rejected() {
    let duplicate = json!({
        "name": "ZGR",
        "slots": [
            {
                "name": "ZA1",
                "element": { "kind": "segment", "schema": { "name": "ZA1", "fields": [] } },
                "required": false,
                "repeating": false
            },
            {
                "name": "ZA1",
                "element": { "kind": "segment", "schema": { "name": "ZA1", "fields": [] } },
                "required": false,
                "repeating": true
            }
        ]
    });
    assert!(serde_json::from_value::<GroupSchema>(duplicate).is_err());

    let bad_segment = json!({ "name": "toolong", "fields": [] });
    assert!(serde_json::from_value::<SegmentSchema>(bad_segment).is_err());
}

#[test]
fn test_declaration_policies() {
    init_tracing();
    let segment = create_test_segment("ZA1");

    let strict = GroupSchemaBuilder::new("ZGR")
        .declare(Some("ZA1"), ElementSchema::Segment(segment.clone()), false, false)
        .declare(Some("lower"), ElementSchema::Segment(segment.clone()), false, false)
        .build();
    assert!(matches!(
        strict,
        Err(Hl7StructureError::SchemaDeclaration { .. })
    ));

    let lenient = GroupSchemaBuilder::new("ZGR")
        .with_policy(DeclarationPolicy::Lenient)
        .declare(Some("ZA1"), ElementSchema::Segment(segment.clone()), false, false)
        .declare(Some("lower"), ElementSchema::Segment(segment), false, false)
        .build()
        .unwrap();
    assert_eq!(lenient.names().collect::<Vec<_>>(), vec!["ZA1"]);
}

#[test]
fn test_group_needs_a_slot() {
    let result = GroupSchemaBuilder::new("ZEMPTY").build();
    match result {
        Err(Hl7StructureError::SchemaDeclaration { schema, .. }) => assert_eq!(schema, "ZEMPTY"),
        other => panic!("expected declaration error, got {other:?}"),
    }
}

#[test]
fn test_disambiguated_names_across_three_slots() {
    let rol = create_test_segment("ROL");
    let schema = GroupSchemaBuilder::new("ZGR")
        .segment(rol.clone(), false, true)
        .segment(rol.clone(), false, true)
        .segment(rol, false, true)
        .build()
        .unwrap();

    assert_eq!(schema.names().collect::<Vec<_>>(), vec!["ROL", "ROL2", "ROL3"]);
    assert!(schema.slots().iter().all(|slot| slot.element_type() == "ROL"));
}

#[test]
fn test_explicit_name_collision_with_generated_name() {
    let rol = create_test_segment("ROL");
    let result = GroupSchemaBuilder::new("ZGR")
        .segment(rol.clone(), false, true)
        .segment(rol.clone(), false, true)
        .declare(Some("ROL2"), ElementSchema::Segment(rol), false, false)
        .build();
    assert!(result.is_err());
}

#[test]
fn test_segment_schema_display() {
    let segment = create_test_segment("ZA1");
    assert_eq!(segment.to_string(), "Segment(ZA1) [3 fields]");
    assert_eq!(segment.field(2).unwrap().to_string(), "2: ST");
}

#[test]
fn test_config_from_json() {
    let config = StructureConfig::from_json(r#"{ "version": "2.3.1", "declaration_policy": "lenient" }"#)
        .unwrap();
    assert_eq!(config.version, Hl7Version::V231);
    assert_eq!(config.declaration_policy, DeclarationPolicy::Lenient);
    assert!(config.check_field_lengths);

    assert!(StructureConfig::from_json(r#"{ "version": "9.9" }"#).is_err());
}
