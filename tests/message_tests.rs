#![cfg(feature = "standard-schemas")]

mod common;

use common::*;
use hl7v2_structure::messages::{AdtA01, OruR01};
use hl7v2_structure::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn test_elements_see_message_context() {
    let config = StructureConfig::for_version(Hl7Version::V251);
    let mut message = Message::new(create_nested_group(), config);

    let item = message.get_group("ITEM").unwrap();
    let context = item.get_segment("B").unwrap().context().unwrap();
    assert_eq!(context.structure(), "NEST");
    assert_eq!(context.version(), Hl7Version::V251);
    assert!(Arc::ptr_eq(&context, message.context()));
}

#[test]
fn test_context_does_not_outlive_message() {
    let mut message = Message::new(create_test_group(), StructureConfig::default());
    message.get_structure("A").unwrap();

    // Detaching a child keeps only the weak reference.
    let detached = message.remove_repetition_at("A", 0).unwrap();
    assert!(detached.context().is_some());
    drop(message);
    assert!(detached.context().is_none());
}

#[test]
fn test_detached_group_creates_detached_children() {
    let mut group = Group::new(create_test_group());
    assert!(group.get_structure("A").unwrap().context().is_none());
}

#[test]
fn test_structure_at_creates_along_the_path() {
    let mut message = Message::from_registry("ORU_R01", StructureConfig::default()).unwrap();

    let obx = message
        .structure_at("PATIENT_RESULT/ORDER_OBSERVATION(0)/OBSERVATION(0)/OBX")
        .unwrap();
    assert_eq!(obx.name(), "OBX");
    obx.as_segment_mut().unwrap().set_field(3, 0, "718-7^Hemoglobin^LN").unwrap();

    let found = message
        .find("PATIENT_RESULT(0)/ORDER_OBSERVATION(0)/OBSERVATION(0)/OBX")
        .unwrap()
        .unwrap();
    let value = found.as_segment().unwrap().field_value(3, 0).unwrap().unwrap();
    assert_eq!(value.as_str(), "718-7^Hemoglobin^LN");
}

#[test]
fn test_find_never_creates() {
    let message = Message::from_registry("ORU_R01", StructureConfig::default()).unwrap();

    assert!(message.find("PATIENT_RESULT(0)/PATIENT/PID").unwrap().is_none());
    assert_eq!(message.repetitions_used("PATIENT_RESULT").unwrap(), 0);
    assert!(message.find("PATIENT_RESULT(0)/NOPE").is_ok());
}

#[test]
fn test_path_errors() {
    let mut message = Message::from_registry("ORU_R01", StructureConfig::default()).unwrap();

    assert!(matches!(
        message.structure_at("patient_result"),
        Err(Hl7StructureError::InvalidPath { .. })
    ));
    assert!(matches!(
        message.structure_at("PATIENT_RESULT(1)/ORDER_OBSERVATION"),
        Err(Hl7StructureError::RepetitionIndex { .. })
    ));
    assert!(matches!(
        message.structure_at("MSH/PID"),
        Err(Hl7StructureError::TypeMismatch { .. })
    ));
    assert!(message.structure_at("PATIENT_RESULT/NOPE").unwrap_err().is_not_found());
}

#[test]
fn test_adt_a01_typed_accessors() {
    let mut adt = AdtA01::new(StructureConfig::default()).unwrap();

    adt.msh().unwrap().set_field(9, 0, "ADT^A01^ADT_A01").unwrap();
    adt.pid().unwrap().set_field(5, 0, "DOE^JOHN").unwrap();
    adt.add_nk1().unwrap().set_field(2, 0, "DOE^JANE").unwrap();
    adt.add_nk1().unwrap().set_field(2, 0, "DOE^JIM").unwrap();

    {
        let mut procedure = adt.add_procedure().unwrap();
        procedure.pr1().unwrap().set_field(3, 0, "0QS734Z").unwrap();
        procedure.add_rol().unwrap();
    }

    assert_eq!(adt.nk1_reps().unwrap(), 2);
    assert_eq!(adt.procedure_reps().unwrap(), 1);
    assert_eq!(
        adt.nk1(1).unwrap().field_value(2, 0).unwrap().unwrap().as_str(),
        "DOE^JIM"
    );

    let message = adt.into_message();
    assert_eq!(message.context().structure(), "ADT_A01");
    let names: Vec<_> = message.names().collect();
    assert_eq!(
        names,
        vec![
            "MSH", "SFT", "EVN", "PID", "PD1", "ROL", "NK1", "PV1", "ROL2", "OBX", "AL1", "DG1",
            "PROCEDURE", "INSURANCE"
        ]
    );
}

#[test]
fn test_oru_r01_typed_accessors() {
    let mut oru = OruR01::new(StructureConfig::default()).unwrap();
    {
        let mut result = oru.add_patient_result().unwrap();
        result.patient().unwrap().pid().unwrap().set_field(3, 0, "12345").unwrap();

        let mut order = result.add_order_observation().unwrap();
        order.obr().unwrap().set_field(4, 0, "CBC").unwrap();
        for code in ["718-7", "789-8"] {
            let mut observation = order.add_observation().unwrap();
            observation.obx().unwrap().set_field(3, 0, code).unwrap();
        }
    }

    let message = oru.message();
    let order = message
        .find("PATIENT_RESULT(0)/ORDER_OBSERVATION(0)")
        .unwrap()
        .unwrap()
        .as_group()
        .unwrap();
    assert_eq!(order.repetitions_used("OBSERVATION").unwrap(), 2);
    assert_eq!(order.name(), "ORU_R01_ORDER_OBSERVATION");
}

#[test]
fn test_registry_accepts_json_structures() {
    let mut registry = SchemaRegistry::new();
    let json = serde_json::to_string(&*create_nested_group()).unwrap();
    registry.register_json(&json).unwrap();

    let message = registry.new_message("NEST", StructureConfig::default()).unwrap();
    assert_eq!(message.slots().len(), 2);
    assert_eq!(registry.structure_names(), vec!["NEST"]);
}

#[test]
fn test_json_registration_indexes_nested_types() {
    let mut registry = SchemaRegistry::new();
    let json = serde_json::to_string(&*create_nested_group()).unwrap();
    let nest = registry.register_json(&json).unwrap();

    let g = registry.group("G").unwrap();
    for name in ["HDR", "AAA", "BBB"] {
        assert!(registry.segment(name).is_some(), "{name} should be registered");
    }
    match &nest.slot_by_name("ITEM").unwrap().element {
        ElementSchema::Group(item) => assert!(Arc::ptr_eq(item, &g)),
        other => panic!("ITEM should be a group slot, got {other:?}"),
    }

    let again = registry.register_json(&json).unwrap();
    assert!(Arc::ptr_eq(&registry.group("NEST").unwrap(), &again));
    assert!(Arc::ptr_eq(&nest, &again));
}

#[test]
fn test_json_registration_rejects_conflicting_types() {
    let mut registry = SchemaRegistry::new();
    let json = serde_json::to_string(&*create_nested_group()).unwrap();
    registry.register_json(&json).unwrap();

    let other = GroupSchemaBuilder::new("OTHER")
        .declare(
            Some("HDR"),
            ElementSchema::Segment(
                SegmentSchemaBuilder::new("HDR")
                    .field(FieldDescriptor::new("NM"))
                    .build()
                    .unwrap(),
            ),
            true,
            false,
        )
        .build()
        .unwrap();
    let err = registry
        .register_json(&serde_json::to_string(&*other).unwrap())
        .unwrap_err();
    assert!(matches!(err, Hl7StructureError::SchemaDeclaration { .. }));
    assert!(registry.structure("OTHER").is_none());
}

#[test]
fn test_standard_registry_is_shared() {
    let first = SchemaRegistry::standard().unwrap();
    let second = SchemaRegistry::standard().unwrap();
    assert!(std::ptr::eq(first, second));

    let adt = first.structure("ADT_A01").unwrap();
    assert_eq!(adt.to_string().matches("ROL").count(), 2);
}
