use hl7v2_structure::*;
use std::sync::Arc;

/// Install a test subscriber once; honours `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn create_test_segment(name: &str) -> Arc<SegmentSchema> {
    SegmentSchemaBuilder::new(name)
        .field(FieldDescriptor::new("SI").with_max_length(4))
        .field(
            FieldDescriptor::new("ST")
                .with_required(true)
                .with_max_length(10),
        )
        .field(FieldDescriptor::new("CE").with_repeating(true))
        .build()
        .unwrap()
}

/// Group `G` with `A` (required, singular) and `B` (optional, repeating).
#[allow(dead_code)]
pub fn create_test_group() -> Arc<GroupSchema> {
    GroupSchemaBuilder::new("G")
        .declare(
            Some("A"),
            ElementSchema::Segment(create_test_segment("AAA")),
            true,
            false,
        )
        .declare(
            Some("B"),
            ElementSchema::Segment(create_test_segment("BBB")),
            false,
            true,
        )
        .build()
        .unwrap()
}

/// `NEST` with a required `HDR` segment and a repeating `ITEM` group of `G`.
#[allow(dead_code)]
pub fn create_nested_group() -> Arc<GroupSchema> {
    GroupSchemaBuilder::new("NEST")
        .declare(
            Some("HDR"),
            ElementSchema::Segment(create_test_segment("HDR")),
            true,
            false,
        )
        .declare(
            Some("ITEM"),
            ElementSchema::Group(create_test_group()),
            false,
            true,
        )
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn ids(instances: &[MessageElement]) -> Vec<ElementId> {
    instances.iter().map(MessageElement::id).collect()
}
