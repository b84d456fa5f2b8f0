//! Field-aware codec tests
//!
//! These tests decode filter text against an in-memory schema and check
//! field resolution, operator restrictions and canonical encoding.

mod encode;

use filter_codec::{FieldSpec, OperatorSet, SchemaFields};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Customer schema shared by the codec tests.
pub fn customer_schema() -> SchemaFields {
    SchemaFields::new()
        .with_field("address.city", FieldSpec::new("string"))
        .with_field("age", FieldSpec::new("int"))
        .with_field("name", FieldSpec::new("string"))
        .with_field("created_at", FieldSpec::new("date-time"))
        .with_field(
            "status",
            FieldSpec::new("enum").with_operators(OperatorSet::equality() | OperatorSet::membership()),
        )
}
