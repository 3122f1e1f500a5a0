//! quartz - logical-to-physical type dispatch for a row-store engine
//!
//! Given an abstract column type, quartz supplies the single authoritative
//! handler that identifies the type, materializes the field representation
//! for a table column, builds a compatible field for replaying replicated
//! rows whose writer-side schema may differ, and resolves which physical
//! type backs an expression result.
//!
pub mod common;
pub mod handler;
pub mod types;

// Re-export common plumbing for convenience
pub use common::{FieldArena, FieldHandle, QuartzError, QuartzResult};

// Re-export the type identity and attribute surface
pub use types::{
    CharsetInfo, CreateAttributes, DefaultPolicy, Field, FieldLayout, FieldTypeCode,
    NullBitLocation, StoreLocation, TableShare, TemporalFormat, TypeLib, ValueDescriptor,
};

// Re-export the dispatch surface
pub use handler::{
    handler_for_field_type, handler_for_real_type, handler_for_result_category, registry,
    string_type_handler, string_type_handler_for_charset, HybridTypeResolver, ResultCategory,
    TypeHandler, TypeHandlerRegistry,
};
