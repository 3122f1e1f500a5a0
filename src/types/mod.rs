//! Type identity and column description
//!
//! This module contains the data half of the dispatch layer:
//! - FieldTypeCode: the stable external type enumeration
//! - CreateAttributes and friends: caller-supplied attribute bundles
//! - Field and FieldLayout: the opaque construction results
//! - metadata: per-type packed descriptor encode/decode rules

pub mod attributes;
pub mod charset;
pub mod field;
pub mod field_type;
pub mod metadata;

pub use attributes::{
    CreateAttributes, DefaultPolicy, NullBitLocation, StoreLocation, TypeLib, ValueDescriptor,
};
pub use charset::CharsetInfo;
pub use field::{Field, FieldLayout, TableShare, TemporalFormat};
pub use field_type::FieldTypeCode;
