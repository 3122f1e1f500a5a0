//! The type-handler contract
//!
//! One stateless singleton implements [`TypeHandler`] per concrete logical
//! type. A handler answers identity queries and exposes the three field
//! construction protocols:
//!
//! - [`TypeHandler::make_table_field`] materializes a column of this type
//!   for a newly created or opened table.
//! - [`TypeHandler::make_conversion_table_field`] materializes a scratch
//!   column able to receive replicated data whose writer-side definition may
//!   differ from the local schema. This is the only protocol with a
//!   recoverable failure: a superseded fixed-point encoding cannot be
//!   bridged and yields `None`.
//! - [`TypeHandler::make_distinct_aggregator_field`] materializes the
//!   deduplication column of a DISTINCT/COUNT(DISTINCT ...) bucket.
//!
//! All protocols are pure functions of the handler identity and the
//! caller-supplied attributes; the only state they touch is the caller's
//! arena. Handlers are immutable after process initialization, so any number
//! of threads may call any protocol concurrently.

use crate::common::arena::{FieldArena, FieldHandle};
use crate::common::constants::TMP_FIELD_NAME;
use crate::types::attributes::{CreateAttributes, StoreLocation, ValueDescriptor};
use crate::types::charset;
use crate::types::field::{Field, FieldLayout, TableShare};
use crate::types::field_type::FieldTypeCode;
use std::fmt;

/// Capability set shared by every concrete logical type
pub trait TypeHandler: fmt::Debug + Send + Sync {
    /// External type code of columns governed by this handler; inverse of
    /// the registry lookup
    fn field_type_code(&self) -> FieldTypeCode;

    /// Storage-internal code. Differs from [`Self::field_type_code`] only
    /// for handlers of encoding generations that share an external code.
    fn real_type_code(&self) -> FieldTypeCode {
        self.field_type_code()
    }

    /// Construct the physical field for a table column.
    ///
    /// Applies this type's own defaults for attributes the caller left
    /// unspecified. Attributes inconsistent with the type's invariants are a
    /// caller bug, checked by debug assertions; this protocol has no failure
    /// outcome.
    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle;

    /// Construct a field binary-compatible with replicated data encoded
    /// under `metadata`, for a local table whose own column is `target`.
    ///
    /// `metadata` is decoded by this handler's own packing rule; a word
    /// produced by a different type's writer is meaningless here. Returns
    /// `None` only for the unrepresentable legacy-decimal case, after
    /// logging a diagnostic that names `share` and the target column.
    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        share: &TableShare,
        metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle>;

    /// Construct the field used to deduplicate values inside a DISTINCT
    /// aggregation bucket.
    ///
    /// The default materializes as double-precision floating point;
    /// integer-category handlers override to a wide integer and
    /// decimal-category handlers to a precision-preserving fixed-point
    /// field.
    fn make_distinct_aggregator_field(
        &self,
        arena: &mut FieldArena,
        value: &ValueDescriptor<'_>,
    ) -> FieldHandle {
        arena.alloc(Field::scratch(
            value.name,
            value.maybe_null,
            &charset::BINARY,
            FieldLayout::Double {
                length: value.max_length,
                decimals: value.decimals,
                unsigned: value.unsigned,
                zerofill: false,
            },
        ))
    }
}

/// Allocate a nullable scratch field for a conversion target.
///
/// Conversion fields live outside any record buffer, carry no name, and are
/// always nullable so that any writer-side value can land in them.
pub(crate) fn alloc_conversion_field(
    arena: &mut FieldArena,
    charset: &'static charset::CharsetInfo,
    layout: FieldLayout,
) -> FieldHandle {
    arena.alloc(Field::scratch(TMP_FIELD_NAME, true, charset, layout))
}
