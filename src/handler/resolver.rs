//! Result-type and length-based handler resolution
//!
//! Expression evaluation rarely starts from a concrete type code; it has a
//! coarse result category (an aggregation over numbers, a hybrid
//! comparison, a user-variable assignment) or a size constraint. The
//! functions here pick the representative handler that backs the
//! materialized value, and canonicalize version-historical codes to their
//! current handler.

use crate::common::constants::{
    CONVERT_IF_BIGGER_TO_BLOB, MAX_MEDIUM_BLOB_OCTETS, MAX_VARCHAR_OCTETS,
};
use crate::handler::registry::registry;
use crate::handler::type_handler::TypeHandler;
use crate::handler::{numeric, string, temporal};
use crate::types::charset::CharsetInfo;
use crate::types::field_type::FieldTypeCode;

/// Coarse-grained category of an expression result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCategory {
    /// Floating-point numeric result
    Real,
    /// Integer result
    Integer,
    /// Fixed-point decimal result
    Decimal,
    /// Character/binary string result
    String,
    /// Temporal result; must be resolved to a concrete temporal type before
    /// materialization
    Temporal,
    /// Composite row result; never directly materialized
    Row,
}

/// Representative handler backing a materialized expression result.
///
/// Temporal and row categories must have been resolved earlier in
/// expression evaluation; reaching this path with one is a caller bug.
pub fn handler_for_result_category(category: ResultCategory) -> &'static dyn TypeHandler {
    match category {
        ResultCategory::Real => &numeric::DOUBLE,
        ResultCategory::Integer => &numeric::BIG_INT,
        ResultCategory::Decimal => &numeric::DECIMAL,
        ResultCategory::String => &string::LONG_BLOB,
        ResultCategory::Temporal | ResultCategory::Row => {
            debug_assert!(
                false,
                "{:?} result reached materialization unresolved",
                category
            );
            &string::CHAR
        }
    }
}

/// Handler governing an external field-type code, canonicalizing
/// version-historical aliases to their current representative.
///
/// Legacy temporal codes resolve to their packed-encoding successors.
/// Enumerations presented as a generic field-type code resolve to the
/// variable-length string handler; they are only distinguished at the
/// real-type level. `NewDate` belongs to the real-type domain and is a
/// contract violation here.
pub fn handler_for_field_type(code: FieldTypeCode) -> &'static dyn TypeHandler {
    match code {
        FieldTypeCode::LegacyDecimal => &numeric::LEGACY_DECIMAL,
        FieldTypeCode::Decimal => &numeric::DECIMAL,
        FieldTypeCode::TinyInt => &numeric::TINY_INT,
        FieldTypeCode::SmallInt => &numeric::SMALL_INT,
        FieldTypeCode::Int => &numeric::INT,
        FieldTypeCode::BigInt => &numeric::BIG_INT,
        FieldTypeCode::MediumInt => &numeric::MEDIUM_INT,
        FieldTypeCode::Year => &temporal::YEAR,
        FieldTypeCode::Bit => &numeric::BIT,
        FieldTypeCode::Float => &numeric::FLOAT,
        FieldTypeCode::Double => &numeric::DOUBLE,
        FieldTypeCode::Null => &string::NULL_TYPE,
        FieldTypeCode::Varchar => &string::VARCHAR,
        FieldTypeCode::TinyBlob => &string::TINY_BLOB,
        FieldTypeCode::MediumBlob => &string::MEDIUM_BLOB,
        FieldTypeCode::LongBlob => &string::LONG_BLOB,
        FieldTypeCode::Blob => &string::BLOB,
        FieldTypeCode::VarString => &string::VARCHAR,
        FieldTypeCode::Char => &string::CHAR,
        FieldTypeCode::Enum => &string::VARCHAR,
        FieldTypeCode::Set => &string::VARCHAR,
        FieldTypeCode::Timestamp | FieldTypeCode::Timestamp2 => &temporal::TIMESTAMP2,
        FieldTypeCode::Date => &temporal::NEW_DATE,
        FieldTypeCode::Time | FieldTypeCode::Time2 => &temporal::TIME2,
        FieldTypeCode::DateTime | FieldTypeCode::DateTime2 => &temporal::DATETIME2,
        FieldTypeCode::NewDate => {
            // A real-type code has no business in field-type context; keep
            // the date handler as the survivable answer.
            debug_assert!(false, "NEWDATE presented as a field-type code");
            &temporal::NEW_DATE
        }
    }
}

/// Handler governing a storage-internal real-type code.
pub fn handler_for_real_type(code: FieldTypeCode) -> &'static dyn TypeHandler {
    // VAR_STRING is a field-type alias, but callers historically present it
    // in real-type context too; it denotes the fixed-length string layout
    // there.
    if code == FieldTypeCode::VarString {
        return &string::CHAR;
    }
    registry().handler(code.code())
}

/// String-result handler for a value of at most `max_octet_length` bytes,
/// picking among the variable-length string and the large-object tiers
/// purely by length.
pub fn string_type_handler(max_octet_length: u32) -> &'static dyn TypeHandler {
    if max_octet_length > MAX_MEDIUM_BLOB_OCTETS {
        &string::LONG_BLOB
    } else if max_octet_length > MAX_VARCHAR_OCTETS {
        &string::MEDIUM_BLOB
    } else {
        &string::VARCHAR
    }
}

/// String-result handler adjusted for the charset's worst-case character
/// width, used when choosing a spill type for SET/aggregate-variable
/// contexts rather than a plain column type.
///
/// Short values stay VARCHAR even if their octet length looks large in a
/// wide charset; past that floor the default large-object tier applies
/// unless the value forces a wider one.
pub fn string_type_handler_for_charset(
    max_octet_length: u32,
    cs: &CharsetInfo,
) -> &'static dyn TypeHandler {
    if max_octet_length / cs.mbmaxlen as u32 <= CONVERT_IF_BIGGER_TO_BLOB {
        return &string::VARCHAR;
    }
    if max_octet_length > MAX_MEDIUM_BLOB_OCTETS {
        &string::LONG_BLOB
    } else if max_octet_length > MAX_VARCHAR_OCTETS {
        &string::MEDIUM_BLOB
    } else {
        &string::BLOB
    }
}

/// Current representative handler of a hybrid expression (MIN/MAX,
/// user-variable assignment), re-pointable as the evaluator narrows the
/// result type. Starts at double precision, the widest numeric default.
#[derive(Debug)]
pub struct HybridTypeResolver {
    handler: &'static dyn TypeHandler,
}

impl HybridTypeResolver {
    pub fn new() -> Self {
        Self {
            handler: &numeric::DOUBLE,
        }
    }

    /// The currently selected handler
    pub fn handler(&self) -> &'static dyn TypeHandler {
        self.handler
    }

    pub fn set_handler(&mut self, handler: &'static dyn TypeHandler) -> &'static dyn TypeHandler {
        self.handler = handler;
        self.handler
    }

    pub fn set_by_result_category(&mut self, category: ResultCategory) -> &'static dyn TypeHandler {
        self.handler = handler_for_result_category(category);
        self.handler
    }

    pub fn set_by_field_type(&mut self, code: FieldTypeCode) -> &'static dyn TypeHandler {
        self.handler = handler_for_field_type(code);
        self.handler
    }

    pub fn set_by_real_type(&mut self, code: FieldTypeCode) -> &'static dyn TypeHandler {
        self.handler = handler_for_real_type(code);
        self.handler
    }
}

impl Default for HybridTypeResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::charset;

    #[test]
    fn test_string_thresholds() {
        assert_eq!(
            string_type_handler(0).field_type_code(),
            FieldTypeCode::Varchar
        );
        assert_eq!(
            string_type_handler(65_535).field_type_code(),
            FieldTypeCode::Varchar
        );
        assert_eq!(
            string_type_handler(65_536).field_type_code(),
            FieldTypeCode::MediumBlob
        );
        assert_eq!(
            string_type_handler(16_777_215).field_type_code(),
            FieldTypeCode::MediumBlob
        );
        assert_eq!(
            string_type_handler(16_777_216).field_type_code(),
            FieldTypeCode::LongBlob
        );
        assert_eq!(
            string_type_handler(u32::MAX).field_type_code(),
            FieldTypeCode::LongBlob
        );
    }

    #[test]
    fn test_charset_adjusted_thresholds() {
        // 2048 octets of utf8mb4 are only 512 characters: stays VARCHAR.
        assert_eq!(
            string_type_handler_for_charset(2048, &charset::UTF8MB4).field_type_code(),
            FieldTypeCode::Varchar
        );
        // The same octet length in a single-byte charset spills to the
        // default large-object tier.
        assert_eq!(
            string_type_handler_for_charset(2048, &charset::LATIN1).field_type_code(),
            FieldTypeCode::Blob
        );
        assert_eq!(
            string_type_handler_for_charset(70_000, &charset::LATIN1).field_type_code(),
            FieldTypeCode::MediumBlob
        );
        assert_eq!(
            string_type_handler_for_charset(20_000_000, &charset::LATIN1).field_type_code(),
            FieldTypeCode::LongBlob
        );
    }

    #[test]
    fn test_result_category_mapping() {
        assert_eq!(
            handler_for_result_category(ResultCategory::Real).field_type_code(),
            FieldTypeCode::Double
        );
        assert_eq!(
            handler_for_result_category(ResultCategory::Integer).field_type_code(),
            FieldTypeCode::BigInt
        );
        assert_eq!(
            handler_for_result_category(ResultCategory::Decimal).field_type_code(),
            FieldTypeCode::Decimal
        );
        assert_eq!(
            handler_for_result_category(ResultCategory::String).field_type_code(),
            FieldTypeCode::LongBlob
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unresolved")]
    fn test_temporal_category_is_a_contract_violation() {
        handler_for_result_category(ResultCategory::Temporal);
    }

    #[test]
    fn test_field_type_canonicalization() {
        // Legacy temporal codes resolve to their packed successors.
        assert_eq!(
            handler_for_field_type(FieldTypeCode::Timestamp).real_type_code(),
            FieldTypeCode::Timestamp2
        );
        assert_eq!(
            handler_for_field_type(FieldTypeCode::Date).real_type_code(),
            FieldTypeCode::NewDate
        );
        assert_eq!(
            handler_for_field_type(FieldTypeCode::Time).real_type_code(),
            FieldTypeCode::Time2
        );
        assert_eq!(
            handler_for_field_type(FieldTypeCode::DateTime).real_type_code(),
            FieldTypeCode::DateTime2
        );
        // Enumerations are only distinguished at the real-type level.
        assert_eq!(
            handler_for_field_type(FieldTypeCode::Enum).field_type_code(),
            FieldTypeCode::Varchar
        );
        assert_eq!(
            handler_for_field_type(FieldTypeCode::Set).field_type_code(),
            FieldTypeCode::Varchar
        );
        assert_eq!(
            handler_for_field_type(FieldTypeCode::VarString).field_type_code(),
            FieldTypeCode::Varchar
        );
    }

    #[test]
    fn test_real_type_resolution() {
        assert_eq!(
            handler_for_real_type(FieldTypeCode::NewDate).real_type_code(),
            FieldTypeCode::NewDate
        );
        assert_eq!(
            handler_for_real_type(FieldTypeCode::Enum).real_type_code(),
            FieldTypeCode::Enum
        );
        assert_eq!(
            handler_for_real_type(FieldTypeCode::VarString).field_type_code(),
            FieldTypeCode::Char
        );
        assert_eq!(
            handler_for_real_type(FieldTypeCode::Time).real_type_code(),
            FieldTypeCode::Time
        );
    }

    #[test]
    fn test_hybrid_resolver_defaults_to_double() {
        let mut hybrid = HybridTypeResolver::new();
        assert_eq!(hybrid.handler().field_type_code(), FieldTypeCode::Double);

        hybrid.set_by_result_category(ResultCategory::Integer);
        assert_eq!(hybrid.handler().field_type_code(), FieldTypeCode::BigInt);

        hybrid.set_by_field_type(FieldTypeCode::Varchar);
        assert_eq!(hybrid.handler().field_type_code(), FieldTypeCode::Varchar);
    }
}
