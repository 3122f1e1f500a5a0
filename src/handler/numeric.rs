//! Numeric type handlers: fixed-width integers, floating point, fixed-point
//! decimals, and bit fields.

use crate::common::arena::{FieldArena, FieldHandle};
use crate::common::constants::{DECIMAL_MAX_PRECISION, DECIMAL_MAX_SCALE};
use crate::handler::type_handler::{alloc_conversion_field, TypeHandler};
use crate::types::attributes::{CreateAttributes, StoreLocation, ValueDescriptor};
use crate::types::charset;
use crate::types::field::{Field, FieldLayout, TableShare};
use crate::types::field_type::FieldTypeCode;
use crate::types::metadata;

pub static TINY_INT: TinyIntHandler = TinyIntHandler;
pub static SMALL_INT: SmallIntHandler = SmallIntHandler;
pub static MEDIUM_INT: MediumIntHandler = MediumIntHandler;
pub static INT: IntHandler = IntHandler;
pub static BIG_INT: BigIntHandler = BigIntHandler;
pub static FLOAT: FloatHandler = FloatHandler;
pub static DOUBLE: DoubleHandler = DoubleHandler;
pub static LEGACY_DECIMAL: LegacyDecimalHandler = LegacyDecimalHandler;
pub static DECIMAL: DecimalHandler = DecimalHandler;
pub static BIT: BitHandler = BitHandler;

/// Wide-integer deduplication field shared by every integer-category
/// handler. Smaller buckets would fit the narrow types, but a single wide
/// layout keeps the aggregation path uniform.
pub(crate) fn make_bigint_distinct_field(
    arena: &mut FieldArena,
    value: &ValueDescriptor<'_>,
) -> FieldHandle {
    arena.alloc(Field::scratch(
        value.name,
        value.maybe_null,
        &charset::BINARY,
        FieldLayout::BigInt {
            length: value.max_length,
            unsigned: value.unsigned,
            zerofill: false,
        },
    ))
}

/// Precision-preserving deduplication field shared by the decimal-category
/// handlers.
pub(crate) fn make_decimal_distinct_field(
    arena: &mut FieldArena,
    value: &ValueDescriptor<'_>,
) -> FieldHandle {
    debug_assert!(
        value.decimals <= DECIMAL_MAX_SCALE,
        "distinct-aggregate scale {} exceeds the maximum of {}",
        value.decimals,
        DECIMAL_MAX_SCALE
    );
    let scale = value.decimals.min(DECIMAL_MAX_SCALE);
    arena.alloc(Field::scratch(
        value.name,
        value.maybe_null,
        &charset::BINARY,
        FieldLayout::Decimal {
            precision: metadata::decimal_length_to_precision(
                value.max_length,
                scale,
                value.unsigned,
            ),
            scale,
            unsigned: value.unsigned,
            zerofill: false,
        },
    ))
}

/// 8-bit integer
#[derive(Debug)]
pub struct TinyIntHandler;

impl TypeHandler for TinyIntHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::TinyInt
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::TinyInt {
                length: attrs.length,
                unsigned: attrs.unsigned,
                zerofill: attrs.zerofill,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        // The descriptor does not say whether the writer's integer was
        // signed; assume the same sign as the local column, which holds
        // whenever no conversion is taking place and therefore also when
        // one is.
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::TinyInt {
                length: 4,
                unsigned: target.is_unsigned(),
                zerofill: false,
            },
        ))
    }

    fn make_distinct_aggregator_field(
        &self,
        arena: &mut FieldArena,
        value: &ValueDescriptor<'_>,
    ) -> FieldHandle {
        make_bigint_distinct_field(arena, value)
    }
}

/// 16-bit integer
#[derive(Debug)]
pub struct SmallIntHandler;

impl TypeHandler for SmallIntHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::SmallInt
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::SmallInt {
                length: attrs.length,
                unsigned: attrs.unsigned,
                zerofill: attrs.zerofill,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::SmallInt {
                length: 6,
                unsigned: target.is_unsigned(),
                zerofill: false,
            },
        ))
    }

    fn make_distinct_aggregator_field(
        &self,
        arena: &mut FieldArena,
        value: &ValueDescriptor<'_>,
    ) -> FieldHandle {
        make_bigint_distinct_field(arena, value)
    }
}

/// 24-bit integer
#[derive(Debug)]
pub struct MediumIntHandler;

impl TypeHandler for MediumIntHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::MediumInt
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::MediumInt {
                length: attrs.length,
                unsigned: attrs.unsigned,
                zerofill: attrs.zerofill,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::MediumInt {
                length: 9,
                unsigned: target.is_unsigned(),
                zerofill: false,
            },
        ))
    }

    fn make_distinct_aggregator_field(
        &self,
        arena: &mut FieldArena,
        value: &ValueDescriptor<'_>,
    ) -> FieldHandle {
        make_bigint_distinct_field(arena, value)
    }
}

/// 32-bit integer
#[derive(Debug)]
pub struct IntHandler;

impl TypeHandler for IntHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Int
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::Int {
                length: attrs.length,
                unsigned: attrs.unsigned,
                zerofill: attrs.zerofill,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::Int {
                length: 11,
                unsigned: target.is_unsigned(),
                zerofill: false,
            },
        ))
    }

    fn make_distinct_aggregator_field(
        &self,
        arena: &mut FieldArena,
        value: &ValueDescriptor<'_>,
    ) -> FieldHandle {
        make_bigint_distinct_field(arena, value)
    }
}

/// 64-bit integer
#[derive(Debug)]
pub struct BigIntHandler;

impl TypeHandler for BigIntHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::BigInt
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::BigInt {
                length: attrs.length,
                unsigned: attrs.unsigned,
                zerofill: attrs.zerofill,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::BigInt {
                length: 20,
                unsigned: target.is_unsigned(),
                zerofill: false,
            },
        ))
    }

    fn make_distinct_aggregator_field(
        &self,
        arena: &mut FieldArena,
        value: &ValueDescriptor<'_>,
    ) -> FieldHandle {
        make_bigint_distinct_field(arena, value)
    }
}

/// Single-precision float
#[derive(Debug)]
pub struct FloatHandler;

impl TypeHandler for FloatHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Float
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::Float {
                length: attrs.length,
                decimals: attrs.decimals,
                unsigned: attrs.unsigned,
                zerofill: attrs.zerofill,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        _target: &Field,
    ) -> Option<FieldHandle> {
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::Float {
                length: 12,
                decimals: 0,
                unsigned: false,
                zerofill: false,
            },
        ))
    }

    /// Preserves its own precision instead of widening to double
    fn make_distinct_aggregator_field(
        &self,
        arena: &mut FieldArena,
        value: &ValueDescriptor<'_>,
    ) -> FieldHandle {
        arena.alloc(Field::scratch(
            value.name,
            value.maybe_null,
            &charset::BINARY,
            FieldLayout::Float {
                length: value.max_length,
                decimals: value.decimals,
                unsigned: value.unsigned,
                zerofill: false,
            },
        ))
    }
}

/// Double-precision float
#[derive(Debug)]
pub struct DoubleHandler;

impl TypeHandler for DoubleHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Double
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::Double {
                length: attrs.length,
                decimals: attrs.decimals,
                unsigned: attrs.unsigned,
                zerofill: attrs.zerofill,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        _target: &Field,
    ) -> Option<FieldHandle> {
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::Double {
                length: 22,
                decimals: 0,
                unsigned: false,
                zerofill: false,
            },
        ))
    }
}

/// Current fixed-point decimal encoding
#[derive(Debug)]
pub struct DecimalHandler;

impl TypeHandler for DecimalHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Decimal
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        debug_assert!(
            attrs.decimals <= DECIMAL_MAX_SCALE,
            "decimal scale {} exceeds the maximum of {}",
            attrs.decimals,
            DECIMAL_MAX_SCALE
        );
        let scale = attrs.decimals.min(DECIMAL_MAX_SCALE);
        let precision =
            metadata::decimal_length_to_precision(attrs.length, scale, attrs.unsigned);
        debug_assert!(precision <= DECIMAL_MAX_PRECISION);
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::Decimal {
                precision: precision.min(DECIMAL_MAX_PRECISION),
                scale,
                unsigned: attrs.unsigned,
                zerofill: attrs.zerofill,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        metadata: u32,
        _target: &Field,
    ) -> Option<FieldHandle> {
        let precision = metadata::decimal_precision(metadata);
        let scale = metadata::decimal_scale(metadata);
        debug_assert!(
            scale <= DECIMAL_MAX_SCALE,
            "replicated decimal scale {} exceeds the maximum of {}",
            scale,
            DECIMAL_MAX_SCALE
        );
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::Decimal {
                precision,
                scale: scale.min(DECIMAL_MAX_SCALE),
                unsigned: false,
                zerofill: false,
            },
        ))
    }

    fn make_distinct_aggregator_field(
        &self,
        arena: &mut FieldArena,
        value: &ValueDescriptor<'_>,
    ) -> FieldHandle {
        make_decimal_distinct_field(arena, value)
    }
}

/// Superseded fixed-point decimal encoding.
///
/// Local tables carrying it can still be opened, but replicated data for it
/// cannot be bridged: the representation changed incompatibly, so the
/// conversion protocol reports the mismatch and constructs nothing.
#[derive(Debug)]
pub struct LegacyDecimalHandler;

impl TypeHandler for LegacyDecimalHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::LegacyDecimal
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::LegacyDecimal {
                length: attrs.length,
                decimals: attrs.decimals,
                unsigned: attrs.unsigned,
                zerofill: attrs.zerofill,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        _arena: &mut FieldArena,
        share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        log::error!(
            "Received incompatible legacy DECIMAL column from the replication \
             source while building a conversion table; the on-disk \
             representation changed incompatibly. Change the source column \
             to new-style DECIMAL with ALTER TABLE for column {}.{}.{}.",
            share.db_name,
            share.table_name,
            target.name
        );
        None
    }

    fn make_distinct_aggregator_field(
        &self,
        arena: &mut FieldArena,
        value: &ValueDescriptor<'_>,
    ) -> FieldHandle {
        make_decimal_distinct_field(arena, value)
    }
}

/// Bit field of 1..=64 bits
#[derive(Debug)]
pub struct BitHandler;

impl TypeHandler for BitHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Bit
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::Bit { bits: attrs.length },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        metadata: u32,
        _target: &Field,
    ) -> Option<FieldHandle> {
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::Bit {
                bits: metadata::bit_length(metadata),
            },
        ))
    }

    fn make_distinct_aggregator_field(
        &self,
        arena: &mut FieldArena,
        value: &ValueDescriptor<'_>,
    ) -> FieldHandle {
        make_bigint_distinct_field(arena, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share() -> TableShare {
        TableShare::new("db", "t")
    }

    fn int_value<'a>() -> ValueDescriptor<'a> {
        ValueDescriptor {
            name: "v",
            max_length: 11,
            decimals: 0,
            maybe_null: true,
            unsigned: false,
        }
    }

    #[test]
    fn test_integer_conversion_inherits_target_sign() {
        let handlers: [(&dyn TypeHandler, FieldLayout); 5] = [
            (
                &TINY_INT,
                FieldLayout::TinyInt {
                    length: 4,
                    unsigned: true,
                    zerofill: false,
                },
            ),
            (
                &SMALL_INT,
                FieldLayout::SmallInt {
                    length: 6,
                    unsigned: true,
                    zerofill: false,
                },
            ),
            (
                &MEDIUM_INT,
                FieldLayout::MediumInt {
                    length: 9,
                    unsigned: true,
                    zerofill: false,
                },
            ),
            (
                &INT,
                FieldLayout::Int {
                    length: 11,
                    unsigned: true,
                    zerofill: false,
                },
            ),
            (
                &BIG_INT,
                FieldLayout::BigInt {
                    length: 20,
                    unsigned: true,
                    zerofill: false,
                },
            ),
        ];

        for (handler, target_layout) in handlers {
            let target = Field::scratch("c", false, &charset::BINARY, target_layout);
            let mut arena = FieldArena::new();
            let h = handler
                .make_conversion_table_field(&mut arena, &share(), 0, &target)
                .expect("integer conversion never fails");
            assert!(arena.field(h).is_unsigned(), "{:?}", handler);
            assert!(arena.field(h).nullable);

            // Signed target: sign must flip with it, metadata stays irrelevant.
            let mut signed_layout = target.clone();
            if let FieldLayout::Int { unsigned, .. }
            | FieldLayout::TinyInt { unsigned, .. }
            | FieldLayout::SmallInt { unsigned, .. }
            | FieldLayout::MediumInt { unsigned, .. }
            | FieldLayout::BigInt { unsigned, .. } = &mut signed_layout.layout
            {
                *unsigned = false;
            }
            let h = handler
                .make_conversion_table_field(&mut arena, &share(), 0xffff, &signed_layout)
                .unwrap();
            assert!(!arena.field(h).is_unsigned(), "{:?}", handler);
        }
    }

    #[test]
    fn test_integer_conversion_display_widths() {
        let target = Field::scratch(
            "c",
            false,
            &charset::BINARY,
            FieldLayout::Int {
                length: 11,
                unsigned: false,
                zerofill: false,
            },
        );
        let mut arena = FieldArena::new();
        let widths = [
            (&TINY_INT as &dyn TypeHandler, 4),
            (&SMALL_INT, 6),
            (&MEDIUM_INT, 9),
            (&INT, 11),
            (&BIG_INT, 20),
        ];
        for (handler, width) in widths {
            let h = handler
                .make_conversion_table_field(&mut arena, &share(), 0, &target)
                .unwrap();
            assert_eq!(arena.field(h).field_length(), width);
        }
    }

    #[test]
    fn test_float_conversion_defaults() {
        let target = Field::scratch(
            "c",
            false,
            &charset::BINARY,
            FieldLayout::Double {
                length: 22,
                decimals: 0,
                unsigned: true,
                zerofill: true,
            },
        );
        let mut arena = FieldArena::new();
        let h = FLOAT
            .make_conversion_table_field(&mut arena, &share(), 0, &target)
            .unwrap();
        let f = arena.field(h);
        // Floats ignore the target: default unsigned off, default scale.
        assert!(!f.is_unsigned());
        assert_eq!(f.decimals(), 0);
        assert_eq!(f.field_length(), 12);

        let h = DOUBLE
            .make_conversion_table_field(&mut arena, &share(), 0, &target)
            .unwrap();
        assert_eq!(arena.field(h).field_length(), 22);
    }

    #[test]
    fn test_decimal_conversion_decodes_precision_and_scale() {
        let target = Field::scratch(
            "c",
            false,
            &charset::BINARY,
            FieldLayout::Decimal {
                precision: 5,
                scale: 0,
                unsigned: false,
                zerofill: false,
            },
        );
        let mut arena = FieldArena::new();
        let h = DECIMAL
            .make_conversion_table_field(
                &mut arena,
                &share(),
                metadata::pack_decimal_metadata(12, 4),
                &target,
            )
            .unwrap();
        match arena.field(h).layout {
            FieldLayout::Decimal {
                precision, scale, ..
            } => {
                assert_eq!(precision, 12);
                assert_eq!(scale, 4);
            }
            ref other => panic!("expected decimal layout, got {:?}", other),
        }
    }

    #[test]
    fn test_legacy_decimal_conversion_is_unrepresentable() {
        let target = Field::scratch(
            "amount",
            false,
            &charset::BINARY,
            FieldLayout::Decimal {
                precision: 10,
                scale: 2,
                unsigned: false,
                zerofill: false,
            },
        );
        let mut arena = FieldArena::new();
        for meta in [0u32, 0x0a02, 0xffff] {
            assert!(LEGACY_DECIMAL
                .make_conversion_table_field(&mut arena, &share(), meta, &target)
                .is_none());
        }
        assert!(arena.is_empty());
    }

    #[test]
    fn test_distinct_aggregator_categories() {
        let mut arena = FieldArena::new();

        let h = INT.make_distinct_aggregator_field(&mut arena, &int_value());
        assert!(matches!(
            arena.field(h).layout,
            FieldLayout::BigInt { .. }
        ));

        let h = BIT.make_distinct_aggregator_field(&mut arena, &int_value());
        assert!(matches!(
            arena.field(h).layout,
            FieldLayout::BigInt { .. }
        ));

        let h = FLOAT.make_distinct_aggregator_field(&mut arena, &int_value());
        assert!(matches!(arena.field(h).layout, FieldLayout::Float { .. }));

        let h = DOUBLE.make_distinct_aggregator_field(&mut arena, &int_value());
        assert!(matches!(
            arena.field(h).layout,
            FieldLayout::Double { .. }
        ));

        let value = ValueDescriptor {
            name: "d",
            max_length: 12,
            decimals: 4,
            maybe_null: false,
            unsigned: false,
        };
        let h = DECIMAL.make_distinct_aggregator_field(&mut arena, &value);
        match arena.field(h).layout {
            FieldLayout::Decimal { scale, .. } => assert_eq!(scale, 4),
            ref other => panic!("expected decimal layout, got {:?}", other),
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "distinct-aggregate scale")]
    fn test_distinct_aggregator_scale_bound() {
        let mut arena = FieldArena::new();
        let value = ValueDescriptor {
            name: "d",
            max_length: 70,
            decimals: DECIMAL_MAX_SCALE + 1,
            maybe_null: false,
            unsigned: false,
        };
        DECIMAL.make_distinct_aggregator_field(&mut arena, &value);
    }

    #[test]
    fn test_bit_conversion_length() {
        let target = Field::scratch("b", false, &charset::BINARY, FieldLayout::Bit { bits: 29 });
        let mut arena = FieldArena::new();
        let h = BIT
            .make_conversion_table_field(
                &mut arena,
                &share(),
                metadata::pack_bit_metadata(3, 5),
                &target,
            )
            .unwrap();
        match arena.field(h).layout {
            FieldLayout::Bit { bits } => assert_eq!(bits, 29),
            ref other => panic!("expected bit layout, got {:?}", other),
        }
    }

    #[test]
    fn test_decimal_table_field_derives_precision() {
        let mut arena = FieldArena::new();
        let mut attrs = CreateAttributes::new(12, &charset::BINARY);
        attrs.decimals = 4;
        let h = DECIMAL.make_table_field(
            &mut arena,
            "price",
            StoreLocation::nullable(0, 0, 0),
            &attrs,
        );
        match arena.field(h).layout {
            FieldLayout::Decimal {
                precision, scale, ..
            } => {
                // length 12 = 10 digits + dot + sign
                assert_eq!(precision, 10);
                assert_eq!(scale, 4);
            }
            ref other => panic!("expected decimal layout, got {:?}", other),
        }
        assert_eq!(arena.field(h).name, "price");
        assert!(arena.field(h).nullable);
    }
}
