//! Caller-supplied attribute bundles
//!
//! These types describe one column instantiation request. They are ephemeral
//! and caller-owned; handlers read them during a single construction call and
//! never retain them.

use crate::common::constants::DECIMAL_MAX_SCALE;
use crate::common::error::{QuartzError, QuartzResult};
use crate::types::charset::CharsetInfo;
use std::sync::Arc;

/// Default-value policy of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultPolicy {
    /// Plain column, default comes from the schema
    #[default]
    None,
    /// Auto-incrementing integer column
    AutoIncrement,
    /// Timestamp set on insert
    InsertNow,
    /// Timestamp set on update
    UpdateNow,
    /// Timestamp set on insert and refreshed on update
    InsertAndUpdateNow,
}

/// Location of a column's null flag inside the record's null bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullBitLocation {
    /// Byte offset of the null bitmap byte
    pub byte: u32,
    /// Bit within that byte, 0..=7
    pub bit: u8,
}

/// Store location of a column inside the record buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLocation {
    /// Byte offset of the column data
    pub offset: u32,
    /// Null-bit location; `None` for NOT NULL columns
    pub null_bit: Option<NullBitLocation>,
}

impl StoreLocation {
    /// Location for a NOT NULL column at `offset`
    pub fn not_null(offset: u32) -> Self {
        Self {
            offset,
            null_bit: None,
        }
    }

    /// Location for a nullable column
    pub fn nullable(offset: u32, null_byte: u32, null_bit: u8) -> Self {
        debug_assert!(null_bit <= 7);
        Self {
            offset,
            null_bit: Some(NullBitLocation {
                byte: null_byte,
                bit: null_bit,
            }),
        }
    }

    /// Whether the column can hold NULL
    pub fn is_nullable(&self) -> bool {
        self.null_bit.is_some()
    }
}

/// Value dictionary of an enumerated or multi-valued column.
///
/// The dictionary is schema-carried: replication column descriptors only
/// transmit the element storage width, the values themselves always come
/// from the local schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLib {
    values: Vec<String>,
}

impl TypeLib {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Storage width of an enum element: one byte up to 255 values, two after
    pub fn enum_storage_width(&self) -> u8 {
        if self.values.len() < 256 {
            1
        } else {
            2
        }
    }

    /// Storage width of a set element: one bit per value, whole bytes,
    /// capped at eight
    pub fn set_storage_width(&self) -> u8 {
        (self.values.len().div_ceil(8)).min(8) as u8
    }
}

/// Attribute bundle describing one column instantiation request
#[derive(Debug, Clone)]
pub struct CreateAttributes {
    /// Declared display/storage length
    pub length: u32,
    /// Declared decimal scale
    pub decimals: u8,
    /// Character set of the column
    pub charset: &'static CharsetInfo,
    /// UNSIGNED declared
    pub unsigned: bool,
    /// ZEROFILL declared
    pub zerofill: bool,
    /// Default-value policy
    pub default_policy: DefaultPolicy,
    /// Value dictionary for enum/set columns
    pub type_values: Option<Arc<TypeLib>>,
}

impl CreateAttributes {
    /// Attributes with the given length and charset; everything else takes
    /// the per-type default (scale 0, signed, no zerofill)
    pub fn new(length: u32, charset: &'static CharsetInfo) -> Self {
        Self {
            length,
            decimals: 0,
            charset,
            unsigned: false,
            zerofill: false,
            default_policy: DefaultPolicy::None,
            type_values: None,
        }
    }

    /// Reject attribute combinations no type can accept
    pub fn validate(&self) -> QuartzResult<()> {
        if self.decimals > DECIMAL_MAX_SCALE {
            return Err(QuartzError::InvalidType(format!(
                "decimal scale {} exceeds the maximum of {}",
                self.decimals, DECIMAL_MAX_SCALE
            )));
        }
        Ok(())
    }
}

/// Descriptor of an expression value feeding a distinct-aggregation bucket
#[derive(Debug, Clone, Copy)]
pub struct ValueDescriptor<'a> {
    /// Display name of the expression
    pub name: &'a str,
    /// Maximum display length of the value
    pub max_length: u32,
    /// Decimal digits of the value
    pub decimals: u8,
    /// Whether the expression can evaluate to NULL
    pub maybe_null: bool,
    /// Whether the value is unsigned
    pub unsigned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::charset;

    #[test]
    fn test_attribute_defaults() {
        let attrs = CreateAttributes::new(11, &charset::BINARY);
        assert_eq!(attrs.decimals, 0);
        assert!(!attrs.unsigned);
        assert!(!attrs.zerofill);
        assert_eq!(attrs.default_policy, DefaultPolicy::None);
        assert!(attrs.validate().is_ok());
    }

    #[test]
    fn test_scale_bound_rejected() {
        let mut attrs = CreateAttributes::new(40, &charset::BINARY);
        attrs.decimals = DECIMAL_MAX_SCALE + 1;
        assert!(attrs.validate().is_err());
    }

    #[test]
    fn test_typelib_storage_widths() {
        let small = TypeLib::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(small.enum_storage_width(), 1);
        assert_eq!(small.set_storage_width(), 1);

        let wide = TypeLib::new((0..300).map(|i| format!("v{}", i)).collect());
        assert_eq!(wide.enum_storage_width(), 2);
        // 300 set members need 38 bytes, capped at the 8-byte maximum
        assert_eq!(wide.set_storage_width(), 8);

        let nine = TypeLib::new((0..9).map(|i| format!("v{}", i)).collect());
        assert_eq!(nine.set_storage_width(), 2);
    }

    #[test]
    fn test_store_location() {
        let loc = StoreLocation::nullable(16, 0, 3);
        assert!(loc.is_nullable());
        assert_eq!(loc.offset, 16);

        let loc = StoreLocation::not_null(8);
        assert!(!loc.is_nullable());
    }
}
