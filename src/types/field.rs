//! Field descriptors
//!
//! A [`Field`] is the opaque result of every construction protocol: the
//! physical layout of one column instantiation, hosted in a caller-owned
//! arena. The byte-level encoding and decoding behind each layout lives in
//! the storage layer; this crate only decides *which* layout backs a type.

use crate::types::attributes::{DefaultPolicy, StoreLocation, TypeLib};
use crate::types::charset::CharsetInfo;
use crate::types::field_type::FieldTypeCode;
use crate::types::metadata;
use std::sync::Arc;

/// Identity of the table a field belongs to, used in diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableShare {
    pub db_name: String,
    pub table_name: String,
}

impl TableShare {
    pub fn new(db_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            db_name: db_name.into(),
            table_name: table_name.into(),
        }
    }
}

/// Which generation of the on-disk temporal encoding a field uses.
///
/// The legacy generation stores temporal values as packed integers without
/// fractional seconds; the packed generation is the big-endian,
/// fractional-second-capable successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalFormat {
    Legacy,
    Packed,
}

/// Physical layout of a field, one variant per concrete representation
#[derive(Debug, Clone)]
pub enum FieldLayout {
    TinyInt {
        length: u32,
        unsigned: bool,
        zerofill: bool,
    },
    SmallInt {
        length: u32,
        unsigned: bool,
        zerofill: bool,
    },
    MediumInt {
        length: u32,
        unsigned: bool,
        zerofill: bool,
    },
    Int {
        length: u32,
        unsigned: bool,
        zerofill: bool,
    },
    BigInt {
        length: u32,
        unsigned: bool,
        zerofill: bool,
    },
    Float {
        length: u32,
        decimals: u8,
        unsigned: bool,
        zerofill: bool,
    },
    Double {
        length: u32,
        decimals: u8,
        unsigned: bool,
        zerofill: bool,
    },
    /// Superseded decimal encoding; still constructible for local tables
    /// that carry it, but unreachable through conversion
    LegacyDecimal {
        length: u32,
        decimals: u8,
        unsigned: bool,
        zerofill: bool,
    },
    Decimal {
        precision: u8,
        scale: u8,
        unsigned: bool,
        zerofill: bool,
    },
    Year {
        length: u32,
    },
    Bit {
        bits: u32,
    },
    Date {
        format: TemporalFormat,
    },
    Time {
        fractional: u8,
        format: TemporalFormat,
    },
    DateTime {
        fractional: u8,
        format: TemporalFormat,
    },
    Timestamp {
        fractional: u8,
        format: TemporalFormat,
    },
    Null,
    Char {
        length: u32,
    },
    Varchar {
        length: u32,
        /// Width of the in-record length prefix, 1 or 2 bytes
        length_prefix: u8,
    },
    Blob {
        /// Width of the length prefix, 1/2/3/4 bytes selecting the tier
        length_prefix: u8,
    },
    Enum {
        length: u32,
        storage_width: u8,
        values: Arc<TypeLib>,
    },
    Set {
        length: u32,
        storage_width: u8,
        values: Arc<TypeLib>,
    },
}

/// One constructed column representation
#[derive(Debug, Clone)]
pub struct Field {
    /// Column name; empty for scratch fields
    pub name: String,
    /// Whether the field can hold NULL
    pub nullable: bool,
    /// Character set token
    pub charset: &'static CharsetInfo,
    /// Record location; `None` for scratch fields outside any record
    pub location: Option<StoreLocation>,
    /// Default-value policy
    pub default_policy: DefaultPolicy,
    /// Physical layout
    pub layout: FieldLayout,
}

impl Field {
    /// A scratch field hosted outside any record buffer (conversion targets,
    /// aggregation buckets)
    pub fn scratch(
        name: impl Into<String>,
        nullable: bool,
        charset: &'static CharsetInfo,
        layout: FieldLayout,
    ) -> Self {
        Self {
            name: name.into(),
            nullable,
            charset,
            location: None,
            default_policy: DefaultPolicy::None,
            layout,
        }
    }

    /// A field stored at `location` inside a table record
    pub fn stored(
        name: impl Into<String>,
        location: StoreLocation,
        charset: &'static CharsetInfo,
        default_policy: DefaultPolicy,
        layout: FieldLayout,
    ) -> Self {
        Self {
            name: name.into(),
            nullable: location.is_nullable(),
            charset,
            location: Some(location),
            default_policy,
            layout,
        }
    }

    /// External type code of this field, as persisted in schema images
    pub fn field_type_code(&self) -> FieldTypeCode {
        match &self.layout {
            FieldLayout::TinyInt { .. } => FieldTypeCode::TinyInt,
            FieldLayout::SmallInt { .. } => FieldTypeCode::SmallInt,
            FieldLayout::MediumInt { .. } => FieldTypeCode::MediumInt,
            FieldLayout::Int { .. } => FieldTypeCode::Int,
            FieldLayout::BigInt { .. } => FieldTypeCode::BigInt,
            FieldLayout::Float { .. } => FieldTypeCode::Float,
            FieldLayout::Double { .. } => FieldTypeCode::Double,
            FieldLayout::LegacyDecimal { .. } => FieldTypeCode::LegacyDecimal,
            FieldLayout::Decimal { .. } => FieldTypeCode::Decimal,
            FieldLayout::Year { .. } => FieldTypeCode::Year,
            FieldLayout::Bit { .. } => FieldTypeCode::Bit,
            FieldLayout::Date { .. } => FieldTypeCode::Date,
            FieldLayout::Time { .. } => FieldTypeCode::Time,
            FieldLayout::DateTime { .. } => FieldTypeCode::DateTime,
            FieldLayout::Timestamp { .. } => FieldTypeCode::Timestamp,
            FieldLayout::Null => FieldTypeCode::Null,
            FieldLayout::Char { .. } => FieldTypeCode::Char,
            FieldLayout::Varchar { .. } => FieldTypeCode::Varchar,
            FieldLayout::Blob { length_prefix } => match length_prefix {
                1 => FieldTypeCode::TinyBlob,
                2 => FieldTypeCode::Blob,
                3 => FieldTypeCode::MediumBlob,
                _ => FieldTypeCode::LongBlob,
            },
            // Enumerations surface externally as fixed-length strings
            FieldLayout::Enum { .. } | FieldLayout::Set { .. } => FieldTypeCode::Char,
        }
    }

    /// Storage-internal type code, distinguishing encoding generations that
    /// share an external code
    pub fn real_type_code(&self) -> FieldTypeCode {
        match &self.layout {
            FieldLayout::Date {
                format: TemporalFormat::Packed,
            } => FieldTypeCode::NewDate,
            FieldLayout::Time {
                format: TemporalFormat::Packed,
                ..
            } => FieldTypeCode::Time2,
            FieldLayout::DateTime {
                format: TemporalFormat::Packed,
                ..
            } => FieldTypeCode::DateTime2,
            FieldLayout::Timestamp {
                format: TemporalFormat::Packed,
                ..
            } => FieldTypeCode::Timestamp2,
            FieldLayout::Enum { .. } => FieldTypeCode::Enum,
            FieldLayout::Set { .. } => FieldTypeCode::Set,
            _ => self.field_type_code(),
        }
    }

    /// Whether the field stores unsigned values
    pub fn is_unsigned(&self) -> bool {
        match &self.layout {
            FieldLayout::TinyInt { unsigned, .. }
            | FieldLayout::SmallInt { unsigned, .. }
            | FieldLayout::MediumInt { unsigned, .. }
            | FieldLayout::Int { unsigned, .. }
            | FieldLayout::BigInt { unsigned, .. }
            | FieldLayout::Float { unsigned, .. }
            | FieldLayout::Double { unsigned, .. }
            | FieldLayout::LegacyDecimal { unsigned, .. }
            | FieldLayout::Decimal { unsigned, .. } => *unsigned,
            // Year and bit fields only hold non-negative values
            FieldLayout::Year { .. } | FieldLayout::Bit { .. } => true,
            _ => false,
        }
    }

    /// Declared display length of the field
    pub fn field_length(&self) -> u32 {
        use crate::common::constants::{MAX_DATE_WIDTH, MAX_DATETIME_WIDTH, MIN_TIME_WIDTH};
        match &self.layout {
            FieldLayout::TinyInt { length, .. }
            | FieldLayout::SmallInt { length, .. }
            | FieldLayout::MediumInt { length, .. }
            | FieldLayout::Int { length, .. }
            | FieldLayout::BigInt { length, .. }
            | FieldLayout::Float { length, .. }
            | FieldLayout::Double { length, .. }
            | FieldLayout::LegacyDecimal { length, .. }
            | FieldLayout::Year { length }
            | FieldLayout::Char { length }
            | FieldLayout::Varchar { length, .. }
            | FieldLayout::Enum { length, .. }
            | FieldLayout::Set { length, .. } => *length,
            FieldLayout::Decimal {
                precision,
                scale,
                unsigned,
                ..
            } => metadata::decimal_precision_to_length(*precision, *scale, *unsigned),
            FieldLayout::Bit { bits } => *bits,
            FieldLayout::Date { .. } => MAX_DATE_WIDTH,
            FieldLayout::Time { fractional, .. } => {
                MIN_TIME_WIDTH + fractional_width(*fractional)
            }
            FieldLayout::DateTime { fractional, .. }
            | FieldLayout::Timestamp { fractional, .. } => {
                MAX_DATETIME_WIDTH + fractional_width(*fractional)
            }
            FieldLayout::Null => 0,
            FieldLayout::Blob { length_prefix } => match length_prefix {
                1 => u8::MAX as u32,
                2 => u16::MAX as u32,
                3 => 0xff_ffff,
                _ => u32::MAX,
            },
        }
    }

    /// Decimal digits of the field
    pub fn decimals(&self) -> u8 {
        match &self.layout {
            FieldLayout::Float { decimals, .. }
            | FieldLayout::Double { decimals, .. }
            | FieldLayout::LegacyDecimal { decimals, .. } => *decimals,
            FieldLayout::Decimal { scale, .. } => *scale,
            FieldLayout::Time { fractional, .. }
            | FieldLayout::DateTime { fractional, .. }
            | FieldLayout::Timestamp { fractional, .. } => *fractional,
            _ => 0,
        }
    }
}

/// Display columns taken by `fractional` digits, including the dot
fn fractional_width(fractional: u8) -> u32 {
    if fractional > 0 {
        fractional as u32 + 1
    } else {
        0
    }
}
