//! Temporal type handlers
//!
//! Each temporal family exists in two encoding generations: the legacy
//! integer encodings and their packed, fractional-second-capable
//! successors. Both generations stay constructible because replication
//! peers and old tables still produce them; new columns always get the
//! packed generation through the resolver's canonicalization.

use crate::common::arena::{FieldArena, FieldHandle};
use crate::common::constants::{MAX_DATETIME_WIDTH, MAX_TEMPORAL_PRECISION, MIN_TIME_WIDTH};
use crate::handler::numeric::make_bigint_distinct_field;
use crate::handler::type_handler::{alloc_conversion_field, TypeHandler};
use crate::types::attributes::{CreateAttributes, StoreLocation, ValueDescriptor};
use crate::types::charset;
use crate::types::field::{Field, FieldLayout, TableShare, TemporalFormat};
use crate::types::field_type::FieldTypeCode;

pub static YEAR: YearHandler = YearHandler;
pub static DATE: DateHandler = DateHandler;
pub static NEW_DATE: NewDateHandler = NewDateHandler;
pub static TIME: TimeHandler = TimeHandler;
pub static TIME2: Time2Handler = Time2Handler;
pub static DATETIME: DateTimeHandler = DateTimeHandler;
pub static DATETIME2: DateTime2Handler = DateTime2Handler;
pub static TIMESTAMP: TimestampHandler = TimestampHandler;
pub static TIMESTAMP2: Timestamp2Handler = Timestamp2Handler;

/// Fractional digits encoded in a datetime/timestamp display length:
/// anything beyond the seconds field, minus the decimal point
fn datetime_fractional(length: u32) -> u8 {
    if length > MAX_DATETIME_WIDTH {
        (length - MAX_DATETIME_WIDTH - 1) as u8
    } else {
        0
    }
}

/// Fractional digits encoded in a time display length
fn time_fractional(length: u32) -> u8 {
    if length > MIN_TIME_WIDTH {
        (length - MIN_TIME_WIDTH - 1) as u8
    } else {
        0
    }
}

/// Fractional digit count carried directly in a packed-format descriptor
fn metadata_fractional(metadata: u32) -> u8 {
    let fractional = metadata as u8;
    debug_assert!(
        fractional <= MAX_TEMPORAL_PRECISION,
        "fractional precision {} exceeds the maximum of {}",
        fractional,
        MAX_TEMPORAL_PRECISION
    );
    fractional.min(MAX_TEMPORAL_PRECISION)
}

/// Two- or four-digit year
#[derive(Debug)]
pub struct YearHandler;

impl TypeHandler for YearHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Year
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
            FieldLayout::Year {
                length: attrs.length,
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
            FieldLayout::Year { length: 4 },
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

/// Calendar date, legacy four-byte encoding
#[derive(Debug)]
pub struct DateHandler;

impl TypeHandler for DateHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Date
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
            FieldLayout::Date {
                format: TemporalFormat::Legacy,
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
            FieldLayout::Date {
                format: TemporalFormat::Legacy,
            },
        ))
    }
}

/// Calendar date, compact three-byte encoding
#[derive(Debug)]
pub struct NewDateHandler;

impl TypeHandler for NewDateHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Date
    }

    fn real_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::NewDate
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
            FieldLayout::Date {
                format: TemporalFormat::Packed,
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
            FieldLayout::Date {
                format: TemporalFormat::Packed,
            },
        ))
    }
}

/// Time of day / duration, legacy encoding
#[derive(Debug)]
pub struct TimeHandler;

impl TypeHandler for TimeHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Time
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
            FieldLayout::Time {
                fractional: time_fractional(attrs.length),
                format: TemporalFormat::Legacy,
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
            FieldLayout::Time {
                fractional: 0,
                format: TemporalFormat::Legacy,
            },
        ))
    }
}

/// Time with fractional seconds, packed encoding
#[derive(Debug)]
pub struct Time2Handler;

impl TypeHandler for Time2Handler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Time
    }

    fn real_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Time2
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
            FieldLayout::Time {
                fractional: time_fractional(attrs.length),
                format: TemporalFormat::Packed,
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
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::Time {
                fractional: metadata_fractional(metadata),
                format: TemporalFormat::Packed,
            },
        ))
    }
}

/// Date and time, legacy eight-byte encoding
#[derive(Debug)]
pub struct DateTimeHandler;

impl TypeHandler for DateTimeHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::DateTime
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
            FieldLayout::DateTime {
                fractional: datetime_fractional(attrs.length),
                format: TemporalFormat::Legacy,
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
            FieldLayout::DateTime {
                fractional: 0,
                format: TemporalFormat::Legacy,
            },
        ))
    }
}

/// Datetime with fractional seconds, packed encoding
#[derive(Debug)]
pub struct DateTime2Handler;

impl TypeHandler for DateTime2Handler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::DateTime
    }

    fn real_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::DateTime2
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
            FieldLayout::DateTime {
                fractional: datetime_fractional(attrs.length),
                format: TemporalFormat::Packed,
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
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::DateTime {
                fractional: metadata_fractional(metadata),
                format: TemporalFormat::Packed,
            },
        ))
    }
}

/// Auto-updating timestamp, legacy encoding
#[derive(Debug)]
pub struct TimestampHandler;

impl TypeHandler for TimestampHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Timestamp
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
            FieldLayout::Timestamp {
                fractional: datetime_fractional(attrs.length),
                format: TemporalFormat::Legacy,
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
        // The legacy descriptor carries nothing, so TIMESTAMP(0) is assumed.
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::Timestamp {
                fractional: 0,
                format: TemporalFormat::Legacy,
            },
        ))
    }
}

/// Timestamp with fractional seconds, packed encoding
#[derive(Debug)]
pub struct Timestamp2Handler;

impl TypeHandler for Timestamp2Handler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Timestamp
    }

    fn real_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Timestamp2
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
            FieldLayout::Timestamp {
                fractional: datetime_fractional(attrs.length),
                format: TemporalFormat::Packed,
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
        Some(alloc_conversion_field(
            arena,
            &charset::BINARY,
            FieldLayout::Timestamp {
                fractional: metadata_fractional(metadata),
                format: TemporalFormat::Packed,
            },
        ))
    }
}
