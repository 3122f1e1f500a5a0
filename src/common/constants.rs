//! Constants used throughout the type dispatch layer

/// Display width of a DATE value ("YYYY-MM-DD")
pub const MAX_DATE_WIDTH: u32 = 10;

/// Display width of a DATETIME/TIMESTAMP value without fractional seconds
/// ("YYYY-MM-DD HH:MM:SS")
pub const MAX_DATETIME_WIDTH: u32 = 19;

/// Minimum display width of a TIME value ("HHH:MM:SS" with sign)
pub const MIN_TIME_WIDTH: u32 = 10;

/// Maximum display width of a TIME value without fractional seconds
pub const MAX_TIME_WIDTH: u32 = 16;

/// Maximum fractional-second digits of the packed temporal formats
pub const MAX_TEMPORAL_PRECISION: u8 = 6;

/// Maximum precision of a fixed-point decimal column
pub const DECIMAL_MAX_PRECISION: u8 = 65;

/// Maximum scale of a fixed-point decimal column
pub const DECIMAL_MAX_SCALE: u8 = 30;

/// Character-length threshold above which a hybrid string result spills
/// from VARCHAR into a large-object tier
pub const CONVERT_IF_BIGGER_TO_BLOB: u32 = 512;

/// Largest octet length representable by a variable-length string column
pub const MAX_VARCHAR_OCTETS: u32 = 65_535;

/// Largest octet length representable by the medium large-object tier
pub const MAX_MEDIUM_BLOB_OCTETS: u32 = 16_777_215;

/// Name given to scratch fields (conversion and aggregation) that never
/// surface in a schema
pub const TMP_FIELD_NAME: &str = "";
