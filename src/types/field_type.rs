//! Type identity codes
//!
//! [`FieldTypeCode`] is the stable, externally visible small-integer
//! enumeration naming every logical column type. The values are persisted in
//! schema images and transmitted in replication column descriptors, so they
//! are append-only: a new logical type gets a fresh code, existing codes are
//! never renumbered.
//!
//! The same numeric space also serves as the *real-type* (storage-internal)
//! domain, distinguishing physical encodings that share an external code
//! (`Date` vs `NewDate`, `Time` vs `Time2`, `Char` vs `Enum`/`Set`). Domain
//! separation is enforced by the resolver entry points, not by a second
//! enumeration: `NewDate` is only valid as a real-type code, `VarString`
//! only as a field-type code.

use crate::common::error::{QuartzError, QuartzResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// External field-type code, one value per logical SQL type
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldTypeCode {
    /// Superseded fixed-point decimal encoding; kept for identification
    /// only, its data can no longer be converted
    LegacyDecimal = 0,
    /// 8-bit signed/unsigned integer
    TinyInt = 1,
    /// 16-bit integer
    SmallInt = 2,
    /// 32-bit integer
    Int = 3,
    /// Single-precision float
    Float = 4,
    /// Double-precision float
    Double = 5,
    /// Column that only holds NULL
    Null = 6,
    /// Auto-updating timestamp, legacy integer encoding
    Timestamp = 7,
    /// 64-bit integer
    BigInt = 8,
    /// 24-bit integer
    MediumInt = 9,
    /// Calendar date, legacy encoding
    Date = 10,
    /// Time of day / duration, legacy encoding
    Time = 11,
    /// Date and time, legacy encoding
    DateTime = 12,
    /// Two- or four-digit year
    Year = 13,
    /// Calendar date, compact three-byte encoding (real-type domain only)
    NewDate = 14,
    /// Variable-length character string
    Varchar = 15,
    /// Bit field of 1..=64 bits
    Bit = 16,
    /// Timestamp with fractional seconds, packed encoding
    Timestamp2 = 17,
    /// Datetime with fractional seconds, packed encoding
    DateTime2 = 18,
    /// Time with fractional seconds, packed encoding
    Time2 = 19,
    /// Current fixed-point decimal encoding
    Decimal = 246,
    /// Enumerated value (real-type domain; external code is `Char`)
    Enum = 247,
    /// Multi-valued set (real-type domain; external code is `Char`)
    Set = 248,
    /// Large object, 1-byte length prefix
    TinyBlob = 249,
    /// Large object, 3-byte length prefix
    MediumBlob = 250,
    /// Large object, 4-byte length prefix
    LongBlob = 251,
    /// Large object, 2-byte length prefix
    Blob = 252,
    /// Historical alias for `Varchar` (field-type domain only)
    VarString = 253,
    /// Fixed-length character string
    Char = 254,
}

impl FieldTypeCode {
    /// The wire value of this code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a wire value into a type code
    pub fn try_from_code(code: u8) -> QuartzResult<Self> {
        use FieldTypeCode::*;
        let decoded = match code {
            0 => LegacyDecimal,
            1 => TinyInt,
            2 => SmallInt,
            3 => Int,
            4 => Float,
            5 => Double,
            6 => Null,
            7 => Timestamp,
            8 => BigInt,
            9 => MediumInt,
            10 => Date,
            11 => Time,
            12 => DateTime,
            13 => Year,
            14 => NewDate,
            15 => Varchar,
            16 => Bit,
            17 => Timestamp2,
            18 => DateTime2,
            19 => Time2,
            246 => Decimal,
            247 => Enum,
            248 => Set,
            249 => TinyBlob,
            250 => MediumBlob,
            251 => LongBlob,
            252 => Blob,
            253 => VarString,
            254 => Char,
            other => return Err(QuartzError::UnknownTypeCode(other)),
        };
        Ok(decoded)
    }

    /// All codes that can appear in a replicated column descriptor
    pub fn all() -> &'static [FieldTypeCode] {
        use FieldTypeCode::*;
        &[
            LegacyDecimal,
            TinyInt,
            SmallInt,
            Int,
            Float,
            Double,
            Null,
            Timestamp,
            BigInt,
            MediumInt,
            Date,
            Time,
            DateTime,
            Year,
            NewDate,
            Varchar,
            Bit,
            Timestamp2,
            DateTime2,
            Time2,
            Decimal,
            Enum,
            Set,
            TinyBlob,
            MediumBlob,
            LongBlob,
            Blob,
            VarString,
            Char,
        ]
    }

    /// Whether this code names one of the large-object tiers
    pub fn is_blob(self) -> bool {
        matches!(
            self,
            FieldTypeCode::TinyBlob
                | FieldTypeCode::Blob
                | FieldTypeCode::MediumBlob
                | FieldTypeCode::LongBlob
        )
    }

    /// Whether this code names a temporal type
    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            FieldTypeCode::Timestamp
                | FieldTypeCode::Timestamp2
                | FieldTypeCode::Date
                | FieldTypeCode::NewDate
                | FieldTypeCode::Time
                | FieldTypeCode::Time2
                | FieldTypeCode::DateTime
                | FieldTypeCode::DateTime2
                | FieldTypeCode::Year
        )
    }
}

impl fmt::Display for FieldTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldTypeCode::LegacyDecimal => "DECIMAL (legacy)",
            FieldTypeCode::TinyInt => "TINYINT",
            FieldTypeCode::SmallInt => "SMALLINT",
            FieldTypeCode::Int => "INT",
            FieldTypeCode::Float => "FLOAT",
            FieldTypeCode::Double => "DOUBLE",
            FieldTypeCode::Null => "NULL",
            FieldTypeCode::Timestamp => "TIMESTAMP",
            FieldTypeCode::BigInt => "BIGINT",
            FieldTypeCode::MediumInt => "MEDIUMINT",
            FieldTypeCode::Date => "DATE",
            FieldTypeCode::Time => "TIME",
            FieldTypeCode::DateTime => "DATETIME",
            FieldTypeCode::Year => "YEAR",
            FieldTypeCode::NewDate => "DATE (compact)",
            FieldTypeCode::Varchar => "VARCHAR",
            FieldTypeCode::Bit => "BIT",
            FieldTypeCode::Timestamp2 => "TIMESTAMP (packed)",
            FieldTypeCode::DateTime2 => "DATETIME (packed)",
            FieldTypeCode::Time2 => "TIME (packed)",
            FieldTypeCode::Decimal => "DECIMAL",
            FieldTypeCode::Enum => "ENUM",
            FieldTypeCode::Set => "SET",
            FieldTypeCode::TinyBlob => "TINYBLOB",
            FieldTypeCode::MediumBlob => "MEDIUMBLOB",
            FieldTypeCode::LongBlob => "LONGBLOB",
            FieldTypeCode::Blob => "BLOB",
            FieldTypeCode::VarString => "VARCHAR (legacy)",
            FieldTypeCode::Char => "CHAR",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        for &code in FieldTypeCode::all() {
            assert_eq!(FieldTypeCode::try_from_code(code.code()).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(matches!(
            FieldTypeCode::try_from_code(100),
            Err(QuartzError::UnknownTypeCode(100))
        ));
        assert!(FieldTypeCode::try_from_code(255).is_err());
    }

    #[test]
    fn test_stable_wire_values() {
        // Persisted values must never drift.
        assert_eq!(FieldTypeCode::LegacyDecimal.code(), 0);
        assert_eq!(FieldTypeCode::TinyInt.code(), 1);
        assert_eq!(FieldTypeCode::NewDate.code(), 14);
        assert_eq!(FieldTypeCode::Time2.code(), 19);
        assert_eq!(FieldTypeCode::Decimal.code(), 246);
        assert_eq!(FieldTypeCode::Char.code(), 254);
    }

    #[test]
    fn test_classification() {
        assert!(FieldTypeCode::MediumBlob.is_blob());
        assert!(!FieldTypeCode::Varchar.is_blob());
        assert!(FieldTypeCode::NewDate.is_temporal());
        assert!(FieldTypeCode::Year.is_temporal());
        assert!(!FieldTypeCode::Bit.is_temporal());
    }
}
