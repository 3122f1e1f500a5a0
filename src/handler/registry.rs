//! Process-wide handler registry
//!
//! Built exactly once, before any table or connection activity, and
//! read-only afterwards; lookups need no synchronization. The table is
//! indexed by real-type code so that every encoding generation resolves to
//! its own handler.

use crate::handler::type_handler::TypeHandler;
use crate::handler::{numeric, string, temporal};
use once_cell::sync::Lazy;

/// Registry mapping real-type codes to handler singletons
pub struct TypeHandlerRegistry {
    handlers: [Option<&'static dyn TypeHandler>; 256],
    min_code: u8,
    max_code: u8,
}

impl TypeHandlerRegistry {
    fn new() -> Self {
        let mut registry = Self {
            handlers: [None; 256],
            min_code: u8::MAX,
            max_code: 0,
        };

        registry.add(&numeric::TINY_INT);
        registry.add(&numeric::SMALL_INT);
        registry.add(&numeric::INT);
        registry.add(&numeric::MEDIUM_INT);
        registry.add(&numeric::BIG_INT);
        registry.add(&temporal::YEAR);
        registry.add(&numeric::BIT);
        registry.add(&numeric::FLOAT);
        registry.add(&numeric::DOUBLE);

        registry.add(&temporal::TIME);
        registry.add(&temporal::TIME2);

        registry.add(&temporal::DATE);
        registry.add(&temporal::NEW_DATE);

        registry.add(&temporal::DATETIME);
        registry.add(&temporal::DATETIME2);

        registry.add(&temporal::TIMESTAMP);
        registry.add(&temporal::TIMESTAMP2);

        registry.add(&numeric::LEGACY_DECIMAL);
        registry.add(&numeric::DECIMAL);

        registry.add(&string::NULL_TYPE);

        registry.add(&string::CHAR);
        registry.add(&string::VARCHAR);

        registry.add(&string::TINY_BLOB);
        registry.add(&string::MEDIUM_BLOB);
        registry.add(&string::LONG_BLOB);
        registry.add(&string::BLOB);

        registry.add(&string::ENUM);
        registry.add(&string::SET);

        registry
    }

    /// Register a handler under its real-type code. Registration order only
    /// establishes the min/max bounds.
    fn add(&mut self, handler: &'static dyn TypeHandler) {
        let code = handler.real_type_code().code();
        debug_assert!(
            self.handlers[code as usize].is_none(),
            "real-type code {} registered twice",
            code
        );
        self.handlers[code as usize] = Some(handler);
        self.min_code = self.min_code.min(code);
        self.max_code = self.max_code.max(code);
    }

    /// Look up the handler for a real-type code.
    ///
    /// A code outside the registered range is a caller bug; the release
    /// build degrades to the plain string handler instead of dispatching
    /// through garbage. Codes inside the range that no handler claimed get
    /// the same survivable fallback.
    pub fn handler(&self, code: u8) -> &'static dyn TypeHandler {
        if code < self.min_code || code > self.max_code {
            debug_assert!(
                false,
                "type code {} outside the registered range {}..={}",
                code, self.min_code, self.max_code
            );
            return &string::CHAR;
        }
        self.handlers[code as usize].unwrap_or(&string::CHAR)
    }

    /// Smallest registered real-type code
    pub fn min_code(&self) -> u8 {
        self.min_code
    }

    /// Largest registered real-type code
    pub fn max_code(&self) -> u8 {
        self.max_code
    }
}

static REGISTRY: Lazy<TypeHandlerRegistry> = Lazy::new(TypeHandlerRegistry::new);

/// The process-wide registry instance
pub fn registry() -> &'static TypeHandlerRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::field_type::FieldTypeCode;

    #[test]
    fn test_registered_bounds() {
        let reg = registry();
        assert_eq!(reg.min_code(), 0);
        assert_eq!(reg.max_code(), 254);
    }

    #[test]
    fn test_every_code_in_range_resolves() {
        let reg = registry();
        for code in reg.min_code()..=reg.max_code() {
            // Never panics, never returns a dangling slot.
            let _ = reg.handler(code).field_type_code();
        }
    }

    #[test]
    fn test_known_lookups() {
        let reg = registry();
        assert_eq!(
            reg.handler(FieldTypeCode::TinyInt.code()).field_type_code(),
            FieldTypeCode::TinyInt
        );
        assert_eq!(
            reg.handler(FieldTypeCode::NewDate.code()).real_type_code(),
            FieldTypeCode::NewDate
        );
        assert_eq!(
            reg.handler(FieldTypeCode::Enum.code()).real_type_code(),
            FieldTypeCode::Enum
        );
        assert_eq!(
            reg.handler(FieldTypeCode::Decimal.code()).field_type_code(),
            FieldTypeCode::Decimal
        );
    }

    #[test]
    fn test_unclaimed_code_in_range_degrades_to_string() {
        // 100 sits inside the range but no type claims it.
        assert_eq!(
            registry().handler(100).field_type_code(),
            FieldTypeCode::Char
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the registered range")]
    fn test_out_of_range_code_is_a_contract_violation() {
        registry().handler(255);
    }
}
