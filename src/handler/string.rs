//! String, large-object, enumerated and null type handlers

use crate::common::arena::{FieldArena, FieldHandle};
use crate::handler::type_handler::{alloc_conversion_field, TypeHandler};
use crate::types::attributes::{CreateAttributes, StoreLocation, TypeLib};
use crate::types::field::{Field, FieldLayout, TableShare};
use crate::types::field_type::FieldTypeCode;
use crate::types::metadata;
use std::sync::Arc;

pub static NULL_TYPE: NullHandler = NullHandler;
pub static CHAR: CharHandler = CharHandler;
pub static VARCHAR: VarcharHandler = VarcharHandler;
pub static TINY_BLOB: TinyBlobHandler = TinyBlobHandler;
pub static BLOB: BlobHandler = BlobHandler;
pub static MEDIUM_BLOB: MediumBlobHandler = MediumBlobHandler;
pub static LONG_BLOB: LongBlobHandler = LongBlobHandler;
pub static ENUM: EnumHandler = EnumHandler;
pub static SET: SetHandler = SetHandler;

/// Declared length and dictionary of an enumerated target column.
///
/// The dictionary travels with the local schema, never with the replicated
/// descriptor, so conversion always borrows it from the target. A
/// non-enumerated target is a dispatch bug.
fn target_dictionary(target: &Field) -> (u32, Arc<TypeLib>) {
    match &target.layout {
        FieldLayout::Enum { length, values, .. } | FieldLayout::Set { length, values, .. } => {
            (*length, Arc::clone(values))
        }
        other => {
            debug_assert!(false, "enumerated conversion against {:?} target", other);
            (0, Arc::new(TypeLib::new(Vec::new())))
        }
    }
}

/// Column that only holds NULL
#[derive(Debug)]
pub struct NullHandler;

impl TypeHandler for NullHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Null
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
            FieldLayout::Null,
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        Some(alloc_conversion_field(arena, target.charset, FieldLayout::Null))
    }
}

/// Fixed-length character string
#[derive(Debug)]
pub struct CharHandler;

impl TypeHandler for CharHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Char
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
            FieldLayout::Char {
                length: attrs.length,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        Some(alloc_conversion_field(
            arena,
            target.charset,
            FieldLayout::Char {
                length: metadata::char_length(metadata),
            },
        ))
    }
}

/// Variable-length character string
#[derive(Debug)]
pub struct VarcharHandler;

impl TypeHandler for VarcharHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Varchar
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
            FieldLayout::Varchar {
                length: attrs.length,
                length_prefix: metadata::varchar_length_prefix(attrs.length),
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        // The descriptor is the octet length itself.
        Some(alloc_conversion_field(
            arena,
            target.charset,
            FieldLayout::Varchar {
                length: metadata,
                length_prefix: metadata::varchar_length_prefix(metadata),
            },
        ))
    }
}

fn make_blob_table_field(
    arena: &mut FieldArena,
    field_name: &str,
    location: StoreLocation,
    attrs: &CreateAttributes,
    length_prefix: u8,
) -> FieldHandle {
    arena.alloc(Field::stored(
        field_name,
        location,
        attrs.charset,
        attrs.default_policy,
        FieldLayout::Blob { length_prefix },
    ))
}

fn make_blob_conversion_field(
    arena: &mut FieldArena,
    target: &Field,
    length_prefix: u8,
) -> Option<FieldHandle> {
    Some(alloc_conversion_field(
        arena,
        target.charset,
        FieldLayout::Blob { length_prefix },
    ))
}

/// Large object, 1-byte length prefix
#[derive(Debug)]
pub struct TinyBlobHandler;

impl TypeHandler for TinyBlobHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::TinyBlob
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        make_blob_table_field(arena, field_name, location, attrs, 1)
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        make_blob_conversion_field(arena, target, 1)
    }
}

/// Large object, 2-byte length prefix
#[derive(Debug)]
pub struct BlobHandler;

impl TypeHandler for BlobHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Blob
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        make_blob_table_field(arena, field_name, location, attrs, 2)
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        make_blob_conversion_field(arena, target, 2)
    }
}

/// Large object, 3-byte length prefix
#[derive(Debug)]
pub struct MediumBlobHandler;

impl TypeHandler for MediumBlobHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::MediumBlob
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        make_blob_table_field(arena, field_name, location, attrs, 3)
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        make_blob_conversion_field(arena, target, 3)
    }
}

/// Large object, 4-byte length prefix
#[derive(Debug)]
pub struct LongBlobHandler;

impl TypeHandler for LongBlobHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::LongBlob
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        make_blob_table_field(arena, field_name, location, attrs, 4)
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        _metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        make_blob_conversion_field(arena, target, 4)
    }
}

/// Enumerated value
#[derive(Debug)]
pub struct EnumHandler;

impl TypeHandler for EnumHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Char
    }

    fn real_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Enum
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        debug_assert!(attrs.type_values.is_some(), "enum column without a dictionary");
        let values = attrs
            .type_values
            .clone()
            .unwrap_or_else(|| Arc::new(TypeLib::new(Vec::new())));
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::Enum {
                length: attrs.length,
                storage_width: values.enum_storage_width(),
                values,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        let (length, values) = target_dictionary(target);
        Some(alloc_conversion_field(
            arena,
            target.charset,
            FieldLayout::Enum {
                length,
                storage_width: metadata::elt_storage_width(metadata),
                values,
            },
        ))
    }
}

/// Multi-valued set
#[derive(Debug)]
pub struct SetHandler;

impl TypeHandler for SetHandler {
    fn field_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Char
    }

    fn real_type_code(&self) -> FieldTypeCode {
        FieldTypeCode::Set
    }

    fn make_table_field(
        &self,
        arena: &mut FieldArena,
        field_name: &str,
        location: StoreLocation,
        attrs: &CreateAttributes,
    ) -> FieldHandle {
        debug_assert!(attrs.type_values.is_some(), "set column without a dictionary");
        let values = attrs
            .type_values
            .clone()
            .unwrap_or_else(|| Arc::new(TypeLib::new(Vec::new())));
        arena.alloc(Field::stored(
            field_name,
            location,
            attrs.charset,
            attrs.default_policy,
            FieldLayout::Set {
                length: attrs.length,
                storage_width: values.set_storage_width(),
                values,
            },
        ))
    }

    fn make_conversion_table_field(
        &self,
        arena: &mut FieldArena,
        _share: &TableShare,
        metadata: u32,
        target: &Field,
    ) -> Option<FieldHandle> {
        let (length, values) = target_dictionary(target);
        Some(alloc_conversion_field(
            arena,
            target.charset,
            FieldLayout::Set {
                length,
                storage_width: metadata::elt_storage_width(metadata),
                values,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::charset;

    fn share() -> TableShare {
        TableShare::new("db", "t")
    }

    #[test]
    fn test_char_conversion_decodes_two_region_length() {
        let target = Field::scratch(
            "c",
            true,
            &charset::UTF8MB4,
            FieldLayout::Char { length: 130 },
        );
        let mut arena = FieldArena::new();
        let h = CHAR
            .make_conversion_table_field(
                &mut arena,
                &share(),
                metadata::pack_char_metadata(130),
                &target,
            )
            .unwrap();
        let f = arena.field(h);
        assert_eq!(f.field_length(), 130);
        // Conversion strings inherit the target charset.
        assert_eq!(f.charset, &charset::UTF8MB4);
    }

    #[test]
    fn test_varchar_conversion_length_is_metadata() {
        let target = Field::scratch(
            "c",
            true,
            &charset::LATIN1,
            FieldLayout::Varchar {
                length: 300,
                length_prefix: 2,
            },
        );
        let mut arena = FieldArena::new();

        let h = VARCHAR
            .make_conversion_table_field(&mut arena, &share(), 40, &target)
            .unwrap();
        match arena.field(h).layout {
            FieldLayout::Varchar {
                length,
                length_prefix,
            } => {
                assert_eq!(length, 40);
                assert_eq!(length_prefix, 1);
            }
            ref other => panic!("expected varchar layout, got {:?}", other),
        }

        let h = VARCHAR
            .make_conversion_table_field(&mut arena, &share(), 300, &target)
            .unwrap();
        match arena.field(h).layout {
            FieldLayout::Varchar { length_prefix, .. } => assert_eq!(length_prefix, 2),
            ref other => panic!("expected varchar layout, got {:?}", other),
        }
    }

    #[test]
    fn test_blob_tier_prefix_widths() {
        let target = Field::scratch(
            "c",
            true,
            &charset::BINARY,
            FieldLayout::Blob { length_prefix: 2 },
        );
        let mut arena = FieldArena::new();
        let tiers: [(&dyn TypeHandler, u8, FieldTypeCode); 4] = [
            (&TINY_BLOB, 1, FieldTypeCode::TinyBlob),
            (&BLOB, 2, FieldTypeCode::Blob),
            (&MEDIUM_BLOB, 3, FieldTypeCode::MediumBlob),
            (&LONG_BLOB, 4, FieldTypeCode::LongBlob),
        ];
        for (handler, prefix, code) in tiers {
            let h = handler
                .make_conversion_table_field(&mut arena, &share(), 0, &target)
                .unwrap();
            match arena.field(h).layout {
                FieldLayout::Blob { length_prefix } => assert_eq!(length_prefix, prefix),
                ref other => panic!("expected blob layout, got {:?}", other),
            }
            assert_eq!(arena.field(h).field_type_code(), code);
        }
    }

    #[test]
    fn test_enum_conversion_borrows_target_dictionary() {
        let values = Arc::new(TypeLib::new(vec!["red".into(), "green".into(), "blue".into()]));
        let target = Field::scratch(
            "color",
            true,
            &charset::LATIN1,
            FieldLayout::Enum {
                length: 5,
                storage_width: 1,
                values: Arc::clone(&values),
            },
        );
        let mut arena = FieldArena::new();
        let h = ENUM
            .make_conversion_table_field(&mut arena, &share(), 0x0001, &target)
            .unwrap();
        match &arena.field(h).layout {
            FieldLayout::Enum {
                length,
                storage_width,
                values: converted,
            } => {
                assert_eq!(*length, 5);
                assert_eq!(*storage_width, 1);
                assert_eq!(converted.values(), values.values());
            }
            other => panic!("expected enum layout, got {:?}", other),
        }
        assert_eq!(arena.field(h).real_type_code(), FieldTypeCode::Enum);
    }

    #[test]
    fn test_set_table_field_storage_width() {
        let mut arena = FieldArena::new();
        let mut attrs = CreateAttributes::new(20, &charset::LATIN1);
        attrs.type_values = Some(Arc::new(TypeLib::new(
            (0..9).map(|i| format!("opt{}", i)).collect(),
        )));
        let h = SET.make_table_field(&mut arena, "opts", StoreLocation::not_null(0), &attrs);
        match arena.field(h).layout {
            FieldLayout::Set { storage_width, .. } => assert_eq!(storage_width, 2),
            ref other => panic!("expected set layout, got {:?}", other),
        }
        assert_eq!(arena.field(h).field_type_code(), FieldTypeCode::Char);
    }

    #[test]
    fn test_null_conversion_inherits_target_charset() {
        let target = Field::scratch(
            "c",
            true,
            &charset::UTF8MB4,
            FieldLayout::Char { length: 1 },
        );
        let mut arena = FieldArena::new();
        let h = NULL_TYPE
            .make_conversion_table_field(&mut arena, &share(), 0, &target)
            .unwrap();
        assert_eq!(arena.field(h).charset, &charset::UTF8MB4);
        assert_eq!(arena.field(h).field_length(), 0);
    }
}
