//! Arena hosting for constructed fields
//!
//! Every construction protocol allocates its result into a caller-owned
//! [`FieldArena`] and hands back a [`FieldHandle`]. The dispatch layer never
//! retains a handle after returning it; the arena's scope governs the
//! lifetime of everything allocated into it.

use crate::types::field::Field;

/// Handle to a field hosted in a [`FieldArena`].
///
/// A handle is only meaningful for the arena that produced it and is
/// invalidated by [`FieldArena::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldHandle(u32);

impl FieldHandle {
    /// Position of the field inside its arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Caller-owned arena that hosts constructed fields
#[derive(Debug, Default)]
pub struct FieldArena {
    fields: Vec<Field>,
}

impl FieldArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Move a field into the arena, returning its handle
    pub fn alloc(&mut self, field: Field) -> FieldHandle {
        let handle = FieldHandle(self.fields.len() as u32);
        self.fields.push(field);
        handle
    }

    /// Borrow a hosted field
    pub fn field(&self, handle: FieldHandle) -> &Field {
        &self.fields[handle.index()]
    }

    /// Borrow a hosted field mutably
    pub fn field_mut(&mut self, handle: FieldHandle) -> &mut Field {
        &mut self.fields[handle.index()]
    }

    /// Number of fields hosted
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the arena is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drop every hosted field. Outstanding handles are invalidated.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
