use crate::error::RegisterError;
use crate::record::{DecodedRecord, Message, Reading};
use crate::types::RegisterType;

/// One catalog row: the field a register id stands for and how to decode it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterEntry {
    pub name: &'static str,
    pub ty: RegisterType,
}

/// An immutable register catalog for one node class.
///
/// Entries are a `static` table sorted by register id; lookups are a binary
/// search. The tile and master catalogs are independent namespaces; the
/// same id may mean different fields on each.
#[derive(Debug)]
pub struct RegisterMap {
    name: &'static str,
    entries: &'static [(u8, RegisterEntry)],
}

impl RegisterMap {
    /// Build a map over a sorted entry table.
    ///
    /// Panics at compile time (when used in a `static`) if ids are not
    /// strictly ascending, which also rules out duplicates.
    pub const fn new(name: &'static str, entries: &'static [(u8, RegisterEntry)]) -> Self {
        let mut i = 1;
        while i < entries.len() {
            assert!(
                entries[i - 1].0 < entries[i].0,
                "register ids must be strictly ascending"
            );
            i += 1;
        }
        Self { name, entries }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the catalog entry for a register id.
    pub fn get(&self, register: u8) -> Option<&'static RegisterEntry> {
        self.entries
            .binary_search_by_key(&register, |&(id, _)| id)
            .ok()
            .map(|index| &self.entries[index].1)
    }

    /// All entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static RegisterEntry)> {
        self.entries.iter().map(|&(id, ref entry)| (id, entry))
    }

    /// Decode one unstuffed frame against this catalog.
    ///
    /// `None` for frames under two bytes; otherwise always a record, with a
    /// per-register error inside when the id is unknown or the payload is
    /// shorter than its type requires.
    pub fn decode(&self, frame: &[u8]) -> Option<DecodedRecord> {
        Message::parse(frame).map(|message| self.decode_message(message))
    }

    /// Decode an already split message against this catalog.
    pub fn decode_message(&self, message: Message<'_>) -> DecodedRecord {
        let result = match self.get(message.register) {
            Some(entry) => entry.ty.decode(message.payload).map(|value| Reading {
                name: entry.name,
                value,
            }),
            None => Err(RegisterError::UnknownRegister {
                register: message.register,
            }),
        };
        DecodedRecord {
            register: message.register,
            result,
        }
    }
}
