use std::fmt;

use crate::types::Bitfield;

/// A decoded register payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    I16(i16),
    U32(u32),
    F32(f32),
    Flags(FlagSet),
    Bytes(Vec<u8>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::Flags(flags) => fmt::Display::fmt(flags, f),
            Self::Bytes(bytes) => {
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

/// The decoded state of one bitfield register: which named flags are set.
///
/// Bits beyond the declared flags are kept in [`bits`](Self::bits) but do
/// not appear in iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSet {
    field: &'static Bitfield,
    bits: u32,
}

impl FlagSet {
    pub fn new(field: &'static Bitfield, bits: u32) -> Self {
        Self { field, bits }
    }

    /// The bitfield this set was decoded against.
    pub fn field(&self) -> &'static Bitfield {
        self.field
    }

    /// Raw accumulated bits, including any undeclared high bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Look up one flag by name. `None` for names the bitfield does not
    /// declare.
    pub fn get(&self, flag: &str) -> Option<bool> {
        let index = self.field.flags().iter().position(|&name| name == flag)?;
        Some(self.bits >> index & 1 == 1)
    }

    /// All declared flags with their states, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.field
            .flags()
            .iter()
            .enumerate()
            .map(|(index, &name)| (name, self.bits >> index & 1 == 1))
    }

    /// Names of the flags currently set, in declaration order.
    pub fn set_flags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().filter(|&(_, set)| set).map(|(name, _)| name)
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut any = false;
        for name in self.set_flags() {
            if any {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            any = true;
        }
        if !any {
            f.write_str("(none)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static STATUS: Bitfield = Bitfield::new("status", &["alive", "armed", "faulted"]);

    #[test]
    fn get_by_name() {
        let flags = FlagSet::new(&STATUS, 0b101);
        assert_eq!(flags.get("alive"), Some(true));
        assert_eq!(flags.get("armed"), Some(false));
        assert_eq!(flags.get("faulted"), Some(true));
        assert_eq!(flags.get("missing"), None);
    }

    #[test]
    fn iter_preserves_declaration_order() {
        let flags = FlagSet::new(&STATUS, 0b011);
        let collected: Vec<_> = flags.iter().collect();
        assert_eq!(
            collected,
            vec![("alive", true), ("armed", true), ("faulted", false)]
        );
    }

    #[test]
    fn undeclared_high_bits_kept_out_of_iteration() {
        let flags = FlagSet::new(&STATUS, 0xFF);
        assert_eq!(flags.bits(), 0xFF);
        assert_eq!(flags.iter().count(), 3);
    }

    #[test]
    fn display_set_flags() {
        assert_eq!(FlagSet::new(&STATUS, 0b101).to_string(), "alive|faulted");
        assert_eq!(FlagSet::new(&STATUS, 0).to_string(), "(none)");
    }

    #[test]
    fn display_values() {
        assert_eq!(Value::U16(4660).to_string(), "4660");
        assert_eq!(Value::I16(-10).to_string(), "-10");
        assert_eq!(Value::F32(3.3).to_string(), "3.3");
        assert_eq!(Value::Bytes(vec![0x1A, 0x2B]).to_string(), "1a 2b");
        assert_eq!(Value::Bytes(vec![]).to_string(), "");
    }
}
