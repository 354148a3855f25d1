use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Jump field (bits 2-0): `j1 j2 j3` test `out < 0`, `out == 0`, `out > 0`.
/// "Never jump" is the absence of a value and encodes to `000`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_bits() {
        let expects = [
            ("JGT", 0b001),
            ("JEQ", 0b010),
            ("JGE", 0b011),
            ("JLT", 0b100),
            ("JNE", 0b101),
            ("JLE", 0b110),
            ("JMP", 0b111),
        ];
        for (mnemonic, bits) in expects {
            assert_eq!(Jump::parse(mnemonic).map(Jump::bits), Some(bits));
        }
        assert_eq!(Jump::iter().count(), expects.len());
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(Jump::parse("jmp"), None);
        assert_eq!(Jump::parse("JMP "), None);
    }
}
