use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Destination field (bits 5-3). Each bit gates one store: `A`, `D`, `M`.
/// "No destination" is the absence of a value and encodes to `000`.
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
pub enum Dest {
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
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
            ("M", 0b001),
            ("D", 0b010),
            ("MD", 0b011),
            ("A", 0b100),
            ("AM", 0b101),
            ("AD", 0b110),
            ("AMD", 0b111),
        ];
        for (mnemonic, bits) in expects {
            assert_eq!(Dest::parse(mnemonic).map(Dest::bits), Some(bits));
        }
        assert_eq!(Dest::iter().count(), expects.len());
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(Dest::parse("md"), None);
        assert_eq!(Dest::parse("DM"), None);
        assert_eq!(Dest::parse("null"), None);
    }
}
