use crate::{comp::Comp, dest::Dest, jump::Jump};

use color_print::cformat;

/// Largest address an A-instruction can load.
pub const ADDR_MAX: u16 = 0x7FFF;

const C_PREFIX: u16 = 0b111 << 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    A(u16),
    C {
        dest: Option<Dest>,
        comp: Comp,
        jump: Option<Jump>,
    },
}

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::A(addr) => addr & ADDR_MAX,
            Inst::C { dest, comp, jump } => {
                C_PREFIX
                    | (comp.bits() << 6)
                    | (dest.map_or(0, Dest::bits) << 3)
                    | jump.map_or(0, Jump::bits)
            }
        }
    }

    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin & 0x8000 == 0 {
            return Some(Inst::A(bin));
        }
        if bin & C_PREFIX != C_PREFIX {
            return None;
        }
        let comp = Comp::try_from(((bin >> 6) & 0x7F) as u8).ok()?;
        let dest = match (bin >> 3) & 0x7 {
            0 => None,
            d => Some(Dest::try_from(d as u8).ok()?),
        };
        let jump = match bin & 0x7 {
            0 => None,
            j => Some(Jump::try_from(j as u8).ok()?),
        };
        Some(Inst::C { dest, comp, jump })
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(addr) => cformat!("<r>@</><y>{}</>", addr),
            Inst::C { dest, comp, jump } => {
                let dest = match dest {
                    Some(d) => cformat!("<b>{}</>=", d),
                    None => String::new(),
                };
                let jump = match jump {
                    Some(j) => cformat!(";<r>{}</>", j),
                    None => String::new(),
                };
                format!("{}{}{}", dest, comp, jump)
            }
        }
    }
}
