use arch::{
    comp::Comp,
    dest::Dest,
    inst::{Inst, ADDR_MAX},
    jump::Jump,
};

use crate::{
    error::Error,
    parser::{Operand, Stmt},
    symbol::SymbolTable,
};

/// Second pass step: turn one statement into a machine instruction.
/// Unseen symbols are bound as variables; labels yield nothing.
pub fn resolve(stmt: &Stmt, symbols: &mut SymbolTable, idx: usize) -> Result<Option<Inst>, Error> {
    match stmt {
        Stmt::Address(operand) => {
            let addr = match operand {
                Operand::Literal(v) => *v,
                Operand::Symbol(name) => symbols.resolve_or_allocate(name, idx),
            };
            if addr > ADDR_MAX as u32 {
                return Err(Error::AddressOutOfRange(addr.to_string()));
            }
            Ok(Some(Inst::A(addr as u16)))
        }
        Stmt::Compute { dest, comp, jump } => {
            let comp = Comp::parse(comp).ok_or_else(|| unknown("comp", comp))?;
            let dest = match dest {
                Some(d) => Some(Dest::parse(d).ok_or_else(|| unknown("dest", d))?),
                None => None,
            };
            let jump = match jump {
                Some(j) => Some(Jump::parse(j).ok_or_else(|| unknown("jump", j))?),
                None => None,
            };
            Ok(Some(Inst::C { dest, comp, jump }))
        }
        Stmt::Label(name) => match symbols.get_val(name) {
            Some(_) => Ok(None),
            None => Err(Error::UndefinedSymbolReference(name.clone())),
        },
    }
}

fn unknown(field: &'static str, mnemonic: &str) -> Error {
    Error::UnknownMnemonic {
        field,
        mnemonic: mnemonic.to_string(),
    }
}

pub fn encode(stmt: &Stmt, symbols: &mut SymbolTable, idx: usize) -> Result<Option<u16>, Error> {
    Ok(resolve(stmt, symbols, idx)?.map(|inst| inst.to_bin()))
}

/// 16 characters of `0`/`1`, most significant bit first.
pub fn to_bits(word: u16) -> String {
    format!("{:016b}", word)
}
