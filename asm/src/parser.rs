use crate::error::Error;

pub const ADDR_PREFIX: char = '@';
pub const LABEL_OPEN: char = '(';
pub const LABEL_CLOSE: char = ')';
pub const DEST_SEP: char = '=';
pub const JUMP_SEP: char = ';';

// ----------------------------------------------------------------------------
// Classification

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Address,
    Compute,
    Label,
}

/// Classify a normalized, non-empty line by its first character.
pub fn classify(code: &str) -> Kind {
    match code.chars().next() {
        Some(ADDR_PREFIX) => Kind::Address,
        Some(LABEL_OPEN) => Kind::Label,
        _ => Kind::Compute,
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Address(Operand),
    Compute {
        dest: Option<String>,
        comp: String,
        jump: Option<String>,
    },
    Label(String),
}

impl Stmt {
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        let malformed = || Error::MalformedInstruction(code.to_string());
        match classify(code) {
            Kind::Address => {
                let operand = &code[ADDR_PREFIX.len_utf8()..];
                if operand.is_empty() {
                    return Err(malformed());
                }
                Ok(Stmt::Address(Operand::parse(operand)?))
            }
            Kind::Label => {
                let symbol = code
                    .strip_prefix(LABEL_OPEN)
                    .and_then(|s| s.strip_suffix(LABEL_CLOSE))
                    .ok_or_else(malformed)?;
                if symbol.is_empty() {
                    return Err(malformed());
                }
                Ok(Stmt::Label(symbol.to_string()))
            }
            Kind::Compute => {
                let (dest, rest) = match code.split_once(DEST_SEP) {
                    Some((dest, rest)) => (non_empty(dest), rest),
                    None => (None, code),
                };
                let (comp, jump) = match rest.split_once(JUMP_SEP) {
                    Some((comp, jump)) => (comp, non_empty(jump)),
                    None => (rest, None),
                };
                if comp.is_empty() {
                    return Err(malformed());
                }
                Ok(Stmt::Compute {
                    dest,
                    comp: comp.to_string(),
                    jump,
                })
            }
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Stmt::Address(_) => Kind::Address,
            Stmt::Compute { .. } => Kind::Compute,
            Stmt::Label(_) => Kind::Label,
        }
    }

    /// Whether the statement occupies a slot in instruction memory.
    pub fn is_inst(&self) -> bool {
        !matches!(self, Stmt::Label(_))
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

// ----------------------------------------------------------------------------
// Field access

impl Stmt {
    pub fn dest(&self) -> Result<Option<&str>, Error> {
        match self {
            Stmt::Compute { dest, .. } => Ok(dest.as_deref()),
            _ => Err(Error::InvalidInstructionKind("dest requires a compute instruction")),
        }
    }

    pub fn comp(&self) -> Result<&str, Error> {
        match self {
            Stmt::Compute { comp, .. } => Ok(comp),
            _ => Err(Error::InvalidInstructionKind("comp requires a compute instruction")),
        }
    }

    pub fn jump(&self) -> Result<Option<&str>, Error> {
        match self {
            Stmt::Compute { jump, .. } => Ok(jump.as_deref()),
            _ => Err(Error::InvalidInstructionKind("jump requires a compute instruction")),
        }
    }

    /// Symbol or literal text of an address or label statement.
    pub fn symbol(&self) -> Result<String, Error> {
        match self {
            Stmt::Address(operand) => Ok(operand.to_string()),
            Stmt::Label(symbol) => Ok(symbol.clone()),
            Stmt::Compute { .. } => Err(Error::InvalidInstructionKind(
                "symbol requires an address or label instruction",
            )),
        }
    }
}

// ----------------------------------------------------------------------------
// Operand

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(u32),
    Symbol(String),
}

impl Operand {
    fn parse(s: &str) -> Result<Operand, Error> {
        if s.bytes().all(|b| b.is_ascii_digit()) {
            s.parse::<u32>()
                .map(Operand::Literal)
                .map_err(|_| Error::AddressOutOfRange(s.to_string()))
        } else {
            Ok(Operand::Symbol(s.to_string()))
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Literal(v) => write!(f, "{}", v),
            Operand::Symbol(s) => write!(f, "{}", s),
        }
    }
}
