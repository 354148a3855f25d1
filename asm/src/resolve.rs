use crate::{
    parser::Stmt,
    symbol::{Symbol, SymbolTable},
};

/// Label declaration that lost to an earlier definition of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redefined {
    pub idx: usize,
    pub name: String,
    pub prev: Symbol,
}

#[derive(Debug, Clone)]
pub struct Labels {
    pub symbols: SymbolTable,
    /// Number of address and compute instructions
    pub count: u32,
    pub redefined: Vec<Redefined>,
}

/// First pass: bind every label to the index of the instruction that follows it.
/// `stmts` pairs each statement with its 0-based source line.
pub fn collect_labels(stmts: &[(usize, Stmt)]) -> Labels {
    let mut symbols = SymbolTable::new();
    let mut redefined = vec![];
    let mut pc: u32 = 0;
    for (idx, stmt) in stmts {
        match stmt {
            Stmt::Label(name) => {
                if let Some(prev) = symbols.define_label(name, pc, *idx) {
                    redefined.push(Redefined {
                        idx: *idx,
                        name: name.clone(),
                        prev,
                    });
                }
            }
            _ => pc += 1,
        }
    }
    Labels {
        symbols,
        count: pc,
        redefined,
    }
}
