use arch::inst::Inst;

use crate::{
    encode::{self, to_bits},
    error::LineError,
    line::Line,
    parser::Stmt,
    resolve::{self, Redefined},
    symbol::SymbolTable,
};

/// Result of a complete assembly run.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub lines: Vec<Line>,
    /// Decomposed statement per source line, `None` for blank and comment lines
    pub stmts: Vec<Option<Stmt>>,
    /// Machine instruction per source line, `None` for lines that emit no word
    pub insts: Vec<Option<Inst>>,
    pub words: Vec<u16>,
    pub symbols: SymbolTable,
    pub redefined: Vec<Redefined>,
}

impl Assembly {
    /// One line of 16 `0`/`1` characters per word, each newline-terminated.
    pub fn to_hack(&self) -> String {
        self.words
            .iter()
            .map(|word| to_bits(*word) + "\n")
            .collect()
    }
}

/// Assemble a whole program. Fails on the first bad line without producing any words.
pub fn assemble(source: &str) -> Result<Assembly, LineError> {
    let lines: Vec<Line> = source
        .lines()
        .enumerate()
        .map(|(idx, raw)| Line::new(idx, raw))
        .collect();

    // Decompose every instruction once
    let mut stmts = Vec::with_capacity(lines.len());
    for line in &lines {
        let stmt = match line.code() {
            Some(code) => Some(Stmt::parse(code).map_err(|error| fail(line, error))?),
            None => None,
        };
        stmts.push(stmt);
    }

    // Pass 1
    let numbered: Vec<(usize, Stmt)> = stmts
        .iter()
        .enumerate()
        .filter_map(|(idx, stmt)| stmt.clone().map(|stmt| (idx, stmt)))
        .collect();
    let resolve::Labels {
        mut symbols,
        count,
        redefined,
    } = resolve::collect_labels(&numbered);

    // Pass 2
    let mut insts = vec![None; lines.len()];
    let mut words = Vec::with_capacity(count as usize);
    for (idx, stmt) in &numbered {
        let inst = encode::resolve(stmt, &mut symbols, *idx).map_err(|error| fail(&lines[*idx], error))?;
        if let Some(inst) = inst {
            words.push(inst.to_bin());
        }
        insts[*idx] = inst;
    }

    Ok(Assembly {
        lines,
        stmts,
        insts,
        words,
        symbols,
        redefined,
    })
}

fn fail(line: &Line, error: crate::error::Error) -> LineError {
    LineError {
        idx: line.idx(),
        raw: line.raw().to_string(),
        error,
    }
}
