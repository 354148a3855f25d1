use arch::inst::Inst;
use color_print::cformat;

use crate::{
    assemble::Assembly,
    encode::to_bits,
    parser::Stmt,
    symbol::SymbolKind,
};

const RULE: &str = "+------+------+------------------+------------------------------";

/// Render one source line: `| line | pc | bits | statement ;comment`.
pub fn cformat_line(asm: &Assembly, idx: usize, pc: Option<u32>) -> String {
    let line = &asm.lines[idx];

    let pc = match pc {
        Some(pc) => cformat!("<green>{:0>4X}</>", pc),
        None => " ".repeat(4),
    };

    let (bits, stmt) = match (&asm.stmts[idx], asm.insts[idx]) {
        (Some(Stmt::Label(name)), _) => {
            let addr = asm.symbols.get_val(name).unwrap_or_default();
            (" ".repeat(16), cformat!("<green>({}) = {:04X}</>", name, addr))
        }
        (Some(_), Some(inst)) => {
            let bin = inst.to_bin();
            // shown as decoded from the emitted word
            let shown = Inst::from_bin(bin).unwrap_or(inst);
            (to_bits(bin), shown.cformat())
        }
        _ => (" ".repeat(16), String::new()),
    };

    let comment = match line.comment() {
        Some(s) => cformat!(" <blue>//{}</>", s),
        None => String::new(),
    };

    format!("| {:>4} | {} | {} | {}{}", line.no(), pc, bits, stmt, comment)
}

pub fn print_dump(path: &str, asm: &Assembly) {
    println!("{}", RULE);
    println!("| {:<60} |", path);
    println!("{}", RULE);
    let mut pc: u32 = 0;
    for idx in 0..asm.lines.len() {
        let inst_pc = match &asm.stmts[idx] {
            Some(stmt) if stmt.is_inst() => {
                pc += 1;
                Some(pc - 1)
            }
            _ => None,
        };
        println!("{}", cformat_line(asm, idx, inst_pc));
    }
    println!("{}", RULE);
}

pub fn print_symbols(asm: &Assembly) {
    for (name, symbol) in asm.symbols.iter() {
        let kind = match symbol.kind {
            SymbolKind::Predefined => continue,
            SymbolKind::Label => cformat!("<green>label   </>"),
            SymbolKind::Variable => cformat!("<cyan>variable</>"),
        };
        println!("  {} {:0>4X} {}", kind, symbol.addr, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble;

    #[test]
    fn test_cformat_line() {
        let asm = assemble("(LOOP)\n@LOOP // back\n0;JMP\n").unwrap();
        let label = cformat_line(&asm, 0, None);
        assert!(label.contains("(LOOP) = 0000"));
        let addr = cformat_line(&asm, 1, Some(0));
        assert!(addr.contains("0000000000000000"));
        assert!(addr.contains("// back"));
        let jump = cformat_line(&asm, 2, Some(1));
        assert!(jump.contains("1110101010000111"));
        assert!(jump.contains("JMP"));
    }
}
