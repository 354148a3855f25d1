use hackasm::{assemble, symbol::SymbolKind};

const MAX_ASM: &str = include_str!("data/Max.asm");
const MAX_HACK: &str = include_str!("data/Max.hack");
const SUM_ASM: &str = include_str!("data/Sum.asm");

#[test]
fn test_max() {
    let asm = assemble(MAX_ASM).unwrap();
    assert_eq!(asm.to_hack(), MAX_HACK);

    let labels: Vec<_> = asm.symbols.labels().collect();
    assert_eq!(
        labels,
        vec![("OUTPUT_FIRST", 10), ("OUTPUT_D", 12), ("INFINITE_LOOP", 14)]
    );
    assert_eq!(asm.symbols.variables().count(), 0);
}

#[test]
fn test_sum_variables_and_labels() {
    let asm = assemble(SUM_ASM).unwrap();
    assert_eq!(asm.words.len(), 20);

    let vars: Vec<_> = asm.symbols.variables().collect();
    assert_eq!(vars, vec![("i", 16), ("sum", 17)]);
    assert_eq!(asm.symbols.get_val("LOOP"), Some(4));
    assert_eq!(asm.symbols.get_val("END"), Some(18));

    assert_eq!(asm.words[0], 16); // @i
    assert_eq!(asm.words[2], 17); // @sum
    assert_eq!(asm.words[8], 18); // @END
    assert_eq!(asm.words[12], 17); // @sum
    assert_eq!(asm.words[16], 4); // @LOOP
    assert_eq!(asm.words[18], 18); // @END
}

#[test]
fn test_add_scenario() {
    let asm = assemble("@2\nD=A\n@3\nD=D+A\n@0\nM=D").unwrap();
    assert_eq!(asm.words.len(), 6);
    assert_eq!(asm.symbols.labels().count(), 0);
    assert_eq!(asm.symbols.variables().count(), 0);
    for (i, word) in asm.words.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(word >> 15, 0, "word {} should load an address", i + 1);
        } else {
            assert_eq!(word >> 13, 0b111, "word {} should be a compute", i + 1);
        }
    }
    assert_eq!(asm.words[0], 2);
    assert_eq!(asm.words[2], 3);
    assert_eq!(asm.words[4], 0);
}

#[test]
fn test_self_referencing_label() {
    let asm = assemble("(LOOP)\n@LOOP\n0;JMP\n").unwrap();
    assert_eq!(asm.words, vec![0, 0b1110101010000111]);
}

#[test]
fn test_forward_reference_is_label_not_variable() {
    let asm = assemble("@END\n0;JMP\n@x\n(END)\n@END\n").unwrap();
    assert_eq!(asm.words[0], 3);
    assert_eq!(asm.words[2], 16);
    assert_eq!(asm.words[3], 3);
    assert_eq!(asm.symbols.get("END").map(|s| s.kind), Some(SymbolKind::Label));
    assert_eq!(asm.symbols.get("x").map(|s| s.kind), Some(SymbolKind::Variable));
}

#[test]
fn test_variables_in_first_seen_order() {
    let asm = assemble("@c\n@a\n@b\n@a\n@c\n@R5\n@d\n").unwrap();
    assert_eq!(asm.words, vec![16, 17, 18, 17, 16, 5, 19]);
}

#[test]
fn test_numeric_literal_bypasses_symbols() {
    let asm = assemble("@16\n@v\n@16\n").unwrap();
    assert_eq!(asm.words, vec![16, 16, 16]);
    assert_eq!(asm.symbols.get_val("16"), None);
    assert_eq!(asm.symbols.get_val("v"), Some(16));
}

#[test]
fn test_duplicate_label_first_wins() {
    let asm = assemble("(X)\n@1\n(X)\n@X\n").unwrap();
    assert_eq!(asm.words, vec![1, 0]);
    assert_eq!(asm.redefined.len(), 1);
    assert_eq!(asm.redefined[0].idx, 2);
}

#[test]
fn test_predefined_cannot_be_redefined() {
    let asm = assemble("@0\n(R1)\n@R1\n").unwrap();
    assert_eq!(asm.words, vec![0, 1]);
    assert_eq!(asm.redefined[0].prev.kind, SymbolKind::Predefined);
}

#[test]
fn test_idempotent() {
    let first = assemble(SUM_ASM).unwrap().to_hack();
    let second = assemble(SUM_ASM).unwrap().to_hack();
    assert_eq!(first, second);
}

#[test]
fn test_stateless_without_symbols() {
    let program = ["@7", "D=A", "@12", "AM=M+1;JNE", "0;JMP"];
    let whole = assemble(&program.join("\n")).unwrap().words;
    let single: Vec<u16> = program
        .iter()
        .map(|code| assemble(code).unwrap().words[0])
        .collect();
    assert_eq!(whole, single);
}

#[test]
fn test_address_boundary() {
    assert_eq!(assemble("@32767").unwrap().to_hack(), "0111111111111111\n");
    let err = assemble("@1\n@32768\n").unwrap_err();
    assert_eq!(err.idx, 1);
    assert!(matches!(err.error, hackasm::Error::AddressOutOfRange(_)));
}

#[test]
fn test_failure_produces_no_words() {
    let result = assemble("@1\nD=A\n@2\nD=X\n@3\n");
    assert!(result.is_err());
}
