use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;

pub const SCREEN: u16 = 0x4000;
pub const KBD: u16 = 0x6000;

/// Aliases present before any user symbol is defined.
pub static PREDEFINED: Lazy<IndexMap<String, u16>> = Lazy::new(|| {
    let mut map = IndexMap::new();
    for (name, addr) in [("SP", 0), ("LCL", 1), ("ARG", 2), ("THIS", 3), ("THAT", 4)] {
        map.insert(name.to_string(), addr);
    }
    for n in 0..16 {
        map.insert(format!("R{}", n), n);
    }
    map.insert("SCREEN".to_string(), SCREEN);
    map.insert("KBD".to_string(), KBD);
    map
});

#[test]
fn test_predefined() {
    assert_eq!(PREDEFINED.len(), 23);
    assert_eq!(PREDEFINED.get("SP"), Some(&0));
    assert_eq!(PREDEFINED.get("THAT"), Some(&4));
    assert_eq!(PREDEFINED.get("R0"), Some(&0));
    assert_eq!(PREDEFINED.get("R15"), Some(&15));
    assert_eq!(PREDEFINED.get("SCREEN"), Some(&16384));
    assert_eq!(PREDEFINED.get("KBD"), Some(&24576));
    assert_eq!(PREDEFINED.get("r1"), None);
    assert_eq!(PREDEFINED.get("R16"), None);
}
