use arch::symbol::{PREDEFINED, VAR_BASE};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub addr: u32,
    /// Source line (0-based) that introduced the symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// Name to address bindings of one assembly run.
/// Entries are never overwritten or removed: the first definition wins.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: IndexMap<String, Symbol>,
    next_var: u32,
}

impl SymbolTable {
    pub fn new() -> Self {
        let entries = PREDEFINED
            .iter()
            .map(|(name, addr)| {
                let symbol = Symbol {
                    kind: SymbolKind::Predefined,
                    addr: *addr as u32,
                    line: None,
                };
                (name.clone(), symbol)
            })
            .collect();
        SymbolTable {
            entries,
            next_var: VAR_BASE as u32,
        }
    }

    /// Bind a label unless the name is already taken.
    /// Returns the entry that kept the name when the label was not recorded.
    pub fn define_label(&mut self, name: &str, addr: u32, line: usize) -> Option<Symbol> {
        if let Some(prev) = self.entries.get(name) {
            return Some(*prev);
        }
        let symbol = Symbol {
            kind: SymbolKind::Label,
            addr,
            line: Some(line),
        };
        self.entries.insert(name.to_string(), symbol);
        None
    }

    /// Look the name up, binding it to the next free variable address on first use.
    pub fn resolve_or_allocate(&mut self, name: &str, line: usize) -> u32 {
        if let Some(symbol) = self.entries.get(name) {
            return symbol.addr;
        }
        let addr = self.next_var;
        self.next_var += 1;
        let symbol = Symbol {
            kind: SymbolKind::Variable,
            addr,
            line: Some(line),
        };
        self.entries.insert(name.to_string(), symbol);
        addr
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.entries.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u32> {
        self.entries.get(name).map(|symbol| symbol.addr)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.entries.iter().map(|(name, symbol)| (name.as_str(), symbol))
    }

    fn of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = (&str, u32)> {
        self.iter()
            .filter(move |(_, symbol)| symbol.kind == kind)
            .map(|(name, symbol)| (name, symbol.addr))
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, u32)> {
        self.of_kind(SymbolKind::Label)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, u32)> {
        self.of_kind(SymbolKind::Variable)
    }

    /// User defined symbols as YAML, in definition order.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        let user: IndexMap<&str, &Symbol> = self
            .iter()
            .filter(|(_, symbol)| symbol.kind != SymbolKind::Predefined)
            .collect();
        serde_yaml::to_string(&user)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
