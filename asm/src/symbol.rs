use arch::symbol::{ADDR_MAX, PREDEFINED, VAR_BASE};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub kind: Kind,
    pub address: u16,
    /// 0-based source line of the definition (labels) or first use (variables)
    pub line_idx: Option<usize>,
}

pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
    next_variable: u16,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        let symbols = PREDEFINED
            .iter()
            .map(|&(name, address)| {
                let symbol = Symbol {
                    kind: Kind::Predefined,
                    address,
                    line_idx: None,
                };
                (name.to_string(), symbol)
            })
            .collect();
        SymbolTable {
            symbols,
            next_variable: VAR_BASE,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).map(|s| s.address)
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Insert or overwrite a label.
    pub fn add(&mut self, name: &str, address: u16, line_idx: usize) -> Option<Symbol> {
        let symbol = Symbol {
            kind: Kind::Label,
            address,
            line_idx: Some(line_idx),
        };
        self.symbols.insert(name.to_string(), symbol)
    }

    /// Bind `name` to the next free data address.
    pub fn allocate(&mut self, name: &str, line_idx: usize) -> Result<u16, Error> {
        let address = self.next_variable;
        if address > ADDR_MAX {
            return Err(Error::VariableOverflow(name.to_string()));
        }
        let symbol = Symbol {
            kind: Kind::Variable,
            address,
            line_idx: Some(line_idx),
        };
        self.symbols.insert(name.to_string(), symbol);
        self.next_variable += 1;
        Ok(address)
    }

    pub fn resolve(&mut self, name: &str, line_idx: usize) -> Result<u16, Error> {
        match self.get(name) {
            Some(address) => Ok(address),
            None => self.allocate(name, line_idx),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols.iter().map(|(name, s)| (name.as_str(), s))
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.symbols.values().filter(|s| s.kind == kind).count()
    }
}

// ----------------------------------------------------------------------------
// Export

#[derive(Serialize)]
struct Entry {
    kind: Kind,
    address: u16,
    line: usize,
}

impl SymbolTable {
    /// Labels and variables in definition order, as YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        let entries: IndexMap<&str, Entry> = self
            .iter()
            .filter_map(|(name, s)| {
                let line_idx = s.line_idx?;
                let entry = Entry {
                    kind: s.kind,
                    address: s.address,
                    line: line_idx + 1,
                };
                Some((name, entry))
            })
            .collect();
        serde_yaml::to_string(&entries)
    }
}
