use std::collections::BTreeMap;
use std::fmt;

use super::tree::{HuffmanTree, NodeKind};
use super::Symbol;
use crate::error::Error;

/// A code word as a string of `'0'` and `'1'` characters.
pub type Code = String;

const SINGLE_SYMBOL_CODE: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    /// Assigns every leaf the path leading to it from the root, `0` for
    /// each left and `1` for each right turn.
    pub fn from_tree(tree: &HuffmanTree) -> CodeTable {
        let mut codes = BTreeMap::new();
        let mut node_index_stack = vec![(tree.root().index, Code::new())];
        while let Some((index, path)) = node_index_stack.pop() {
            match tree.node(index).kind {
                NodeKind::Leaf { symbol } if path.is_empty() => {
                    codes.insert(symbol, Code::from(SINGLE_SYMBOL_CODE));
                }
                NodeKind::Leaf { symbol } => {
                    codes.insert(symbol, path);
                }
                NodeKind::Inner { left, right } => {
                    node_index_stack.push((right, format!("{}1", path)));
                    node_index_stack.push((left, path + "0"));
                }
            }
        }
        CodeTable { codes }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries ordered by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    pub fn encode(&self, text: &str) -> crate::Result<String> {
        let mut bits = String::new();
        for symbol in text.chars() {
            let code = self.get(symbol).ok_or(Error::UnknownSymbol(symbol))?;
            bits.push_str(code);
        }
        Ok(bits)
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{:?}: {}", symbol, code)?;
        }
        Ok(())
    }
}
