use std::collections::HashMap;
use std::fmt;

pub mod code;
pub mod tree;

pub use code::CodeTable;
pub use tree::HuffmanTree;

pub type Symbol = char;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}

/// Counts every distinct symbol of `text`, listed in order of first occurrence.
pub fn count_symbol_frequencies(text: &str) -> Vec<SymbolFrequency> {
    let mut positions: HashMap<Symbol, usize> = HashMap::new();
    let mut frequencies: Vec<SymbolFrequency> = Vec::new();
    for symbol in text.chars() {
        let position = *positions.entry(symbol).or_insert_with(|| {
            frequencies.push(SymbolFrequency::from((symbol, 0)));
            frequencies.len() - 1
        });
        frequencies[position].frequency += 1;
    }
    frequencies
}

/// Tree and code table of one build, kept together so that bit strings
/// produced by [`HuffmanCoding::encode`] can be decoded later on.
pub struct HuffmanCoding {
    frequencies: Vec<SymbolFrequency>,
    tree: HuffmanTree,
    codes: CodeTable,
}

impl HuffmanCoding {
    pub fn build(text: &str) -> crate::Result<HuffmanCoding> {
        let frequencies = count_symbol_frequencies(text);
        let tree = HuffmanTree::new(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        Ok(HuffmanCoding {
            frequencies,
            tree,
            codes,
        })
    }

    pub fn encode(&self, text: &str) -> crate::Result<String> {
        self.codes.encode(text)
    }

    pub fn decode(&self, bits: &str) -> crate::Result<String> {
        self.tree.decode(bits)
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn frequencies(&self) -> &[SymbolFrequency] {
        &self.frequencies
    }
}

/// Builds a fresh coding from `text` and encodes `text` with it.
pub fn build_and_encode(text: &str) -> crate::Result<(String, HuffmanCoding)> {
    let coding = HuffmanCoding::build(text)?;
    let bits = coding.encode(text)?;
    Ok((bits, coding))
}

pub fn encode(text: &str, codes: &CodeTable) -> crate::Result<String> {
    codes.encode(text)
}

pub fn decode(bits: &str, tree: &HuffmanTree) -> crate::Result<String> {
    tree.decode(bits)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionSummary {
    pub original_bits: usize,
    pub encoded_bits: usize,
}

impl CompressionSummary {
    /// The original size counts 8 bits per UTF-8 byte of `text`.
    pub fn new(text: &str, bits: &str) -> Self {
        Self {
            original_bits: text.len() * 8,
            encoded_bits: bits.len(),
        }
    }

    pub fn packed_bytes(&self) -> usize {
        self.encoded_bits.div_ceil(8)
    }

    pub fn ratio(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.original_bits as f64
    }
}

impl fmt::Display for CompressionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bits -> {} bits ({} bytes packed, {:.2}% of original)",
            self.original_bits,
            self.encoded_bits,
            self.packed_bytes(),
            self.ratio() * 100.0
        )
    }
}
