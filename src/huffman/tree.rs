use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::{Symbol, SymbolFrequency};
use crate::error::{Error, MalformedInputReason};

#[derive(Clone, Copy, Debug)]
pub(crate) enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) frequency: usize,
    pub(crate) index: usize,
    pub(crate) kind: NodeKind,
}

/// Huffman tree stored as an arena of nodes. Leaves occupy the first
/// indices in the order their symbols were given, inner nodes follow in
/// order of creation.
#[derive(Debug)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
}

// ties are broken by index
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl HuffmanTree {
    pub fn new(symbols_and_frequencies: &[SymbolFrequency]) -> crate::Result<HuffmanTree> {
        if symbols_and_frequencies.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut heap = BinaryHeap::with_capacity(symbols_and_frequencies.len());
        let mut nodes: Vec<Node> = Vec::with_capacity(symbols_and_frequencies.len() * 2 - 1);

        for sf in symbols_and_frequencies {
            let node = Node {
                frequency: sf.frequency,
                index: nodes.len(),
                kind: NodeKind::Leaf { symbol: sf.symbol },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }

        // the first node taken from the heap becomes the left child
        while heap.len() > 1 {
            let (Some(Reverse(left)), Some(Reverse(right))) = (heap.pop(), heap.pop()) else {
                break;
            };
            let node = Node {
                frequency: left.frequency + right.frequency,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: left.index,
                    right: right.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }

        Ok(HuffmanTree {
            root_index: nodes.len() - 1,
            nodes,
        })
    }

    pub fn from_text(text: &str) -> crate::Result<HuffmanTree> {
        Self::new(&super::count_symbol_frequencies(text))
    }

    pub(crate) fn root(&self) -> &Node {
        &self.nodes[self.root_index]
    }

    pub(crate) fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.len().div_ceil(2)
    }

    /// Sum of the frequencies of all symbols in the tree.
    pub fn total_frequency(&self) -> usize {
        self.root().frequency
    }

    /// Walks the tree from the root, one bit per step (`0` left, `1` right),
    /// emitting a symbol and restarting at the root whenever a leaf is reached.
    ///
    /// A tree holding a single symbol encodes it as `0`.
    pub fn decode(&self, bits: &str) -> crate::Result<String> {
        if let NodeKind::Leaf { symbol } = self.root().kind {
            return Self::decode_single_symbol(symbol, bits);
        }

        let mut output = String::new();
        let mut current_index = self.root_index;
        let mut bit_count = 0;
        for (position, character) in bits.chars().enumerate() {
            let take_right = Self::parse_bit(position, character)?;
            let (left, right) = match self.nodes[current_index].kind {
                NodeKind::Inner { left, right } => (left, right),
                NodeKind::Leaf { .. } => unreachable!("decoding always continues at an inner node"),
            };
            current_index = if take_right { right } else { left };
            if let NodeKind::Leaf { symbol } = self.nodes[current_index].kind {
                output.push(symbol);
                current_index = self.root_index;
            }
            bit_count = position + 1;
        }

        if current_index != self.root_index {
            return Err(Error::MalformedInput(
                MalformedInputReason::IncompleteCode {
                    position: bit_count,
                },
            ));
        }
        Ok(output)
    }

    fn decode_single_symbol(symbol: Symbol, bits: &str) -> crate::Result<String> {
        let mut output = String::with_capacity(bits.len());
        for (position, character) in bits.chars().enumerate() {
            if Self::parse_bit(position, character)? {
                return Err(Error::MalformedInput(
                    MalformedInputReason::UnassignedPath { position },
                ));
            }
            output.push(symbol);
        }
        Ok(output)
    }

    fn parse_bit(position: usize, character: char) -> crate::Result<bool> {
        match character {
            '0' => Ok(false),
            '1' => Ok(true),
            character => Err(Error::MalformedInput(MalformedInputReason::InvalidBit {
                position,
                character,
            })),
        }
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn anchor_column(line: &str) -> usize {
    let offset = line.chars().position(|c| c != ' ').unwrap_or(0);
    (offset * 2 + line.trim().chars().count()) / 2
}

// Node & Tree visualization
impl Node {
    fn get_string(&self, tree: &HuffmanTree) -> Vec<String> {
        match self.kind {
            NodeKind::Leaf { symbol } => {
                vec![format!("({}:{})", symbol.escape_debug(), self.frequency)]
            }
            NodeKind::Inner { left, right } => {
                let left_box = tree.nodes[left].get_string(tree);
                let right_box = tree.nodes[right].get_string(tree);
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::with_capacity(
                    3 + std::cmp::max(left_box.len(), right_box.len()),
                );

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = anchor_column(&left_box[0]);
                let right_pos = anchor_column(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for i in 0..std::cmp::max(left_box.len(), right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.root().get_string(self) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, NodeKind};
    use crate::error::{Error, MalformedInputReason};
    use crate::huffman::SymbolFrequency;

    fn calculate_depth_for_each_node(tree: &HuffmanTree) -> Vec<usize> {
        let mut return_value = vec![usize::default(); tree.nodes.len()];
        let mut node_index_stack = vec![tree.root_index];
        while let Some(index) = node_index_stack.pop() {
            if let NodeKind::Inner { left, right } = tree.nodes[index].kind {
                return_value[left] = return_value[index] + 1;
                return_value[right] = return_value[index] + 1;
                node_index_stack.push(left);
                node_index_stack.push(right);
            }
        }
        return_value
    }

    const SYMBOLS_AND_FREQUENCIES: &[(char, usize); 7] = &[
        ('a', 17),
        ('b', 3),
        ('c', 12),
        ('d', 3),
        ('e', 18),
        ('f', 12),
        ('g', 13),
    ];

    fn create_test_tree() -> HuffmanTree {
        let frequencies = SYMBOLS_AND_FREQUENCIES.map(SymbolFrequency::from);
        HuffmanTree::new(&frequencies).unwrap()
    }

    #[test]
    fn test_empty_frequencies() {
        assert!(matches!(HuffmanTree::new(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_each_node_has_correct_index() {
        let tree = create_test_tree();
        for (index, node) in tree.nodes.iter().enumerate() {
            assert_eq!(index, node.index);
        }
    }

    #[test]
    fn test_node_count_and_root_frequency() {
        let tree = create_test_tree();
        assert_eq!(tree.nodes.len(), 13, "n leaves need n - 1 inner nodes");
        assert_eq!(tree.leaf_count(), 7);
        assert_eq!(tree.total_frequency(), 78);
    }

    #[test]
    fn test_inner_frequency_is_sum_of_children() {
        let tree = create_test_tree();
        for node in &tree.nodes {
            if let NodeKind::Inner { left, right } = node.kind {
                assert_eq!(
                    node.frequency,
                    tree.nodes[left].frequency + tree.nodes[right].frequency
                );
            }
        }
    }

    #[test]
    fn test_higher_frequent_symbols_must_not_be_deeper() {
        let tree = create_test_tree();
        let depths = calculate_depth_for_each_node(&tree);
        for a in 0..tree.leaf_count() {
            for b in 0..tree.leaf_count() {
                if tree.nodes[a].frequency > tree.nodes[b].frequency {
                    assert!(
                        depths[a] <= depths[b],
                        "Depth {} of node {} is greater than depth {} of less frequent node {}",
                        depths[a],
                        a,
                        depths[b],
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_ties_are_merged_in_insertion_order() {
        let tree = HuffmanTree::from_text("abcd").unwrap();
        let merged: Vec<(usize, usize)> = tree
            .nodes
            .iter()
            .filter_map(|node| match node.kind {
                NodeKind::Inner { left, right } => Some((left, right)),
                NodeKind::Leaf { .. } => None,
            })
            .collect();
        assert_eq!(merged, vec![(0, 1), (2, 3), (4, 5)]);
    }

    #[test]
    fn test_single_symbol_tree() {
        let tree = HuffmanTree::from_text("zzz").unwrap();
        assert_eq!(tree.leaf_count(), 1);
        assert!(matches!(tree.root().kind, NodeKind::Leaf { symbol: 'z' }));
        assert_eq!(tree.decode("00").unwrap(), "zz");
    }

    #[test]
    fn test_single_symbol_tree_rejects_one_bit() {
        let tree = HuffmanTree::from_text("zzz").unwrap();
        assert!(matches!(
            tree.decode("001"),
            Err(Error::MalformedInput(MalformedInputReason::UnassignedPath { position: 2 }))
        ));
    }

    #[test]
    fn test_decode() {
        // a=0 c=100 d=101 b=110 r=111
        let tree = HuffmanTree::from_text("abracadabra").unwrap();
        let decoded = tree.decode("01101110100010101101110").unwrap();
        assert_eq!(decoded, "abracadabra");
    }

    #[test]
    fn test_decode_invalid_character() {
        let tree = HuffmanTree::from_text("abracadabra").unwrap();
        assert!(matches!(
            tree.decode("0110x"),
            Err(Error::MalformedInput(MalformedInputReason::InvalidBit {
                position: 4,
                character: 'x'
            }))
        ));
    }

    #[test]
    fn test_decode_ends_at_inner_node() {
        let tree = HuffmanTree::from_text("abracadabra").unwrap();
        assert!(matches!(
            tree.decode("011"),
            Err(Error::MalformedInput(MalformedInputReason::IncompleteCode { position: 3 }))
        ));
    }

    #[test]
    fn test_display() {
        let tree = HuffmanTree::from_text("aab").unwrap();
        let expected = concat!(
            "     •     \n",
            "     ║     \n",
            "  ╔══╩══╗  \n",
            "(b:1) (a:2)\n",
        );
        assert_eq!(tree.to_string(), expected);
    }
}
