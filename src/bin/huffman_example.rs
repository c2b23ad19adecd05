use textbook_algorithms::huffman::{self, CompressionSummary};
use textbook_algorithms::Error;

fn main() -> Result<(), Error> {
    let text = "abracadabra alakazam";

    let (bits, coding) = huffman::build_and_encode(text)?;
    println!("symbol frequencies\n{:?}", coding.frequencies());
    println!("huffman tree\n{}", coding.tree());
    println!("code table\n{}", coding.codes());

    println!("text to encode\n{:?}", text);
    println!("encoded text\n{}", bits);
    println!("{}", CompressionSummary::new(text, &bits));

    let decoded = huffman::decode(&bits, coding.tree())?;
    println!("decoded text\n{:?}", decoded);
    Ok(())
}
