use textbook_algorithms::error::MalformedInputReason;
use textbook_algorithms::{run, CLIParser, Error};

fn run_command(arguments: &[&str]) -> Result<String, Error> {
    let mut all_arguments = vec!["test"];
    all_arguments.extend_from_slice(arguments);
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(all_arguments);
    let mut output: Vec<u8> = Vec::new();
    run(&arguments, &mut output)?;
    Ok(String::from_utf8(output).expect("Output must be valid UTF-8"))
}

fn extract_line<'a>(output: &'a str, prefix: &str) -> &'a str {
    output
        .lines()
        .find_map(|line| line.strip_prefix(prefix))
        .unwrap_or_else(|| panic!("No line starting with {:?} in {:?}", prefix, output))
}

#[test]
fn test_encode_command() {
    let output = run_command(&["encode", "abracadabra", "--packed"]).expect("Encoding failed");
    let expected = concat!(
        "Code table:\n",
        "'a': 0\n",
        "'b': 110\n",
        "'c': 100\n",
        "'d': 101\n",
        "'r': 111\n",
        "Encoded: 01101110100010101101110\n",
        "Packed: 6E 8A DC\n",
        "Size: 88 bits -> 23 bits (3 bytes packed, 26.14% of original)\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_encode_command_with_tree() {
    let output = run_command(&["encode", "aab", "--show_tree"]).expect("Encoding failed");
    assert!(output.contains("Huffman tree:\n"));
    assert!(output.contains("(b:1) (a:2)"));
}

#[test]
fn test_encode_then_decode() {
    let text = "she sells sea shells by the sea shore";
    let output = run_command(&["encode", text]).expect("Encoding failed");
    let bits = extract_line(&output, "Encoded: ").to_owned();
    let output = run_command(&["decode", &bits, "--source", text]).expect("Decoding failed");
    assert_eq!(extract_line(&output, "Decoded: "), text);
}

#[test]
fn test_single_symbol_encode_then_decode() {
    let output = run_command(&["encode", "zzzz"]).expect("Encoding failed");
    let bits = extract_line(&output, "Encoded: ").to_owned();
    assert_eq!(bits, "0000");
    let output = run_command(&["decode", &bits, "-s", "zzzz"]).expect("Decoding failed");
    assert_eq!(output, "Decoded: zzzz\n");
}

#[test]
fn test_decode_incomplete_bits() {
    let result = run_command(&["decode", "011", "--source", "abracadabra"]);
    assert!(matches!(
        result,
        Err(Error::MalformedInput(MalformedInputReason::IncompleteCode { position: 3 }))
    ));
}

#[test]
fn test_encode_empty_text() {
    assert!(matches!(run_command(&["encode", ""]), Err(Error::EmptyInput)));
}
