use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{CompressionSummary, HuffmanCoding};
use tsp::DistanceMatrix;

pub mod binary_stream;
mod cli;
pub mod error;
pub mod huffman;
mod logger;
pub mod tsp;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arguments {
    Encode {
        text: String,
        show_tree: bool,
        packed: bool,
    },
    Decode {
        bits: String,
        source: String,
    },
    Tsp {
        matrix_file: PathBuf,
        max_locations: usize,
    },
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })
}

fn read_matrix_file(file_path: &Path) -> Result<DistanceMatrix> {
    let input_file = open_input_file(file_path)?;
    let mut content = String::new();
    BufReader::new(&input_file)
        .read_to_string(&mut content)
        .map_err(|e| Error::UnableToReadInputFile(file_path.to_string_lossy().into_owned(), e))?;
    content.parse()
}

fn write_report<W: Write>(output: &mut W, report: &str) -> Result<()> {
    output
        .write_all(report.as_bytes())
        .and_then(|_| output.flush())
        .map_err(Error::FailedToWriteOutput)
}

pub fn encode_text<W: Write>(
    text: &str,
    show_tree: bool,
    packed: bool,
    output: &mut W,
) -> Result<()> {
    let (bits, coding) = huffman::build_and_encode(text)?;
    log::info!(
        "Built Huffman code for {} distinct symbols",
        coding.codes().len()
    );
    logger::log_code_table(coding.codes());

    let mut report = format!("Code table:\n{}", coding.codes());
    if show_tree {
        report.push_str(&format!("Huffman tree:\n{}", coding.tree()));
    }
    report.push_str(&format!("Encoded: {}\n", bits));
    if packed {
        let packed_bits = binary_stream::pack_bits(&bits)?;
        logger::log_packed_bits(&packed_bits);
        report.push_str(&format!(
            "Packed: {}\n",
            logger::hex_bytes(&packed_bits).join(" ")
        ));
    }
    report.push_str(&format!(
        "Size: {}\n",
        CompressionSummary::new(text, &bits)
    ));
    write_report(output, &report)
}

pub fn decode_bits<W: Write>(bits: &str, source: &str, output: &mut W) -> Result<()> {
    let coding = HuffmanCoding::build(source)?;
    let text = coding.decode(bits)?;
    log::info!("Decoded {} bits into {} symbols", bits.len(), text.chars().count());
    write_report(output, &format!("Decoded: {}\n", text))
}

pub fn solve_matrix_file<W: Write>(
    matrix_file: &Path,
    max_locations: usize,
    output: &mut W,
) -> Result<()> {
    let matrix = read_matrix_file(matrix_file)?;
    if matrix.size() > max_locations {
        return Err(Error::TooManyLocations {
            locations: matrix.size(),
            limit: max_locations,
        });
    }
    log::info!("Searching all routes through {} locations", matrix.size());
    let solution = tsp::solve(&matrix);
    logger::log_solution(matrix.size(), &solution);
    write_report(
        output,
        &format!(
            "Optimal route: {}\nTotal distance: {}\n",
            solution,
            solution.cost()
        ),
    )
}

pub fn run<W: Write>(arguments: &Arguments, output: &mut W) -> Result<()> {
    match arguments {
        Arguments::Encode {
            text,
            show_tree,
            packed,
        } => encode_text(text, *show_tree, *packed, output),
        Arguments::Decode { bits, source } => decode_bits(bits, source, output),
        Arguments::Tsp {
            matrix_file,
            max_locations,
        } => solve_matrix_file(matrix_file, *max_locations, output),
    }
}
