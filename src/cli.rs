use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

const ENCODE_COMMAND: &str = "encode";
const DECODE_COMMAND: &str = "decode";
const TSP_COMMAND: &str = "tsp";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_subcommands(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_subcommands(command: Command) -> Command {
        command
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(Self::create_encode_command())
            .subcommand(Self::create_decode_command())
            .subcommand(Self::create_tsp_command())
    }

    fn create_encode_command() -> Command {
        let command = Command::new(ENCODE_COMMAND)
            .about("Build a Huffman code from a text and encode the text with it");
        let command = Self::register_text_argument(command);
        let command = Self::register_show_tree_argument(command);
        Self::register_packed_argument(command)
    }

    fn create_decode_command() -> Command {
        let command = Command::new(DECODE_COMMAND)
            .about("Decode a bit string with the Huffman code of a source text");
        let command = Self::register_bits_argument(command);
        Self::register_source_argument(command)
    }

    fn create_tsp_command() -> Command {
        let command = Command::new(TSP_COMMAND)
            .about("Find the cheapest round trip through all locations of a distance matrix");
        let command = Self::register_matrix_file_argument(command);
        Self::register_max_locations_argument(command)
    }

    fn register_text_argument(command: Command) -> Command {
        command.arg(Self::create_text_argument())
    }

    fn register_show_tree_argument(command: Command) -> Command {
        command.arg(Self::create_show_tree_argument())
    }

    fn register_packed_argument(command: Command) -> Command {
        command.arg(Self::create_packed_argument())
    }

    fn register_bits_argument(command: Command) -> Command {
        command.arg(Self::create_bits_argument())
    }

    fn register_source_argument(command: Command) -> Command {
        command.arg(Self::create_source_argument())
    }

    fn register_matrix_file_argument(command: Command) -> Command {
        command.arg(Self::create_matrix_file_argument())
    }

    fn register_max_locations_argument(command: Command) -> Command {
        command.arg(Self::create_max_locations_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_text_argument() -> Arg {
        Arg::new("text").help("Text to encode").required(true)
    }

    fn create_show_tree_argument() -> Arg {
        arg!(show_tree: -t --show_tree "Print the Huffman tree")
    }

    fn create_packed_argument() -> Arg {
        arg!(packed: -p --packed "Print the bit string packed into bytes")
    }

    fn create_bits_argument() -> Arg {
        Arg::new("bits")
            .help("Bit string of '0' and '1' characters")
            .required(true)
    }

    fn create_source_argument() -> Arg {
        arg!(source: -s --source <TEXT> "Text the Huffman code was built from").required(true)
    }

    fn create_matrix_file_argument() -> Arg {
        Arg::new("matrix_file")
            .help("Path to distance matrix file, one row per line")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_max_locations_argument() -> Arg {
        arg!(max_locations: -m --max_locations <LOCATIONS> "Largest number of locations to search")
            .default_value("10")
            .value_parser(value_parser!(usize))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        match matches.subcommand() {
            Some((ENCODE_COMMAND, matches)) => Arguments::Encode {
                text: Self::extract_text_argument(matches),
                show_tree: Self::extract_show_tree_argument(matches),
                packed: Self::extract_packed_argument(matches),
            },
            Some((DECODE_COMMAND, matches)) => Arguments::Decode {
                bits: Self::extract_bits_argument(matches),
                source: Self::extract_source_argument(matches),
            },
            Some((TSP_COMMAND, matches)) => Arguments::Tsp {
                matrix_file: Self::extract_matrix_file_argument(matches),
                max_locations: Self::extract_max_locations_argument(matches),
            },
            _ => unreachable!("A subcommand is required"),
        }
    }

    fn extract_text_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("text")
            .expect("Required argument text not provided")
            .clone()
    }

    fn extract_show_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("show_tree")
    }

    fn extract_packed_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("packed")
    }

    fn extract_bits_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("bits")
            .expect("Required argument bits not provided")
            .clone()
    }

    fn extract_source_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("source")
            .expect("Required argument source not provided")
            .clone()
    }

    fn extract_matrix_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("matrix_file")
            .expect("Required argument matrix_file not provided")
            .clone()
    }

    fn extract_max_locations_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("max_locations")
            .expect("Maximum number of locations must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
