use std::env::args_os;
use std::io::stdout;
use std::process::ExitCode;

use textbook_algorithms::{run, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments, &mut stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
