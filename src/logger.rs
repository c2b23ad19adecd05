use crate::huffman::CodeTable;
use crate::tsp::Solution;

const LOG_CONFIGURATION_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    use log4rs;
    if let Err(error) = log4rs::init_file(LOG_CONFIGURATION_FILE, Default::default()) {
        eprintln!(
            "Logging disabled, unable to load '{}': {}",
            LOG_CONFIGURATION_FILE, error
        );
    }
}

pub fn hex_bytes(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|byte| format!("{:02X}", byte)).collect()
}

pub fn log_code_table(codes: &CodeTable) {
    for (symbol, code) in codes.iter() {
        log::debug!("{:?} -> {}", symbol, code);
    }
}

pub fn log_packed_bits(packed: &[u8]) {
    log::debug!("{} bytes packed: {:?}", packed.len(), hex_bytes(packed));
}

pub fn log_solution(size: usize, solution: &Solution) {
    log::info!(
        "Best of {} locations: {} with cost {}",
        size,
        solution,
        solution.cost()
    );
}
