use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedInputReason {
    InvalidBit { position: usize, character: char },
    IncompleteCode { position: usize },
    UnassignedPath { position: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InvalidMatrixReason {
    TooFewLocations(usize),
    NotSquare {
        row: usize,
        length: usize,
        expected: usize,
    },
    InvalidEntry {
        row: usize,
        column: usize,
        value: f64,
    },
    NonNumericEntry {
        row: usize,
        column: usize,
        token: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRouteReason {
    LengthMismatch { length: usize, expected: usize },
    LocationOutOfRange(usize),
    LocationVisitedTwice(usize),
}

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    UnknownSymbol(char),
    MalformedInput(MalformedInputReason),
    InvalidMatrix(InvalidMatrixReason),
    InvalidRoute(InvalidRouteReason),
    Cancelled,
    TooManyLocations { locations: usize, limit: usize },
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    FailedToWriteOutput(std::io::Error),
}

impl Display for MalformedInputReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBit {
                position,
                character,
            } => write!(
                f,
                "character {:?} at position {} is neither '0' nor '1'",
                character, position
            ),
            Self::IncompleteCode { position } => write!(
                f,
                "bit string ends at position {} in the middle of a code",
                position
            ),
            Self::UnassignedPath { position } => write!(
                f,
                "bit at position {} leads to a path without a symbol",
                position
            ),
        }
    }
}

impl Display for InvalidMatrixReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewLocations(count) => write!(
                f,
                "at least 2 locations are required, but got {}",
                count
            ),
            Self::NotSquare {
                row,
                length,
                expected,
            } => write!(
                f,
                "row {} has {} entries, but the matrix needs {}",
                row, length, expected
            ),
            Self::InvalidEntry { row, column, value } => write!(
                f,
                "entry [{}][{}] = {} is not a non-negative finite number",
                row, column, value
            ),
            Self::NonNumericEntry { row, column, token } => {
                write!(f, "entry [{}][{}] = '{}' is not numeric", row, column, token)
            }
        }
    }
}

impl Display for InvalidRouteReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { length, expected } => write!(
                f,
                "route visits {} locations, but the matrix has {}",
                length, expected
            ),
            Self::LocationOutOfRange(location) => {
                write!(f, "location {} is not part of the matrix", location)
            }
            Self::LocationVisitedTwice(location) => {
                write!(f, "location {} is visited more than once", location)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input must contain at least one symbol"),
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {:?} has no assigned Huffman code", symbol)
            }
            Self::MalformedInput(reason) => write!(f, "Malformed bit string: {}", reason),
            Self::InvalidMatrix(reason) => write!(f, "Invalid distance matrix: {}", reason),
            Self::InvalidRoute(reason) => write!(f, "Invalid route: {}", reason),
            Self::Cancelled => write!(f, "Search was cancelled"),
            Self::TooManyLocations { locations, limit } => write!(
                f,
                "Matrix has {} locations, but at most {} are allowed",
                locations, limit
            ),
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::FailedToWriteOutput(error) => write!(f, "Failed to write output: {}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToReadInputFile(_, error)
            | Self::FailedToWriteOutput(error) => Some(error),
            _ => None,
        }
    }
}
