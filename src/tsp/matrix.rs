use std::str::FromStr;

use crate::error::{Error, InvalidMatrixReason};

pub type Distance = f64;

/// Square matrix of travel costs, `distance(i, j)` being the cost of going
/// from location `i` to location `j`. Costs need not be symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<Distance>,
}

const MINIMUM_NUMBER_OF_LOCATIONS: usize = 2;

fn invalid(reason: InvalidMatrixReason) -> Error {
    Error::InvalidMatrix(reason)
}

impl DistanceMatrix {
    pub fn new(rows: Vec<Vec<Distance>>) -> crate::Result<DistanceMatrix> {
        let size = rows.len();
        if size < MINIMUM_NUMBER_OF_LOCATIONS {
            return Err(invalid(InvalidMatrixReason::TooFewLocations(size)));
        }
        let mut distances = Vec::with_capacity(size * size);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(invalid(InvalidMatrixReason::NotSquare {
                    row: row_index,
                    length: row.len(),
                    expected: size,
                }));
            }
            for (column, value) in row.into_iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(invalid(InvalidMatrixReason::InvalidEntry {
                        row: row_index,
                        column,
                        value,
                    }));
                }
                distances.push(value);
            }
        }
        Ok(DistanceMatrix { size, distances })
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Panics if either location is out of range.
    pub fn distance(&self, from: usize, to: usize) -> Distance {
        assert!(
            from < self.size && to < self.size,
            "Location out of range for a matrix of {} locations",
            self.size
        );
        self.distances[from * self.size + to]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> {
        self.distances.chunks(self.size)
    }
}

impl TryFrom<Vec<Vec<Distance>>> for DistanceMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<Distance>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

fn tokenize_row(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

/// One row per line, entries separated by whitespace or commas. Blank lines
/// and everything after a `#` are ignored.
impl FromStr for DistanceMatrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Distance>> = Vec::new();
        let lines = s
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default())
            .filter(|line| !line.trim().is_empty());
        for (row_index, line) in lines.enumerate() {
            let row = tokenize_row(line)
                .enumerate()
                .map(|(column, token)| {
                    token.parse::<Distance>().map_err(|_| {
                        invalid(InvalidMatrixReason::NonNumericEntry {
                            row: row_index,
                            column,
                            token: token.to_owned(),
                        })
                    })
                })
                .collect::<crate::Result<Vec<Distance>>>()?;
            rows.push(row);
        }
        Self::new(rows)
    }
}

#[cfg(test)]
mod test {
    use super::DistanceMatrix;
    use crate::error::{Error, InvalidMatrixReason};

    #[test]
    fn test_new() {
        let matrix = DistanceMatrix::new(vec![vec![0.0, 5.0], vec![7.0, 0.0]]).unwrap();
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.distance(0, 1), 5.0);
        assert_eq!(matrix.distance(1, 0), 7.0);
    }

    #[test]
    fn test_single_location() {
        let result = DistanceMatrix::new(vec![vec![0.0]]);
        assert!(matches!(
            result,
            Err(Error::InvalidMatrix(InvalidMatrixReason::TooFewLocations(1)))
        ));
    }

    #[test]
    fn test_empty_matrix() {
        let result = DistanceMatrix::new(Vec::new());
        assert!(matches!(
            result,
            Err(Error::InvalidMatrix(InvalidMatrixReason::TooFewLocations(0)))
        ));
    }

    #[test]
    fn test_not_square() {
        let result = DistanceMatrix::new(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 3.0]]);
        assert!(matches!(
            result,
            Err(Error::InvalidMatrix(InvalidMatrixReason::NotSquare {
                row: 0,
                length: 3,
                expected: 2
            }))
        ));
    }

    #[test]
    fn test_ragged_rows() {
        let result = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]);
        assert!(matches!(
            result,
            Err(Error::InvalidMatrix(InvalidMatrixReason::NotSquare { row: 1, .. }))
        ));
    }

    #[test]
    fn test_negative_and_non_finite_entries() {
        for value in [-1.0, f64::NAN, f64::INFINITY] {
            let result = DistanceMatrix::new(vec![vec![0.0, value], vec![1.0, 0.0]]);
            assert!(
                matches!(
                    result,
                    Err(Error::InvalidMatrix(InvalidMatrixReason::InvalidEntry {
                        row: 0,
                        column: 1,
                        ..
                    }))
                ),
                "Entry {} was accepted",
                value
            );
        }
    }

    #[test]
    fn test_try_from() {
        let matrix = DistanceMatrix::try_from(vec![vec![0.0, 5.0], vec![5.0, 0.0]]).unwrap();
        let rows: Vec<&[f64]> = matrix.rows().collect();
        assert_eq!(rows, vec![&[0.0, 5.0][..], &[5.0, 0.0][..]]);
    }

    #[test]
    fn test_parse() {
        let input = "# four cities\n0 10 15 20\n10, 0, 35, 25\n\n15 35 0 30 # last but one\n20 25 30 0\n";
        let matrix: DistanceMatrix = input.parse().unwrap();
        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.distance(1, 3), 25.0);
        assert_eq!(matrix.distance(2, 3), 30.0);
        assert_eq!(matrix.distance(3, 0), 20.0);
    }

    #[test]
    fn test_parse_non_numeric_entry() {
        let result = "0 1\n1 x".parse::<DistanceMatrix>();
        match result {
            Err(Error::InvalidMatrix(InvalidMatrixReason::NonNumericEntry {
                row,
                column,
                token,
            })) => {
                assert_eq!((row, column, token.as_str()), (1, 1, "x"));
            }
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    #[should_panic]
    fn test_distance_out_of_range() {
        let matrix = DistanceMatrix::new(vec![vec![0.0, 5.0], vec![5.0, 0.0]]).unwrap();
        matrix.distance(0, 2);
    }
}
