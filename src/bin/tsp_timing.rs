use std::time::{Duration, Instant};

use textbook_algorithms::tsp::{self, DistanceMatrix};

const MIN_LOCATIONS: usize = 4;
const MAX_LOCATIONS: usize = 9;
const NUMBER_OF_ROUNDS: u32 = 5;

fn create_test_matrix(size: usize) -> DistanceMatrix {
    let rows = (0..size)
        .map(|from| {
            (0..size)
                .map(|to| {
                    if from == to {
                        0.0
                    } else {
                        ((from * 7 + to * 13) % 29 + 1) as f64
                    }
                })
                .collect()
        })
        .collect();
    DistanceMatrix::new(rows).expect("Generated test matrix must be valid")
}

fn calculate_std_deviation_in_micros(mean: &Duration, measurements: &[Duration]) -> u64 {
    let mean_micros = mean.as_micros() as i128;
    let sum = measurements
        .iter()
        .map(|m| m.as_micros() as i128 - mean_micros)
        .map(|v| v.pow(2).unsigned_abs())
        .sum::<u128>();
    let variance = sum / measurements.len() as u128;
    (variance as f64).sqrt().round() as u64
}

fn main() {
    for size in MIN_LOCATIONS..=MAX_LOCATIONS {
        println!("Creating test matrix with {} locations", size);
        let matrix = create_test_matrix(size);
        let mut durations: Vec<Duration> = Vec::new();

        for round in 1..=NUMBER_OF_ROUNDS {
            let start = Instant::now();
            let solution = tsp::solve(&matrix);
            let duration = start.elapsed();

            println!(
                "Finished round {} after {} microseconds, cost {}",
                round,
                duration.as_micros(),
                solution.cost(),
            );
            durations.push(duration);
        }

        let min_duration = durations.iter().min().copied().unwrap_or_default();
        let max_duration = durations.iter().max().copied().unwrap_or_default();
        let avg_duration = durations.iter().sum::<Duration>() / NUMBER_OF_ROUNDS;
        let std_deviation = calculate_std_deviation_in_micros(&avg_duration, &durations);

        println!(
            "Locations: {}, Min: {}, Max: {}, Average: {}, Std Deviation: {}",
            size,
            min_duration.as_micros(),
            max_duration.as_micros(),
            avg_duration.as_micros(),
            std_deviation,
        );
    }
}
