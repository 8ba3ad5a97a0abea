use std::time::{Duration, Instant};

use log::info;

use crate::game::state::GameState;

/// Counts the positions reachable from `starting_position` at every depth up
/// to `depth` and prints the throughput for each.
pub fn run_count_positions(depth: u8, starting_position: &GameState) {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    info!("counting positions to depth {}", depth);

    for depth in 1..=depth {
        let starting_time = Instant::now();
        let count = starting_position.count_positions(depth);
        let duration = starting_time.elapsed();
        let positions_per_second = count as f64 / duration.as_secs_f64();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}
