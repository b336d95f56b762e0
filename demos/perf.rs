// Benchmark the three search strategies over one random pivot sequence:
//
//   cargo run --release --example perf -- [num_pivots] [num_runs]
//
// Each strategy is timed over NUM_SAMPLES batches of num_runs random keys;
// per-batch elapsed time and per-search comparison counts go into one
// OnlineStats pair per strategy.

use range_partition::{ClassicSearch, InterpolationSearch, OnlineStats, RangeSearch, StdSearch};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::time::Instant;

/// Batches per strategy; each batch times `num_runs` searches.
const NUM_SAMPLES: usize = 100;

fn run_batch<S: RangeSearch<i64>>(
  strategy: &S,
  keys: &[i64],
  time_stats: &mut OnlineStats,
  comparison_stats: &mut OnlineStats,
) {
  let start = Instant::now();
  for key in keys {
    strategy.search(key);
  }
  time_stats.update(start.elapsed().as_micros() as i64);

  // searches are deterministic, so counting in a second pass keeps the
  // aggregator updates out of the timed loop
  for key in keys {
    comparison_stats.update(strategy.search(key).comparisons as i64);
  }
}

fn main() {
  let mut args = env::args().skip(1);
  let num_pivots: usize = args
    .next()
    .and_then(|arg| arg.parse().ok())
    .unwrap_or(1000);
  let num_runs: usize = args
    .next()
    .and_then(|arg| arg.parse().ok())
    .unwrap_or(10_000);

  let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
  let mut pivots: Vec<i64> = (0..num_pivots).map(|_| rng.gen()).collect();
  pivots.sort_unstable();

  let classic = ClassicSearch::new(pivots.clone());
  let with_std = StdSearch::new(pivots.clone());
  let interpolation = InterpolationSearch::new(pivots);

  let mut time_stats = [OnlineStats::new(), OnlineStats::new(), OnlineStats::new()];
  let mut comparison_stats = [OnlineStats::new(), OnlineStats::new(), OnlineStats::new()];

  for _ in 0..NUM_SAMPLES {
    let keys: Vec<i64> = (0..num_runs).map(|_| rng.gen()).collect();
    run_batch(&classic, &keys, &mut time_stats[0], &mut comparison_stats[0]);
    run_batch(&with_std, &keys, &mut time_stats[1], &mut comparison_stats[1]);
    run_batch(
      &interpolation,
      &keys,
      &mut time_stats[2],
      &mut comparison_stats[2],
    );
  }

  let names = ["classic", "std", "interpolation"];
  println!(
    "{} pivots, {} searches per batch, {} batches per strategy",
    num_pivots, num_runs, NUM_SAMPLES
  );
  for (i, name) in names.iter().enumerate() {
    println!("time (us), {:>13}: {}", name, time_stats[i]);
  }
  for (i, name) in names.iter().enumerate() {
    println!("comparisons, {:>13}: {}", name, comparison_stats[i]);
  }
}
