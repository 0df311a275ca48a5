//! In-process timing harness for the search engines.
//!
//! Every engine is driven through the same black-box function shape
//! `fn(&[u8], &[u8]) -> Option<usize>` and timed over a synthetic fixture:
//! a pseudo-random haystack of `H` bytes and needle of `P` bytes, both
//! deterministic so runs are comparable. Iterations are folded into
//! batches; each batch produces one ns/op sample, and sampling continues
//! until the 95% confidence interval is within the relative target or the
//! sample cap is reached.
//!
//! The CSV row layout (`name,avg_time_ns,samples,confidence_relative`) is
//! consumed positionally by downstream plotting tooling; keep the field
//! order stable.

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use std::fmt;
use std::hint::black_box;
use std::time::Instant;

/// Fixed seed so every run times the same fixture bytes.
const FIXTURE_SEED: u64 = 0x5eed_b0ce;

/// Samples required before the confidence estimate is meaningful.
const MIN_SAMPLES: usize = 8;

/// A search implementation the harness can run as a black box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// The Boyer-Moore searcher from this crate
    BoyerMoore,
    /// The O(n*m) forward scan
    Naive,
    /// `memchr::memmem`, the ecosystem searcher
    Memmem,
}

impl Engine {
    /// The engine as a plain search function.
    pub fn searcher(self) -> fn(&[u8], &[u8]) -> Option<usize> {
        match self {
            Engine::BoyerMoore => crate::search::find,
            Engine::Naive => crate::search::naive::find,
            Engine::Memmem => |haystack, needle| memchr::memmem::find(haystack, needle),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matches the clap value names
        let name = match self {
            Engine::BoyerMoore => "boyer-moore",
            Engine::Naive => "naive",
            Engine::Memmem => "memmem",
        };
        f.write_str(name)
    }
}

/// Parameters for one harness run.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub engine: Engine,
    /// Haystack size in bytes
    pub haystack_size: usize,
    /// Needle size in bytes
    pub needle_size: usize,
    /// Iterations folded into one timing sample
    pub iterations_per_sample: u32,
    /// Hard cap on the number of samples
    pub max_samples: u32,
    /// Stop sampling once the relative confidence drops below this
    pub confidence_target: f64,
    /// Copy the needle into the haystack tail so every search succeeds
    pub plant_needle: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            engine: Engine::BoyerMoore,
            haystack_size: 128,
            needle_size: 32,
            iterations_per_sample: 1000,
            max_samples: 100,
            confidence_target: 0.025,
            plant_needle: false,
        }
    }
}

/// Result of one harness run.
#[derive(Clone, Debug, Serialize)]
pub struct BenchReport {
    /// `<engine>_<haystack_size>_<needle_size>`
    pub name: String,
    pub haystack_size: usize,
    pub needle_size: usize,
    /// Mean cost of one search call
    pub avg_time_ns: u64,
    /// Timing samples taken
    pub samples: u32,
    /// Half-width of the 95% confidence interval, relative to the mean
    pub confidence_relative: f64,
}

impl BenchReport {
    /// CSV row in the layout downstream tooling reads positionally:
    /// field 1 is the mean in ns, field 3 the relative confidence.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{:.6}",
            self.name, self.avg_time_ns, self.samples, self.confidence_relative
        )
    }
}

/// Generate the deterministic benchmark fixture.
///
/// With `plant` set the needle is copied over the haystack tail, so the
/// search finds it at the last valid alignment; otherwise a random needle
/// of realistic size virtually never occurs in the haystack and the run
/// times the miss path.
pub fn fixture(haystack_size: usize, needle_size: usize, plant: bool) -> (Vec<u8>, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(FIXTURE_SEED);
    let mut haystack = vec![0u8; haystack_size];
    rng.fill_bytes(&mut haystack);
    let mut needle = vec![0u8; needle_size];
    rng.fill_bytes(&mut needle);

    if plant && needle_size >= 1 && needle_size <= haystack_size {
        let at = haystack_size - needle_size;
        haystack[at..].copy_from_slice(&needle);
    }

    (haystack, needle)
}

/// Run the harness with the given configuration.
pub fn run(config: &BenchConfig) -> BenchReport {
    let (haystack, needle) =
        fixture(config.haystack_size, config.needle_size, config.plant_needle);
    let search = config.engine.searcher();

    // Warmup batch, untimed
    for _ in 0..config.iterations_per_sample {
        black_box(search(black_box(&haystack), black_box(&needle)));
    }

    let mut samples: Vec<f64> = Vec::new();
    let mut confidence = f64::INFINITY;
    loop {
        let start = Instant::now();
        for _ in 0..config.iterations_per_sample {
            black_box(search(black_box(&haystack), black_box(&needle)));
        }
        let elapsed = start.elapsed();
        samples.push(elapsed.as_nanos() as f64 / f64::from(config.iterations_per_sample.max(1)));

        if samples.len() >= MIN_SAMPLES {
            confidence = relative_confidence(&samples);
            if confidence <= config.confidence_target {
                break;
            }
        }
        if samples.len() as u32 >= config.max_samples {
            break;
        }
    }

    let avg = mean(&samples);
    BenchReport {
        name: format!(
            "{}_{}_{}",
            config.engine, config.haystack_size, config.needle_size
        ),
        haystack_size: config.haystack_size,
        needle_size: config.needle_size,
        avg_time_ns: avg.round() as u64,
        samples: samples.len() as u32,
        confidence_relative: if confidence.is_finite() { confidence } else { 1.0 },
    }
}

fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Half-width of the 95% confidence interval divided by the mean.
fn relative_confidence(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return f64::INFINITY;
    }
    let avg = mean(samples);
    if avg <= 0.0 {
        return f64::INFINITY;
    }
    let variance =
        samples.iter().map(|s| (s - avg) * (s - avg)).sum::<f64>() / (n as f64 - 1.0);
    let std_err = (variance / n as f64).sqrt();
    1.96 * std_err / avg
}
