//! Invoice-like input generator.
//!
//! Produces the kind of free text businesses derive OCR references from:
//! customer numbers, dates and amounts joined by separators, plus plain
//! digit runs and occasional digitless noise.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for the input generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of inputs to produce.
    pub count: usize,
    /// Fraction of inputs rendered as invoice text (0.0-1.0); the rest are
    /// plain digit runs.
    pub invoice_fraction: f64,
    /// Longest plain digit run. Runs longer than 23 digits exercise
    /// truncation.
    pub max_digits: usize,
    /// Fraction of inputs with no digits at all (0.0-0.1).
    pub noise_fraction: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 inputs, mostly short.
    Small,
    /// 10 000 inputs.
    Medium,
    /// 100 000 inputs, long digit runs included.
    Large,
}

impl SizeTier {
    /// Returns the generator configuration for this tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            Self::Small => GeneratorConfig {
                seed,
                count: 100,
                invoice_fraction: 0.5,
                max_digits: 12,
                noise_fraction: 0.02,
            },
            Self::Medium => GeneratorConfig {
                seed,
                count: 10_000,
                invoice_fraction: 0.5,
                max_digits: 23,
                noise_fraction: 0.01,
            },
            Self::Large => GeneratorConfig {
                seed,
                count: 100_000,
                invoice_fraction: 0.3,
                max_digits: 40,
                noise_fraction: 0.01,
            },
        }
    }
}

/// Generates `config.count` inputs.
pub fn generate_inputs(config: &GeneratorConfig) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| {
            if rng.gen_bool(config.noise_fraction.clamp(0.0, 1.0)) {
                noise(&mut rng)
            } else if rng.gen_bool(config.invoice_fraction.clamp(0.0, 1.0)) {
                invoice_text(&mut rng)
            } else {
                digit_run(&mut rng, config.max_digits)
            }
        })
        .collect()
}

fn invoice_text(rng: &mut StdRng) -> String {
    let customer: u32 = rng.gen_range(1..100_000);
    let year: u32 = rng.gen_range(2015..2031);
    let month: u32 = rng.gen_range(1..13);
    let day: u32 = rng.gen_range(1..29);
    let amount: u32 = rng.gen_range(1..1_000_000);
    format!("Customer{customer:05}:Date{year}-{month:02}-{day:02}:Amount${amount}")
}

fn digit_run(rng: &mut StdRng, max_digits: usize) -> String {
    let len = rng.gen_range(0..=max_digits);
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn noise(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..8);
    (0..len)
        .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
        .collect()
}
