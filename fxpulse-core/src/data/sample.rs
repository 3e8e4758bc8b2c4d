//! Deterministic sample data for offline runs.
//!
//! The `--offline` modes of both surfaces and the benches need data without
//! touching the network. Rates come from a seeded random walk; headlines come
//! from a fixed set of realistic rupiah-news texts covering all three
//! sentiment directions.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Headline, RatePoint};

/// Starting level of the synthetic walk, roughly a USD/IDR print.
const BASE_RATE: f64 = 15_000.0;

/// Daily drift and noise of the walk. FX dailies are quiet; these keep the
/// derived percent changes in a realistic sub-percent band.
const DRIFT: f64 = 0.0002;
const VOLATILITY: f64 = 0.004;

/// A seeded random-walk rate series of `days` daily closes ending today.
///
/// The same seed always produces the same closes, so offline output and
/// benches are reproducible.
pub fn sample_rates(days: i64, seed: u64) -> Vec<RatePoint> {
    let days = days.max(1);
    let today = Utc::now().date_naive();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut points = Vec::with_capacity(days as usize);
    let mut close = BASE_RATE;

    for offset in (0..days).rev() {
        let noise: f64 = rng.gen_range(-1.0..1.0);
        close *= 1.0 + DRIFT + VOLATILITY * noise;
        points.push(RatePoint {
            date: today - Duration::days(offset),
            close,
        });
    }

    points
}

/// Seed for one symbol's offline walk. Stable across runs, and distinct for
/// symbols that merely permute the same letters (a plain byte sum would give
/// USDIDR=X and EURIDR=X the same walk).
pub fn symbol_seed(symbol: &str) -> u64 {
    symbol
        .bytes()
        .fold(0, |hash, byte| hash.wrapping_mul(31).wrapping_add(u64::from(byte)))
}

/// A fixed batch of sample headlines, at most `limit` of them.
pub fn sample_headlines(limit: usize) -> Vec<Headline> {
    [
        "Rupiah menguat tipis terhadap dolar AS di awal pekan",
        "Inflasi terkendali, BI pertahankan suku bunga acuan",
        "Kurs rupiah melemah tertekan penguatan dolar global",
        "Cadangan devisa naik, nilai tukar rupiah stabil",
        "Rupiah anjlok ke level terendah tiga bulan",
        "Ekonomi tumbuh di atas ekspektasi pasar",
        "Defisit transaksi berjalan melebar, rupiah tertekan",
        "Jadwal lelang surat utang negara pekan ini",
    ]
    .into_iter()
    .take(limit)
    .map(String::from)
    .collect()
}
