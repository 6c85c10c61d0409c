//! Synthetic chamber construction
//!
//! Splits each base district into several jittered sub-districts, producing a
//! larger and more varied chamber from a small dataset.

use super::district::District;
use super::issue::Issue;
use crate::core::error::DomainError;
use crate::util::clamp_unit;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::collections::BTreeMap;

/// Smallest weight a jittered issue may keep before renormalisation
pub const MIN_WEIGHT: f64 = 0.01;

/// Split every district into `multiplier` sub-districts
///
/// - population is divided evenly (`max(1, pop / multiplier)`, zero stays zero)
/// - lean is perturbed by `Normal(0, jitter * 0.35)` and clamped
/// - weights are perturbed by `Normal(0, jitter * 0.08)`, floored at
///   [`MIN_WEIGHT`] and renormalised to sum to 1
/// - `median_income` and `poverty_rate` demographics get a light jitter
///
/// A `multiplier` of 0 or 1 returns the input unchanged.
pub fn split_districts<R: Rng + ?Sized>(
    base: &[District],
    multiplier: usize,
    jitter: f64,
    rng: &mut R,
) -> Result<Vec<District>, DomainError> {
    if multiplier <= 1 {
        return Ok(base.to_vec());
    }
    if !(0.0..=1.0).contains(&jitter) {
        return Err(DomainError::out_of_range("jitter", jitter, 0.0, 1.0));
    }

    let lean_noise = noise(jitter * 0.35)?;
    let weight_noise = noise(jitter * 0.08)?;
    let income_noise = noise(jitter * 0.05)?;
    let poverty_noise = noise(jitter * 0.02)?;

    let mut out = Vec::with_capacity(base.len() * multiplier);
    for district in base {
        let sub_population = if district.population == 0 {
            0
        } else {
            (district.population / multiplier as u64).max(1)
        };

        for i in 1..=multiplier {
            let lean = clamp_unit(district.lean + lean_noise.sample(rng));

            let jittered: BTreeMap<Issue, f64> = district
                .weights
                .iter()
                .map(|(issue, w)| (*issue, (w + weight_noise.sample(rng)).max(MIN_WEIGHT)))
                .collect();
            let total: f64 = jittered.values().sum();
            let total = if total > 0.0 { total } else { 1.0 };
            let weights = jittered
                .into_iter()
                .map(|(issue, w)| (issue, w / total))
                .collect();

            let mut demographics = district.demographics.clone();
            if let Some(income) = demographics.get_mut("median_income") {
                if *income != 0.0 {
                    *income = (*income * (1.0 + income_noise.sample(rng))).max(0.0);
                }
            }
            if let Some(rate) = demographics.get_mut("poverty_rate") {
                *rate = (*rate + poverty_noise.sample(rng)).clamp(0.0, 1.0);
            }

            out.push(District {
                id: format!("{}.s{}", district.id, i),
                name: format!("{} (sub {})", district.name, i),
                state_fips: district.state_fips.clone(),
                cd: district.cd.clone(),
                lean,
                population: sub_population,
                demographics,
                weights,
            });
        }
    }

    Ok(out)
}

fn noise(stddev: f64) -> Result<Normal<f64>, DomainError> {
    Normal::new(0.0, stddev)
        .map_err(|e| DomainError::InvalidInput(format!("Invalid jitter: {}", e)))
}
