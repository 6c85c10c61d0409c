//! Population-weighted member sampling

use super::district::District;
use super::member::Member;
use crate::core::error::DomainError;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand_distr::Normal;
use std::sync::Arc;

/// Spread of member ideology around the district lean
pub const IDEOLOGY_STDDEV: f64 = 0.35;

/// Draw a roster of `count` members from `districts`
///
/// Each draw picks a district with probability proportional to
/// `max(1, population)` (independent, with replacement), then samples the
/// member's ideology from `Normal(lean, 0.35)` clamped to `[-1, 1]`.
///
/// Fails with [`DomainError::InvalidInput`] when `districts` is empty.
pub fn sample_members<R: Rng + ?Sized>(
    districts: &[Arc<District>],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Member>, DomainError> {
    if districts.is_empty() {
        return Err(DomainError::InvalidInput(
            "No districts are loaded; cannot sample members".to_string(),
        ));
    }

    let picker = WeightedIndex::new(districts.iter().map(|d| d.sampling_weight()))
        .map_err(|e| DomainError::InvalidInput(format!("Invalid district weights: {}", e)))?;

    let mut members = Vec::with_capacity(count);
    for index in 0..count {
        let district = &districts[picker.sample(rng)];
        let spread = Normal::new(district.lean, IDEOLOGY_STDDEV).map_err(|e| {
            DomainError::InvalidInput(format!("District {} has an unusable lean: {}", district.id, e))
        })?;
        let ideology = spread.sample(rng);
        members.push(Member::new(
            Member::sequential_id(index),
            Arc::clone(district),
            ideology,
        ));
    }

    Ok(members)
}
