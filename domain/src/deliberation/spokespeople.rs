//! Spokesperson selection
//!
//! Only a handful of members speak each round. The selection always covers
//! both ideological extremes and the median, then fills the remaining seats
//! at random from the middle half of the chamber.

use crate::chamber::Member;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Default number of speakers per round
pub const DEFAULT_SPOKESPEOPLE: usize = 7;

const ANCHOR_PERCENTILES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Pick up to `cap` spokespeople from `roster`
///
/// The roster is sorted by ideology (ascending). Rosters no larger than `cap`
/// are returned whole. Otherwise the members at the 0/25/50/75/100th
/// percentile positions (`floor(p * (n - 1))`) are chosen first, deduplicated
/// by id, and the rest are drawn without replacement from the interquartile
/// slice. If that slice runs out, fewer than `cap` members are returned.
/// The anchors are always kept, so a cap below five can yield up to five
/// speakers.
pub fn select_spokespeople<'a, R: Rng + ?Sized>(
    roster: &'a [Member],
    cap: usize,
    rng: &mut R,
) -> Vec<&'a Member> {
    let mut sorted: Vec<&Member> = roster.iter().collect();
    sorted.sort_by(|a, b| a.ideology().total_cmp(&b.ideology()));

    if sorted.len() <= cap {
        return sorted;
    }

    let last = sorted.len() - 1;
    let position = |p: f64| (p * last as f64).floor() as usize;

    let mut chosen: Vec<&Member> = Vec::with_capacity(cap);
    let mut seen: HashSet<&str> = HashSet::with_capacity(cap);

    for p in ANCHOR_PERCENTILES {
        let member = sorted[position(p)];
        if seen.insert(member.id()) {
            chosen.push(member);
        }
    }

    let middle: Vec<&Member> = sorted[position(0.25)..=position(0.75)]
        .iter()
        .copied()
        .filter(|m| !seen.contains(m.id()))
        .collect();
    let remaining = cap.saturating_sub(chosen.len());
    for member in middle.choose_multiple(rng, remaining).copied() {
        if seen.insert(member.id()) {
            chosen.push(member);
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chamber::District;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn roster(n: usize) -> Vec<Member> {
        let district = Arc::new(District::new("d", "D"));
        // deliberately not sorted by ideology
        (0..n)
            .map(|i| {
                let ideology = ((i * 37) % n) as f64 / n as f64 * 2.0 - 1.0;
                Member::new(Member::sequential_id(i), Arc::clone(&district), ideology)
            })
            .collect()
    }

    fn extreme_ids(members: &[Member]) -> (String, String) {
        let min = members
            .iter()
            .min_by(|a, b| a.ideology().total_cmp(&b.ideology()))
            .unwrap();
        let max = members
            .iter()
            .max_by(|a, b| a.ideology().total_cmp(&b.ideology()))
            .unwrap();
        (min.id().to_string(), max.id().to_string())
    }

    #[test]
    fn test_hundred_members_cap_seven() {
        let members = roster(100);
        let mut rng = StdRng::seed_from_u64(8);
        let chosen = select_spokespeople(&members, DEFAULT_SPOKESPEOPLE, &mut rng);

        assert_eq!(chosen.len(), 7);
        let ids: HashSet<&str> = chosen.iter().map(|m| m.id()).collect();
        assert_eq!(ids.len(), 7);

        let (min_id, max_id) = extreme_ids(&members);
        assert!(ids.contains(min_id.as_str()));
        assert!(ids.contains(max_id.as_str()));
    }

    #[test]
    fn test_includes_median() {
        let members = roster(51);
        let mut rng = StdRng::seed_from_u64(3);
        let chosen = select_spokespeople(&members, 7, &mut rng);

        let mut sorted: Vec<&Member> = members.iter().collect();
        sorted.sort_by(|a, b| a.ideology().total_cmp(&b.ideology()));
        let median = sorted[25].id();
        assert!(chosen.iter().any(|m| m.id() == median));
    }

    #[test]
    fn test_small_cap_keeps_all_anchors() {
        let district = Arc::new(District::new("d", "D"));
        let members: Vec<Member> = (0..100)
            .map(|i| {
                let ideology = -1.0 + i as f64 * 0.02;
                Member::new(Member::sequential_id(i), Arc::clone(&district), ideology)
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(2);
        let chosen = select_spokespeople(&members, 3, &mut rng);

        let ids: HashSet<&str> = chosen.iter().map(|m| m.id()).collect();
        assert_eq!(chosen.len(), 5);
        assert!(ids.contains(members[0].id()));
        assert!(ids.contains(members[49].id()));
        assert!(ids.contains(members[99].id()));
    }

    #[test]
    fn test_small_roster_returned_whole_and_sorted() {
        let members = roster(5);
        let mut rng = StdRng::seed_from_u64(1);
        let chosen = select_spokespeople(&members, 7, &mut rng);

        assert_eq!(chosen.len(), 5);
        assert!(
            chosen
                .windows(2)
                .all(|w| w[0].ideology() <= w[1].ideology())
        );
    }

    #[test]
    fn test_exhausted_middle_returns_fewer() {
        // 8 members: anchors at 0,1,3,5,7; middle slice 1..=5 leaves 2 fillers
        let members = roster(8);
        let mut rng = StdRng::seed_from_u64(4);
        let chosen = select_spokespeople(&members, 8, &mut rng);
        assert_eq!(chosen.len(), 8);

        let chosen = select_spokespeople(&members, 7, &mut rng);
        assert_eq!(chosen.len(), 7);

        let ten = roster(10);
        let big_cap = select_spokespeople(&ten, 9, &mut rng);
        // anchors 0,2,4,6,9 + middle 2..=6 minus anchors -> 3,5 => 7 total
        assert_eq!(big_cap.len(), 7);
    }

    #[test]
    fn test_ids_unique_with_duplicate_ideologies() {
        let district = Arc::new(District::new("d", "D"));
        let members: Vec<Member> = (0..40)
            .map(|i| Member::new(Member::sequential_id(i), Arc::clone(&district), 0.0))
            .collect();
        let mut rng = StdRng::seed_from_u64(21);
        let chosen = select_spokespeople(&members, 7, &mut rng);

        let ids: HashSet<&str> = chosen.iter().map(|m| m.id()).collect();
        assert_eq!(ids.len(), chosen.len());
        assert_eq!(chosen.len(), 7);
    }
}
