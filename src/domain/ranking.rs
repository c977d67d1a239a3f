//! Deduplication and top-N ranking by absolute correlation.

use std::collections::HashMap;

use crate::domain::observation::Observation;

pub const DEFAULT_TOP_N: usize = 6;

/// At most N observations, non-increasing in `abs`, each pair at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedResult {
    pub entries: Vec<Observation>,
}

impl RankedResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.entries.iter()
    }
}

/// Keep the strongest observation per unordered pair, preserving first-seen
/// order. A later observation replaces the kept one only when strictly
/// stronger.
pub fn dedupe_strongest<I>(observations: I) -> Vec<Observation>
where
    I: IntoIterator<Item = Observation>,
{
    let mut slot_by_key: HashMap<String, usize> = HashMap::new();
    let mut best: Vec<Observation> = Vec::new();

    for obs in observations {
        let key = obs.key();
        if let Some(&slot) = slot_by_key.get(&key) {
            if obs.abs > best[slot].abs {
                best[slot] = obs;
            }
        } else {
            slot_by_key.insert(key, best.len());
            best.push(obs);
        }
    }

    best
}

/// Deduplicate, sort by descending `abs` (stable), and keep the first `n`.
pub fn rank_top_n<I>(observations: I, n: usize) -> RankedResult
where
    I: IntoIterator<Item = Observation>,
{
    let mut entries = dedupe_strongest(observations);
    entries.sort_by(|x, y| y.abs.total_cmp(&x.abs));
    entries.truncate(n);
    RankedResult { entries }
}
