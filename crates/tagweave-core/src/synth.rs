//! Tag group synthesis.
//!
//! Partitions a category's labels into bounded-size groups by greedily
//! seeding on a label and absorbing the most similar unassigned labels.
//! Every input label lands in exactly one output group: groups that come up
//! short feed a residual pass that chunks leftovers at max size, and the
//! final chunk is emitted even when it is below the minimum.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::cooccur::CooccurrenceTable;
use crate::types::TagGroup;

/// How the seed label of each group is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Highest-frequency unassigned label (deterministic without an RNG)
    #[default]
    Frequency,
    /// Uniform random unassigned label, driven by the configured RNG seed
    Random,
}

/// Synthesis parameters, taken from `SynthesisConfig`.
#[derive(Debug, Clone)]
pub struct SynthOptions {
    pub min_group_size: usize,
    pub max_group_size: usize,
    pub similarity_threshold: f64,
    pub seed_policy: SeedPolicy,
    pub rng_seed: u64,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            min_group_size: 3,
            max_group_size: 10,
            similarity_threshold: 0.5,
            seed_policy: SeedPolicy::Frequency,
            rng_seed: 0,
        }
    }
}

impl From<&crate::config::SynthesisConfig> for SynthOptions {
    fn from(config: &crate::config::SynthesisConfig) -> Self {
        Self {
            min_group_size: config.min_group_size,
            max_group_size: config.max_group_size,
            similarity_threshold: config.similarity_threshold,
            seed_policy: config.seed_policy,
            rng_seed: config.rng_seed,
        }
    }
}

/// Partition `labels` into tag groups.
///
/// Labels are first put in canonical order (frequency descending, then
/// name), which both makes the output reproducible and lets the greedy
/// growth break similarity ties by global frequency for free. When the
/// whole category fits in one group, a single group is returned rather
/// than fragments.
pub fn synthesize(
    labels: &[String],
    frequencies: &HashMap<String, usize>,
    table: &CooccurrenceTable,
    options: &SynthOptions,
) -> Vec<TagGroup> {
    let freq = |l: &String| frequencies.get(l).copied().unwrap_or(0);

    let mut pool: Vec<String> = labels.to_vec();
    pool.sort();
    pool.dedup();
    pool.sort_by(|a, b| freq(b).cmp(&freq(a)).then_with(|| a.cmp(b)));

    if pool.is_empty() {
        return Vec::new();
    }

    // Degenerate case: a sparse category becomes one group, not fragments.
    if pool.len() <= options.max_group_size {
        return vec![TagGroup::new(pool)];
    }

    let mut rng = StdRng::seed_from_u64(options.rng_seed);
    let mut groups = Vec::new();
    let mut residual: Vec<String> = Vec::new();

    while !pool.is_empty() {
        let seed_index = match options.seed_policy {
            SeedPolicy::Frequency => 0,
            SeedPolicy::Random => rng.gen_range(0..pool.len()),
        };
        let seed = pool.remove(seed_index);
        let mut group = vec![seed];

        // Grow: absorb the unassigned label with the highest similarity to
        // any current member. Pool order makes `>` break ties by frequency.
        while group.len() < options.max_group_size {
            let mut best: Option<(usize, f64)> = None;
            for (i, candidate) in pool.iter().enumerate() {
                let sim = group
                    .iter()
                    .map(|member| table.jaccard(candidate, member))
                    .fold(0.0_f64, f64::max);
                if sim <= 0.0 || sim < options.similarity_threshold {
                    continue;
                }
                if best.map_or(true, |(_, best_sim)| sim > best_sim) {
                    best = Some((i, sim));
                }
            }
            match best {
                Some((i, _)) => {
                    let label = pool.remove(i);
                    group.push(label);
                }
                None => break,
            }
        }

        if group.len() >= options.min_group_size {
            groups.push(TagGroup::new(group));
        } else {
            residual.extend(group);
        }
    }

    // Residual pass: fixed-size chunks; the last chunk may be below the
    // minimum but is emitted anyway so no label is lost.
    for chunk in residual.chunks(options.max_group_size) {
        groups.push(TagGroup::new(chunk.to_vec()));
    }

    groups
}
