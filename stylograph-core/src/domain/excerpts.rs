//! Representative excerpt selection
//!
//! Picks a small, length-diverse set of verbatim sentences. This is the
//! only non-deterministic step in the pipeline; callers needing
//! reproducibility inject a seeded random source.

use rand::Rng;

use crate::api::config::ExcerptPolicy;

/// Select up to `policy.count` excerpts spanning short, medium, and long
/// sentences
///
/// When the input holds no more sentences than the target count, all
/// sentences are returned verbatim. Otherwise one sentence is drawn at
/// random per length category, then remaining slots are filled from the
/// not-yet-chosen pool. Duplicate sentence text is never selected twice;
/// the fill loop stops when the distinct pool is exhausted.
pub fn select<R: Rng + ?Sized>(
    sentences: &[String],
    lengths: &[usize],
    policy: &ExcerptPolicy,
    rng: &mut R,
) -> Vec<String> {
    debug_assert_eq!(sentences.len(), lengths.len());

    if sentences.len() <= policy.count {
        return sentences.to_vec();
    }

    let mut excerpts: Vec<String> = Vec::with_capacity(policy.count);

    let categories: [Vec<&String>; 3] = [
        pool(sentences, lengths, |l| l < policy.short_under),
        pool(sentences, lengths, |l| {
            (policy.short_under..=policy.long_over).contains(&l)
        }),
        pool(sentences, lengths, |l| l > policy.long_over),
    ];

    for candidates in &categories {
        if excerpts.len() >= policy.count {
            break;
        }
        if candidates.is_empty() {
            continue;
        }
        let pick = candidates[rng.gen_range(0..candidates.len())];
        if !excerpts.contains(pick) {
            excerpts.push(pick.clone());
        }
    }

    let mut remaining: Vec<&String> = sentences
        .iter()
        .filter(|s| !excerpts.contains(*s))
        .collect();
    while excerpts.len() < policy.count && !remaining.is_empty() {
        let chosen = remaining
            .swap_remove(rng.gen_range(0..remaining.len()))
            .clone();
        remaining.retain(|s| **s != chosen);
        excerpts.push(chosen);
    }

    excerpts
}

fn pool<'a, F>(sentences: &'a [String], lengths: &[usize], keep: F) -> Vec<&'a String>
where
    F: Fn(usize) -> bool,
{
    sentences
        .iter()
        .zip(lengths.iter())
        .filter(|(_, &l)| keep(l))
        .map(|(s, _)| s)
        .collect()
}
