//! Best-of-N selection over candidate result files.
//!
//! One rule, shared by every view: the candidate with the strictly highest
//! score wins, and on a tie the first one encountered keeps its place.

use membench_core::errors::DiscoveryError;
use membench_core::IResultSource;

/// A parsed document together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Selected<T> {
    pub file: String,
    pub data: T,
}

/// Return the highest-scoring candidate, or `None` if there are no candidates.
///
/// This is a single order-preserving scan, not a sort: a later candidate only
/// replaces the current best when its score is strictly greater, so a NaN
/// score never displaces anything.
pub fn select_best<T, I, F>(candidates: I, mut score: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for candidate in candidates {
        let s = score(&candidate);
        let replace = match &best {
            Some((_, best_score)) => s > *best_score,
            None => true,
        };
        if replace {
            best = Some((candidate, s));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Discover files for `prefix`, parse each, and keep the best by `score`.
pub fn select_best_parsed<T, P, F>(
    source: &dyn IResultSource,
    prefix: &str,
    parse: P,
    score: F,
) -> Result<Option<Selected<T>>, DiscoveryError>
where
    P: Fn(&serde_json::Value) -> T,
    F: Fn(&T) -> f64,
{
    let candidates = source.list_candidates(prefix)?;
    let parsed = candidates.into_iter().map(|file| Selected {
        data: parse(&file.payload),
        file: file.name,
    });
    let best = select_best(parsed, |s| score(&s.data));
    if let Some(ref s) = best {
        tracing::debug!(prefix, file = %s.file, "selected best result file");
    }
    Ok(best)
}

/// Discover files for `prefix` and parse every one, in discovery order.
pub fn parse_all<T, P>(
    source: &dyn IResultSource,
    prefix: &str,
    parse: P,
) -> Result<Vec<Selected<T>>, DiscoveryError>
where
    P: Fn(&serde_json::Value) -> T,
{
    Ok(source
        .list_candidates(prefix)?
        .into_iter()
        .map(|file| Selected {
            data: parse(&file.payload),
            file: file.name,
        })
        .collect())
}
