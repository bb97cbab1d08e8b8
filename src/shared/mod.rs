pub(crate) mod fuzzy;
pub mod format;
pub mod geo;
pub mod time;

pub use format::*;
pub use geo::*;
pub use time::*;

use rayon::prelude::*;
use std::cmp::Ordering;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn normalized_name(&self) -> &str;
    /// Lowercased secondary-language name, if the entity has one.
    fn normalized_alternate_name(&self) -> Option<&str> {
        None
    }
}

/// Lowercases and collapses whitespace so names compare the way users type them.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generic name search built for multithreaded searching.
///
/// Substring hits on either name rank above fuzzy hits; fuzzy hits are
/// ordered by score. An empty needle matches everything in input order.
pub fn search<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Identifiable,
{
    let normalized_needle = normalize(needle);
    if normalized_needle.is_empty() {
        return haystack.iter().collect();
    }

    let mut results: Vec<(usize, &T, f64)> = haystack
        .par_iter()
        .enumerate()
        .filter_map(|(i, hay)| {
            let names = std::iter::once(hay.normalized_name()).chain(hay.normalized_alternate_name());
            let mut best: f64 = 0.0;
            for name in names {
                let score = if name.contains(&normalized_needle) {
                    2.0
                } else {
                    fuzzy::score(&normalized_needle, name)
                };
                best = best.max(score);
            }
            if best > 0.1 { Some((i, hay, best)) } else { None }
        })
        .collect();

    results.par_sort_unstable_by(|(ia, _, a), (ib, _, b)| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal).then(ia.cmp(ib))
    });
    results.into_iter().map(|(_, entity, _)| entity).collect()
}
