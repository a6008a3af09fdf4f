//! Dependency resolution tie-break
//!
//! Local and external dependencies are both resolved by probing an ordered
//! list of candidate roots. The outcome only depends on how many roots
//! matched: none, exactly one, or several.

/// Outcome of probing the candidate roots for one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// No root holds the dependency.
    NotFound,
    /// Exactly one root holds it.
    Unique(T),
    /// Several roots hold it, in probe order. Nothing is resolved.
    Ambiguous(Vec<T>),
}

impl<T> Resolution<T> {
    pub fn from_matches(mut matches: Vec<T>) -> Self {
        match matches.len() {
            0 => Resolution::NotFound,
            1 => match matches.pop() {
                Some(only) => Resolution::Unique(only),
                None => Resolution::NotFound,
            },
            _ => Resolution::Ambiguous(matches),
        }
    }
}

/// Probe `candidates` in order, keeping those `probe` maps to a match.
pub fn resolve_in<C, T, F>(candidates: C, probe: F) -> Resolution<T>
where
    C: IntoIterator,
    F: FnMut(C::Item) -> Option<T>,
{
    Resolution::from_matches(candidates.into_iter().filter_map(probe).collect())
}
