//! Candidate filters applied before a neighbor is scored.
//!
//! A rejected candidate is given infinite energy, so the Metropolis test can
//! never accept it. [`VisitedSet`] is the filter used for harvesting: it
//! holds every solution found so far and steers later runs away from them.

use std::collections::HashSet;

/// Decides whether a candidate permutation may be scored.
///
/// Any `Fn(&[usize]) -> bool` closure is a filter.
pub trait CandidateFilter {
    /// Returns `false` to force the candidate's energy to infinity.
    fn admits(&self, candidate: &[usize]) -> bool;
}

/// Filter that admits every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl CandidateFilter for AcceptAll {
    fn admits(&self, _candidate: &[usize]) -> bool {
        true
    }
}

impl<F> CandidateFilter for F
where
    F: Fn(&[usize]) -> bool,
{
    fn admits(&self, candidate: &[usize]) -> bool {
        self(candidate)
    }
}

/// Set of permutations that candidates must not revisit.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    states: HashSet<Vec<usize>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a permutation as visited. Returns `false` if it already was.
    pub fn insert(&mut self, state: Vec<usize>) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: &[usize]) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.states.iter().map(Vec::as_slice)
    }
}

impl CandidateFilter for VisitedSet {
    fn admits(&self, candidate: &[usize]) -> bool {
        !self.contains(candidate)
    }
}

impl FromIterator<Vec<usize>> for VisitedSet {
    fn from_iter<I: IntoIterator<Item = Vec<usize>>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.admits(&[0, 1, 2]));
        assert!(AcceptAll.admits(&[]));
    }

    #[test]
    fn test_visited_set_rejects_members_only() {
        let mut visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert!(visited.insert(vec![1, 3, 0, 2]));
        assert!(!visited.insert(vec![1, 3, 0, 2]));
        assert_eq!(visited.len(), 1);

        assert!(!visited.admits(&[1, 3, 0, 2]));
        assert!(visited.admits(&[2, 0, 3, 1]));
    }

    #[test]
    fn test_closure_filter() {
        let even_first = |candidate: &[usize]| candidate.first().is_some_and(|c| c % 2 == 0);
        assert!(even_first.admits(&[0, 1]));
        assert!(!even_first.admits(&[1, 0]));
    }

    #[test]
    fn test_from_iterator() {
        let visited: VisitedSet = [vec![0, 1], vec![1, 0], vec![0, 1]].into_iter().collect();
        assert_eq!(visited.len(), 2);
        let mut states: Vec<&[usize]> = visited.iter().collect();
        states.sort();
        assert_eq!(states, vec![&[0, 1][..], &[1, 0][..]]);
    }
}
