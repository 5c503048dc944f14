//! Repository selection.
//!
//! Picks the bounded subset of configured repositories shown on a run.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Selects at most `limit` repositories from `candidates`.
///
/// When `random` is set the candidates are shuffled uniformly before
/// truncation, so repeated runs show different subsets. Otherwise the first
/// `limit` entries are returned in configured order.
#[must_use]
pub fn select_repositories(candidates: &[String], limit: usize, random: bool) -> Vec<String> {
    select_repositories_with(&mut rand::thread_rng(), candidates, limit, random)
}

/// Like [`select_repositories`], drawing randomness from `rng`.
pub fn select_repositories_with<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[String],
    limit: usize,
    random: bool,
) -> Vec<String> {
    let mut selected = candidates.to_vec();
    if random {
        selected.shuffle(rng);
    }
    selected.truncate(limit);

    debug!(
        candidates = candidates.len(),
        selected = selected.len(),
        random,
        "Selected repositories"
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn candidates(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn takes_first_entries_in_order() {
        let repos = candidates(&["a/x", "a/y", "a/z"]);

        assert_eq!(select_repositories(&repos, 2, false), vec!["a/x", "a/y"]);
    }

    #[test]
    fn limit_larger_than_candidates_returns_all() {
        let repos = candidates(&["a/x", "a/y"]);

        assert_eq!(select_repositories(&repos, 10, false), repos);
        assert_eq!(select_repositories(&repos, 10, true).len(), 2);
    }

    #[test]
    fn output_size_is_min_of_limit_and_candidates() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..6 {
            let repos: Vec<String> = (0..n).map(|i| format!("owner/repo-{i}")).collect();
            for limit in 0..8 {
                for random in [false, true] {
                    let selected = select_repositories_with(&mut rng, &repos, limit, random);
                    assert_eq!(selected.len(), limit.min(n));
                }
            }
        }
    }

    #[test]
    fn deterministic_without_randomization() {
        let repos = candidates(&["a/x", "a/y", "a/z", "b/w"]);

        let first = select_repositories(&repos, 3, false);
        let second = select_repositories(&repos, 3, false);
        assert_eq!(first, second);
        assert_eq!(first, repos[..3]);
    }

    #[test]
    fn random_selection_is_distinct_members() {
        let repos: Vec<String> = (0..20).map(|i| format!("owner/repo-{i}")).collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let selected = select_repositories_with(&mut rng, &repos, 5, true);
            let unique: HashSet<&String> = selected.iter().collect();

            assert_eq!(unique.len(), selected.len());
            assert!(selected.iter().all(|s| repos.contains(s)));
        }
    }

    #[test]
    fn random_selection_varies_between_runs() {
        let repos: Vec<String> = (0..20).map(|i| format!("owner/repo-{i}")).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let runs: HashSet<Vec<String>> = (0..10)
            .map(|_| select_repositories_with(&mut rng, &repos, 3, true))
            .collect();
        assert!(runs.len() > 1);
    }
}
