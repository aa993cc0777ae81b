//! Pure sync transforms
//!
//! Deterministic, I/O-free functions that turn raw Codeforces rating changes
//! and submissions into the normalized record sets the sync pipeline persists.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::{
    constants::{UNKNOWN_CONTEST_KEY, VERDICT_ACCEPTED},
    models::{NewContestEntry, NewSolvedProblem, RatingChange, Submission},
};

/// Build the contest history snapshot from rating changes
///
/// Rating changes are sorted by update time before deduplication, so when the
/// upstream reports the same contest twice the chronologically earliest entry
/// wins. Entries older than `cutoff` are dropped.
pub fn contest_history(
    rating_changes: &[RatingChange],
    submissions: &[Submission],
    cutoff: DateTime<Utc>,
) -> Vec<NewContestEntry> {
    let mut changes: Vec<&RatingChange> = rating_changes.iter().collect();
    changes.sort_by_key(|c| c.rating_update_time_seconds);

    let cutoff_seconds = cutoff.timestamp();
    let mut seen_contests = HashSet::new();
    let mut entries = Vec::new();

    for change in changes {
        if change.rating_update_time_seconds < cutoff_seconds {
            continue;
        }
        if !seen_contests.insert(change.contest_id) {
            continue;
        }

        let timestamp = DateTime::from_timestamp(change.rating_update_time_seconds, 0)
            .unwrap_or_else(Utc::now);

        entries.push(NewContestEntry {
            contest_id: change.contest_id.to_string(),
            contest_name: change.contest_name.clone(),
            rank: change.rank,
            old_rating: change.old_rating,
            new_rating: change.new_rating,
            rating_change: change.new_rating - change.old_rating,
            unsolved_count: unsolved_count(submissions, change.contest_id),
            timestamp,
        });
    }

    entries
}

/// Count problems attempted but never solved in a contest
///
/// Solved indices are a subset of attempted indices, so the difference is
/// never negative.
pub fn unsolved_count(submissions: &[Submission], contest_id: i64) -> i32 {
    let mut attempted = HashSet::new();
    let mut solved = HashSet::new();

    for sub in submissions {
        if sub.contest_id != Some(contest_id) {
            continue;
        }
        let Some(problem) = &sub.problem else {
            continue;
        };

        attempted.insert(problem.index.as_str());
        if sub.verdict.as_deref() == Some(VERDICT_ACCEPTED) {
            solved.insert(problem.index.as_str());
        }
    }

    (attempted.len() - solved.len()) as i32
}

/// Build the solved-problem snapshot from submissions
///
/// One record per distinct problem key, carrying the earliest accepted
/// submission time. Problems without a contest id share the "unknown" key
/// namespace.
pub fn solved_problems(submissions: &[Submission]) -> Vec<NewSolvedProblem> {
    let mut earliest: HashMap<String, &Submission> = HashMap::new();

    for sub in submissions {
        if sub.verdict.as_deref() != Some(VERDICT_ACCEPTED) {
            continue;
        }
        let Some(problem) = &sub.problem else {
            continue;
        };

        let contest_key = problem
            .contest_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| UNKNOWN_CONTEST_KEY.to_string());
        let key = format!("{}-{}", contest_key, problem.index);

        match earliest.get(&key) {
            Some(existing) if existing.creation_time_seconds <= sub.creation_time_seconds => {}
            _ => {
                earliest.insert(key, sub);
            }
        }
    }

    let mut records: Vec<NewSolvedProblem> = earliest
        .into_iter()
        .map(|(problem_id, sub)| NewSolvedProblem {
            problem_id,
            rating: sub.problem.as_ref().and_then(|p| p.rating),
            solved_at: DateTime::from_timestamp(sub.creation_time_seconds, 0)
                .unwrap_or_else(Utc::now),
        })
        .collect();

    // HashMap iteration order is arbitrary; keep output deterministic
    records.sort_by(|a, b| a.solved_at.cmp(&b.solved_at).then(a.problem_id.cmp(&b.problem_id)));
    records
}

/// Derive the cached rating snapshot from rating changes
///
/// Returns `None` when the student has no rated contests, leaving the stored
/// ratings NULL rather than faking a rating of zero.
pub fn rating_summary(rating_changes: &[RatingChange]) -> Option<(i32, i32)> {
    if rating_changes.is_empty() {
        return None;
    }

    let current = rating_changes
        .iter()
        .max_by_key(|c| c.rating_update_time_seconds)
        .map(|c| c.new_rating)?;
    let max = rating_changes.iter().map(|c| c.new_rating).max()?;

    Some((current, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Problem;
    use chrono::TimeZone;

    fn rating_change(contest_id: i64, old: i32, new: i32, time: i64) -> RatingChange {
        RatingChange {
            contest_id,
            contest_name: format!("Contest {contest_id}"),
            handle: "alice".to_string(),
            rank: 42,
            rating_update_time_seconds: time,
            old_rating: old,
            new_rating: new,
        }
    }

    fn submission(
        id: i64,
        contest_id: Option<i64>,
        index: &str,
        verdict: Option<&str>,
        time: i64,
        rating: Option<i32>,
    ) -> Submission {
        Submission {
            id,
            contest_id,
            creation_time_seconds: time,
            problem: Some(Problem {
                contest_id,
                index: index.to_string(),
                name: None,
                rating,
            }),
            verdict: verdict.map(String::from),
        }
    }

    fn old_cutoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_contest_history_basic() {
        let changes = vec![rating_change(100, 1200, 1300, 1_650_000_000)];
        let subs = vec![submission(1, Some(100), "A", Some("OK"), 1_649_000_000, Some(800))];

        let entries = contest_history(&changes, &subs, old_cutoff());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].contest_id, "100");
        assert_eq!(entries[0].rating_change, 100);
        assert_eq!(entries[0].unsolved_count, 0);
    }

    #[test]
    fn test_contest_history_cutoff_filters_old_entries() {
        let changes = vec![
            rating_change(1, 1200, 1300, 1_000_000),
            rating_change(2, 1300, 1350, 1_650_000_000),
        ];

        let cutoff = DateTime::from_timestamp(1_600_000_000, 0).unwrap();
        let entries = contest_history(&changes, &[], cutoff);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].contest_id, "2");
    }

    #[test]
    fn test_contest_history_dedup_keeps_earliest() {
        // Same contest reported twice, out of chronological order
        let changes = vec![
            rating_change(100, 1400, 1500, 2_000_000_000),
            rating_change(100, 1200, 1300, 1_650_000_000),
        ];

        let entries = contest_history(&changes, &[], old_cutoff());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].old_rating, 1200);
        assert_eq!(entries[0].new_rating, 1300);
    }

    #[test]
    fn test_unsolved_count_partitions_attempted_and_solved() {
        let subs = vec![
            submission(1, Some(100), "A", Some("OK"), 100, None),
            submission(2, Some(100), "A", Some("WRONG_ANSWER"), 90, None),
            submission(3, Some(100), "B", Some("WRONG_ANSWER"), 110, None),
            submission(4, Some(100), "C", Some("TIME_LIMIT_EXCEEDED"), 120, None),
            submission(5, Some(100), "C", Some("OK"), 130, None),
            submission(6, Some(999), "A", Some("WRONG_ANSWER"), 140, None),
        ];

        // A solved, B unsolved, C solved; contest 999 is ignored
        assert_eq!(unsolved_count(&subs, 100), 1);
    }

    #[test]
    fn test_unsolved_count_never_negative() {
        let subs = vec![
            submission(1, Some(100), "A", Some("OK"), 100, None),
            submission(2, Some(100), "A", Some("OK"), 110, None),
        ];

        assert_eq!(unsolved_count(&subs, 100), 0);
        assert_eq!(unsolved_count(&subs, 200), 0);
    }

    #[test]
    fn test_solved_problems_keeps_earliest_accepted() {
        let subs = vec![
            submission(1, Some(100), "A", Some("OK"), 2_000, Some(800)),
            submission(2, Some(100), "A", Some("OK"), 1_000, Some(800)),
            submission(3, Some(100), "A", Some("WRONG_ANSWER"), 500, Some(800)),
        ];

        let solved = solved_problems(&subs);

        assert_eq!(solved.len(), 1);
        assert_eq!(solved[0].problem_id, "100-A");
        assert_eq!(solved[0].solved_at.timestamp(), 1_000);
    }

    #[test]
    fn test_solved_problems_unknown_contest_key() {
        let mut sub = submission(1, None, "A", Some("OK"), 1_000, None);
        sub.problem.as_mut().unwrap().contest_id = None;

        let solved = solved_problems(&[sub]);

        assert_eq!(solved.len(), 1);
        assert_eq!(solved[0].problem_id, "unknown-A");
        assert_eq!(solved[0].rating, None);
    }

    #[test]
    fn test_solved_problems_skips_rejected_and_problemless() {
        let no_problem = Submission {
            id: 9,
            contest_id: Some(100),
            creation_time_seconds: 1_000,
            problem: None,
            verdict: Some("OK".to_string()),
        };
        let subs = vec![
            submission(1, Some(100), "A", Some("WRONG_ANSWER"), 1_000, None),
            submission(2, Some(100), "B", None, 1_000, None),
            no_problem,
        ];

        assert!(solved_problems(&subs).is_empty());
    }

    #[test]
    fn test_solved_problems_deterministic_order() {
        let subs = vec![
            submission(1, Some(100), "B", Some("OK"), 2_000, None),
            submission(2, Some(100), "A", Some("OK"), 1_000, None),
        ];

        let solved = solved_problems(&subs);

        assert_eq!(solved[0].problem_id, "100-A");
        assert_eq!(solved[1].problem_id, "100-B");
    }

    #[test]
    fn test_rating_summary() {
        let changes = vec![
            rating_change(1, 1200, 1500, 1_000),
            rating_change(2, 1500, 1400, 2_000),
        ];

        // Current follows the last change, max the peak
        assert_eq!(rating_summary(&changes), Some((1400, 1500)));
    }

    #[test]
    fn test_rating_summary_unordered_input() {
        let changes = vec![
            rating_change(2, 1500, 1400, 2_000),
            rating_change(1, 1200, 1500, 1_000),
        ];

        assert_eq!(rating_summary(&changes), Some((1400, 1500)));
    }

    #[test]
    fn test_rating_summary_empty() {
        assert_eq!(rating_summary(&[]), None);
    }

    #[test]
    fn test_idempotence() {
        // Identical input yields identical snapshots
        let changes = vec![rating_change(100, 1200, 1300, 1_650_000_000)];
        let subs = vec![
            submission(1, Some(100), "A", Some("OK"), 1_649_000_000, Some(800)),
            submission(2, Some(100), "B", Some("WRONG_ANSWER"), 1_649_100_000, None),
        ];

        let first = (
            contest_history(&changes, &subs, old_cutoff()),
            solved_problems(&subs),
        );
        let second = (
            contest_history(&changes, &subs, old_cutoff()),
            solved_problems(&subs),
        );

        assert_eq!(first, second);
    }
}
