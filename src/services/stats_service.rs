//! Statistics service
//!
//! Read-side aggregations over a student's persisted solve and contest
//! snapshots, all over a caller-specified trailing-day window.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{
        DEFAULT_CONTEST_HISTORY_QUERY_DAYS, RATING_BUCKET_MAX, RATING_BUCKET_MIN,
        RATING_BUCKET_WIDTH, UNRATED_BUCKET_LABEL,
    },
    db::repositories::{ContestHistoryRepository, SolvedProblemRepository, StudentRepository},
    error::{AppError, AppResult},
    handlers::analytics::response::{
        ContestHistoryResponse, ContestSummary, MostDifficultProblem, ProblemStatsResponse,
        RatingBucket, RatingDistributionResponse, RatingGraphPoint,
    },
    models::SolvedProblem,
};

/// Statistics service for analytics reads
pub struct StatsService;

impl StatsService {
    /// Problem-solving statistics over a trailing window (all-time when `days` is None)
    pub async fn problem_stats(
        pool: &PgPool,
        student_id: &Uuid,
        days: Option<i64>,
    ) -> AppResult<ProblemStatsResponse> {
        Self::require_student(pool, student_id).await?;

        let (from, to) = resolve_window(days);
        let solved = SolvedProblemRepository::list_in_window(pool, student_id, from, to).await?;

        let total = solved.len();
        let most_difficult = most_difficult_problem(&solved);
        let average_rating = average_rating(&solved);

        let day_span = days.unwrap_or_else(|| {
            let span = to - from;
            span.num_days() + i64::from(span.num_seconds() % 86_400 != 0)
        });
        let average_per_day = round2(total as f64 / day_span.max(1) as f64);

        Ok(ProblemStatsResponse {
            student_id: *student_id,
            from_date: from,
            to_date: to,
            total_problems_solved: total as i64,
            most_difficult_problem: most_difficult,
            average_rating,
            average_problems_per_day: average_per_day,
        })
    }

    /// Histogram of solve counts per 100-point difficulty band
    pub async fn rating_distribution(
        pool: &PgPool,
        student_id: &Uuid,
        days: Option<i64>,
    ) -> AppResult<RatingDistributionResponse> {
        Self::require_student(pool, student_id).await?;

        let (from, to) = resolve_window(days);
        let solved = SolvedProblemRepository::list_in_window(pool, student_id, from, to).await?;

        let total = solved.len();
        let buckets = bucket_ratings(solved.iter().map(|p| p.rating));

        Ok(RatingDistributionResponse {
            student_id: *student_id,
            from_date: from,
            to_date: to,
            total_problems: total as i64,
            rating_distribution: buckets,
        })
    }

    /// Contest history with a rating-over-time series (default window: 30 days)
    pub async fn contest_history(
        pool: &PgPool,
        student_id: &Uuid,
        days: Option<i64>,
    ) -> AppResult<ContestHistoryResponse> {
        Self::require_student(pool, student_id).await?;

        let days = days.unwrap_or(DEFAULT_CONTEST_HISTORY_QUERY_DAYS);
        let to = Utc::now();
        let since = to - Duration::days(days);

        let contests = ContestHistoryRepository::list_since(pool, student_id, since).await?;

        let rating_graph = contests
            .iter()
            .map(|c| RatingGraphPoint {
                date: c.timestamp,
                rating: c.new_rating,
            })
            .collect();

        let contests = contests
            .into_iter()
            .map(|c| ContestSummary {
                name: c.contest_name,
                contest_id: c.contest_id,
                rank: c.rank,
                old_rating: c.old_rating,
                new_rating: c.new_rating,
                rating_change: c.rating_change,
                unsolved_count: c.unsolved_count,
                date: c.timestamp,
            })
            .collect();

        Ok(ContestHistoryResponse {
            student_id: *student_id,
            from_date: since,
            to_date: to,
            rating_graph,
            contests,
        })
    }

    async fn require_student(pool: &PgPool, student_id: &Uuid) -> AppResult<()> {
        StudentRepository::find_by_id(pool, student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;
        Ok(())
    }
}

/// Resolve a trailing-day window; `None` means all-time (floored at 2000-01-01)
fn resolve_window(days: Option<i64>) -> (DateTime<Utc>, DateTime<Utc>) {
    let to = Utc::now();
    let from = match days {
        Some(days) => to - Duration::days(days),
        None => Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
    };
    (from, to)
}

/// Highest-rated solve, None when no solve carries a rating
fn most_difficult_problem(solved: &[SolvedProblem]) -> Option<MostDifficultProblem> {
    solved
        .iter()
        .filter(|p| p.rating.is_some())
        .max_by_key(|p| p.rating)
        .map(|p| MostDifficultProblem {
            problem_id: p.problem_id.clone(),
            rating: p.rating,
        })
}

/// Mean rating over rated solves, rounded to the nearest integer
fn average_rating(solved: &[SolvedProblem]) -> Option<i32> {
    let rated: Vec<i32> = solved.iter().filter_map(|p| p.rating).collect();
    if rated.is_empty() {
        return None;
    }

    let sum: i64 = rated.iter().map(|&r| i64::from(r)).sum();
    Some((sum as f64 / rated.len() as f64).round() as i32)
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Count ratings into fixed 100-wide bands, dropping empty buckets
///
/// Bands run `< 800`, `800-899` … `2900-2999`, `>= 3000`, plus an `Unrated`
/// bucket for solves whose problem has no difficulty.
fn bucket_ratings(ratings: impl Iterator<Item = Option<i32>> + Clone) -> Vec<RatingBucket> {
    let total = ratings.clone().count();
    if total == 0 {
        return Vec::new();
    }

    let mut labels = vec![format!("< {RATING_BUCKET_MIN}")];
    let mut lower = RATING_BUCKET_MIN;
    while lower < RATING_BUCKET_MAX {
        labels.push(format!("{}-{}", lower, lower + RATING_BUCKET_WIDTH - 1));
        lower += RATING_BUCKET_WIDTH;
    }
    labels.push(format!(">= {RATING_BUCKET_MAX}"));
    labels.push(UNRATED_BUCKET_LABEL.to_string());

    let mut counts = vec![0i64; labels.len()];
    for rating in ratings {
        let idx = match rating {
            None => labels.len() - 1,
            Some(r) if r < RATING_BUCKET_MIN => 0,
            Some(r) if r >= RATING_BUCKET_MAX => labels.len() - 2,
            Some(r) => (1 + (r - RATING_BUCKET_MIN) / RATING_BUCKET_WIDTH) as usize,
        };
        counts[idx] += 1;
    }

    labels
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(range, count)| RatingBucket {
            range,
            count,
            percentage: ((count * 100) as f64 / total as f64).round() as i32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(problem_id: &str, rating: Option<i32>, solved_at: DateTime<Utc>) -> SolvedProblem {
        SolvedProblem {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            problem_id: problem_id.to_string(),
            rating,
            solved_at,
        }
    }

    #[test]
    fn test_resolve_window_all_time_floor() {
        let (from, _) = resolve_window(None);
        assert_eq!(from, Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_resolve_window_trailing_days() {
        let (from, to) = resolve_window(Some(7));
        assert_eq!((to - from).num_days(), 7);
    }

    #[test]
    fn test_most_difficult_ignores_unrated() {
        let now = Utc::now();
        let solved = vec![
            solve("100-A", Some(800), now),
            solve("200-B", None, now),
            solve("300-C", Some(1900), now),
        ];

        let hardest = most_difficult_problem(&solved).unwrap();
        assert_eq!(hardest.problem_id, "300-C");
        assert_eq!(hardest.rating, Some(1900));
    }

    #[test]
    fn test_most_difficult_none_without_rated_solves() {
        let now = Utc::now();
        assert!(most_difficult_problem(&[solve("100-A", None, now)]).is_none());
        assert!(most_difficult_problem(&[]).is_none());
    }

    #[test]
    fn test_average_rating_rounds() {
        let now = Utc::now();
        let solved = vec![
            solve("a", Some(800), now),
            solve("b", Some(1001), now),
            solve("c", None, now),
        ];

        // (800 + 1001) / 2 = 900.5 rounds to 901
        assert_eq!(average_rating(&solved), Some(901));
    }

    #[test]
    fn test_average_rating_none_without_rated_solves() {
        let now = Utc::now();
        assert_eq!(average_rating(&[solve("a", None, now)]), None);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.675), 2.68);
        assert_eq!(round2(5.0), 5.0);
    }

    #[test]
    fn test_bucket_labels_and_membership() {
        let ratings = vec![Some(799), Some(800), Some(899), Some(2999), Some(3200), None];
        let buckets = bucket_ratings(ratings.into_iter());

        let ranges: Vec<&str> = buckets.iter().map(|b| b.range.as_str()).collect();
        assert_eq!(
            ranges,
            vec!["< 800", "800-899", "2900-2999", ">= 3000", "Unrated"]
        );
        // 800 and 899 share a band
        assert_eq!(buckets[1].count, 2);
    }

    #[test]
    fn test_bucket_percentages_sum_near_100() {
        let ratings = vec![Some(850), Some(950), Some(1050)];
        let buckets = bucket_ratings(ratings.into_iter());

        let sum: i32 = buckets.iter().map(|b| b.percentage).sum();
        // Independent rounding: tolerance of one per bucket
        assert!((sum - 100).abs() <= buckets.len() as i32);
    }

    #[test]
    fn test_bucket_empty_input() {
        assert!(bucket_ratings(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_empty_buckets_omitted() {
        let buckets = bucket_ratings(vec![Some(1500)].into_iter());
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].range, "1500-1599");
        assert_eq!(buckets[0].percentage, 100);
    }
}
