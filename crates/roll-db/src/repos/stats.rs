//! Statistics derived from the ledger on every request. Nothing is cached.

use roll_core::responses::StatsReport;
use roll_core::stats::{
    ClassStanding, ClassStat, MonthSummary, OverallStats, summarize_by_month, validate_target_rate,
};

use crate::error::DatabaseError;
use crate::helpers::get_count;
use crate::repos::attendance::AttendanceFilter;
use crate::service::RollService;

impl RollService {
    /// Per-class totals for every class the user owns, including classes with
    /// no marked history. Ordered by subject, day, then start time.
    pub async fn compute_stats(&self, user_id: &str) -> Result<Vec<ClassStat>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT c.id, c.subject, COUNT(a.id), COALESCE(SUM(a.attended), 0)
                 FROM classes c
                 LEFT JOIN attendance a ON a.class_id = c.id AND a.user_id = c.user_id
                 WHERE c.user_id = ?1
                 GROUP BY c.id
                 ORDER BY c.subject, c.day_of_week, c.start_time, c.created_at",
                [user_id],
            )
            .await?;

        let mut stats = Vec::new();
        while let Some(row) = rows.next().await? {
            stats.push(ClassStat::from_counts(
                row.get::<String>(0)?,
                row.get::<String>(1)?,
                get_count(&row, 2)?,
                get_count(&row, 3)?,
            ));
        }
        tracing::debug!(user_id, classes = stats.len(), "computed stats");
        Ok(stats)
    }

    /// Stats paired with their projection against `target_rate`, plus the
    /// overall roll-up.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `target_rate` is outside `(0, 1]`.
    pub async fn compute_stats_with_projection(
        &self,
        user_id: &str,
        target_rate: f64,
    ) -> Result<StatsReport, DatabaseError> {
        let target_rate = validate_target_rate(target_rate)?;
        let stats = self.compute_stats(user_id).await?;
        let overall = OverallStats::from_stats(&stats);

        let classes = stats
            .into_iter()
            .map(|stat| {
                let projection = stat.projection(target_rate)?;
                Ok(ClassStanding { stat, projection })
            })
            .collect::<Result<Vec<_>, DatabaseError>>()?;

        Ok(StatsReport {
            target_rate,
            classes,
            overall,
        })
    }

    /// Ledger grouped by calendar month, newest first.
    pub async fn monthly_summary(&self, user_id: &str) -> Result<Vec<MonthSummary>, DatabaseError> {
        let views = self
            .list_attendance(user_id, &AttendanceFilter::default())
            .await?;
        Ok(summarize_by_month(&views))
    }

    pub async fn overall_stats(&self, user_id: &str) -> Result<OverallStats, DatabaseError> {
        let stats = self.compute_stats(user_id).await?;
        Ok(OverallStats::from_stats(&stats))
    }
}
