//! Attendance ledger repository.
//!
//! One record per `(user, class, date)`, enforced by a `UNIQUE` constraint.
//! Marking is an atomic insert that falls back to an in-place update on that
//! key, so concurrent marks for the same occurrence never produce two rows.

use chrono::{NaiveDate, Utc};

use roll_core::calendar::{DayOfWeek, format_date};
use roll_core::entities::{
    AttendanceDecision, AttendanceRecord, AttendanceView, DailyOccurrence, DailySchedule,
};
use roll_core::ids::PREFIX_ATTENDANCE;
use roll_core::responses::BulkUpdateResponse;

use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, is_id_collision, parse_datetime, parse_optional_enum, parse_stored_date,
    parse_stored_day, parse_stored_time,
};
use crate::repos::timetable::{CLASS_COL_COUNT, CLASS_COLS, row_to_class};
use crate::service::RollService;

const ATTENDANCE_COLS: &str = "a.id, a.user_id, a.class_id, a.date, a.attended, \
                               a.reason_category, a.reason_text, a.created_at, a.updated_at";

/// Fresh ids drawn before a mark gives up on `attendance.id` collisions.
const MAX_ID_ATTEMPTS: u32 = 3;

/// Number of columns in [`ATTENDANCE_COLS`].
const ATTENDANCE_COL_COUNT: i32 = 9;

fn row_to_record(row: &libsql::Row, base: i32) -> Result<AttendanceRecord, DatabaseError> {
    Ok(AttendanceRecord {
        id: row.get(base)?,
        user_id: row.get(base + 1)?,
        class_id: row.get(base + 2)?,
        date: parse_stored_date(&row.get::<String>(base + 3)?)?,
        attended: row.get::<i64>(base + 4)? != 0,
        reason_category: parse_optional_enum(get_opt_string(row, base + 5)?.as_deref())?,
        reason_text: get_opt_string(row, base + 6)?,
        created_at: parse_datetime(&row.get::<String>(base + 7)?)?,
        updated_at: parse_datetime(&row.get::<String>(base + 8)?)?,
    })
}

fn row_to_view(row: &libsql::Row) -> Result<AttendanceView, DatabaseError> {
    let base = ATTENDANCE_COL_COUNT;
    Ok(AttendanceView {
        record: row_to_record(row, 0)?,
        subject: row.get(base)?,
        teacher: row.get(base + 1)?,
        day_of_week: parse_stored_day(row.get::<i64>(base + 2)?)?,
        start_time: parse_stored_time(&row.get::<String>(base + 3)?)?,
        end_time: parse_stored_time(&row.get::<String>(base + 4)?)?,
    })
}

/// Filter criteria for ledger listings. Both bounds are inclusive.
#[derive(Debug, Default, Clone)]
pub struct AttendanceFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl RollService {
    /// Every timetable slot that falls on `date`'s weekday, each paired with
    /// the record for that exact date if one exists. Ordered by start time.
    pub async fn daily_occurrences(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<DailySchedule, DatabaseError> {
        let day = DayOfWeek::of(date);
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {CLASS_COLS}, {ATTENDANCE_COLS}
                     FROM classes c
                     LEFT JOIN attendance a
                       ON a.class_id = c.id AND a.user_id = c.user_id AND a.date = ?3
                     WHERE c.user_id = ?1 AND c.day_of_week = ?2
                     ORDER BY c.start_time, c.created_at"
                ),
                libsql::params![user_id, i64::from(day), format_date(date)],
            )
            .await?;

        let mut occurrences = Vec::new();
        while let Some(row) = rows.next().await? {
            let class = row_to_class(&row, 0)?;
            let attendance = match row.get::<Option<String>>(CLASS_COL_COUNT)? {
                Some(_) => Some(row_to_record(&row, CLASS_COL_COUNT)?),
                None => None,
            };
            occurrences.push(DailyOccurrence { class, attendance });
        }

        tracing::debug!(user_id, %date, %day, count = occurrences.len(), "resolved daily occurrences");
        Ok(DailySchedule {
            date,
            day_of_week: day,
            occurrences,
        })
    }

    /// Record attendance for one class occurrence, inserting or overwriting
    /// the record keyed on `(user_id, class_id, date)`.
    ///
    /// An overwrite keeps the record's id and `created_at`. The date is not
    /// required to fall on the class's weekday.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the class is not owned by the user.
    pub async fn mark_attendance(
        &self,
        user_id: &str,
        class_id: &str,
        date: NaiveDate,
        decision: &AttendanceDecision,
    ) -> Result<AttendanceRecord, DatabaseError> {
        let class = self.get_class(user_id, class_id).await?;
        if class.day_of_week != DayOfWeek::of(date) {
            tracing::debug!(class_id, %date, "marking off-schedule occurrence");
        }

        let decision = decision.clone().normalized();
        let date_str = format_date(date);

        let mut attempt = 1;
        loop {
            let id = self.db().generate_id(PREFIX_ATTENDANCE).await?;
            match self
                .upsert_record(&id, user_id, class_id, &date_str, &decision)
                .await
            {
                Ok(_) => break,
                Err(e) if is_id_collision(&e, "attendance") && attempt < MAX_ID_ATTEMPTS => {
                    tracing::warn!(record_id = %id, attempt, "generated attendance id collided, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ATTENDANCE_COLS} FROM attendance a
                     WHERE a.user_id = ?1 AND a.class_id = ?2 AND a.date = ?3"
                ),
                [user_id, class_id, date_str.as_str()],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            tracing::warn!(user_id, class_id, date = %date_str, "upsert left no attendance row");
            return Err(DatabaseError::NoResult);
        };
        let record = row_to_record(&row, 0)?;

        tracing::info!(
            user_id,
            class_id,
            date = %date_str,
            attended = record.attended,
            record_id = %record.id,
            "attendance marked"
        );
        Ok(record)
    }

    /// Insert a record under `id`, or overwrite the decision of the record
    /// already keyed on `(user_id, class_id, date)`.
    pub(crate) async fn upsert_record(
        &self,
        id: &str,
        user_id: &str,
        class_id: &str,
        date: &str,
        decision: &AttendanceDecision,
    ) -> Result<u64, libsql::Error> {
        let now = Utc::now().to_rfc3339();
        self.db()
            .conn()
            .execute(
                "INSERT INTO attendance (id, user_id, class_id, date, attended, reason_category,
                                         reason_text, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
                 ON CONFLICT(user_id, class_id, date) DO UPDATE SET
                   attended = excluded.attended,
                   reason_category = excluded.reason_category,
                   reason_text = excluded.reason_text,
                   updated_at = excluded.updated_at",
                libsql::params![
                    id,
                    user_id,
                    class_id,
                    date,
                    i64::from(decision.attended),
                    decision.reason_category.map(|r| r.as_str()),
                    decision.reason_text.as_deref(),
                    now
                ],
            )
            .await
    }

    /// Ledger records joined with their class, newest date first and by start
    /// time within a day.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `from` is after `to`.
    pub async fn list_attendance(
        &self,
        user_id: &str,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceView>, DatabaseError> {
        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            if from > to {
                return Err(DatabaseError::Validation(format!(
                    "range start {from} is after range end {to}"
                )));
            }
        }

        let mut conditions = vec!["a.user_id = ?1".to_string()];
        let mut params: Vec<libsql::Value> = vec![libsql::Value::Text(user_id.to_string())];

        if let Some(from) = filter.from {
            params.push(libsql::Value::Text(format_date(from)));
            conditions.push(format!("a.date >= ?{}", params.len()));
        }
        if let Some(to) = filter.to {
            params.push(libsql::Value::Text(format_date(to)));
            conditions.push(format!("a.date <= ?{}", params.len()));
        }

        let limit_clause = filter
            .limit
            .map(|limit| format!("LIMIT {limit}"))
            .unwrap_or_default();
        let sql = format!(
            "SELECT {ATTENDANCE_COLS}, c.subject, c.teacher, c.day_of_week, c.start_time, c.end_time
             FROM attendance a
             JOIN classes c ON c.id = a.class_id
             WHERE {}
             ORDER BY a.date DESC, c.start_time, a.id
             {limit_clause}",
            conditions.join(" AND ")
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut views = Vec::new();
        while let Some(row) = rows.next().await? {
            views.push(row_to_view(&row)?);
        }
        tracing::debug!(user_id, count = views.len(), "listed attendance");
        Ok(views)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` unless the record belongs to the user.
    pub async fn get_attendance(
        &self,
        user_id: &str,
        record_id: &str,
    ) -> Result<AttendanceRecord, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ATTENDANCE_COLS} FROM attendance a WHERE a.id = ?1 AND a.user_id = ?2"
                ),
                [record_id, user_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("attendance record", record_id))?;
        row_to_record(&row, 0)
    }

    /// Edit one record by its own id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` unless the record belongs to the user.
    pub async fn update_attendance(
        &self,
        user_id: &str,
        record_id: &str,
        decision: &AttendanceDecision,
    ) -> Result<AttendanceRecord, DatabaseError> {
        let decision = decision.clone().normalized();
        let now = Utc::now();

        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE attendance
                 SET attended = ?1, reason_category = ?2, reason_text = ?3, updated_at = ?4
                 WHERE id = ?5 AND user_id = ?6",
                libsql::params![
                    i64::from(decision.attended),
                    decision.reason_category.map(|r| r.as_str()),
                    decision.reason_text.as_deref(),
                    now.to_rfc3339(),
                    record_id,
                    user_id
                ],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found("attendance record", record_id));
        }

        tracing::info!(user_id, record_id, attended = decision.attended, "attendance updated");
        self.get_attendance(user_id, record_id).await
    }

    /// Overwrite every record of the user whose class subject is exactly
    /// `subject`, across all dates, in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank subject.
    pub async fn bulk_update_by_subject(
        &self,
        user_id: &str,
        subject: &str,
        decision: &AttendanceDecision,
    ) -> Result<BulkUpdateResponse, DatabaseError> {
        if subject.trim().is_empty() {
            return Err(DatabaseError::Validation("subject must not be blank".into()));
        }
        let decision = decision.clone().normalized();
        let now = Utc::now();

        let tx = self.db().conn().transaction().await?;
        let updated = tx
            .execute(
                "UPDATE attendance
                 SET attended = ?1, reason_category = ?2, reason_text = ?3, updated_at = ?4
                 WHERE user_id = ?5
                   AND class_id IN (SELECT id FROM classes WHERE user_id = ?5 AND subject = ?6)",
                libsql::params![
                    i64::from(decision.attended),
                    decision.reason_category.map(|r| r.as_str()),
                    decision.reason_text.as_deref(),
                    now.to_rfc3339(),
                    user_id,
                    subject
                ],
            )
            .await?;
        tx.commit().await?;

        tracing::info!(user_id, subject, updated, attended = decision.attended, "bulk attendance update");
        Ok(BulkUpdateResponse {
            subject: subject.to_string(),
            updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_class, seed_user, test_service};
    use pretty_assertions::assert_eq;
    use roll_core::enums::ReasonCategory;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn daily_view_attaches_records_for_that_date_only() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let late = seed_class(&svc, &user.id, 1, "10:00", "11:00", "Math").await;
        let early = seed_class(&svc, &user.id, 1, "08:00", "09:00", "Physics").await;
        seed_class(&svc, &user.id, 2, "08:00", "09:00", "Tuesday-only").await;

        // 2024-01-15 is a Monday.
        svc.mark_attendance(&user.id, &early.id, date("2024-01-15"), &AttendanceDecision::present())
            .await
            .unwrap();
        svc.mark_attendance(&user.id, &late.id, date("2024-01-08"), &AttendanceDecision::present())
            .await
            .unwrap();

        let schedule = svc.daily_occurrences(&user.id, date("2024-01-15")).await.unwrap();
        assert_eq!(schedule.day_of_week, DayOfWeek::MONDAY);
        assert_eq!(schedule.occurrences.len(), 2);
        assert_eq!(schedule.occurrences[0].class.id, early.id);
        assert!(schedule.occurrences[0].attendance.as_ref().is_some_and(|a| a.attended));
        assert_eq!(schedule.occurrences[1].class.id, late.id);
        assert!(schedule.occurrences[1].attendance.is_none());
        assert_eq!(schedule.unmarked(), 1);
    }

    #[tokio::test]
    async fn daily_view_for_empty_day_is_empty() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        seed_class(&svc, &user.id, 1, "08:00", "09:00", "Physics").await;

        // 2024-01-14 is a Sunday.
        let schedule = svc.daily_occurrences(&user.id, date("2024-01-14")).await.unwrap();
        assert_eq!(schedule.day_of_week, DayOfWeek::SUNDAY);
        assert!(schedule.occurrences.is_empty());
    }

    #[tokio::test]
    async fn remark_overwrites_in_place() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let class = seed_class(&svc, &user.id, 1, "08:00", "09:00", "Physics").await;
        let d = date("2024-01-15");

        let first = svc
            .mark_attendance(
                &user.id,
                &class.id,
                d,
                &AttendanceDecision::absent(Some(ReasonCategory::Health), Some("fever")),
            )
            .await
            .unwrap();
        assert!(!first.attended);
        assert_eq!(first.reason_category, Some(ReasonCategory::Health));
        assert_eq!(first.reason_text.as_deref(), Some("fever"));

        let second = svc
            .mark_attendance(&user.id, &class.id, d, &AttendanceDecision::present())
            .await
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert!(second.attended);
        assert_eq!(second.reason_category, None);
        assert_eq!(second.reason_text, None);

        let all = svc.list_attendance(&user.id, &AttendanceFilter::default()).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn present_discards_supplied_reasons() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let class = seed_class(&svc, &user.id, 1, "08:00", "09:00", "Physics").await;

        let sneaky = AttendanceDecision {
            attended: true,
            reason_category: Some(ReasonCategory::Travel),
            reason_text: Some("bus".into()),
        };
        let record = svc
            .mark_attendance(&user.id, &class.id, date("2024-01-15"), &sneaky)
            .await
            .unwrap();
        assert_eq!(record.reason_category, None);
        assert_eq!(record.reason_text, None);
    }

    #[tokio::test]
    async fn absence_without_reason_is_allowed() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let class = seed_class(&svc, &user.id, 1, "08:00", "09:00", "Physics").await;

        let record = svc
            .mark_attendance(&user.id, &class.id, date("2024-01-15"), &AttendanceDecision::absent(None, Some("  ")))
            .await
            .unwrap();
        assert!(!record.attended);
        assert_eq!(record.reason_category, None);
        assert_eq!(record.reason_text, None);
    }

    #[tokio::test]
    async fn marking_another_users_class_is_not_found() {
        let svc = test_service().await;
        let alice = seed_user(&svc, "alice@x.y").await;
        let bob = seed_user(&svc, "bob@x.y").await;
        let class = seed_class(&svc, &alice.id, 1, "08:00", "09:00", "Physics").await;

        let err = svc
            .mark_attendance(&bob.id, &class.id, date("2024-01-15"), &AttendanceDecision::present())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
        assert!(svc.list_attendance(&alice.id, &AttendanceFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn off_schedule_dates_are_recordable() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let class = seed_class(&svc, &user.id, 1, "08:00", "09:00", "Physics").await;

        // 2024-01-13 is a Saturday; the class meets on Mondays.
        let record = svc
            .mark_attendance(&user.id, &class.id, date("2024-01-13"), &AttendanceDecision::present())
            .await
            .unwrap();
        assert_eq!(record.date, date("2024-01-13"));
    }

    #[tokio::test]
    async fn concurrent_marks_leave_exactly_one_record() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let class = seed_class(&svc, &user.id, 1, "08:00", "09:00", "Physics").await;
        let d = date("2024-01-15");

        let present = AttendanceDecision::present();
        let absent = AttendanceDecision::absent(Some(ReasonCategory::Strike), None);
        let (a, b) = tokio::join!(
            svc.mark_attendance(&user.id, &class.id, d, &present),
            svc.mark_attendance(&user.id, &class.id, d, &absent),
        );
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_eq!(a.id, b.id);

        let all = svc.list_attendance(&user.id, &AttendanceFilter::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        let stored = &all[0].record;
        assert!(stored.decision() == present || stored.decision() == absent);
    }

    #[tokio::test]
    async fn reused_record_id_is_an_id_collision_not_an_overwrite() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let class = seed_class(&svc, &user.id, 1, "08:00", "09:00", "Physics").await;
        let present = AttendanceDecision::present();

        let first = svc
            .mark_attendance(&user.id, &class.id, date("2024-01-15"), &present)
            .await
            .unwrap();

        let err = svc
            .upsert_record(&first.id, &user.id, &class.id, "2024-01-22", &present)
            .await
            .unwrap_err();
        assert!(is_id_collision(&err, "attendance"), "{err}");

        // Same triple under a fresh id is the ordinary overwrite path.
        svc.upsert_record("att-fresh", &user.id, &class.id, "2024-01-15", &present)
            .await
            .unwrap();

        let second = svc
            .mark_attendance(&user.id, &class.id, date("2024-01-22"), &present)
            .await
            .unwrap();
        assert_ne!(second.id, first.id);
        assert_eq!(second.date, date("2024-01-22"));
    }

    #[tokio::test]
    async fn long_ledger_of_distinct_dates_all_mark() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let class = seed_class(&svc, &user.id, 1, "08:00", "09:00", "Physics").await;

        let start = date("2020-01-01");
        let mut ids = std::collections::HashSet::new();
        for offset in 0..2_000 {
            let day = start + chrono::Days::new(offset);
            let record = svc
                .mark_attendance(&user.id, &class.id, day, &AttendanceDecision::present())
                .await
                .unwrap();
            assert_eq!(record.id.len(), PREFIX_ATTENDANCE.len() + 1 + 16);
            ids.insert(record.id);
        }
        assert_eq!(ids.len(), 2_000);

        let stats = svc.compute_stats(&user.id).await.unwrap();
        assert_eq!(stats[0].total, 2_000);
    }

    #[tokio::test]
    async fn list_orders_by_date_desc_then_start_and_honours_range() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let early = seed_class(&svc, &user.id, 1, "08:00", "09:00", "Physics").await;
        let late = seed_class(&svc, &user.id, 1, "10:00", "11:00", "Math").await;

        for d in ["2024-01-01", "2024-01-08", "2024-01-15"] {
            for class in [&late, &early] {
                svc.mark_attendance(&user.id, &class.id, date(d), &AttendanceDecision::present())
                    .await
                    .unwrap();
            }
        }

        let all = svc.list_attendance(&user.id, &AttendanceFilter::default()).await.unwrap();
        let keys: Vec<(String, String)> = all
            .iter()
            .map(|v| (format_date(v.record.date), v.subject.clone()))
            .collect();
        assert_eq!(
            keys,
            [
                ("2024-01-15".to_string(), "Physics".to_string()),
                ("2024-01-15".to_string(), "Math".to_string()),
                ("2024-01-08".to_string(), "Physics".to_string()),
                ("2024-01-08".to_string(), "Math".to_string()),
                ("2024-01-01".to_string(), "Physics".to_string()),
                ("2024-01-01".to_string(), "Math".to_string()),
            ]
        );

        let ranged = svc
            .list_attendance(
                &user.id,
                &AttendanceFilter {
                    from: Some(date("2024-01-08")),
                    to: Some(date("2024-01-08")),
                    limit: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(ranged.len(), 2);
        assert!(ranged.iter().all(|v| v.record.date == date("2024-01-08")));

        let limited = svc
            .list_attendance(&user.id, &AttendanceFilter { limit: Some(3), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(limited.len(), 3);
    }

    #[tokio::test]
    async fn inverted_range_is_validation_error() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let err = svc
            .list_attendance(
                &user.id,
                &AttendanceFilter {
                    from: Some(date("2024-02-01")),
                    to: Some(date("2024-01-01")),
                    limit: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn update_by_record_id_respects_ownership() {
        let svc = test_service().await;
        let alice = seed_user(&svc, "alice@x.y").await;
        let bob = seed_user(&svc, "bob@x.y").await;
        let class = seed_class(&svc, &alice.id, 1, "08:00", "09:00", "Physics").await;
        let record = svc
            .mark_attendance(&alice.id, &class.id, date("2024-01-15"), &AttendanceDecision::present())
            .await
            .unwrap();

        let absent = AttendanceDecision::absent(Some(ReasonCategory::Program), Some("hackathon"));
        assert!(matches!(
            svc.update_attendance(&bob.id, &record.id, &absent).await,
            Err(DatabaseError::NotFound { .. })
        ));
        assert!(matches!(
            svc.get_attendance(&bob.id, &record.id).await,
            Err(DatabaseError::NotFound { .. })
        ));

        let updated = svc.update_attendance(&alice.id, &record.id, &absent).await.unwrap();
        assert_eq!(updated.id, record.id);
        assert!(!updated.attended);
        assert_eq!(updated.reason_category, Some(ReasonCategory::Program));
        assert_eq!(updated.reason_text.as_deref(), Some("hackathon"));
        assert_eq!(updated.created_at, record.created_at);
    }

    #[tokio::test]
    async fn bulk_update_touches_only_matching_subject_and_user() {
        let svc = test_service().await;
        let alice = seed_user(&svc, "alice@x.y").await;
        let bob = seed_user(&svc, "bob@x.y").await;
        let physics_mon = seed_class(&svc, &alice.id, 1, "08:00", "09:00", "Physics").await;
        let physics_wed = seed_class(&svc, &alice.id, 3, "08:00", "09:00", "Physics").await;
        let math = seed_class(&svc, &alice.id, 1, "10:00", "11:00", "Math").await;
        let bob_physics = seed_class(&svc, &bob.id, 1, "08:00", "09:00", "Physics").await;

        let present = AttendanceDecision::present();
        for (user, class, d) in [
            (&alice.id, &physics_mon.id, "2024-01-15"),
            (&alice.id, &physics_mon.id, "2024-01-22"),
            (&alice.id, &physics_wed.id, "2024-01-17"),
            (&alice.id, &math.id, "2024-01-15"),
            (&bob.id, &bob_physics.id, "2024-01-15"),
        ] {
            svc.mark_attendance(user, class, date(d), &present).await.unwrap();
        }

        let holiday = AttendanceDecision::absent(Some(ReasonCategory::PublicHoliday), None);
        let response = svc
            .bulk_update_by_subject(&alice.id, "Physics", &holiday)
            .await
            .unwrap();
        assert_eq!(response.updated, 3);

        let alice_rows = svc.list_attendance(&alice.id, &AttendanceFilter::default()).await.unwrap();
        for view in &alice_rows {
            if view.subject == "Physics" {
                assert!(!view.record.attended);
                assert_eq!(view.record.reason_category, Some(ReasonCategory::PublicHoliday));
            } else {
                assert!(view.record.attended);
            }
        }
        let bob_rows = svc.list_attendance(&bob.id, &AttendanceFilter::default()).await.unwrap();
        assert!(bob_rows.iter().all(|v| v.record.attended));

        let none = svc
            .bulk_update_by_subject(&alice.id, "physics", &holiday)
            .await
            .unwrap();
        assert_eq!(none.updated, 0);
    }

    #[tokio::test]
    async fn bulk_update_rejects_blank_subject() {
        let svc = test_service().await;
        let user = seed_user(&svc, "a@b.c").await;
        let err = svc
            .bulk_update_by_subject(&user.id, "  ", &AttendanceDecision::present())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }
}
