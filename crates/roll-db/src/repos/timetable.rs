//! Timetable repository: per-user CRUD over recurring weekly class slots.

use chrono::Utc;

use roll_core::entities::{NewClass, TimetableEntry};
use roll_core::ids::PREFIX_CLASS;
use roll_core::responses::DeleteResponse;

use crate::error::DatabaseError;
use crate::helpers::{
    get_count, get_opt_string, parse_datetime, parse_stored_day, parse_stored_time,
};
use crate::service::RollService;
use crate::updates::class::ClassUpdate;

pub(crate) const CLASS_COLS: &str = "c.id, c.user_id, c.day_of_week, c.start_time, c.end_time, \
                                     c.subject, c.teacher, c.location, c.created_at, c.updated_at";

/// Number of columns in [`CLASS_COLS`].
pub(crate) const CLASS_COL_COUNT: i32 = 10;

/// Parse the [`CLASS_COLS`] block starting at column `base`.
pub(crate) fn row_to_class(row: &libsql::Row, base: i32) -> Result<TimetableEntry, DatabaseError> {
    Ok(TimetableEntry {
        id: row.get(base)?,
        user_id: row.get(base + 1)?,
        day_of_week: parse_stored_day(row.get::<i64>(base + 2)?)?,
        start_time: parse_stored_time(&row.get::<String>(base + 3)?)?,
        end_time: parse_stored_time(&row.get::<String>(base + 4)?)?,
        subject: row.get(base + 5)?,
        teacher: row.get(base + 6)?,
        location: get_opt_string(row, base + 7)?,
        created_at: parse_datetime(&row.get::<String>(base + 8)?)?,
        updated_at: parse_datetime(&row.get::<String>(base + 9)?)?,
    })
}

impl RollService {
    /// All classes owned by the user, ordered by day then start time.
    pub async fn list_classes(&self, user_id: &str) -> Result<Vec<TimetableEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {CLASS_COLS} FROM classes c WHERE c.user_id = ?1
                     ORDER BY c.day_of_week, c.start_time, c.created_at"
                ),
                [user_id],
            )
            .await?;

        let mut classes = Vec::new();
        while let Some(row) = rows.next().await? {
            classes.push(row_to_class(&row, 0)?);
        }
        tracing::debug!(user_id, count = classes.len(), "listed classes");
        Ok(classes)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` unless `id` exists and belongs to `user_id`.
    pub async fn get_class(&self, user_id: &str, id: &str) -> Result<TimetableEntry, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {CLASS_COLS} FROM classes c WHERE c.id = ?1 AND c.user_id = ?2"),
                [id, user_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("class", id))?;
        row_to_class(&row, 0)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` naming missing or malformed fields,
    /// and `DatabaseError::NotFound` for an unknown user.
    pub async fn create_class(
        &self,
        user_id: &str,
        new: &NewClass,
    ) -> Result<TimetableEntry, DatabaseError> {
        let valid = new.validate()?;
        self.ensure_user(user_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_CLASS).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO classes (id, user_id, day_of_week, start_time, end_time, subject,
                                      teacher, location, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                libsql::params![
                    id.as_str(),
                    user_id,
                    i64::from(valid.day_of_week),
                    valid.start_time.to_string(),
                    valid.end_time.to_string(),
                    valid.subject.as_str(),
                    valid.teacher.as_str(),
                    valid.location.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::info!(user_id, class_id = %id, subject = %valid.subject, "class created");

        Ok(TimetableEntry {
            id,
            user_id: user_id.to_string(),
            day_of_week: valid.day_of_week,
            start_time: valid.start_time,
            end_time: valid.end_time,
            subject: valid.subject,
            teacher: valid.teacher,
            location: valid.location,
            created_at: now,
            updated_at: now,
        })
    }

    /// Coalescing partial update: omitted fields keep their stored value.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the class is not owned by the user,
    /// and `DatabaseError::Validation` if the merged entry is invalid.
    pub async fn update_class(
        &self,
        user_id: &str,
        id: &str,
        update: &ClassUpdate,
    ) -> Result<TimetableEntry, DatabaseError> {
        let current = self.get_class(user_id, id).await?;
        if update.is_empty() {
            return Ok(current);
        }

        let merged = update.apply(&current, Utc::now())?;

        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE classes SET day_of_week = ?1, start_time = ?2, end_time = ?3,
                        subject = ?4, teacher = ?5, location = ?6, updated_at = ?7
                 WHERE id = ?8 AND user_id = ?9",
                libsql::params![
                    i64::from(merged.day_of_week),
                    merged.start_time.to_string(),
                    merged.end_time.to_string(),
                    merged.subject.as_str(),
                    merged.teacher.as_str(),
                    merged.location.as_deref(),
                    merged.updated_at.to_rfc3339(),
                    id,
                    user_id
                ],
            )
            .await?;
        if changed == 0 {
            // Deleted between the read and the write.
            return Err(DatabaseError::not_found("class", id));
        }

        tracing::info!(user_id, class_id = id, "class updated");
        Ok(merged)
    }

    /// Delete a class and, through the foreign-key cascade, its whole
    /// attendance history.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the class is not owned by the user.
    pub async fn delete_class(&self, user_id: &str, id: &str) -> Result<DeleteResponse, DatabaseError> {
        let tx = self.db().conn().transaction().await?;

        let mut rows = tx
            .query(
                "SELECT COUNT(*) FROM attendance WHERE class_id = ?1 AND user_id = ?2",
                [id, user_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let cascaded = get_count(&row, 0)?;
        drop(rows);

        let deleted = tx
            .execute(
                "DELETE FROM classes WHERE id = ?1 AND user_id = ?2",
                [id, user_id],
            )
            .await?;
        if deleted == 0 {
            tx.rollback().await?;
            return Err(DatabaseError::not_found("class", id));
        }
        tx.commit().await?;

        tracing::info!(user_id, class_id = id, cascaded, "class deleted");
        Ok(DeleteResponse {
            id: id.to_string(),
            deleted: true,
            cascaded_records: u64::from(cascaded),
        })
    }
}
