//! User repository: registration and lookup.

use chrono::Utc;

use roll_core::entities::{NewUser, User, non_blank, normalize_email};
use roll_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, is_unique_violation, parse_datetime};
use crate::service::RollService;

const SELECT_COLS: &str = "id, email, credential_hash, fullname, department, semester, batch, \
                           roll_number, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        credential_hash: row.get(2)?,
        fullname: get_opt_string(row, 3)?,
        department: get_opt_string(row, 4)?,
        semester: get_opt_string(row, 5)?,
        batch: get_opt_string(row, 6)?,
        roll_number: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl RollService {
    /// Register a new identity anchor.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank email or credential hash,
    /// and `DatabaseError::Conflict` if the email is already registered under
    /// any casing.
    pub async fn register_user(&self, new: &NewUser) -> Result<User, DatabaseError> {
        new.validate()?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_USER).await?;
        let user = User {
            id: id.clone(),
            email: new.normalized_email(),
            credential_hash: new.credential_hash.clone(),
            fullname: non_blank(new.fullname.as_deref()),
            department: non_blank(new.department.as_deref()),
            semester: non_blank(new.semester.as_deref()),
            batch: non_blank(new.batch.as_deref()),
            roll_number: non_blank(new.roll_number.as_deref()),
            created_at: now,
        };

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO users ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    user.id.as_str(),
                    user.email.as_str(),
                    user.credential_hash.as_str(),
                    user.fullname.as_deref(),
                    user.department.as_deref(),
                    user.semester.as_deref(),
                    user.batch.as_deref(),
                    user.roll_number.as_deref(),
                    now.to_rfc3339()
                ],
            )
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DatabaseError::Conflict(format!("email already registered: {}", user.email))
                } else {
                    DatabaseError::LibSql(e)
                }
            })?;

        tracing::info!(user_id = %id, "user registered");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no user has this id.
    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("user", id))?;
        row_to_user(&row)
    }

    /// Case-insensitive lookup by email.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let email = normalize_email(email);
        tracing::debug!(%email, "looking up user by email");
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE email = ?1"),
                [email.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Fail with `NotFound` unless the user exists.
    pub(crate) async fn ensure_user(&self, id: &str) -> Result<(), DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM users WHERE id = ?1", [id])
            .await?;
        rows.next()
            .await?
            .map(|_| ())
            .ok_or_else(|| DatabaseError::not_found("user", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn register_normalizes_email_and_profile() {
        let svc = test_service().await;
        let new = NewUser {
            fullname: Some("  Asha Verma ".into()),
            department: Some("   ".into()),
            roll_number: Some("CS-042".into()),
            ..NewUser::new("  Asha@Example.COM ", "hash")
        };

        let user = svc.register_user(&new).await.unwrap();
        assert!(user.id.starts_with("usr-"));
        assert_eq!(user.email, "asha@example.com");
        assert_eq!(user.fullname.as_deref(), Some("Asha Verma"));
        assert_eq!(user.department, None);

        let fetched = svc.get_user(&user.id).await.unwrap();
        assert_eq!(fetched.email, user.email);
        assert_eq!(fetched.roll_number.as_deref(), Some("CS-042"));
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict_regardless_of_case() {
        let svc = test_service().await;
        svc.register_user(&NewUser::new("a@b.c", "h")).await.unwrap();

        let err = svc
            .register_user(&NewUser::new("A@B.C", "h2"))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Conflict(_)), "got {err:?}");
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn blank_fields_fail_validation() {
        let svc = test_service().await;
        let err = svc.register_user(&NewUser::new(" ", "h")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
        let err = svc.register_user(&NewUser::new("a@b.c", "")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn find_by_email_is_case_insensitive() {
        let svc = test_service().await;
        let user = svc.register_user(&NewUser::new("x@y.z", "h")).await.unwrap();

        let found = svc.find_user_by_email(" X@Y.Z").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
        assert!(svc.find_user_by_email("nobody@y.z").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_unknown_user_is_not_found() {
        let svc = test_service().await;
        let err = svc.get_user("usr-00000000").await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }
}
