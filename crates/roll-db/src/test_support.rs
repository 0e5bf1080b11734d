//! Shared test utilities for roll-db unit tests.

pub(crate) mod helpers {
    use roll_core::entities::{NewClass, NewUser, TimetableEntry, User};

    use crate::RollDb;
    use crate::service::RollService;

    /// Create an in-memory RollService.
    pub async fn test_service() -> RollService {
        let db = RollDb::open_local(":memory:").await.unwrap();
        RollService::from_db(db)
    }

    /// Register a user with a throwaway credential hash.
    pub async fn seed_user(svc: &RollService, email: &str) -> User {
        svc.register_user(&NewUser::new(email, "argon2-test-hash"))
            .await
            .unwrap()
    }

    /// Create a class with a fixed teacher.
    pub async fn seed_class(
        svc: &RollService,
        user_id: &str,
        day: i64,
        start: &str,
        end: &str,
        subject: &str,
    ) -> TimetableEntry {
        svc.create_class(user_id, &NewClass::new(day, start, end, subject, "Dr. Rao"))
            .await
            .unwrap()
    }
}
