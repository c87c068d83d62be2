//! Token migration between the default store and an external token store
//!
//! Each run takes one snapshot of candidate users and walks it in id order.
//! For every user the destination is written before the source is cleared,
//! so an interrupted run never leaves a user without a usable copy. A failure
//! on one user is logged and the run moves on; only a failed candidate query
//! aborts the run.

mod outcome;

pub use outcome::{MigrationResult, RecordFailure, RecordOutcome};

use chrono::{DateTime, Utc};
use serde_json::json;
use strum::{AsRefStr, Display, EnumString};

use crate::db::{
    Database, OAUTH_EXPIRE_DATE_FIELD, OAUTH_REFRESH_TOKEN_FIELD, OAUTH_TOKEN_FIELD, OAUTH_VALID_FIELD,
    validate_service_name,
};
use crate::error::{Result, TokenStoreError};
use crate::models::{CandidateUser, TokenAuthority, User};
use crate::store::TokenStore;

/// Records between two progress lines
pub const DEFAULT_PROGRESS_EVERY: usize = 100;

/// Which way tokens move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum MigrationDirection {
    /// External store -> user documents
    ToDefault,
    /// User documents -> external store
    FromDefault,
}

/// Runs migrations for one service against the user documents in `db`
pub struct Migrator<'a> {
    db: &'a Database,
    service: &'a str,
    progress_every: usize,
}

impl<'a> Migrator<'a> {
    /// Fails with `TokenStoreError::Config` when `service` cannot be used
    /// as a document key
    pub fn new(db: &'a Database, service: &'a str) -> Result<Self> {
        validate_service_name(service)?;
        Ok(Self {
            db,
            service,
            progress_every: DEFAULT_PROGRESS_EVERY,
        })
    }

    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every.max(1);
        self
    }

    /// Run a migration in `direction` against `external`
    pub fn run(&self, direction: MigrationDirection, external: &dyn TokenStore) -> Result<MigrationResult> {
        match direction {
            MigrationDirection::ToDefault => self.migrate_to_default(external),
            MigrationDirection::FromDefault => self.migrate_from_default(external),
        }
    }

    /// Move tokens of users currently served by `old_store` back into their
    /// user documents.
    pub fn migrate_to_default(&self, old_store: &dyn TokenStore) -> Result<MigrationResult> {
        const OPERATION: &str = "migrate_to_default";

        let candidates = self
            .db
            .find_users_with_external_tokens(self.service)
            .map_err(|e| self.query_failure(OPERATION, e))?;

        log::info!(
            "{}: {} candidates for service '{}' in store '{}'",
            OPERATION,
            candidates.len(),
            self.service,
            old_store.name()
        );

        let outcomes = self.process(OPERATION, &candidates, |user| self.transfer_to_default(old_store, user));
        Ok(outcomes.iter().collect())
    }

    /// Move embedded tokens into `new_store`, using the current time to
    /// classify expired tokens.
    pub fn migrate_from_default(&self, new_store: &dyn TokenStore) -> Result<MigrationResult> {
        self.migrate_from_default_at(new_store, Utc::now())
    }

    /// Same as [`Self::migrate_from_default`] with an explicit clock
    pub fn migrate_from_default_at(&self, new_store: &dyn TokenStore, now: DateTime<Utc>) -> Result<MigrationResult> {
        const OPERATION: &str = "migrate_from_default";

        let candidates = self
            .db
            .find_users_with_embedded_tokens(self.service)
            .map_err(|e| self.query_failure(OPERATION, e))?;

        log::info!(
            "{}: {} candidates for service '{}' to store '{}'",
            OPERATION,
            candidates.len(),
            self.service,
            new_store.name()
        );

        let outcomes = self.process(OPERATION, &candidates, |user| self.transfer_from_default(new_store, user, now));
        Ok(outcomes.iter().collect())
    }

    fn process<F>(&self, operation: &str, candidates: &[CandidateUser], mut transfer: F) -> Vec<RecordOutcome>
    where
        F: FnMut(&User) -> RecordOutcome,
    {
        let total = candidates.len();

        candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                if i % self.progress_every == 0 {
                    log::info!("{}: {}/{} transferred", operation, i, total);
                }

                // A malformed document fails its own user, not the run
                let outcome = match candidate.to_user(self.service) {
                    Ok(user) => transfer(&user),
                    Err(e) => read_failure("protected_settings", e),
                };
                match &outcome {
                    RecordOutcome::Failed(failure) => {
                        log::error!("{} for user '{}' {}", operation, candidate.id, failure);
                    }
                    RecordOutcome::Expired => {
                        log::debug!("{}: skipping expired token of user '{}'", operation, candidate.id);
                    }
                    RecordOutcome::Migrated => {}
                }
                outcome
            })
            .collect()
    }

    fn transfer_to_default(&self, old_store: &dyn TokenStore, user: &User) -> RecordOutcome {
        let (access_token, expiry) = match old_store.get_oauth_access_token(user) {
            Ok(token) => token,
            Err(e) => return read_failure("get_oauth_access_token", e),
        };

        let refresh_token = match old_store.get_oauth_refresh_token(user) {
            Ok(token) => token,
            Err(e) => return read_failure("get_oauth_refresh_token", e),
        };

        let update = self.db.set_protected_fields(
            &user.id,
            self.service,
            &[
                (OAUTH_TOKEN_FIELD, json!(access_token)),
                (OAUTH_EXPIRE_DATE_FIELD, json!(expiry)),
                (OAUTH_REFRESH_TOKEN_FIELD, json!(refresh_token)),
                (OAUTH_VALID_FIELD, json!(TokenAuthority::Default.as_flag())),
            ],
        );

        match update {
            Ok(()) => RecordOutcome::Migrated,
            Err(e) => persist_failure(e),
        }
    }

    fn transfer_from_default(&self, new_store: &dyn TokenStore, user: &User, now: DateTime<Utc>) -> RecordOutcome {
        let record = match user.protected_settings(self.service) {
            Ok(record) => record,
            Err(e) => return read_failure("protected_settings", e),
        };

        if record.is_unrecoverable_at(now) {
            return RecordOutcome::Expired;
        }

        if let Err(e) = new_store.set_oauth_access_token(user, &record.access_token, record.access_token_expiry) {
            return write_failure("set_oauth_access_token", e);
        }

        if let Err(e) = new_store.set_oauth_refresh_token(user, &record.refresh_token) {
            return write_failure("set_oauth_refresh_token", e);
        }

        // Only now is the embedded copy safe to clear
        let update = self.db.set_protected_fields(
            &user.id,
            self.service,
            &[
                (OAUTH_TOKEN_FIELD, json!("")),
                (OAUTH_EXPIRE_DATE_FIELD, json!(null)),
                (OAUTH_REFRESH_TOKEN_FIELD, json!("")),
                (OAUTH_VALID_FIELD, json!(TokenAuthority::External.as_flag())),
            ],
        );

        match update {
            Ok(()) => RecordOutcome::Migrated,
            Err(e) => persist_failure(e),
        }
    }

    fn query_failure(&self, operation: &str, e: TokenStoreError) -> TokenStoreError {
        log::error!("{}: candidate query for service '{}' failed: {}", operation, self.service, e);
        TokenStoreError::Query(e.to_string())
    }
}

fn read_failure(operation: &'static str, e: TokenStoreError) -> RecordOutcome {
    RecordOutcome::Failed(RecordFailure::BackendRead {
        operation,
        error: e.to_string(),
    })
}

fn write_failure(operation: &'static str, e: TokenStoreError) -> RecordOutcome {
    RecordOutcome::Failed(RecordFailure::BackendWrite {
        operation,
        error: e.to_string(),
    })
}

fn persist_failure(e: TokenStoreError) -> RecordOutcome {
    RecordOutcome::Failed(RecordFailure::Persist { error: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TokenRecord;
    use crate::store::{DefaultTokenStore, MemoryTokenStore, SqliteTokenStore};
    use chrono::Duration;
    use std::sync::Arc;

    const SERVICE: &str = "github";

    /// Wraps a memory store and fails one operation for selected users
    struct FlakyStore {
        inner: MemoryTokenStore,
        fail_op: &'static str,
        fail_users: Vec<String>,
    }

    impl FlakyStore {
        fn new(fail_op: &'static str, fail_users: &[&str]) -> Self {
            Self {
                inner: MemoryTokenStore::new(),
                fail_op,
                fail_users: fail_users.iter().map(|u| u.to_string()).collect(),
            }
        }

        fn check(&self, op: &str, user: &User) -> Result<()> {
            if op == self.fail_op && self.fail_users.contains(&user.id) {
                return Err(TokenStoreError::Backend(format!("{} unavailable", op)));
            }
            Ok(())
        }
    }

    impl TokenStore for FlakyStore {
        fn name(&self) -> &str {
            "flaky"
        }

        fn get_oauth_access_token(&self, user: &User) -> Result<(String, Option<DateTime<Utc>>)> {
            self.check("get_access", user)?;
            self.inner.get_oauth_access_token(user)
        }

        fn set_oauth_access_token(&self, user: &User, token: &str, expiry: Option<DateTime<Utc>>) -> Result<()> {
            self.check("set_access", user)?;
            self.inner.set_oauth_access_token(user, token, expiry)
        }

        fn get_oauth_refresh_token(&self, user: &User) -> Result<String> {
            self.check("get_refresh", user)?;
            self.inner.get_oauth_refresh_token(user)
        }

        fn set_oauth_refresh_token(&self, user: &User, token: &str) -> Result<()> {
            self.check("set_refresh", user)?;
            self.inner.set_oauth_refresh_token(user, token)
        }
    }

    /// Runs a statement against a user's document right after that user's
    /// refresh token passes through the store, so the follow-up document
    /// update meets a changed row
    struct InterferingStore {
        inner: MemoryTokenStore,
        db: Arc<Database>,
        /// (user id, statement with ?1 = user id)
        statements: Vec<(&'static str, &'static str)>,
    }

    impl InterferingStore {
        fn new(db: Arc<Database>, statements: &[(&'static str, &'static str)]) -> Self {
            Self {
                inner: MemoryTokenStore::new(),
                db,
                statements: statements.to_vec(),
            }
        }

        fn interfere(&self, user: &User) -> Result<()> {
            for (target, statement) in &self.statements {
                if *target == user.id {
                    self.db.conn.lock().execute(statement, [&user.id])?;
                }
            }
            Ok(())
        }
    }

    impl TokenStore for InterferingStore {
        fn name(&self) -> &str {
            "interfering"
        }

        fn get_oauth_access_token(&self, user: &User) -> Result<(String, Option<DateTime<Utc>>)> {
            self.inner.get_oauth_access_token(user)
        }

        fn set_oauth_access_token(&self, user: &User, token: &str, expiry: Option<DateTime<Utc>>) -> Result<()> {
            self.inner.set_oauth_access_token(user, token, expiry)
        }

        fn get_oauth_refresh_token(&self, user: &User) -> Result<String> {
            let token = self.inner.get_oauth_refresh_token(user)?;
            self.interfere(user)?;
            Ok(token)
        }

        fn set_oauth_refresh_token(&self, user: &User, token: &str) -> Result<()> {
            self.inner.set_oauth_refresh_token(user, token)?;
            self.interfere(user)
        }
    }

    const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";
    const CORRUPT_USER: &str = "UPDATE users SET protected = 'corrupted' WHERE id = ?1";

    fn seed_external(db: &Database, store: &dyn TokenStore, id: &str) {
        let mut user = User::new(id);
        user.protected.insert(
            SERVICE.to_string(),
            TokenRecord {
                authority: TokenAuthority::External,
                ..Default::default()
            },
        );
        db.save_user(&user).unwrap();
        store.set_oauth_access_token(&user, &format!("{}-access", id), None).unwrap();
        store.set_oauth_refresh_token(&user, &format!("{}-refresh", id)).unwrap();
    }

    fn insert_raw(db: &Database, id: &str, protected: &str) {
        db.conn
            .lock()
            .execute(
                "INSERT INTO users (id, protected, created_at, updated_at) VALUES (?1, ?2, '', '')",
                [id, protected],
            )
            .unwrap();
    }

    fn raw_protected(db: &Database, id: &str) -> String {
        db.conn
            .lock()
            .query_row("SELECT protected FROM users WHERE id = ?1", [id], |row| row.get(0))
            .unwrap()
    }

    fn seed(db: &Database, id: &str, access: &str, refresh: &str, expiry: Option<DateTime<Utc>>) {
        let mut user = User::new(id);
        user.protected.insert(
            SERVICE.to_string(),
            TokenRecord {
                access_token: access.to_string(),
                access_token_expiry: expiry,
                refresh_token: refresh.to_string(),
                ..Default::default()
            },
        );
        db.save_user(&user).unwrap();
    }

    fn record(db: &Database, id: &str) -> TokenRecord {
        db.get_user(id).unwrap().unwrap().protected[SERVICE].clone()
    }

    #[test]
    fn test_from_default_moves_live_token() {
        let db = Database::new_in_memory().unwrap();
        let future = Utc::now() + Duration::days(1);
        seed(&db, "U", "A1", "R1", Some(future));
        let external = MemoryTokenStore::new();

        let result = Migrator::new(&db, SERVICE).unwrap().migrate_from_default(&external).unwrap();

        assert_eq!(result, MigrationResult { total: 1, migrated: 1, expired: 0 });
        let user = User::new("U");
        assert_eq!(
            external.get_oauth_access_token(&user).unwrap(),
            ("A1".to_string(), Some(future))
        );
        assert_eq!(external.get_oauth_refresh_token(&user).unwrap(), "R1");

        let stored = record(&db, "U");
        assert_eq!(stored.access_token, "");
        assert_eq!(stored.refresh_token, "");
        assert_eq!(stored.authority, TokenAuthority::External);
    }

    #[test]
    fn test_from_default_skips_expired_without_refresh() {
        let db = Database::new_in_memory().unwrap();
        let past = Utc::now() - Duration::days(1);
        seed(&db, "V", "A2", "", Some(past));
        let before = record(&db, "V");
        let external = MemoryTokenStore::new();

        let result = Migrator::new(&db, SERVICE).unwrap().migrate_from_default(&external).unwrap();

        assert_eq!(result, MigrationResult { total: 1, migrated: 0, expired: 1 });
        assert_eq!(result.failed(), 0);
        assert!(external.is_empty());
        assert_eq!(record(&db, "V"), before);
    }

    #[test]
    fn test_from_default_migrates_expired_with_refresh_and_no_expiry() {
        let db = Database::new_in_memory().unwrap();
        seed(&db, "a", "A1", "R1", Some(Utc::now() - Duration::days(1)));
        seed(&db, "b", "B1", "", None);
        let external = MemoryTokenStore::new();

        let result = Migrator::new(&db, SERVICE).unwrap().migrate_from_default(&external).unwrap();

        assert_eq!(result, MigrationResult { total: 2, migrated: 2, expired: 0 });
        assert_eq!(external.len(), 2);
    }

    #[test]
    fn test_from_default_write_failure_keeps_source() {
        let db = Database::new_in_memory().unwrap();
        let future = Utc::now() + Duration::days(1);
        seed(&db, "a", "A1", "R1", Some(future));
        seed(&db, "b", "B1", "RB", Some(future));
        seed(&db, "c", "C1", "RC", Some(future));
        let before_a = record(&db, "a");
        let before_b = record(&db, "b");

        let external = FlakyStore::new("set_refresh", &["a"]);
        let failing_access = FlakyStore::new("set_access", &["b"]);

        let migrator = Migrator::new(&db, SERVICE).unwrap();
        let result = migrator.migrate_from_default(&external).unwrap();
        assert_eq!(result, MigrationResult { total: 3, migrated: 2, expired: 0 });
        assert_eq!(result.failed(), 1);
        assert_eq!(record(&db, "a"), before_a);
        assert_eq!(record(&db, "b").authority, TokenAuthority::External);

        // "a" is still a candidate; "b" no longer is
        seed(&db, "b", "B1", "RB", Some(future));
        let result = migrator.migrate_from_default(&failing_access).unwrap();
        assert_eq!(result, MigrationResult { total: 2, migrated: 1, expired: 0 });
        assert_eq!(record(&db, "b"), before_b);
        assert_eq!(
            failing_access.get_oauth_access_token(&User::new("b")).unwrap(),
            (String::new(), None)
        );
    }

    #[test]
    fn test_from_default_persist_failure_keeps_destination_copy() {
        let db = Arc::new(Database::new_in_memory().unwrap());
        seed(&db, "a", "A1", "R1", None);
        let external = InterferingStore::new(db.clone(), &[("a", DELETE_USER)]);

        let result = Migrator::new(&db, SERVICE).unwrap().migrate_from_default(&external).unwrap();

        assert_eq!(result, MigrationResult { total: 1, migrated: 0, expired: 0 });
        assert_eq!(result.failed(), 1);
        assert_eq!(external.get_oauth_access_token(&User::new("a")).unwrap().0, "A1");
    }

    #[test]
    fn test_to_default_read_failure_skips_user() {
        let db = Database::new_in_memory().unwrap();
        let old = FlakyStore::new("get_refresh", &["b"]);
        seed_external(&db, &old, "a");
        seed_external(&db, &old, "b");

        let result = Migrator::new(&db, SERVICE).unwrap().migrate_to_default(&old).unwrap();

        assert_eq!(result, MigrationResult { total: 2, migrated: 1, expired: 0 });
        let a = record(&db, "a");
        assert_eq!(a.access_token, "a-access");
        assert_eq!(a.refresh_token, "a-refresh");
        assert_eq!(a.authority, TokenAuthority::Default);
        let b = record(&db, "b");
        assert_eq!(b.access_token, "");
        assert_eq!(b.authority, TokenAuthority::External);
    }

    #[test]
    fn test_to_default_access_read_failure_skips_user() {
        let db = Database::new_in_memory().unwrap();
        let old = FlakyStore::new("get_access", &["a"]);
        seed_external(&db, &old, "a");
        seed_external(&db, &old, "b");

        let result = Migrator::new(&db, SERVICE).unwrap().migrate_to_default(&old).unwrap();

        assert_eq!(result, MigrationResult { total: 2, migrated: 1, expired: 0 });
        assert_eq!(result.failed(), 1);
        let a = record(&db, "a");
        assert_eq!(a.access_token, "");
        assert_eq!(a.refresh_token, "");
        assert_eq!(a.authority, TokenAuthority::External);
        assert_eq!(record(&db, "b").authority, TokenAuthority::Default);
    }

    #[test]
    fn test_to_default_persist_failure_is_counted_failed() {
        let db = Arc::new(Database::new_in_memory().unwrap());
        let old = InterferingStore::new(db.clone(), &[("a", DELETE_USER), ("b", CORRUPT_USER)]);
        seed_external(&db, &old.inner, "a");
        seed_external(&db, &old.inner, "b");
        seed_external(&db, &old.inner, "c");

        let result = Migrator::new(&db, SERVICE).unwrap().migrate_to_default(&old).unwrap();

        assert_eq!(result, MigrationResult { total: 3, migrated: 1, expired: 0 });
        assert_eq!(result.failed(), 2);

        // Document gone before the update: nothing was recreated
        assert_eq!(db.get_user("a").unwrap(), None);
        // Document unreadable by the update: left exactly as found
        assert_eq!(raw_protected(&db, "b"), "corrupted");
        assert_eq!(record(&db, "c").authority, TokenAuthority::Default);

        // Source copies are still there for the next run
        assert_eq!(old.get_oauth_access_token(&User::new("b")).unwrap().0, "b-access");
    }

    #[test]
    fn test_from_default_malformed_document_fails_only_its_user() {
        let db = Database::new_in_memory().unwrap();
        seed(&db, "a", "A1", "R1", None);
        seed(&db, "b", "B1", "RB", None);
        insert_raw(
            &db,
            "c",
            r#"{"github":{"oauthtoken":"C1","oauthexpiredate":"2030-01-01 00:00:00"}}"#,
        );
        insert_raw(&db, "d", r#"{"github":{"oauthtoken":5}}"#);
        let external = MemoryTokenStore::new();

        let result = Migrator::new(&db, SERVICE).unwrap().migrate_from_default(&external).unwrap();

        assert_eq!(result, MigrationResult { total: 4, migrated: 2, expired: 0 });
        assert_eq!(result.failed(), 2);
        assert_eq!(external.len(), 2);
        assert_eq!(
            raw_protected(&db, "c"),
            r#"{"github":{"oauthtoken":"C1","oauthexpiredate":"2030-01-01 00:00:00"}}"#
        );
    }

    #[test]
    fn test_to_default_malformed_document_fails_only_its_user() {
        let db = Database::new_in_memory().unwrap();
        let old = MemoryTokenStore::new();
        seed_external(&db, &old, "a");
        insert_raw(&db, "b", r#"{"github":{"oauthvalid":true,"oauthtoken":5}}"#);

        let result = Migrator::new(&db, SERVICE).unwrap().migrate_to_default(&old).unwrap();

        assert_eq!(result, MigrationResult { total: 2, migrated: 1, expired: 0 });
        assert_eq!(record(&db, "a").access_token, "a-access");
    }

    #[test]
    fn test_invalid_service_name_is_rejected() {
        let db = Database::new_in_memory().unwrap();
        assert!(matches!(
            Migrator::new(&db, "git\"hub"),
            Err(TokenStoreError::Config(_))
        ));
    }

    #[test]
    fn test_to_default_second_run_finds_nothing() {
        let db = Arc::new(Database::new_in_memory().unwrap());
        seed(&db, "a", "A1", "R1", None);
        seed(&db, "b", "B1", "RB", None);
        let external = SqliteTokenStore::new(db.clone(), SERVICE);
        let migrator = Migrator::new(&db, SERVICE).unwrap();

        migrator.migrate_from_default(&external).unwrap();

        let first = migrator.migrate_to_default(&external).unwrap();
        assert_eq!(first, MigrationResult { total: 2, migrated: 2, expired: 0 });

        let second = migrator.migrate_to_default(&external).unwrap();
        assert_eq!(second, MigrationResult::default());
    }

    #[test]
    fn test_round_trip_restores_tokens() {
        let db = Arc::new(Database::new_in_memory().unwrap());
        let expiry = Utc::now() + Duration::hours(3);
        seed(&db, "U", "A1", "R1", Some(expiry));
        let before = record(&db, "U");

        let external = SqliteTokenStore::new(db.clone(), SERVICE);
        let migrator = Migrator::new(&db, SERVICE).unwrap().with_progress_every(1);
        migrator.run(MigrationDirection::FromDefault, &external).unwrap();
        migrator.run(MigrationDirection::ToDefault, &external).unwrap();

        assert_eq!(record(&db, "U"), before);

        let default_store = DefaultTokenStore::new(db.clone(), SERVICE).unwrap();
        assert_eq!(
            default_store.get_oauth_access_token(&User::new("U")).unwrap(),
            ("A1".to_string(), Some(expiry))
        );
    }

    #[test]
    fn test_counts_always_add_up() {
        let db = Database::new_in_memory().unwrap();
        let now = Utc::now();
        seed(&db, "a", "A", "R", Some(now + Duration::hours(1)));
        seed(&db, "b", "B", "", Some(now - Duration::hours(1)));
        seed(&db, "c", "C", "R", None);
        seed(&db, "d", "", "R", None);
        let external = FlakyStore::new("set_access", &["c"]);

        let result = Migrator::new(&db, SERVICE).unwrap()
            .migrate_from_default_at(&external, now)
            .unwrap();

        assert_eq!(result.total, 3);
        assert_eq!(result.migrated, 1);
        assert_eq!(result.expired, 1);
        assert_eq!(result.failed(), 1);
        assert_eq!(result.total, result.migrated + result.expired + result.failed());
    }

    #[test]
    fn test_query_failure_aborts_run() {
        let db = Database::new_in_memory().unwrap();
        seed(&db, "a", "A1", "R1", None);
        db.conn.lock().execute("DROP TABLE users", []).unwrap();
        let external = MemoryTokenStore::new();
        let migrator = Migrator::new(&db, SERVICE).unwrap();

        assert!(matches!(
            migrator.migrate_from_default(&external),
            Err(TokenStoreError::Query(_))
        ));
        assert!(matches!(
            migrator.migrate_to_default(&external),
            Err(TokenStoreError::Query(_))
        ));
        assert!(external.is_empty());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("to-default".parse::<MigrationDirection>().unwrap(), MigrationDirection::ToDefault);
        assert_eq!("from-default".parse::<MigrationDirection>().unwrap(), MigrationDirection::FromDefault);
        assert!("sideways".parse::<MigrationDirection>().is_err());
        assert_eq!(MigrationDirection::FromDefault.to_string(), "from-default");
    }
}
