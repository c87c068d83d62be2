//! User document operations
//!
//! Token fields live in the `protected` JSON column under
//! `$."<service>".<field>`, mirroring the `protected.<service>.<field>`
//! document paths other services query.

use chrono::Utc;
use rusqlite::{OptionalExtension, params, params_from_iter};
use serde_json::Value;
use std::collections::HashMap;

use super::super::Database;
use crate::error::{Result, TokenStoreError};
use crate::models::{CandidateUser, TokenRecord, User};

pub const OAUTH_TOKEN_FIELD: &str = "oauthtoken";
pub const OAUTH_EXPIRE_DATE_FIELD: &str = "oauthexpiredate";
pub const OAUTH_REFRESH_TOKEN_FIELD: &str = "oauthrefreshtoken";
pub const OAUTH_VALID_FIELD: &str = "oauthvalid";

/// Service names become JSON path keys, so keep them to a plain charset
pub fn validate_service_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(TokenStoreError::Config(format!("Invalid service name '{}'", name)))
    }
}

/// JSON path of a service's protected settings fragment
fn service_path(service: &str) -> Result<String> {
    validate_service_name(service)?;
    Ok(format!("$.\"{}\"", service))
}

/// JSON path of a field inside a service's fragment
fn field_path(service: &str, field: &str) -> Result<String> {
    validate_service_name(service)?;
    Ok(format!("$.\"{}\".{}", service, field))
}

impl Database {
    /// Insert a user document, replacing any existing one with the same id
    pub fn save_user(&self, user: &User) -> Result<()> {
        let protected = serde_json::to_string(&user.protected)?;
        let conn = self.conn.lock();
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO users (id, protected, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)
             ON CONFLICT(id) DO UPDATE SET protected = excluded.protected, updated_at = excluded.updated_at",
            params![&user.id, &protected, &now],
        )?;

        Ok(())
    }

    /// Load a full user document
    pub fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let conn = self.conn.lock();

        let protected: Option<String> = conn
            .query_row(
                "SELECT protected FROM users WHERE id = ?1",
                [user_id],
                |row| row.get(0),
            )
            .optional()?;
        drop(conn);

        match protected {
            Some(json) => {
                let protected: HashMap<String, TokenRecord> = serde_json::from_str(&json)?;
                Ok(Some(User {
                    id: user_id.to_string(),
                    protected,
                }))
            }
            None => Ok(None),
        }
    }

    /// Users whose tokens for `service` live in an external store
    /// (`oauthvalid = true`), ordered by id.
    pub fn find_users_with_external_tokens(&self, service: &str) -> Result<Vec<CandidateUser>> {
        self.find_service_fragments(
            service,
            "json_extract(protected, ?2) = 1",
            &field_path(service, OAUTH_VALID_FIELD)?,
        )
    }

    /// Users holding a non-empty embedded access token for `service`,
    /// ordered by id.
    pub fn find_users_with_embedded_tokens(&self, service: &str) -> Result<Vec<CandidateUser>> {
        self.find_service_fragments(
            service,
            "json_extract(protected, ?2) IS NOT NULL AND json_extract(protected, ?2) != ''",
            &field_path(service, OAUTH_TOKEN_FIELD)?,
        )
    }

    /// Select users matching `predicate` (which may reference ?2 = `predicate_path`)
    /// together with the raw fragment of `service`. Fragments are left
    /// unparsed so a malformed document only affects its own user.
    fn find_service_fragments(
        &self,
        service: &str,
        predicate: &str,
        predicate_path: &str,
    ) -> Result<Vec<CandidateUser>> {
        let conn = self.conn.lock();

        let sql = format!(
            "SELECT id, json_extract(protected, ?1) FROM users WHERE {} ORDER BY id",
            predicate
        );
        let mut stmt = conn.prepare(&sql)?;

        let candidates = stmt
            .query_map(params![service_path(service)?, predicate_path], |row| {
                Ok(CandidateUser {
                    id: row.get(0)?,
                    fragment: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(candidates)
    }

    /// Set fields of a service's protected settings in a single statement.
    ///
    /// The fragment is created when missing. Fails with `NotFound` when the
    /// user document does not exist.
    pub fn set_protected_fields(
        &self,
        user_id: &str,
        service: &str,
        fields: &[(&str, Value)],
    ) -> Result<()> {
        // Base document with the service fragment guaranteed to be an object
        let mut sql = String::from(
            "UPDATE users SET protected = json_set(
                CASE WHEN json_type(protected, ?1) = 'object' THEN protected
                     ELSE json_set(protected, ?1, json('{}')) END",
        );
        let mut args: Vec<String> = vec![service_path(service)?];

        for (field, value) in fields {
            let n = args.len();
            sql.push_str(&format!(", ?{}, json(?{})", n + 1, n + 2));
            args.push(field_path(service, field)?);
            args.push(serde_json::to_string(value)?);
        }

        let n = args.len();
        sql.push_str(&format!("), updated_at = ?{} WHERE id = ?{}", n + 1, n + 2));
        args.push(Utc::now().to_rfc3339());
        args.push(user_id.to_string());

        let conn = self.conn.lock();
        let rows_affected = conn.execute(&sql, params_from_iter(args.iter()))?;

        if rows_affected == 0 {
            return Err(TokenStoreError::NotFound(format!("User '{}'", user_id)));
        }
        Ok(())
    }
}
