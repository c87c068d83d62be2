//! External token table operations

use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, Result as SqliteResult, Row, params};

use super::super::Database;
use crate::models::ExternalToken;

fn parse_timestamp(idx: usize, value: &str) -> SqliteResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

impl Database {
    /// Get the stored tokens of a user for a service
    pub fn get_external_token(&self, user_id: &str, service: &str) -> SqliteResult<Option<ExternalToken>> {
        let conn = self.conn.lock();

        conn.query_row(
            "SELECT user_id, service, access_token, access_token_expiry, refresh_token, updated_at
             FROM oauth_tokens WHERE user_id = ?1 AND service = ?2",
            [user_id, service],
            Self::row_to_external_token,
        )
        .optional()
    }

    /// Insert or update the access token and its expiry
    pub fn upsert_external_access_token(
        &self,
        user_id: &str,
        service: &str,
        token: &str,
        expiry: Option<DateTime<Utc>>,
    ) -> SqliteResult<()> {
        let conn = self.conn.lock();
        let now = Utc::now().to_rfc3339();
        let expiry = expiry.map(|e| e.to_rfc3339());

        conn.execute(
            "INSERT INTO oauth_tokens (user_id, service, access_token, access_token_expiry, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(user_id, service) DO UPDATE SET
                access_token = excluded.access_token,
                access_token_expiry = excluded.access_token_expiry,
                updated_at = excluded.updated_at",
            params![user_id, service, token, expiry, &now],
        )?;

        Ok(())
    }

    /// Insert or update the refresh token
    pub fn upsert_external_refresh_token(&self, user_id: &str, service: &str, token: &str) -> SqliteResult<()> {
        let conn = self.conn.lock();
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO oauth_tokens (user_id, service, refresh_token, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(user_id, service) DO UPDATE SET
                refresh_token = excluded.refresh_token,
                updated_at = excluded.updated_at",
            params![user_id, service, token, &now],
        )?;

        Ok(())
    }

    /// Count stored token rows for a service
    pub fn count_external_tokens(&self, service: &str) -> SqliteResult<i64> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT COUNT(*) FROM oauth_tokens WHERE service = ?1",
            [service],
            |row| row.get(0),
        )
    }

    fn row_to_external_token(row: &Row) -> SqliteResult<ExternalToken> {
        let expiry_str: Option<String> = row.get(3)?;
        let updated_at_str: String = row.get(5)?;

        Ok(ExternalToken {
            user_id: row.get(0)?,
            service: row.get(1)?,
            access_token: row.get(2)?,
            access_token_expiry: expiry_str.map(|s| parse_timestamp(3, &s)).transpose()?,
            refresh_token: row.get(4)?,
            updated_at: parse_timestamp(5, &updated_at_str)?,
        })
    }
}
