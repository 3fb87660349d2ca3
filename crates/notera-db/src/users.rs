//! User repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use notera_core::{Error, Result, User, UserStore};

/// PostgreSQL implementation of the credential store.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Pool<Postgres>,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Map a unique-key violation on insert to a Conflict error.
fn map_insert_error(err: sqlx::Error, username: &str) -> Error {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return Error::Conflict(format!("Username {username} is already taken"));
        }
    }
    Error::Database(err)
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn insert(&self, user: &User) -> Result<()> {
        sqlx::query(
            "INSERT INTO users (username, name, password_hash, session_token)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(&user.session_token)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &user.username))?;
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT username, name, password_hash, session_token
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(user)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT username, name, password_hash, session_token
             FROM users WHERE session_token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(user)
    }

    async fn update_profile(
        &self,
        username: &str,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User> {
        // Nothing to change: just return the current record.
        if name.is_none() && password_hash.is_none() {
            return self
                .find_by_username(username)
                .await?
                .ok_or_else(|| Error::NotFound(format!("User {username} not found")));
        }

        // $1 = username, dynamic params start at $2
        let mut updates: Vec<String> = Vec::new();
        let mut param_idx = 2;
        if name.is_some() {
            updates.push(format!("name = ${param_idx}"));
            param_idx += 1;
        }
        if password_hash.is_some() {
            updates.push(format!("password_hash = ${param_idx}"));
        }

        let query = format!(
            "UPDATE users SET {} WHERE username = $1
             RETURNING username, name, password_hash, session_token",
            updates.join(", ")
        );

        let mut q = sqlx::query_as::<_, User>(&query).bind(username);
        if let Some(name) = name {
            q = q.bind(name);
        }
        if let Some(hash) = password_hash {
            q = q.bind(hash);
        }

        q.fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or_else(|| Error::NotFound(format!("User {username} not found")))
    }

    async fn set_token(&self, username: &str, token: Option<&str>) -> Result<()> {
        let result = sqlx::query("UPDATE users SET session_token = $2 WHERE username = $1")
            .bind(username)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("User {username} not found")));
        }
        Ok(())
    }
}
