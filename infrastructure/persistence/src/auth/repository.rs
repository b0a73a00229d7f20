use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::auth::model::User;
use business::domain::auth::repository::SessionRepository;
use business::domain::errors::RepositoryError;

use super::entity::SessionEntity;

/// Fixed key for the zero-or-one persisted session record.
const CURRENT_SESSION_KEY: &str = "current-user";

pub struct SessionRepositorySqlite {
    pool: SqlitePool,
}

impl SessionRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositorySqlite {
    async fn get_current(&self) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, SessionEntity>(
            "SELECT id, user_id, email, name, login_time FROM auth_session WHERE id = ?1",
        )
        .bind(CURRENT_SESSION_KEY)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn set_current(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO auth_session (id, user_id, email, name, login_time)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (id) DO UPDATE SET
                user_id = excluded.user_id,
                email = excluded.email,
                name = excluded.name,
                login_time = excluded.login_time"#,
        )
        .bind(CURRENT_SESSION_KEY)
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.login_time)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM auth_session WHERE id = ?1")
            .bind(CURRENT_SESSION_KEY)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
