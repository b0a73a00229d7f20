use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::auth::model::User;

/// Row shape for the single-record auth collection. `id` is always the
/// sentinel session key; the user's own id lives in `user_id`.
#[derive(Debug, FromRow)]
pub struct SessionEntity {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub login_time: DateTime<Utc>,
}

impl SessionEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(self.user_id, self.email, self.name, self.login_time)
    }
}
