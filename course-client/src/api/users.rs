use serde::de::IgnoredAny;
use shared::QueryKey;
use shared::models::{PasswordChange, User, UserCreate, UserUpdate};

use super::{AdminApi, Mutation};
use crate::http::HttpClient;
use crate::validation;
use crate::ClientResult;

impl<C: HttpClient> AdminApi<C> {
    pub async fn fetch_users(&self) -> ClientResult<Vec<User>> {
        self.http.get("users").await
    }

    pub async fn create_user(&self, user: &UserCreate) -> ClientResult<Mutation<User>> {
        validation::validate_user_create(user)?;
        let created = self.http.post("users", user).await?;
        Ok(self.written(created, vec![QueryKey::Users]))
    }

    /// Profile fields only; see [`Self::change_user_password`]
    pub async fn update_user(&self, id: i64, user: &UserUpdate) -> ClientResult<Mutation<User>> {
        validation::validate_user_update(user)?;
        let updated = self.http.put(&format!("users/{id}"), user).await?;
        Ok(self.written(updated, vec![QueryKey::Users]))
    }

    pub async fn change_user_password(
        &self,
        id: i64,
        change: &PasswordChange,
    ) -> ClientResult<Mutation<()>> {
        validation::validate_password_change(change)?;
        let _: IgnoredAny = self.http.put(&format!("users/{id}"), change).await?;
        Ok(self.written((), vec![QueryKey::Users]))
    }

    pub async fn delete_user(&self, id: i64) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self.http.delete(&format!("users/{id}")).await?;
        Ok(self.written((), vec![QueryKey::Users]))
    }
}
