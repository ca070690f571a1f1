use serde::de::IgnoredAny;
use shared::QueryKey;
use shared::models::{Badge, BadgeForm};

use super::{AdminApi, Mutation};
use crate::http::HttpClient;
use crate::validation;
use crate::ClientResult;

impl<C: HttpClient> AdminApi<C> {
    pub async fn fetch_badges(&self) -> ClientResult<Vec<Badge>> {
        self.http.get("badges").await
    }

    pub async fn fetch_badge(&self, id: i64) -> ClientResult<Badge> {
        self.http.get(&format!("badges/{id}")).await
    }

    pub async fn create_badge(&self, badge: &BadgeForm) -> ClientResult<Mutation<Badge>> {
        validation::validate_badge(badge)?;
        let created = self.http.post("badges", badge).await?;
        Ok(self.written(created, vec![QueryKey::Badges]))
    }

    pub async fn update_badge(&self, id: i64, badge: &BadgeForm) -> ClientResult<Mutation<Badge>> {
        validation::validate_badge(badge)?;
        let updated = self.http.put(&format!("badges/{id}"), badge).await?;
        Ok(self.written(updated, vec![QueryKey::Badges]))
    }

    pub async fn delete_badge(&self, id: i64) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self.http.delete(&format!("badges/{id}")).await?;
        Ok(self.written((), vec![QueryKey::Badges]))
    }
}
