use serde::de::IgnoredAny;
use shared::QueryKey;
use shared::models::{FaqForm, HelpArticle, HelpArticleQuery, HelpCategory, HelpCategoryForm};

use super::{AdminApi, Mutation};
use crate::http::HttpClient;
use crate::validation;
use crate::ClientResult;

impl<C: HttpClient> AdminApi<C> {
    // ========== Articles / FAQ ==========

    pub async fn fetch_faqs(&self) -> ClientResult<Vec<HelpArticle>> {
        self.fetch_help_articles(&HelpArticleQuery::faqs()).await
    }

    pub async fn fetch_help_articles(
        &self,
        query: &HelpArticleQuery,
    ) -> ClientResult<Vec<HelpArticle>> {
        self.http
            .get_with_query("help-articles", &query.to_pairs())
            .await
    }

    pub async fn fetch_help_article(&self, id: i64) -> ClientResult<HelpArticle> {
        self.http.get(&format!("help-articles/{id}")).await
    }

    /// Always stored as an FAQ entry
    pub async fn create_faq(&self, faq: FaqForm) -> ClientResult<Mutation<HelpArticle>> {
        validation::validate_faq(&faq)?;
        let body = FaqForm {
            is_faq: Some(true),
            ..faq
        };
        let created = self.http.post("help-articles", &body).await?;
        Ok(self.written(created, vec![QueryKey::HelpArticles, QueryKey::HelpCategories]))
    }

    pub async fn update_faq(&self, id: i64, faq: FaqForm) -> ClientResult<Mutation<HelpArticle>> {
        validation::validate_faq(&faq)?;
        let body = FaqForm {
            is_faq: Some(true),
            ..faq
        };
        let updated = self.http.put(&format!("help-articles/{id}"), &body).await?;
        Ok(self.written(updated, vec![QueryKey::HelpArticles, QueryKey::HelpCategories]))
    }

    pub async fn delete_help_article(&self, id: i64) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self.http.delete(&format!("help-articles/{id}")).await?;
        Ok(self.written((), vec![QueryKey::HelpArticles, QueryKey::HelpCategories]))
    }

    // ========== Categories ==========

    pub async fn fetch_help_categories(
        &self,
        search: Option<&str>,
    ) -> ClientResult<Vec<HelpCategory>> {
        let query: Vec<(&str, String)> = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| ("search", s.to_string()))
            .into_iter()
            .collect();
        self.http.get_with_query("help-categories", &query).await
    }

    pub async fn fetch_help_category(&self, id: i64) -> ClientResult<HelpCategory> {
        self.http.get(&format!("help-categories/{id}")).await
    }

    /// Slug is derived from the name when not given
    pub async fn create_help_category(
        &self,
        category: HelpCategoryForm,
    ) -> ClientResult<Mutation<HelpCategory>> {
        let body = validation::prepare_help_category(category)?;
        let created = self.http.post("help-categories", &body).await?;
        Ok(self.written(created, vec![QueryKey::HelpCategories]))
    }

    pub async fn update_help_category(
        &self,
        id: i64,
        category: HelpCategoryForm,
    ) -> ClientResult<Mutation<HelpCategory>> {
        let body = validation::prepare_help_category(category)?;
        let updated = self
            .http
            .put(&format!("help-categories/{id}"), &body)
            .await?;
        Ok(self.written(updated, vec![QueryKey::HelpCategories, QueryKey::HelpArticles]))
    }

    pub async fn delete_help_category(&self, id: i64) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self.http.delete(&format!("help-categories/{id}")).await?;
        Ok(self.written((), vec![QueryKey::HelpCategories, QueryKey::HelpArticles]))
    }
}
