use serde::de::IgnoredAny;
use shared::QueryKey;
use shared::models::{Module, ModuleCreate, ModuleOrderItem, ModuleUpdate, ReorderModulesRequest};

use super::{AdminApi, Mutation};
use crate::http::HttpClient;
use crate::validation;
use crate::ClientResult;

impl<C: HttpClient> AdminApi<C> {
    pub async fn create_module(
        &self,
        course_id: i64,
        module: &ModuleCreate,
    ) -> ClientResult<Mutation<Module>> {
        validation::validate_module_create(module)?;
        let created = self
            .http
            .post(&format!("courses/{course_id}/modules"), module)
            .await?;
        Ok(self.written(created, QueryKey::course_tree(course_id)))
    }

    pub async fn update_module(
        &self,
        course_id: i64,
        module_id: i64,
        module: &ModuleUpdate,
    ) -> ClientResult<Mutation<()>> {
        validation::validate_module_update(module)?;
        let _: IgnoredAny = self
            .http
            .put(&format!("courses/{course_id}/modules/{module_id}"), module)
            .await?;
        Ok(self.written((), QueryKey::course_tree(course_id)))
    }

    pub async fn remove_module(&self, course_id: i64, module_id: i64) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self
            .http
            .delete(&format!("courses/{course_id}/modules/{module_id}"))
            .await?;
        Ok(self.written((), QueryKey::course_tree(course_id)))
    }

    /// `POST courses/{id}/modules/reorder`
    ///
    /// Sends the entries as given; the response body is ignored. Callers that
    /// start from a drag gesture go through [`ReorderService`](crate::ReorderService).
    pub async fn reorder_modules(
        &self,
        course_id: i64,
        modules: Vec<ModuleOrderItem>,
    ) -> ClientResult<()> {
        let body = ReorderModulesRequest { modules };
        let _: IgnoredAny = self
            .http
            .post(&format!("courses/{course_id}/modules/reorder"), &body)
            .await?;
        Ok(())
    }
}
