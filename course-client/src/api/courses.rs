use serde::de::IgnoredAny;
use shared::QueryKey;
use shared::models::{
    CourseCreate, CourseDetails, CourseListItem, CourseStatus, CourseUpdate, ThumbnailUpload,
};

use super::{AdminApi, Mutation};
use crate::http::{HttpClient, MultipartForm};
use crate::validation;
use crate::ClientResult;

fn attach_thumbnail(form: MultipartForm, thumbnail: Option<ThumbnailUpload>) -> MultipartForm {
    match thumbnail {
        Some(t) => form.file("thumbnail", t.file_name, t.content_type, t.bytes),
        None => form,
    }
}

impl<C: HttpClient> AdminApi<C> {
    pub async fn fetch_courses(&self) -> ClientResult<Vec<CourseListItem>> {
        self.http.get("courses").await
    }

    /// Course with its module tree, orders normalized
    pub async fn fetch_course(&self, id: i64) -> ClientResult<CourseDetails> {
        self.http.get(&format!("courses/{id}")).await
    }

    pub async fn create_course(
        &self,
        course: CourseCreate,
    ) -> ClientResult<Mutation<serde_json::Value>> {
        validation::validate_course_create(&course)?;
        let form = MultipartForm::new()
            .text("title", course.title)
            .text("description", course.description.unwrap_or_default());
        let form = attach_thumbnail(form, course.thumbnail);

        let created = self.http.post_multipart("courses", form).await?;
        Ok(self.written(created, vec![QueryKey::Courses]))
    }

    /// Multipart update; only the fields that are set are sent
    pub async fn update_course(
        &self,
        id: i64,
        course: CourseUpdate,
    ) -> ClientResult<Mutation<serde_json::Value>> {
        validation::validate_course_update(&course)?;
        let mut form = MultipartForm::new();
        if let Some(title) = course.title {
            form = form.text("title", title);
        }
        if let Some(description) = course.description {
            form = form.text("description", description);
        }
        let form = attach_thumbnail(form, course.thumbnail);

        let updated = self
            .http
            .post_multipart(&format!("courses/{id}/update"), form)
            .await?;
        Ok(self.written(updated, QueryKey::course_tree(id)))
    }

    pub async fn update_course_status(
        &self,
        id: i64,
        status: CourseStatus,
    ) -> ClientResult<Mutation<()>> {
        let form = MultipartForm::new().text("status", status.as_str());
        let _: IgnoredAny = self
            .http
            .post_multipart(&format!("courses/{id}/update"), form)
            .await?;
        Ok(self.written((), QueryKey::course_tree(id)))
    }

    pub async fn enable_course(&self, id: i64) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self.http.post_empty(&format!("courses/{id}/enable")).await?;
        Ok(self.written((), QueryKey::course_tree(id)))
    }

    pub async fn disable_course(&self, id: i64) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self
            .http
            .post_empty(&format!("courses/{id}/disable"))
            .await?;
        Ok(self.written((), QueryKey::course_tree(id)))
    }

    pub async fn delete_course(&self, id: i64) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self.http.delete(&format!("courses/{id}")).await?;
        Ok(self.written((), QueryKey::course_tree(id)))
    }
}
