use serde::de::IgnoredAny;
use shared::QueryKey;
use shared::models::{Teacher, TeacherForm};

use super::{AdminApi, Mutation};
use crate::http::{HttpClient, MultipartForm};
use crate::validation;
use crate::ClientResult;

/// Multipart body; empty optional fields and a missing avatar are left out
fn teacher_form(teacher: TeacherForm) -> MultipartForm {
    let mut form = MultipartForm::new()
        .text("name", teacher.name)
        .text("email", teacher.email);
    for (name, value) in [("phone", teacher.phone), ("bio", teacher.bio)] {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            form = form.text(name, value);
        }
    }
    match teacher.avatar {
        Some(a) => form.file("avatar", a.file_name, a.content_type, a.bytes),
        None => form,
    }
}

impl<C: HttpClient> AdminApi<C> {
    pub async fn fetch_teachers(&self) -> ClientResult<Vec<Teacher>> {
        self.http.get("teachers").await
    }

    pub async fn fetch_teacher(&self, id: i64) -> ClientResult<Teacher> {
        self.http.get(&format!("teachers/{id}")).await
    }

    pub async fn create_teacher(&self, teacher: TeacherForm) -> ClientResult<Mutation<Teacher>> {
        validation::validate_teacher(&teacher)?;
        let created = self
            .http
            .post_multipart("teachers", teacher_form(teacher))
            .await?;
        Ok(self.written(created, vec![QueryKey::Teachers]))
    }

    /// Updates are a multipart POST to the teacher's own path
    pub async fn update_teacher(
        &self,
        id: i64,
        teacher: TeacherForm,
    ) -> ClientResult<Mutation<Teacher>> {
        validation::validate_teacher(&teacher)?;
        let updated = self
            .http
            .post_multipart(&format!("teachers/{id}"), teacher_form(teacher))
            .await?;
        Ok(self.written(updated, vec![QueryKey::Teachers]))
    }

    pub async fn delete_teacher(&self, id: i64) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self.http.delete(&format!("teachers/{id}")).await?;
        Ok(self.written((), vec![QueryKey::Teachers]))
    }
}
