use serde::de::IgnoredAny;
use shared::QueryKey;
use shared::models::{
    PublishStatus, ReorderVideosRequest, Video, VideoCreate, VideoOrderItem, VideoStatusUpdate,
    VideoUpdate,
};

use super::{AdminApi, Mutation};
use crate::http::HttpClient;
use crate::validation;
use crate::ClientResult;

fn video_path(course_id: i64, module_id: i64, video_id: i64) -> String {
    format!("courses/{course_id}/modules/{module_id}/videos/{video_id}")
}

impl<C: HttpClient> AdminApi<C> {
    pub async fn create_video(
        &self,
        course_id: i64,
        module_id: i64,
        video: &VideoCreate,
    ) -> ClientResult<Mutation<Video>> {
        validation::validate_video_create(video)?;
        let created = self
            .http
            .post(&format!("courses/{course_id}/modules/{module_id}/videos"), video)
            .await?;
        Ok(self.written(created, QueryKey::course_tree(course_id)))
    }

    pub async fn update_video(
        &self,
        course_id: i64,
        module_id: i64,
        video_id: i64,
        video: &VideoUpdate,
    ) -> ClientResult<Mutation<()>> {
        validation::validate_video_update(video)?;
        let _: IgnoredAny = self
            .http
            .put(&video_path(course_id, module_id, video_id), video)
            .await?;
        Ok(self.written((), QueryKey::course_tree(course_id)))
    }

    pub async fn change_video_status(
        &self,
        course_id: i64,
        module_id: i64,
        video_id: i64,
        status: PublishStatus,
    ) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self
            .http
            .put(
                &video_path(course_id, module_id, video_id),
                &VideoStatusUpdate { status },
            )
            .await?;
        Ok(self.written((), QueryKey::course_tree(course_id)))
    }

    pub async fn delete_video(
        &self,
        course_id: i64,
        module_id: i64,
        video_id: i64,
    ) -> ClientResult<Mutation<()>> {
        let _: IgnoredAny = self
            .http
            .delete(&video_path(course_id, module_id, video_id))
            .await?;
        Ok(self.written((), QueryKey::course_tree(course_id)))
    }

    /// `POST courses/{id}/videos/reorder`; entries may span several modules
    pub async fn reorder_videos(
        &self,
        course_id: i64,
        videos: Vec<VideoOrderItem>,
    ) -> ClientResult<()> {
        let body = ReorderVideosRequest { videos };
        let _: IgnoredAny = self
            .http
            .post(&format!("courses/{course_id}/videos/reorder"), &body)
            .await?;
        Ok(())
    }
}
