//! Drag-and-drop reorder service
//!
//! Applies a gesture to the local course tree, persists the minimal diff with
//! one bulk call, then signals that the course is stale. Only one reorder per
//! course may be in flight; a second gesture is rejected before it touches
//! local state.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shared::QueryKey;
use shared::models::{CourseDetails, ModuleOrderItem, VideoOrderItem};
use shared::reorder::{self, ReorderOutcome, SortableKey, VideoMove};

use crate::api::AdminApi;
use crate::cache::{Invalidation, InvalidationCause};
use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// What a drag gesture turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    Modules(ReorderOutcome<ModuleOrderItem>),
    Videos(ReorderOutcome<VideoOrderItem>),
    /// Module dropped on a video or the other way round
    Ignored,
}

impl DragOutcome {
    pub fn is_unchanged(&self) -> bool {
        match self {
            Self::Modules(o) => o.is_unchanged(),
            Self::Videos(o) => o.is_unchanged(),
            Self::Ignored => true,
        }
    }
}

/// Releases the course slot on drop, including when the future is cancelled
struct InFlightGuard {
    courses: Arc<DashMap<i64, ()>>,
    course_id: i64,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.courses.remove(&self.course_id);
    }
}

pub struct ReorderService<C> {
    api: Arc<AdminApi<C>>,
    in_flight: Arc<DashMap<i64, ()>>,
}

impl<C> Clone for ReorderService<C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<C: HttpClient> ReorderService<C> {
    pub fn new(api: Arc<AdminApi<C>>) -> Self {
        Self {
            api,
            in_flight: Arc::new(DashMap::new()),
        }
    }

    pub fn api(&self) -> &AdminApi<C> {
        &self.api
    }

    /// Whether a reorder of this course is still waiting for the server
    pub fn is_in_flight(&self, course_id: i64) -> bool {
        self.in_flight.contains_key(&course_id)
    }

    fn acquire(&self, course_id: i64) -> ClientResult<InFlightGuard> {
        match self.in_flight.entry(course_id) {
            Entry::Occupied(_) => {
                tracing::debug!(course_id, "Reorder rejected, another one is in flight");
                Err(ClientError::ReorderInFlight(course_id))
            }
            Entry::Vacant(slot) => {
                slot.insert(());
                Ok(InFlightGuard {
                    courses: Arc::clone(&self.in_flight),
                    course_id,
                })
            }
        }
    }

    fn signal(&self, course_id: i64, cause: InvalidationCause) {
        self.api
            .bus()
            .publish(Invalidation::new(QueryKey::course_tree(course_id), cause));
    }

    /// Move module `active` to the slot of module `over`
    pub async fn reorder_modules(
        &self,
        course: &mut CourseDetails,
        active: i64,
        over: i64,
    ) -> ClientResult<ReorderOutcome<ModuleOrderItem>> {
        let course_id = course.id;
        let _guard = self.acquire(course_id)?;

        let outcome = reorder::reorder_modules(course, active, over);
        if outcome.is_unchanged() {
            return Ok(outcome);
        }
        let modules = outcome.changes().to_vec();
        tracing::debug!(course_id, active, over, changes = ?modules, "Module order computed");

        let count = modules.len();
        let result = self.api.reorder_modules(course_id, modules).await;
        self.finish(course_id, "modules", count, result)?;
        Ok(outcome)
    }

    /// Move video `active` to the slot of video `over`, possibly in another module
    pub async fn move_video(
        &self,
        course: &mut CourseDetails,
        active: i64,
        over: i64,
    ) -> ClientResult<ReorderOutcome<VideoOrderItem>> {
        let course_id = course.id;
        let _guard = self.acquire(course_id)?;

        let Some(mv) = VideoMove::locate(course, active, over) else {
            return Ok(ReorderOutcome::Unchanged);
        };
        let outcome = reorder::move_video(course, mv);
        if outcome.is_unchanged() {
            return Ok(outcome);
        }
        let videos = outcome.changes().to_vec();
        tracing::debug!(
            course_id,
            active,
            over,
            cross_module = mv.is_cross_module(),
            changes = ?videos,
            "Video order computed"
        );

        let count = videos.len();
        let result = self.api.reorder_videos(course_id, videos).await;
        self.finish(course_id, "videos", count, result)?;
        Ok(outcome)
    }

    /// Dispatch a gesture given as drag handle ids (`module-3`, `video-12`)
    pub async fn apply_drag(
        &self,
        course: &mut CourseDetails,
        active: SortableKey,
        over: SortableKey,
    ) -> ClientResult<DragOutcome> {
        match (active, over) {
            (SortableKey::Module(a), SortableKey::Module(o)) => {
                self.reorder_modules(course, a, o).await.map(DragOutcome::Modules)
            }
            (SortableKey::Video(a), SortableKey::Video(o)) => {
                self.move_video(course, a, o).await.map(DragOutcome::Videos)
            }
            _ => Ok(DragOutcome::Ignored),
        }
    }

    /// Invalidate after both success and failure; the caller re-fetches
    fn finish(
        &self,
        course_id: i64,
        kind: &'static str,
        count: usize,
        result: ClientResult<()>,
    ) -> ClientResult<()> {
        match result {
            Ok(()) => {
                tracing::info!(course_id, kind, count, "Reorder persisted");
                self.signal(course_id, InvalidationCause::ReorderSaved);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(course_id, kind, error = %e, "Reorder failed, course must be re-fetched");
                self.signal(course_id, InvalidationCause::ReorderFailed);
                Err(e)
            }
        }
    }
}
