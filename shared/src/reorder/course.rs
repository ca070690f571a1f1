//! Gestures applied to a whole course tree

use super::list::move_across;
use super::outcome::ReorderOutcome;
use crate::models::{CourseDetails, ModuleOrderItem, VideoOrderItem};

/// A video dropped over another video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMove {
    pub active: i64,
    pub over: i64,
    /// Module the active video currently belongs to
    pub source_module: i64,
    /// Module that holds the `over` video
    pub target_module: i64,
}

impl VideoMove {
    /// Resolve both parents from the course tree. `None` when either video
    /// is unknown, which makes the drop a no-op.
    pub fn locate(course: &CourseDetails, active: i64, over: i64) -> Option<Self> {
        Some(Self {
            active,
            over,
            source_module: course.module_of_video(active)?,
            target_module: course.module_of_video(over)?,
        })
    }

    pub fn is_cross_module(&self) -> bool {
        self.source_module != self.target_module
    }
}

/// Reorder the modules of a course
pub fn reorder_modules(
    course: &mut CourseDetails,
    active: i64,
    over: i64,
) -> ReorderOutcome<ModuleOrderItem> {
    course.modules.move_item(active, over).map(Into::into)
}

/// Move a video inside its module or into another module of the same course
///
/// The cross-module case is applied atomically to both modules: the video is
/// never observable in neither or in both.
pub fn move_video(course: &mut CourseDetails, mv: VideoMove) -> ReorderOutcome<VideoOrderItem> {
    if mv.active == mv.over {
        return ReorderOutcome::Unchanged;
    }

    if !mv.is_cross_module() {
        let Some(module) = course.modules.get_mut(mv.source_module) else {
            return ReorderOutcome::Unchanged;
        };
        let module_id = module.id;
        return module
            .videos
            .move_item(mv.active, mv.over)
            .map(|c| VideoOrderItem {
                id: c.id,
                order: c.order,
                module_id,
            });
    }

    let Some((source, target)) = course.modules.pair_mut(mv.source_module, mv.target_module)
    else {
        return ReorderOutcome::Unchanged;
    };
    let target_id = target.id;
    move_across(
        &mut source.videos,
        &mut target.videos,
        target_id,
        mv.active,
        mv.over,
    )
    .map(Into::into)
}
