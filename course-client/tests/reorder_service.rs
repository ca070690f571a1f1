// course-client/tests/reorder_service.rs
// 拖拽排序服务集成测试 (OneshotHttpClient + mock 后端)

mod common;

use std::sync::atomic::Ordering;

use common::Backend;
use course_client::{
    ClientError, DragOutcome, InvalidationCause, QueryKey, ReorderOutcome, SortableKey,
};
use serde_json::json;
use shared::models::{CourseDetails, ModuleOrderItem, VideoOrderItem};

async fn load(backend: &Backend) -> CourseDetails {
    backend.api().fetch_course(1).await.unwrap()
}

fn video_ids(course: &CourseDetails, module_id: i64) -> Vec<i64> {
    course.module(module_id).unwrap().videos.ids()
}

#[tokio::test]
async fn test_fetch_normalizes_orders() {
    let backend = Backend::new();
    let course = load(&backend).await;

    assert_eq!(course.modules.ids(), vec![10, 20, 30, 40]);
    assert_eq!(course.modules.orders(), vec![1, 2, 3, 4]);
    assert_eq!(video_ids(&course, 10), vec![101, 102]);
    assert_eq!(course.module(10).unwrap().videos.orders(), vec![1, 2]);
}

#[tokio::test]
async fn test_module_move_sends_minimal_diff() {
    let backend = Backend::new();
    let service = backend.service();
    let mut rx = service.api().bus().subscribe();
    let mut course = load(&backend).await;

    let outcome = service.reorder_modules(&mut course, 40, 20).await.unwrap();
    assert_eq!(
        outcome.changes(),
        &[
            ModuleOrderItem { id: 40, order: 2 },
            ModuleOrderItem { id: 20, order: 3 },
            ModuleOrderItem { id: 30, order: 4 },
        ]
    );
    assert_eq!(course.modules.ids(), vec![10, 40, 20, 30]);
    assert_eq!(course.modules.orders(), vec![1, 2, 3, 4]);

    let writes = backend.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].path, "/api/admin/courses/1/modules/reorder");
    assert_eq!(
        writes[0].json(),
        json!({"modules": [
            {"id": 40, "order": 2},
            {"id": 20, "order": 3},
            {"id": 30, "order": 4}
        ]})
    );

    let signal = rx.recv().await.unwrap();
    assert_eq!(signal.cause, InvalidationCause::ReorderSaved);
    assert!(signal.affects(&QueryKey::Course(1)));
    assert!(signal.affects(&QueryKey::Courses));
    assert!(!service.is_in_flight(1));
}

#[tokio::test]
async fn test_cross_module_video_move() {
    let backend = Backend::new();
    let service = backend.service();
    let mut course = load(&backend).await;

    let outcome = service.move_video(&mut course, 102, 201).await.unwrap();
    assert_eq!(
        outcome.changes(),
        &[
            VideoOrderItem { id: 102, order: 1, module_id: 20 },
            VideoOrderItem { id: 201, order: 2, module_id: 20 },
        ]
    );
    assert_eq!(video_ids(&course, 10), vec![101]);
    assert_eq!(video_ids(&course, 20), vec![102, 201]);
    assert_eq!(course.module_of_video(102), Some(20));
    assert_eq!(course.video_count(), 3);

    let writes = backend.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].path, "/api/admin/courses/1/videos/reorder");
    assert_eq!(
        writes[0].json(),
        json!({"videos": [
            {"id": 102, "order": 1, "module_id": 20},
            {"id": 201, "order": 2, "module_id": 20}
        ]})
    );
}

#[tokio::test]
async fn test_cross_module_move_renumbers_source() {
    let backend = Backend::new();
    let service = backend.service();
    let mut course = load(&backend).await;

    let outcome = service.move_video(&mut course, 101, 201).await.unwrap();
    assert_eq!(
        outcome.changes(),
        &[
            VideoOrderItem { id: 101, order: 1, module_id: 20 },
            VideoOrderItem { id: 201, order: 2, module_id: 20 },
            VideoOrderItem { id: 102, order: 1, module_id: 10 },
        ]
    );
    assert_eq!(video_ids(&course, 10), vec![102]);
    assert_eq!(course.module(10).unwrap().videos.orders(), vec![1]);
}

#[tokio::test]
async fn test_no_op_gestures_send_nothing() {
    let backend = Backend::new();
    let service = backend.service();
    let mut course = load(&backend).await;
    let before = course.clone();

    // dropped on itself
    assert!(service.reorder_modules(&mut course, 20, 20).await.unwrap().is_unchanged());
    assert!(service.move_video(&mut course, 101, 101).await.unwrap().is_unchanged());
    // unknown ids
    assert!(service.reorder_modules(&mut course, 20, 99).await.unwrap().is_unchanged());
    assert!(service.move_video(&mut course, 999, 101).await.unwrap().is_unchanged());
    assert!(service.move_video(&mut course, 101, 999).await.unwrap().is_unchanged());
    // onto the next sibling lands back in the same slot
    assert!(service.move_video(&mut course, 101, 102).await.unwrap().is_unchanged());

    assert_eq!(course, before);
    assert!(backend.writes().is_empty());
}

#[tokio::test]
async fn test_failed_reorder_signals_refetch() {
    let backend = Backend::new();
    backend.fail_reorder.store(true, Ordering::SeqCst);
    let service = backend.service();
    let mut rx = service.api().bus().subscribe();
    let mut course = load(&backend).await;

    let err = service.reorder_modules(&mut course, 10, 30).await.unwrap_err();
    match &err {
        ClientError::Api { code, message, .. } => {
            assert_eq!(*code, 9001);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_recoverable());

    // local state keeps the optimistic order until the re-fetch
    assert_eq!(course.modules.ids(), vec![20, 10, 30, 40]);

    let signal = rx.recv().await.unwrap();
    assert_eq!(signal.cause, InvalidationCause::ReorderFailed);
    assert!(signal.affects(&QueryKey::Course(1)));
    assert!(!service.is_in_flight(1));

    // the fresh copy is the server's order
    let fresh = load(&backend).await;
    assert_eq!(fresh.modules.ids(), vec![10, 20, 30, 40]);
}

#[tokio::test]
async fn test_second_gesture_rejected_while_in_flight() {
    let (backend, gate) = Backend::gated();
    let service = backend.service();
    let course = load(&backend).await;

    let first = {
        let service = service.clone();
        let mut course = course.clone();
        tokio::spawn(async move {
            let outcome = service.reorder_modules(&mut course, 40, 10).await;
            (outcome, course)
        })
    };
    gate.entered.notified().await;
    assert!(service.is_in_flight(1));

    let mut other = course.clone();
    let err = service.move_video(&mut other, 102, 201).await.unwrap_err();
    assert!(matches!(err, ClientError::ReorderInFlight(1)));
    assert!(err.is_recoverable());
    // rejected before touching local state
    assert_eq!(other, course);

    gate.release.notify_one();
    let (outcome, moved) = first.await.unwrap();
    assert_eq!(outcome.unwrap().changes().len(), 4);
    assert_eq!(moved.modules.ids(), vec![40, 10, 20, 30]);
    assert!(!service.is_in_flight(1));

    // slot is free again
    gate.release.notify_one();
    let mut again = moved.clone();
    let outcome = tokio::spawn({
        let service = service.clone();
        async move { service.reorder_modules(&mut again, 40, 30).await }
    });
    gate.entered.notified().await;
    assert!(outcome.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_cancelled_reorder_releases_course() {
    let (backend, gate) = Backend::gated();
    let service = backend.service();
    let course = load(&backend).await;

    let task = {
        let service = service.clone();
        let mut course = course.clone();
        tokio::spawn(async move { service.reorder_modules(&mut course, 40, 10).await })
    };
    gate.entered.notified().await;
    assert!(service.is_in_flight(1));

    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());
    assert!(!service.is_in_flight(1));
}

#[tokio::test]
async fn test_apply_drag_dispatches_on_handle_kind() {
    let backend = Backend::new();
    let service = backend.service();
    let mut course = load(&backend).await;

    let active: SortableKey = "module-10".parse().unwrap();
    let over: SortableKey = "video-201".parse().unwrap();
    assert_eq!(
        service.apply_drag(&mut course, active, over).await.unwrap(),
        DragOutcome::Ignored
    );
    assert!(backend.writes().is_empty());

    let outcome = service
        .apply_drag(&mut course, "video-102".parse().unwrap(), "video-101".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(
        outcome,
        DragOutcome::Videos(ReorderOutcome::Moved(vec![
            VideoOrderItem { id: 102, order: 1, module_id: 10 },
            VideoOrderItem { id: 101, order: 2, module_id: 10 },
        ]))
    );

    let outcome = service
        .apply_drag(&mut course, SortableKey::Module(30), SortableKey::Module(10))
        .await
        .unwrap();
    assert!(matches!(outcome, DragOutcome::Modules(ReorderOutcome::Moved(_))));
    assert_eq!(course.modules.ids(), vec![30, 10, 20, 40]);
    assert_eq!(backend.writes().len(), 2);
}

#[test]
fn test_invalid_drag_handle() {
    assert!("chapter-1".parse::<SortableKey>().is_err());
    assert!("video-x".parse::<SortableKey>().is_err());
}
