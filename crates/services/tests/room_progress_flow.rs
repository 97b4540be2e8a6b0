use mindcare_core::model::{ModuleId, ModuleStatus, RoomId};
use mindcare_core::time::fixed_now;
use services::{AppServices, Clock, PROGRESS_STORAGE_KEY, RoomServiceError};
use storage::{KeyValueStore, Storage};

#[tokio::test]
async fn progress_survives_reopening_sqlite() {
    let url = "sqlite:file:memdb_room_flow?mode=memory&cache=shared";
    // Keep one pool alive so the shared in-memory database outlives the first services.
    let keep_alive = Storage::sqlite(url).await.expect("storage");

    let room = RoomId::new("anxiety");
    {
        let services = AppServices::new_sqlite(url, Clock::fixed(fixed_now()))
            .await
            .expect("services");
        let rooms = services.rooms();
        rooms
            .complete_module(&room, ModuleId::new(1))
            .await
            .unwrap();
        rooms
            .complete_module(&room, ModuleId::new(2))
            .await
            .unwrap();
    }

    let services = AppServices::new_sqlite(url, Clock::fixed(fixed_now()))
        .await
        .expect("reopen");
    let detail = services.rooms().room_detail(&room).await.unwrap();
    assert_eq!(detail.completed, 2);
    assert_eq!(detail.status_of(ModuleId::new(3)), Some(ModuleStatus::Available));
    assert_eq!(detail.status_of(ModuleId::new(4)), Some(ModuleStatus::Locked));
    assert_eq!(services.progress().room_progress(&room, 4).await, 50);

    let raw = keep_alive.kv.get(PROGRESS_STORAGE_KEY).await.unwrap();
    assert_eq!(raw.as_deref(), Some(r#"{"anxiety":{"1":true,"2":true}}"#));
}

#[tokio::test]
async fn walking_a_room_end_to_end_reaches_full_progress() {
    let services = AppServices::in_memory(Clock::fixed(fixed_now())).unwrap();
    let rooms = services.rooms();
    let room = RoomId::new("mindfulness");

    let detail = rooms.room_detail(&room).await.unwrap();
    let ids: Vec<ModuleId> = detail.room.modules().iter().map(|m| m.id()).collect();

    let last = ids[ids.len() - 1];
    assert!(matches!(
        rooms.complete_module(&room, last).await,
        Err(RoomServiceError::ModuleLocked { .. })
    ));

    for id in &ids {
        rooms.complete_module(&room, *id).await.unwrap();
    }

    let detail = rooms.room_detail(&room).await.unwrap();
    assert_eq!(detail.percent, 100);
    assert!(detail.statuses.iter().all(|s| *s == ModuleStatus::Completed));

    let overview = services.dashboard().overview().await;
    assert_eq!(overview.rooms_joined, 1);
    assert_eq!(overview.overall_percent, 25);

    rooms.reset_room(&room).await.unwrap();
    let overview = services.dashboard().overview().await;
    assert_eq!(overview.completed_modules, 0);
}

#[tokio::test]
async fn feeds_and_chats_are_independent_per_view() {
    let services = AppServices::in_memory(Clock::fixed(fixed_now())).unwrap();

    let mut feed = services.community_feed();
    feed.create_post("hello everyone").unwrap();
    assert_eq!(
        services.community_feed().posts().len() + 1,
        feed.posts().len()
    );

    let mut chat = services.chat_simulator();
    let pending = chat.submit("hi").unwrap();
    assert!(pending.delay >= services::chat_service::MIN_REPLY_DELAY);
    chat.deliver(pending);
    assert_eq!(chat.messages().len(), 3);
    assert_eq!(services.chat_simulator().messages().len(), 1);
}
