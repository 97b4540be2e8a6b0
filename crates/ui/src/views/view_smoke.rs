use mindcare_core::model::{ModuleId, RoomId};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn login_view_links_to_signup() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Login"), "missing login button in {html}");
    assert!(html.contains("/signup"), "missing signup link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn doctors_view_lists_every_professional() {
    let mut harness = setup_view_harness(ViewKind::Doctors);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Found 7 mental health professionals"), "{html}");
    assert!(html.contains("Dr. Sarah Johnson"));
    assert!(html.contains("Dr. Priya Patel"));
    assert!(html.contains("All Specialties"));
}

#[tokio::test(flavor = "current_thread")]
async fn community_view_shows_seed_posts() {
    let mut harness = setup_view_harness(ViewKind::Community);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Hopeful_Journey"), "{html}");
    assert!(html.contains("2 hours ago"), "{html}");
    assert!(html.contains("Share Post"));
}

#[tokio::test(flavor = "current_thread")]
async fn chatbot_view_opens_with_greeting() {
    let mut harness = setup_view_harness(ViewKind::Chatbot);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("How are you feeling today?"), "{html}");
    assert!(!html.contains("Typing..."));
}

#[tokio::test(flavor = "current_thread")]
async fn rooms_view_renders_catalog_rooms() {
    let mut harness = setup_view_harness(ViewKind::Rooms);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Anxiety Relief"), "{html}");
    assert!(html.contains("Mindful Living"), "{html}");
    assert!(html.contains("/rooms/anxiety"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_room_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::RoomDetail("nowhere"));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Room not found"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn user_dashboard_reflects_stored_progress() {
    let mut harness = setup_view_harness(ViewKind::UserDashboard);
    harness
        .services
        .rooms()
        .complete_module(&RoomId::new("stress"), ModuleId::new(1))
        .await
        .expect("complete");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("1 / 28 modules completed"), "{html}");
    assert!(html.contains("1 room joined"), "{html}");
}
