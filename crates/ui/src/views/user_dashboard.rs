use dioxus::prelude::*;
use mindcare_core::model::RoomId;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_dashboard;

/// Overall and per-room progress, with a reset per room.
#[component]
pub fn UserDashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();
    let rooms = ctx.rooms();
    let mut resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move { Ok::<_, ViewError>(map_dashboard(&dashboard.overview().await)) }
    });

    let reset = use_callback(move |room_id: RoomId| {
        let rooms = rooms.clone();
        spawn(async move {
            if let Err(err) = rooms.reset_room(&room_id).await {
                tracing::warn!(room = %room_id, error = %err, "room reset failed");
            }
            resource.restart();
        });
    });

    let state = view_state_from_resource(resource);
    rsx! {
        div { class: "page user-dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "My Progress" }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
                ViewState::Ready(vm) => {
                    let rows = vm.rooms.iter().map(|card| {
                        let room_id = card.id.clone();
                        rsx! {
                            div { key: "{card.id}", class: "room-progress-row",
                                span { "{card.icon} {card.title}" }
                                progress { value: "{card.percent}", max: "100" }
                                span { "{card.progress_label}" }
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: card.percent == 0,
                                    onclick: move |_| reset.call(room_id.clone()),
                                    "Reset"
                                }
                            }
                        }
                    });
                    rsx! {
                        section { class: "overall-progress",
                            h3 { "Overall Progress" }
                            progress { value: "{vm.overall_percent}", max: "100" }
                            p { class: "overall-percent", "{vm.overall_label}" }
                            p { "{vm.modules_label}" }
                            p { "{vm.rooms_joined_label}" }
                        }
                        section { class: "room-progress", {rows} }
                    }
                }
            }
        }
    }
}
