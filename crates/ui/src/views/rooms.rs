use dioxus::prelude::*;
use dioxus_router::Link;
use mindcare_core::model::{ModuleId, RoomId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ModuleRowVm, map_room_cards, map_room_detail};

#[component]
pub fn RoomsView() -> Element {
    let ctx = use_context::<AppContext>();
    let rooms = ctx.rooms();
    let resource = use_resource(move || {
        let rooms = rooms.clone();
        async move { Ok::<_, ViewError>(map_room_cards(&rooms.list_rooms().await)) }
    });

    let state = view_state_from_resource(resource);
    rsx! {
        div { class: "page rooms-page",
            header { class: "view-header",
                h2 { class: "view-title", "Mental Health Programs" }
                p { class: "view-subtitle", "Guided programs with one module per day." }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(cards) => rsx! {
                    div { class: "room-grid",
                        for card in cards {
                            article { key: "{card.id}", class: "room-card",
                                h3 { "{card.icon} {card.title}" }
                                p { "{card.description}" }
                                p { class: "room-duration", "{card.duration_label}" }
                                progress { value: "{card.percent}", max: "100" }
                                p { class: "room-progress", "{card.progress_label}" }
                                Link {
                                    to: Route::RoomDetail {
                                        room_id: card.id.to_string(),
                                    },
                                    if card.percent > 0 { "Continue" } else { "Start Program" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub fn RoomDetailView(room_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let rooms = ctx.rooms();
    let rooms_for_action = ctx.rooms();
    let selected = use_signal(|| None::<ModuleId>);
    let mut action_error = use_signal(|| None::<String>);

    let mut resource = use_resource(use_reactive((&room_id,), move |(room_id,)| {
        let rooms = rooms.clone();
        async move {
            let Ok(room_id) = room_id.parse::<RoomId>() else {
                return Ok::<_, ViewError>(None);
            };
            Ok(rooms
                .room_detail(&room_id)
                .await
                .map(|detail| map_room_detail(&detail)))
        }
    }));

    let complete = use_callback(move |(room_id, module_id): (RoomId, ModuleId)| {
        let rooms = rooms_for_action.clone();
        spawn(async move {
            match rooms.complete_module(&room_id, module_id).await {
                Ok(_) => action_error.set(None),
                Err(err) => {
                    tracing::warn!(room = %room_id, module = %module_id, error = %err, "module completion rejected");
                    action_error.set(Some(err.to_string()));
                }
            }
            resource.restart();
        });
    });

    let state = view_state_from_resource(resource);
    rsx! {
        div { class: "page room-detail-page",
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
                ViewState::Ready(None) => rsx! {
                    h2 { "Room not found" }
                    Link { to: Route::Rooms {}, "Back to Rooms" }
                },
                ViewState::Ready(Some(vm)) => {
                    let modules = vm.modules.iter().map(|module| {
                        rsx! {
                            ModuleCard {
                                key: "{module.id}",
                                room_id: vm.id.clone(),
                                module: module.clone(),
                                selected,
                                on_complete: complete,
                            }
                        }
                    });
                    rsx! {
                        Link { to: Route::Rooms {}, "← Back to Rooms" }
                        header { class: "view-header",
                            h2 { class: "view-title", "{vm.icon} {vm.title}" }
                            p { class: "view-subtitle", "{vm.description}" }
                            p { "{vm.program_label}" }
                        }
                        section { class: "room-overall",
                            span { "Overall Progress" }
                            progress { value: "{vm.percent}", max: "100" }
                            span { "{vm.progress_label}" }
                        }
                        if let Some(message) = action_error() {
                            p { class: "form-error", "{message}" }
                        }
                        section { class: "module-list",
                            h3 { "Daily Modules" }
                            p { "Complete one module per day" }
                            {modules}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ModuleCard(
    room_id: RoomId,
    module: ModuleRowVm,
    mut selected: Signal<Option<ModuleId>>,
    on_complete: Callback<(RoomId, ModuleId)>,
) -> Element {
    let module_id = module.id;
    let locked = module.status.is_locked();
    let is_open = selected() == Some(module_id);
    let status = module.status.label();

    rsx! {
        article { class: "module-card module-card--{status}",
            button {
                class: "module-header",
                r#type: "button",
                disabled: locked,
                onclick: move |_| {
                    let next = if selected() == Some(module_id) { None } else { Some(module_id) };
                    selected.set(next);
                },
                span { class: "module-day", "{module.day_label}" }
                span { class: "module-title", "{module.title}" }
                span { class: "module-status", "{module.status_label()}" }
            }
            if is_open {
                div { class: "module-body",
                    h4 { "Content" }
                    p { "{module.content}" }
                    h4 { "Today's Activities" }
                    ul {
                        for activity in module.activities.iter() {
                            li { "{activity}" }
                        }
                    }
                    if module.can_complete() {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| on_complete.call((room_id.clone(), module_id)),
                            "Mark as Complete"
                        }
                    } else if !locked {
                        p { class: "module-done", "Module Completed!" }
                    }
                }
            }
        }
    }
}
