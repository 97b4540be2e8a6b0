use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_dashboard;

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();
    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move { Ok::<_, ViewError>(map_dashboard(&dashboard.overview().await)) }
    });

    let state = view_state_from_resource(resource);
    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "Welcome back to MindCare! 👋" }
                p { class: "view-subtitle", "Take a small step for your wellbeing today." }
            }
            section { class: "quick-links",
                div { class: "quick-link",
                    h3 { "Therapy Rooms" }
                    Link { to: Route::Rooms {}, "Explore Rooms" }
                }
                div { class: "quick-link",
                    h3 { "AI Chatbot" }
                    Link { to: Route::Chatbot {}, "Start Chat" }
                }
                div { class: "quick-link",
                    h3 { "Community" }
                    Link { to: Route::Community {}, "Join Community" }
                }
                div { class: "quick-link",
                    h3 { "Find Doctors" }
                    Link { to: Route::Doctors {}, "Browse Doctors" }
                }
            }
            section { class: "current-programs",
                h3 { "Your Current Programs" }
                match state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                    },
                    ViewState::Ready(vm) => {
                        if vm.active_rooms.is_empty() {
                            rsx! {
                                p { "You haven't started a program yet." }
                            }
                        } else {
                            rsx! {
                                p { "{vm.modules_label}" }
                                ul {
                                    for card in vm.active_rooms {
                                        li { key: "{card.id}",
                                            span { "{card.icon} {card.title}" }
                                            progress { value: "{card.percent}", max: "100" }
                                            span { "{card.percent}%" }
                                            Link {
                                                to: Route::RoomDetail {
                                                    room_id: card.id.to_string(),
                                                },
                                                "Continue"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
