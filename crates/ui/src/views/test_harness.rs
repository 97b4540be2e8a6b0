use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use mindcare_core::time::fixed_clock;
use services::AppServices;

use crate::context::AppContext;
use crate::views::{
    ChatbotView, CommunityView, DoctorsView, LoginView, RoomDetailView, RoomsView,
    UserDashboardView,
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Rooms,
    RoomDetail(&'static str),
    Chatbot,
    Community,
    Doctors,
    UserDashboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    services: AppServices,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let services = props.services.clone();
    use_context_provider(|| AppContext::new(services));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Rooms => rsx! { RoomsView {} },
        ViewKind::RoomDetail(room_id) => rsx! { RoomDetailView { room_id: room_id.to_string() } },
        ViewKind::Chatbot => rsx! { ChatbotView {} },
        ViewKind::Community => rsx! { CommunityView {} },
        ViewKind::Doctors => rsx! { DoctorsView {} },
        ViewKind::UserDashboard => rsx! { UserDashboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = AppServices::in_memory(fixed_clock()).expect("services");
    setup_view_harness_with_services(view, services)
}

pub fn setup_view_harness_with_services(view: ViewKind, services: AppServices) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            services: services.clone(),
            view,
        },
    );
    ViewHarness { dom, services }
}
