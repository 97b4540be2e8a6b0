use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    ChatbotView, CommunityView, DashboardView, DoctorsView, LoginView, RoomDetailView,
    RoomsView, SignupView, UserDashboardView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LoginView)] Login {},
    #[route("/signup", SignupView)] Signup {},
    #[layout(Layout)]
        #[route("/home", DashboardView)] Home {},
        #[route("/rooms", RoomsView)] Rooms {},
        #[route("/rooms/:room_id", RoomDetailView)] RoomDetail { room_id: String },
        #[route("/chatbot", ChatbotView)] Chatbot {},
        #[route("/community", CommunityView)] Community {},
        #[route("/doctors", DoctorsView)] Doctors {},
        #[route("/userdashboard", UserDashboardView)] UserDashboard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            h1 { "MindCare" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Rooms {}, "Rooms" } }
                li { Link { to: Route::Chatbot {}, "Chatbot" } }
                li { Link { to: Route::Community {}, "Community" } }
                li { Link { to: Route::Doctors {}, "Doctors" } }
                li { Link { to: Route::UserDashboard {}, "My Progress" } }
                li { Link { to: Route::Login {}, "Log out" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_parse_to_routes() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Login {});
        assert_eq!("/home".parse::<Route>().unwrap(), Route::Home {});
        assert_eq!(
            "/rooms/anxiety".parse::<Route>().unwrap(),
            Route::RoomDetail {
                room_id: "anxiety".into()
            }
        );
        assert_eq!(
            "/userdashboard".parse::<Route>().unwrap(),
            Route::UserDashboard {}
        );
    }

    #[test]
    fn routes_display_their_paths() {
        let cases = [
            (Route::Login {}, "/"),
            (Route::Signup {}, "/signup"),
            (Route::Home {}, "/home"),
            (Route::Rooms {}, "/rooms"),
            (
                Route::RoomDetail {
                    room_id: "stress".into(),
                },
                "/rooms/stress",
            ),
            (Route::Chatbot {}, "/chatbot"),
            (Route::Community {}, "/community"),
            (Route::Doctors {}, "/doctors"),
            (Route::UserDashboard {}, "/userdashboard"),
        ];
        for (route, path) in cases {
            assert_eq!(route.to_string(), path);
        }
    }

    #[test]
    fn unknown_path_does_not_parse() {
        assert!("/settings".parse::<Route>().is_err());
    }
}
