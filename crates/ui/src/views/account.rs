use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use mindcare_core::model::SignupForm;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        div { class: "page login-page",
            h2 { "Welcome back" }
            label { "Email"
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            label { "Password"
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    ctx.accounts().log_in(&email());
                    navigator.push(Route::Home {});
                },
                "Login"
            }
            p { "Don't have an account? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}

#[component]
pub fn SignupView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut form = use_signal(SignupForm::default);
    let mut notice = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);

    rsx! {
        div { class: "page signup-page",
            h2 { "Create an account" }
            label { "Name"
                input {
                    r#type: "text",
                    value: "{form.read().name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
            }
            label { "Email"
                input {
                    r#type: "email",
                    value: "{form.read().email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
            }
            label { "Password"
                input {
                    r#type: "password",
                    value: "{form.read().password}",
                    oninput: move |evt| form.write().password = evt.value(),
                }
            }
            label { "Confirm password"
                input {
                    r#type: "password",
                    value: "{form.read().confirm_password}",
                    oninput: move |evt| form.write().confirm_password = evt.value(),
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    match ctx.accounts().sign_up(&form.read()) {
                        Ok(accepted) => {
                            error.set(None);
                            notice.set(Some(accepted.text().to_string()));
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                },
                "Sign up"
            }
            p { "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
            if let Some(message) = notice() {
                div { class: "notice", role: "alertdialog",
                    p { "{message}" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| {
                            notice.set(None);
                            navigator.push(Route::Login {});
                        },
                        "OK"
                    }
                }
            }
        }
    }
}
