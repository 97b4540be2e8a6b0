use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_chat_bubbles;

#[component]
pub fn ChatbotView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut chat = use_signal(|| ctx.chat_simulator());
    let mut draft = use_signal(String::new);

    let send = use_callback(move |text: String| {
        let pending = match chat.write().submit(&text) {
            Ok(pending) => pending,
            Err(err) => {
                tracing::debug!(error = %err, "chat input ignored");
                return;
            }
        };
        draft.set(String::new());
        let delay = chat.read().delay_handle();
        // Dropped with the view, so an unmounted chat never receives the reply.
        spawn(async move {
            delay.wait(pending.delay).await;
            chat.write().deliver(pending);
        });
    });

    use_drop(move || {
        if let Ok(mut chat) = chat.try_write() {
            chat.cancel_pending();
        }
    });

    let (bubbles, quick_replies, typing) = {
        let chat = chat.read();
        (
            map_chat_bubbles(chat.messages()),
            chat.quick_replies().to_vec(),
            chat.is_typing(),
        )
    };

    rsx! {
        div { class: "page chatbot-page",
            header { class: "view-header",
                h2 { class: "view-title", "AI Support Chat" }
                p { class: "view-subtitle",
                    "A supportive space to talk. For emergencies, contact local emergency services."
                }
            }
            div { class: "chat-transcript",
                for bubble in bubbles {
                    div {
                        key: "{bubble.id}",
                        class: if bubble.from_user { "bubble bubble--user" } else { "bubble bubble--assistant" },
                        p { "{bubble.text}" }
                        span { class: "bubble-time", "{bubble.time_label}" }
                    }
                }
                if typing {
                    p { class: "typing-indicator", "Typing..." }
                }
            }
            div { class: "quick-replies",
                for reply in quick_replies {
                    button {
                        class: "quick-reply",
                        r#type: "button",
                        disabled: typing,
                        onclick: {
                            let reply = reply.clone();
                            move |_| send.call(reply.clone())
                        },
                        "{reply}"
                    }
                }
            }
            div { class: "chat-input",
                input {
                    r#type: "text",
                    placeholder: "Type your message...",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            send.call(draft());
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: typing || draft().trim().is_empty(),
                    onclick: move |_| send.call(draft()),
                    "Send"
                }
            }
        }
    }
}
