use dioxus::prelude::*;
use services::CommunityFeed;

use crate::context::AppContext;
use crate::vm::{PostVm, map_posts};

#[component]
pub fn CommunityView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut feed = use_signal(|| ctx.community_feed());
    let mut draft = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let posts = {
        let feed = feed.read();
        map_posts(feed.posts(), &feed.clock())
    };

    rsx! {
        div { class: "page community-page",
            header { class: "view-header",
                h2 { class: "view-title", "Community Support" }
                p { class: "view-subtitle", "Share your journey and support others." }
            }
            section { class: "new-post",
                textarea {
                    placeholder: "Share your thoughts, progress, or ask for support...",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let result = feed.write().create_post(&draft()).map(|_| ());
                        match result {
                            Ok(()) => {
                                draft.set(String::new());
                                error.set(None);
                            }
                            Err(err) => error.set(Some(err.to_string())),
                        }
                    },
                    "Share Post"
                }
            }
            section { class: "feed",
                for post in posts {
                    PostCard { key: "{post.id}", post: post.clone(), feed }
                }
            }
        }
    }
}

#[component]
fn PostCard(post: PostVm, mut feed: Signal<CommunityFeed>) -> Element {
    let id = post.id;

    rsx! {
        article { class: "post-card",
            header { class: "post-header",
                span { class: "post-avatar", "{post.avatar}" }
                span { class: "post-username", "{post.username}" }
                span { class: "post-time", "{post.posted_label}" }
            }
            p { class: "post-message", "{post.message}" }
            div { class: "post-actions",
                button {
                    class: if post.liked { "like like--active" } else { "like" },
                    r#type: "button",
                    onclick: move |_| {
                        let result = feed.write().toggle_like(id).map(|_| ());
                        if let Err(err) = result {
                            tracing::warn!(post = %id, error = %err, "like toggle failed");
                        }
                    },
                    "♥ {post.likes_label}"
                }
                button {
                    class: "comments-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let result = feed.write().toggle_comments(id).map(|_| ());
                        if let Err(err) = result {
                            tracing::warn!(post = %id, error = %err, "comment toggle failed");
                        }
                    },
                    "{post.comments_label}"
                }
            }
            if post.comments_visible {
                ul { class: "comments",
                    for comment in post.comments.iter() {
                        li {
                            strong { "{comment.username}" }
                            " {comment.message}"
                        }
                    }
                }
            }
        }
    }
}
