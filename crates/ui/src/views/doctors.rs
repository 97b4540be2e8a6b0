use dioxus::prelude::*;
use mindcare_core::model::{DoctorQuery, Notice, SortKey, SpecialtyFilter};

use crate::context::AppContext;
use crate::vm::{DoctorCardVm, map_doctor_cards, results_label};

fn specialty_label(filter: &SpecialtyFilter) -> String {
    match filter {
        SpecialtyFilter::All => "All Specialties".to_string(),
        SpecialtyFilter::Only(name) => name.clone(),
    }
}

fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Rating => "Rating",
        SortKey::Experience => "Experience",
        SortKey::Name => "Name",
    }
}

#[component]
pub fn DoctorsView() -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let mut search = use_signal(String::new);
    let mut specialty = use_signal(SpecialtyFilter::default);
    let mut sort = use_signal(SortKey::default);
    let mut notice = use_signal(|| None::<Notice>);

    let query = DoctorQuery::new(search(), specialty(), sort());
    let cards = map_doctor_cards(&directory.search(&query));
    let summary = results_label(cards.len());
    let specialty_options: Vec<(String, String)> = directory
        .specialties()
        .iter()
        .map(|filter| (filter.to_string(), specialty_label(filter)))
        .collect();

    rsx! {
        div { class: "page doctors-page",
            header { class: "view-header",
                h2 { class: "view-title", "Find Mental Health Professionals" }
                p { class: "view-subtitle",
                    "Connect with licensed therapists and counselors who can help."
                }
            }
            section { class: "doctor-filters",
                input {
                    r#type: "search",
                    placeholder: "Search by name or specialization...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    value: "{specialty}",
                    onchange: move |evt| {
                        specialty.set(evt.value().parse::<SpecialtyFilter>().unwrap_or_default());
                    },
                    for (value, label) in specialty_options {
                        option { value: "{value}", "{label}" }
                    }
                }
                select {
                    value: "{sort}",
                    onchange: move |evt| match evt.value().parse::<SortKey>() {
                        Ok(key) => sort.set(key),
                        Err(err) => tracing::warn!(error = %err, "ignoring sort selection"),
                    },
                    for key in SortKey::ALL {
                        option { value: "{key}", "{sort_label(key)}" }
                    }
                }
            }
            p { class: "results-count", "{summary}" }
            section { class: "doctor-list",
                for card in cards {
                    DoctorCard { key: "{card.id}", card: card.clone(), notice }
                }
            }
            section { class: "emergency",
                h3 { "Emergency Support" }
                p { "Crisis Text Line: text HOME to 741741" }
                p { "National Suicide Prevention Lifeline: 988" }
                p { "Emergency Services: 911" }
            }
            if let Some(open) = notice() {
                div { class: "notice", role: "alertdialog",
                    p { "{open.text()}" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| notice.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}

#[component]
fn DoctorCard(card: DoctorCardVm, mut notice: Signal<Option<Notice>>) -> Element {
    let ctx = use_context::<AppContext>();
    let book_directory = ctx.directory();
    let contact_directory = ctx.directory();
    let id = card.id;

    rsx! {
        article { class: "doctor-card",
            div { class: "doctor-avatar", "{card.initials}" }
            div { class: "doctor-info",
                h3 { "{card.name}" }
                p { class: "doctor-specialization", "{card.specialization}" }
                p { class: "doctor-meta",
                    span { "★ {card.rating_label}" }
                    " · "
                    span { "{card.experience_label}" }
                }
                p { "{card.description}" }
            }
            div { class: "doctor-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| match book_directory.book_appointment(id) {
                        Ok(text) => notice.set(Some(text)),
                        Err(err) => tracing::warn!(error = %err, "booking failed"),
                    },
                    "Book Appointment"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| match contact_directory.contact(id) {
                        Ok(text) => notice.set(Some(text)),
                        Err(err) => tracing::warn!(error = %err, "contact failed"),
                    },
                    "Contact"
                }
            }
        }
    }
}
