//! HTML rendering of the portfolio page from the public API.
//!
//! Sections are `rsx!` components rendered to strings with `dioxus-ssr`.
//! Each section is fetched and rendered independently. A failed section is
//! replaced by a fixed message and never blocks the other one.

pub mod about;
pub mod client;
pub mod page;
pub mod projects;

pub use client::{ApiClient, FetchError, GetApiClient};

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct NoticeProps {
    message: &'static str,
}

/// A single paragraph shown instead of a section's content.
#[component]
fn Notice(props: NoticeProps) -> Element {
    rsx! {
        p { "{props.message}" }
    }
}

fn render_notice(message: &'static str) -> String {
    dioxus_ssr::render_element(rsx! {
        Notice { message }
    })
}
