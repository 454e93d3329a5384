use crate::client::FetchAbout;
use crate::render_notice;

use portfolio_core::model::AboutProfile;

use dioxus::prelude::*;
use entrait::entrait_export as entrait;

pub const ABOUT_ERROR: &str = "Error loading about information. Please try again later.";

/// Render the content of the about section.
///
/// A missing profile is treated like a failed fetch.
#[entrait(pub RenderAbout, mock_api=RenderAboutMock)]
async fn render_about(deps: &impl FetchAbout) -> String {
    match deps.fetch_about().await {
        Ok(Some(about)) => dioxus_ssr::render_element(rsx! {
            AboutSection { about }
        }),
        Ok(None) => {
            tracing::error!("Fetch error for about info: no about document");
            render_notice(ABOUT_ERROR)
        }
        Err(e) => {
            tracing::error!("Fetch error for about info: {}", e);
            render_notice(ABOUT_ERROR)
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AboutSectionProps {
    pub about: AboutProfile,
}

#[component]
pub fn AboutSection(props: AboutSectionProps) -> Element {
    let about = &props.about;
    let name = about.name.as_deref().unwrap_or_default();
    let profile_pic_url = about.profile_pic_url.as_deref().unwrap_or_default();

    rsx! {
        img {
            src: "{profile_pic_url}",
            alt: "Profile Picture",
            class: "profile-pic",
        }
        div {
            class: "about-section-info",
            h1 { "{name}" }
            ul {
                class: "education-list",
                for item in about.education.iter() {
                    li { "{item}" }
                }
            }
        }
        div {
            class: "skills-icons",
            for skill in about.skills.iter() {
                i {
                    class: "{skill.icon_class} skill-icon",
                    title: "{skill.name}",
                }
            }
        }
    }
}
