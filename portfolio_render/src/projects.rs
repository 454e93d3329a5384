use crate::client::FetchProjects;
use crate::render_notice;

use portfolio_core::model::Project;

use dioxus::prelude::*;
use entrait::entrait_export as entrait;
use std::borrow::Cow;

pub const PROJECTS_ERROR: &str = "Error loading projects. Please try again later.";
pub const NO_PROJECTS: &str = "No projects to display at the moment.";

/// Render the content of the projects grid, one card per project.
#[entrait(pub RenderProjects, mock_api=RenderProjectsMock)]
async fn render_projects(deps: &impl FetchProjects) -> String {
    match deps.fetch_projects().await {
        Ok(projects) if projects.is_empty() => render_notice(NO_PROJECTS),
        Ok(projects) => dioxus_ssr::render_element(rsx! {
            for project in projects.iter() {
                ProjectCard { key: "{project.id}", project: project.clone() }
            }
        }),
        Err(e) => {
            tracing::error!("Fetch error for projects: {}", e);
            render_notice(PROJECTS_ERROR)
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = &props.project;
    let title = project.title.as_deref().unwrap_or_default();
    let description = project.description.as_deref().unwrap_or_default();
    let image_url = project.image_url.as_deref().unwrap_or_default();

    rsx! {
        div {
            class: "project-card",
            img {
                src: "{image_url}",
                alt: "{title}",
                class: "project-image",
            }
            div {
                class: "project-info",
                h3 { "{title}" }
                p { "{description}" }
                div {
                    class: "project-links",
                    if let Some(github_link) = non_empty(&project.github_link) {
                        a {
                            href: "{github_link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            i { class: "fab fa-github" }
                        }
                    }
                    if let Some(deployed_link) = non_empty(&project.deployed_link) {
                        a {
                            href: "{deployed_href(deployed_link)}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            i { class: "fas fa-external-link-alt" }
                        }
                    }
                }
            }
        }
    }
}

fn non_empty(link: &Option<String>) -> Option<&str> {
    link.as_deref().filter(|link| !link.is_empty())
}

/// Deployed links are often stored without a scheme, e.g. `example.com`.
fn deployed_href(link: &str) -> Cow<'_, str> {
    let has_scheme = ["http://", "https://"].iter().any(|scheme| {
        link.get(..scheme.len())
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case(scheme))
    });

    if has_scheme {
        Cow::Borrowed(link)
    } else {
        Cow::Owned(format!("https://{link}"))
    }
}
