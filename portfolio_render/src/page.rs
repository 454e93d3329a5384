use crate::about::RenderAbout;
use crate::projects::RenderProjects;

use dioxus::prelude::*;
use entrait::entrait_export as entrait;

/// Render the complete portfolio page.
///
/// Both sections are fetched concurrently. A slow or failed section does not
/// hold back or cancel the other.
#[entrait(pub RenderPage, mock_api=RenderPageMock)]
async fn render_page(deps: &(impl RenderAbout + RenderProjects)) -> String {
    let (about_html, projects_html) = tokio::join!(deps.render_about(), deps.render_projects());

    let document = dioxus_ssr::render_element(rsx! {
        PortfolioPage { about_html, projects_html }
    });
    format!("<!DOCTYPE html>{document}")
}

/// Section markup is already rendered and escaped by the section renderers.
#[derive(Props, Clone, PartialEq)]
pub struct PortfolioPageProps {
    pub about_html: String,
    pub projects_html: String,
}

#[component]
pub fn PortfolioPage(props: PortfolioPageProps) -> Element {
    rsx! {
        html {
            lang: "en",
            head {
                meta { charset: "utf-8" }
                meta {
                    name: "viewport",
                    content: "width=device-width, initial-scale=1",
                }
                title { "Portfolio" }
                link {
                    rel: "stylesheet",
                    href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css",
                }
            }
            body {
                section {
                    id: "about-section",
                    class: "about-section",
                    dangerous_inner_html: "{props.about_html}",
                }
                section {
                    id: "projects",
                    class: "projects",
                    h2 { "Projects" }
                    div {
                        id: "projects-grid",
                        class: "projects-grid",
                        dangerous_inner_html: "{props.projects_html}",
                    }
                }
            }
        }
    }
}
