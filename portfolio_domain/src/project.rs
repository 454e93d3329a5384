use portfolio_core::error::*;
use portfolio_core::model::Project;
use portfolio_core::parse_doc_id;
use portfolio_db::project_db::{self, ProjectFields};

use entrait::entrait_export as entrait;

/// Request body for creating or updating a project.
///
/// Only these five fields are read, anything else in the body is ignored.
#[derive(serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub github_link: Option<String>,
    pub deployed_link: Option<String>,
}

impl ProjectInput {
    fn as_fields(&self) -> ProjectFields<'_> {
        ProjectFields {
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            image_url: self.image_url.as_deref(),
            github_link: self.github_link.as_deref(),
            deployed_link: self.deployed_link.as_deref(),
        }
    }
}

#[entrait(pub ProjectApi, mock_api=ProjectApiMock)]
pub mod api {
    use super::*;

    pub async fn list_projects(deps: &impl project_db::SelectProjects) -> PfResult<Vec<Project>> {
        deps.select_projects()
            .await
            .internal_context("Error fetching projects")
    }

    pub async fn create_project(
        deps: &impl project_db::InsertProject,
        input: ProjectInput,
    ) -> PfResult<Project> {
        let project = deps
            .insert_project(input.as_fields())
            .await
            .internal_context("Error adding project")?;
        tracing::info!(project_id = %project.id, "project created");
        Ok(project)
    }

    pub async fn update_project(
        deps: &impl project_db::UpdateProject,
        id: &str,
        input: ProjectInput,
    ) -> PfResult<Project> {
        let project_id = parse_doc_id(id).ok_or(PfError::ProjectNotFound)?;
        deps.update_project(project_id, input.as_fields())
            .await?
            .ok_or(PfError::ProjectNotFound)
    }

    pub async fn delete_project(
        deps: &impl project_db::DeleteProject,
        id: &str,
    ) -> PfResult<Project> {
        let project_id = parse_doc_id(id).ok_or(PfError::ProjectNotFound)?;
        let project = deps
            .delete_project(project_id)
            .await?
            .ok_or(PfError::ProjectNotFound)?;
        tracing::info!(project_id = %project.id, "project deleted");
        Ok(project)
    }
}
