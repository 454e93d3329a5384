use crate::{DbResultExt, GetPgPool};

use portfolio_core::error::*;
use portfolio_core::model::Project;

use entrait::entrait_export as entrait;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ProjectRow {
    project_id: Uuid,
    title: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    github_link: Option<String>,
    deployed_link: Option<String>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.project_id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            github_link: row.github_link,
            deployed_link: row.deployed_link,
        }
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct ProjectFields<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub github_link: Option<&'a str>,
    pub deployed_link: Option<&'a str>,
}

#[entrait(pub SelectProjects, mock_api=SelectProjectsMock)]
async fn select_projects(deps: &impl GetPgPool) -> PfResult<Vec<Project>> {
    let rows = sqlx::query_as::<_, ProjectRow>(
        // language=PostgreSQL
        r#"
            SELECT project_id, title, description, image_url, github_link, deployed_link
            FROM app.project
            ORDER BY created_at, project_id
        "#,
    )
    .fetch_all(deps.get_pg_pool())
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

#[entrait(pub InsertProject, mock_api=InsertProjectMock)]
async fn insert_project(deps: &impl GetPgPool, fields: ProjectFields<'_>) -> PfResult<Project> {
    let row = sqlx::query_as::<_, ProjectRow>(
        // language=PostgreSQL
        r#"
            INSERT INTO app.project (title, description, image_url, github_link, deployed_link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING project_id, title, description, image_url, github_link, deployed_link
        "#,
    )
    .bind(fields.title)
    .bind(fields.description)
    .bind(fields.image_url)
    .bind(fields.github_link)
    .bind(fields.deployed_link)
    .fetch_one(deps.get_pg_pool())
    .await
    .on_data_exception("Error adding project")?;

    tracing::debug!(project_id = %row.project_id, "inserted project");

    Ok(row.into())
}

#[entrait(pub UpdateProject, mock_api=UpdateProjectMock)]
async fn update_project(
    deps: &impl GetPgPool,
    project_id: Uuid,
    fields: ProjectFields<'_>,
) -> PfResult<Option<Project>> {
    let row = sqlx::query_as::<_, ProjectRow>(
        // language=PostgreSQL
        r#"
            UPDATE app.project
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                github_link = COALESCE($5, github_link),
                deployed_link = COALESCE($6, deployed_link)
            WHERE project_id = $1
            RETURNING project_id, title, description, image_url, github_link, deployed_link
        "#,
    )
    .bind(project_id)
    .bind(fields.title)
    .bind(fields.description)
    .bind(fields.image_url)
    .bind(fields.github_link)
    .bind(fields.deployed_link)
    .fetch_optional(deps.get_pg_pool())
    .await?;

    Ok(row.map(Into::into))
}

#[entrait(pub DeleteProject, mock_api=DeleteProjectMock)]
async fn delete_project(deps: &impl GetPgPool, project_id: Uuid) -> PfResult<Option<Project>> {
    let row = sqlx::query_as::<_, ProjectRow>(
        // language=PostgreSQL
        r#"
            DELETE FROM app.project
            WHERE project_id = $1
            RETURNING project_id, title, description, image_url, github_link, deployed_link
        "#,
    )
    .bind(project_id)
    .fetch_optional(deps.get_pg_pool())
    .await?;

    Ok(row.map(Into::into))
}
