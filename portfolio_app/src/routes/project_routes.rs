use super::JsonBody;

use portfolio_core::error::PfResult;
use portfolio_core::model::Project;
use portfolio_domain::project::{ProjectApi, ProjectInput};

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

#[derive(serde::Serialize, serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UpdatedProjectBody {
    message: String,
    updated_project: Project,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DeletedProjectBody {
    message: String,
    deleted_project: Project,
}

pub struct ProjectRoutes<A>(std::marker::PhantomData<A>);

impl<A> ProjectRoutes<A>
where
    A: ProjectApi + Sized + Clone + Send + Sync + 'static,
{
    pub fn router() -> Router {
        Router::new()
            .route(
                "/projects",
                get(Self::list_projects).post(Self::create_project),
            )
            .route(
                "/projects/:id",
                put(Self::update_project).delete(Self::delete_project),
            )
    }

    async fn list_projects(Extension(app): Extension<A>) -> PfResult<Json<Vec<Project>>> {
        Ok(Json(app.list_projects().await?))
    }

    async fn create_project(
        Extension(app): Extension<A>,
        JsonBody(input): JsonBody<ProjectInput>,
    ) -> PfResult<(StatusCode, Json<Project>)> {
        Ok((StatusCode::CREATED, Json(app.create_project(input).await?)))
    }

    async fn update_project(
        Extension(app): Extension<A>,
        Path(id): Path<String>,
        JsonBody(input): JsonBody<ProjectInput>,
    ) -> PfResult<Json<UpdatedProjectBody>> {
        Ok(Json(UpdatedProjectBody {
            message: "Project updated successfully!".to_string(),
            updated_project: app.update_project(&id, input).await?,
        }))
    }

    async fn delete_project(
        Extension(app): Extension<A>,
        Path(id): Path<String>,
    ) -> PfResult<Json<DeletedProjectBody>> {
        Ok(Json(DeletedProjectBody {
            message: "Project deleted successfully".to_string(),
            deleted_project: app.delete_project(&id).await?,
        }))
    }
}
