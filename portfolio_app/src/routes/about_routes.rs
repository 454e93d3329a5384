use super::{JsonBody, MessageBody};

use portfolio_core::error::PfResult;
use portfolio_core::model::AboutProfile;
use portfolio_domain::about::{AboutApi, AboutInput};

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

#[derive(serde::Serialize, serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UpdatedAboutBody {
    message: String,
    updated_info: AboutProfile,
}

pub struct AboutRoutes<A>(std::marker::PhantomData<A>);

impl<A> AboutRoutes<A>
where
    A: AboutApi + Sized + Clone + Send + Sync + 'static,
{
    pub fn router() -> Router {
        Router::new()
            .route("/about", get(Self::fetch_about).post(Self::create_about))
            .route(
                "/about/:id",
                put(Self::update_about).delete(Self::delete_about),
            )
    }

    async fn fetch_about(Extension(app): Extension<A>) -> PfResult<Json<Option<AboutProfile>>> {
        Ok(Json(app.fetch_about().await?))
    }

    async fn create_about(
        Extension(app): Extension<A>,
        JsonBody(input): JsonBody<AboutInput>,
    ) -> PfResult<(StatusCode, Json<AboutProfile>)> {
        Ok((StatusCode::CREATED, Json(app.create_about(input).await?)))
    }

    async fn update_about(
        Extension(app): Extension<A>,
        Path(id): Path<String>,
        JsonBody(input): JsonBody<AboutInput>,
    ) -> PfResult<Json<UpdatedAboutBody>> {
        Ok(Json(UpdatedAboutBody {
            message: "About information updated successfully!".to_string(),
            updated_info: app.update_about(&id, input).await?,
        }))
    }

    async fn delete_about(
        Extension(app): Extension<A>,
        Path(id): Path<String>,
    ) -> PfResult<Json<MessageBody>> {
        app.delete_about(&id).await?;
        Ok(Json(MessageBody {
            message: "About information deleted successfully".to_string(),
        }))
    }
}
