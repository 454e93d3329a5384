use portfolio_core::model::{AboutProfile, Project};

use entrait::entrait_export as entrait;
use serde::de::DeserializeOwned;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response status: {0}")]
    Status(reqwest::StatusCode),
}

/// HTTP client for the portfolio API.
///
/// No timeout is configured and failed requests are not retried.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` includes the `/api` prefix, e.g. `http://127.0.0.1:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.json().await?)
    }
}

#[entrait(pub GetApiClient, mock_api=GetApiClientMock)]
fn get_api_client(client: &ApiClient) -> &ApiClient {
    client
}

#[entrait(pub FetchAbout, mock_api=FetchAboutMock)]
async fn fetch_about(deps: &impl GetApiClient) -> Result<Option<AboutProfile>, FetchError> {
    deps.get_api_client().get_json("/about").await
}

#[entrait(pub FetchProjects, mock_api=FetchProjectsMock)]
async fn fetch_projects(deps: &impl GetApiClient) -> Result<Vec<Project>, FetchError> {
    deps.get_api_client().get_json("/projects").await
}

/// A genuine transport error: a request to a port nothing listens on.
#[cfg(test)]
pub(crate) async fn refused_connection_error() -> FetchError {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    reqwest::get(format!("http://{addr}/api/about"))
        .await
        .unwrap_err()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_matches::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use entrait::Impl;

    async fn serve_api(api: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, Router::new().nest("/api", api))
                .await
                .unwrap()
        });
        format!("http://{addr}/api/")
    }

    fn test_about() -> AboutProfile {
        AboutProfile {
            id: uuid::Uuid::new_v4(),
            name: Some("Llama".to_string()),
            education: vec!["B.Sc.".to_string()],
            profile_pic_url: Some("images/pfp.jpeg".to_string()),
            skills: vec![],
        }
    }

    #[tokio::test]
    async fn should_fetch_about_profile() {
        let about = test_about();
        let served = about.clone();
        let base_url =
            serve_api(Router::new().route("/about", get(move || async move { Json(served) })))
                .await;

        let client = Impl::new(ApiClient::new(base_url));

        assert_eq!(client.fetch_about().await.unwrap(), Some(about));
    }

    #[tokio::test]
    async fn null_about_should_fetch_as_none() {
        let base_url = serve_api(Router::new().route(
            "/about",
            get(|| async { Json(Option::<AboutProfile>::None) }),
        ))
        .await;

        let client = Impl::new(ApiClient::new(base_url));

        assert_eq!(client.fetch_about().await.unwrap(), None);
    }

    #[tokio::test]
    async fn error_status_should_fail_fetch() {
        let base_url = serve_api(Router::new().route(
            "/projects",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;

        let client = Impl::new(ApiClient::new(base_url));

        assert_matches!(
            client.fetch_projects().await,
            Err(FetchError::Status(status)) if status == StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn unreachable_api_should_be_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Impl::new(ApiClient::new(format!("http://{addr}/api")));

        assert_matches!(client.fetch_projects().await, Err(FetchError::Network(_)));
    }
}
