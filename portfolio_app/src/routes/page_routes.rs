use portfolio_render::page::RenderPage;

use axum::extract::Extension;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

pub struct PageRoutes<A>(std::marker::PhantomData<A>);

impl<A> PageRoutes<A>
where
    A: RenderPage + Sized + Clone + Send + Sync + 'static,
{
    pub fn router() -> Router {
        Router::new().route("/", get(Self::index))
    }

    async fn index(Extension(app): Extension<A>) -> Html<String> {
        Html(app.render_page().await)
    }
}
