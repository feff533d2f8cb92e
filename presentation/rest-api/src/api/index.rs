use poem::handler;
use poem::web::Html;

const INDEX_PAGE: &str = include_str!("../../static/index.html");

#[handler]
pub fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
