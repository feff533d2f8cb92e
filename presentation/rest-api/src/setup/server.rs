use poem::middleware::{CatchPanic, Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route, Server as PoemServer, get, listener::TcpListener};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::api::error::{handle_api_error, panic_response};
use crate::api::index::index;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, config.cors, &config.server.public_url());

        info!(
            endpoint = %config.ark.endpoint,
            model = %config.ark.model,
            "Remote model configured"
        );
        println!("Server running at http://{}", addr);
        println!("Swagger UI at http://{}/docs", addr);
        println!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Builds the full route tree: the page at `/`, the JSON API under `/api`
    /// and the OpenAPI docs.
    pub fn app(container: DependencyContainer, cors: Cors, public_url: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.prompts_api,
                container.analysis_api,
            ),
            "Receipt Check API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{}/api", public_url));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let api = api_service
            .with(CatchPanic::new().with_handler(panic_response))
            .catch_all_error(handle_api_error);

        Route::new()
            .at("/", get(index))
            .nest("/api", api)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }
}
