use poem::{
    EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Mounts every API plus the OpenAPI document and Swagger UI.
    pub fn routes(container: DependencyContainer, server_url: &str) -> Route {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.user_product_api,
                container.category_product_api,
            ),
            "Product Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url.to_string());
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &format!("http://{}", addr))
            .with(config.cors)
            .with(Tracing);

        tracing::info!("server running at http://{}", addr);
        tracing::info!("swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
