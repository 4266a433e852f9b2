use async_graphql::http::GraphiQLSource;
use async_graphql_poem::GraphQL;
use poem::{
    EndpointExt, IntoResponse, Route, Server as PoemServer, get, handler,
    listener::TcpListener, middleware::Tracing, web::Html,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const GRAPHQL_PATH: &str = "/graphql";

#[handler]
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            container.health_api,
            "Product Catalog GraphQL API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}/api", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .at(
                GRAPHQL_PATH,
                get(graphiql).post(GraphQL::new(container.schema)),
            )
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server is running on {}", config.server.graphql_url(GRAPHQL_PATH));
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
