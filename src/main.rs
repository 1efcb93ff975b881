mod config;
mod routes;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let host = config::HostConfig::from_env().expect("invalid host configuration");
    let conf = get_configuration(None).expect("leptos configuration");
    let app = routes::app(conf.leptos_options);

    let addr = host.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "luaspets listening");
    axum::serve(listener, app).await.expect("server failed");
}
