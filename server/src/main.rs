mod gemini;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let gemini = gemini::GeminiClient::from_env().expect("generation client init failed");
    tracing::info!(upstream = gemini.generate_url(), "generation upstream configured");

    let state = state::AppState::new(gemini);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "relaychat listening");
    axum::serve(listener, app).await.expect("server failed");
}
