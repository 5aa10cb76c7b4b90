// pdfqa/src/main.rs
use pdfqa::api::start_api_server;
use pdfqa::config::ApiConfig;
use pdfqa::qa;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ApiConfig::from_env();

    println!("📦 Initializing QA provider...");
    let provider = qa::create_provider(&config).await;

    println!("🚀 Starting API server on http://{} ...", config.bind_addr());
    start_api_server(&config, provider).await
}
