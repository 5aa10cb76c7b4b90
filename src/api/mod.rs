use crate::chunker;
use crate::config::ApiConfig;
use crate::errors::ServiceError;
use crate::pdf;
use crate::qa::QaProvider;
use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::{web, App, Error, HttpResponse, HttpServer};
use chrono::Utc;
use futures_util::stream::StreamExt;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Generate a short request ID for correlation
fn generate_request_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

async fn root_handler() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("✅ PDF QA backend is running (Actix Web)\n\nTry /health or /ready\n"))
}

pub async fn health_check(provider: web::Data<dyn QaProvider>) -> Result<HttpResponse, Error> {
    let request_id = generate_request_id();
    match provider.health_check().await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "status": "healthy",
            "model": provider.model_name(),
            "request_id": request_id
        }))),
        Err(e) => {
            error!("[{}] Health check failed: {}", request_id, e);
            Ok(HttpResponse::ServiceUnavailable().json(json!({
                "status": "unhealthy",
                "error": e.to_string(),
                "request_id": request_id
            })))
        }
    }
}

async fn ready_check() -> Result<HttpResponse, Error> {
    let request_id = generate_request_id();
    Ok(HttpResponse::Ok().json(json!({
        "status": "ready",
        "timestamp": Utc::now().to_rfc3339(),
        "request_id": request_id
    })))
}

/// POST /upload - accept a PDF, extract its text and return fixed-size
/// chunks. Nothing is written to disk; the bytes live only for the
/// duration of the request.
pub async fn upload_pdf(
    mut payload: Multipart,
    config: web::Data<ApiConfig>,
) -> Result<HttpResponse, ServiceError> {
    let request_id = generate_request_id();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let filename = match field
            .content_disposition()
            .as_ref()
            .and_then(|cd| cd.get_filename())
        {
            Some(name) => name.to_string(),
            // Skip non-file fields
            None => continue,
        };

        let is_pdf = field
            .content_type()
            .map(|mime| mime.essence_str() == "application/pdf")
            .unwrap_or(false);
        if !is_pdf {
            warn!("[{}] Rejected upload '{}': not a PDF", request_id, filename);
            return Err(ServiceError::InvalidContentType);
        }

        let mut bytes = web::BytesMut::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        let text = pdf::extract_text(&bytes)?;
        let chunks = chunker::chunk_text(&text, config.chunk_size);
        info!(
            "[{}] Uploaded '{}': {} bytes, {} chunks",
            request_id,
            filename,
            bytes.len(),
            chunks.len()
        );

        return Ok(HttpResponse::Ok().json(json!({
            "filename": filename,
            "chunks": chunks,
            "chunk_count": chunks.len(),
            "request_id": request_id
        })));
    }

    Err(ServiceError::MissingFile)
}

#[derive(serde::Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub chunks: Vec<String>,
}

/// POST /chat - answer a question against the provided chunks. The
/// context is the naive concatenation of every chunk sent; no
/// relevance ranking happens here.
pub async fn chat(
    req: web::Json<ChatRequest>,
    provider: web::Data<dyn QaProvider>,
) -> Result<HttpResponse, ServiceError> {
    let request_id = generate_request_id();
    let context = req.chunks.join(" ");

    info!(
        "[{}] Chat: {} chunks, context {} chars",
        request_id,
        req.chunks.len(),
        context.len()
    );
    let result = provider.answer(&req.question, &context).await?;

    Ok(HttpResponse::Ok().json(json!({
        "question": req.question,
        "answer": result.answer,
        "score": result.score,
        "model": provider.model_name(),
        "request_id": request_id
    })))
}

pub fn start_api_server(
    config: &ApiConfig,
    provider: Arc<dyn QaProvider>,
) -> impl std::future::Future<Output = std::io::Result<()>> {
    // Snapshot needed config values to satisfy 'static factory closure
    let bind_addr = config.bind_addr();
    let config = config.clone();

    let http_server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::AUTHORIZATION,
            ])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::from(Arc::clone(&provider)))
            .wrap(cors)
            .route("/", web::get().to(root_handler))
            .route("/health", web::get().to(health_check))
            .route("/ready", web::get().to(ready_check))
            .route("/upload", web::post().to(upload_pdf))
            .route("/chat", web::post().to(chat))
    });
    http_server
        .bind(bind_addr.clone())
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", bind_addr, e))
        .run()
}
