use actix_web::HttpResponse;

pub async fn health_check() -> HttpResponse {
    tracing::info!("Service is healthy!");
    HttpResponse::Ok().finish()
}
