use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::timing::round_ms,
        dto::{request::TopicQuery, response::QuestionsResponse},
    },
};

#[get("/questions")]
pub async fn get_questions(
    state: web::Data<AppState>,
    query: web::Query<TopicQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let round = state.round_service.generate_round(query.topic()).await?;
    if round.is_empty() {
        return Err(AppError::ServiceUnavailable(format!(
            "no questions generated for topic '{}'",
            round.topic
        )));
    }

    Ok(HttpResponse::Ok().json(QuestionsResponse::from(round.items)))
}

#[get("/debug/search")]
pub async fn debug_search(
    state: web::Data<AppState>,
    query: web::Query<TopicQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let topic = query.topic_or_default();
    let (gathered, timing) = state.round_service.gather_context(topic).await?;
    log::info!(
        "debug.search topic='{}' found={} {} total_ms={}",
        topic,
        gathered.is_some(),
        timing,
        round_ms(timing.total_ms())
    );

    match gathered {
        Some(result) => Ok(HttpResponse::Ok().json(result)),
        None => Err(AppError::NotFound(format!(
            "no usable web context for topic '{}'",
            topic
        ))),
    }
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
