pub mod quiz_handler;

pub use quiz_handler::{debug_search, get_questions, health_check};

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_questions)
        .service(debug_search)
        .service(health_check);
}
