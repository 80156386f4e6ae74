pub mod department;
pub mod employee;
pub mod job_history;

use actix_web::HttpResponse;
use serde_json::json;

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "Hello": "World" }))
}
