use actix_web::{get, HttpResponse};

const LANDING_CSS: &str = include_str!("../../static/landing.css");

#[get("/assets/landing.css")]
pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(LANDING_CSS)
}
