use actix_web::web::{self, get};
use actix_web::{HttpResponse, Resource};
use common::config::AppConfig;

const PATH: &str = "/app-config";

pub fn configure_routes() -> Resource {
    web::resource(PATH).route(get().to(process))
}

async fn process(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}
