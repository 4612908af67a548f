//! Serves the compiled frontend embedded in the binary.

use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::{Dir, File};
use log::debug;
use mime_guess::from_path;

const INDEX: &str = "index.html";

/// Bundle the host serves from.
#[derive(Clone, Copy)]
pub struct Bundle(pub &'static Dir<'static>);

impl Bundle {
    /// The file at `path`, or `index.html` for unknown paths.
    fn resolve(&self, path: &str) -> Option<&'static File<'static>> {
        let bundle: &'static Dir<'static> = self.0;
        let path = path.trim_start_matches('/');
        let path = if path.is_empty() { INDEX } else { path };

        bundle.get_file(path).or_else(|| {
            debug!("{path} not in bundle, falling back to {INDEX}");
            bundle.get_file(INDEX)
        })
    }
}

pub async fn serve_embedded(req: HttpRequest, bundle: web::Data<Bundle>) -> HttpResponse {
    match bundle.resolve(req.path()) {
        Some(file) => {
            let mime = from_path(file.path()).first_or_octet_stream();
            HttpResponse::Ok().content_type(mime.as_ref()).body(file.contents())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}
