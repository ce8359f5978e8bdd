use axum::http::StatusCode;
use axum::response::Response;
use core::fmt::Write as _;
use tracing::error;

/// Site routes as `(path, changefreq, priority)`.
const PAGES: [(&str, &str, &str); 2] = [
    ("/", "weekly", "0.8"),
    ("/custom-furniture", "weekly", "1.0"),
];

fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

/// Renders the sitemap XML for the storefront pages under `base_url`.
pub fn render(base_url: &str) -> Result<String, core::fmt::Error> {
    let mut sitemap = String::new();
    sitemap.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    sitemap.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for (path, freq, priority) in PAGES {
        sitemap.push_str("<url>\n");
        writeln!(sitemap, "<loc>{base_url}{path}</loc>")?;
        writeln!(sitemap, "<changefreq>{freq}</changefreq>")?;
        writeln!(sitemap, "<priority>{priority}</priority>")?;
        sitemap.push_str("</url>\n");
    }

    sitemap.push_str("</urlset>");
    Ok(sitemap)
}

pub async fn sitemap_handler(base_url: String) -> Response<String> {
    match render(&base_url) {
        Ok(sitemap) => build_response(sitemap, "application/xml", StatusCode::OK),
        Err(err) => {
            error!(?err, "Failed to write sitemap");
            build_response(
                "Failed to build sitemap".to_string(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}
