use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Sends `www.` hosts to the apex domain with a permanent redirect.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if let Some(host) = req.headers().get(header::HOST)
        && let Ok(host) = host.to_str()
        && let Some(apex) = host.strip_prefix("www.")
        && let Some(path_query) = req.uri().path_and_query()
    {
        let location = format!("https://{apex}{}", path_query.as_str());
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
            .map_err(|err| {
                tracing::error!(?err, "Failed to build www redirect");
                StatusCode::INTERNAL_SERVER_ERROR
            });
    }
    Ok(next.run(req).await)
}
