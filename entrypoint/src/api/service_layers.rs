use axum::http::{HeaderValue, Method, header::CONTENT_TYPE, header::InvalidHeaderValue};
use tower::{
    ServiceBuilder,
    layer::util::{Identity, Stack},
};
use tower_http::cors::CorsLayer;

pub(crate) fn build_service_layers(
    allowed_origin: &str,
) -> Result<ServiceBuilder<Stack<CorsLayer, Identity>>, InvalidHeaderValue> {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(allowed_origin.parse::<HeaderValue>()?);

    Ok(ServiceBuilder::new().layer(cors_layer))
}
