use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use wayfinder_config::{AnyOrArray, CorsConfig};

/// Build a Tower CORS layer from configuration
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = match &config.origins {
        AnyOrArray::Any => AllowOrigin::any(),
        AnyOrArray::List(origins) => AllowOrigin::list(parse_all::<HeaderValue>(origins)),
    };

    let methods = match &config.methods {
        AnyOrArray::Any => AllowMethods::any(),
        AnyOrArray::List(methods) => AllowMethods::list(parse_all::<Method>(methods)),
    };

    let headers = match &config.headers {
        AnyOrArray::Any => AllowHeaders::any(),
        AnyOrArray::List(headers) => AllowHeaders::list(parse_all::<HeaderName>(headers)),
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(config.credentials);

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}

/// Parse configured values, skipping (and logging) the ones that are invalid
fn parse_all<T: std::str::FromStr>(values: &[String]) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| {
            let parsed = value.parse().ok();
            if parsed.is_none() {
                tracing::warn!("ignoring invalid CORS value '{value}'");
            }
            parsed
        })
        .collect()
}
