use crate::{api::employee, config::Config, error::ApiError};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer-IP limiter for the API scope.
pub fn build_rate_limit(requests_per_min: u32) -> anyhow::Result<RateLimit> {
    let burst = requests_per_min.max(1);
    let per_ms = 60_000 / burst as u64;

    GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(burst)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limit: {requests_per_min} requests/min"))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, rate_limit: &RateLimit) {
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Governor::new(rate_limit))
            .configure(employee_routes),
    );
}

/// `/employees` resource tree, mounted under the API prefix.
pub fn employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .app_data(json_config())
            .app_data(path_config())
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{id}
            .service(
                web::resource("/{id}")
                    .route(web::get().to(employee::get_employee))
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(format!("Invalid request body: {err}")).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(format!("Invalid path: {err}")).into())
}
