use crate::{
    api::{attendance, employee},
    config::Config,
    error::ErrorBody,
};
use actix_cors::Cors;
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, error::InternalError, web};

/// CORS policy for the browser frontend. Explicit origins may send
/// credentials; `*` allows any origin without them.
pub fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors.supports_credentials(), |cors, origin| {
            cors.allowed_origin(origin)
        })
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = (60_000 / requests_per_min as u64).max(1);
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            // period and burst are both clamped to >= 1 above
            .expect("non-zero governor period and burst");
        Governor::new(&cfg)
    }

    // Malformed bodies get the same `{detail}` shape as domain errors
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorBody {
            detail: err.to_string(),
        });
        InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(build_limiter(config.rate_api_per_min))
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::add_employee)),
                    )
                    // /employees/{emp_id}
                    .service(
                        web::resource("/{emp_id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(web::resource("").route(web::post().to(attendance::mark_attendance)))
                    // /attendance/{emp_id}
                    .service(
                        web::resource("/{emp_id}").route(web::get().to(attendance::get_attendance)),
                    )
                    // /attendance/{emp_id}/summary
                    .service(
                        web::resource("/{emp_id}/summary")
                            .route(web::get().to(attendance::attendance_summary)),
                    ),
            ),
    );
}
