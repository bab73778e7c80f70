use crate::{
    api::{attendance, employee, files, navigation},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;
use tracing::warn;

// Helper to build per-route limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);

    let limiter = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish();

    match limiter {
        Some(cfg) => Governor::new(&cfg),
        None => {
            warn!(requests_per_min, "Invalid rate limit, using governor defaults");
            Governor::new(&GovernorConfig::default())
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .wrap(login_limiter.clone())
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/logout")
                    .wrap(login_limiter)
                    .route(web::post().to(handlers::logout)),
            ),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(protected_limiter) // rate limiting
            .service(web::resource("/navigation").route(web::get().to(navigation::navigation)))
            .service(
                web::scope("/attendance")
                    // /attendance?date=&search=
                    .service(web::resource("").route(web::get().to(attendance::list_attendance)))
                    .service(
                        web::resource("/today").route(web::get().to(attendance::today_attendance)),
                    )
                    .service(
                        web::resource("/records").route(web::get().to(attendance::all_attendance)),
                    )
                    .service(
                        web::resource("/summary")
                            .route(web::get().to(attendance::attendance_summary)),
                    )
                    .service(
                        web::resource("/mark").route(web::post().to(attendance::mark_attendance)),
                    ),
            )
            .service(
                web::scope("/employees")
                    // /employees
                    .service(web::resource("").route(web::get().to(employee::list_employees)))
                    // /employees/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::get().to(employee::get_employee)),
                    )
                    // /employees/{employee_id}/files
                    .service(
                        web::resource("/{employee_id}/files")
                            .route(web::get().to(employee::list_employee_files)),
                    )
                    // /employees/{employee_id}/files/{file_id}
                    .service(
                        web::resource("/{employee_id}/files/{file_id}")
                            .route(web::delete().to(employee::delete_employee_file)),
                    ),
            )
            .service(
                web::scope("/files")
                    .service(web::resource("").route(web::get().to(files::list_folder)))
                    .service(web::resource("/search").route(web::get().to(files::search_files))),
            ),
    );
}

// LOGIN (any non-empty username/password)
//  └─ access_token, role = admin

// API REQUEST
//  └─ Authorization: Bearer access_token
