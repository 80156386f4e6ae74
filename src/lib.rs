pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;

use actix_web::web;

use crate::errors::AppError;

// An id that does not parse cannot name a row, so it gets the entity's not-found body.
fn id_path_config(message: &'static str) -> web::PathConfig {
    web::PathConfig::default().error_handler(move |err, _req| {
        log::debug!("rejected path id: {}", err);
        AppError::NotFound(message.to_string()).into()
    })
}

/// Registers every endpoint. Callers provide the `SqlitePool` as app data.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::resource("/")
            .route(web::get().to(handlers::root)),
    )
    .service(
        web::resource("/departments")
            .route(web::get().to(handlers::department::get_departments))
            .route(web::post().to(handlers::department::create_department)),
    )
    .service(
        web::resource("/departments/{department_id}")
            .app_data(id_path_config("Department not found"))
            .route(web::get().to(handlers::department::get_department))
            .route(web::put().to(handlers::department::update_department))
            .route(web::delete().to(handlers::department::delete_department)),
    )
    .service(
        web::resource("/employees")
            .route(web::get().to(handlers::employee::get_employees))
            .route(web::post().to(handlers::employee::create_employee)),
    )
    .service(
        web::resource("/employees/{employee_id}")
            .app_data(id_path_config("Employee not found"))
            .route(web::get().to(handlers::employee::get_employee))
            .route(web::put().to(handlers::employee::update_employee))
            .route(web::delete().to(handlers::employee::delete_employee)),
    )
    .service(
        web::resource("/job_histories")
            .route(web::get().to(handlers::job_history::get_job_histories))
            .route(web::post().to(handlers::job_history::create_job_history)),
    )
    .service(
        web::resource("/job_histories/{job_history_id}")
            .app_data(id_path_config("JobHistory not found"))
            .route(web::get().to(handlers::job_history::get_job_history))
            .route(web::put().to(handlers::job_history::update_job_history))
            .route(web::delete().to(handlers::job_history::delete_job_history)),
    );
}
