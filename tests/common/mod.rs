// Builds an actix test service over a fresh in-memory database.
macro_rules! test_app {
    ($policy:expr) => {{
        let settings = hrmanager_backend::config::Settings::in_memory($policy);
        let pool = hrmanager_backend::db::create_pool(&settings)
            .await
            .expect("in-memory database");
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(pool))
                .configure(hrmanager_backend::routes),
        )
        .await
    }};
}

pub const JANE: &str = "name=Jane&birthday=1990-01-01&salary=50000&job=Clerk";

pub fn employee_query(department_id: i64) -> String {
    format!("{}&department_id={}", JANE, department_id)
}

pub fn job_history_query(employee_id: i64, title: &str) -> String {
    format!(
        "title={}&start_date=2019-01-01&end_date=2021-12-31&salary=42000.5&job=Analyst&employee_id={}",
        title, employee_id
    )
}
