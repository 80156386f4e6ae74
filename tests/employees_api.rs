#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use hrmanager_backend::config::DeletePolicy;
use serde_json::{json, Value};

#[actix_web::test]
async fn created_employee_shows_up_under_department() {
    let app = test_app!(DeletePolicy::Restrict);
    let req = test::TestRequest::post().uri("/departments?name=Sales&region=West").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/employees?{}", common::employee_query(1)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(
        created,
        json!({
            "EmployeeID": 1,
            "Name": "Jane",
            "Birthday": "1990-01-01",
            "Salary": 50000.0,
            "Job": "Clerk",
            "DepartmentID": 1
        })
    );

    let department: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/departments/1").to_request()).await;
    let employees = department["Employees"].as_array().unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0]["Name"], json!("Jane"));
    assert_eq!(employees[0]["JobHistories"], json!([]));
}

#[actix_web::test]
async fn unknown_department_is_rejected_and_nothing_is_stored() {
    let app = test_app!(DeletePolicy::Restrict);

    let req = test::TestRequest::post()
        .uri(&format!("/employees?{}", common::employee_query(42)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "detail": "Department not found" }));

    let list: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/employees").to_request()).await;
    assert_eq!(list, json!([]));
}

#[actix_web::test]
async fn deleting_missing_employee_is_404() {
    let app = test_app!(DeletePolicy::Restrict);
    let resp = test::call_service(&app, test::TestRequest::delete().uri("/employees/999").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "detail": "Employee not found" }));
}

#[actix_web::test]
async fn get_includes_job_histories() {
    let app = test_app!(DeletePolicy::Restrict);
    let req = test::TestRequest::post().uri("/departments?name=Sales&region=West").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri(&format!("/employees?{}", common::employee_query(1)))
        .to_request();
    test::call_service(&app, req).await;
    for title in ["Intern", "Junior"] {
        let req = test::TestRequest::post()
            .uri(&format!("/job_histories?{}", common::job_history_query(1, title)))
            .to_request();
        test::call_service(&app, req).await;
    }

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/employees/1").to_request()).await;
    assert_eq!(body["EmployeeID"], json!(1));
    assert_eq!(body["DepartmentID"], json!(1));
    let titles: Vec<&str> = body["JobHistories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["Title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Intern", "Junior"]);
}

#[actix_web::test]
async fn update_moves_employee_between_departments() {
    let app = test_app!(DeletePolicy::Restrict);
    for query in ["name=Sales&region=West", "name=Support&region=East"] {
        let req = test::TestRequest::post().uri(&format!("/departments?{}", query)).to_request();
        test::call_service(&app, req).await;
    }
    let req = test::TestRequest::post()
        .uri(&format!("/employees?{}", common::employee_query(1)))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/employees/1?name=Jane&birthday=1990-01-01&salary=55000.5&job=Lead&department_id=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["Salary"], json!(55000.5));
    assert_eq!(body["DepartmentID"], json!(2));

    let sales: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/departments/1").to_request()).await;
    assert_eq!(sales["Employees"], json!([]));
    let support: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/departments/2").to_request()).await;
    assert_eq!(support["Employees"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::put()
        .uri(&format!("/employees/1?{}", common::employee_query(9)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::put()
        .uri(&format!("/employees/5?{}", common::employee_query(1)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_returns_the_removed_record() {
    let app = test_app!(DeletePolicy::Restrict);
    let req = test::TestRequest::post().uri("/departments?name=Sales&region=West").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri(&format!("/employees?{}", common::employee_query(1)))
        .to_request();
    test::call_service(&app, req).await;

    let resp = test::call_service(&app, test::TestRequest::delete().uri("/employees/1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["EmployeeID"], json!(1));
    assert_eq!(body["Salary"], json!(50000.0));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/employees/1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn restrict_policy_keeps_employee_with_history() {
    let app = test_app!(DeletePolicy::Restrict);
    let req = test::TestRequest::post().uri("/departments?name=Sales&region=West").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri(&format!("/employees?{}", common::employee_query(1)))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri(&format!("/job_histories?{}", common::job_history_query(1, "Intern")))
        .to_request();
    test::call_service(&app, req).await;

    let resp = test::call_service(&app, test::TestRequest::delete().uri("/employees/1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "detail": "Employee still has job histories" }));

    // The rolled-back delete leaves the employee readable.
    let resp = test::call_service(&app, test::TestRequest::get().uri("/employees/1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn non_numeric_salary_is_a_bad_request() {
    let app = test_app!(DeletePolicy::Restrict);
    let req = test::TestRequest::post()
        .uri("/employees?name=Jane&birthday=1990-01-01&salary=lots&job=Clerk&department_id=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn non_finite_salary_is_rejected_on_create_and_update() {
    let app = test_app!(DeletePolicy::Restrict);
    let req = test::TestRequest::post().uri("/departments?name=Sales&region=West").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri(&format!("/employees?{}", common::employee_query(1)))
        .to_request();
    test::call_service(&app, req).await;

    for salary in ["NaN", "inf", "-inf", "1e400"] {
        let query = format!("name=Jane&birthday=1990-01-01&salary={}&job=Clerk&department_id=1", salary);

        let req = test::TestRequest::post().uri(&format!("/employees?{}", query)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "create salary={}", salary);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());

        let req = test::TestRequest::put().uri(&format!("/employees/1?{}", query)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "update salary={}", salary);
    }

    let list: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/employees").to_request()).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["Salary"], json!(50000.0));
}

#[actix_web::test]
async fn repeated_update_leaves_the_same_stored_state() {
    let app = test_app!(DeletePolicy::Restrict);
    let req = test::TestRequest::post().uri("/departments?name=Sales&region=West").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri(&format!("/employees?{}", common::employee_query(1)))
        .to_request();
    test::call_service(&app, req).await;

    let uri = "/employees/1?name=Jane&birthday=1990-01-01&salary=60000&job=Manager&department_id=1";
    let mut snapshots = Vec::new();
    for _ in 0..2 {
        let resp = test::call_service(&app, test::TestRequest::put().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let stored: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/employees/1").to_request()).await;
        snapshots.push(stored);
    }

    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[1]["Job"], json!("Manager"));
    assert_eq!(snapshots[1]["Salary"], json!(60000.0));
}
