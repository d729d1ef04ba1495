use actix_web::{App, http::StatusCode, test, web};
use serde_json::json;

use people_registry::domain::person::NewPerson;
use people_registry::domain::types::Street;
use people_registry::repository::{DieselRepository, PersonWriter};
use people_registry::routes::people::list_people;

mod common;

#[actix_web::test]
async fn get_people_returns_stored_people() {
    let test_db = common::TestDb::new("test_get_people.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    repo.create_person(
        &NewPerson::try_new("Ahmet")
            .unwrap()
            .with_address(Street::optional(Some("ahmetFirstStreet"))),
    )
    .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .service(list_people),
    )
    .await;

    let req = test::TestRequest::get().uri("/people").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([{"name": "Ahmet", "addresses": [{"street": "ahmetFirstStreet"}]}])
    );
}

#[actix_web::test]
async fn get_people_on_empty_store_returns_empty_array() {
    let test_db = common::TestDb::new("test_get_people_empty.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .service(list_people),
    )
    .await;

    let req = test::TestRequest::get().uri("/people").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn store_failure_is_server_error() {
    let test_db = common::TestDb::without_migrations("test_get_people_failure.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .service(list_people),
    )
    .await;

    let req = test::TestRequest::get().uri("/people").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
