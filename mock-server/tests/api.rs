use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Food};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn seeded(id: &str, name: &str) -> Food {
    Food {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        image_url: format!("http://img/{id}.png"),
    }
}

const PIZZA: &str = r#"{"name":"Pizza","description":"Cheese","imageURL":"http://img/pizza.png"}"#;

// --- list ---

#[tokio::test]
async fn list_foods_empty() {
    let resp = app().oneshot(empty_request("GET", "/foods")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let foods: Vec<Food> = body_json(resp).await;
    assert!(foods.is_empty());
}

#[tokio::test]
async fn list_foods_keeps_insertion_order() {
    let app = app_with(vec![seeded("b", "Bread"), seeded("a", "Apple"), seeded("c", "Cake")]);
    let resp = app.oneshot(empty_request("GET", "/foods")).await.unwrap();

    let foods: Vec<Food> = body_json(resp).await;
    let ids: Vec<&str> = foods.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
}

// --- create ---

#[tokio::test]
async fn create_food_returns_201() {
    let resp = app().oneshot(json_request("POST", "/foods", PIZZA)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let food: Food = body_json(resp).await;
    assert_eq!(food.name, "Pizza");
    assert_eq!(food.image_url, "http://img/pizza.png");
    assert!(!food.id.is_empty());
}

#[tokio::test]
async fn create_food_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/foods", r#"{"name":"Pizza"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_food_not_found() {
    let resp = app().oneshot(empty_request("GET", "/foods/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_food_seeded() {
    let app = app_with(vec![seeded("7", "Tacos")]);
    let resp = app.oneshot(empty_request("GET", "/foods/7")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let food: Food = body_json(resp).await;
    assert_eq!(food, seeded("7", "Tacos"));
}

#[tokio::test]
async fn get_food_decodes_escaped_id() {
    let app = app_with(vec![seeded("a b/c", "Tacos")]);
    let resp = app.oneshot(empty_request("GET", "/foods/a%20b%2Fc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let food: Food = body_json(resp).await;
    assert_eq!(food.id, "a b/c");
}

// --- update ---

#[tokio::test]
async fn update_food_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/foods/missing", PIZZA))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_food_requires_full_record() {
    let app = app_with(vec![seeded("1", "Soup")]);
    let resp = app
        .oneshot(json_request("PUT", "/foods/1", r#"{"name":"Stew"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- delete ---

#[tokio::test]
async fn delete_food_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/foods/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/foods", PIZZA))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Food = body_json(resp).await;
    let id = created.id.clone();

    // list — should contain the one food
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/foods"))
        .await
        .unwrap();
    let foods: Vec<Food> = body_json(resp).await;
    assert_eq!(foods, vec![created.clone()]);

    // update replaces every field
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/foods/{id}"),
            r#"{"name":"Calzone","description":"Folded","imageURL":"http://img/calzone.png"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Food = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Calzone");
    assert_eq!(updated.description, "Folded");
    assert_eq!(updated.image_url, "http://img/calzone.png");

    // get reflects the update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/foods/{id}")))
        .await
        .unwrap();
    let fetched: Food = body_json(resp).await;
    assert_eq!(fetched, updated);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/foods/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/foods/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/foods"))
        .await
        .unwrap();
    let foods: Vec<Food> = body_json(resp).await;
    assert!(foods.is_empty());
}
