use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

#[derive(Deserialize)]
pub struct FoodInput {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// Records in insertion order, the order json-server lists them in.
pub type Db = Arc<RwLock<Vec<Food>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-seeded with `foods`.
pub fn app_with(foods: Vec<Food>) -> Router {
    let db: Db = Arc::new(RwLock::new(foods));
    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route("/foods/{id}", get(get_food).put(update_food).delete(delete_food))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_foods(State(db): State<Db>) -> Json<Vec<Food>> {
    Json(db.read().await.clone())
}

async fn create_food(
    State(db): State<Db>,
    Json(input): Json<FoodInput>,
) -> (StatusCode, Json<Food>) {
    let food = Food {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        description: input.description,
        image_url: input.image_url,
    };
    info!(id = %food.id, "created food");
    db.write().await.push(food.clone());
    (StatusCode::CREATED, Json(food))
}

async fn get_food(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Food>, StatusCode> {
    let foods = db.read().await;
    foods
        .iter()
        .find(|food| food.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Full replace; the id in the path wins over anything in the body.
async fn update_food(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<FoodInput>,
) -> Result<Json<Food>, StatusCode> {
    let mut foods = db.write().await;
    let food = foods
        .iter_mut()
        .find(|food| food.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    food.name = input.name;
    food.description = input.description;
    food.image_url = input.image_url;
    Ok(Json(food.clone()))
}

async fn delete_food(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut foods = db.write().await;
    let index = foods
        .iter()
        .position(|food| food.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    foods.remove(index);
    info!(%id, "deleted food");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_serializes_with_image_url_wire_name() {
        let food = Food {
            id: "1".to_string(),
            name: "Pizza".to_string(),
            description: "Cheese".to_string(),
            image_url: "http://img/p.png".to_string(),
        };
        let json = serde_json::to_value(&food).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["imageURL"], "http://img/p.png");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn input_ignores_unknown_id() {
        let input: FoodInput = serde_json::from_str(
            r#"{"id":"x","name":"Soup","description":"Hot","imageURL":"u"}"#,
        )
        .unwrap();
        assert_eq!(input.name, "Soup");
    }

    #[test]
    fn input_rejects_missing_field() {
        let result: Result<FoodInput, _> =
            serde_json::from_str(r#"{"name":"Soup","description":"Hot"}"#);
        assert!(result.is_err());
    }
}
