use axum::Json;
use serde_json::{Value, json};

pub async fn get_hello() -> Json<Value> {
    Json(json!({ "status": "success", "message": "Hello World!" }))
}
