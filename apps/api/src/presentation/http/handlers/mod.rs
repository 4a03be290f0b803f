pub mod authentications;
pub mod comment_likes;
pub mod comments;
pub mod health;
pub mod hello;
pub mod replies;
pub mod threads;
pub mod users;

use axum::Json;
use serde_json::{Value, json};

/// `{"status": "success"}` with an optional `data` object.
pub(crate) fn success(data: Option<Value>) -> Json<Value> {
    match data {
        Some(data) => Json(json!({ "status": "success", "data": data })),
        None => Json(json!({ "status": "success" })),
    }
}

/// Adds path and identity fields to a JSON body. Non-object bodies are left
/// alone so entity validation reports them.
pub(crate) fn with_fields(mut body: Value, fields: &[(&str, &str)]) -> Value {
    if let Value::Object(map) = &mut body {
        for (key, value) in fields {
            map.insert((*key).to_string(), Value::String((*value).to_string()));
        }
    }
    body
}
