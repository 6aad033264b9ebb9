//! Root welcome route with an index of the available endpoints

use axum::{Json, Router, routing::get};
use serde_json::{json, Value};

async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Product API!",
        "endpoints": {
            "getAllProducts": "GET /api/products",
            "getProduct": "GET /api/products/{id}",
            "createProduct": "POST /api/products",
            "updateProduct": "PUT /api/products/{id}",
            "deleteProduct": "DELETE /api/products/{id}",
            "searchProducts": "GET /api/products/search?q=name",
            "getStats": "GET /api/products/stats"
        }
    }))
}

pub fn router() -> Router {
    Router::new().route("/", get(welcome))
}
