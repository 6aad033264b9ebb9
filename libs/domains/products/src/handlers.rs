//! HTTP handlers for the product catalog API

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::auth::{ApiKeyAuth, require_api_key};
use axum_helpers::errors::ErrorResponse;
use axum_helpers::extractors::JsonBody;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CatalogStats, CreateProduct, ListQuery, PriceStats, Product, ProductPage, SearchResults,
    UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the product catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        search_products,
        product_stats,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct, ListQuery, ProductPage,
            SearchResults, CatalogStats, PriceStats, ProductResponse, ErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Envelope for mutation responses.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

/// Create the products router.
///
/// Read routes are public; create/update/delete sit behind the API-key
/// gate. The `/search` and `/stats` routes must register before `/{id}`
/// so they are not captured as ids.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    auth: ApiKeyAuth,
) -> Router {
    let shared_service = Arc::new(service);

    let reads = Router::new()
        .route("/", get(list_products))
        .route("/search", get(search_products))
        .route("/stats", get(product_stats))
        .route("/{id}", get(get_product));

    let mutations = Router::new()
        .route("/", axum::routing::post(create_product))
        .route(
            "/{id}",
            axum::routing::put(update_product).delete(delete_product),
        )
        .route_layer(middleware::from_fn_with_state(auth, require_api_key));

    reads.merge(mutations).with_state(shared_service)
}

/// Ids are opaque strings on the wire; anything that does not parse as
/// a UUID cannot name a stored product, so it is reported as not-found
/// rather than a malformed request.
fn parse_id(raw: &str) -> ProductResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ProductError::NotFound(raw.to_string()))
}

/// List products with optional filters and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of the filtered listing", body = ProductPage)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ListQuery>,
) -> ProductResult<Json<ProductPage>> {
    let page = service.list_products(query).await?;
    Ok(Json(page))
}

/// Search query parameters
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Search query string (matched against name and description)
    pub q: Option<String>,
}

/// Search products by free text
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchResults),
        (status = 400, description = "Missing or empty query", body = ErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<SearchQuery>,
) -> ProductResult<Json<SearchResults>> {
    let results = service
        .search_products(query.q.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(results))
}

/// Get catalog statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Aggregate catalog statistics", body = CatalogStats)
    )
)]
async fn product_stats<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<CatalogStats>> {
    let stats = service.product_stats().await?;
    Ok(Json(stats))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with that ID", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(parse_id(&id)?).await?;
    Ok(Json(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Payload failed validation", body = ErrorResponse),
        (status = 401, description = "Missing API key", body = ErrorResponse),
        (status = 403, description = "Invalid API key", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            message: "Product created successfully".to_string(),
            product,
        }),
    ))
}

/// Update an existing product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductResponse),
        (status = 400, description = "Payload failed validation", body = ErrorResponse),
        (status = 401, description = "Missing API key", body = ErrorResponse),
        (status = 403, description = "Invalid API key", body = ErrorResponse),
        (status = 404, description = "No product with that ID", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateProduct>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.update_product(parse_id(&id)?, input).await?;
    Ok(Json(ProductResponse {
        message: "Product updated successfully".to_string(),
        product,
    }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = ProductResponse),
        (status = 401, description = "Missing API key", body = ErrorResponse),
        (status = 403, description = "Invalid API key", body = ErrorResponse),
        (status = 404, description = "No product with that ID", body = ErrorResponse)
    ),
    security(("api_key" = []))
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.delete_product(parse_id(&id)?).await?;
    Ok(Json(ProductResponse {
        message: "Product deleted successfully".to_string(),
        product,
    }))
}
