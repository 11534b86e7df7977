pub mod health;
pub mod items;
pub mod soap;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // REST
        .route(
            "/rest/items",
            get(items::list_items)
                .post(items::create_item)
                .delete(items::delete_all_items),
        )
        .route(
            "/rest/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        // SOAP
        .route("/soap", post(soap::soap_endpoint))
        .with_state(state)
}
