use crate::api;
use crate::models::Item;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::items::create_item,
        api::items::list_items,
        api::items::get_item,
        api::items::update_item,
        api::items::delete_item,
        api::items::delete_all_items,
    ),
    components(schemas(Item)),
    tags(
        (name = "item-catalog", description = "Item catalog REST API")
    )
)]
pub struct ApiDoc;
