use axum::Json;

use crate::controllers::poll_controllers::models::CategoriesResponse;
use crate::polls;

pub async fn get_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: polls::categories(),
    })
}
