use axum::Json;

use crate::constants::messages;
use crate::fun_facts::get_random_fun_fact;
use crate::web::response_types::HomeResponse;

/// Service description: GET /
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        title: messages::TITLE.to_string(),
        description: messages::DESCRIPTION.to_string(),
        fun_fact: get_random_fun_fact().to_string(),
        disclaimer: messages::DISCLAIMER.to_string(),
    })
}
