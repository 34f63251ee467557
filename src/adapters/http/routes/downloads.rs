use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderName, header},
    response::IntoResponse,
    routing::get,
};

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

pub const DOWNLOADS_REMAINING_HEADER: &str = "x-downloads-remaining";

pub fn router() -> Router<AppState> {
    Router::new().route("/{order_id}/{token}", get(download_file))
}

async fn download_file(
    State(app_state): State<AppState>,
    Path((order_id, token)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let downloaded = app_state
        .download_use_cases
        .resolve_download(&order_id, &token)
        .await?;

    let file_name = downloaded.file.file_name.replace(['"', '\\'], "");
    let headers = [
        (
            header::CONTENT_TYPE,
            downloaded.file.content_type.to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ),
        (
            HeaderName::from_static(DOWNLOADS_REMAINING_HEADER),
            downloaded.downloads_remaining.to_string(),
        ),
    ];

    Ok((headers, downloaded.file.bytes))
}
