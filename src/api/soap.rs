use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::infrastructure::AppState;

/// SOAP endpoint. Every outcome, including unparseable input, is a 200 with
/// an envelope body; the body has to be inspected to learn what happened.
pub async fn soap_endpoint(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let envelope = state.soap.handle(&body).await;

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
        envelope,
    )
}
