//! HTTP handlers for transport matching endpoints

use axum::{http::StatusCode, Json};

use crate::error::AppResult;
use crate::services::transport::{
    AcceptMatchInput, CompatibleOffersInput, CompleteMatchInput, ProposeMatchInput,
    TransportService,
};
use shared::{MatchOutcome, TransportMatch, TransportOffer};

/// Find offers able to serve a request
pub async fn compatible_offers(
    Json(input): Json<CompatibleOffersInput>,
) -> AppResult<Json<Vec<TransportOffer>>> {
    let offers = TransportService::new().compatible_offers(input)?;
    Ok(Json(offers))
}

/// Propose a match
pub async fn propose_match(
    Json(input): Json<ProposeMatchInput>,
) -> AppResult<(StatusCode, Json<TransportMatch>)> {
    let proposed = TransportService::new().propose(input)?;
    Ok((StatusCode::CREATED, Json(proposed)))
}

/// Accept a proposed match
pub async fn accept_match(Json(input): Json<AcceptMatchInput>) -> AppResult<Json<MatchOutcome>> {
    let outcome = TransportService::new().accept(input)?;
    Ok(Json(outcome))
}

/// Complete an accepted match
pub async fn complete_match(
    Json(input): Json<CompleteMatchInput>,
) -> AppResult<Json<MatchOutcome>> {
    let outcome = TransportService::new().complete(input)?;
    Ok(Json(outcome))
}
