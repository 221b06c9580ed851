//! Transport matching service
//!
//! Requests, offers and matches arrive with each call; the service validates
//! them, runs the lifecycle transition and returns the updated records for
//! the caller to persist.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use shared::{
    accept_match, complete_match, filter_compatible_offers, propose_match, Actor, MatchOutcome,
    TransportMatch, TransportOffer, TransportRequest,
};

/// Transport matching service
#[derive(Clone, Default)]
pub struct TransportService;

/// Input for searching offers that can serve a request
#[derive(Debug, Deserialize)]
pub struct CompatibleOffersInput {
    pub request: TransportRequest,
    pub offers: Vec<TransportOffer>,
}

/// Input for proposing an offer against a request
#[derive(Debug, Deserialize)]
pub struct ProposeMatchInput {
    pub request: TransportRequest,
    pub offer: TransportOffer,
    pub estimated_distance_km: Decimal,
    pub actor: Actor,
}

/// Input for accepting a proposed match
#[derive(Debug, Deserialize)]
pub struct AcceptMatchInput {
    pub transport_match: TransportMatch,
    pub request: TransportRequest,
    pub offer: TransportOffer,
    pub actor: Actor,
}

/// Input for closing a match with a rating of the other party
#[derive(Debug, Deserialize)]
pub struct CompleteMatchInput {
    pub transport_match: TransportMatch,
    pub request: TransportRequest,
    pub offer: TransportOffer,
    pub actor: Actor,
    pub rating: u8,
    #[serde(default)]
    pub review: String,
}

impl TransportService {
    pub fn new() -> Self {
        Self
    }

    /// Offers able to carry the request, cheapest first
    pub fn compatible_offers(&self, input: CompatibleOffersInput) -> AppResult<Vec<TransportOffer>> {
        let offers = filter_compatible_offers(&input.request, &input.offers)?;
        tracing::info!(
            request_id = %input.request.id,
            candidates = input.offers.len(),
            compatible = offers.len(),
            "Filtered transport offers"
        );
        Ok(offers)
    }

    /// Propose a match on behalf of the offer's transporter
    pub fn propose(&self, input: ProposeMatchInput) -> AppResult<TransportMatch> {
        let proposed = propose_match(
            &input.request,
            &input.offer,
            input.estimated_distance_km,
            input.actor,
        )
        .map_err(|e| {
            tracing::warn!(
                request_id = %input.request.id,
                offer_id = %input.offer.id,
                user_id = %input.actor.user_id(),
                "Match proposal rejected: {}",
                e
            );
            e
        })?;

        tracing::info!(
            match_id = %proposed.id,
            request_id = %proposed.request_id,
            offer_id = %proposed.offer_id,
            total_cost = %proposed.total_cost,
            "Proposed transport match"
        );
        Ok(proposed)
    }

    /// Accept a proposed match on behalf of the request's farmer
    pub fn accept(&self, input: AcceptMatchInput) -> AppResult<MatchOutcome> {
        let outcome = accept_match(
            &input.transport_match,
            &input.request,
            &input.offer,
            input.actor,
        )
        .map_err(|e| {
            tracing::warn!(
                match_id = %input.transport_match.id,
                role = input.actor.role(),
                user_id = %input.actor.user_id(),
                "Match acceptance rejected: {}",
                e
            );
            e
        })?;

        tracing::info!(
            match_id = %outcome.transport_match.id,
            "Accepted transport match"
        );
        Ok(outcome)
    }

    /// Complete an accepted match, or add the missing rating to a completed
    /// one, and record the actor's rating
    pub fn complete(&self, input: CompleteMatchInput) -> AppResult<MatchOutcome> {
        let outcome = complete_match(
            &input.transport_match,
            &input.request,
            &input.offer,
            input.actor,
            input.rating,
            &input.review,
        )
        .map_err(|e| {
            tracing::warn!(
                match_id = %input.transport_match.id,
                role = input.actor.role(),
                user_id = %input.actor.user_id(),
                "Match completion rejected: {}",
                e
            );
            e
        })?;

        tracing::info!(
            match_id = %outcome.transport_match.id,
            rated_by = input.actor.role(),
            rating = input.rating,
            "Completed transport match"
        );
        Ok(outcome)
    }
}
