//! Transport offer matching and the match lifecycle
//!
//! Every transition takes the current match, request and offer by reference
//! and returns updated copies in a [`MatchOutcome`]. Nothing is mutated in
//! place, so a rejected transition leaves the caller's records untouched.
//! Callers that persist the outcome must serialize transitions per
//! request/offer pair.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::models::{
    Actor, MatchOutcome, MatchStatus, OfferStatus, RequestStatus, TransportMatch, TransportOffer,
    TransportRequest,
};
use crate::types::{checked_mul, round2};
use crate::validation::{validate_non_negative, validate_offer, validate_rating, validate_request};

// ============================================================================
// Offer Search
// ============================================================================

/// Available offers whose window covers the preferred date and whose vehicle
/// can carry the load, cheapest rate first.
///
/// The request and every offer are validated before any filtering.
pub fn filter_compatible_offers(
    request: &TransportRequest,
    offers: &[TransportOffer],
) -> CoreResult<Vec<TransportOffer>> {
    validate_request(request)?;
    for offer in offers {
        validate_offer(offer)?;
    }

    let needed_tons = request.quantity_tons();
    let mut compatible: Vec<TransportOffer> = offers
        .iter()
        .filter(|offer| offer.status == OfferStatus::Available)
        .filter(|offer| offer.availability().contains(request.preferred_date))
        .filter(|offer| offer.capacity_tons >= needed_tons)
        .cloned()
        .collect();

    compatible.sort_by(|a, b| a.rate_per_km.cmp(&b.rate_per_km));
    Ok(compatible)
}

/// Trip cost: the larger of the minimum charge and distance times rate
pub fn transport_cost(
    distance_km: Decimal,
    rate_per_km: Decimal,
    minimum_charge: Decimal,
) -> CoreResult<Decimal> {
    validate_non_negative(distance_km)
        .map_err(|message| CoreError::invalid_input("estimated_distance_km", message))?;
    validate_non_negative(rate_per_km)
        .map_err(|message| CoreError::invalid_input("rate_per_km", message))?;
    let distance_cost = checked_mul("estimated_distance_km", distance_km, rate_per_km)?;
    Ok(round2(minimum_charge.max(distance_cost)))
}

fn newest_first<T, F>(mut items: Vec<T>, created: F) -> Vec<T>
where
    F: Fn(&T) -> chrono::DateTime<Utc>,
{
    items.sort_by(|a, b| created(b).cmp(&created(a)));
    items
}

/// Requests still waiting for a transporter, newest first
pub fn open_requests(requests: &[TransportRequest]) -> Vec<TransportRequest> {
    let open = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Open)
        .cloned()
        .collect();
    newest_first(open, |r| r.created_at)
}

/// Offers that can still be booked, newest first
pub fn available_offers(offers: &[TransportOffer]) -> Vec<TransportOffer> {
    let available = offers
        .iter()
        .filter(|o| o.status == OfferStatus::Available)
        .cloned()
        .collect();
    newest_first(available, |o| o.created_at)
}

/// A farmer's requests, newest first
pub fn requests_for_farmer(requests: &[TransportRequest], farmer_id: Uuid) -> Vec<TransportRequest> {
    let own = requests
        .iter()
        .filter(|r| r.farmer_id == farmer_id)
        .cloned()
        .collect();
    newest_first(own, |r| r.created_at)
}

/// A transporter's offers, newest first
pub fn offers_for_transporter(
    offers: &[TransportOffer],
    transporter_id: Uuid,
) -> Vec<TransportOffer> {
    let own = offers
        .iter()
        .filter(|o| o.transporter_id == transporter_id)
        .cloned()
        .collect();
    newest_first(own, |o| o.created_at)
}

// ============================================================================
// Lifecycle
// ============================================================================

fn require_farmer(actor: Actor, request: &TransportRequest) -> CoreResult<()> {
    match actor {
        Actor::Farmer(id) if id == request.farmer_id => Ok(()),
        _ => Err(CoreError::unauthorized(
            "Only the farmer who posted the request can do this",
        )),
    }
}

fn require_transporter(actor: Actor, offer: &TransportOffer) -> CoreResult<()> {
    match actor {
        Actor::Transporter(id) if id == offer.transporter_id => Ok(()),
        _ => Err(CoreError::unauthorized(
            "Only the transporter who posted the offer can do this",
        )),
    }
}

fn require_pair(
    transport_match: &TransportMatch,
    request: &TransportRequest,
    offer: &TransportOffer,
) -> CoreResult<()> {
    if transport_match.request_id != request.id {
        return Err(CoreError::invalid_input(
            "request_id",
            "Match does not belong to this request",
        ));
    }
    if transport_match.offer_id != offer.id {
        return Err(CoreError::invalid_input(
            "offer_id",
            "Match does not belong to this offer",
        ));
    }
    Ok(())
}

/// Move a match to `next` if the transition table allows it
pub fn transition_match(
    transport_match: &TransportMatch,
    next: MatchStatus,
) -> CoreResult<TransportMatch> {
    if transport_match.status.is_terminal() {
        return Err(CoreError::invalid_transition(format!(
            "Match is already {}",
            transport_match.status
        )));
    }
    if !transport_match.status.can_transition_to(next) {
        return Err(CoreError::invalid_transition(format!(
            "Cannot move match from {} to {}",
            transport_match.status, next
        )));
    }
    let mut updated = transport_match.clone();
    updated.status = next;
    updated.updated_at = Utc::now();
    Ok(updated)
}

/// Transporter proposes their offer for a request
pub fn propose_match(
    request: &TransportRequest,
    offer: &TransportOffer,
    estimated_distance_km: Decimal,
    actor: Actor,
) -> CoreResult<TransportMatch> {
    require_transporter(actor, offer)?;
    validate_request(request)?;
    validate_offer(offer)?;
    if request.status != RequestStatus::Open {
        return Err(CoreError::invalid_transition(
            "Request is no longer open for matching",
        ));
    }
    let total_cost = transport_cost(
        estimated_distance_km,
        offer.rate_per_km,
        offer.minimum_charge,
    )?;

    let now = Utc::now();
    Ok(TransportMatch {
        id: Uuid::new_v4(),
        request_id: request.id,
        offer_id: offer.id,
        proposed_rate: offer.rate_per_km,
        estimated_distance_km,
        total_cost,
        status: MatchStatus::Proposed,
        farmer_rating: None,
        farmer_review: String::new(),
        transporter_rating: None,
        transporter_review: String::new(),
        created_at: now,
        updated_at: now,
    })
}

/// Farmer accepts a proposed match; the request goes in progress and the
/// offer is assigned
pub fn accept_match(
    transport_match: &TransportMatch,
    request: &TransportRequest,
    offer: &TransportOffer,
    actor: Actor,
) -> CoreResult<MatchOutcome> {
    require_pair(transport_match, request, offer)?;
    require_farmer(actor, request)?;
    if request.status != RequestStatus::Open {
        return Err(CoreError::invalid_transition("Request is no longer open"));
    }
    if offer.status != OfferStatus::Available {
        return Err(CoreError::invalid_transition("Offer is no longer available"));
    }
    let accepted = transition_match(transport_match, MatchStatus::Accepted)?;

    let mut request = request.clone();
    request.status = RequestStatus::InProgress;
    let mut offer = offer.clone();
    offer.status = OfferStatus::Assigned;

    Ok(MatchOutcome {
        transport_match: accepted,
        request,
        offer,
    })
}

/// Write the actor's rating of the other party; each side rates once
fn record_rating(
    transport_match: &mut TransportMatch,
    actor: Actor,
    rating: u8,
    review: &str,
) -> CoreResult<()> {
    let (slot, text) = match actor {
        Actor::Farmer(_) => (
            &mut transport_match.transporter_rating,
            &mut transport_match.transporter_review,
        ),
        Actor::Transporter(_) => (
            &mut transport_match.farmer_rating,
            &mut transport_match.farmer_review,
        ),
    };
    if slot.is_some() {
        return Err(CoreError::invalid_transition(format!(
            "The {} has already rated this match",
            actor.role()
        )));
    }
    *slot = Some(rating);
    *text = review.to_string();
    Ok(())
}

/// Either party closes an accepted match and rates the other side; the
/// request is completed and the vehicle becomes available again.
///
/// On a match that is already completed, the party that has not rated yet
/// may add their rating; the request and offer are returned unchanged.
pub fn complete_match(
    transport_match: &TransportMatch,
    request: &TransportRequest,
    offer: &TransportOffer,
    actor: Actor,
    rating: u8,
    review: &str,
) -> CoreResult<MatchOutcome> {
    require_pair(transport_match, request, offer)?;
    match actor {
        Actor::Farmer(_) => require_farmer(actor, request)?,
        Actor::Transporter(_) => require_transporter(actor, offer)?,
    }
    validate_rating(rating).map_err(|message| CoreError::invalid_input("rating", message))?;

    if transport_match.status == MatchStatus::Completed {
        let mut rated = transport_match.clone();
        record_rating(&mut rated, actor, rating, review)?;
        rated.updated_at = Utc::now();
        return Ok(MatchOutcome {
            transport_match: rated,
            request: request.clone(),
            offer: offer.clone(),
        });
    }

    let mut completed = transition_match(transport_match, MatchStatus::Completed)?;
    record_rating(&mut completed, actor, rating, review)?;

    let mut request = request.clone();
    request.status = RequestStatus::Completed;
    let mut offer = offer.clone();
    offer.status = OfferStatus::Available;

    Ok(MatchOutcome {
        transport_match: completed,
        request,
        offer,
    })
}

/// Farmer turns down a proposed match
pub fn reject_match(
    transport_match: &TransportMatch,
    request: &TransportRequest,
    offer: &TransportOffer,
    actor: Actor,
) -> CoreResult<MatchOutcome> {
    require_pair(transport_match, request, offer)?;
    require_farmer(actor, request)?;
    Ok(MatchOutcome {
        transport_match: transition_match(transport_match, MatchStatus::Rejected)?,
        request: request.clone(),
        offer: offer.clone(),
    })
}

/// Either party withdraws from a proposed or accepted match. Cancelling an
/// accepted match reopens the request and frees the vehicle.
pub fn cancel_match(
    transport_match: &TransportMatch,
    request: &TransportRequest,
    offer: &TransportOffer,
    actor: Actor,
) -> CoreResult<MatchOutcome> {
    require_pair(transport_match, request, offer)?;
    match actor {
        Actor::Farmer(_) => require_farmer(actor, request)?,
        Actor::Transporter(_) => require_transporter(actor, offer)?,
    }
    let cancelled = transition_match(transport_match, MatchStatus::Cancelled)?;

    let mut request = request.clone();
    let mut offer = offer.clone();
    if transport_match.status == MatchStatus::Accepted {
        request.status = RequestStatus::Open;
        offer.status = OfferStatus::Available;
    }

    Ok(MatchOutcome {
        transport_match: cancelled,
        request,
        offer,
    })
}
