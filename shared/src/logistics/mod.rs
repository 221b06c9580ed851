//! Transport marketplace: offer search and the match lifecycle

pub mod matching;

pub use matching::{
    accept_match, available_offers, cancel_match, complete_match, filter_compatible_offers,
    offers_for_transporter, open_requests, propose_match, reject_match, requests_for_farmer,
    transition_match, transport_cost,
};
