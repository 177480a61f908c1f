//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::cart::{self, CartItem};
use crate::models::{Plant, PlantId};

/// One request to open the detail modal. The sequence number lets the modal
/// discard responses that arrive after a newer request was issued.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRequest {
    pub seq: u64,
    pub id: PlantId,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Cart ledger - read
    pub cart: ReadSignal<Vec<CartItem>>,
    /// Cart ledger - write
    set_cart: WriteSignal<Vec<CartItem>>,
    /// Latest detail-modal request (None = closed) - read
    pub detail_request: ReadSignal<Option<DetailRequest>>,
    /// Latest detail-modal request - write
    set_detail_request: WriteSignal<Option<DetailRequest>>,
    /// Monotonic request counter; survives modal closes so a reopened modal
    /// can never match a response from a previous open.
    detail_seq: RwSignal<u64>,
}

impl AppContext {
    pub fn new(
        cart: (ReadSignal<Vec<CartItem>>, WriteSignal<Vec<CartItem>>),
        detail_request: (
            ReadSignal<Option<DetailRequest>>,
            WriteSignal<Option<DetailRequest>>,
        ),
    ) -> Self {
        Self {
            cart: cart.0,
            set_cart: cart.1,
            detail_request: detail_request.0,
            set_detail_request: detail_request.1,
            detail_seq: RwSignal::new(0),
        }
    }

    pub fn add_to_cart(&self, plant: &Plant) {
        self.set_cart.update(|items| cart::add_item(items, plant));
    }

    pub fn remove_from_cart(&self, id: &PlantId) {
        let id = id.clone();
        self.set_cart.update(|items| cart::remove_item(items, &id));
    }

    /// Open the detail modal for a plant, superseding any in-flight request.
    pub fn open_detail(&self, id: PlantId) {
        let seq = self.detail_seq.get_untracked() + 1;
        self.detail_seq.set(seq);
        self.set_detail_request.set(Some(DetailRequest { seq, id }));
    }

    pub fn close_detail(&self) {
        self.set_detail_request.set(None);
    }

    /// Whether a response for `seq` is stale (a newer request exists or the
    /// modal was closed meanwhile).
    pub fn detail_is_stale(&self, seq: u64) -> bool {
        self.detail_request.get_untracked().map(|r| r.seq) != Some(seq)
    }
}
