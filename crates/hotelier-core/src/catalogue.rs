//! In-memory reconciliation store.
//!
//! A [`Catalogue`] is constructed fresh per invocation, populated by
//! [`ingest`](Catalogue::ingest), and read-only afterward. There is no
//! deletion and no persistence.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::{Hotel, HotelId};

/// Canonical hotel records keyed by identifier.
///
/// Backed by a BTreeMap so query results come out ordered by hotel id,
/// independent of ingestion order.
#[derive(Debug, Default)]
pub struct Catalogue {
    hotels: BTreeMap<HotelId, Hotel>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    /// Fold a batch of canonical records into the store.
    ///
    /// Strictly sequential: a new identifier inserts the record as-is, a
    /// known identifier merges the incoming record into the stored one.
    /// Merge ties keep the first arrival, so processing order across the
    /// full input sequence is an observable contract.
    pub fn ingest<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Hotel>,
    {
        for incoming in records {
            match self.hotels.entry(incoming.id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(incoming);
                }
                Entry::Occupied(mut slot) => slot.get_mut().merge(incoming),
            }
        }
    }

    /// Return every hotel passing both filters, ordered by id.
    ///
    /// An empty filter list means "no restriction", not "match nothing".
    /// Unknown identifiers are not an error — they simply match nothing.
    pub fn find(&self, hotel_ids: &[HotelId], destination_ids: &[i64]) -> Vec<Hotel> {
        self.hotels
            .values()
            .filter(|hotel| hotel_ids.is_empty() || hotel_ids.contains(&hotel.id))
            .filter(|hotel| {
                destination_ids.is_empty() || destination_ids.contains(&hotel.destination_id)
            })
            .cloned()
            .collect()
    }
}
