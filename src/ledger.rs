// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Reservation ledger.
//!
//! The [`Ledger`] is the central component owning the room inventory and the
//! reservation collection. It validates booking requests, mutates both
//! collections together, and persists the full reservation set after every
//! mutation.
//!
//! # Booking Protocol
//!
//! - **Book**: marks a free room occupied and appends a confirmed record.
//! - **Cancel**: frees a booked room and removes its record.
//! - **Queries**: snapshot lookups over rooms and reservations.
//!
//! # Thread Safety
//!
//! All mutable state sits behind one mutex and every operation, persistence
//! flush included, runs inside a single critical section. A shared
//! `Arc<Ledger>` therefore preserves the booking invariants under concurrent
//! callers without external locking.

use crate::base::RoomId;
use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::reservation::Reservation;
use crate::room::{Inventory, Room};
use crate::store::ReservationStore;
use parking_lot::Mutex;
use tracing::{debug, warn};

#[derive(Debug)]
struct LedgerState {
    inventory: Inventory,
    reservations: Vec<Reservation>,
    store: ReservationStore,
}

impl LedgerState {
    fn assert_invariants(&self) {
        debug_assert!(
            self.inventory.rooms().iter().all(|room| {
                let records = self
                    .reservations
                    .iter()
                    .filter(|r| r.room == room.id())
                    .count();
                if room.is_booked() {
                    records == 1
                } else {
                    records == 0
                }
            }),
            "Invariant violated: booked flags out of sync with reservation records"
        );
    }

    /// Adopts loaded records, marking their rooms occupied. Records that
    /// reference no inventory room or a room already reconciled are dropped.
    /// Returns the number dropped.
    fn reconcile(&mut self, loaded: Vec<Reservation>) -> usize {
        let mut dropped = 0;
        for reservation in loaded {
            match self.inventory.find_mut(reservation.room) {
                None => {
                    warn!(
                        room = %reservation.room,
                        guest = %reservation.guest,
                        "dropping reservation for a room not in the inventory"
                    );
                    dropped += 1;
                }
                Some(room) if room.is_booked() => {
                    warn!(
                        room = %reservation.room,
                        guest = %reservation.guest,
                        "dropping duplicate reservation for an already occupied room"
                    );
                    dropped += 1;
                }
                Some(room) => {
                    room.set_booked(true);
                    self.reservations.push(reservation);
                }
            }
        }
        self.assert_invariants();
        dropped
    }

    fn book(&mut self, guest: String, room_id: RoomId) -> Result<Reservation, LedgerError> {
        let room = self
            .inventory
            .find_mut(room_id)
            .ok_or(LedgerError::RoomNotFound(room_id))?;
        if room.is_booked() {
            return Err(LedgerError::AlreadyBooked(room_id));
        }

        room.set_booked(true);
        let reservation = Reservation::new(guest, room_id, room.category());
        self.reservations.push(reservation.clone());
        self.assert_invariants();

        self.store.flush(&self.reservations)?;
        Ok(reservation)
    }

    fn cancel(&mut self, room_id: RoomId) -> Result<RoomId, LedgerError> {
        let room = self
            .inventory
            .find_mut(room_id)
            .ok_or(LedgerError::RoomNotFound(room_id))?;
        if !room.is_booked() {
            return Err(LedgerError::NotBooked(room_id));
        }

        room.set_booked(false);
        // Remove by value-match on the room id, not by position.
        if let Some(index) = self.reservations.iter().position(|r| r.room == room_id) {
            self.reservations.remove(index);
        }
        self.assert_invariants();

        self.store.flush(&self.reservations)?;
        Ok(room_id)
    }
}

/// Reservation ledger coordinating inventory, records, and persistence.
///
/// # Invariants
///
/// - A room is booked iff exactly one reservation record carries its id.
/// - Reservation room ids are unique across the collection.
/// - After every successful mutation the backing file mirrors the in-memory
///   collection line for line.
#[derive(Debug)]
pub struct Ledger {
    inner: Mutex<LedgerState>,
    /// Entries dropped while loading the backing file. Fixed at open time.
    skipped_on_load: usize,
}

impl Ledger {
    /// Opens a ledger: builds the inventory, loads the backing file, and
    /// reconciles room occupancy from the surviving records.
    ///
    /// Lines that fail to decode, records referencing a room outside the
    /// inventory, and records duplicating an already occupied room are
    /// dropped with a warning; [`Ledger::skipped_on_load`] reports how many.
    /// A missing backing file is a valid first run, not an error.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Persist`] - the backing file exists but could not be
    ///   read.
    pub fn open(config: LedgerConfig) -> Result<Self, LedgerError> {
        let inventory = Inventory::new(&config.rooms);
        let store = ReservationStore::new(config.data_file);
        let report = store.load()?;

        let mut state = LedgerState {
            inventory,
            reservations: Vec::with_capacity(report.reservations.len()),
            store,
        };
        let dropped = state.reconcile(report.reservations);

        let skipped_on_load = report.skipped + dropped;
        if skipped_on_load > 0 {
            warn!(
                skipped = skipped_on_load,
                path = %state.store.path().display(),
                "reservation file loaded partially"
            );
        }
        debug!(
            rooms = state.inventory.len(),
            reservations = state.reservations.len(),
            "ledger opened"
        );

        Ok(Self {
            inner: Mutex::new(state),
            skipped_on_load,
        })
    }

    /// Books a free room for a guest.
    ///
    /// On success the room is marked occupied, a confirmed record is
    /// appended, and the whole collection is flushed to the backing file
    /// before this method returns. The created record is returned for
    /// display. Guest names are taken as given; rejecting empty names is the
    /// caller's concern, and a name containing a comma corrupts its persisted
    /// line on a later reload (wire-format limitation).
    ///
    /// # Errors
    ///
    /// - [`LedgerError::RoomNotFound`] - id not in the inventory.
    /// - [`LedgerError::AlreadyBooked`] - room occupied; state unchanged.
    /// - [`LedgerError::Persist`] - flush failed. The in-memory booking is
    ///   kept and the file is stale; retry with [`Ledger::flush`] or roll
    ///   back with [`Ledger::cancel`].
    pub fn book(
        &self,
        guest: impl Into<String>,
        room: RoomId,
    ) -> Result<Reservation, LedgerError> {
        self.inner.lock().book(guest.into(), room)
    }

    /// Cancels the booking of an occupied room and returns the freed id.
    ///
    /// The room's record is removed and the collection is flushed before this
    /// method returns.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::RoomNotFound`] - id not in the inventory.
    /// - [`LedgerError::NotBooked`] - room is free; state unchanged.
    /// - [`LedgerError::Persist`] - flush failed. The in-memory cancellation
    ///   is kept and the file is stale; retry with [`Ledger::flush`] or roll
    ///   back by booking again.
    pub fn cancel(&self, room: RoomId) -> Result<RoomId, LedgerError> {
        self.inner.lock().cancel(room)
    }

    /// Looks up one room by id.
    pub fn room(&self, id: RoomId) -> Option<Room> {
        self.inner.lock().inventory.find(id).cloned()
    }

    /// Snapshot of the whole inventory in catalog order.
    pub fn rooms(&self) -> Vec<Room> {
        self.inner.lock().inventory.rooms().to_vec()
    }

    /// Looks up the active reservation for a room, if any.
    pub fn reservation_for(&self, room: RoomId) -> Option<Reservation> {
        self.inner
            .lock()
            .reservations
            .iter()
            .find(|r| r.room == room)
            .cloned()
    }

    /// Snapshot of all reservations in insertion order, most recent last.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.inner.lock().reservations.clone()
    }

    /// Rewrites the backing file from the current in-memory collection.
    ///
    /// Mutating calls flush on their own; this exists to retry after a
    /// [`LedgerError::Persist`] failure left the file stale.
    pub fn flush(&self) -> Result<(), LedgerError> {
        let state = self.inner.lock();
        state.store.flush(&state.reservations)
    }

    /// Number of entries dropped while loading the backing file at open.
    pub fn skipped_on_load(&self) -> usize {
        self.skipped_on_load
    }
}
