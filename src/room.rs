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

//! Room inventory.
//!
//! The catalog of bookable rooms is fixed at construction from id ranges and
//! never grows or shrinks afterwards; only the occupancy flag of each room
//! changes, and only through the ledger.
//!
//! # Example
//!
//! ```
//! use room_ledger_rs::{Inventory, RoomId, RoomRange};
//!
//! let inventory = Inventory::new(&[RoomRange::new(101, 103, "Standard")]);
//! assert_eq!(inventory.len(), 3);
//! assert!(!inventory.find(RoomId(101)).unwrap().is_booked());
//! ```

use crate::base::RoomId;

/// One bookable room.
///
/// `id` and `category` are immutable for the life of the inventory; `booked`
/// mirrors the presence of a reservation record and is mutated exclusively by
/// the ledger's transition functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    category: String,
    booked: bool,
}

impl Room {
    fn new(id: RoomId, category: &str) -> Self {
        Self {
            id,
            category: category.to_string(),
            booked: false,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_booked(&self) -> bool {
        self.booked
    }

    pub(crate) fn set_booked(&mut self, booked: bool) {
        self.booked = booked;
    }
}

/// Inclusive id range sharing one category label.
///
/// The triple `(start, end, category)` expands to one room per id in
/// `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRange {
    pub start: u32,
    pub end: u32,
    pub category: String,
}

impl RoomRange {
    pub fn new(start: u32, end: u32, category: impl Into<String>) -> Self {
        Self {
            start,
            end,
            category: category.into(),
        }
    }
}

/// Ordered catalog of rooms.
///
/// Rooms appear in range order, ascending id within each range. Ordering
/// matters for presentation only; lookups go by id.
#[derive(Debug)]
pub struct Inventory {
    rooms: Vec<Room>,
}

impl Inventory {
    /// Builds the catalog from range triples, every room initially free.
    ///
    /// Ranges producing duplicate ids are a configuration defect, not a
    /// runtime condition; construction asserts uniqueness in debug builds.
    pub fn new(ranges: &[RoomRange]) -> Self {
        let mut rooms = Vec::new();
        for range in ranges {
            for id in range.start..=range.end {
                rooms.push(Room::new(RoomId(id), &range.category));
            }
        }
        let inventory = Self { rooms };
        inventory.assert_invariants();
        inventory
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.rooms
                .iter()
                .enumerate()
                .all(|(i, room)| !self.rooms[..i].iter().any(|r| r.id == room.id)),
            "Invariant violated: duplicate room id in inventory"
        );
    }

    /// Looks up a room by id. At most one match exists by construction.
    pub fn find(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id == id)
    }

    /// All rooms in catalog order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
