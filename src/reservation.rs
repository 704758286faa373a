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

//! Reservation records.
//!
//! One record per active booking. Field order matches the persisted line
//! layout `guest,room,category,payment`.

use crate::base::RoomId;
use serde::Serialize;

/// One active booking linking a guest to a room.
///
/// Created by a successful booking, removed by a successful cancellation.
/// `category` is a copy of the room's category at booking time; `payment` is
/// an opaque label fixed to [`Reservation::PAID`] when the ledger creates the
/// record and round-tripped verbatim through the backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub guest: String,
    pub room: RoomId,
    pub category: String,
    pub payment: String,
}

impl Reservation {
    /// Payment label recorded at booking time.
    pub const PAID: &'static str = "Paid";

    /// Creates a confirmed reservation for a freshly booked room.
    pub fn new(guest: impl Into<String>, room: RoomId, category: impl Into<String>) -> Self {
        Self {
            guest: guest.into(),
            room,
            category: category.into(),
            payment: Self::PAID.to_string(),
        }
    }
}
