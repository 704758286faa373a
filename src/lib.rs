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

//! # Room Ledger
//!
//! This library provides an in-memory room inventory and reservation ledger
//! with flat-file persistence: bookings and cancellations mutate the ledger
//! and synchronously rewrite the backing file, and reopening a ledger
//! reconciles room occupancy from the persisted records.
//!
//! ## Core Components
//!
//! - [`Ledger`]: Central coordinator owning the inventory and the
//!   reservation collection
//! - [`Inventory`] / [`Room`]: The fixed catalog of bookable rooms
//! - [`Reservation`]: One active booking record
//! - [`ReservationStore`]: Flat-file persistence with skip-and-report loading
//! - [`LedgerError`]: Error types for booking and persistence failures
//!
//! ## Example
//!
//! ```
//! use room_ledger_rs::{Ledger, LedgerConfig, RoomId, RoomRange};
//!
//! let file = std::env::temp_dir().join("room_ledger_lib_doc.txt");
//! # let _ = std::fs::remove_file(&file);
//! let config = LedgerConfig::new(&file, vec![RoomRange::new(101, 103, "Standard")]);
//! let ledger = Ledger::open(config).unwrap();
//!
//! // Book a room and read the confirmation back
//! let reservation = ledger.book("Alice", RoomId(101)).unwrap();
//! assert_eq!(reservation.guest, "Alice");
//! assert!(ledger.room(RoomId(101)).unwrap().is_booked());
//! # std::fs::remove_file(&file).unwrap();
//! ```
//!
//! ## Thread Safety
//!
//! The ledger keeps all mutable state behind a single mutex; every booking
//! runs its inventory check, mutation, and persistence flush as one critical
//! section, so a shared `Arc<Ledger>` stays consistent under concurrent use.

mod base;
mod config;
pub mod error;
mod ledger;
mod reservation;
mod room;
pub mod store;

pub use base::RoomId;
pub use config::{DEFAULT_DATA_FILE, LedgerConfig, default_rooms};
pub use error::LedgerError;
pub use ledger::Ledger;
pub use reservation::Reservation;
pub use room::{Inventory, Room, RoomRange};
pub use store::{LoadReport, ReservationStore, decode};
