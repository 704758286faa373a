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

//! Error types for booking and persistence.

use crate::base::RoomId;
use thiserror::Error;

/// Booking and persistence errors.
///
/// Transition errors (`RoomNotFound`, `AlreadyBooked`, `NotBooked`) are
/// expected outcomes returned to the caller for display, never panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Room identifier is not in the inventory
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    /// Booking attempted on an occupied room
    #[error("room {0} is already booked")]
    AlreadyBooked(RoomId),

    /// Cancellation attempted on a free room
    #[error("room {0} is not booked")]
    NotBooked(RoomId),

    /// Persisted line has fewer than four fields
    #[error("malformed reservation record (expected 4 fields, found {0})")]
    MalformedRecord(usize),

    /// Persisted line's room field is not an integer
    #[error("invalid room id {0:?} in reservation record")]
    InvalidRoomId(String),

    /// Backing file could not be read or rewritten
    #[error("persistence failure: {0}")]
    Persist(String),
}

#[cfg(test)]
mod tests {
    use super::LedgerError;
    use crate::base::RoomId;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            LedgerError::RoomNotFound(RoomId(999)).to_string(),
            "room 999 not found"
        );
        assert_eq!(
            LedgerError::AlreadyBooked(RoomId(101)).to_string(),
            "room 101 is already booked"
        );
        assert_eq!(
            LedgerError::NotBooked(RoomId(101)).to_string(),
            "room 101 is not booked"
        );
        assert_eq!(
            LedgerError::MalformedRecord(2).to_string(),
            "malformed reservation record (expected 4 fields, found 2)"
        );
        assert_eq!(
            LedgerError::InvalidRoomId("abc".to_string()).to_string(),
            "invalid room id \"abc\" in reservation record"
        );
        assert_eq!(
            LedgerError::Persist("disk full".to_string()).to_string(),
            "persistence failure: disk full"
        );
    }

    #[test]
    fn errors_are_cloneable() {
        let error = LedgerError::AlreadyBooked(RoomId(101));
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
