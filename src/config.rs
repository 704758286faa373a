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

//! Ledger configuration.
//!
//! A ledger is configured with the backing file path and the room ranges that
//! make up its inventory. [`LedgerConfig::default`] supplies the standard
//! hotel layout.

use std::path::{Path, PathBuf};

use crate::room::RoomRange;

/// Default backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "reservations.txt";

/// The standard hotel layout: ten Standard rooms, five Deluxe, three Suites.
pub fn default_rooms() -> Vec<RoomRange> {
    vec![
        RoomRange::new(101, 110, "Standard"),
        RoomRange::new(201, 205, "Deluxe"),
        RoomRange::new(301, 303, "Suite"),
    ]
}

/// Construction-time configuration for one ledger instance.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub data_file: PathBuf,
    pub rooms: Vec<RoomRange>,
}

impl LedgerConfig {
    pub fn new(data_file: impl Into<PathBuf>, rooms: Vec<RoomRange>) -> Self {
        Self {
            data_file: data_file.into(),
            rooms,
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            rooms: default_rooms(),
        }
    }
}
