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

//! Flat-file persistence for the reservation collection.
//!
//! The backing file holds one reservation per line, fields comma-joined in
//! the order `guest,room,category,payment`, no header, no quoting. Quoting is
//! disabled in both directions so the wire format is the raw comma join; a
//! guest name containing a comma therefore corrupts that line on reload.
//! Known limitation, kept for compatibility with existing files.
//!
//! Every flush rewrites the whole file so disk mirrors memory after each
//! mutation. Loading tolerates damaged lines: each one is skipped with a
//! warning and the skipped count is reported alongside the surviving records.

use crate::base::RoomId;
use crate::error::LedgerError;
use crate::reservation::Reservation;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of reading the backing file.
#[derive(Debug)]
pub struct LoadReport {
    /// Records that decoded cleanly, in file order.
    pub reservations: Vec<Reservation>,
    /// Lines skipped because they could not be decoded.
    pub skipped: usize,
}

/// Decodes one persisted record into a [`Reservation`].
///
/// A record needs at least four fields; fields past the fourth are ignored.
/// The second field must parse as an unsigned integer room id. Guest,
/// category, and payment text are taken verbatim, untrimmed.
pub fn decode(record: &StringRecord) -> Result<Reservation, LedgerError> {
    if record.len() < 4 {
        return Err(LedgerError::MalformedRecord(record.len()));
    }
    let room = record[1]
        .parse::<u32>()
        .map_err(|_| LedgerError::InvalidRoomId(record[1].to_string()))?;
    Ok(Reservation {
        guest: record[0].to_string(),
        room: RoomId(room),
        category: record[2].to_string(),
        payment: record[3].to_string(),
    })
}

/// File-backed store for the full reservation collection.
#[derive(Debug, Clone)]
pub struct ReservationStore {
    path: PathBuf,
}

impl ReservationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every decodable record from the backing file.
    ///
    /// A missing file is the valid empty state of a first run, not an error.
    /// Damaged lines are skipped with a warning and counted in the report;
    /// one corrupt line never discards the rest of the ledger. An I/O
    /// failure while reading is not a skip: it fails the whole load with
    /// [`LedgerError::Persist`].
    pub fn load(&self) -> Result<LoadReport, LedgerError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(LoadReport {
                    reservations: Vec::new(),
                    skipped: 0,
                });
            }
            Err(e) => {
                return Err(LedgerError::Persist(format!("read {}: {e}", self.path.display())));
            }
        };

        let mut rdr = ReaderBuilder::new()
            .has_headers(false) // Every line is a record
            .quoting(false) // Raw comma split, quotes are literal text
            .flexible(true) // Field count is validated in decode
            .from_reader(file);

        let mut reservations = Vec::new();
        let mut skipped = 0;
        for (index, result) in rdr.records().enumerate() {
            let line = index + 1;
            let record = match result {
                Ok(record) => record,
                // Read failures are storage errors, not corrupt lines
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                    return Err(LedgerError::Persist(format!("read {}: {e}", self.path.display())));
                }
                Err(e) => {
                    warn!(line, error = %e, "skipping unreadable reservation line");
                    skipped += 1;
                    continue;
                }
            };
            match decode(&record) {
                Ok(reservation) => reservations.push(reservation),
                Err(e) => {
                    warn!(line, error = %e, "skipping malformed reservation line");
                    skipped += 1;
                }
            }
        }

        debug!(
            records = reservations.len(),
            skipped,
            path = %self.path.display(),
            "loaded reservation file"
        );
        Ok(LoadReport {
            reservations,
            skipped,
        })
    }

    /// Overwrites the backing file with the given records, one line each, in
    /// the order given. Full rewrite, not append: after a successful flush the
    /// file is an exact mirror of the in-memory collection.
    pub fn flush(&self, reservations: &[Reservation]) -> Result<(), LedgerError> {
        let file = File::create(&self.path).map_err(|e| {
            LedgerError::Persist(format!("rewrite {}: {e}", self.path.display()))
        })?;

        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never) // Raw comma join, even for text containing commas
            .from_writer(file);

        for reservation in reservations {
            wtr.serialize(reservation).map_err(|e| {
                LedgerError::Persist(format!("rewrite {}: {e}", self.path.display()))
            })?;
        }
        wtr.flush()
            .map_err(|e| LedgerError::Persist(format!("rewrite {}: {e}", self.path.display())))?;

        debug!(records = reservations.len(), path = %self.path.display(), "rewrote reservation file");
        Ok(())
    }
}
