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

use clap::{Parser, Subcommand};
use room_ledger_rs::{DEFAULT_DATA_FILE, Ledger, LedgerConfig, RoomId, default_rooms};
use std::path::PathBuf;
use std::process;

/// Room Ledger - manage room reservations from the command line
///
/// Opens the reservation file, applies one command, and prints the outcome.
/// Mutations are persisted back to the file before the process exits.
///
/// Example: cargo run -- book Alice 101
#[derive(Parser, Debug)]
#[command(name = "room-ledger-rs")]
#[command(about = "A room reservation ledger backed by a flat file", long_about = None)]
struct Args {
    /// Path to the reservation file
    #[arg(long = "file", value_name = "FILE", default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Book a room for a guest
    Book {
        /// Guest name (must not be blank)
        guest: String,
        /// Room number
        room: u32,
    },
    /// Cancel the reservation held on a room
    Cancel {
        /// Room number
        room: u32,
    },
    /// List the rooms with their occupancy
    Rooms {
        /// Only show rooms with this category label
        #[arg(long, value_name = "LABEL")]
        category: Option<String>,
    },
    /// List the reservations in booking order
    Reservations,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = LedgerConfig::new(args.file, default_rooms());
    let ledger = match Ledger::open(config) {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    if ledger.skipped_on_load() > 0 {
        eprintln!(
            "Warning: {} entries in the reservation file could not be loaded",
            ledger.skipped_on_load()
        );
    }

    if let Err(e) = run(&ledger, args.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Applies one command to the ledger.
///
/// Blank guest names are rejected here, at the presentation boundary; the
/// ledger itself accepts any name.
fn run(ledger: &Ledger, command: Command) -> Result<(), String> {
    match command {
        Command::Book { guest, room } => {
            let guest = guest.trim();
            if guest.is_empty() {
                return Err("guest name must not be blank".to_string());
            }
            let reservation = ledger.book(guest, RoomId(room)).map_err(|e| e.to_string())?;
            println!(
                "Booking successful! Room {} reserved for {}.",
                reservation.room, reservation.guest
            );
        }
        Command::Cancel { room } => {
            let freed = ledger.cancel(RoomId(room)).map_err(|e| e.to_string())?;
            println!("Reservation for room {freed} has been cancelled.");
        }
        Command::Rooms { category } => {
            for room in ledger.rooms() {
                if category.as_deref().is_none_or(|c| room.category() == c) {
                    let state = if room.is_booked() { "booked" } else { "free" };
                    println!("{:<6} {:<10} {state}", room.id().0, room.category());
                }
            }
        }
        Command::Reservations => {
            for r in ledger.reservations() {
                println!("{:<6} {:<10} {:<6} {}", r.room.0, r.category, r.payment, r.guest);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_ledger_rs::RoomRange;
    use std::fs;

    fn tmp_ledger(name: &str) -> Ledger {
        let dir = std::env::temp_dir().join("room_ledger_cli_tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let _ = fs::remove_file(&path);
        let config = LedgerConfig::new(path, vec![RoomRange::new(101, 103, "Standard")]);
        Ledger::open(config).unwrap()
    }

    #[test]
    fn book_command_updates_ledger() {
        let ledger = tmp_ledger("book.txt");

        run(
            &ledger,
            Command::Book {
                guest: "Alice".to_string(),
                room: 101,
            },
        )
        .unwrap();

        assert!(ledger.room(RoomId(101)).unwrap().is_booked());
        assert_eq!(ledger.reservation_for(RoomId(101)).unwrap().guest, "Alice");
    }

    #[test]
    fn book_command_trims_guest_name() {
        let ledger = tmp_ledger("trim.txt");

        run(
            &ledger,
            Command::Book {
                guest: "  Alice  ".to_string(),
                room: 101,
            },
        )
        .unwrap();

        assert_eq!(ledger.reservation_for(RoomId(101)).unwrap().guest, "Alice");
    }

    #[test]
    fn blank_guest_name_is_rejected() {
        let ledger = tmp_ledger("blank.txt");

        let result = run(
            &ledger,
            Command::Book {
                guest: "   ".to_string(),
                room: 101,
            },
        );

        assert_eq!(result, Err("guest name must not be blank".to_string()));
        assert!(!ledger.room(RoomId(101)).unwrap().is_booked());
    }

    #[test]
    fn cancel_command_frees_room() {
        let ledger = tmp_ledger("cancel.txt");
        ledger.book("Alice", RoomId(102)).unwrap();

        run(&ledger, Command::Cancel { room: 102 }).unwrap();

        assert!(!ledger.room(RoomId(102)).unwrap().is_booked());
        assert!(ledger.reservations().is_empty());
    }

    #[test]
    fn booking_errors_surface_as_messages() {
        let ledger = tmp_ledger("errors.txt");
        ledger.book("Alice", RoomId(101)).unwrap();

        let result = run(
            &ledger,
            Command::Book {
                guest: "Bob".to_string(),
                room: 101,
            },
        );

        assert_eq!(result, Err("room 101 is already booked".to_string()));
    }
}
