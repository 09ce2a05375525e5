#![allow(dead_code)]

use parcel_core::model::parcel::now_rfc3339;
use parcel_core::{ClientId, Parcel, ParcelStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::Connection;

pub const MAX_CLIENT_ID: ClientId = 10_000_000;

/// Seeded source of test parcels; each test owns its own instance.
pub struct ParcelFactory {
    rng: StdRng,
}

impl ParcelFactory {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn client(&mut self) -> ClientId {
        self.rng.gen_range(1..MAX_CLIENT_ID)
    }

    pub fn parcel(&mut self) -> Parcel {
        let client = self.client();
        self.parcel_for(client)
    }

    pub fn parcel_for(&mut self, client: ClientId) -> Parcel {
        let house = self.rng.gen_range(1..500);
        Parcel::registered_at(client, format!("test address {house}"), now_rfc3339())
    }

    pub fn status(&mut self) -> ParcelStatus {
        match self.rng.gen_range(0..3) {
            0 => ParcelStatus::Registered,
            1 => ParcelStatus::Sent,
            _ => ParcelStatus::Delivered,
        }
    }
}

/// Connection prepared the way a caller without migrations would do it.
pub fn hand_made_parcel_table() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE parcel (
            number INTEGER PRIMARY KEY AUTOINCREMENT,
            client INTEGER,
            status TEXT,
            address TEXT,
            created_at TEXT
        );",
    )
    .unwrap();
    conn
}
