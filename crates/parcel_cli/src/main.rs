//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `parcel_core` linkage, configuration and database bootstrap.
//! - Run one register/advance round trip and print the client's parcels.

use log::error;
use parcel_core::{CoreConfig, ParcelService, SqliteParcelRepository};
use std::error::Error;
use std::process::ExitCode;

const DEMO_CLIENT: i64 = 1;
const DEMO_ADDRESS: &str = "Main St 1";

fn main() -> ExitCode {
    println!("parcel_core ping={}", parcel_core::ping());
    println!("parcel_core version={}", parcel_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env();
    if let Some(log_dir) = &config.log_dir {
        parcel_core::init_logging(&config.log_level, log_dir)?;
    }

    let conn = config.open_db()?;
    let repo = SqliteParcelRepository::try_new(&conn)?;
    let service = ParcelService::new(repo);

    let parcel = service.register(DEMO_CLIENT, DEMO_ADDRESS)?;
    let status = service.next_status(parcel.number)?;
    println!("registered parcel={} now={status}", parcel.number);

    for parcel in service.client_parcels(DEMO_CLIENT)? {
        println!(
            "parcel={} client={} status={} address={} created_at={}",
            parcel.number, parcel.client, parcel.status, parcel.address, parcel.created_at
        );
    }

    Ok(())
}
