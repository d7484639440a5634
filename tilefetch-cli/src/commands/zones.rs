//! Zones command - list the built-in named zones.

use tilefetch::zone;

use crate::error::CliError;

/// Run the zones command.
pub fn run() -> Result<(), CliError> {
    println!("{:<14} {:<24} Bounds", "Name", "Display name");
    println!("{}", "-".repeat(76));

    for zone in zone::all() {
        let bounds = zone.bounds();
        println!(
            "{:<14} {:<24} lat {} to {}, lon {} to {}",
            zone.name(),
            zone.display_name(),
            bounds.min_lat,
            bounds.max_lat,
            bounds.min_lon,
            bounds.max_lon
        );
    }

    Ok(())
}
