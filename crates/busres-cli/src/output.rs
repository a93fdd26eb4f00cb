//! Output formatting module

use busres_domain::Fleet;
use busres_types::{OutputFormat, Result};

pub fn output_fleet(output_format: OutputFormat, fleet: &Fleet) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(fleet.buses())?;
        println!("{}", content);
    } else {
        println!("Available Buses:");
        for bus in fleet.buses() {
            println!("{}", bus.describe());
        }
    }

    Ok(())
}
