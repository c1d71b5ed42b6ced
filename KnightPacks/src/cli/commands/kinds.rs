//! CLI command for listing entity types

use console::style;

use crate::compendium::EntityKind;

pub fn execute() -> anyhow::Result<()> {
    println!(
        "{:<18} {:<18} {}",
        style("KIND").bold(),
        style("ENDPOINT").bold(),
        style("OUTPUT").bold()
    );
    for kind in EntityKind::ALL {
        println!(
            "{:<18} {:<18} {}",
            kind.name(),
            kind.endpoint(),
            kind.pack_file_name("<pack>")
        );
    }
    Ok(())
}
