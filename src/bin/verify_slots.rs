// Small dev utility: list the slot labels of every cached destination file and
// report the ones the scheduler cannot parse.
//
// Usage:
//   cargo run --bin verify_slots -- [cache_dir]
//
// Exits non-zero when any label fails to parse.

use std::path::PathBuf;
use teltarif_lcr::engine::SlotLabel;
use teltarif_lcr::importer::{list_snapshot_files, load_destination_file};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    teltarif_lcr::logging::init(0, false);

    let dir = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "cache".to_string()),
    );

    let mut failures = 0usize;
    for file in list_snapshot_files(&dir)? {
        let tariffs = load_destination_file(&file)?;
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        for label in tariffs.providers.keys() {
            match SlotLabel::parse(label) {
                Ok(slot) => println!(
                    "{}: '{}' -> tag={} {:02}:{:02}",
                    name, label, slot.day, slot.hour, slot.minute
                ),
                Err(err) => {
                    failures += 1;
                    println!("{}: FAILED {}", name, err);
                }
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} slot label(s) could not be parsed", failures).into());
    }
    Ok(())
}
