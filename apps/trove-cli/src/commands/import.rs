//! `trove import`: bulk import from a directory of markdown files.

use std::fs;
use std::path::Path;

use trove_core::{markdown, reconcile, Outcome, Trove};

use super::save_and_commit;

pub fn run(store: &Trove, dir: &Path, commit: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = store.load()?;

    let mut inserted = 0usize;
    let mut merged = 0usize;

    for file in markdown::markdown_files(dir)? {
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        println!("Parsing {name}...");

        let content = fs::read_to_string(&file)?;
        let added = markdown::added_from_filename(&name);
        for link in markdown::extract_links(&content) {
            match reconcile(&mut records, link.into_record(added)) {
                Outcome::Inserted => inserted += 1,
                Outcome::Merged => merged += 1,
                Outcome::Skipped => {}
            }
        }
    }

    println!("\nFound {inserted} new link(s), merged tags into {merged} existing");

    if inserted > 0 || merged > 0 {
        save_and_commit(
            store,
            &records,
            &format!("Import {inserted} link(s) from markdown"),
            commit,
        )?;
        println!("Updated {}", store.path().display());
    }

    Ok(())
}
