//! Cache coverage report command

use crate::{CacheKind, CacheStore, Result};

/// Handle the status command
pub fn handle_status(json: bool) -> Result<()> {
    let store = CacheStore::new()?;

    let mut statuses = Vec::new();
    for kind in CacheKind::ALL {
        statuses.push(store.status(kind)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    for status in &statuses {
        if !status.exists {
            println!("⚠ {}: no cache file", status.kind);
            continue;
        }
        match (status.seasons.iter().next(), status.seasons.iter().next_back()) {
            (Some(first), Some(last)) => println!(
                "✓ {}: {} rows, seasons {} through {}, {} entit{}",
                status.kind,
                status.rows,
                first,
                last,
                status.entities.len(),
                if status.entities.len() == 1 { "y" } else { "ies" }
            ),
            _ => println!("✓ {}: empty table", status.kind),
        }
    }

    Ok(())
}
