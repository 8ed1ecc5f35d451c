//! Item source loading (JSON and CSV)

use crate::domain::model::Item;
use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;

/// Load the ordered item sequence from a JSON or CSV file.
///
/// The format is chosen by extension: `.csv` expects a header row with the
/// columns `item,weight,dimensions,action`; anything else is parsed as a
/// JSON array of objects with those fields. Source order is preserved.
///
/// A missing or unreadable file is a resource error; a structurally invalid
/// record (missing field, non-numeric weight) fails the load immediately.
/// Dimensions strings are not parsed here - the simulator parses them per
/// item, so a malformed dimensions string past the halt point never
/// surfaces.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        load_items_csv(path)
    } else {
        load_items_json(path)
    }
}

fn load_items_json(path: &Path) -> Result<Vec<Item>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Format(format!("{}: {}", path.display(), e)))
}

fn load_items_csv(path: &Path) -> Result<Vec<Item>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut items = Vec::new();
    for (row_idx, record) in reader.deserialize().enumerate() {
        // +2: row_idx is 0-based and the header is row 1
        let item: Item = record.map_err(|e| {
            Error::Format(format!("{} row {}: {}", path.display(), row_idx + 2, e))
        })?;
        items.push(item);
    }

    Ok(items)
}
