//! End-to-end tests for the loading pipeline: load items, simulate, render.

use std::path::{Path, PathBuf};
use tempfile::tempdir;
use truckload::domain::model::{CapacityProfile, CapacityProvider, OverrideProvider, SpecTableProvider};
use truckload::domain::service::{simulate_loading, RunOutcome};
use truckload::error::Error;
use truckload::export::render_progress_image;
use truckload::infrastructure::load_items;

fn write_items(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write items file");
    path
}

#[test]
fn test_full_pipeline_all_items_fit() {
    let dir = tempdir().unwrap();
    let items_path = write_items(
        dir.path(),
        "data.json",
        r#"[
            {"item": "pallet-1", "weight": 400, "dimensions": "10x10x10", "action": "load"},
            {"item": "pallet-2", "weight": 300, "dimensions": "10x20x30", "action": "load"},
            {"item": "crate-9", "weight": 150.5, "dimensions": "5x5x5", "action": "load"}
        ]"#,
    );

    let items = load_items(&items_path).unwrap();
    let run = simulate_loading("325101", &SpecTableProvider, &items).unwrap();

    assert_eq!(run.outcome, RunOutcome::Completed);
    assert_eq!(run.ledger.len(), 3);
    assert_eq!(run.current_weight, 850.5);
    assert_eq!(run.current_volume, 1000 + 6000 + 125);

    let steps: Vec<u32> = run.ledger.iter().map(|e| e.step).collect();
    assert_eq!(steps, vec![1, 2, 3]);

    let image_path = dir.path().join("truck_progress_overview.png");
    render_progress_image(&run, &image_path).unwrap();
    assert!(image_path.exists());
    assert!(image::open(&image_path).is_ok());
}

#[test]
fn test_full_pipeline_halts_at_capacity() {
    let dir = tempdir().unwrap();
    let items_path = write_items(
        dir.path(),
        "data.json",
        r#"[
            {"item": "box-1", "weight": 400, "dimensions": "10x10x10", "action": "load"},
            {"item": "box-2", "weight": 400, "dimensions": "10x10x10", "action": "load"},
            {"item": "box-3", "weight": 400, "dimensions": "10x10x10", "action": "load"}
        ]"#,
    );

    let items = load_items(&items_path).unwrap();
    let run = simulate_loading("325101", &SpecTableProvider, &items).unwrap();

    // 400 + 400 fits under 1000 kg; the third box would reach 1200.
    assert_eq!(run.ledger.len(), 2);
    assert_eq!(
        run.outcome,
        RunOutcome::HaltedAtCapacity {
            step: 3,
            item: "box-3".to_string()
        }
    );

    // The halted run still produces the artifact.
    let image_path = dir.path().join("truck_progress_overview.png");
    render_progress_image(&run, &image_path).unwrap();
    assert!(image_path.exists());
}

#[test]
fn test_first_item_exceeding_volume_yields_empty_ledger_with_artifact() {
    let dir = tempdir().unwrap();
    let items_path = write_items(
        dir.path(),
        "data.json",
        r#"[{"item": "monolith", "weight": 10, "dimensions": "100x100x100", "action": "load"}]"#,
    );

    let items = load_items(&items_path).unwrap();
    let run = simulate_loading("325101", &SpecTableProvider, &items).unwrap();

    assert!(run.ledger.is_empty());
    assert_eq!(run.current_weight, 0.0);
    assert_eq!(run.current_volume, 0);
    assert_eq!(
        run.outcome,
        RunOutcome::HaltedAtCapacity {
            step: 1,
            item: "monolith".to_string()
        }
    );

    let image_path = dir.path().join("empty_overview.png");
    render_progress_image(&run, &image_path).unwrap();
    assert!(image_path.exists());
}

#[test]
fn test_csv_source() {
    let dir = tempdir().unwrap();
    let items_path = write_items(
        dir.path(),
        "items.csv",
        "item,weight,dimensions,action\npallet-1,400,10x10x10,load\npallet-2,400,10x10x10,load\n",
    );

    let items = load_items(&items_path).unwrap();
    let run = simulate_loading("325101", &SpecTableProvider, &items).unwrap();

    assert_eq!(run.outcome, RunOutcome::Completed);
    assert_eq!(run.ledger.len(), 2);
    assert_eq!(run.ledger[1].filled_capacity, "80.00% Weight, 10.00% Volume");
}

#[test]
fn test_malformed_record_aborts_before_rendering() {
    let dir = tempdir().unwrap();
    let items_path = write_items(
        dir.path(),
        "data.json",
        r#"[{"item": "ok", "weight": 10, "dimensions": "1x1x1", "action": "load"},
            {"item": "bad", "weight": 10, "dimensions": "1x1", "action": "load"}]"#,
    );

    let items = load_items(&items_path).unwrap();
    let err = simulate_loading("325101", &SpecTableProvider, &items).unwrap_err();
    assert!(matches!(err, Error::InvalidDimensions { .. }));
}

#[test]
fn test_capacity_overrides_apply_to_registered_vehicle() {
    let provider = OverrideProvider {
        inner: SpecTableProvider,
        max_weight: Some(500.0),
        max_volume: Some(1500),
    };

    assert_eq!(
        provider.profile("325101"),
        Some(CapacityProfile {
            max_weight: 500.0,
            max_volume: 1500
        })
    );

    let items = vec![truckload::domain::model::Item {
        item: "pallet-1".to_string(),
        weight: 600.0,
        dimensions: "10x10x10".to_string(),
        action: "load".to_string(),
    }];

    // 600 kg fits the stock profile but not the overridden 500 kg limit.
    let run = simulate_loading("325101", &provider, &items).unwrap();
    assert_eq!(
        run.outcome,
        RunOutcome::HaltedAtCapacity {
            step: 1,
            item: "pallet-1".to_string()
        }
    );
}
