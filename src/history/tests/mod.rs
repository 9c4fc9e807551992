//! Unit tests for the history engine.

use crate::history::History;
use crate::model::{BarDefinition, WaybarConfig};

fn document_with_bars(count: usize) -> WaybarConfig {
    let mut config = WaybarConfig::default();
    for order in 0..count {
        config
            .bars
            .push(BarDefinition::new(Some(format!("bar-{order}")), order));
    }
    config
}

#[test]
fn undo_restores_the_recorded_snapshot() {
    let mut history = History::new();
    let before = document_with_bars(1);
    let after = document_with_bars(2);

    history.record(&before);
    let restored = history.undo(&after);

    assert_eq!(restored.as_ref().map(|c| c.bars.len()), Some(1));
    assert!(history.can_redo());
}

#[test]
fn redo_mirrors_undo() {
    let mut history = History::new();
    let before = document_with_bars(1);
    let after = document_with_bars(2);

    history.record(&before);
    let undone = history.undo(&after).unwrap_or_default();
    let redone = history.redo(&undone);

    assert_eq!(redone.map(|c| c.bars.len()), Some(2));
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn new_mutation_invalidates_redo() {
    let mut history = History::new();
    history.record(&document_with_bars(0));
    let _ = history.undo(&document_with_bars(1));
    assert!(history.can_redo());

    history.record(&document_with_bars(3));
    assert!(!history.can_redo());
}

#[test]
fn cap_evicts_oldest_snapshots() {
    let mut history = History::with_limit(50);
    for step in 0..60 {
        history.record(&document_with_bars(step));
    }

    assert_eq!(history.depths(), (50, 0));

    // Walk all the way back; the oldest surviving snapshot is step 10.
    let mut current = document_with_bars(60);
    let mut undone = 0;
    while let Some(snapshot) = history.undo(&current) {
        current = snapshot;
        undone += 1;
    }

    assert_eq!(undone, 50);
    assert_eq!(current.bars.len(), 10);
    assert!(!history.can_undo());
    assert!(history.undo(&current).is_none());
}

#[test]
fn paused_history_records_nothing() {
    let mut history = History::new();
    history.pause();
    history.record(&document_with_bars(1));
    history.record(&document_with_bars(2));

    assert!(!history.can_undo());
    assert_eq!(history.depths(), (0, 0));

    history.resume();
    history.record(&document_with_bars(3));
    assert_eq!(history.depths(), (1, 0));
}

#[test]
fn zero_limit_disables_snapshotting() {
    let mut history = History::with_limit(0);
    history.record(&document_with_bars(1));
    assert!(!history.can_undo());
}

#[test]
fn clear_drops_both_stacks() {
    let mut history = History::new();
    history.record(&document_with_bars(1));
    let _ = history.undo(&document_with_bars(2));

    history.clear();

    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
