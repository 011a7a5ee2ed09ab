//! End-to-end editing flows against the seeded document.

use std::sync::Arc;
use vitae_document::{ContentPatch, SectionKind, SectionRegistry};
use vitae_editor::{DocumentStore, EditSession, EditorError};

fn seeded_store() -> DocumentStore {
    DocumentStore::seeded(Arc::new(SectionRegistry::standard())).unwrap()
}

#[test]
fn reorder_preserves_id_set_and_matches_move_semantics() {
    let mut store = seeded_store();
    let before: Vec<_> = store.document().ids().cloned().collect();

    store.reorder(0, 2).unwrap();

    let after: Vec<_> = store.document().ids().cloned().collect();
    assert_eq!(after.len(), before.len());

    // Same set of ids.
    for id in &before {
        assert!(after.contains(id));
    }

    // [A, B, C, D, E, F] moved (0 → 2) is [B, C, A, D, E, F].
    assert_eq!(after[0], before[1]);
    assert_eq!(after[1], before[2]);
    assert_eq!(after[2], before[0]);
    assert_eq!(after[3..], before[3..]);
}

#[test]
fn reorder_backward_matches_move_semantics() {
    let mut store = seeded_store();
    let before: Vec<_> = store.document().ids().cloned().collect();

    store.reorder(2, 0).unwrap();

    let after: Vec<_> = store.document().ids().cloned().collect();
    assert_eq!(after[0], before[2]);
    assert_eq!(after[1], before[0]);
    assert_eq!(after[2], before[1]);
    assert_eq!(after[3..], before[3..]);
}

#[test]
fn reorder_round_trip_restores_original_order() {
    let mut store = seeded_store();
    let before = store.snapshot();

    store.reorder(1, 4).unwrap();
    store.reorder(4, 1).unwrap();

    let after = store.snapshot();
    let before_ids: Vec<_> = before.ids().collect();
    let after_ids: Vec<_> = after.ids().collect();
    assert_eq!(before_ids, after_ids);
}

#[test]
fn full_editing_flow() -> anyhow::Result<()> {
    let registry = Arc::new(SectionRegistry::standard());
    let mut session = EditSession::seeded(registry)?;

    // Add a skill through the normal patch path.
    let skills_id = session
        .document()
        .sections()
        .iter()
        .find(|s| s.kind == SectionKind::Skills)
        .ok_or_else(|| anyhow::anyhow!("seed document has no skills section"))?
        .id
        .clone();
    session.store_mut().update_section_content(
        &skills_id,
        &ContentPatch::AddSkill {
            skill: "Rust".to_string(),
        },
    )?;

    // Drag the skills section to the top.
    session.begin_move(&skills_id)?;
    session.commit_move(0)?;
    assert_eq!(session.document().index_of(&skills_id), Some(0));

    // Create a fresh section, then remove it again.
    let extra = session
        .store_mut()
        .create_section(SectionKind::Certifications)?;
    assert_eq!(session.document().len(), 7);
    session.store_mut().remove_section(&extra);
    assert_eq!(session.document().len(), 6);

    // The document stayed internally consistent throughout.
    let ids: Vec<_> = session.document().ids().collect();
    let mut deduped = ids.clone();
    deduped.dedup();
    assert_eq!(ids.len(), deduped.len());
    Ok(())
}

#[test]
fn range_errors_name_the_offending_index() {
    let mut store = seeded_store();
    let len = store.document().len();

    match store.reorder(len + 3, 0) {
        Err(EditorError::Range { index, len: l }) => {
            assert_eq!(index, len + 3);
            assert_eq!(l, len);
        }
        other => panic!("expected range error, got {other:?}"),
    }
}
