//! Renderer behavior against the seed document.

use crate::fragment::FragmentBody;
use crate::renderer::{RenderError, Renderer};
use std::sync::Arc;
use vitae_document::{seed_sections, SectionKind, SectionRegistry};

fn renderer() -> Renderer {
    Renderer::new(Arc::new(SectionRegistry::standard()))
}

#[test]
fn render_is_idempotent() {
    let sections = seed_sections();
    let renderer = renderer();

    let first = renderer.render(&sections).unwrap();
    let second = renderer.render(&sections).unwrap();

    assert_eq!(first, second);
}

#[test]
fn render_produces_one_fragment_per_section_in_order() {
    let sections = seed_sections();
    let preview = renderer().render(&sections).unwrap();

    assert_eq!(preview.len(), sections.len());
    for (section, fragment) in sections.iter().zip(&preview.fragments) {
        assert_eq!(fragment.section_id, section.id);
        assert_eq!(fragment.title, section.title);
    }
}

#[test]
fn personal_fragment_joins_contact_line() {
    let sections = seed_sections();
    let preview = renderer().render(&sections).unwrap();

    let FragmentBody::Personal { name, contact, .. } = &preview.fragments[0].body else {
        panic!("first seed section should render a personal body");
    };
    assert_eq!(name, "John Doe");
    assert_eq!(
        contact,
        "john.doe@email.com • +1 (555) 123-4567 • San Francisco, CA"
    );
}

#[test]
fn skills_render_as_badges() {
    let sections = seed_sections();
    let preview = renderer().render(&sections).unwrap();

    let skills_index = sections
        .iter()
        .position(|s| s.kind == SectionKind::Skills)
        .unwrap();
    let FragmentBody::Badges { items } = &preview.fragments[skills_index].body else {
        panic!("skills should render as badges");
    };
    assert_eq!(items.len(), 6);
    assert_eq!(items[0], "JavaScript");
}

#[test]
fn experience_entries_keep_position_and_company() {
    let sections = seed_sections();
    let preview = renderer().render(&sections).unwrap();

    let exp_index = sections
        .iter()
        .position(|s| s.kind == SectionKind::Experience)
        .unwrap();
    let FragmentBody::Entries { entries } = &preview.fragments[exp_index].body else {
        panic!("experience should render as entries");
    };
    assert_eq!(entries[0].heading, "Senior Software Engineer");
    assert_eq!(entries[0].subheading.as_deref(), Some("Tech Corp"));
    assert_eq!(entries[0].meta.as_deref(), Some("2022 - Present"));
}

#[test]
fn project_entries_carry_technology_tags() {
    let sections = seed_sections();
    let preview = renderer().render(&sections).unwrap();

    let proj_index = sections
        .iter()
        .position(|s| s.kind == SectionKind::Projects)
        .unwrap();
    let FragmentBody::Entries { entries } = &preview.fragments[proj_index].body else {
        panic!("projects should render as entries");
    };
    assert_eq!(entries[0].tags, vec!["React", "Node.js", "MongoDB"]);
}

#[test]
fn unregistered_kind_is_a_configuration_error() {
    let renderer = Renderer::new(Arc::new(SectionRegistry::empty()));
    let err = renderer.render(&seed_sections()).unwrap_err();
    assert!(matches!(err, RenderError::Configuration(_)));
}

#[test]
fn empty_document_renders_empty_preview() {
    let preview = renderer().render(&[]).unwrap();
    assert!(preview.is_empty());
}
