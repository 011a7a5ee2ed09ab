//! Seed sections a fresh builder surface opens on.

use crate::content::{
    CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, SectionContent,
};
use crate::section::{Section, SectionKind};

/// Sample six-section document: personal, experience, education, skills,
/// projects, certifications — in that order.
pub fn seed_sections() -> Vec<Section> {
    vec![
        Section::new(
            SectionKind::Personal,
            "Personal Information",
            SectionContent::Personal {
                name: "John Doe".to_string(),
                email: "john.doe@email.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                summary: "Experienced software engineer with 5+ years in full-stack development..."
                    .to_string(),
            },
        ),
        Section::new(
            SectionKind::Experience,
            "Work Experience",
            SectionContent::Experience {
                entries: vec![ExperienceEntry {
                    company: "Tech Corp".to_string(),
                    position: "Senior Software Engineer".to_string(),
                    duration: "2022 - Present".to_string(),
                    description:
                        "Led development of web applications using React and Node.js..."
                            .to_string(),
                }],
            },
        ),
        Section::new(
            SectionKind::Education,
            "Education",
            SectionContent::Education {
                entries: vec![EducationEntry {
                    institution: "University of Technology".to_string(),
                    degree: "Bachelor of Computer Science".to_string(),
                    duration: "2018 - 2022".to_string(),
                    gpa: "3.8/4.0".to_string(),
                }],
            },
        ),
        Section::new(
            SectionKind::Skills,
            "Skills",
            SectionContent::Skills {
                skills: vec![
                    "JavaScript".to_string(),
                    "React".to_string(),
                    "Node.js".to_string(),
                    "Python".to_string(),
                    "SQL".to_string(),
                    "AWS".to_string(),
                ],
            },
        ),
        Section::new(
            SectionKind::Projects,
            "Projects",
            SectionContent::Projects {
                entries: vec![ProjectEntry {
                    name: "E-commerce Platform".to_string(),
                    description:
                        "Built a full-stack e-commerce platform with React and Express..."
                            .to_string(),
                    technologies: vec![
                        "React".to_string(),
                        "Node.js".to_string(),
                        "MongoDB".to_string(),
                    ],
                }],
            },
        ),
        Section::new(
            SectionKind::Certifications,
            "Certifications",
            SectionContent::Certifications {
                entries: vec![CertificationEntry {
                    name: "AWS Solutions Architect".to_string(),
                    issuer: "Amazon Web Services".to_string(),
                    date: "2023".to_string(),
                }],
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SectionRegistry;

    #[test]
    fn test_seed_has_six_sections_in_order() {
        let sections = seed_sections();
        let kinds: Vec<_> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Personal,
                SectionKind::Experience,
                SectionKind::Education,
                SectionKind::Skills,
                SectionKind::Projects,
                SectionKind::Certifications,
            ]
        );
    }

    #[test]
    fn test_seed_content_satisfies_every_schema() {
        let registry = SectionRegistry::standard();
        for section in seed_sections() {
            let schema = registry.schema_for(section.kind).unwrap();
            schema.validate(&section.content).unwrap();
            assert_eq!(section.content.kind(), section.kind);
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let sections = seed_sections();
        for (i, a) in sections.iter().enumerate() {
            for b in &sections[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
