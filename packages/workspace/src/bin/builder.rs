//! Demo driver: opens a builder surface on the seed document, runs one
//! assistant exchange against the canned generator, applies a suggestion,
//! then saves and exports through the in-memory collaborators.

use std::sync::Arc;
use std::time::Duration;
use vitae_assistant::{CannedGenerator, SuggestedEdit};
use vitae_document::{ContentPatch, SectionKind, SectionRegistry};
use vitae_evaluator::FragmentBody;
use vitae_workspace::{
    BuilderSurface, InMemoryRepository, JsonExporter, StaticIdentity, UserId,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let mut latency_ms: u64 = 400;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--latency-ms" => {
                if i + 1 < args.len() {
                    latency_ms = args[i + 1].parse().expect("Invalid latency");
                    i += 2;
                } else {
                    eprintln!("--latency-ms requires a value");
                    std::process::exit(1);
                }
            }
            other => {
                eprintln!("Unknown argument: {other}");
                std::process::exit(1);
            }
        }
    }

    let registry = Arc::new(SectionRegistry::standard());
    let generator = Arc::new(CannedGenerator::with_latency(Duration::from_millis(
        latency_ms,
    )));
    let identity = Arc::new(StaticIdentity(UserId("demo-user".to_string())));

    let mut surface = BuilderSurface::open(registry, generator, identity)?;

    println!("== Preview ==");
    print_preview(&surface);

    // One assistant exchange. Edits stay live while the request is pending.
    surface.submit_prompt("Improve my work experience section")?;
    let skills_id = surface
        .document()
        .sections()
        .iter()
        .find(|s| s.kind == SectionKind::Skills)
        .expect("seed document has a skills section")
        .id
        .clone();
    surface.update_section(
        &skills_id,
        &ContentPatch::AddSkill {
            skill: "Rust".to_string(),
        },
    )?;
    surface.process_next_event().await;

    println!("\n== Conversation ==");
    for message in surface.conversation() {
        println!("[{}] {}", message.role.as_str(), message.text);
    }

    surface.apply_suggestion(&SuggestedEdit {
        target: skills_id,
        patch: ContentPatch::AddSkill {
            skill: "Leadership".to_string(),
        },
    })?;

    let repository = InMemoryRepository::new();
    let receipt = surface.save(&repository).await?;
    let artifact = surface.export(&JsonExporter).await?;

    println!("\n== Result ==");
    println!(
        "saved document {} at version {}",
        receipt.document_id, receipt.version
    );
    println!("exported {} ({} bytes)", artifact.file_name, artifact.bytes.len());

    for notice in surface.drain_notices() {
        println!("notice: {}", notice.message);
    }

    surface.close();
    Ok(())
}

fn print_preview(surface: &BuilderSurface) {
    for fragment in &surface.preview().fragments {
        println!("- {}", fragment.title);
        match &fragment.body {
            FragmentBody::Personal { name, contact, .. } => {
                println!("    {name} | {contact}");
            }
            FragmentBody::Badges { items } => {
                println!("    {}", items.join(", "));
            }
            FragmentBody::Entries { entries } => {
                for entry in entries {
                    println!("    {}", entry.heading);
                }
            }
        }
    }
}
