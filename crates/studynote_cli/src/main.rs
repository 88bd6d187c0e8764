//! `studynote` command-line entry point.
//!
//! # Responsibility
//! - Collect form fields as flags and call the core generators.
//! - Manage saved notes in a SQLite file.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::fs;
use std::path::Path;
use studynote_core::db::open_db;
use studynote_core::{
    core_version, default_log_level, extract_tags, generate_multi_topic_note,
    generate_single_topic_note, init_logging, MultiTopicRequest, NoteId, NoteRecord, NoteService,
    OutlineFormat, SingleTopicRequest, SqliteNoteStore, TagPolicy,
};
use uuid::Uuid;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let cap_override = cli.tag_cap;
    let policy_for = |base: TagPolicy| match cap_override {
        Some(cap) => base.with_cap(cap),
        None => base,
    };
    let db = cli.db.as_path();

    match cli.command {
        Commands::Single {
            name,
            subject,
            topic,
            level,
            difficulty,
            mode,
            save,
        } => {
            let request = SingleTopicRequest {
                name,
                subject,
                topic,
                level,
                difficulty: difficulty.into(),
                mode: mode.into(),
            };
            if save {
                let note = with_service(db, policy_for(TagPolicy::BODY), |service| {
                    Ok(service.create_single_topic(&request)?)
                })?;
                print_saved(&note);
            } else {
                let body = generate_single_topic_note(&request)
                    .map_err(|err| anyhow::anyhow!("{} ({err})", err.warning()))?;
                println!("{body}");
            }
        }
        Commands::Outline {
            subject,
            topics,
            level,
            style,
            tone,
            html,
            body_tags,
            save,
        } => {
            let request = MultiTopicRequest {
                subject,
                topics,
                level,
                style,
                tone,
                format: if html {
                    OutlineFormat::Html
                } else {
                    OutlineFormat::PlainText
                },
            };
            let policy = policy_for(if body_tags {
                TagPolicy::BODY
            } else {
                TagPolicy::OUTLINE
            });
            if save {
                let note =
                    with_service(db, policy, |service| Ok(service.create_multi_topic(&request)?))?;
                print_saved(&note);
            } else {
                let outline = generate_multi_topic_note(&request)
                    .map_err(|err| anyhow::anyhow!("{} ({err})", err.warning()))?;
                println!("{}\n", outline.title);
                println!("{}", outline.body);
                println!("tags: {}", format_tags(&policy.apply(&outline)));
            }
        }
        Commands::Tags { text, cap } => {
            for tag in extract_tags(&text, cap) {
                println!("{tag}");
            }
        }
        Commands::Version => {
            println!(
                "studynote {} core={}",
                env!("CARGO_PKG_VERSION"),
                core_version()
            );
        }
        Commands::List => {
            let notes = with_service(db, policy_for(TagPolicy::BODY), |service| {
                Ok(service.list_notes()?)
            })?;
            print_list(&notes);
        }
        Commands::Search { query } => {
            let notes = with_service(db, policy_for(TagPolicy::BODY), |service| {
                Ok(service.search_notes(&query)?)
            })?;
            print_list(&notes);
        }
        Commands::Pin { id } => {
            let id = parse_note_id(&id)?;
            let note = with_service(db, policy_for(TagPolicy::BODY), |service| {
                Ok(service.toggle_pin(id)?)
            })?;
            let state = if note.pinned { "pinned" } else { "unpinned" };
            println!("{state} {}", note.id);
        }
        Commands::Delete { id } => {
            let id = parse_note_id(&id)?;
            with_service(db, policy_for(TagPolicy::BODY), |service| {
                Ok(service.delete_note(id)?)
            })?;
            println!("deleted {id}");
        }
        Commands::Export { out } => {
            let json = with_service(db, policy_for(TagPolicy::BODY), |service| {
                Ok(service.export_json()?)
            })?;
            match out {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("failed to write `{}`", path.display()))?;
                    println!("exported to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
        Commands::Import { file } => {
            let json = fs::read_to_string(&file)
                .with_context(|| format!("failed to read `{}`", file.display()))?;
            let count = with_service(db, policy_for(TagPolicy::OUTLINE), |service| {
                Ok(service.import_json(&json)?)
            })?;
            println!("imported {count} note(s)");
        }
    }

    Ok(())
}

fn with_service<T>(
    db: &Path,
    policy: TagPolicy,
    action: impl FnOnce(&mut NoteService<SqliteNoteStore<'_>>) -> Result<T>,
) -> Result<T> {
    let mut conn = open_db(db)
        .with_context(|| format!("failed to open note database `{}`", db.display()))?;
    let store = SqliteNoteStore::try_new(&mut conn)?;
    let mut service = NoteService::new(store, policy);
    action(&mut service)
}

fn parse_note_id(value: &str) -> Result<NoteId> {
    Uuid::parse_str(value.trim()).with_context(|| format!("`{value}` is not a note id"))
}

fn print_saved(note: &NoteRecord) {
    println!("saved {} \"{}\"", note.id, note.title);
    println!("tags: {}", format_tags(&note.tags));
}

fn print_list(notes: &[NoteRecord]) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }
    for note in notes {
        let marker = if note.pinned { "*" } else { " " };
        println!(
            "{marker} {}  {}  {}  {}",
            note.id,
            note.timestamp,
            note.title,
            format_tags(&note.tags)
        );
    }
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("[{tag}]"))
        .collect::<Vec<_>>()
        .join(" ")
}
