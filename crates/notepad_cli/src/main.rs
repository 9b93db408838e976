//! CLI client for the notepad core.
//!
//! # Responsibility
//! - Parse arguments and map them onto core use-cases.
//! - Format output for the terminal.
//! - The only layer that knows about stdout/stderr and exit codes.

use clap::{Parser, Subcommand};
use notepad_core::db::open_db;
use notepad_core::{
    default_log_level, init_logging, Note, NoteEditorForm, NoteId, NoteStore, SqliteNoteMirror,
    SystemClock,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const DB_FILE_NAME: &str = "notepad.sqlite3";
const PREVIEW_MAX_CHARS: usize = 60;

#[derive(Parser)]
#[command(name = "notepad", about = "Local note-taking pad", version)]
struct Args {
    /// Database file (defaults to the platform data directory).
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all notes, most recent first.
    List,
    /// Filter notes by a case-insensitive substring on title or content.
    Search { term: String },
    /// Create a note.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Replace an existing note's title and content.
    Edit {
        id: NoteId,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Delete a note. Deleting an unknown id is not an error.
    Rm { id: NoteId },
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = &args.log_dir {
        init_logging(default_log_level(), &log_dir.display().to_string())?;
    }

    let db_path = resolve_db_path(args.db)?;
    let conn = open_db(&db_path)?;
    let mut store = NoteStore::open(SqliteNoteMirror::new(&conn), SystemClock)?;
    log::debug!(
        "event=cli_open module=cli status=ok db={} count={}",
        db_path.display(),
        store.len()
    );

    match args.command {
        Command::List => {
            let all = store.search("");
            if all.is_empty() {
                println!("No notes yet. Use `notepad add` to create your first note.");
            } else {
                print_notes(&all);
            }
        }
        Command::Search { term } => {
            let hits = store.search(&term);
            if hits.is_empty() {
                println!("No notes found.");
            } else {
                print_notes(&hits);
            }
        }
        Command::Add { title, content } => {
            let mut form = NoteEditorForm::new();
            form.open_create();
            form.set_title(title);
            form.set_content(content);
            let id = form.save(&mut store)?;
            println!("Created note {id}.");
        }
        Command::Edit { id, title, content } => {
            let target = store
                .get(id)
                .cloned()
                .ok_or_else(|| format!("note not found: {id}"))?;
            let mut form = NoteEditorForm::new();
            form.open_edit(&target);
            form.set_title(title);
            form.set_content(content);
            form.save(&mut store)?;
            println!("Updated note {id}.");
        }
        Command::Rm { id } => {
            if store.remove(id)? {
                println!("Deleted note {id}.");
            } else {
                println!("No note with id {id}; nothing deleted.");
            }
        }
    }

    Ok(())
}

fn resolve_db_path(override_path: Option<PathBuf>) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    let base = dirs::data_dir().ok_or("could not determine the platform data directory")?;
    let dir = base.join("notepad");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join(DB_FILE_NAME))
}

fn print_notes(notes: &[&Note]) {
    for note in notes {
        println!("{}  {:<6}  {}", note.id, note.date, note.title);
        println!("{:38}{}", "", content_preview(&note.content));
    }
}

/// One-line preview of the note body for list output.
fn content_preview(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("");
    let mut preview: String = first_line.chars().take(PREVIEW_MAX_CHARS).collect();
    if first_line.chars().count() > PREVIEW_MAX_CHARS || content.lines().count() > 1 {
        preview.push_str("...");
    }
    preview
}
