//! Application entry point — Task Organizer CLI.
//!
//! # Flow
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Read the audio file given on the command line.
//! 4. Run the pipeline (transcribe, then extract) on a tokio runtime.
//! 5. Merge the extraction output with the persisted assignment/completion
//!    maps and print the board: categorized tasks plus the per-member view.
//! 6. Optionally export the board as CSV (`--csv <path>`).
//!
//! Usage:
//!
//! ```text
//! task-organizer <audio-file> [--mime <type>] [--csv <path>]
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use task_organizer::{
    board::{to_csv, BoardStore, FileStorage, Storage},
    config::{AppConfig, AppPaths},
    extract::ApiExtractor,
    pipeline::PipelineOrchestrator,
    transcribe::ApiTranscriber,
    view::BoardController,
};

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

struct Args {
    audio_path: String,
    mime_hint: Option<String>,
    csv_path: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut audio_path = None;
    let mut mime_hint = None;
    let mut csv_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mime" => {
                mime_hint = Some(args.next().context("--mime requires a value")?);
            }
            "--csv" => {
                csv_path = Some(args.next().context("--csv requires a value")?);
            }
            _ if audio_path.is_none() => audio_path = Some(arg),
            other => bail!("unexpected argument: {other}"),
        }
    }

    let audio_path = audio_path
        .context("usage: task-organizer <audio-file> [--mime <type>] [--csv <path>]")?;

    Ok(Args {
        audio_path,
        mime_hint,
        csv_path,
    })
}

/// Guess a MIME type from the file extension; the provider treats it as a
/// hint only.
fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("webm") => "audio/webm",
        Some("wav") => "audio/wav",
        Some("m4a") | Some("mp4") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        _ => "audio/mpeg",
    }
}

// ---------------------------------------------------------------------------
// Board rendering
// ---------------------------------------------------------------------------

fn print_board(controller: &BoardController) {
    println!("\n── Tasks by team ──────────────────────────────────────");
    for team in controller.teams() {
        println!("\n{} Team", team.name);
        for task in &team.tasks {
            let done = if task.completed { "x" } else { " " };
            print!("  [{done}] {}", task.description);
            if let Some(deadline) = &task.deadline {
                print!("  (due: {deadline})");
            }
            print!("  [{}]", task.priority);
            if let Some(member) = &task.assigned_to {
                print!("  → {member}");
            }
            println!();
            if !task.dependencies.is_empty() {
                println!("      depends on: {}", task.dependencies.join(", "));
            }
        }
    }

    println!("\n── Team members ───────────────────────────────────────");
    for member in &controller.board().members {
        let tasks = controller.member_tasks(member);
        println!("\n{member}");
        if tasks.is_empty() {
            println!("  (no tasks assigned)");
        }
        for task in tasks {
            let done = if task.completed { "x" } else { " " };
            println!("  [{done}] {}", task.description);
        }
    }
    println!();
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Task Organizer starting up");

    let args = parse_args()?;

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Audio payload — no client-side size validation; oversized payloads
    //    surface as a provider error.
    let audio_path = Path::new(&args.audio_path);
    let audio = std::fs::read(audio_path)
        .with_context(|| format!("could not read audio file {}", audio_path.display()))?;
    let mime_hint = args
        .mime_hint
        .as_deref()
        .unwrap_or_else(|| guess_mime(audio_path));
    log::info!(
        "Processing {} ({} bytes, {mime_hint})",
        audio_path.display(),
        audio.len()
    );

    // 4. Tokio runtime + pipeline
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    let orchestrator = PipelineOrchestrator::new(
        Arc::new(ApiTranscriber::from_config(&config.transcription)),
        Arc::new(ApiExtractor::from_config(&config.extraction)),
    );

    let (transcript, extraction) = rt.block_on(orchestrator.process(&audio, mime_hint))?;

    println!("── Transcription ──────────────────────────────────────");
    println!("{transcript}");

    // 5. Merge with persisted board state
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(AppPaths::new().storage_dir));
    let store = BoardStore::load(
        storage,
        extraction.teams,
        config.board.default_members.clone(),
    );
    let controller = BoardController::new(store);
    print_board(&controller);

    // 6. CSV export
    if let Some(csv_path) = args.csv_path {
        let csv = to_csv(&controller.teams());
        std::fs::write(&csv_path, csv)
            .with_context(|| format!("could not write CSV to {csv_path}"))?;
        log::info!("CSV exported to {csv_path}");
    }

    Ok(())
}
