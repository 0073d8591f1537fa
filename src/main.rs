//! convo-view - a conversation viewer built with egui.
//!
//! Loads a JSON transcript of message records and renders it as a
//! scrollable conversation with day dividers.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;

use convo_view::app::ConvoApp;
use convo_view::{config, logging};

#[derive(Parser, Debug)]
#[command(name = "convo-view", version, about = "View a chat transcript")]
struct Args {
    /// JSON array of message records; defaults to the last opened transcript
    #[arg(short, long)]
    transcript: Option<PathBuf>,

    /// Address of the current user (overrides settings)
    #[arg(long)]
    me: Option<String>,

    /// Use UTC for day boundaries and times instead of the local zone
    #[arg(long)]
    utc: bool,

    /// Enable debug logging when RUST_LOG is unset
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut settings = config::load_settings();
    if let Some(me) = args.me {
        settings.current_user = Some(me);
    }
    if args.utc {
        settings.use_utc = true;
    }
    let transcript = args.transcript.or_else(|| settings.last_transcript.clone());
    tracing::debug!(?transcript, current_user = ?settings.current_user, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([360.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conversation",
        options,
        Box::new(move |cc| Ok(Box::new(ConvoApp::with_creation_context(cc, settings, transcript)))),
    )
}
