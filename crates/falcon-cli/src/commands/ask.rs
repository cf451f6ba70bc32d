//! One-shot dashboard session in the terminal

use anyhow::{anyhow, Context, Result};
use falcon_core::{
    render_card, AskMode, AskOutcome, DashboardConfig, DashboardState, SeededSource, Session,
    SessionSettings,
};
use tracing::debug;

/// Inputs for a single ask
#[derive(Debug, Default, Clone)]
pub struct AskOptions {
    /// Ids toggled in order
    pub select: Vec<String>,
    pub insights: Option<String>,
    pub question: Option<String>,
    /// Overrides the configured ask mode
    pub mode: Option<String>,
    pub seed: Option<u64>,
}

/// Result of one ask, with the mode that actually gated it
#[derive(Debug, Clone)]
pub struct AskRun {
    pub state: DashboardState,
    pub outcome: AskOutcome,
    pub mode: AskMode,
}

/// Build a session from `config`, apply `opts`, and fire the ask
pub fn run_ask(config: &DashboardConfig, opts: &AskOptions) -> Result<AskRun> {
    let mut settings = SessionSettings::from(config);
    if let Some(mode) = &opts.mode {
        settings.ask_mode = mode.parse::<AskMode>().map_err(|e| anyhow!(e))?;
    }

    let mut session = match opts.seed {
        Some(seed) => Session::with_source(settings, Box::new(SeededSource::new(seed))),
        None => Session::new(settings),
    };

    for id in &opts.select {
        session
            .toggle(id)
            .with_context(|| format!("Failed to select '{}'", id))?;
    }
    if let Some(text) = &opts.insights {
        session.set_text(text.as_str());
    }
    if let Some(text) = &opts.question {
        session.set_question(text.as_str());
    }

    let outcome = session.ask();
    debug!(?outcome, mode = %settings.ask_mode, "Ask finished");
    Ok(AskRun {
        state: session.state().clone(),
        outcome,
        mode: settings.ask_mode,
    })
}

/// What to tell the user when an ask in `mode` was skipped
pub fn skip_hint(mode: AskMode) -> &'static str {
    match mode {
        AskMode::Question => "Ask a question with --question \"...\"",
        AskMode::Insights => {
            "Select a commodity with --select <id> or add notes with --insights \"...\""
        }
    }
}

pub fn cmd_ask(config: &DashboardConfig, opts: &AskOptions, json: bool) -> Result<()> {
    let AskRun {
        state,
        outcome,
        mode,
    } = run_ask(config, opts)?;

    if json {
        let out = serde_json::json!({
            "outcome": outcome,
            "state": state,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match render_card(state.result.as_ref()) {
        Some(card) if outcome.is_shown() => {
            println!();
            println!("{}", card.to_text());
            println!();
        }
        _ => {
            println!("ℹ️  Nothing to analyze.");
            println!("   {}", skip_hint(mode));
        }
    }

    Ok(())
}
