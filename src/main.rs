//! Terminal clock runner (default binary).
//!
//! Two threads of control share one `ClockState`: the input handler on a
//! dedicated thread and the render loop on a current-thread tokio runtime.
//! Rendering goes through a custom framebuffer renderer on crossterm.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::oneshot;

use tui_clock::cli::Cli;
use tui_clock::core::ForceUpdate;
use tui_clock::input::InputHandler;
use tui_clock::logging::init_logging;
use tui_clock::term::{RenderLoop, TerminalRenderer};
use tui_clock::types::Size;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let (w, h) = crossterm::terminal::size().context("reading terminal size")?;
    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e.context("initializing terminal"));
    }

    let result = run(cli, Size::new(w, h));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(cli: Cli, terminal: Size) -> Result<()> {
    let state = cli.into_state(terminal).into_shared();
    let force = ForceUpdate::new();
    log::info!("starting with {:?}", *state.read());

    let (quit_tx, quit_rx) = oneshot::channel();
    InputHandler::new(state.clone(), force.clone()).spawn(quit_tx)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    rt.block_on(async move {
        tokio::select! {
            res = RenderLoop::new(state, force, TerminalRenderer::new()).run() => res,
            _ = quit_rx => {
                log::info!("quit requested");
                Ok(())
            }
        }
    })
}
