use pagepick::app::action::Action;
use pagepick::app::event::AppEvent;
use pagepick::app::handler;
use pagepick::app::state::AppState;
use pagepick::{config, logging, ui};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    let _log_file = logging::init(&cfg.logging);
    tracing::info!(pages = cfg.pages.len(), "starting picker");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &cfg).await;

    restore_terminal()?;

    match result {
        Ok(Some(ids)) => {
            for id in ids {
                println!("{}", id);
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %e, "picker failed");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Run the picker until the user confirms or quits. Returns the ids handed
/// to the completion callback, if any.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: &config::AppConfig,
) -> Result<Option<Vec<String>>> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let confirmed: Rc<RefCell<Option<Vec<String>>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&confirmed);

    let size = terminal.size()?;
    let viewport = Rect::new(0, 0, size.width, size.height);
    let mut state = AppState::from_config(cfg, viewport, move |ids| {
        *sink.borrow_mut() = Some(ids);
    });

    // Spawn terminal input task
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if event_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) | None => {
                    let _ = event_tx.send(AppEvent::InputClosed);
                    break;
                }
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::Confirm => {
                    let ids = state.picker.confirm();
                    if state.ui.exit_on_done {
                        state.should_quit = true;
                    } else {
                        state.status_message = Some(format!("Confirmed {} pages", ids.len()));
                    }
                }
                Action::Reload => match config::load_config() {
                    Ok(new_cfg) => {
                        state.apply_config(&new_cfg);
                        state.status_message = Some("Config reloaded".to_string());
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "config reload failed");
                        state.status_message = Some(format!("Reload failed: {}", e));
                    }
                },
                Action::Quit => {
                    tracing::info!("quit without confirming");
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    let ids = confirmed.borrow_mut().take();
    Ok(ids)
}
