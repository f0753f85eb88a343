use std::io::Stdout;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use chat_core::{update, AppState, Msg};
use chat_engine::GatewaySettings;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::effects::EffectRunner;
use crate::logging::{self, LogDestination};
use crate::ui;

const INPUT_POLL: Duration = Duration::from_millis(25);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(GatewaySettings::from_env(), msg_tx.clone())
        .context("failed to start the gateway client")?;

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to build terminal")?;

    let result = event_loop(&mut terminal, runner, msg_tx, msg_rx);

    // Restore the terminal even when the loop errored.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut runner: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    let mut state = AppState::new();
    let mut input = String::new();
    let mut force_redraw = true;

    loop {
        if event::poll(INPUT_POLL).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) => match handle_key(key, &mut input) {
                    InputAction::Quit => return Ok(()),
                    InputAction::Forward(msg) => {
                        let _ = msg_tx.send(msg);
                    }
                    InputAction::None => {}
                },
                Event::Resize(_, _) => force_redraw = true,
                _ => {}
            }
        }

        // Drain keyboard, ticker, and engine messages since the last poll.
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, msg, &mut runner);
        }

        if state.consume_dirty() || force_redraw {
            let view = state.view();
            terminal
                .draw(|frame| ui::render::render(frame, &view))
                .context("failed to draw frame")?;
            force_redraw = false;
        }
    }
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &mut EffectRunner) {
    let current = std::mem::take(state);
    let (next, effects) = update(current, msg);
    *state = next;
    runner.run(effects);
}

enum InputAction {
    Forward(Msg),
    Quit,
    None,
}

/// Maps a key event to a core message, mirroring the input box locally so
/// edits can be sent as whole-text updates.
fn handle_key(key: KeyEvent, input: &mut String) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    match key.code {
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Enter => {
            input.clear();
            InputAction::Forward(Msg::PromptSubmitted)
        }
        // F1..F3 mirror the original widget's quick-reply buttons.
        KeyCode::F(n @ 1..=3) => {
            input.clear();
            InputAction::Forward(Msg::QuickReplySelected(usize::from(n) - 1))
        }
        KeyCode::Backspace => {
            input.pop();
            InputAction::Forward(Msg::InputChanged(input.clone()))
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.push(ch);
            InputAction::Forward(Msg::InputChanged(input.clone()))
        }
        _ => InputAction::None,
    }
}
