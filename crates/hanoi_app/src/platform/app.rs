use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use hanoi_core::{update, AppState, Msg};
use hanoi_logging::hanoi_info;
use hanoi_store::StateStore;

use super::effects::EffectRunner;
use super::input::{parse_command, Command};
use super::{logging, persistence, ui};
use crate::cli::Cli;

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let store = StateStore::new(cli.state_dir);
    logging::initialize(cli.log, cli.verbose, &store);
    hanoi_info!("hanoi starting, state dir {:?}", store.dir());

    let mut startup = Vec::new();
    if let Some(preferences) = persistence::load_preferences(&store) {
        startup.push(Msg::RestorePreferences(preferences));
    }
    startup.push(Msg::ViewportResized {
        columns: cli.columns,
        rows: cli.rows,
    });
    if let Some(disk_count) = cli.difficulty {
        startup.push(Msg::DifficultyChanged(disk_count));
    }

    let runner = EffectRunner::new(store);
    let mut state = AppState::default();
    // Terminal logging shares stdout, so the lock is only held per write.
    let mut stdout = io::stdout();

    for msg in startup {
        let (next, effects) = update(state, msg);
        state = next;
        // Startup never asks to quit.
        let _ = runner.run(effects);
    }
    redraw(&mut state, &mut stdout)?;
    prompt(&mut stdout)?;

    let (command_tx, command_rx) = mpsc::channel::<Command>();
    thread::spawn(move || read_commands(io::stdin().lock(), command_tx));

    for command in command_rx {
        let flow = match command {
            Command::DumpState => {
                let json = serde_json::to_string_pretty(&state.snapshot())
                    .context("serialize game snapshot")?;
                writeln!(stdout, "{json}")?;
                ControlFlow::Continue(())
            }
            Command::Dispatch(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                let flow = runner.run(effects);
                redraw(&mut state, &mut stdout)?;
                flow
            }
        };
        if flow.is_break() {
            break;
        }
        prompt(&mut stdout)?;
    }

    hanoi_info!("hanoi exiting after {} moves", state.view().moves);
    Ok(())
}

fn redraw(state: &mut AppState, out: &mut impl Write) -> io::Result<()> {
    if !state.consume_dirty() {
        return Ok(());
    }
    let screen = ui::render::render(&state.view());
    write!(out, "\n{screen}")?;
    out.flush()
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", ui::constants::PROMPT)?;
    out.flush()
}

/// Forwards one command per input line until end of input, then quits.
///
/// Runs on its own thread and never writes to the terminal; problems are
/// sent to the main thread as rejected input.
fn read_commands(mut input: impl BufRead, command_tx: mpsc::Sender<Command>) {
    let mut line = String::new();
    loop {
        line.clear();
        let command = match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => parse_command(&line)
                .unwrap_or_else(|err| Command::Dispatch(Msg::InputRejected(err.to_string()))),
            // The undecodable line has been consumed; keep reading.
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                Command::Dispatch(Msg::InputRejected("input is not valid UTF-8".to_string()))
            }
            Err(err) => {
                let _ = command_tx.send(Command::Dispatch(Msg::InputRejected(format!(
                    "stopped reading input: {err}"
                ))));
                break;
            }
        };
        if command_tx.send(command).is_err() {
            return;
        }
    }
    let _ = command_tx.send(Command::Dispatch(Msg::QuitRequested));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn commands_from(bytes: &[u8]) -> Vec<Command> {
        let (command_tx, command_rx) = mpsc::channel();
        read_commands(io::Cursor::new(bytes.to_vec()), command_tx);
        command_rx.iter().collect()
    }

    #[test]
    fn undecodable_line_is_rejected_and_reading_continues() {
        assert_eq!(
            commands_from(b"13\n\xff\xfe\n2\n"),
            vec![
                Command::Dispatch(Msg::MoveRequested { from: 0, to: 2 }),
                Command::Dispatch(Msg::InputRejected(
                    "input is not valid UTF-8".to_string()
                )),
                Command::Dispatch(Msg::TowerTapped(1)),
                Command::Dispatch(Msg::QuitRequested),
            ]
        );
    }

    #[test]
    fn end_of_input_quits() {
        assert_eq!(
            commands_from(b""),
            vec![Command::Dispatch(Msg::QuitRequested)]
        );
    }

    #[test]
    fn reader_stops_once_the_app_is_gone() {
        let (command_tx, command_rx) = mpsc::channel();
        drop(command_rx);
        // Returns instead of blocking or panicking.
        read_commands(io::Cursor::new(b"1\n2\n".to_vec()), command_tx);
    }

    #[test]
    fn read_failure_stops_the_reader_with_a_notice() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("device gone"))
            }
        }

        let (command_tx, command_rx) = mpsc::channel();
        read_commands(io::BufReader::new(Broken), command_tx);
        let commands: Vec<Command> = command_rx.iter().collect();

        assert_eq!(
            commands,
            vec![
                Command::Dispatch(Msg::InputRejected(
                    "stopped reading input: device gone".to_string()
                )),
                Command::Dispatch(Msg::QuitRequested),
            ]
        );
    }
}
