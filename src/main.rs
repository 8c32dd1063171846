//! Interactive sandbox runner (default binary).
//!
//! A small voxel world in the terminal for trying the axis lock: move the
//! aim cursor, hold or toggle the lock, and place blocks. Input runs
//! through the same frame pipeline a real host would use, one frame per
//! fixed tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use axis_lock::engine::{PlaceOutcome, Sandbox};
use axis_lock::input::{handle_key_event, should_quit, FrameBuilder, InputAction};
use axis_lock::types::{Face, Notification, TICK_MS};

mod view;

/// Notifications kept on screen.
const NOTIFICATION_HISTORY: usize = 6;

fn main() -> Result<()> {
    let mut screen = view::StatusScreen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut view::StatusScreen) -> Result<()> {
    let mut sandbox = Sandbox::new();
    let mut frames = FrameBuilder::new();

    let mut recent: Vec<Notification> = Vec::new();
    let mut last_outcome: Option<PlaceOutcome> = None;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        screen.draw(&sandbox, &recent, last_outcome)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            frames.record_press(action);
                            dispatch(&mut sandbox, action, &mut last_outcome);
                        }
                    }
                    KeyEventKind::Repeat => {
                        if let Some(action) = handle_key_event(key) {
                            frames.record_repeat(action);
                            if action == InputAction::Place {
                                last_outcome = Some(sandbox.try_place());
                            }
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = handle_key_event(key) {
                            frames.record_release(action);
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let frame = frames.take_frame();
            let notes = sandbox.tick(&frame);
            for note in notes {
                recent.push(note);
            }
            if recent.len() > NOTIFICATION_HISTORY {
                let excess = recent.len() - NOTIFICATION_HISTORY;
                recent.drain(..excess);
            }
        }
    }
}

/// Immediate effects of a key press: aim movement and placement attempts.
/// Lock-state changes go through the frame pipeline instead.
fn dispatch(sandbox: &mut Sandbox, action: InputAction, last_outcome: &mut Option<PlaceOutcome>) {
    match action {
        InputAction::AimNorth => sandbox.move_aim(Face::North),
        InputAction::AimSouth => sandbox.move_aim(Face::South),
        InputAction::AimWest => sandbox.move_aim(Face::West),
        InputAction::AimEast => sandbox.move_aim(Face::East),
        InputAction::AimUp => sandbox.move_aim(Face::Up),
        InputAction::AimDown => sandbox.move_aim(Face::Down),
        InputAction::CycleFace => sandbox.cycle_aim_face(),
        InputAction::Place => *last_outcome = Some(sandbox.try_place()),
        _ => {}
    }
}
