//! Status screen for the sandbox: a handful of state lines, the recent
//! notifications, and a top-down slice of the world around the aim.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use axis_lock::engine::{PlaceOutcome, Sandbox};
use axis_lock::types::{BlockPos, Notification, Tone};

/// Half-width (in cells) of the rendered world slice on the X axis.
const SLICE_HALF_X: i32 = 10;
/// Half-depth of the rendered world slice on the Z axis.
const SLICE_HALF_Z: i32 = 6;

pub struct StatusScreen {
    stdout: io::Stdout,
}

impl StatusScreen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(
        &mut self,
        sandbox: &Sandbox,
        recent: &[Notification],
        last_outcome: Option<PlaceOutcome>,
    ) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(ResetColor)?;

        self.line("axis-lock sandbox")?;
        self.line("[r] toggle lock   [g] hold lock   [y] cycle axis   [1/2/3] select axis   [b] reference point")?;
        self.line("[arrows/wasd] move aim   [k/j] aim up/down   [f] cycle face   [space] place   [q] quit")?;
        self.line("")?;

        let session = sandbox.session();
        let mode = if session.toggle_enabled() && session.hold_key_down() {
            "on (toggle+hold)"
        } else if session.toggle_enabled() {
            "on (toggle)"
        } else if session.hold_key_down() {
            "on (hold)"
        } else {
            "off"
        };
        self.line(&format!(
            "lock: {}   axis: {}   anchor: {}   reference: {}",
            mode,
            session.selected_axis(),
            fmt_opt_pos(session.sequence_anchor()),
            fmt_opt_pos(session.manual_reference()),
        ))?;

        let aim = sandbox.aim();
        let place_pos = aim.place_pos();
        let place_state = if sandbox.world().is_occupied(place_pos) {
            "occupied"
        } else {
            "free"
        };
        self.line(&format!(
            "aim: {} face {}   place at {} ({})",
            aim.target(),
            aim.face(),
            place_pos,
            place_state,
        ))?;

        match last_outcome {
            Some(PlaceOutcome::Placed(pos)) => {
                self.toned_line(Tone::Positive, &format!("placed block at {pos}"))?
            }
            Some(PlaceOutcome::Blocked(pos)) => {
                self.toned_line(Tone::Negative, &format!("placement blocked at {pos}"))?
            }
            Some(PlaceOutcome::Obstructed(pos)) => {
                self.toned_line(Tone::Negative, &format!("cell {pos} is occupied"))?
            }
            Some(PlaceOutcome::NoEffect) => self.toned_line(Tone::Neutral, "nothing to place")?,
            None => self.line("")?,
        }
        self.line("")?;

        self.draw_slice(sandbox, place_pos)?;
        self.line("")?;

        for note in recent {
            self.toned_line(note.tone(), &note.to_string())?;
        }

        self.stdout.flush()?;
        Ok(())
    }

    /// Top-down slice of the placement layer, centered on the aim.
    fn draw_slice(&mut self, sandbox: &Sandbox, place_pos: BlockPos) -> Result<()> {
        let aim = sandbox.aim().target();
        self.line(&format!(
            "layer y={} (top-down, east is right, south is down)",
            place_pos.y
        ))?;

        for z in (aim.z - SLICE_HALF_Z)..=(aim.z + SLICE_HALF_Z) {
            let mut row = String::new();
            for x in (aim.x - SLICE_HALF_X)..=(aim.x + SLICE_HALF_X) {
                let cell = BlockPos::new(x, place_pos.y, z);
                let ch = if cell == place_pos {
                    '@'
                } else if sandbox.world().is_occupied(cell) {
                    '#'
                } else {
                    '.'
                };
                row.push(ch);
                row.push(' ');
            }
            self.line(&row)?;
        }
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        self.stdout.queue(Print(text))?;
        self.stdout.queue(Print("\r\n"))?;
        Ok(())
    }

    fn toned_line(&mut self, tone: Tone, text: &str) -> Result<()> {
        let color = match tone {
            Tone::Positive => Color::Green,
            Tone::Negative => Color::Red,
            Tone::Neutral => Color::White,
        };
        self.stdout.queue(SetForegroundColor(color))?;
        self.stdout.queue(Print(text))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(Print("\r\n"))?;
        Ok(())
    }
}

fn fmt_opt_pos(pos: Option<BlockPos>) -> String {
    match pos {
        Some(pos) => pos.to_string(),
        None => "-".to_string(),
    }
}
