//! Position resolution: replay commands against a cursor.
//!
//! Resolution is a fold over the command list with the cursor as the
//! accumulator. Each step yields the next cursor and exactly one primitive.

use glam::{IVec2, ivec2};

use crate::ast::Command;
use crate::errors::ResolveError;
use crate::primitive::{CursorMove, LineSegment, Primitive};

/// Output of a resolution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// One primitive per command, in command order
    pub primitives: Vec<Primitive>,
    /// Cursor after the last command
    pub cursor: IVec2,
}

impl Resolution {
    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.primitives.iter().filter_map(Primitive::as_line)
    }
}

/// Resolve `commands` starting from the origin.
pub fn resolve(commands: &[Command]) -> Result<Resolution, ResolveError> {
    resolve_from(commands, IVec2::ZERO)
}

/// Resolve `commands` starting from `start`.
///
/// The returned cursor can seed another call, which makes resolving a path
/// in pieces equivalent to resolving it whole.
pub fn resolve_from(commands: &[Command], start: IVec2) -> Result<Resolution, ResolveError> {
    let mut cursor = start;
    let mut primitives = Vec::with_capacity(commands.len());

    for (index, command) in commands.iter().enumerate() {
        let (next, primitive) = step(index, cursor, command)?;
        crate::log::debug!(index, %command, from = %cursor, to = %next, "resolved command");
        cursor = next;
        primitives.push(primitive);
    }

    Ok(Resolution { primitives, cursor })
}

/// Replay one command. `index` is only used for error reporting.
pub fn step(
    index: usize,
    cursor: IVec2,
    command: &Command,
) -> Result<(IVec2, Primitive), ResolveError> {
    match *command {
        Command::MoveAbsolute { x, y } => {
            let to = ivec2(x, y);
            Ok((to, CursorMove::new(to).into()))
        }
        Command::MoveRelative { dx, dy } => {
            let to = offset(index, cursor, dx, dy)?;
            Ok((to, CursorMove::new(to).into()))
        }
        Command::LineAbsolute { x, y } => {
            // The origin is the cursor as it stood before this command.
            let origin = cursor;
            let to = ivec2(x, y);
            Ok((to, LineSegment::new(origin, to).into()))
        }
        Command::LineRelative { dx, dy } => {
            let origin = cursor;
            let to = offset(index, cursor, dx, dy)?;
            Ok((to, LineSegment::new(origin, to).into()))
        }
    }
}

fn offset(index: usize, cursor: IVec2, dx: i32, dy: i32) -> Result<IVec2, ResolveError> {
    match (cursor.x.checked_add(dx), cursor.y.checked_add(dy)) {
        (Some(x), Some(y)) => Ok(ivec2(x, y)),
        _ => Err(ResolveError::CoordinateOverflow { index, cursor }),
    }
}
