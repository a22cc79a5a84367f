//! Command model for path data
//!
//! A [`Path`] is an ordered list of [`Command`]s. Order matters: every command
//! is replayed against the cursor left behind by the commands before it.

use std::fmt;

/// Number of integer arguments taken by every command
pub const NUM_ARGS: usize = 2;

/// The command letters the parser understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M`
    MoveAbsolute,
    /// `m`
    MoveRelative,
    /// `L`
    LineAbsolute,
    /// `l`
    LineRelative,
}

impl CommandKind {
    pub const ALL: [CommandKind; 4] = [
        CommandKind::MoveAbsolute,
        CommandKind::MoveRelative,
        CommandKind::LineAbsolute,
        CommandKind::LineRelative,
    ];

    /// Look up the command introduced by `letter` (case-sensitive)
    pub fn from_letter(letter: char) -> Option<CommandKind> {
        match letter {
            'M' => Some(CommandKind::MoveAbsolute),
            'm' => Some(CommandKind::MoveRelative),
            'L' => Some(CommandKind::LineAbsolute),
            'l' => Some(CommandKind::LineRelative),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            CommandKind::MoveAbsolute => 'M',
            CommandKind::MoveRelative => 'm',
            CommandKind::LineAbsolute => 'L',
            CommandKind::LineRelative => 'l',
        }
    }

    /// Human-readable name used when printing a command list
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::MoveAbsolute => "move",
            CommandKind::MoveRelative => "move_to_delta",
            CommandKind::LineAbsolute => "line",
            CommandKind::LineRelative => "line_to",
        }
    }

    /// How many arguments follow the letter. Fixed for every current command.
    pub fn num_args(self) -> usize {
        NUM_ARGS
    }

    /// Build the command from its arguments, in source order
    pub fn build(self, [a, b]: [i32; NUM_ARGS]) -> Command {
        match self {
            CommandKind::MoveAbsolute => Command::MoveAbsolute { x: a, y: b },
            CommandKind::MoveRelative => Command::MoveRelative { dx: a, dy: b },
            CommandKind::LineAbsolute => Command::LineAbsolute { x: a, y: b },
            CommandKind::LineRelative => Command::LineRelative { dx: a, dy: b },
        }
    }
}

/// A single parsed drawing instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Set the cursor to (x, y)
    MoveAbsolute { x: i32, y: i32 },
    /// Advance the cursor by (dx, dy)
    MoveRelative { dx: i32, dy: i32 },
    /// Draw from the cursor to (x, y), which becomes the new cursor
    LineAbsolute { x: i32, y: i32 },
    /// Draw from the cursor to cursor + (dx, dy), which becomes the new cursor
    LineRelative { dx: i32, dy: i32 },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::MoveAbsolute { .. } => CommandKind::MoveAbsolute,
            Command::MoveRelative { .. } => CommandKind::MoveRelative,
            Command::LineAbsolute { .. } => CommandKind::LineAbsolute,
            Command::LineRelative { .. } => CommandKind::LineRelative,
        }
    }

    /// Arguments in source order
    pub fn args(&self) -> [i32; NUM_ARGS] {
        match *self {
            Command::MoveAbsolute { x, y } | Command::LineAbsolute { x, y } => [x, y],
            Command::MoveRelative { dx, dy } | Command::LineRelative { dx, dy } => [dx, dy],
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.args();
        write!(f, "{}: {}, {}", self.name(), a, b)
    }
}

/// An ordered command sequence; insertion order is drawing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Append every command of `other`, keeping its order
    pub fn append(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl From<Vec<Command>> for Path {
    fn from(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

impl FromIterator<Command> for Path {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}
