//! Parse path text into a command sequence

use crate::ast::{CommandKind, NUM_ARGS, Path};
use crate::errors::{ParseError, SourceContext};
use crate::lexer::Lexer;

/// Name given to unnamed input in diagnostics
pub const DEFAULT_SOURCE_NAME: &str = "<input>";

/// Parse path text into an ordered command sequence.
pub fn parse(source: &str) -> Result<Path, ParseError> {
    parse_named(DEFAULT_SOURCE_NAME, source)
}

/// Parse path text, labelling diagnostics with `name`.
pub fn parse_named(name: &str, source: &str) -> Result<Path, ParseError> {
    let ctx = SourceContext::new(name, source);
    parse_commands(&Lexer::new(&ctx))
}

fn parse_commands(lexer: &Lexer<'_>) -> Result<Path, ParseError> {
    let mut path = Path::new();
    let mut pos = lexer.skip_spaces(0);

    while let Some(letter) = lexer.char_at(pos) {
        let kind =
            CommandKind::from_letter(letter).ok_or_else(|| lexer.unknown_command(letter, pos))?;
        debug_assert_eq!(kind.num_args(), NUM_ARGS);

        let (next, args) = lexer.read_args::<NUM_ARGS>(pos + letter.len_utf8())?;
        let command = kind.build(args);
        crate::log::debug!(position = pos, %command, "parsed command");

        path.push(command);
        pos = lexer.skip_spaces(next);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Command;

    #[test]
    fn empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("    ").unwrap().is_empty());
    }

    #[test]
    fn single_move() {
        let path = parse("M0 0").unwrap();
        assert_eq!(path.commands(), &[Command::MoveAbsolute { x: 0, y: 0 }]);
    }

    #[test]
    fn mixed_commands() {
        let path = parse("M111 222 L333 444 l555 -666").unwrap();
        assert_eq!(
            path.commands(),
            &[
                Command::MoveAbsolute { x: 111, y: 222 },
                Command::LineAbsolute { x: 333, y: 444 },
                Command::LineRelative { dx: 555, dy: -666 },
            ]
        );
    }

    #[test]
    fn space_between_letter_and_argument() {
        let path = parse("M111 222 L 333 444 l555 -666").unwrap();
        assert_eq!(path.commands()[1], Command::LineAbsolute { x: 333, y: 444 });
    }

    #[test]
    fn leading_and_stray_spaces_are_skipped() {
        let path = parse("   m10 10     l5 5   ").unwrap();
        assert_eq!(
            path.commands(),
            &[
                Command::MoveRelative { dx: 10, dy: 10 },
                Command::LineRelative { dx: 5, dy: 5 },
            ]
        );
    }

    #[test]
    fn commands_without_separating_spaces() {
        let path = parse("M1 2L3 4l-5-6").unwrap();
        assert_eq!(
            path.commands(),
            &[
                Command::MoveAbsolute { x: 1, y: 2 },
                Command::LineAbsolute { x: 3, y: 4 },
                Command::LineRelative { dx: -5, dy: -6 },
            ]
        );
    }

    #[test]
    fn unknown_command_reports_letter_and_position() {
        let err = parse("Z1 2").unwrap_err();
        match err {
            ParseError::UnknownCommand {
                command, position, ..
            } => {
                assert_eq!(command, 'Z');
                assert_eq!(position, 0);
            }
            other => panic!("expected UnknownCommand, got {other:?}"),
        }
    }

    #[test]
    fn unknown_command_after_valid_ones() {
        let err = parse("M1 2 z").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownCommand {
                command: 'z',
                position: 5,
                ..
            }
        ));
    }

    #[test]
    fn extra_argument_is_not_a_command() {
        // No implicit repeated commands: the third number sits where a letter belongs.
        let err = parse("L1 2 3 4").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownCommand {
                command: '3',
                position: 5,
                ..
            }
        ));
    }

    #[test]
    fn non_ascii_command() {
        let err = parse("M1 2 é3 4").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownCommand {
                command: 'é',
                position: 5,
                ..
            }
        ));
    }

    #[test]
    fn truncated_argument() {
        let err = parse("M1").unwrap_err();
        assert!(matches!(err, ParseError::MalformedArgument { position: 2, .. }));
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn letter_without_arguments() {
        assert!(matches!(
            parse("M"),
            Err(ParseError::MalformedArgument { position: 1, .. })
        ));
        assert!(matches!(
            parse("M1 2 L"),
            Err(ParseError::MalformedArgument { position: 6, .. })
        ));
    }

    #[test]
    fn fractions_are_not_accepted() {
        // "1" is read, then ".5" is neither a digit nor a command letter.
        let err = parse("M1.5 2").unwrap_err();
        assert!(matches!(err, ParseError::MalformedArgument { position: 2, .. }));
    }

    #[test]
    fn tabs_are_not_whitespace() {
        let err = parse("M1\t2").unwrap_err();
        assert!(matches!(err, ParseError::MalformedArgument { position: 2, .. }));
    }

    #[test]
    fn parse_is_deterministic() {
        let source = "M111 222 L333 444 l555 -666";
        assert_eq!(parse(source).unwrap(), parse(source).unwrap());
    }

    #[test]
    fn named_source_appears_in_report() {
        let err = parse_named("shape.path", "Q1 2").unwrap_err();
        let report = miette::Report::new(err);
        let rendered = format!("{report:?}");
        assert!(rendered.contains("shape.path"), "{rendered}");
    }
}
