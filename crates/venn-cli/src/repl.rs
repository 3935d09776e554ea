//! Line-oriented interactive loop driving a [`Session`].
//!
//! Each input line is an edit: plain text is typed at the cursor, and lines
//! starting with `:` are commands. The cursor starts at the end of the text
//! and moves with `:left`, `:right`, `:home` and `:end`. The full expression is re-evaluated after
//! every edit.

use std::io::{BufRead, Write};

use eyre::{Context, Result};
use tracing::debug;
use venn_expr::Session;

use crate::output::write_status;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type the text at the cursor.
    Type(String),
    /// Replace the whole expression.
    Set(String),
    /// Remove the character before the cursor.
    Back,
    /// Remove the character under the cursor.
    Delete,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Move the cursor to the start of the expression.
    Home,
    /// Move the cursor to the end of the expression.
    End,
    /// Empty the expression.
    Clear,
    /// Show the current status without editing.
    Show,
    /// Leave the loop.
    Quit,
    /// A `:` command that is not recognised.
    Unknown(String),
}

/// Interpret one input line.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let Some(command) = line.strip_prefix(':') else {
        return Command::Type(line.to_owned());
    };
    let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
    match name {
        "q" | "quit" => Command::Quit,
        "c" | "clear" => Command::Clear,
        "b" | "back" => Command::Back,
        "d" | "del" => Command::Delete,
        "left" => Command::Left,
        "right" => Command::Right,
        "home" => Command::Home,
        "end" => Command::End,
        "s" | "set" => Command::Set(rest.to_owned()),
        "" | "show" => Command::Show,
        other => Command::Unknown(other.to_owned()),
    }
}

fn apply(session: &mut Session, command: Command) -> Option<String> {
    let buffer = session.buffer_mut();
    match command {
        Command::Type(text) => {
            let kept = buffer.insert_str(&text);
            let dropped = text.chars().count() - kept;
            if dropped > 0 {
                debug!(dropped, "ignored characters outside the expression alphabet");
            }
        }
        Command::Set(text) => {
            buffer.set(&text);
        }
        Command::Back => {
            buffer.backspace();
        }
        Command::Delete => {
            buffer.delete();
        }
        Command::Left => buffer.move_left(),
        Command::Right => buffer.move_right(),
        Command::Home => buffer.home(),
        Command::End => buffer.end(),
        Command::Clear => buffer.clear(),
        Command::Show | Command::Quit => {}
        Command::Unknown(name) => return Some(name),
    }
    None
}

/// Run the loop until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run<R: BufRead>(session: &mut Session, input: R, output: &mut dyn Write) -> Result<()> {
    for line in input.lines() {
        let line = line.wrap_err("failed to read input line")?;
        let command = parse_command(&line);
        if command == Command::Quit {
            break;
        }
        if let Some(name) = apply(session, command) {
            writeln!(output, "unknown command ':{name}'")
                .wrap_err("failed to write command error")?;
            continue;
        }
        let _ = session.refresh();
        write_status(output, session)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use venn_expr::Evaluator;

    #[rstest]
    #[case("a & b", Command::Type("a & b".into()))]
    #[case(":set (a|b)", Command::Set("(a|b)".into()))]
    #[case(":q", Command::Quit)]
    #[case(":back", Command::Back)]
    #[case(":del", Command::Delete)]
    #[case(":home", Command::Home)]
    #[case(":left", Command::Left)]
    #[case(":clear", Command::Clear)]
    #[case(":", Command::Show)]
    #[case(":frobnicate now", Command::Unknown("frobnicate".into()))]
    fn parses_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(parse_command(line), expected);
    }

    fn run_lines(lines: &str) -> (Session, String) {
        let mut session = Session::new(Evaluator::default());
        let mut out = Vec::new();
        run(&mut session, lines.as_bytes(), &mut out)
            .unwrap_or_else(|err| panic!("loop should run: {err}"));
        let out = String::from_utf8(out).unwrap_or_else(|err| panic!("utf8 output: {err}"));
        (session, out)
    }

    #[test]
    fn builds_expression_across_lines() {
        let (session, out) = run_lines("a\n & \n(b | c)\n");
        assert_eq!(session.buffer().text(), "a & (b | c)");
        let last = session
            .last_good()
            .unwrap_or_else(|| panic!("expected a result"));
        assert_eq!(last.elements.sorted(), vec![2, 3, 5]);
        assert!(out.ends_with("elements: {2, 3, 5}\nsections: ab abc ac\n"));
    }

    #[test]
    fn stops_at_quit() {
        let (session, out) = run_lines(":set !a\n:quit\n:set b\n");
        assert_eq!(session.buffer().text(), "!a");
        assert_eq!(out.matches("expression:").count(), 1);
    }

    #[test]
    fn backspace_then_retype() {
        let (session, _) = run_lines(":set a & c\n:back\nb\n");
        assert_eq!(session.buffer().text(), "a & b");
        assert!(!session.is_stale());
    }

    #[test]
    fn cursor_commands_edit_inside_expression() {
        let (session, out) = run_lines(concat!(
            ":set a & c\n",
            ":home\n",
            "!\n",
            ":end\n",
            ":left\n",
            ":left\n",
            ":left\n",
            ":del\n",
            "|\n",
        ));
        assert_eq!(session.buffer().text(), "!a | c");
        assert_eq!(session.buffer().cursor(), 4);
        assert!(out.ends_with("elements: {4, 6, 7, 8, 3, 5}\nsections: bc c none b abc ac\n"));
    }

    #[test]
    fn right_stops_at_end_and_inserts_there() {
        let (session, _) = run_lines(":set a |\n:home\n:right\n:right\n:right\n:right\n c\n");
        assert_eq!(session.buffer().text(), "a | c");
        assert_eq!(
            session.last_good().map(|last| last.elements.sorted()),
            Some(vec![1, 2, 3, 4, 5, 6])
        );
    }

    #[test]
    fn reports_unknown_commands() {
        let (_, out) = run_lines(":nope\n");
        assert_eq!(out, "unknown command ':nope'\n");
    }
}
