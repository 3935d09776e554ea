//! Helpers for rendering evaluation results.

use std::io::Write;

use eyre::{Context, Result};
use venn_expr::{Evaluation, Session};

fn format_sections(sections: &[String]) -> String {
    if sections.is_empty() {
        "-".to_string()
    } else {
        sections.join(" ")
    }
}

/// Write the elements and section labels of `evaluation`.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_evaluation(writer: &mut dyn Write, evaluation: &Evaluation) -> Result<()> {
    writeln!(writer, "elements: {}", evaluation.elements)
        .wrap_err("failed to write evaluated elements")?;
    writeln!(writer, "sections: {}", format_sections(&evaluation.sections))
        .wrap_err("failed to write section labels")
}

/// Write the current expression, the last good result and, when the
/// expression is not evaluable, the reason.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_status(writer: &mut dyn Write, session: &Session) -> Result<()> {
    writeln!(writer, "expression: {}", session.buffer().text())
        .wrap_err("failed to write expression")?;
    match session.last_good() {
        Some(evaluation) => write_evaluation(writer, evaluation)?,
        None => writeln!(writer, "elements: -\nsections: -")
            .wrap_err("failed to write empty result")?,
    }
    if let Some(err) = session.error() {
        let note = if session.last_good().is_some() {
            " (showing last good result)"
        } else {
            ""
        };
        writeln!(writer, "error: {err}{note}").wrap_err_with(|| {
            format!("failed to write error for `{}`", session.buffer().text())
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use venn_expr::Evaluator;

    fn render(session: &Session) -> String {
        let mut out = Vec::new();
        write_status(&mut out, session)
            .unwrap_or_else(|err| panic!("write should succeed: {err}"));
        String::from_utf8(out).unwrap_or_else(|err| panic!("utf8 output: {err}"))
    }

    #[test]
    fn renders_fresh_session() {
        let session = Session::new(Evaluator::default());
        assert_eq!(render(&session), "expression: \nelements: -\nsections: -\n");
    }

    #[test]
    fn renders_stale_result_with_error() {
        let mut session = Session::new(Evaluator::default());
        session.buffer_mut().set("a&b");
        let _ = session.refresh();
        session.buffer_mut().insert('|');
        let _ = session.refresh();
        assert_eq!(
            render(&session),
            concat!(
                "expression: a&b|\n",
                "elements: {2, 3}\n",
                "sections: ab abc\n",
                "error: dangling operator at byte 3 (zero-based) (showing last good result)\n",
            )
        );
    }

    #[test]
    fn renders_empty_result_sections_as_dash() {
        let evaluation = Evaluation::capture(&Evaluator::default(), "a & !a")
            .unwrap_or_else(|err| panic!("should evaluate: {err}"));
        let mut out = Vec::new();
        write_evaluation(&mut out, &evaluation)
            .unwrap_or_else(|err| panic!("write should succeed: {err}"));
        assert_eq!(out, b"elements: {}\nsections: -\n");
    }
}
