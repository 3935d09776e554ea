//! Editable expression state for interactive front ends.
//!
//! A [`Session`] re-evaluates the whole expression after every edit and keeps
//! the last successful [`Evaluation`] when the current text is not evaluable,
//! so a display never goes blank while the user is mid-edit.

use tracing::debug;

use crate::algebra::Subset;
use crate::errors::EvalError;
use crate::evaluator::Evaluator;

/// Non-letter characters accepted by [`ExpressionBuffer::insert`].
pub const OPERATOR_CHARS: [char; 6] = ['&', '|', '!', '(', ')', ' '];

/// The text being typed plus a cursor.
///
/// Only base set names and [`OPERATOR_CHARS`] are accepted, so the text is
/// always ASCII and the cursor is both a byte and a character offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
    cursor: usize,
    alphabet: Vec<char>,
}

impl ExpressionBuffer {
    /// Create an empty buffer accepting the given set names.
    #[must_use]
    pub fn new<I: IntoIterator<Item = char>>(names: I) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            alphabet: names.into_iter().filter(char::is_ascii_lowercase).collect(),
        }
    }

    /// Whether `ch` may be typed into the buffer.
    #[must_use]
    pub fn accepts(&self, ch: char) -> bool {
        self.alphabet.contains(&ch) || OPERATOR_CHARS.contains(&ch)
    }

    /// The current expression text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor offset into [`ExpressionBuffer::text`].
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert `ch` at the cursor. Returns `false` when `ch` is not accepted.
    pub fn insert(&mut self, ch: char) -> bool {
        if !self.accepts(ch) {
            return false;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += 1;
        true
    }

    /// Insert every accepted character of `input`, returning how many were
    /// kept.
    pub fn insert_str(&mut self, input: &str) -> usize {
        input.chars().filter(|&ch| self.insert(ch)).count()
    }

    /// Replace the whole text, leaving the cursor at the end.
    pub fn set(&mut self, input: &str) -> usize {
        self.clear();
        self.insert_str(input)
    }

    /// Remove the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
        true
    }

    /// Remove the character under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.len());
    }

    /// Move the cursor to the start.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// A successfully evaluated snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The expression text that produced the result.
    pub expression: String,
    /// The resulting elements.
    pub elements: Subset,
    /// Section labels of the result, one per distinct classification.
    pub sections: Vec<String>,
}

impl Evaluation {
    /// Evaluate `expression` and label the result.
    ///
    /// # Errors
    /// Returns the [`EvalError`] of the failed pass.
    pub fn capture(evaluator: &Evaluator, expression: &str) -> Result<Self, EvalError> {
        let elements = evaluator.evaluate(expression)?;
        let sections = evaluator
            .sections(&elements)
            .into_iter()
            .map(str::to_owned)
            .collect();
        Ok(Self {
            expression: expression.to_owned(),
            elements,
            sections,
        })
    }
}

/// An evaluator paired with the expression being edited.
#[derive(Debug, Clone)]
pub struct Session {
    evaluator: Evaluator,
    buffer: ExpressionBuffer,
    last_good: Option<Evaluation>,
    error: Option<EvalError>,
}

impl Session {
    /// Start a session with an empty expression.
    #[must_use]
    pub fn new(evaluator: Evaluator) -> Self {
        let buffer = ExpressionBuffer::new(evaluator.universe().base_names());
        Self {
            evaluator,
            buffer,
            last_good: None,
            error: None,
        }
    }

    /// The evaluator backing the session.
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// The expression buffer.
    #[must_use]
    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    /// Mutable access to the expression buffer. Call
    /// [`Session::refresh`] after editing.
    pub fn buffer_mut(&mut self) -> &mut ExpressionBuffer {
        &mut self.buffer
    }

    /// Re-evaluate the current text.
    ///
    /// On success the result replaces the last good evaluation. On failure the
    /// last good evaluation is kept and the error is remembered until the next
    /// successful refresh.
    pub fn refresh(&mut self) -> Result<&Evaluation, &EvalError> {
        match Evaluation::capture(&self.evaluator, self.buffer.text()) {
            Ok(evaluation) => {
                self.error = None;
                Ok(self.last_good.insert(evaluation))
            }
            Err(err) => {
                debug!(error = %err, "keeping last good evaluation");
                Err(self.error.insert(err))
            }
        }
    }

    /// The most recent successful evaluation, if any.
    #[must_use]
    pub fn last_good(&self) -> Option<&Evaluation> {
        self.last_good.as_ref()
    }

    /// The error from the latest refresh, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&EvalError> {
        self.error.as_ref()
    }

    /// Whether the displayed evaluation lags behind the current text.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.error.is_some()
    }
}
