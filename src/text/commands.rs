use std::borrow::Cow;

use crate::{
    error::{Error, Result},
    traits::command::Command,
};

use super::buffer::TextBuffer;

/// Edits over a [`TextBuffer`], each paired with the edit that reverses it.
///
/// Case changes are ASCII-only so they never change the length of the text.
/// Indices count chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand {
    AppendEnd(char),
    /// Removes the last char. Its inverse re-appends whatever char that was.
    DeleteEnd,
    AppendStart(char),
    DeleteStart,
    Capitalize(usize),
    Lowercase(usize),
    /// Uppercases the first char and every char after a space, lowercases the rest.
    TitleCase,
    /// Inverse of [`TextCommand::TitleCase`]. Only an exact inverse when the text was
    /// entirely lowercase before title-casing.
    LowercaseAll,
    /// Replaces the whole text. Recorded as the inverse of [`TextCommand::LowercaseAll`].
    Restore(String),
}

impl TextCommand {
    /// Checks that the command applies to `buffer` as it is now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] for deletes on empty text and out-of-range indices.
    pub fn validated(self, buffer: &TextBuffer) -> Result<Self> {
        self.check(buffer)?;
        Ok(self)
    }

    fn check(&self, buffer: &TextBuffer) -> Result<()> {
        match self {
            Self::DeleteEnd | Self::DeleteStart if buffer.is_empty() => {
                Err(self.invalid("text is empty"))
            }
            Self::Capitalize(index) | Self::Lowercase(index) => {
                let len = buffer.len_chars();
                if *index >= len {
                    Err(self.invalid(format!("index {index} out of range for length {len}")))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> Error {
        Error::invalid_operation(self.description(), reason)
    }
}

impl Command for TextCommand {
    type Context = TextBuffer;

    fn execute(&self, ctx: &mut TextBuffer) -> Result<()> {
        self.check(ctx)?;

        let text = ctx.text_mut();
        match self {
            Self::AppendEnd(letter) => text.push(*letter),
            Self::DeleteEnd => {
                text.pop();
            }
            Self::AppendStart(letter) => text.insert(0, *letter),
            Self::DeleteStart => {
                text.remove(0);
            }
            Self::Capitalize(index) => map_char_at(text, *index, |c| c.to_ascii_uppercase()),
            Self::Lowercase(index) => map_char_at(text, *index, |c| c.to_ascii_lowercase()),
            Self::TitleCase => {
                let mut after_space = true;
                *text = text
                    .chars()
                    .map(|c| {
                        let mapped = if after_space {
                            c.to_ascii_uppercase()
                        } else {
                            c.to_ascii_lowercase()
                        };
                        after_space = c == ' ';
                        mapped
                    })
                    .collect();
            }
            Self::LowercaseAll => text.make_ascii_lowercase(),
            Self::Restore(previous) => text.clone_from(previous),
        }

        ctx.emit();
        Ok(())
    }

    fn opposite(&self, ctx: &TextBuffer) -> Result<Option<Self>> {
        self.check(ctx)?;

        let opposite = match self {
            Self::AppendEnd(_) => Self::DeleteEnd,
            Self::DeleteEnd => match ctx.as_str().chars().next_back() {
                Some(last) => Self::AppendEnd(last),
                None => return Err(self.invalid("text is empty")),
            },
            Self::AppendStart(_) => Self::DeleteStart,
            Self::DeleteStart => match ctx.as_str().chars().next() {
                Some(first) => Self::AppendStart(first),
                None => return Err(self.invalid("text is empty")),
            },
            // Re-applying a case change to a char already in that case is a no-op, so the
            // command is its own inverse there.
            Self::Capitalize(index) => match char_at(ctx, *index) {
                Some(c) if c.to_ascii_uppercase() != c => Self::Lowercase(*index),
                _ => Self::Capitalize(*index),
            },
            Self::Lowercase(index) => match char_at(ctx, *index) {
                Some(c) if c.to_ascii_lowercase() != c => Self::Capitalize(*index),
                _ => Self::Lowercase(*index),
            },
            Self::TitleCase => Self::LowercaseAll,
            Self::LowercaseAll | Self::Restore(_) => Self::Restore(ctx.as_str().to_owned()),
        };

        Ok(Some(opposite))
    }

    fn description(&self) -> Cow<'_, str> {
        match self {
            Self::AppendEnd(letter) => Cow::Owned(format!("AppendEnd({letter:?})")),
            Self::DeleteEnd => Cow::Borrowed("DeleteEnd"),
            Self::AppendStart(letter) => Cow::Owned(format!("AppendStart({letter:?})")),
            Self::DeleteStart => Cow::Borrowed("DeleteStart"),
            Self::Capitalize(index) => Cow::Owned(format!("Capitalize({index})")),
            Self::Lowercase(index) => Cow::Owned(format!("Lowercase({index})")),
            Self::TitleCase => Cow::Borrowed("TitleCase"),
            Self::LowercaseAll => Cow::Borrowed("LowercaseAll"),
            Self::Restore(text) => Cow::Owned(format!("Restore({text:?})")),
        }
    }
}

fn char_at(buffer: &TextBuffer, index: usize) -> Option<char> {
    buffer.as_str().chars().nth(index)
}

/// Replaces the char at `index` with `f(char)`. Caller guarantees the index is in range.
fn map_char_at(text: &mut String, index: usize, f: impl Fn(char) -> char) {
    let Some((at, c)) = text.char_indices().nth(index) else {
        return;
    };
    let mut buf = [0; 4];
    text.replace_range(at..at + c.len_utf8(), f(c).encode_utf8(&mut buf));
}
