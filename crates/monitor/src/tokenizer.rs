//! Line Tokenizer.
//!
//! Splits a mutable line buffer into delimiter-separated tokens in place. It provides:
//! 1. **Reentrant form:** [`strtok_r`], with the cursor owned by the caller as a
//!    [`SavePtr`].
//! 2. **Non-reentrant forms:** [`Strtok`], which keeps the cursor in the instance,
//!    and the thread-local [`strtok`] free function.
//! 3. **Command splitting:** [`split_command`], the first-token / remainder split
//!    used by the mainloop.
//!
//! Runs of delimiters are collapsed, so no form ever yields an empty token. The
//! delimiter that ends a token is overwritten with NUL bytes, mirroring the
//! classic C routine; the buffer stays valid UTF-8.

use std::cell::RefCell;

/// Delimiters separating a command and its arguments.
pub const WHITESPACE: &str = " \t";

/// Caller-owned cursor into the unconsumed tail of a line buffer.
///
/// A default (or exhausted) cursor yields no further tokens until a fresh buffer
/// is passed to [`strtok_r`].
#[derive(Debug, Default)]
pub struct SavePtr<'a>(Option<&'a mut str>);

impl<'a> SavePtr<'a> {
    /// Returns true once the buffer has been fully consumed.
    pub const fn is_finished(&self) -> bool {
        self.0.is_none()
    }

    /// Consumes the cursor, returning the unconsumed tail, if any.
    pub fn into_rest(self) -> Option<&'a mut str> {
        self.0
    }
}

/// Where the next token lies in `s`: its start, and the end plus terminating
/// delimiter width when a delimiter follows it.
fn next_bounds(s: &str, delims: &str) -> Option<(usize, Option<(usize, usize)>)> {
    let is_delim = |c: char| delims.contains(c);
    let start = s.find(|c: char| !is_delim(c))?;
    let end = s[start..]
        .char_indices()
        .find(|&(_, c)| is_delim(c))
        .map(|(i, c)| (start + i, c.len_utf8()));
    Some((start, end))
}

/// Returns the next token of `input` (or of the buffer behind `save` when `input`
/// is `None`).
///
/// # Arguments
///
/// * `input` - A fresh buffer to tokenize, or `None` to continue from `save`.
/// * `delims` - Every character in this set separates tokens.
/// * `save` - Cursor updated to point just past the returned token.
///
/// # Returns
///
/// The token, or `None` when only delimiters (or nothing) remain.
///
/// # Examples
///
/// ```
/// use rvmon_sdb::tokenizer::{SavePtr, strtok_r};
///
/// let mut line = String::from("x  4 0x80000000");
/// let mut save = SavePtr::default();
/// assert_eq!(strtok_r(Some(line.as_mut_str()), " ", &mut save), Some("x"));
/// assert_eq!(strtok_r(None, " ", &mut save), Some("4"));
/// assert_eq!(strtok_r(None, " ", &mut save), Some("0x80000000"));
/// assert_eq!(strtok_r(None, " ", &mut save), None);
/// ```
pub fn strtok_r<'a>(
    input: Option<&'a mut str>,
    delims: &str,
    save: &mut SavePtr<'a>,
) -> Option<&'a str> {
    let buf = match input {
        Some(buf) => buf,
        None => save.0.take()?,
    };
    let Some((start, end)) = next_bounds(buf, delims) else {
        save.0 = None;
        return None;
    };
    let (_, rest) = buf.split_at_mut(start);
    let Some((end, width)) = end else {
        save.0 = None;
        return Some(rest);
    };

    let (token, tail) = rest.split_at_mut(end - start);
    // SAFETY: the first `width` bytes of `tail` are exactly one delimiter char, and
    // NUL bytes are one-byte UTF-8 sequences, so `tail` remains valid UTF-8.
    unsafe { tail.as_bytes_mut()[..width].fill(0) };
    let (_, after) = tail.split_at_mut(width);
    save.0 = Some(after);
    Some(token)
}

/// Tokenizer holding its cursor internally.
///
/// One stream at a time: passing a new buffer to [`Strtok::next`] abandons the
/// previous one.
#[derive(Debug, Default)]
pub struct Strtok<'a> {
    save: SavePtr<'a>,
}

impl<'a> Strtok<'a> {
    /// Creates a tokenizer with no buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts on `input` when given, otherwise continues the current buffer.
    pub fn next(&mut self, input: Option<&'a mut str>, delims: &str) -> Option<&'a str> {
        strtok_r(input, delims, &mut self.save)
    }
}

thread_local! {
    static SLOT: RefCell<Option<(String, usize)>> = const { RefCell::new(None) };
}

/// Thread-wide tokenizer over an owned buffer.
///
/// The first call passes the line; later calls pass `None`. Every caller on the
/// thread shares the one slot, so two interleaved token streams corrupt each
/// other. Prefer [`strtok_r`].
pub fn strtok(input: Option<String>, delims: &str) -> Option<String> {
    SLOT.with_borrow_mut(|slot| {
        if let Some(buf) = input {
            *slot = Some((buf, 0));
        }
        let (buf, pos) = slot.as_mut()?;
        let Some((start, end)) = next_bounds(&buf[*pos..], delims) else {
            *slot = None;
            return None;
        };
        let start = *pos + start;
        let Some((end, width)) = end else {
            let token = buf[start..].to_owned();
            *slot = None;
            return Some(token);
        };
        let end = *pos + end;
        let token = buf[start..end].to_owned();
        buf.replace_range(end..end + width, &"\0".repeat(width));
        *pos = end + width;
        Some(token)
    })
}

/// A command line split into its first word and the rest.
#[derive(Debug)]
pub struct ParsedLine<'a> {
    /// The first whitespace-delimited token.
    pub command: &'a str,
    /// Everything after the delimiter ending `command`, leading whitespace
    /// included; `None` when nothing follows.
    pub remainder: Option<&'a mut str>,
}

/// Splits `line` into a command word and an opaque argument remainder.
///
/// Returns `None` for blank lines.
pub fn split_command(line: &mut str) -> Option<ParsedLine<'_>> {
    let mut save = SavePtr::default();
    let command = strtok_r(Some(line), WHITESPACE, &mut save)?;
    let remainder = save.into_rest().filter(|rest| !rest.is_empty());
    Some(ParsedLine { command, remainder })
}
