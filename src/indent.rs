//! Sink adapters used while rendering.

use core::fmt::{self, Write};

const INDENT: &str = "  ";

/// Prefixes every line written through it with one level of indentation.
///
/// Nesting `Indented`s stacks the prefixes, one per level.
pub struct Indented<'w> {
    inner: &'w mut dyn Write,
    levels: usize,
    pending: bool,
}

impl<'w> Indented<'w> {
    /// leaves whatever is already on the current line alone; only lines that
    /// start after the next newline get indented
    pub fn new(inner: &'w mut dyn Write) -> Self {
        Indented {
            inner,
            levels: 1,
            pending: false,
        }
    }

    /// indents the very first write too
    pub fn starting_now(inner: &'w mut dyn Write) -> Self {
        Self::levels(inner, 1)
    }

    /// like [`Indented::starting_now`], but `levels` deep in one go; zero
    /// levels passes everything through untouched
    pub fn levels(inner: &'w mut dyn Write, levels: usize) -> Self {
        Indented {
            inner,
            levels,
            pending: true,
        }
    }
}

impl Write for Indented<'_> {
    fn write_str(&mut self, mut s: &str) -> fmt::Result {
        while !s.is_empty() {
            if self.pending {
                for _ in 0..self.levels {
                    self.inner.write_str(INDENT)?;
                }
                self.pending = false;
            }
            match s.find('\n') {
                None => return self.inner.write_str(s),
                Some(newline) => {
                    self.inner.write_str(&s[..=newline])?;
                    self.pending = true;
                    s = &s[newline + 1..];
                }
            }
        }
        Ok(())
    }
}

/// Remembers whether the last thing written ended a line, so that a caller
/// can terminate a partially written line without doubling up newlines.
pub struct Finisher<'w> {
    inner: &'w mut dyn Write,
    needs_newline: bool,
}

impl<'w> Finisher<'w> {
    pub fn new(inner: &'w mut dyn Write) -> Self {
        Finisher {
            inner,
            needs_newline: false,
        }
    }

    /// `true` if something is on the current line
    pub fn mid_line(&self) -> bool {
        self.needs_newline
    }

    /// writes a newline unless the output already ends with one
    pub fn finish(&mut self) -> fmt::Result {
        if self.needs_newline {
            self.needs_newline = false;
            self.inner.write_char('\n')?;
        }
        Ok(())
    }
}

impl Write for Finisher<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(last) = s.chars().last() {
            self.needs_newline = last != '\n';
        }
        self.inner.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(depth: usize, chunks: &[&str]) -> Result<String, fmt::Error> {
        fn go(w: &mut dyn Write, depth: usize, chunks: &[&str]) -> fmt::Result {
            if depth == 0 {
                for chunk in chunks {
                    w.write_str(chunk)?;
                }
                Ok(())
            } else {
                go(&mut Indented::starting_now(w), depth - 1, chunks)
            }
        }
        let mut out = String::new();
        go(&mut out, depth, chunks)?;
        Ok(out)
    }

    #[test]
    fn starting_now_indents_first_line() -> fmt::Result {
        assert_eq!(nested(1, &["a\nb\n"])?, "  a\n  b\n");
        Ok(())
    }

    #[test]
    fn new_skips_current_line() -> fmt::Result {
        let mut out = String::from("header:");
        {
            let mut w = Indented::new(&mut out);
            w.write_str(" tail\nbody\nmore")?;
        }
        assert_eq!(out, "header: tail\n  body\n  more");
        Ok(())
    }

    #[test]
    fn chunking_does_not_matter() -> fmt::Result {
        let text = "one\ntwo\nthree";
        let whole = nested(3, &[text])?;
        let byte_chunks = text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect::<Vec<_>>();
        assert_eq!(nested(3, &byte_chunks)?, whole);
        assert_eq!(nested(3, &["one\n", "", "tw", "o\nthr", "ee"])?, whole);
        // k newlines -> k + 1 lines, each with 3 markers
        let lines = whole.split('\n').collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines
            .iter()
            .all(|line| line.starts_with("      ") && !line.starts_with("       ")));
        Ok(())
    }

    #[test]
    fn levels_matches_nesting() -> fmt::Result {
        let text = "one\ntwo\n";
        for depth in 0..4 {
            let mut out = String::new();
            Indented::levels(&mut out, depth).write_str(text)?;
            assert_eq!(out, nested(depth, &[text])?);
        }
        Ok(())
    }

    #[test]
    fn trailing_newline_defers_indent() -> fmt::Result {
        // nothing is emitted for a line that never gets any text
        assert_eq!(nested(2, &["a\n"])?, "    a\n");
        Ok(())
    }

    #[test]
    fn finisher_adds_missing_newline_once() -> fmt::Result {
        let mut out = String::new();
        {
            let mut w = Finisher::new(&mut out);
            w.write_str("(a < b)")?;
            w.finish()?;
            w.finish()?;
            w.write_str("done\n")?;
            w.finish()?;
        }
        assert_eq!(out, "(a < b)\ndone\n");
        Ok(())
    }
}
