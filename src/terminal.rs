use std::io::{ self, Write };

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{ Clear, ClearType };

/// Clears the visible screen and moves the cursor to the top-left corner.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Writes `text` without a trailing line break and flushes.
pub fn print<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_writes_without_newline() {
        let mut out = Vec::new();
        print(&mut out, "abc").unwrap();

        assert_eq!(out, b"abc");
    }

    #[test]
    fn clear_screen_emits_clear_and_home() {
        let mut out = Vec::new();
        clear_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();

        assert!(written.contains("\x1b[2J"), "{written:?}");
        assert!(written.contains("\x1b[1;1H"), "{written:?}");
    }
}
