//! Output formatting for ripgrep-like match results

use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A match located in a loaded file: byte offset plus match length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSpan {
    pub offset: usize,
    pub len: usize,
}

/// Print matches in `path:line:content` format with the match highlighted
pub fn print_matches(
    path: &Path,
    data: &[u8],
    matches: &[MatchSpan],
    color: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for m in matches {
        print_match_line(&mut stdout, path, data, *m)?;
    }

    Ok(())
}

/// Print one match line with the matching bytes highlighted
fn print_match_line(
    stdout: &mut StandardStream,
    path: &Path,
    data: &[u8],
    m: MatchSpan,
) -> io::Result<()> {
    let (line_number, line_start, line_end) = locate_line(data, m.offset);
    let line = &data[line_start..line_end];

    // Path prefix
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(stdout, "{}", path.display())?;
    stdout.reset()?;
    write!(stdout, ":")?;

    // Line number
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "{}", line_number)?;
    stdout.reset()?;
    write!(stdout, ":")?;

    // Content with the match highlighted; a match running past the end of
    // the line is clamped to the line
    let hl_start = m.offset - line_start;
    let hl_end = (m.offset + m.len).min(line_end) - line_start;

    write!(stdout, "{}", String::from_utf8_lossy(&line[..hl_start]))?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stdout, "{}", String::from_utf8_lossy(&line[hl_start..hl_end]))?;
    stdout.reset()?;
    writeln!(stdout, "{}", String::from_utf8_lossy(&line[hl_end..]))?;

    Ok(())
}

/// Locate the line containing a byte offset.
///
/// Returns (1-based line number, line start offset, line end offset). The
/// line end excludes the newline.
fn locate_line(data: &[u8], offset: usize) -> (usize, usize, usize) {
    let before = &data[..offset];
    let line_number = memchr::memchr_iter(b'\n', before).count() + 1;
    let line_start = memchr::memrchr(b'\n', before).map(|p| p + 1).unwrap_or(0);
    let line_end = memchr::memchr(b'\n', &data[offset..])
        .map(|p| offset + p)
        .unwrap_or(data.len());
    (line_number, line_start, line_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_line_single_line() {
        let data = b"hello world";
        assert_eq!(locate_line(data, 0), (1, 0, 11));
        assert_eq!(locate_line(data, 6), (1, 0, 11));
    }

    #[test]
    fn test_locate_line_multi_line() {
        let data = b"first\nsecond\nthird\n";
        assert_eq!(locate_line(data, 0), (1, 0, 5));
        assert_eq!(locate_line(data, 6), (2, 6, 12));
        assert_eq!(locate_line(data, 11), (2, 6, 12));
        assert_eq!(locate_line(data, 13), (3, 13, 18));
    }

    #[test]
    fn test_locate_line_no_trailing_newline() {
        let data = b"a\nbc";
        assert_eq!(locate_line(data, 3), (2, 2, 4));
    }
}
