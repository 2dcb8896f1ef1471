//! TerminalRenderer: shows a [`Canvas`] on the real terminal.
//!
//! Each frame is compared row by row with the frame already on screen. A row is rewritten
//! from its first changed cell to its last; unchanged rows cost nothing. The first frame,
//! and the first after a size change or [`TerminalRenderer::invalidate`], is drawn whole.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::cursor;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{terminal, QueueableCommand};

use crate::canvas::{Attrs, Canvas, Cell, Ink, Paint};

/// BEL, the terminal's only sound.
const BELL: u8 = 0x07;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows
    shown: Option<Canvas>,
    out: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to the alternate screen in raw mode.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Give the terminal back the way it was found.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(ResetColor)?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen so the next frame is drawn whole.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `canvas`. The previously shown frame is swapped into `canvas` so the caller
    /// can draw the next frame into it without allocating.
    pub fn present(&mut self, canvas: &mut Canvas) -> Result<()> {
        let shown = self
            .shown
            .take()
            .filter(|prev| prev.width() == canvas.width() && prev.height() == canvas.height());

        self.out.clear();
        encode_frame(shown.as_ref(), canvas, &mut self.out)?;
        self.flush()?;

        let mut previous = shown.unwrap_or_default();
        std::mem::swap(&mut previous, canvas);
        self.shown = Some(previous);
        Ok(())
    }

    pub fn bell(&mut self) -> Result<()> {
        self.stdout.write_all(&[BELL])?;
        self.stdout.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `shown` into `next`.
///
/// With no `shown` frame the screen is cleared and every row is written.
pub fn encode_frame(shown: Option<&Canvas>, next: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        let span = match shown {
            Some(shown) => changed_span(shown.row(y), row),
            None => Some(0..row.len()),
        };
        let Some(span) = span else { continue };

        out.queue(cursor::MoveTo(span.start as u16, y))?;
        for cell in &row[span] {
            if let Cell::Glyph(ch, paint) = *cell {
                pen.apply(out, paint)?;
                out.queue(Print(ch))?;
            }
        }
    }

    if pen.current.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Cells from the first to the last difference between two rows.
///
/// A span that opens on the tail of a wide glyph is widened to include the glyph.
fn changed_span(shown: &[Cell], next: &[Cell]) -> Option<Range<usize>> {
    let differs = |i: &usize| shown.get(*i) != next.get(*i);
    let first = (0..next.len()).find(differs)?;
    let last = (first..next.len()).rev().find(differs)?;
    let start = match next[first] {
        Cell::Tail => first.saturating_sub(1),
        Cell::Glyph(..) => first,
    };
    Some(start..last + 1)
}

/// Tracks the terminal's colour state so only changes are sent.
#[derive(Default)]
struct Pen {
    current: Option<Paint>,
}

impl Pen {
    fn apply(&mut self, out: &mut Vec<u8>, paint: Paint) -> Result<()> {
        let kept = match self.current {
            Some(current) if current == paint => return Ok(()),
            // Attributes can only be cleared by a reset, which drops the colours too.
            Some(current) if current.attrs == paint.attrs => Some(current),
            _ => None,
        };

        if kept.is_none() {
            out.queue(SetAttribute(Attribute::Reset))?;
            for (attr, attribute) in [
                (Attrs::BOLD, Attribute::Bold),
                (Attrs::DIM, Attribute::Dim),
                (Attrs::REVERSE, Attribute::Reverse),
            ] {
                if paint.attrs.contains(attr) {
                    out.queue(SetAttribute(attribute))?;
                }
            }
        }
        if kept.map_or(true, |current| current.fg != paint.fg) {
            out.queue(SetForegroundColor(color(paint.fg)))?;
        }
        if kept.map_or(true, |current| current.bg != paint.bg) {
            out.queue(SetBackgroundColor(color(paint.bg)))?;
        }

        self.current = Some(paint);
        Ok(())
    }
}

/// The table palette.
fn color(ink: Ink) -> Color {
    let (r, g, b) = match ink {
        Ink::Felt => (20, 90, 50),
        Ink::Text => (235, 235, 235),
        Ink::Face => (245, 245, 240),
        Ink::Red => (200, 30, 40),
        Ink::Black => (20, 20, 20),
        Ink::Back => (40, 70, 160),
        Ink::Weave => (120, 150, 220),
        Ink::Held => (250, 210, 80),
    };
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(shown: Option<&Canvas>, next: &Canvas) -> String {
        let mut out = Vec::new();
        encode_frame(shown, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn first_frame_writes_every_row() {
        let mut canvas = Canvas::new(4, 2);
        canvas.put_str(0, 1, "步数", Paint::default());

        let text = encoded(None, &canvas);
        assert!(text.contains("\u{1b}[2J"));
        assert!(text.contains("步"));
        assert!(text.contains("数"));
        // MoveTo is 1-based on the wire.
        assert!(text.contains("\u{1b}[1;1H"));
        assert!(text.contains("\u{1b}[2;1H"));
    }

    #[test]
    fn unchanged_frame_encodes_nothing() {
        let mut canvas = Canvas::new(5, 3);
        canvas.put_str(1, 1, " 9♠", Paint::new(Ink::Black, Ink::Face).bold());
        let same = canvas.clone();
        assert_eq!(encoded(Some(&canvas), &same), "");
    }

    #[test]
    fn only_the_changed_span_is_rewritten() {
        let shown = Canvas::new(10, 2);
        let mut next = shown.clone();
        next.put_str(2, 1, "Q", Paint::default());
        next.put_str(5, 1, "K", Paint::default());

        let text = encoded(Some(&shown), &next);
        assert!(text.contains("\u{1b}[2;3H"));
        assert!(!text.contains("\u{1b}[1;"));
        assert!(text.contains("Q   K"));
    }

    #[test]
    fn span_opening_on_a_tail_includes_its_glyph() {
        let mut shown = vec![Cell::default(); 4];
        shown[1] = Cell::Glyph('分', Paint::default());
        shown[2] = Cell::Tail;
        let mut next = vec![Cell::default(); 4];
        next[0] = Cell::Glyph('得', Paint::default());
        next[1] = Cell::Tail;

        assert_eq!(changed_span(&shown, &next), Some(0..3));
        assert_eq!(changed_span(&next[1..], &shown[1..]), Some(0..2));
        assert_eq!(changed_span(&next, &next), None);
    }

    #[test]
    fn pen_sends_only_what_changed() {
        let mut canvas = Canvas::new(3, 1);
        canvas.put_str(0, 0, "ab", Paint::new(Ink::Red, Ink::Face));
        canvas.put_str(2, 0, "c", Paint::new(Ink::Red, Ink::Held));

        let text = encoded(None, &canvas);
        assert_eq!(text.matches("38;2;").count(), 1);
        assert_eq!(text.matches("48;2;").count(), 2);
    }

    #[test]
    fn dropping_an_attribute_resets_and_repaints() {
        let mut canvas = Canvas::new(2, 1);
        let face = Paint::new(Ink::Black, Ink::Face);
        canvas.put_str(0, 0, "a", face.bold());
        canvas.put_str(1, 0, "b", face);

        let text = encoded(None, &canvas);
        // One reset per paint, one at the end.
        assert_eq!(text.matches("\u{1b}[0m").count(), 3);
        assert_eq!(text.matches("38;2;20;20;20").count(), 2);
    }
}
