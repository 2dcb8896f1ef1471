//! Character grid the table view draws into.
//!
//! Colours are named by what they are on the table ([`Ink`]), not by RGB value. The
//! renderer owns the palette, so the view and its tests never deal in raw colours.

/// Colours used on the card table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ink {
    #[default]
    Felt,
    Text,
    /// Card face background
    Face,
    Red,
    Black,
    /// Card back
    Back,
    /// Pattern drawn on a card back
    Weave,
    /// Picked-up cards and the victory banner
    Held,
}

/// Set of text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attrs(u8);

impl Attrs {
    pub const NONE: Attrs = Attrs(0);
    pub const BOLD: Attrs = Attrs(1);
    pub const DIM: Attrs = Attrs(1 << 1);
    pub const REVERSE: Attrs = Attrs(1 << 2);

    pub const fn with(self, other: Attrs) -> Attrs {
        Attrs(self.0 | other.0)
    }

    pub const fn contains(self, other: Attrs) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Foreground, background and attributes of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fg: Ink,
    pub bg: Ink,
    pub attrs: Attrs,
}

impl Paint {
    pub const fn new(fg: Ink, bg: Ink) -> Self {
        Self {
            fg,
            bg,
            attrs: Attrs::NONE,
        }
    }

    pub const fn bold(self) -> Self {
        self.with(Attrs::BOLD)
    }

    pub const fn dim(self) -> Self {
        self.with(Attrs::DIM)
    }

    pub const fn reverse(self) -> Self {
        self.with(Attrs::REVERSE)
    }

    /// Same ink and attributes over a different background.
    pub const fn on(mut self, bg: Ink) -> Self {
        self.bg = bg;
        self
    }

    const fn with(mut self, attrs: Attrs) -> Self {
        self.attrs = self.attrs.with(attrs);
        self
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::new(Ink::Text, Ink::Felt)
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Glyph(char, Paint),
    /// Right half of a double-width glyph; the terminal fills it when the glyph is printed
    Tail,
}

impl Cell {
    pub const fn blank(paint: Paint) -> Self {
        Cell::Glyph(' ', paint)
    }

    pub fn paint(&self) -> Option<Paint> {
        match self {
            Cell::Glyph(_, paint) => Some(*paint),
            Cell::Tail => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::blank(Paint::default())
    }
}

/// Terminal columns taken by `ch`. CJK and fullwidth forms take two.
pub fn char_width(ch: char) -> u16 {
    match ch as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6 => 2,
        _ => 1,
    }
}

/// Terminal columns taken by `s`.
pub fn str_width(s: &str) -> u16 {
    s.chars().map(char_width).sum()
}

/// Row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the size and paint every cell blank.
    pub fn reset(&mut self, width: u16, height: u16, paint: Paint) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, Cell::blank(paint));
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Cells of row `y`, or an empty slice below the bottom edge.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    fn row_mut(&mut self, y: u16) -> &mut [Cell] {
        if y >= self.height {
            return &mut [];
        }
        let start = y as usize * self.width as usize;
        &mut self.cells[start..start + self.width as usize]
    }

    /// Write `s` at (x, y), clipped at the right edge.
    ///
    /// Returns the column just past the last glyph written. A wide glyph that would
    /// straddle the edge is dropped.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, paint: Paint) -> u16 {
        let row = self.row_mut(y);
        let mut cx = x as usize;
        for ch in s.chars() {
            let w = char_width(ch) as usize;
            if cx + w > row.len() {
                break;
            }
            row[cx] = Cell::Glyph(ch, paint);
            if w == 2 {
                row[cx + 1] = Cell::Tail;
            }
            cx += w;
        }
        cx as u16
    }

    /// Paint a rectangle blank, clipped to the grid.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, paint: Paint) {
        for cy in y..y.saturating_add(h).min(self.height) {
            let row = self.row_mut(cy);
            let from = (x as usize).min(row.len());
            let to = (x as usize + w as usize).min(row.len());
            row[from..to].fill(Cell::blank(paint));
        }
    }

    /// Text of row `y` as the terminal would show it.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .iter()
            .filter_map(|cell| match cell {
                Cell::Glyph(ch, _) => Some(*ch),
                Cell::Tail => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut canvas = Canvas::new(4, 1);
        let end = canvas.put_str(1, 0, "abcdef", Paint::default());
        assert_eq!(end, 4);
        assert_eq!(canvas.row_text(0), " abc");
    }

    #[test]
    fn wide_glyphs_take_two_cells() {
        let mut canvas = Canvas::new(6, 1);
        let end = canvas.put_str(0, 0, "得分", Paint::default());
        assert_eq!(end, 4);
        assert_eq!(canvas.get(1, 0), Some(Cell::Tail));
        assert_eq!(canvas.row_text(0), "得分  ");
        assert_eq!(str_width("得分 1"), 6);
    }

    #[test]
    fn wide_glyph_that_does_not_fit_is_dropped() {
        let mut canvas = Canvas::new(3, 1);
        canvas.put_str(0, 0, "a得分", Paint::default());
        assert_eq!(canvas.row_text(0), "a得");
    }

    #[test]
    fn writes_below_the_grid_are_ignored() {
        let mut canvas = Canvas::new(3, 1);
        assert_eq!(canvas.put_str(0, 5, "abc", Paint::default()), 0);
        canvas.fill(1, 0, 10, 10, Paint::new(Ink::Black, Ink::Held));
        assert_eq!(
            canvas.get(2, 0).and_then(|cell| cell.paint()),
            Some(Paint::new(Ink::Black, Ink::Held))
        );
        assert_eq!(canvas.get(0, 0), Some(Cell::default()));
    }

    #[test]
    fn reset_repaints_every_cell() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put_str(0, 0, "xy", Paint::default());
        let felt = Paint::new(Ink::Text, Ink::Felt).dim();
        canvas.reset(3, 1, felt);
        assert_eq!(canvas.row_text(0), "   ");
        assert!(canvas.row(0).iter().all(|cell| *cell == Cell::blank(felt)));
        assert!(canvas.row(1).is_empty());
    }

    #[test]
    fn attribute_sets_combine() {
        let paint = Paint::default().bold().reverse();
        assert!(paint.attrs.contains(Attrs::BOLD));
        assert!(paint.attrs.contains(Attrs::REVERSE));
        assert!(!paint.attrs.contains(Attrs::DIM));
        assert!(Paint::default().attrs.is_empty());
    }
}
