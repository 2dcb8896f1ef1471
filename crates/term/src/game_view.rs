//! GameView: maps a [`GameSession`] onto a [`Canvas`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{str_width, Canvas, Ink, Paint};
use crate::core::GameSession;
use crate::labels::{format_time, labels, Labels};
use crate::types::{Card, COLUMN_COUNT, DEAL_SIZE, SEQUENCES_TO_WIN};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the player's cursor is, as far as drawing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorView {
    pub column: usize,
    /// Cards highlighted from the top of the cursor column
    pub depth: usize,
    /// Picked-up run as (column, first card index)
    pub held: Option<(usize, usize)>,
}

/// Width of one card face in terminal columns.
const CARD_W: u16 = 3;
/// Gap between columns.
const GAP: u16 = 2;
/// Header rows above the column labels.
const HEADER_H: u16 = 3;
/// Rows reserved for the key help at the bottom.
const FOOTER_H: u16 = 2;

const TEXT: Paint = Paint::new(Ink::Text, Ink::Felt);
const BANNER: Paint = Paint::new(Ink::Black, Ink::Held);
const CARD_BACK: Paint = Paint::new(Ink::Weave, Ink::Back);

/// Draws the header, the ten columns, the key help and the victory banner.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the session into an existing canvas.
    ///
    /// The canvas is resized to the viewport, so one canvas can be reused for every frame.
    pub fn render_into(
        &self,
        session: &GameSession,
        cursor: &CursorView,
        viewport: Viewport,
        canvas: &mut Canvas,
    ) {
        canvas.reset(viewport.width, viewport.height, TEXT);

        let text = labels(session.language());
        let table_w = COLUMN_COUNT as u16 * (CARD_W + GAP) - GAP;
        let start_x = viewport.width.saturating_sub(table_w) / 2;

        draw_header(canvas, session, text, start_x);

        if !session.started() {
            let mid = viewport.height / 2;
            draw_centered(canvas, viewport, mid, text.press_to_start, TEXT.bold());
            draw_footer(canvas, session, text, viewport);
            return;
        }

        draw_column_labels(canvas, cursor, start_x);
        let rows = viewport.height.saturating_sub(HEADER_H + 1 + FOOTER_H);
        for (col, cards) in session.columns().iter().enumerate() {
            let x = start_x + col as u16 * (CARD_W + GAP);
            draw_column(canvas, cards, col, cursor, x, HEADER_H + 1, rows);
        }

        draw_footer(canvas, session, text, viewport);

        if session.complete() {
            draw_victory(canvas, session, text, viewport);
        }
    }

    /// Convenience helper that allocates a new canvas.
    pub fn render(&self, session: &GameSession, cursor: &CursorView, viewport: Viewport) -> Canvas {
        let mut canvas = Canvas::default();
        self.render_into(session, cursor, viewport, &mut canvas);
        canvas
    }
}

fn draw_header(canvas: &mut Canvas, session: &GameSession, text: &Labels, x: u16) {
    let end = canvas.put_str(x, 0, text.title, TEXT.bold());
    if session.started() {
        canvas.put_str(end + 2, 0, text.difficulty_name(session.difficulty()), TEXT);
    }

    let mut cx = x;
    for (label, value) in [
        (text.score, session.score().to_string()),
        (text.moves, session.moves().to_string()),
        (text.time, format_time(session.time_secs())),
        (
            text.completed,
            format!("{}/{}", session.completed_count(), SEQUENCES_TO_WIN),
        ),
    ] {
        cx = canvas.put_str(cx, 1, label, TEXT.bold());
        cx = canvas.put_str(cx, 1, ": ", TEXT);
        cx = canvas.put_str(cx, 1, &value, TEXT);
        cx = cx.saturating_add(3);
    }

    // One block per deal left; greyed out while a deal would be refused.
    let deals_left = session.stock_len() / DEAL_SIZE;
    let stock = if session.can_deal() { TEXT } else { TEXT.dim() };
    cx = canvas.put_str(cx, 1, text.stock, TEXT.bold());
    cx = canvas.put_str(cx, 1, ": ", stock);
    canvas.put_str(cx, 1, &"▓".repeat(deals_left), stock);
}

fn draw_column_labels(canvas: &mut Canvas, cursor: &CursorView, start_x: u16) {
    for col in 0..COLUMN_COUNT {
        let x = start_x + col as u16 * (CARD_W + GAP);
        if col == cursor.column {
            canvas.put_str(x, HEADER_H, " ▼ ", TEXT.bold());
        } else {
            canvas.put_str(x, HEADER_H, &format!("{:>2} ", (col + 1) % 10), TEXT.dim());
        }
    }
}

fn draw_column(
    canvas: &mut Canvas,
    cards: &[Card],
    col: usize,
    cursor: &CursorView,
    x: u16,
    y: u16,
    rows: u16,
) {
    if rows == 0 {
        return;
    }

    if cards.is_empty() {
        let slot = if col == cursor.column {
            TEXT.reverse()
        } else {
            TEXT.dim()
        };
        canvas.put_str(x, y, "[ ]", slot);
        return;
    }

    // Columns taller than the screen lose their deepest cards behind a "+n" marker.
    let rows = rows as usize;
    let hidden = if cards.len() > rows {
        cards.len() - rows + 1
    } else {
        0
    };
    let mut cy = y;
    if hidden > 0 {
        canvas.put_str(x, cy, &format!("+{hidden}"), TEXT.dim());
        cy += 1;
    }

    let selected_from = (col == cursor.column && cursor.held.is_none())
        .then(|| cards.len().saturating_sub(cursor.depth.max(1)));
    let held_from = cursor.held.filter(|&(c, _)| c == col).map(|(_, index)| index);

    for (index, card) in cards.iter().enumerate().skip(hidden) {
        let mut paint = card_paint(card);
        if held_from.is_some_and(|from| index >= from) {
            paint = paint.on(Ink::Held);
        } else if selected_from.is_some_and(|from| index >= from) {
            paint = paint.reverse();
        }
        canvas.put_str(x, cy, &card_face(card), paint);
        cy += 1;
    }
}

fn draw_footer(canvas: &mut Canvas, session: &GameSession, text: &Labels, viewport: Viewport) {
    let y = viewport.height.saturating_sub(1);
    let sound = if session.sound_enabled() { text.on } else { text.off };
    let help = format!(
        "←→ ↑↓ ␣  d {}  u {}  r {}  1/2/4 {}  x {}  s {}: {}  g {}: {}  q {}",
        text.deal,
        text.undo,
        text.redo,
        text.new_game,
        text.reset,
        text.sound,
        sound,
        text.language,
        text.language_name,
        text.quit,
    );
    canvas.put_str(0, y, &help, TEXT.dim());
}

fn draw_victory(canvas: &mut Canvas, session: &GameSession, text: &Labels, viewport: Viewport) {
    let summary = format!(
        "{}: {}  {}: {}  {}: {}",
        text.score,
        session.score(),
        text.moves,
        session.moves(),
        text.time,
        format_time(session.time_secs()),
    );
    let again = format!("1/2/4 {}", text.play_again);

    let lines: [&str; 4] = [
        text.game_complete,
        text.game_complete_message,
        summary.as_str(),
        again.as_str(),
    ];
    let inner = lines.iter().map(|line| str_width(line)).max().unwrap_or(0) + 4;
    let x = viewport.width.saturating_sub(inner) / 2;
    let top = (viewport.height / 2).saturating_sub(3);
    canvas.fill(x, top, inner, lines.len() as u16 + 2, BANNER);
    for (i, line) in lines.iter().enumerate() {
        let paint = if i == 0 { BANNER.bold() } else { BANNER };
        draw_centered(canvas, viewport, top + 1 + i as u16, line, paint);
    }
}

fn draw_centered(canvas: &mut Canvas, viewport: Viewport, y: u16, s: &str, paint: Paint) {
    let x = viewport.width.saturating_sub(str_width(s)) / 2;
    canvas.put_str(x, y, s, paint);
}

/// Three-column card face: rank right-aligned plus suit symbol, or a card back.
pub fn card_face(card: &Card) -> String {
    if card.face_up {
        format!("{:>2}{}", card.rank_label(), card.suit.symbol())
    } else {
        "▒▒▒".to_string()
    }
}

fn card_paint(card: &Card) -> Paint {
    if !card.face_up {
        return CARD_BACK;
    }
    let ink = if card.suit.is_red() { Ink::Red } else { Ink::Black };
    Paint::new(ink, Ink::Face).bold()
}
