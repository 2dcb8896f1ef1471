use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spider_solitaire::core::{find_complete_run, legal_moves, seeded_deck, GameSession};
use spider_solitaire::types::{Card, Difficulty, Suit, KING};

fn bench_start_game(c: &mut Criterion) {
    let mut session = GameSession::new();
    let mut seed = 0u64;

    c.bench_function("start_game_four_suits", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            session.start_game_with_seed(Difficulty::FourSuits, black_box(seed));
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    c.bench_function("seeded_deck", |b| {
        b.iter(|| seeded_deck(Difficulty::TwoSuits, black_box(42)))
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut session = GameSession::new();
    session.start_game_with_seed(Difficulty::OneSuit, 12345);
    session.deal();
    session.deal();

    c.bench_function("legal_moves", |b| {
        b.iter(|| legal_moves(black_box(session.tableau())))
    });
}

fn bench_find_complete_run(c: &mut Criterion) {
    // Worst case: a long column whose run sits at the very bottom.
    let mut column: Vec<Card> = (0..13u8)
        .map(|i| Card::new(i as u16, Suit::Spades, KING - i).face_up())
        .collect();
    column.extend((0..12u8).map(|i| Card::new(20 + i as u16, Suit::Hearts, 12 - i).face_up()));

    c.bench_function("find_complete_run", |b| {
        b.iter(|| find_complete_run(black_box(&column)))
    });
}

fn bench_deal_undo_redo(c: &mut Criterion) {
    let mut session = GameSession::new();
    session.start_game_with_seed(Difficulty::FourSuits, 7);
    session.deal();

    c.bench_function("undo_redo", |b| {
        b.iter(|| {
            session.undo();
            session.redo();
        })
    });
}

criterion_group!(
    benches,
    bench_start_game,
    bench_shuffle,
    bench_legal_moves,
    bench_find_complete_run,
    bench_deal_undo_redo
);
criterion_main!(benches);
