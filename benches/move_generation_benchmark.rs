//! Benchmarks for pseudo-legal move generation.

use tabletop::board::{color::Color, Board};
use tabletop::chess_position;
use tabletop::move_generator::{count_positions, generate_moves};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn middlegame_position() -> Board {
    chess_position! {
        r...k..r
        ppp..ppp
        ..nbbn..
        ...qp...
        ...P....
        ..NBBN..
        PPPQ.PPP
        R...K..R
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let starting_position = Board::starting_position();
    c.bench_function("generate moves from the starting position", |b| {
        b.iter(|| generate_moves(black_box(&starting_position), Color::White))
    });

    let middlegame = middlegame_position();
    c.bench_function("generate moves in a middlegame", |b| {
        b.iter(|| {
            let white = generate_moves(black_box(&middlegame), Color::White);
            let black = generate_moves(black_box(&middlegame), Color::Black);
            white.len() + black.len()
        })
    });

    c.bench_function("count all possible positions to depth 2", |b| {
        b.iter(|| count_positions(2, &mut Board::starting_position(), Color::White))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
