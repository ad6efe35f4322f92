use criterion::{criterion_group, criterion_main, Criterion};
use matebot::evaluation::{evaluate, evaluate_terminal, material};
use matebot::ChessPosition;

fn bench_material(c: &mut Criterion) {
    let positions = [
        ("startpos", ChessPosition::new()),
        ("hanging_queen", ChessPosition::from_fen("6k1/8/8/3q4/8/8/8/3R2K1 w - - 0 1").unwrap()),
        ("bare_queen", ChessPosition::from_fen("7k/8/6K1/8/8/8/5Q2/8 w - - 0 1").unwrap()),
    ];
    let mut group = c.benchmark_group("material");
    for (name, pos) in &positions {
        group.bench_function(*name, |b| b.iter(|| material(pos)));
    }
    group.finish();
}

// evaluate() asks the rules engine whether any move exists, so the terminal
// positions take the checkmate / stalemate branch
fn bench_evaluate(c: &mut Criterion) {
    let positions = [
        ("startpos", ChessPosition::new()),
        ("white_mated", ChessPosition::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap()),
        ("black_mated", ChessPosition::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap()),
        ("stalemate", ChessPosition::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap()),
    ];
    let mut group = c.benchmark_group("evaluate");
    for (name, pos) in &positions {
        group.bench_function(*name, |b| b.iter(|| evaluate(pos)));
    }
    group.finish();

    let mated = &positions[1].1;
    c.bench_function("evaluate_terminal_mated", |b| b.iter(|| evaluate_terminal(mated)));
}

criterion_group!(benches, bench_material, bench_evaluate);
criterion_main!(benches);
