//! Whole-tick throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stage_brawl::core::DeterministicRng;
use stage_brawl::game::{tick, InputFrame, MatchConfig, MatchState, Stage};
use stage_brawl::Archetype;

fn fresh_state(config: &MatchConfig) -> MatchState {
    MatchState::new(
        7,
        [Archetype::Ranger, Archetype::Brute],
        Stage::battlefield(config.stage_width, config.stage_height),
    )
}

fn bench_idle_ticks(c: &mut Criterion) {
    let config = MatchConfig::default();
    let idle = [InputFrame::new(); 2];

    c.bench_function("tick_idle", |b| {
        let mut state = fresh_state(&config);
        b.iter(|| {
            tick(black_box(&mut state), &idle, &config);
        });
    });
}

fn bench_busy_ticks(c: &mut Criterion) {
    let config = MatchConfig::default();

    c.bench_function("tick_busy", |b| {
        let mut state = fresh_state(&config);
        let mut script = DeterministicRng::new(99);
        b.iter(|| {
            let inputs = [
                InputFrame::from_flags((script.next_u64() & 0x7F) as u16),
                InputFrame::from_flags((script.next_u64() & 0x7F) as u16),
            ];
            tick(black_box(&mut state), &inputs, &config);
        });
    });
}

fn bench_full_match(c: &mut Criterion) {
    let config = MatchConfig::default();

    c.bench_function("match_600_ticks", |b| {
        b.iter(|| {
            let mut state = fresh_state(&config);
            let mut script = DeterministicRng::new(1234);
            for _ in 0..600 {
                let inputs = [
                    InputFrame::from_flags((script.next_u64() & 0x7F) as u16),
                    InputFrame::from_flags((script.next_u64() & 0x7F) as u16),
                ];
                tick(&mut state, &inputs, &config);
            }
            black_box(state.tick)
        });
    });
}

criterion_group!(benches, bench_idle_ticks, bench_busy_ticks, bench_full_match);
criterion_main!(benches);
