// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use serde::Deserialize;
use vitrine_gesture::{
    DoubleTapRecognizer, GestureConfig, GestureEngine, InteractionLog, PanClamp, PinchFocus,
    PointerEvent, PointerPhase,
};

const TRACE: &str = include_str!("../data/pinch_pan_trace.json");

#[derive(Deserialize)]
struct Trace {
    events: Vec<RecordedEvent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum RecordedPhase {
    Down,
    Move,
    Up,
    Cancel,
    Leave,
}

#[derive(Deserialize)]
struct RecordedEvent {
    id: u32,
    x: f64,
    y: f64,
    phase: RecordedPhase,
}

impl From<&RecordedEvent> for PointerEvent<u32> {
    fn from(e: &RecordedEvent) -> Self {
        let phase = match e.phase {
            RecordedPhase::Down => PointerPhase::Down,
            RecordedPhase::Move => PointerPhase::Move,
            RecordedPhase::Up => PointerPhase::Up,
            RecordedPhase::Cancel => PointerPhase::Cancel,
            RecordedPhase::Leave => PointerPhase::Leave,
        };
        Self::new(e.id, Point::new(e.x, e.y), phase)
    }
}

fn load_trace() -> Vec<PointerEvent<u32>> {
    let trace: Trace = serde_json::from_str(TRACE).expect("fixture is valid JSON");
    trace.events.iter().map(PointerEvent::from).collect()
}

/// Repeats the recorded trace `times`, offsetting pointer ids so every copy is
/// a fresh set of contacts.
fn repeated(trace: &[PointerEvent<u32>], times: u32) -> Vec<PointerEvent<u32>> {
    (0..times)
        .flat_map(|round| {
            trace.iter().map(move |e| PointerEvent {
                id: e.id + round * 16,
                ..*e
            })
        })
        .collect()
}

fn bench_replay(c: &mut Criterion) {
    let trace = load_trace();
    let mut group = c.benchmark_group("gesture/replay");

    let configs = [
        ("viewer", GestureConfig::viewer()),
        ("feed", GestureConfig::feed()),
        (
            "midpoint_clamped",
            GestureConfig::viewer()
                .with_pinch_focus(PinchFocus::Midpoint)
                .with_pan_clamp(PanClamp::ContentEdges),
        ),
    ];

    for times in [1_u32, 16, 256] {
        let events = repeated(&trace, times);
        group.throughput(Throughput::Elements(events.len() as u64));

        for (name, config) in configs {
            group.bench_with_input(BenchmarkId::new(name, times), &events, |b, events| {
                b.iter_batched(
                    || {
                        let mut engine = GestureEngine::<u32>::new(config);
                        engine.set_surface_size(Size::new(400.0, 600.0));
                        engine.set_transform_origin(Point::new(200.0, 300.0));
                        (engine, InteractionLog::new())
                    },
                    |(mut engine, mut log)| {
                        for event in events {
                            black_box(engine.handle_with(*event, &mut log));
                        }
                        black_box((engine.transform(), log));
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_double_tap(c: &mut Criterion) {
    let trace = load_trace();
    let events = repeated(&trace, 64);
    let mut group = c.benchmark_group("gesture/double_tap");
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("recognizer", |b| {
        b.iter_batched(
            DoubleTapRecognizer::<u32>::default,
            |mut taps| {
                let mut recognized = 0_usize;
                for (i, event) in events.iter().enumerate() {
                    recognized += usize::from(taps.on_event(event, i as u64 * 8));
                }
                black_box(recognized);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_replay, bench_double_tap);
criterion_main!(benches);
