use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratatui::{buffer::Buffer, layout::Rect};
use replay::calendar::{CalendarDay, CalendarGenerator, PresenceMode};
use replay::config::Config;
use replay::tui::action::{Action, CalendarAction};
use replay::tui::reducer::reduce;
use replay::tui::runtime::Runtime;
use replay::tui::state::AppState;
use replay::tui::types::View;
use replay::tui::Renderer;

/// November 2025, seeded so every run sees the same days
fn create_sample_state() -> AppState {
    let month = CalendarGenerator::new(PresenceMode::Seeded(42))
        .generate(2025, 10)
        .expect("valid month");
    AppState::new(Config::default(), month)
}

/// Benchmark month generation
fn bench_calendar_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar");

    let random = CalendarGenerator::default();
    group.bench_function("generate_random", |b| {
        b.iter(|| random.generate(black_box(2025), black_box(10)))
    });

    let seeded = CalendarGenerator::new(PresenceMode::Seeded(7));
    group.bench_function("generate_seeded", |b| {
        b.iter(|| seeded.generate(black_box(2024), black_box(1)))
    });

    group.finish();
}

/// Benchmark reducer action dispatch
fn bench_reducer_dispatch(c: &mut Criterion) {
    let state = create_sample_state();

    let mut group = c.benchmark_group("reducer");

    group.bench_function("navigate_calendar", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::Navigate(View::Calendar)),
            );
            new_state
        })
    });

    group.bench_function("select_day", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::SelectDay(CalendarDay::with_record(12))),
            );
            new_state
        })
    });

    group.bench_function("move_cursor", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::CalendarAction(CalendarAction::MoveCursor(7))),
            );
            new_state
        })
    });

    group.finish();
}

/// Benchmark building and drawing a full frame
fn bench_render(c: &mut Criterion) {
    let area = Rect::new(0, 0, 100, 40);
    let mut group = c.benchmark_group("render");

    for view in [View::Feed, View::Calendar, View::Profile] {
        let mut runtime = Runtime::new(create_sample_state());
        runtime.dispatch(Action::Navigate(view));
        runtime.update_viewport(area);
        let config = runtime.state().system.config.display.clone();

        group.bench_function(view.route(), |b| {
            b.iter(|| {
                let mut buf = Buffer::empty(area);
                Renderer::new().render(runtime.build(), area, &mut buf, &config);
                buf
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calendar_generation,
    bench_reducer_dispatch,
    bench_render
);
criterion_main!(benches);
