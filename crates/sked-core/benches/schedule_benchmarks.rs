use chrono::{Duration, NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use sked_core::schedule::Schedule;
use sked_core::task::{IdGenerator, Task};

fn create_test_tasks(count: usize) -> Vec<Task> {
    let mut ids = IdGenerator::new();
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            // Scatter the dates so insertion does not always hit the tail
            let offset = (i * 7919) % count;
            Task::new(
                ids.next_id(),
                "Benchmark Task",
                base + Duration::days(offset as i64),
                NaiveTime::from_hms_opt((i % 24) as u32, 0, 0).unwrap(),
            )
        })
        .collect()
}

fn bench_insert_sorted(c: &mut Criterion) {
    let tasks = create_test_tasks(1_000);

    c.bench_function("insert_sorted_1000_tasks", |b| {
        b.iter_batched(
            || tasks.clone(),
            |tasks| {
                let mut schedule = Schedule::new("Bench");
                for task in tasks {
                    schedule.insert_sorted(black_box(task));
                }
                schedule
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_by_timestamp(c: &mut Criterion) {
    let mut schedule = Schedule::new("Bench");
    for task in create_test_tasks(1_000) {
        schedule.insert_sorted(task);
    }
    let target = schedule.tail().map(Task::timestamp).unwrap();

    c.bench_function("find_by_timestamp_tail", |b| {
        b.iter(|| schedule.find_by_timestamp(black_box(target)).is_some())
    });
}

fn bench_reverse(c: &mut Criterion) {
    let mut schedule = Schedule::new("Bench");
    for task in create_test_tasks(1_000) {
        schedule.insert_sorted(task);
    }

    c.bench_function("reverse_1000_tasks", |b| {
        b.iter(|| schedule.reverse().unwrap())
    });
}

criterion_group!(benches, bench_insert_sorted, bench_find_by_timestamp, bench_reverse);
criterion_main!(benches);
