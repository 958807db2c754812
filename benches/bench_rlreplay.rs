#[path = "../tests/common/mod.rs"]
mod common;

use common::ReplayBuilder;
use criterion::{criterion_group, criterion_main, Criterion};
use rlreplay::crc::calc_crc;
use rlreplay::{EventProjector, ParserBuilder, ProjectorOptions};
use std::hint::black_box;
use std::io;

/// A lobby of one player followed by a long run of score updates, with a keyframe every
/// 300 frames
fn replay() -> Vec<u8> {
    let mut b = ReplayBuilder::soccar();
    let mut f = b.frame(true);
    f.spawn(1, "Archetypes.Teams.Team0")
        .spawn(2, "Archetypes.Teams.Team1")
        .spawn(3, "TAGame.Default__PRI_TA");
    f.update(3);
    f.prop(1, 5).text("alpha");
    f.prop(2, 5).u8(1).u64(76561198101748375).u8(0);
    f.prop(3, 5).bit(true).i32(1);
    f.done().end();

    for i in 1..10_000 {
        let mut f = b.frame(i % 300 == 0);
        f.update(1 + (i % 2) as u32).prop(1, 2).i32(i / 2);
        f.done();
        f.update(3).prop(4, 5).i32(i / 4);
        f.done().end();
    }

    b.build()
}

fn bench_crc(c: &mut Criterion) {
    let data = replay();
    c.bench_function("bench_crc", |b| {
        b.iter(|| black_box(calc_crc(&data)));
    });
}

fn bench_parse_crc_body(c: &mut Criterion) {
    let data = replay();
    c.bench_function("bench_parse_crc_body", |b| {
        b.iter(|| {
            black_box(
                ParserBuilder::new(&data)
                    .always_check_crc()
                    .must_parse_network_data()
                    .parse()
                    .is_ok(),
            )
        });
    });
}

fn bench_parse_no_crc_no_body(c: &mut Criterion) {
    let data = replay();
    c.bench_function("bench_parse_no_crc_no_body", |b| {
        b.iter(|| {
            black_box(
                ParserBuilder::new(&data)
                    .on_error_check_crc()
                    .never_parse_network_data()
                    .parse()
                    .is_ok(),
            )
        });
    });
}

fn bench_project_events(c: &mut Criterion) {
    let data = replay();
    let replay = ParserBuilder::new(&data).parse().unwrap();
    let projector = EventProjector::new(&replay.objects, ProjectorOptions::default());
    c.bench_function("bench_project_events", |b| {
        b.iter(|| black_box(projector.project_replay(&replay).events.len()));
    });
}

fn bench_parse_json(c: &mut Criterion) {
    let data = replay();
    c.bench_function("bench_parse_json", |b| {
        b.iter(|| {
            let replay = ParserBuilder::new(&data).on_error_check_crc().parse().unwrap();
            black_box(serde_json::to_writer(&mut io::sink(), &replay).is_ok());
        });
    });
}

criterion_group!(
    benches,
    bench_crc,
    bench_parse_crc_body,
    bench_parse_no_crc_no_body,
    bench_project_events,
    bench_parse_json
);

criterion_main!(benches);
