// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for chordnote
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Note token parsing (bare and octave-bearing)
//! - Chord expansion with and without octaves
//! - Scale expansion from a root
//! - Catalog lookups with custom definitions layered on top

use chordnote::music::{Catalog, CustomDefinition};
use chordnote::{chord_kinds, chord_notes, chord_notes_with_octave, note_number, scale_from_root};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark note token parsing
fn bench_note_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("note_number");

    for token in ["C", "Db", "C-1", "F#4", "G9"] {
        group.bench_with_input(BenchmarkId::from_parameter(token), &token, |b, token| {
            b.iter(|| black_box(note_number(black_box(token))))
        });
    }

    group.finish();
}

/// Benchmark chord expansion
fn bench_chord_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("chord");

    for symbol in ["C", "BM7", "C13", "F#m7(b5)"] {
        group.bench_with_input(BenchmarkId::new("names", symbol), &symbol, |b, symbol| {
            b.iter(|| black_box(chord_notes(black_box(symbol))))
        });
        group.bench_with_input(BenchmarkId::new("octave", symbol), &symbol, |b, symbol| {
            b.iter(|| black_box(chord_notes_with_octave(black_box(symbol), 3)))
        });
    }

    group.finish();
}

/// Benchmark expanding every chord kind from one root
fn bench_all_chord_kinds(c: &mut Criterion) {
    let symbols: Vec<String> = chord_kinds()
        .into_iter()
        .map(|kind| if kind == "base" { "D".to_string() } else { format!("D{}", kind) })
        .collect();

    c.bench_function("all_chord_kinds", |b| {
        b.iter(|| {
            let mut total = 0;
            for symbol in &symbols {
                if let Ok(notes) = chord_notes(symbol) {
                    total += notes.len();
                }
            }
            black_box(total)
        })
    });
}

/// Benchmark scale expansion
fn bench_scale_expansion(c: &mut Criterion) {
    c.bench_function("scale_from_root", |b| {
        b.iter(|| black_box(scale_from_root(black_box("Super-Locrian"), black_box("Eb3"))))
    });
}

/// Benchmark catalog lookups with custom kinds registered
fn bench_catalog(c: &mut Criterion) {
    let catalog = Catalog::with_definitions(
        &[CustomDefinition::new("m7add11", vec![0, 3, 7, 10, 17])],
        &[CustomDefinition::new("hirajoshi", vec![0, 2, 3, 7, 8])],
    )
    .expect("valid definitions");

    let mut group = c.benchmark_group("catalog");
    group.bench_function("custom_chord", |b| {
        b.iter(|| black_box(catalog.chord_notes(black_box("Am7add11"))))
    });
    group.bench_function("built_in_chord", |b| {
        b.iter(|| black_box(catalog.chord_notes(black_box("AM7"))))
    });
    group.bench_function("custom_scale", |b| {
        b.iter(|| black_box(catalog.scale_from_root(black_box("Hirajoshi"), black_box("A3"))))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_note_parsing,
    bench_chord_expansion,
    bench_all_chord_kinds,
    bench_scale_expansion,
    bench_catalog,
);

criterion_main!(benches);
