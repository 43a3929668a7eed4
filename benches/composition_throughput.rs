use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use folio::{Group, PipelineBuilder, RecordingBackend, SubItem};
use std::hint::black_box;

fn narrative_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 10 {
            0 => format!("## Seccion {}", i / 10),
            5 => String::new(),
            7 => format!("- Punto {} con **importe** destacado", i),
            _ => format!(
                "Linea {} de un parrafo largo que obliga a repartir las palabras en varias lineas \
                 cuando el texto supera el ancho imprimible de la pagina configurada por defecto.",
                i
            ),
        })
        .collect()
}

fn groups(count: usize) -> Vec<Group> {
    (0..count)
        .map(|i| Group {
            name: format!("Evento {}", i),
            counterpart: format!("Cliente {}", i % 7),
            date: NaiveDate::from_ymd_opt(2024, 1 + (i % 12) as u32, 1).unwrap_or_default(),
            amount: 125.5 * i as f64,
            sub_items: (0..i % 4)
                .map(|k| SubItem {
                    name: format!("Persona {}", k),
                    identifier: format!("ES{:04}", k),
                })
                .collect(),
        })
        .collect()
}

fn bench_narrative(c: &mut Criterion) {
    let pipeline = PipelineBuilder::new().build().expect("default pipeline");
    let lines = narrative_lines(1000);

    let mut group = c.benchmark_group("narrative");
    group.bench_function("lopdf_1000_lines", |b| {
        b.iter(|| pipeline.render_narrative(black_box(&lines)).expect("render"))
    });
    group.bench_function("recording_1000_lines", |b| {
        b.iter(|| {
            pipeline
                .render_narrative_with(RecordingBackend::new(), black_box(&lines))
                .expect("render")
        })
    });
    group.finish();
}

fn bench_tabular(c: &mut Criterion) {
    let pipeline = PipelineBuilder::new().build().expect("default pipeline");
    let data = groups(500);
    c.bench_function("tabular_500_groups", |b| {
        b.iter(|| pipeline.render_tabular(black_box(&data)).expect("render"))
    });
}

criterion_group!(benches, bench_narrative, bench_tabular);
criterion_main!(benches);
