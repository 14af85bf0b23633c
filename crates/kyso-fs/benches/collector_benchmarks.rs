use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kyso_fs::{collect_files, list_files};
use std::fs;
use tempfile::tempdir;

fn populate(root: &std::path::Path) {
    fs::write(root.join(".kysoignore"), "*.tmp\nscratch\n").unwrap();
    for d in 0..10 {
        let dir = root.join(format!("section-{d}"));
        fs::create_dir_all(dir.join("scratch")).unwrap();
        for f in 0..20 {
            fs::write(dir.join(format!("cell-{f}.md")), format!("cell {d}/{f}")).unwrap();
            fs::write(dir.join(format!("cell-{f}.tmp")), "tmp").unwrap();
        }
        fs::write(dir.join("scratch/ignored.md"), "ignored").unwrap();
    }
}

fn collector_benchmark(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    populate(dir.path());

    c.bench_function("collector::list_files", |b| {
        b.iter(|| list_files(black_box(dir.path())).unwrap())
    });

    c.bench_function("collector::collect_files", |b| {
        b.iter(|| collect_files(black_box(dir.path())).unwrap())
    });
}

criterion_group!(benches, collector_benchmark);
criterion_main!(benches);
