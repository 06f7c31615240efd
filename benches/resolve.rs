use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gapic_metadata::schema::ClientVariant;
use gapic_metadata::{catalog, loader};

fn bench_parse(c: &mut Criterion) {
    let json = catalog::DATABASE_ADMIN_JSON;
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(json.len() as u64));
    group.bench_function("database_admin", |b| {
        b.iter(|| loader::from_str(json).expect("parse"))
    });
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let meta = catalog::database_admin();
    let mut group = c.benchmark_group("resolve");
    for variant in ClientVariant::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(variant),
            &variant,
            |b, &variant| {
                b.iter(|| {
                    meta.resolve("DatabaseAdmin", variant, "UpdateDatabaseDdl").expect("resolve")
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_resolve);
criterion_main!(benches);
