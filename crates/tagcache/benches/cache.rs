use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tagcache::Cache;

fn tags(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("tag-{i}")).collect()
}

fn bench_cached_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_read");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("read_1kb_cached", |b| {
        let mut cache = Cache::new(1000);
        let data = vec![b'x'; 1024];
        let tags = tags(100);

        for tag in &tags {
            cache.write(tag, data.clone());
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.read(&tags[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write_cached", |b| {
        let mut cache = Cache::new(1000);
        let data = vec![b'x'; 1024];
        let tags = tags(100);

        for tag in &tags {
            cache.write(tag, data.clone());
        }

        let mut counter = 0usize;
        b.iter(|| {
            let tag = &tags[counter % 100];
            if counter % 2 == 0 {
                black_box(cache.read(tag).ok());
            } else {
                cache.write(tag, data.clone());
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    for capacity in [10, 100] {
        group.bench_function(format!("read_1kb_miss_capacity_{capacity}"), |b| {
            let mut cache = Cache::new(capacity);
            let data = vec![b'x'; 1024];
            let tags = tags(capacity * 10);

            // Pre-populate the backing store with more than cache size
            for tag in &tags {
                cache.write(tag, data.clone());
            }

            let mut counter = 0;
            b.iter(|| {
                // Cycling through every tag in order defeats LRU
                black_box(cache.read(&tags[counter % tags.len()]).unwrap());
                counter += 1;
            });
        });
    }

    group.bench_function("write_1kb_always_evicting", |b| {
        let mut cache = Cache::new(100);
        let data = vec![b'x'; 1024];
        let tags = tags(1000);

        for tag in &tags[..100] {
            cache.write(tag, data.clone());
        }

        let mut counter = 100;
        b.iter(|| {
            // The next tag was last written 900 writes ago, so writes keep evicting
            cache.write(&tags[counter % tags.len()], black_box(data.clone()));
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cached_read, bench_mixed_50_50, bench_eviction);
criterion_main!(benches);
