use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rlibphonenumber_alternate_formats::{ALTERNATE_FORMATS, load_compiled_alternate_formats};

// (calling code, national significant number)
type TestEntity = (i32, &'static str);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        (49, "301234567"),
        (49, "15123456789"),
        (44, "2012345678"),
        (81, "120123456"),
        (61, "1300123456"),
        (43, "5012345678"),
        // No alternate format for these two.
        (55, "0123456789"),
        (1, "6502530000"),
    ]
}

fn alternate_format_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    // Force the lazy decode outside of the measured loop.
    ALTERNATE_FORMATS.rule_groups();

    let mut group = c.benchmark_group("Alternate formats");

    group.bench_function("find_alternate_format", |b| {
        b.iter(|| {
            for (calling_code, number) in &numbers {
                ALTERNATE_FORMATS.find_alternate_format(black_box(*calling_code), black_box(number));
            }
        })
    });

    group.bench_function("find_all_alternate_formats", |b| {
        b.iter(|| {
            for (calling_code, number) in &numbers {
                ALTERNATE_FORMATS.find_all_alternate_formats(black_box(*calling_code), black_box(number));
            }
        })
    });

    group.bench_function("decode compiled-in metadata", |b| {
        b.iter(|| load_compiled_alternate_formats().unwrap())
    });

    group.finish();
}

criterion_group!(benches, alternate_format_benchmark);
criterion_main!(benches);
