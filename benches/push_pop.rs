#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use secure_stack::SecureStack;

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("securestack push {} values", count), |b| {
            b.iter(|| {
                let mut stack = SecureStack::<usize>::new();
                for value in 0..count {
                    stack.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("securestack with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut stack = SecureStack::<usize>::with_capacity(count).unwrap();
                    for value in 0..count {
                        stack.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::with_capacity(4);
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("securestack push pop {} values", count), |b| {
            b.iter(|| {
                let mut stack = SecureStack::<usize>::new();
                for value in 0..count {
                    stack.push(black_box(value));
                }
                while let Ok(value) = stack.pop() {
                    black_box(value);
                }
            });
        });

        c.bench_function(&format!("stdvec push pop {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::with_capacity(4);
                for value in 0..count {
                    buf.push(black_box(value));
                }
                while let Some(value) = buf.pop() {
                    black_box(value);
                }
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
