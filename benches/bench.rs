use criterion::{criterion_group, criterion_main};

mod checksum_benchmark {
    use criterion::{black_box, Criterion};
    use nordic_validators::checksum::{mod10, mod11};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let numbers = vec![
            "378282246310005",
            "7505092556",
            "8112289874",
            "96601000010",
            "92300000018",
            "0000000018",
        ];
        c.bench_function("mod10-checksum", |b| {
            b.iter(|| {
                for number in numbers.iter() {
                    mod10(black_box(number));
                }
            })
        });
        c.bench_function("mod11-checksum", |b| {
            b.iter(|| {
                for number in numbers.iter() {
                    mod11(black_box(number));
                }
            })
        });
    }
}

mod national_id_benchmark {
    use criterion::{black_box, BenchmarkId, Criterion};
    use nordic_validators::{Validator, ValidatorKind};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let inputs = vec![
            (ValidatorKind::SwedishSsn, "202302185760"),
            (ValidatorKind::DanishSsn, "1306729647"),
            (ValidatorKind::NorwegianSsn, "30078512470"),
            (ValidatorKind::FinnishSsn, "010114A173M"),
        ];
        let mut group = c.benchmark_group("national-id");
        for (kind, input) in inputs {
            group.bench_with_input(BenchmarkId::from_parameter(kind), input, |b, input| {
                b.iter(|| kind.is_valid_match(black_box(input)))
            });
        }
        group.finish();
    }
}

mod bank_account_benchmark {
    use criterion::{black_box, Criterion};
    use nordic_validators::account_number_check;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let accounts = vec![
            // first entry of the table
            "9660-1000010",
            // near the end of the table
            "3300-7505092556",
            // no entry matches
            "1234567890",
        ];
        c.bench_function("bank-account", |b| {
            b.iter(|| {
                for account in accounts.iter() {
                    account_number_check(black_box(account));
                }
            })
        });
    }
}

criterion_group!(
    benches,
    checksum_benchmark::criterion_benchmark,
    national_id_benchmark::criterion_benchmark,
    bank_account_benchmark::criterion_benchmark
);
criterion_main!(benches);
