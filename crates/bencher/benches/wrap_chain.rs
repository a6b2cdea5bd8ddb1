use bencher::TestCase;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_beverage::beverage::{BaseOrder, Beverage, BeverageExt, Latte, Portion};
use micro_beverage::condiment::{ChocolateCrumbs, Cinnamon, IceCubeKind, IceCubes, Lemon};
use micro_beverage::wrap;
use std::hint::black_box;

fn create_test_cases() -> Vec<TestCase> {
    vec![TestCase::small("chain_of_4", 4), TestCase::normal("chain_of_32", 32), TestCase::large("chain_of_256", 256)]
}

fn benchmark_boxed_chain(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("boxed_chain");

    for case in test_cases {
        group.throughput(Throughput::Elements(case.depth() as u64));
        group.bench_with_input(BenchmarkId::new(case.group().as_str(), case.name()), &case, |b, case| {
            b.iter_batched(
                || case.condiments(),
                |condiments| {
                    let mut beverage = BaseOrder::Latte(Portion::Standard).brew();
                    for condiment in condiments {
                        beverage = wrap(beverage, condiment);
                    }
                    black_box((beverage.description(), beverage.cost()));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_static_chain(criterion: &mut Criterion) {
    criterion.bench_function("static_chain", |b| {
        b.iter(|| {
            let beverage = Latte::standard()
                .with(Cinnamon)
                .with(Lemon::new(2))
                .with(IceCubes::new(2, IceCubeKind::Dry))
                .with(ChocolateCrumbs::new(2));
            black_box((beverage.description(), beverage.cost()));
        });
    });
}

criterion_group!(chain, benchmark_boxed_chain, benchmark_static_chain);
criterion_main!(chain);
