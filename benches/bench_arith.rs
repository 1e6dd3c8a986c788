use criterion::Criterion;

use bench_util::{bench_binary, bench_unary, configure_criterion, gen_pairs, gen_range};

fn bench_arith(c: &mut Criterion) {
    let pairs = gen_pairs(256, -1e6, 1e6, 0x12345678);
    let values = gen_range(256, 1e-6, 1e6, 0x9abcdef0);

    let mut group = c.benchmark_group("arith");
    bench_binary(&mut group, "add", &pairs, |x, y| x + y);
    bench_binary(&mut group, "mul", &pairs, |x, y| x * y);
    bench_binary(&mut group, "div", &pairs, |x, y| x / y);
    bench_unary(&mut group, "sqr", &values, |x| x.sqr());
    bench_unary(&mut group, "sqrt", &values, |x| x.sqrt());
    bench_unary(&mut group, "round", &values, |x| x.round());
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_arith(&mut c);
    c.final_summary();
}
