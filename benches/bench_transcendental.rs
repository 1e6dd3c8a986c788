use criterion::Criterion;

use bench_util::{bench_unary, configure_criterion, gen_range};

fn bench_transcendental(c: &mut Criterion) {
    let small = gen_range(256, -20.0, 20.0, 0xfeedface);
    let positive = gen_range(256, 1e-6, 1e6, 0xdeadbeef);
    let angles = gen_range(256, -1e4, 1e4, 0xcafef00d);

    let mut group = c.benchmark_group("transcendental");
    bench_unary(&mut group, "exp", &small, |x| x.exp());
    bench_unary(&mut group, "ln", &positive, |x| x.ln());
    bench_unary(&mut group, "sin", &angles, |x| x.sin());
    bench_unary(&mut group, "tan", &angles, |x| x.tan());
    bench_unary(&mut group, "atan", &small, |x| x.atan());
    bench_unary(&mut group, "sinh", &small, |x| x.sinh());
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_transcendental(&mut c);
    c.final_summary();
}
