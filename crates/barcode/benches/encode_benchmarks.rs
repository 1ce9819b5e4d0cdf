use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use locker_barcode::{BarcodeCard, RenderContext, Symbology};
use locker_core::Card;

fn bench_encode_by_size(c: &mut Criterion) {
    let ctx = RenderContext::default();
    let card = BarcodeCard::with_fields(Some("CVS"), Some("384038939120"), Some("EAN_13"));

    let mut group = c.benchmark_group("encode_ean13");
    for (w, h) in [(200u32, 80u32), (460, 160), (1150, 400)] {
        group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));
        group.bench_with_input(BenchmarkId::from_parameter(format!("{w}x{h}")), &(w, h), |b, &(w, h)| {
            b.iter(|| card.encode(black_box(&ctx), w, h).unwrap())
        });
    }
    group.finish();
}

fn bench_symbologies(c: &mut Criterion) {
    let ctx = RenderContext::default();
    let payloads = [
        (Symbology::Ean13, "400638133393"),
        (Symbology::Ean8, "9638507"),
        (Symbology::UpcA, "03600029145"),
        (Symbology::Code39, "MEMBER-0042"),
    ];

    let mut group = c.benchmark_group("encode_symbology");
    for (symbology, code) in payloads {
        let card = BarcodeCard::with_fields(Some("bench"), Some(code), Some(symbology.tag()));
        group.bench_function(symbology.tag(), |b| {
            b.iter(|| card.encode(black_box(&ctx), 600, 200).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode_by_size, bench_symbologies);
criterion_main!(benches);
