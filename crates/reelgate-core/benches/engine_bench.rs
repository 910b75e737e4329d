use criterion::{Criterion, black_box, criterion_group, criterion_main};
use reelgate_core::{EngineConfig, QualityEngine};

fn bench_engine(c: &mut Criterion) {
    let engine = QualityEngine::new(EngineConfig::default()).unwrap();

    let inputs = vec![
        "Avengers.Endgame.2019.1080p.BluRay.x265.10bit.DD5.1.HEVC-Galaxy",
        "Movie.2023.2160p.AMZN.WEB-DL.DDP5.1.Atmos.DV.HDR10.H.265",
        "Movie.2023.1080p.HDCam.AAC.2.0.mkv",
        "Movie.2023.720p.WEBRip.x264",
        "Some Home Video.mkv",
    ];

    c.bench_function("classify_single", |b| {
        b.iter(|| engine.classify(black_box(inputs[0])));
    });

    c.bench_function("classify_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = engine.classify(black_box(input));
            }
        });
    });

    c.bench_function("compare_quality", |b| {
        b.iter(|| {
            engine.compare_quality(
                black_box(inputs[0]),
                black_box("3.2GB"),
                black_box(inputs[2]),
                black_box("1.5GB"),
            )
        });
    });

    c.bench_function("parse_size", |b| {
        b.iter(|| engine.parse_size(black_box("3.2 GB")));
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
