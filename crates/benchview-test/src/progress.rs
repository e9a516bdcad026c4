//! Collections and metadata for driving the live renderer.

use benchview_core::{
    BenchmarkMetadata, IterationCollection, Measurement, ParameterSet, SubjectMetadata,
};

/// `count` unmeasured iterations for subject `#index`.
pub fn pending_collection(index: usize, count: usize) -> IterationCollection {
    IterationCollection::new(
        SubjectMetadata::new(index, format!("bench{}", index)),
        count,
        ParameterSet::new(),
    )
}

/// A collection for subject `#0` with every iteration measured.
pub fn measured_collection(times: &[f64]) -> IterationCollection {
    let mut collection = pending_collection(0, times.len());
    for (index, &time) in times.iter().enumerate() {
        collection
            .record(
                index,
                Measurement {
                    time,
                    ..Default::default()
                },
            )
            .expect("fixture times are valid");
    }
    collection
}

/// Benchmark metadata with subjects `#0 <name>`, `#1 <name>`, ...
pub fn benchmark(class: &str, subjects: &[&str]) -> BenchmarkMetadata {
    subjects
        .iter()
        .enumerate()
        .fold(BenchmarkMetadata::new(class), |metadata, (index, name)| {
            metadata.with_subject(SubjectMetadata::new(index, *name))
        })
}
