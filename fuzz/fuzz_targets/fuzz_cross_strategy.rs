#![no_main]

use libfuzzer_sys::fuzz_target;

use matmul_core::{
    DelegatedMultiplier, Matrix, MatrixError, Multiplier, NaiveMultiplier, StrassenMultiplier,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    // Shapes capped at 40 so Strassen pads to at most 64.
    let rows = usize::from(data[0] % 41);
    let inner = usize::from(data[1] % 41);
    let b_rows = if data[4] & 0x80 == 0 { inner } else { usize::from(data[4] % 41) };
    let cols = usize::from(data[2] % 41);
    let threshold = usize::from(data[3] % 9);

    // Small integer entries keep every strategy exact.
    let mut bytes = data[5..].iter().cycle();
    let mut next = || bytes.next().map_or(0.0, |&b| f64::from(b as i8 >> 3));
    let a = Matrix::from_fn(rows, inner, |_, _| next());
    let b = Matrix::from_fn(b_rows, cols, |_, _| next());

    let strategies: [Box<dyn Multiplier>; 4] = [
        Box::new(NaiveMultiplier::new()),
        Box::new(DelegatedMultiplier::new()),
        Box::new(StrassenMultiplier::new(threshold)),
        Box::new(StrassenMultiplier::parallel(threshold, 8)),
    ];

    let results: Vec<_> = strategies.iter().map(|m| m.multiply(&a, &b)).collect();

    if b_rows != inner {
        for r in &results {
            assert!(matches!(r, Err(MatrixError::DimensionMismatch { .. })));
        }
        return;
    }

    let reference = results[0].as_ref().expect("naive failed on compatible shapes");
    assert_eq!(reference.rows(), rows);
    assert_eq!(reference.cols(), cols);
    for (m, r) in strategies.iter().zip(&results).skip(1) {
        let product = r.as_ref().expect("strategy failed on compatible shapes");
        assert_eq!(product, reference, "{} != Naive at {rows}x{inner}x{cols}", m.name());
    }
});
