#![no_main]

use libfuzzer_sys::fuzz_target;

use matmul_core::{Matrix, Shape};

fn dim(byte: u8) -> usize {
    // High bit selects a shape whose element count overflows.
    if byte & 0x80 == 0 {
        usize::from(byte % 17)
    } else {
        usize::MAX - usize::from(byte & 0x7f)
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let rows = dim(data[0]);
    let cols = dim(data[1]);
    let values: Vec<f64> = data[2..].iter().map(|&b| f64::from(b)).collect();
    let len = values.len();

    match Matrix::from_vec(rows, cols, values) {
        Ok(m) => {
            assert_eq!(rows.checked_mul(cols), Some(len));
            assert_eq!(m.shape(), Shape::new(rows, cols));
            assert_eq!(m.get(rows, 0), None);
        }
        Err(_) => assert_ne!(rows.checked_mul(cols), Some(len)),
    }
});
