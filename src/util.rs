pub fn sum_vector(vec: &[f64]) -> f64 {
    let mut sum = 0.0;
    for i in vec { sum += i }
    sum
}

// Element-wise arithmetic mean of equally long rows.
pub fn mean_rows<const N: usize>(rows: &[&[f64; N]]) -> [f64; N] {
    assert!(!rows.is_empty(), "mean of no rows");

    let mut out = [0.0; N];
    for (idx, slot) in out.iter_mut().enumerate() {
        for row in rows {
            *slot += row[idx];
        }
        *slot /= rows.len() as f64;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_and_means() {
        assert_eq!(sum_vector(&[0.25, 0.5, 0.25]), 1.0);
        assert_eq!(mean_rows(&[&[1.0, 2.0], &[3.0, 6.0]]), [2.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "mean of no rows")]
    fn mean_of_nothing_panics() {
        let rows: [&[f64; 2]; 0] = [];
        mean_rows(&rows);
    }
}
