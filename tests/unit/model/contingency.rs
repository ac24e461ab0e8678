//! Tests for contingency sums including the per-cell offsets

#[cfg(test)]
mod tests {
    use charmatch::model::contingency::ContingencySummary;
    use charmatch::model::matrix::Matrix;
    use ndarray::array;

    // Tests single zero cell contributes only the offsets
    // Verified by adding an offset to h
    #[test]
    fn test_zero_cell_offsets() {
        let zero = Matrix::new(array![[0]], None);
        let summary = ContingencySummary::between(&zero, &zero).unwrap();

        assert_eq!(
            summary,
            ContingencySummary {
                a: 1.0,
                b: 2.0,
                g: 1.0,
                h: 0.0
            }
        );
        assert!((summary.total() - 4.0).abs() < f64::EPSILON);
    }

    // Tests each binary cell pattern lands in the expected sums
    // Verified by swapping the g and h terms
    #[test]
    fn test_binary_patterns() {
        let input = Matrix::new(array![[1, 1, 0, 0]], None);
        let standard = Matrix::new(array![[1, 0, 1, 0]], None);
        let summary = ContingencySummary::between(&input, &standard).unwrap();

        // One cell of each kind plus four offsets on a, b and g
        assert_eq!(summary.a, 5.0);
        assert_eq!(summary.b, 5.0);
        assert_eq!(summary.g, 5.0);
        assert_eq!(summary.h, 1.0);
    }

    // Tests asymmetry between g and h when arguments swap
    // Verified by making h carry the same offset as g
    #[test]
    fn test_swap_is_asymmetric() {
        let ones = Matrix::new(array![[1, 1]], None);
        let zeros = Matrix::new(array![[0, 0]], None);

        let forward = ContingencySummary::between(&ones, &zeros).unwrap();
        let backward = ContingencySummary::between(&zeros, &ones).unwrap();

        assert_eq!(forward.g, 4.0);
        assert_eq!(forward.h, 0.0);
        assert_eq!(backward.g, 2.0);
        assert_eq!(backward.h, 2.0);
    }

    // Tests mismatched shapes are refused
    // Verified by removing the shape check
    #[test]
    fn test_shape_mismatch() {
        let input = Matrix::new(array![[1, 0]], None);
        let standard = Matrix::new(array![[1], [0]], None);

        assert!(ContingencySummary::between(&input, &standard).is_err());
    }
}
