//! Tests for the association coefficients and zero-denominator saturation

#[cfg(test)]
mod tests {
    use charmatch::classification::coefficient::{
        Coefficient, dice, jaccard_needham, russell_rao, saturating_ratio, sokal_sneath,
    };
    use charmatch::model::contingency::ContingencySummary;
    use charmatch::model::matrix::Matrix;
    use ndarray::array;

    const TOLERANCE: f64 = 1e-12;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < TOLERANCE
    }

    // Tests all four coefficients on the 1x1 zero/zero summary
    // Verified by subtracting g instead of b for Jaccard-Needham
    #[test]
    fn test_zero_cell_coefficients() {
        let zero = Matrix::new(array![[0]], None);
        let summary = ContingencySummary::between(&zero, &zero).unwrap();

        assert!(close(russell_rao(&summary), 0.25));
        assert!(close(jaccard_needham(&summary), 0.5));
        assert!(close(dice(&summary), 1.0 / 3.0));
        assert!(close(sokal_sneath(&summary), 1.0 / 3.0));
    }

    // Tests denominators on a summary where every coefficient differs
    // Verified by doubling g + h in the Dice denominator
    #[test]
    fn test_denominators() {
        let summary = ContingencySummary {
            a: 4.0,
            b: 3.0,
            g: 2.0,
            h: 1.0,
        };

        assert!(close(russell_rao(&summary), 4.0 / 10.0));
        assert!(close(jaccard_needham(&summary), 4.0 / 7.0));
        assert!(close(dice(&summary), 4.0 / 11.0));
        assert!(close(sokal_sneath(&summary), 4.0 / 10.0));
    }

    // Tests a zero Dice or Sokal-Sneath denominator yields a itself
    // Verified by returning zero on a zero denominator
    #[test]
    fn test_zero_denominator_returns_a() {
        let dice_zero = ContingencySummary {
            a: 2.0,
            b: 0.0,
            g: -1.0,
            h: -3.0,
        };
        assert!(close(dice(&dice_zero), 2.0));

        let sokal_zero = ContingencySummary {
            a: 2.0,
            b: 5.0,
            g: -1.0,
            h: 0.0,
        };
        assert!(close(sokal_sneath(&sokal_zero), 2.0));

        let empty = ContingencySummary::default();
        for coefficient in Coefficient::ALL {
            assert!(close(coefficient.similarity(&empty), 0.0));
        }
    }

    // Tests the saturating division helper directly
    // Verified by dividing by zero
    #[test]
    fn test_saturating_ratio() {
        assert!(close(saturating_ratio(3.0, 0.0), 3.0));
        assert!(close(saturating_ratio(3.0, 2.0), 1.5));
        assert!((saturating_ratio(1.0_f32, 0.0) - 1.0).abs() < f32::EPSILON);
    }

    // Tests dispatch order and names
    // Verified by reordering the coefficient list
    #[test]
    fn test_order_and_dispatch() {
        let names: Vec<&str> = Coefficient::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["Russell and Rao", "Jaccard and Needham", "Dice", "Sokal and Sneath"]
        );

        let summary = ContingencySummary {
            a: 4.0,
            b: 3.0,
            g: 2.0,
            h: 1.0,
        };
        assert!(close(
            Coefficient::JaccardNeedham.similarity(&summary),
            jaccard_needham(&summary)
        ));
        assert!(close(
            Coefficient::SokalSneath.similarity(&summary),
            sokal_sneath(&summary)
        ));
    }
}
