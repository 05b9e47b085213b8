#[cfg(test)]
mod tests {
    use super::super::constants::{SUGAR_PER_ML, TEA_PER_ML};
    use super::super::converter::{convert, convert_str};
    use super::super::error::ConvertError;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 0.005 + 1e-6;

    #[test]
    fn test_scenarios() {
        let cases = [
            ("675", 25.0, 7.0),
            ("1350", 50.0, 14.0),
            ("337.5", 12.5, 3.5),
        ];
        for (input, sugar, tea) in cases {
            let q = convert_str(input).unwrap();
            assert_eq!(q.sugar(), sugar, "sugar for {}", input);
            assert_eq!(q.tea(), tea, "tea for {}", input);
        }

        for input in ["0", "-10", "abc"] {
            assert_eq!(
                convert_str(input),
                Err(ConvertError::InvalidVolume),
                "input {:?}",
                input
            );
        }
    }

    proptest! {
        #[test]
        fn valid_volumes_scale_linearly(w in 1e-6f64..1e7) {
            let q = convert(w).unwrap();
            prop_assert!((q.sugar() - w * SUGAR_PER_ML).abs() <= TOLERANCE);
            prop_assert!((q.tea() - w * TEA_PER_ML).abs() <= TOLERANCE);
            prop_assert!(q.sugar() >= 0.0 && q.sugar().is_finite());
            prop_assert!(q.tea() >= 0.0 && q.tea().is_finite());
        }

        #[test]
        fn non_positive_volumes_are_rejected(w in -1e9f64..=0.0) {
            prop_assert_eq!(convert(w), Err(ConvertError::InvalidVolume));
        }

        #[test]
        fn rates_agree_across_volumes(w1 in 100.0f64..1e6, w2 in 100.0f64..1e6) {
            let s1 = convert(w1).unwrap().sugar() / w1;
            let s2 = convert(w2).unwrap().sugar() / w2;
            // 0.005 g of rounding error over at least 100 ml
            prop_assert!((s1 - s2).abs() <= 2.0 * TOLERANCE / 100.0);
        }

        #[test]
        fn repeated_calls_are_identical(w in 1e-3f64..1e7) {
            prop_assert_eq!(convert(w), convert(w));
        }

        #[test]
        fn text_without_digits_is_rejected(s in "[a-zA-Z ,;]*") {
            prop_assert_eq!(convert_str(&s), Err(ConvertError::InvalidVolume));
        }

        #[test]
        fn text_matches_numeric_conversion(w in 1e-3f64..1e7) {
            prop_assert_eq!(convert_str(&w.to_string()), convert(w));
        }
    }
}
