//! Property tests for the range domain generator.

use proptest::prelude::*;

use camp::cover;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: both bounds are part of the domain, in increasing order.
    #[test]
    fn property_cover_spans_the_range(
        minimum in -1_000i64..1_000,
        width in 0i64..500,
        coverage in 1i64..40,
    ) {
        let maximum = minimum + width;
        let points = cover(minimum, maximum, coverage).unwrap();

        prop_assert_eq!(points.first().copied(), Some(minimum));
        prop_assert_eq!(points.last().copied(), Some(maximum));
        prop_assert!(points.windows(2).all(|pair| pair[0] < pair[1]));
    }

    /// PROPERTY: points are evenly spaced by a step no larger than the coverage.
    #[test]
    fn property_cover_step_is_even_and_bounded(
        minimum in -1_000i64..1_000,
        width in 1i64..500,
        coverage in 1i64..40,
    ) {
        let points = cover(minimum, minimum + width, coverage).unwrap();

        let step = points[1] - points[0];
        prop_assert!(step <= coverage);
        prop_assert_eq!(width % step, 0);
        prop_assert!(points.windows(2).all(|pair| pair[1] - pair[0] == step));
    }

    /// PROPERTY: invalid arguments are errors, never panics.
    #[test]
    fn property_cover_rejects_invalid_arguments(
        minimum in -1_000i64..1_000,
        maximum in -1_000i64..1_000,
        coverage in -5i64..5,
    ) {
        let result = cover(minimum, maximum, coverage);
        prop_assert_eq!(result.is_ok(), coverage >= 1 && maximum >= minimum);
    }
}
