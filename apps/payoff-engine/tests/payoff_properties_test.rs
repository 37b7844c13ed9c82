//! Property tests for payoff and simulation invariants.

use payoff_engine::{
    AssetParam, Commission, OptionParam, OptionRight, Payoff, PositionBuilder, PositionSide,
    Quantity, SimulateRange,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn right() -> impl Strategy<Value = OptionRight> {
    prop_oneof![Just(OptionRight::Call), Just(OptionRight::Put)]
}

fn side() -> impl Strategy<Value = PositionSide> {
    prop_oneof![Just(PositionSide::Long), Just(PositionSide::Short)]
}

fn commission() -> impl Strategy<Value = Commission> {
    (0u32..10_000, 0u32..10_000).prop_map(|(long, short)| {
        Commission::new(Decimal::new(i64::from(long), 6), Decimal::new(i64::from(short), 6)).unwrap()
    })
}

proptest! {
    #[test]
    fn option_counterparties_net_to_zero_without_fees(
        right in right(),
        st in 0i64..100_000,
        strike in 0i64..100_000,
        premium in 0i64..10_000,
        qty in 1i64..1_000,
    ) {
        let long = OptionParam::new(PositionSide::Long, right, st, strike, premium)
            .unwrap()
            .with_quantity(Quantity::new(qty).unwrap());
        let short = long.with_position(PositionSide::Short);
        prop_assert_eq!(long.profit().unwrap(), -short.profit().unwrap());
    }

    #[test]
    fn asset_counterparties_net_to_zero_without_fees(
        price in 0i64..100_000,
        st in 0i64..100_000,
        qty in 1i64..1_000,
    ) {
        let long = AssetParam::new(PositionSide::Long, price, st)
            .unwrap()
            .with_quantity(Quantity::new(qty).unwrap());
        let short = long.with_position(PositionSide::Short);
        prop_assert_eq!(long.profit().unwrap(), -short.profit().unwrap());
    }

    #[test]
    fn fees_never_help_either_side(
        side in side(),
        right in right(),
        st in 0i64..100_000,
        strike in 0i64..100_000,
        premium in 0i64..10_000,
        commission in commission(),
    ) {
        let free = OptionParam::new(side, right, st, strike, premium).unwrap();
        let charged = free.with_commission(commission);
        prop_assert!(charged.profit().unwrap() <= free.profit().unwrap());
    }

    #[test]
    fn long_call_non_decreasing_long_put_non_increasing(
        lower in 0i64..100_000,
        bump in 0i64..10_000,
        strike in 0i64..100_000,
        premium in 0i64..10_000,
        commission in commission(),
    ) {
        let call = OptionParam::new(PositionSide::Long, OptionRight::Call, lower, strike, premium)
            .unwrap()
            .with_commission(commission);
        let put = OptionParam::new(PositionSide::Long, OptionRight::Put, lower, strike, premium)
            .unwrap()
            .with_commission(commission);
        let higher = lower + bump;

        prop_assert!(call.profit_at(higher).unwrap() >= call.profit().unwrap());
        prop_assert!(put.profit_at(higher).unwrap() <= put.profit().unwrap());
    }

    #[test]
    fn profit_is_idempotent(
        side in side(),
        right in right(),
        st in -1_000i64..100_000,
        strike in 0i64..100_000,
        premium in 0i64..10_000,
        commission in commission(),
    ) {
        let param = OptionParam::new(side, right, st, strike, premium)
            .unwrap()
            .with_commission(commission);
        prop_assert_eq!(param.profit().unwrap(), param.profit().unwrap());
    }

    #[test]
    fn simulation_length_matches_range(
        min in -5_000i64..5_000,
        max in -5_000i64..5_000,
        step in prop_oneof![-500i64..=-1, 1i64..=500],
    ) {
        let range = SimulateRange::new(min, max, step).unwrap();
        let call = OptionParam::new(PositionSide::Long, OptionRight::Call, 0, 100, 5).unwrap();
        let profits = PositionBuilder::new(vec![call], vec![], range).simulate().unwrap();

        let span = max - min;
        let expected = if span != 0 && (span > 0) == (step > 0) {
            // ceil(span / step) for same-sign operands
            ((span.abs() + step.abs() - 1) / step.abs()) as usize
        } else {
            0
        };
        prop_assert_eq!(profits.len(), expected);
        prop_assert_eq!(range.len(), expected);
    }
}
