use escrow_split::domain::breakdown::Rounding;
use escrow_split::{
    BreakdownCalculator, FeeRate, PaymentError, PaymentStatus, ServiceAmount, compute_breakdown,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

#[test]
fn test_documented_values() {
    let cases = [
        (dec!(0), dec!(0), dec!(0)),
        (dec!(100), dec!(15), dec!(85)),
        (dec!(99.99), dec!(15), dec!(84.99)),
        (dec!(33.33), dec!(5), dec!(28.33)),
    ];

    for (amount, fee, payout) in cases {
        let breakdown = compute_breakdown(ServiceAmount::new(amount).unwrap());
        assert_eq!(breakdown.amount, amount);
        assert_eq!(breakdown.platform_fee, fee, "fee for {amount}");
        assert_eq!(breakdown.technician_payout, payout, "payout for {amount}");
    }
}

#[test]
fn test_random_cent_amounts_split_exactly() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let calculator = BreakdownCalculator::default();

    for _ in 0..10_000 {
        let amount = Decimal::new(rng.gen_range(0..100_000_000), 2);
        let breakdown = calculator.compute(ServiceAmount::new(amount).unwrap());

        let expected_fee =
            (amount * dec!(0.15)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(breakdown.platform_fee, expected_fee);
        assert_eq!(breakdown.technician_payout, amount - expected_fee);
        assert_eq!(breakdown.platform_fee + breakdown.technician_payout, amount);
        assert_eq!(breakdown.platform_fee.scale(), 2);
        assert_eq!(breakdown.technician_payout.scale(), 2);
    }
}

#[test]
fn test_random_sub_cent_amounts_within_a_cent() {
    let mut rng = StdRng::seed_from_u64(42);

    for rounding in [Rounding::HalfAwayFromZero, Rounding::HalfEven] {
        let calculator = BreakdownCalculator::new(FeeRate::default(), rounding);
        for _ in 0..10_000 {
            let amount = Decimal::new(rng.gen_range(0..10_000_000), rng.gen_range(0..=6));
            let breakdown = calculator.compute(ServiceAmount::new(amount).unwrap());

            let total = breakdown.platform_fee + breakdown.technician_payout;
            let rounded = amount.round_dp_with_strategy(2, rounding.into());
            assert!(
                (total - rounded).abs() <= dec!(0.01),
                "{amount}: {total} vs {rounded}"
            );
            assert!(breakdown.platform_fee >= Decimal::ZERO);
            assert!(breakdown.technician_payout >= Decimal::ZERO);
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let calculator = BreakdownCalculator::default();
    let amount: ServiceAmount = "1234.5678".parse().unwrap();

    let first = calculator.compute(amount);
    for _ in 0..100 {
        let again = calculator.compute(amount);
        assert_eq!(again, first);
        assert_eq!(again.platform_fee.to_string(), first.platform_fee.to_string());
    }
}

#[test]
fn test_degenerate_inputs_are_rejected() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.01] {
        assert!(matches!(
            ServiceAmount::try_from(value),
            Err(PaymentError::ValidationError(_))
        ));
    }
    assert!(matches!(
        "twelve".parse::<ServiceAmount>(),
        Err(PaymentError::ValidationError(_))
    ));
    assert!(matches!(
        ServiceAmount::new(dec!(-100)),
        Err(PaymentError::ValidationError(_))
    ));
}

#[test]
fn test_status_membership() {
    assert_eq!(PaymentStatus::ALL.len(), 4);
    for label in ["pending", "held_in_escrow", "released", "refunded"] {
        assert!(label.parse::<PaymentStatus>().is_ok());
    }
    for label in ["settled", "escrow", "REFUNDED"] {
        assert!(label.parse::<PaymentStatus>().is_err());
    }
}
