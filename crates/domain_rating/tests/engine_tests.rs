//! Rating Engine Tests
//!
//! This module exercises the engine end to end:
//! - Reference pricing scenarios
//! - Age factor behavior per band, including the under-16 edge
//! - Accident surcharge tiers and the skipped rule for clean drivers
//! - Quote audit trail
//! - Custom tables at the edges of decimal range and precision
//! - Property tests over generated profiles
//!
//! # Test Organization
//!
//! - `scenarios` - Fully itemized reference premiums
//! - `age_factor` - Age band adjustments
//! - `accident_history` - Surcharge tiers
//! - `quotes` - Quote identity and rule trail
//! - `custom_tables` - Overflow and sub-cent factors
//! - `properties` - Invariants over random profiles

use domain_rating::rules::{ACCIDENT_HISTORY_LABEL, AGE_FACTOR_LABEL};
use core_kernel::{Currency, MoneyError};
use domain_rating::{classify, KnowledgeBase, RateKey, RateTable, RatingEngine, RatingError};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{
    assert_money_eq, assert_no_adjustment, assert_premium, assert_total_consistent,
    driver_profile_strategy, standard_engine, DriverProfileBuilder, ProfileFixtures,
};

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

mod scenarios {
    use super::*;

    /// 30-year-old in a Camry with a clean record pays the sedan base rate
    #[test]
    fn test_standard_sedan() {
        let premium = standard_engine()
            .calculate_premium(&ProfileFixtures::standard_sedan())
            .unwrap();

        assert_premium(&premium, dec!(1000), &[(AGE_FACTOR_LABEL, dec!(0))], dec!(1000));
    }

    /// 18-year-old in a Ferrari with one accident
    #[test]
    fn test_teen_sports_one_accident() {
        let premium = standard_engine()
            .calculate_premium(&ProfileFixtures::teen_sports_one_accident())
            .unwrap();

        assert_premium(
            &premium,
            dec!(1800),
            &[(AGE_FACTOR_LABEL, dec!(1800)), (ACCIDENT_HISTORY_LABEL, dec!(300))],
            dec!(3900),
        );
    }

    /// 70-year-old in a BMW X5 with two accidents is rated luxury, not suv
    #[test]
    fn test_senior_luxury_two_accidents() {
        let premium = standard_engine()
            .calculate_premium(&ProfileFixtures::senior_luxury_two_accidents())
            .unwrap();

        assert_premium(
            &premium,
            dec!(1500),
            &[(AGE_FACTOR_LABEL, dec!(450)), (ACCIDENT_HISTORY_LABEL, dec!(600))],
            dec!(2550),
        );
    }

    /// 22-year-old in a Ford Explorer is rated suv
    #[test]
    fn test_young_adult_suv() {
        let premium = standard_engine()
            .calculate_premium(&ProfileFixtures::young_adult_suv())
            .unwrap();

        assert_premium(&premium, dec!(1200), &[(AGE_FACTOR_LABEL, dec!(600))], dec!(1800));
    }

    /// Adjustment explanations are carried through to the caller
    #[test]
    fn test_explanations() {
        let premium = standard_engine()
            .calculate_premium(&ProfileFixtures::teen_sports_one_accident())
            .unwrap();

        let explanations: Vec<_> = premium
            .adjustments()
            .iter()
            .map(|a| a.explanation.as_str())
            .collect();
        assert_eq!(
            explanations,
            vec![
                "Drivers under 20 have higher statistical risk",
                "Surcharge for 1 accident in past 5 years",
            ]
        );
    }
}

// ============================================================================
// AGE FACTOR
// ============================================================================

mod age_factor {
    use super::*;

    fn age_adjustment(age: u32) -> Decimal {
        let profile = DriverProfileBuilder::new().with_age(age).build();
        let premium = standard_engine().calculate_premium(&profile).unwrap();
        premium.adjustment(AGE_FACTOR_LABEL).unwrap().amount.amount()
    }

    /// Sedan base is 1000, so the adjustment is 1000 × (factor − 1)
    #[test]
    fn test_band_edges() {
        assert_eq!(age_adjustment(16), dec!(1000));
        assert_eq!(age_adjustment(19), dec!(1000));
        assert_eq!(age_adjustment(20), dec!(500));
        assert_eq!(age_adjustment(24), dec!(500));
        assert_eq!(age_adjustment(25), dec!(0));
        assert_eq!(age_adjustment(65), dec!(0));
        assert_eq!(age_adjustment(66), dec!(300));
        assert_eq!(age_adjustment(99), dec!(300));
    }

    /// Ages below 16 take the 16-19 factor; there is no separate tier
    #[test]
    fn test_under_sixteen_uses_teen_factor() {
        assert_eq!(age_adjustment(15), age_adjustment(16));
        assert_eq!(age_adjustment(0), dec!(1000));
    }

    /// The age factor is always recorded, even when it is zero
    #[test]
    fn test_standard_band_still_itemized() {
        let premium = standard_engine()
            .calculate_premium(&DriverProfileBuilder::new().with_age(40).build())
            .unwrap();

        let adjustment = premium.adjustment(AGE_FACTOR_LABEL).unwrap();
        assert!(adjustment.amount.is_zero());
        assert_eq!(adjustment.explanation, "Standard rate for drivers 25-65");
    }
}

// ============================================================================
// ACCIDENT HISTORY
// ============================================================================

mod accident_history {
    use super::*;

    fn premium_with_accidents(accidents: u32) -> domain_rating::Premium {
        let profile = DriverProfileBuilder::new().with_accidents(accidents).build();
        standard_engine().calculate_premium(&profile).unwrap()
    }

    #[test]
    fn test_clean_record_has_no_accident_adjustment() {
        let premium = premium_with_accidents(0);
        assert_no_adjustment(&premium, ACCIDENT_HISTORY_LABEL);
        assert_eq!(premium.adjustments().len(), 1);
    }

    #[test]
    fn test_one_accident() {
        let premium = premium_with_accidents(1);
        assert_money_eq(&premium.adjustment(ACCIDENT_HISTORY_LABEL).unwrap().amount, dec!(300));
    }

    #[test]
    fn test_two_or_more_accidents() {
        for accidents in [2, 5] {
            let premium = premium_with_accidents(accidents);
            let adjustment = premium.adjustment(ACCIDENT_HISTORY_LABEL).unwrap();
            assert_money_eq(&adjustment.amount, dec!(600));
            assert_eq!(
                adjustment.explanation,
                "Major surcharge for 2+ accidents in past 5 years"
            );
        }
    }

    /// The accident surcharge is flat: it does not scale with the base rate
    #[test]
    fn test_surcharge_is_flat() {
        let sedan = premium_with_accidents(1);
        let sports = standard_engine()
            .calculate_premium(
                &DriverProfileBuilder::new()
                    .with_vehicle("Porsche", "911")
                    .with_accidents(1)
                    .build(),
            )
            .unwrap();

        assert_eq!(
            sedan.adjustment(ACCIDENT_HISTORY_LABEL).unwrap().amount,
            sports.adjustment(ACCIDENT_HISTORY_LABEL).unwrap().amount
        );
    }
}

// ============================================================================
// QUOTES
// ============================================================================

mod quotes {
    use super::*;

    #[test]
    fn test_quote_carries_profile_and_category() {
        let profile = ProfileFixtures::senior_luxury_two_accidents();
        let quote = standard_engine().quote(&profile).unwrap();

        assert_eq!(quote.profile, profile);
        assert_eq!(quote.vehicle_category, domain_rating::VehicleCategory::Luxury);
        assert_eq!(quote.premium.total().amount(), dec!(2550));
        assert_eq!(
            quote.applied_rules(),
            vec!["base rate", "age factor", "accident history"]
        );
    }

    #[test]
    fn test_each_quote_gets_a_new_id() {
        let profile = ProfileFixtures::standard_sedan();
        let first = standard_engine().quote(&profile).unwrap();
        let second = standard_engine().quote(&profile).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.premium, second.premium);
    }

    #[test]
    fn test_quote_serializes() {
        let quote = standard_engine()
            .quote(&ProfileFixtures::teen_sports_one_accident())
            .unwrap();
        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(json["vehicle_category"], "sports");
        assert_eq!(json["evaluations"][2]["rule"], "accident_history");
        assert_eq!(json["evaluations"][2]["applied"], true);
        assert_eq!(json["profile"]["vehicle_make"], "Ferrari");
    }
}

// ============================================================================
// CUSTOM TABLES
// ============================================================================

mod custom_tables {
    use super::*;

    /// The shipped table with the given overrides applied
    fn engine_with(overrides: &[(RateKey, Decimal)]) -> RatingEngine {
        let standard = KnowledgeBase::standard();
        let entries = standard.entries().map(|(key, value)| {
            let value = overrides
                .iter()
                .find(|(k, _)| *k == key)
                .map_or(value, |(_, v)| *v);
            (key, value)
        });
        let kb = KnowledgeBase::from_entries(Currency::USD, entries.collect::<Vec<_>>()).unwrap();
        RatingEngine::with_knowledge_base(kb).unwrap()
    }

    fn base_rates(value: Decimal) -> Vec<(RateKey, Decimal)> {
        KnowledgeBase::standard()
            .entries()
            .filter(|(key, _)| key.table() == RateTable::BaseRate)
            .map(|(key, _)| (key, value))
            .collect()
    }

    /// An age adjustment too large for a decimal is an error, not a panic
    #[test]
    fn test_age_factor_overflow_is_reported() {
        let mut overrides = base_rates(Decimal::MAX);
        overrides.push((RateKey::AgeFactor(domain_rating::AgeBand::Teen), dec!(3)));
        let engine = engine_with(&overrides);

        let err = engine
            .calculate_premium(&DriverProfileBuilder::new().with_age(18).build())
            .unwrap_err();

        assert!(matches!(err, RatingError::Money(MoneyError::InvalidAmount(_))));
        assert!(!err.is_configuration());
    }

    /// A total too large for a decimal is an error, not a panic
    #[test]
    fn test_total_overflow_is_reported() {
        let engine = engine_with(&base_rates(Decimal::MAX));

        let clean = engine
            .calculate_premium(&DriverProfileBuilder::new().with_age(40).build())
            .unwrap();
        assert_eq!(clean.total().amount(), Decimal::MAX);

        let err = engine
            .calculate_premium(&DriverProfileBuilder::new().with_age(40).with_accidents(1).build())
            .unwrap_err();
        assert!(matches!(err, RatingError::Money(MoneyError::InvalidAmount(_))));
    }

    /// Factors finer than a cent still produce a positive adjustment
    #[test]
    fn test_sub_cent_factor_is_kept() {
        let mut overrides = base_rates(dec!(1));
        overrides.push((RateKey::AgeFactor(domain_rating::AgeBand::Teen), dec!(1.00001)));
        let engine = engine_with(&overrides);

        let premium = engine
            .calculate_premium(&DriverProfileBuilder::new().with_age(18).build())
            .unwrap();
        let adjustment = premium.adjustment(AGE_FACTOR_LABEL).unwrap();

        assert_eq!(adjustment.amount.amount(), dec!(0.00001));
        assert!(adjustment.amount.is_positive());
        assert_eq!(premium.total().amount(), dec!(1.00001));
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

mod properties {
    use super::*;

    proptest! {
        #[test]
        fn base_rate_matches_classified_category(profile in driver_profile_strategy()) {
            let kb = KnowledgeBase::standard();
            let premium = standard_engine().calculate_premium(&profile).unwrap();
            let category = classify(&profile.vehicle_make, &profile.vehicle_model);

            prop_assert_eq!(
                premium.base_rate().amount(),
                kb.get(RateKey::BaseRate(category)).unwrap()
            );
        }

        #[test]
        fn total_is_base_plus_adjustments(profile in driver_profile_strategy()) {
            let premium = standard_engine().calculate_premium(&profile).unwrap();
            assert_total_consistent(&premium);
        }

        #[test]
        fn age_adjustment_sign_follows_band(profile in driver_profile_strategy()) {
            let premium = standard_engine().calculate_premium(&profile).unwrap();
            let adjustment = premium.adjustment(AGE_FACTOR_LABEL).unwrap();

            if (25..66).contains(&profile.age) {
                prop_assert!(adjustment.amount.is_zero());
            } else {
                prop_assert!(adjustment.amount.is_positive());
            }
        }

        #[test]
        fn accident_adjustment_present_iff_accidents(profile in driver_profile_strategy()) {
            let premium = standard_engine().calculate_premium(&profile).unwrap();
            let present = premium.adjustment(ACCIDENT_HISTORY_LABEL).is_some();

            prop_assert_eq!(present, profile.accidents_in_last_five_years > 0);
            prop_assert_eq!(
                premium.adjustments().len(),
                if present { 2 } else { 1 }
            );
        }

        #[test]
        fn rating_is_deterministic(profile in driver_profile_strategy()) {
            let engine = RatingEngine::new();
            prop_assert_eq!(
                engine.calculate_premium(&profile).unwrap(),
                engine.calculate_premium(&profile).unwrap()
            );
        }
    }
}
