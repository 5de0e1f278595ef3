//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating driver profiles that stay
//! inside the domain the pricing rules are defined for.

use proptest::prelude::*;

use domain_rating::{DriverProfile, VehicleCategory};

/// Strategy for driver ages, including the under-16 edge
pub fn age_strategy() -> impl Strategy<Value = u32> {
    0u32..110u32
}

/// Strategy for accident counts over five years
pub fn accidents_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        2 => Just(1u32),
        2 => 2u32..20u32,
    ]
}

/// Strategy for (make, model) pairs drawn from known vehicles and
/// free-form text, with random letter casing
pub fn vehicle_strategy() -> impl Strategy<Value = (String, String)> {
    let known = prop_oneof![
        Just(("ferrari", "488")),
        Just(("porsche", "911")),
        Just(("corvette", "stingray")),
        Just(("ford", "mustang")),
        Just(("ford", "explorer")),
        Just(("bmw", "x5")),
        Just(("mercedes", "c300")),
        Just(("lexus", "highlander")),
        Just(("audi", "a4")),
        Just(("chevrolet", "tahoe")),
        Just(("toyota", "highlander")),
        Just(("honda", "suv")),
        Just(("toyota", "camry")),
        Just(("honda", "civic")),
    ]
    .prop_map(|(make, model)| (make.to_string(), model.to_string()));

    let free_form = ("[a-z]{1,12}", "[a-z0-9]{1,10}");

    (prop_oneof![3 => known, 1 => free_form], any::<bool>(), any::<bool>())
        .prop_map(|((make, model), upper_make, upper_model)| {
            let make = if upper_make { make.to_uppercase() } else { make };
            let model = if upper_model { model.to_uppercase() } else { model };
            (make, model)
        })
}

/// Strategy for complete driver profiles
pub fn driver_profile_strategy() -> impl Strategy<Value = DriverProfile> {
    (age_strategy(), vehicle_strategy(), accidents_strategy()).prop_map(
        |(age, (make, model), accidents)| DriverProfile::new(age, make, model, accidents),
    )
}

/// Strategy for vehicle categories
pub fn vehicle_category_strategy() -> impl Strategy<Value = VehicleCategory> {
    prop_oneof![
        Just(VehicleCategory::Sedan),
        Just(VehicleCategory::Suv),
        Just(VehicleCategory::Luxury),
        Just(VehicleCategory::Sports),
    ]
}
