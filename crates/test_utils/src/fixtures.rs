//! Pre-built Test Fixtures
//!
//! Ready-made driver profiles for the reference pricing scenarios, plus a
//! lazily built engine that test suites can share.

use fake::faker::lorem::en::Word;
use fake::Fake;
use once_cell::sync::Lazy;

use domain_rating::{DriverProfile, RatingEngine};

static STANDARD_ENGINE: Lazy<RatingEngine> = Lazy::new(RatingEngine::new);

/// Returns a shared engine over the shipped knowledge base
pub fn standard_engine() -> &'static RatingEngine {
    &STANDARD_ENGINE
}

/// Fixture for driver profiles
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// 30-year-old, Toyota Camry, no accidents: total 1000
    pub fn standard_sedan() -> DriverProfile {
        DriverProfile::new(30, "Toyota", "Camry", 0)
    }

    /// 18-year-old, Ferrari 488, one accident: total 3900
    pub fn teen_sports_one_accident() -> DriverProfile {
        DriverProfile::new(18, "Ferrari", "488", 1)
    }

    /// 70-year-old, BMW X5, two accidents: total 2550
    pub fn senior_luxury_two_accidents() -> DriverProfile {
        DriverProfile::new(70, "BMW", "X5", 2)
    }

    /// 22-year-old, Ford Explorer, no accidents
    pub fn young_adult_suv() -> DriverProfile {
        DriverProfile::new(22, "Ford", "Explorer", 0)
    }
}

/// Fixture for vehicle names absent from every classification list
pub struct VehicleFixtures;

impl VehicleFixtures {
    /// A random make that matches no sports or luxury entry
    pub fn unlisted_make() -> String {
        format!("{}motors", Word().fake::<String>())
    }

    /// A random model that matches no suv or sports entry
    pub fn unlisted_model() -> String {
        format!("{}-{}", Word().fake::<String>(), (100..999).fake::<u32>())
    }
}
