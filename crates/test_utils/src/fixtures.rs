//! Pre-built test fixtures
//!
//! Deterministic tenants, periods, and amounts shared across crate test
//! suites. Fixtures panic on construction failure: their inputs are
//! literals that are valid by inspection.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Period, PeriodKey, TenantId};

/// Fixture tenants
pub struct TenantFixtures;

impl TenantFixtures {
    /// The tenant most scenarios revolve around
    pub fn t1() -> TenantId {
        TenantId::new("T1").unwrap()
    }

    /// A second tenant for isolation tests
    pub fn t2() -> TenantId {
        TenantId::new("T2").unwrap()
    }
}

/// Fixture periods
pub struct PeriodFixtures;

impl PeriodFixtures {
    pub fn jan_2024() -> Period {
        Period::new("2024-01").unwrap()
    }

    pub fn feb_2024() -> Period {
        Period::new("2024-02").unwrap()
    }

    pub fn mar_2024() -> Period {
        Period::new("2024-03").unwrap()
    }

    /// Key for T1 in January 2024
    pub fn t1_jan_2024() -> PeriodKey {
        PeriodKey::new(TenantFixtures::t1(), Self::jan_2024())
    }
}

/// Fixture amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// A typical monthly charge
    pub fn monthly_charge() -> Decimal {
        dec!(100.00)
    }

    /// A typical payment
    pub fn payment() -> Decimal {
        dec!(30.00)
    }

    /// An amount with sub-cent precision, for rounding-neutrality checks
    pub fn fractional() -> Decimal {
        dec!(12.3456)
    }
}
