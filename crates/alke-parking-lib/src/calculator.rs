use crate::data_structures::{Vehicle, VehicleType};
use chrono::{DateTime, Utc};

/// Stays up to this long are charged the flat base rate.
pub const FREE_THRESHOLD_MINUTES: i64 = 120;
pub const SURCHARGE_BLOCK_MINUTES: i64 = 15;
pub const SURCHARGE_BLOCK_RATE: u32 = 5;
pub const SHORT_STAY_DISCOUNT_DIVISOR: f64 = 1.15;
pub const LONG_STAY_DISCOUNT_FACTOR: f64 = 0.85;

pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Fee for a stay of `parked_minutes`.
    ///
    /// Within the free threshold a discount card divides the base rate by
    /// 1.15; past it, every started 15 minute block adds 5 and a discount card
    /// multiplies the whole amount by 0.85. Both discounted results are
    /// truncated.
    pub fn calculate_fee(
        &self,
        vehicle_type: VehicleType,
        has_discount_card: bool,
        parked_minutes: i64,
    ) -> u32 {
        let rate = vehicle_type.rate();

        if parked_minutes <= FREE_THRESHOLD_MINUTES {
            return if has_discount_card {
                (f64::from(rate) / SHORT_STAY_DISCOUNT_DIVISOR) as u32
            } else {
                rate
            };
        }

        let total = self.excess_charge(parked_minutes).saturating_add(rate);

        if has_discount_card {
            (f64::from(total) * LONG_STAY_DISCOUNT_FACTOR) as u32
        } else {
            total
        }
    }

    pub fn calculate_vehicle_fee(&self, vehicle: &Vehicle, now: DateTime<Utc>) -> u32 {
        self.calculate_fee(
            vehicle.vehicle_type(),
            vehicle.has_discount_card(),
            vehicle.parked_minutes_at(now),
        )
    }

    /// Number of started surcharge blocks past the free threshold.
    pub fn excess_blocks(&self, parked_minutes: i64) -> i64 {
        let excess = parked_minutes - FREE_THRESHOLD_MINUTES;
        if excess <= 0 {
            return 0;
        }
        (excess + SURCHARGE_BLOCK_MINUTES - 1) / SURCHARGE_BLOCK_MINUTES
    }

    fn excess_charge(&self, parked_minutes: i64) -> u32 {
        u32::try_from(self.excess_blocks(parked_minutes))
            .unwrap_or(u32::MAX)
            .saturating_mul(SURCHARGE_BLOCK_RATE)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
