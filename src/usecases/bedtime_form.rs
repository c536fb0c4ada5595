//! Form state: the three inputs plus the bounds the widgets enforce.
//!
//! Setters clamp into range the way the pickers would; the calculation never sees the bounds.

use crate::domain::{
    BedtimeRequest, CoffeeAmount, CoffeeRange, SleepAmount, SleepRange, WakeTime,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BedtimeForm {
    wake_time: WakeTime,
    sleep_amount: SleepAmount,
    coffee_amount: CoffeeAmount,
    sleep_range: SleepRange,
    coffee_range: CoffeeRange,
}

impl BedtimeForm {
    /// Initial form: given wake time, middle sleep option, and the lowest coffee count.
    pub fn new(wake_time: WakeTime, sleep_range: SleepRange, coffee_range: CoffeeRange) -> Self {
        Self {
            wake_time,
            sleep_amount: sleep_range.default_amount(),
            coffee_amount: CoffeeAmount::new(coffee_range.min()),
            sleep_range,
            coffee_range,
        }
    }

    pub fn wake_time(&self) -> WakeTime {
        self.wake_time
    }

    pub fn sleep_amount(&self) -> SleepAmount {
        self.sleep_amount
    }

    pub fn coffee_amount(&self) -> CoffeeAmount {
        self.coffee_amount
    }

    pub fn sleep_range(&self) -> SleepRange {
        self.sleep_range
    }

    pub fn coffee_range(&self) -> CoffeeRange {
        self.coffee_range
    }

    pub fn set_wake_time(&mut self, wake_time: WakeTime) {
        self.wake_time = wake_time;
    }

    pub fn set_sleep_amount(&mut self, amount: SleepAmount) {
        self.sleep_amount = self.sleep_range.clamp(amount);
    }

    pub fn set_coffee_amount(&mut self, amount: CoffeeAmount) {
        self.coffee_amount = self.coffee_range.clamp(amount);
    }

    /// Snapshot of the current inputs.
    pub fn request(&self) -> BedtimeRequest {
        BedtimeRequest {
            wake_time: self.wake_time,
            sleep_amount: self.sleep_amount,
            coffee_amount: self.coffee_amount,
        }
    }
}

impl Default for BedtimeForm {
    fn default() -> Self {
        Self::new(
            WakeTime::default(),
            SleepRange::default(),
            CoffeeRange::default(),
        )
    }
}
