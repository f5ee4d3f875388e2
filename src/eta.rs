//! Time to exhaustion for a resource drained by fixed-period consumers.
//!
//! A consumer with period `d` takes one unit of the resource at each of the
//! times `d`, `2d`, `3d`, ... The ETA of a [`Request`] is the earliest time at
//! which all consumers together have taken at least `capacity` units.

use failure::Fail;
use std::cmp::Ordering;

/// A point in time, counted in the same units as the consumers' periods.
pub type Time = u128;

/// Why a request was rejected.
#[derive(Clone, Debug, Eq, PartialEq, Fail)]
pub enum InvalidInput {
    #[fail(display = "capacity must not be negative, got {}", _0)]
    NegativeCapacity(i64),

    #[fail(display = "at least one consumer period is required")]
    NoPeriods,

    #[fail(display = "period #{} must be positive, got {}", index, period)]
    NonPositivePeriod { index: usize, period: i64 },
}

/// A validated capacity and set of consumer periods.
///
/// Periods are kept sorted; the ETA doesn't depend on their order, and
/// sorting lets `consumed_by` stop at the first consumer that hasn't fired
/// yet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    capacity: u64,
    periods: Vec<u64>,
}

impl Request {
    pub fn new(capacity: i64, periods: &[i64]) -> Result<Request, InvalidInput> {
        if capacity < 0 {
            return Err(InvalidInput::NegativeCapacity(capacity));
        }
        if periods.is_empty() {
            return Err(InvalidInput::NoPeriods);
        }

        let mut sorted = Vec::with_capacity(periods.len());
        for (index, &period) in periods.iter().enumerate() {
            if period <= 0 {
                return Err(InvalidInput::NonPositivePeriod { index, period });
            }
            sorted.push(period as u64);
        }
        sorted.sort_unstable();

        Ok(Request {
            capacity: capacity as u64,
            periods: sorted,
        })
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// The consumer periods, in ascending order.
    pub fn periods(&self) -> &[u64] {
        &self.periods
    }

    /// Return the number of units consumed by all consumers up to and
    /// including time `t`. Saturates at `Time::max_value()`.
    ///
    ///     # extern crate eta_calculator as eta;
    ///     # use eta::Request;
    ///     let request = Request::new(13, &[2, 3, 4]).unwrap();
    ///     assert_eq!(request.consumed_by(12), 6 + 4 + 3);
    pub fn consumed_by(&self, t: Time) -> Time {
        let mut total: Time = 0;
        for &period in &self.periods {
            let period = Time::from(period);
            if period > t {
                break;
            }
            total = total.saturating_add(t / period);
        }
        total
    }

    /// Compare the consumption at time `t` against the capacity, stopping the
    /// sum as soon as the capacity is reached.
    fn compare_at(&self, t: Time) -> Ordering {
        let capacity = Time::from(self.capacity);
        let mut total: Time = 0;
        for &period in &self.periods {
            let period = Time::from(period);
            if period > t {
                break;
            }
            // `total <= capacity <= u64::MAX` and `t / period <= t < 2^126`,
            // so this never overflows.
            total += t / period;
            if total > capacity {
                return Ordering::Greater;
            }
        }
        total.cmp(&capacity)
    }

    fn is_exhausted_at(&self, t: Time) -> bool {
        self.compare_at(t) != Ordering::Less
    }

    /// Return the earliest time at which consumption reaches the capacity.
    ///
    /// The fastest consumer alone has taken `capacity` units by
    /// `capacity * periods[0]`, so that bounds the search.
    pub fn eta(&self) -> Time {
        if self.capacity == 0 {
            debug!("capacity is zero, exhausted at time 0");
            return 0;
        }

        let mut lo: Time = 0;
        let mut hi = Time::from(self.capacity) * Time::from(self.periods[0]);
        debug!(
            "capacity {}, {} consumers, searching [{}, {}]",
            self.capacity,
            self.periods.len(),
            lo,
            hi
        );

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.is_exhausted_at(mid) {
                trace!("t = {}: exhausted", mid);
                hi = mid;
            } else {
                trace!("t = {}: not yet", mid);
                lo = mid + 1;
            }
        }

        debug!("exhausted at time {}", lo);
        lo
    }
}

/// Return the earliest time at which consumers with the given `periods`
/// together consume `capacity` units.
///
///     # extern crate eta_calculator as eta;
///     # use eta::compute_eta;
///     assert_eq!(compute_eta(4, &[3, 7]), Ok(9));
///     assert_eq!(compute_eta(16, &[2, 4, 3, 6]), Ok(14));
///     assert!(compute_eta(4, &[]).is_err());
pub fn compute_eta(capacity: i64, periods: &[i64]) -> Result<Time, InvalidInput> {
    Ok(Request::new(capacity, periods)?.eta())
}
