#[cfg(test)]
#[path = "../../../tests/unit/models/common/load_test.rs"]
mod load_test;

use crate::models::common::Dimensions;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Max amount of load dimensions supported.
pub const LOAD_DIMENSION_SIZE: usize = 8;

custom_dimension!(JobDemand typeof Demand);

/// Represents job demand, both static and dynamic.
///
/// Static demand is loaded (or unloaded) at the depot, dynamic one is moved between two
/// activities of the same multi job (e.g. pickup and delivery of a shipment).
#[derive(Clone, Debug, Default)]
pub struct Demand {
    /// Keeps static and dynamic pickup amount.
    pub pickup: (MultiDimLoad, MultiDimLoad),
    /// Keeps static and dynamic delivery amount.
    pub delivery: (MultiDimLoad, MultiDimLoad),
}

impl Demand {
    /// Returns capacity change as difference between pickup and delivery.
    pub fn change(&self) -> MultiDimLoad {
        self.pickup.0 + self.pickup.1 - self.delivery.0 - self.delivery.1
    }
}

/// Specifies multi dimensional load type.
#[derive(Clone, Copy, Debug)]
pub struct MultiDimLoad {
    /// Load data.
    pub load: [i32; LOAD_DIMENSION_SIZE],
    /// Actual used size.
    pub size: usize,
}

impl MultiDimLoad {
    /// Creates a new instance of `MultiDimLoad`.
    pub fn new(data: Vec<i32>) -> Self {
        assert!(data.len() <= LOAD_DIMENSION_SIZE, "too many load dimensions: {}", data.len());

        let mut load = [0; LOAD_DIMENSION_SIZE];
        load.iter_mut().zip(data.iter()).for_each(|(slot, value)| *slot = *value);

        Self { load, size: data.len() }
    }

    /// Returns max load value per each dimension.
    pub fn max_load(self, other: Self) -> Self {
        let mut result = self;
        result.load.iter_mut().zip(other.load.iter()).for_each(|(a, b)| *a = (*a).max(*b));
        result.size = self.size.max(other.size);

        result
    }

    /// Converts to vector representation.
    pub fn as_vec(&self) -> Vec<i32> {
        if self.size == 0 { vec![0] } else { self.load[..self.size].to_vec() }
    }
}

impl Default for MultiDimLoad {
    fn default() -> Self {
        Self { load: [0; LOAD_DIMENSION_SIZE], size: 0 }
    }
}

impl Add for MultiDimLoad {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut dimens = self;
        dimens.load.iter_mut().zip(rhs.load.iter()).for_each(|(a, b)| *a += *b);
        dimens.size = self.size.max(rhs.size);

        dimens
    }
}

impl Sub for MultiDimLoad {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut dimens = self;
        dimens.load.iter_mut().zip(rhs.load.iter()).for_each(|(a, b)| *a -= *b);
        dimens.size = self.size.max(rhs.size);

        dimens
    }
}

impl PartialOrd for MultiDimLoad {
    /// Returns ordering only when all dimensions agree on it.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.load.iter().zip(other.load.iter()).try_fold(Ordering::Equal, |acc, (a, b)| match (acc, a.cmp(b)) {
            (acc, Ordering::Equal) => Some(acc),
            (Ordering::Equal, result) => Some(result),
            (acc, result) if acc == result => Some(acc),
            _ => None,
        })
    }
}

impl PartialEq for MultiDimLoad {
    fn eq(&self, other: &Self) -> bool {
        self.load == other.load
    }
}

impl Eq for MultiDimLoad {}

impl Sum for MultiDimLoad {
    fn sum<I: Iterator<Item = MultiDimLoad>>(iter: I) -> Self {
        iter.fold(MultiDimLoad::default(), |acc, item| item + acc)
    }
}

impl Display for MultiDimLoad {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_vec())
    }
}
