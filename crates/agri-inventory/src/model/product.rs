//! Catalog products and their inventory counters.
//!
//! [`Product`] implements [`ActorEntity`](actor_framework::ActorEntity), so every product
//! lives inside one [`ResourceActor`](actor_framework::ResourceActor) and its counters are
//! only ever changed by one message at a time. Creation takes a [`ProductCreate`]; counter
//! changes are [`ProductAction`](crate::product_actor::ProductAction)s.

use crate::product_actor::ProductError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    /// Accepts `7` as well as `product_7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        raw.strip_prefix("product_").unwrap_or(raw).parse().map(Self)
    }
}

/// The three inventory counters, used to name the one a refused write would have broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Stock,
    Prebooked,
    Sold,
}

impl Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Counter::Stock => "stock",
            Counter::Prebooked => "prebooked",
            Counter::Sold => "sold",
        })
    }
}

/// Signed change to a product's counters.
///
/// Rules are expressed per unit and scaled by the line-item quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterDelta {
    pub stock: i64,
    pub prebooked: i64,
    pub sold: i64,
}

impl CounterDelta {
    pub const NONE: Self = Self {
        stock: 0,
        prebooked: 0,
        sold: 0,
    };

    pub fn scaled(self, quantity: u32) -> Self {
        let q = i64::from(quantity);
        Self {
            stock: self.stock * q,
            prebooked: self.prebooked * q,
            sold: self.sold * q,
        }
    }

    pub fn inverse(self) -> Self {
        Self {
            stock: -self.stock,
            prebooked: -self.prebooked,
            sold: -self.sold,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// Units available for immediate sale.
    pub stock: u32,
    /// Units promised to customers waiting for stock.
    pub prebooked: u32,
    /// Cumulative units fulfilled.
    pub sold: u32,
}

impl Product {
    /// Creates a product with no stock and empty counters.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock: 0,
            prebooked: 0,
            sold: 0,
        }
    }

    /// Applies `delta` to all three counters, or to none of them.
    ///
    /// # Errors
    /// [`ProductError::CounterUnderflow`] if a counter would leave the `u32` range.
    pub fn apply(&mut self, delta: CounterDelta) -> Result<(), ProductError> {
        let stock = self.checked(Counter::Stock, self.stock, delta.stock)?;
        let prebooked = self.checked(Counter::Prebooked, self.prebooked, delta.prebooked)?;
        let sold = self.checked(Counter::Sold, self.sold, delta.sold)?;
        self.stock = stock;
        self.prebooked = prebooked;
        self.sold = sold;
        Ok(())
    }

    fn checked(&self, counter: Counter, current: u32, change: i64) -> Result<u32, ProductError> {
        u32::try_from(i64::from(current) + change).map_err(|_| ProductError::CounterUnderflow {
            product: self.id.to_string(),
            counter,
            current,
            change,
        })
    }
}

/// Payload for adding a product to the catalog.
///
/// Counters default to zero; seed files may start a product with existing counters.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub prebooked: u32,
    #[serde(default)]
    pub sold: u32,
}
