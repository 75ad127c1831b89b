//! # Agri Inventory
//!
//! Inventory reconciliation for an agricultural storefront: keeps each product's `stock`,
//! `prebooked` and `sold` counters consistent as orders move through their lifecycle, and
//! converts waiting prebookings into orders when stock arrives.
//!
//! - [`model`] - products, counters, orders and line items
//! - [`product_actor`] / [`order_actor`] - the actors owning that state
//! - [`clients`] - typed handles to the actors
//! - [`reconcile`] - the status transition handler and the stock replenisher
//! - [`api`] - axum routes for the back office
//! - [`lifecycle`] - starting, wiring and stopping the actors; tracing setup
//! - [`config`] / [`seed`] - environment configuration and startup data

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod reconcile;
pub mod seed;
