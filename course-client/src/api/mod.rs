//! Typed endpoints of the course administration API
//!
//! Every write returns a [`Mutation`] carrying the query keys it made stale,
//! and publishes the same keys on the API's [`InvalidationBus`].

mod badges;
mod courses;
mod dashboard;
mod help;
mod modules;
mod teachers;
mod users;
mod videos;

use shared::QueryKey;

use crate::cache::{Invalidation, InvalidationBus, InvalidationCause};
use crate::http::HttpClient;

/// Result of a successful write
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    pub value: T,
    /// Keys whose cached reads are now stale
    pub stale: Vec<QueryKey>,
}

/// Admin API client over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct AdminApi<C> {
    http: C,
    bus: InvalidationBus,
}

impl<C: HttpClient> AdminApi<C> {
    pub fn new(http: C) -> Self {
        Self::with_bus(http, InvalidationBus::new())
    }

    /// Share an existing bus (e.g. with a [`QueryCache`](crate::QueryCache) listener)
    pub fn with_bus(http: C, bus: InvalidationBus) -> Self {
        Self { http, bus }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn bus(&self) -> &InvalidationBus {
        &self.bus
    }

    fn written<T>(&self, value: T, stale: Vec<QueryKey>) -> Mutation<T> {
        self.bus
            .publish(Invalidation::new(stale.clone(), InvalidationCause::Write));
        Mutation { value, stale }
    }
}
