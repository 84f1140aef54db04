//! Infrastructure In-Memory Layer
//!
//! This crate provides the reference storage adapter for the customer
//! registry: a single table of customers held in process memory and guarded
//! by one reader/writer lock.
//!
//! # Concurrency
//!
//! Reads share the lock; inserts and updates take it exclusively. The lock
//! is held only for the map lookup or assignment, and records are cloned in
//! and out so callers never alias stored data.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_memory::InMemoryCustomerRepository;
//! use domain_customer::RegistryService;
//! use std::sync::Arc;
//!
//! let repository = Arc::new(InMemoryCustomerRepository::with_capacity(1024));
//! let service = RegistryService::new(repository);
//! ```

pub mod adapters;

pub use adapters::InMemoryCustomerRepository;
