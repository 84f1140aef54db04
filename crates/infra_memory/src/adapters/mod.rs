//! Domain Adapters
//!
//! Adapter implementations for domain ports backed by process memory.

pub mod customer;

pub use customer::InMemoryCustomerRepository;
