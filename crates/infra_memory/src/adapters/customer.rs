//! In-Memory Customer Adapter
//!
//! Implements [`CustomerRepository`] over a `HashMap` behind a
//! `tokio::sync::RwLock`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_memory::InMemoryCustomerRepository;
//! use domain_customer::CustomerRepository;
//! use std::sync::Arc;
//!
//! let repository: Arc<dyn CustomerRepository> =
//!     Arc::new(InMemoryCustomerRepository::with_customers(seed));
//! let customer = repository.get(CustomerId::new(1), None).await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{
    CustomerId, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError,
};
use domain_customer::{Customer, CustomerRepository, CUSTOMER_ENTITY};

const ADAPTER_ID: &str = "in-memory-customer-repository";

/// Process-memory implementation of the CustomerRepository trait
///
/// Cloning the repository shares the underlying table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository with room for `capacity` customers
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::with_capacity(capacity))),
        }
    }

    /// Creates a repository holding the given customers
    ///
    /// A later customer with an id already seen replaces the earlier one.
    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let table: HashMap<CustomerId, Customer> = customers
            .into_iter()
            .map(|customer| (customer.id(), customer))
            .collect();
        Self {
            customers: Arc::new(RwLock::new(table)),
        }
    }

    /// Number of stored customers
    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

// Mark as a domain port
impl DomainPort for InMemoryCustomerRepository {}

#[async_trait]
impl HealthCheckable for InMemoryCustomerRepository {
    /// Reports healthy once the table lock can be taken for reading
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let count = self.customers.read().await.len();
        let latency_ms = start.elapsed().as_millis() as u64;

        HealthCheckResult::healthy(ADAPTER_ID, latency_ms)
            .with_message(format!("{} customers stored", count))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    #[instrument(skip_all, fields(customer_id = %id))]
    async fn get(
        &self,
        id: CustomerId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Customer, PortError> {
        debug!("Fetching customer by ID");

        self.customers
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found(CUSTOMER_ENTITY, id))
    }

    #[instrument(skip_all, fields(customer_id = %customer.id()))]
    async fn insert(
        &self,
        customer: &Customer,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        debug!("Inserting customer");

        let record = customer.clone();
        let mut customers = self.customers.write().await;
        if customers.contains_key(&record.id()) {
            return Err(PortError::already_exists(CUSTOMER_ENTITY, record.id()));
        }
        customers.insert(record.id(), record);
        Ok(())
    }

    #[instrument(skip_all, fields(customer_id = %customer.id()))]
    async fn update(
        &self,
        customer: &Customer,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        debug!("Updating customer");

        let record = customer.clone();
        let mut customers = self.customers.write().await;
        match customers.get_mut(&record.id()) {
            Some(stored) => {
                *stored = record;
                Ok(())
            }
            None => Err(PortError::not_found(CUSTOMER_ENTITY, record.id())),
        }
    }
}
