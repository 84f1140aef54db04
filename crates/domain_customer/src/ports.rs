//! Customer Repository Port
//!
//! The registry service needs exactly three things from storage: fetch a
//! customer, insert a new one, and overwrite an existing one. The
//! [`CustomerRepository`] trait captures that contract so the store can be
//! swapped (in-memory, durable database, remote registry) without touching
//! the service.
//!
//! # Contract
//!
//! - `get` returns an independent copy of the stored record or
//!   `PortError::NotFound`.
//! - `insert` fails with `PortError::AlreadyExists` when the id is taken and
//!   never overwrites.
//! - `update` fails with `PortError::NotFound` when the id is absent.
//! - The three operations are atomic with respect to each other.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_customer::ports::CustomerRepository;
//! use std::sync::Arc;
//!
//! pub struct RegistryService {
//!     repository: Arc<dyn CustomerRepository>,
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{CustomerId, DomainPort, HealthCheckable, OperationMetadata, PortError};

use crate::customer::{Customer, CustomerInfo};

/// Entity name used in port errors
pub const CUSTOMER_ENTITY: &str = "Customer";

/// Storage contract for customer records
#[async_trait]
pub trait CustomerRepository: DomainPort + HealthCheckable {
    /// Retrieves a customer by ID
    ///
    /// # Returns
    ///
    /// A copy of the stored customer, or `PortError::NotFound`
    async fn get(
        &self,
        id: CustomerId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, PortError>;

    /// Stores a new customer
    ///
    /// # Returns
    ///
    /// `PortError::AlreadyExists` if the id is already stored; the stored
    /// record is left untouched in that case.
    async fn insert(
        &self,
        customer: &Customer,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Overwrites an existing customer
    ///
    /// # Returns
    ///
    /// `PortError::NotFound` if the id is not stored
    async fn update(
        &self,
        customer: &Customer,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}

/// Extension trait for CustomerRepository with convenience methods
#[async_trait]
pub trait CustomerRepositoryExt: CustomerRepository {
    /// Checks if a customer is stored
    async fn exists(
        &self,
        id: CustomerId,
        metadata: Option<OperationMetadata>,
    ) -> Result<bool, PortError> {
        match self.get(id, metadata).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Creates a prospect with a random id and inserts it
    async fn insert_with_random_id(
        &self,
        info: CustomerInfo,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, PortError> {
        let customer = Customer::with_random_id(info);
        self.insert(&customer, metadata).await?;
        Ok(customer)
    }
}

// Blanket implementation for all CustomerRepository implementors
impl<T: CustomerRepository> CustomerRepositoryExt for T {}

/// Mock implementation of CustomerRepository for testing
///
/// Stores customers in memory and can be told to fail or slow down a given
/// operation, so service behaviour on storage failures can be exercised.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::HealthCheckResult;
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::RwLock;

    /// Repository operation a failure or delay can target
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum MockOperation {
        Get,
        Insert,
        Update,
    }

    impl MockOperation {
        fn name(self) -> &'static str {
            match self {
                MockOperation::Get => "get",
                MockOperation::Insert => "insert",
                MockOperation::Update => "update",
            }
        }
    }

    /// In-memory mock implementation of CustomerRepository
    #[derive(Debug, Default)]
    pub struct MockCustomerRepository {
        customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
        failing: Arc<RwLock<HashSet<MockOperation>>>,
        latency: Option<(MockOperation, Duration)>,
    }

    impl MockCustomerRepository {
        /// Creates a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with customers for testing
        pub async fn with_customers(customers: Vec<Customer>) -> Self {
            let repository = Self::new();
            for customer in customers {
                repository
                    .customers
                    .write()
                    .await
                    .insert(customer.id(), customer);
            }
            repository
        }

        /// Delays every call of `operation` by `delay`
        pub fn with_latency(mut self, operation: MockOperation, delay: Duration) -> Self {
            self.latency = Some((operation, delay));
            self
        }

        /// Makes every later call of `operation` fail with a connection error
        pub async fn fail_on(&self, operation: MockOperation) {
            self.failing.write().await.insert(operation);
        }

        pub async fn clear_failures(&self) {
            self.failing.write().await.clear();
        }

        /// The stored record, bypassing injected failures
        pub async fn snapshot(&self, id: CustomerId) -> Option<Customer> {
            self.customers.read().await.get(&id).cloned()
        }

        pub async fn len(&self) -> usize {
            self.customers.read().await.len()
        }

        async fn before(&self, operation: MockOperation) -> Result<(), PortError> {
            if let Some((delayed, delay)) = self.latency {
                if delayed == operation {
                    tokio::time::sleep(delay).await;
                }
            }
            if self.failing.read().await.contains(&operation) {
                return Err(PortError::connection(format!(
                    "injected failure on {}",
                    operation.name()
                )));
            }
            Ok(())
        }
    }

    impl DomainPort for MockCustomerRepository {}

    #[async_trait]
    impl HealthCheckable for MockCustomerRepository {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-customer-repository", 0)
                .with_message("Mock adapter always healthy")
        }
    }

    #[async_trait]
    impl CustomerRepository for MockCustomerRepository {
        async fn get(
            &self,
            id: CustomerId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Customer, PortError> {
            self.before(MockOperation::Get).await?;
            self.customers
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found(CUSTOMER_ENTITY, id))
        }

        async fn insert(
            &self,
            customer: &Customer,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            self.before(MockOperation::Insert).await?;
            let mut customers = self.customers.write().await;
            if customers.contains_key(&customer.id()) {
                return Err(PortError::already_exists(CUSTOMER_ENTITY, customer.id()));
            }
            customers.insert(customer.id(), customer.clone());
            Ok(())
        }

        async fn update(
            &self,
            customer: &Customer,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            self.before(MockOperation::Update).await?;
            let mut customers = self.customers.write().await;
            let stored = customers
                .get_mut(&customer.id())
                .ok_or_else(|| PortError::not_found(CUSTOMER_ENTITY, customer.id()))?;
            *stored = customer.clone();
            Ok(())
        }
    }
}
