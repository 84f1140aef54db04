//! Registry service
//!
//! The [`RegistryService`] is the only entry point that mutates customers.
//! Every call runs the same pipeline:
//!
//! 1. validate the input against the declarative field rules
//! 2. load the stored record, if the operation targets one
//! 3. apply the change through the aggregate, which enforces its invariants
//! 4. write the record back
//!
//! Whatever goes wrong is reported as a [`RegistryError`] in one of four
//! categories, with the operation name and the underlying cause attached.
//! Nothing is retried.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use core_kernel::{CustomerId, HealthCheckResult, OperationMetadata, PortError};

use crate::customer::{Customer, CustomerDetails, CustomerInfo, CustomerState};
use crate::error::RegistryError;
use crate::ports::CustomerRepository;
use crate::validation::{FieldValue, Rule, ValidationErrors, Validator, STATE_RULES};

const OP_GET: &str = "registry.Service.Get";
const OP_NEW: &str = "registry.Service.New";
const OP_NEW_WITH_ID: &str = "registry.Service.NewWithId";
const OP_UPDATE_INFO: &str = "registry.Service.UpdateInfo";
const OP_SET_STATE: &str = "registry.Service.SetState";
const OP_UPDATE_DETAILS: &str = "registry.Service.UpdateDetails";

/// Orchestrates validation, domain rules, and storage for customers
///
/// # Example
///
/// ```rust,ignore
/// let service = RegistryService::new(Arc::new(InMemoryCustomerRepository::new()));
/// let customer = service.create(person.into(), None).await?;
/// service.set_state(customer.id(), 2, None).await?;
/// ```
#[derive(Clone)]
pub struct RegistryService {
    repository: Arc<dyn CustomerRepository>,
    validator: Validator,
}

impl RegistryService {
    /// Creates a service with the built-in validation rules
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            repository,
            validator: Validator::new(),
        }
    }

    /// Replaces the validator, e.g. one with extra registered rules
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Health of the underlying repository
    pub async fn health(&self) -> HealthCheckResult {
        self.repository.health_check().await
    }

    /// Fetches a customer
    ///
    /// # Errors
    ///
    /// `NotFound` if no customer has the id, `Unexpected` for any other
    /// storage failure.
    #[instrument(
        skip_all,
        fields(
            customer_id = %id,
            correlation_id = correlation_id(&metadata),
            initiated_by = initiated_by(&metadata)
        )
    )]
    pub async fn get(
        &self,
        id: CustomerId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, RegistryError> {
        let customer = self.load(OP_GET, id, metadata).await?;
        debug!(customer_id = %id, "Customer fetched");
        Ok(customer)
    }

    /// Registers a new prospect with a random id
    ///
    /// An id collision is reported as `Unexpected`; retrying is up to the
    /// caller.
    #[instrument(
        skip_all,
        fields(
            correlation_id = correlation_id(&metadata),
            initiated_by = initiated_by(&metadata)
        )
    )]
    pub async fn create(
        &self,
        info: CustomerInfo,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, RegistryError> {
        self.validator
            .validate(&info)
            .map_err(|e| RegistryError::validation_failed(OP_NEW, e))?;

        let customer = Customer::with_random_id(info);
        self.store_new(OP_NEW, &customer, metadata).await?;
        Ok(customer)
    }

    /// Registers a new prospect under a caller-chosen id
    #[instrument(
        skip_all,
        fields(
            customer_id = %id,
            correlation_id = correlation_id(&metadata),
            initiated_by = initiated_by(&metadata)
        )
    )]
    pub async fn create_with_id(
        &self,
        id: CustomerId,
        info: CustomerInfo,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, RegistryError> {
        let mut errors = Vec::new();
        if let Err(e) = self.validator.validate_value(
            "id",
            FieldValue::Number(i64::from(id.value())),
            &[Rule::Required],
        ) {
            errors.extend(e.into_errors());
        }
        if let Err(e) = self.validator.validate(&info) {
            errors.extend(e.into_errors());
        }
        if !errors.is_empty() {
            return Err(RegistryError::validation_failed(
                OP_NEW_WITH_ID,
                ValidationErrors::new(errors),
            ));
        }

        let customer = Customer::new(id, info);
        self.store_new(OP_NEW_WITH_ID, &customer, metadata).await?;
        Ok(customer)
    }

    /// Replaces the info of a customer with info of the same kind
    ///
    /// # Errors
    ///
    /// `ExpectedConflict` if `info` is of the other kind; the stored record
    /// is not touched.
    #[instrument(
        skip_all,
        fields(
            customer_id = %id,
            correlation_id = correlation_id(&metadata),
            initiated_by = initiated_by(&metadata)
        )
    )]
    pub async fn update_info(
        &self,
        id: CustomerId,
        info: CustomerInfo,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, RegistryError> {
        self.validator
            .validate(&info)
            .map_err(|e| RegistryError::validation_failed(OP_UPDATE_INFO, e))?;

        let mut customer = self.load(OP_UPDATE_INFO, id, metadata.clone()).await?;
        customer.update_info(info).map_err(|e| {
            debug!(customer_id = %id, error = %e, "Info update rejected");
            RegistryError::expected(OP_UPDATE_INFO, e)
        })?;

        self.store(OP_UPDATE_INFO, &customer, metadata).await?;
        info!(customer_id = %id, "Customer info updated");
        Ok(customer)
    }

    /// Moves a customer to the state with the given wire code
    #[instrument(
        skip_all,
        fields(
            customer_id = %id,
            correlation_id = correlation_id(&metadata),
            initiated_by = initiated_by(&metadata)
        )
    )]
    pub async fn set_state(
        &self,
        id: CustomerId,
        state: i32,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), RegistryError> {
        self.validator
            .validate_value("state", FieldValue::Number(i64::from(state)), STATE_RULES)
            .map_err(|e| RegistryError::validation_failed(OP_SET_STATE, e))?;
        let state =
            CustomerState::try_from(state).map_err(|e| RegistryError::expected(OP_SET_STATE, e))?;

        let mut customer = self.load(OP_SET_STATE, id, metadata.clone()).await?;
        customer.set_state(state);

        self.store(OP_SET_STATE, &customer, metadata).await?;
        info!(customer_id = %id, state = %state, "Customer state changed");
        Ok(())
    }

    /// Replaces the addresses, contacts, and tax records of a customer
    #[instrument(
        skip_all,
        fields(
            customer_id = %id,
            correlation_id = correlation_id(&metadata),
            initiated_by = initiated_by(&metadata)
        )
    )]
    pub async fn update_details(
        &self,
        id: CustomerId,
        details: CustomerDetails,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, RegistryError> {
        self.validator
            .validate(&details)
            .map_err(|e| RegistryError::validation_failed(OP_UPDATE_DETAILS, e))?;

        let mut customer = self.load(OP_UPDATE_DETAILS, id, metadata.clone()).await?;
        customer.replace_details(details);

        self.store(OP_UPDATE_DETAILS, &customer, metadata).await?;
        info!(customer_id = %id, "Customer details replaced");
        Ok(customer)
    }

    async fn load(
        &self,
        op: &'static str,
        id: CustomerId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Customer, RegistryError> {
        let limit = metadata.as_ref().and_then(|m| m.timeout);
        bounded("CustomerRepository.get", limit, self.repository.get(id, metadata))
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    RegistryError::not_found(op, e)
                } else {
                    warn!(customer_id = %id, error = %e, "{op}: repository read failed");
                    RegistryError::unexpected(op, e)
                }
            })
    }

    async fn store_new(
        &self,
        op: &'static str,
        customer: &Customer,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), RegistryError> {
        let limit = metadata.as_ref().and_then(|m| m.timeout);
        bounded(
            "CustomerRepository.insert",
            limit,
            self.repository.insert(customer, metadata),
        )
        .await
        .map_err(|e| {
            warn!(customer_id = %customer.id(), error = %e, "{op}: repository insert failed");
            RegistryError::unexpected(op, e)
        })?;

        info!(
            customer_id = %customer.id(),
            customer_type = %customer.customer_type(),
            "Customer registered"
        );
        Ok(())
    }

    async fn store(
        &self,
        op: &'static str,
        customer: &Customer,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), RegistryError> {
        let limit = metadata.as_ref().and_then(|m| m.timeout);
        bounded(
            "CustomerRepository.update",
            limit,
            self.repository.update(customer, metadata),
        )
        .await
        .map_err(|e| {
            warn!(customer_id = %customer.id(), error = %e, "{op}: repository update failed");
            RegistryError::unexpected(op, e)
        })
    }
}

fn correlation_id(metadata: &Option<OperationMetadata>) -> Option<&str> {
    metadata.as_ref()?.correlation_id.as_deref()
}

fn initiated_by(metadata: &Option<OperationMetadata>) -> Option<&str> {
    metadata.as_ref()?.initiated_by.as_deref()
}

/// Runs a repository call, failing with `PortError::Timeout` once `limit` elapses
async fn bounded<T, F>(
    operation: &'static str,
    limit: Option<std::time::Duration>,
    call: F,
) -> Result<T, PortError>
where
    F: Future<Output = Result<T, PortError>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| PortError::timeout(operation, limit))?,
        None => call.await,
    }
}
