// Ports define what the inbound layer needs from the store, without implementing it.
//
// Purpose
// - Describe the employee table as an abstract capability (EmployeeStore).
//
// Boundaries
// - No concrete storage here. Adapters implement the trait in the adapters layer.
//
// Testing guidance
// - The in-memory implementation doubles as the test and production adapter;
//   this system keeps no data outside process memory.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use super::employee::{Employee, EmployeePatch, NewEmployee};

/// Unexpected store failure. Lookups that merely miss signal by value
/// (`None` / `false`) and never take this channel.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("invalid page window: {0}")]
    InvalidWindow(String),
}

/// Window metadata returned alongside every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page window in stable insertion order plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeePage {
    pub data: Vec<Employee>,
    pub pagination: PageMeta,
}

/// Sole authority over record existence, identity assignment and paginated
/// traversal order. Each call executes as an indivisible unit relative to
/// other store operations.
///
/// "Not found" is signaled by value (`None` / `false`); the `Err` channel is
/// reserved for unexpected internal failure and is never used for lookups
/// that merely miss.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Assigns a fresh id, stamps `hire_date` with the current time, sets
    /// `is_active` and stores the record. Field validation is the inbound
    /// layer's responsibility.
    async fn create(&self, fields: NewEmployee) -> anyhow::Result<Employee>;

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Employee>>;

    /// Preconditions: `page >= 1` and `1 <= limit <= 100`; the inbound layer
    /// validates before calling and the store rejects violations with the
    /// same rule. A window starting past the end of the table is an empty
    /// page, not an error.
    async fn find_all(&self, page: u64, limit: u64) -> anyhow::Result<EmployeePage>;

    /// Shallow-merges `patch` into the stored record. `id` is never altered.
    async fn update(&self, id: &str, patch: EmployeePatch) -> anyhow::Result<Option<Employee>>;

    /// Reports whether a record existed and was removed. Deleting an unknown
    /// id is not an error.
    async fn delete(&self, id: &str) -> anyhow::Result<bool>;

    async fn count(&self) -> anyhow::Result<u64>;
}
