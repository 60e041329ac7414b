// In-memory implementation of the EmployeeStore port.
//
// Purpose
// - The production table for this system; nothing is persisted outside
//   process memory.
//
// Responsibilities
// - Keep records in a hash table keyed by id for O(1) lookup, insert and
//   delete, plus an insertion-order id list as the stable pagination order.
// - Take the table lock once per operation so each create, update and delete
//   is indivisible relative to other store operations.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::employees::core::employee::{Employee, EmployeePatch, NewEmployee};
use crate::modules::employees::core::ports::{EmployeePage, EmployeeStore, PageMeta, StoreError};

use super::seed::synthetic_new_employee;

#[derive(Default)]
struct Table {
    rows: HashMap<String, Employee>,
    // Insertion order; ids are never reused, so an id appears here at most once.
    order: Vec<String>,
}

pub struct InMemoryEmployeeStore {
    inner: RwLock<Table>,
    allow_hire_date_patch: bool,
    offline: bool,
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table::default()),
            allow_hire_date_patch: true,
            offline: false,
        }
    }

    /// The generic shallow merge would let a supplied `hireDate` overwrite the
    /// creation timestamp; this toggle opts a store instance out of that.
    pub fn deny_hire_date_patch(mut self) -> Self {
        self.allow_hire_date_patch = false;
        self
    }

    /// Fail-injection switch so callers can exercise the internal-failure
    /// path. Only reachable before the store is shared.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Initialization step: fills the table with `count` synthetic records
    /// through the same creation contract every record goes through. Called
    /// once at startup, before the store starts serving.
    pub async fn seed(&self, count: u64) -> anyhow::Result<()> {
        for index in 0..count {
            self.create(synthetic_new_employee(index)).await?;
        }
        tracing::info!(count, "seeded employee table");
        Ok(())
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable("employee store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn create(&self, fields: NewEmployee) -> anyhow::Result<Employee> {
        self.ensure_online()?;
        let employee = Employee {
            id: Uuid::now_v7().to_string(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            position: fields.position,
            department: fields.department,
            salary: fields.salary,
            hire_date: Utc::now(),
            is_active: true,
        };
        let mut table = self.inner.write().await;
        table.order.push(employee.id.clone());
        table.rows.insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Employee>> {
        self.ensure_online()?;
        let table = self.inner.read().await;
        Ok(table.rows.get(id).cloned())
    }

    async fn find_all(&self, page: u64, limit: u64) -> anyhow::Result<EmployeePage> {
        self.ensure_online()?;
        if page < 1 {
            return Err(StoreError::InvalidWindow("page must be >= 1".to_string()).into());
        }
        if !(1..=100).contains(&limit) {
            return Err(StoreError::InvalidWindow("limit must be within 1..=100".to_string()).into());
        }

        let table = self.inner.read().await;
        let total = table.order.len() as u64;
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        // Saturate: a window starting past the end is an empty page, even for
        // a page number large enough to overflow the multiplication.
        let offset = (page - 1).saturating_mul(limit).min(total);

        let data = table
            .order
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .filter_map(|id| table.rows.get(id).cloned())
            .collect();

        Ok(EmployeePage {
            data,
            pagination: PageMeta {
                page,
                limit,
                total,
                total_pages,
                has_next: page < total_pages,
                has_prev: page > 1,
            },
        })
    }

    async fn update(&self, id: &str, mut patch: EmployeePatch) -> anyhow::Result<Option<Employee>> {
        self.ensure_online()?;
        if !self.allow_hire_date_patch {
            patch.hire_date = None;
        }
        let mut table = self.inner.write().await;
        let Some(employee) = table.rows.get_mut(id) else {
            return Ok(None);
        };
        patch.apply(employee);
        Ok(Some(employee.clone()))
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        self.ensure_online()?;
        let mut table = self.inner.write().await;
        if table.rows.remove(id).is_none() {
            return Ok(false);
        }
        table.order.retain(|known| known != id);
        Ok(true)
    }

    async fn count(&self) -> anyhow::Result<u64> {
        self.ensure_online()?;
        let table = self.inner.read().await;
        Ok(table.order.len() as u64)
    }
}

#[cfg(test)]
mod in_memory_employee_store_tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn fields(tag: &str) -> NewEmployee {
        NewEmployee {
            first_name: format!("First{tag}"),
            last_name: format!("Last{tag}"),
            email: format!("first.last.{tag}@example.com"),
            position: "Software Engineer".to_string(),
            department: "Engineering".to_string(),
            salary: 75_000.0,
        }
    }

    #[fixture]
    fn store() -> InMemoryEmployeeStore {
        InMemoryEmployeeStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_and_find_a_record(store: InMemoryEmployeeStore) {
        let before = Utc::now();
        let created = store.create(fields("a")).await.expect("create failed");
        let after = Utc::now();

        assert!(created.is_active);
        assert!(created.hire_date >= before && created.hire_date <= after);
        assert_eq!(store.count().await.unwrap(), 1);

        let found = store.find_by_id(&created.id).await.expect("find failed");
        assert_eq!(found, Some(created));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_assign_a_fresh_id_per_create(store: InMemoryEmployeeStore) {
        let first = store.create(fields("a")).await.unwrap();
        let second = store.create(fields("a")).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_none_for_an_unknown_id(store: InMemoryEmployeeStore) {
        let found = store.find_by_id("emp-unknown").await.unwrap();
        assert_eq!(found, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_merge_only_the_supplied_fields_on_update(store: InMemoryEmployeeStore) {
        let created = store.create(fields("a")).await.unwrap();
        let patch = EmployeePatch {
            salary: Some(80_000.0),
            ..EmployeePatch::default()
        };

        let updated = store
            .update(&created.id, patch)
            .await
            .expect("update failed")
            .expect("record vanished");

        assert_eq!(updated.salary, 80_000.0);
        assert_eq!(updated.first_name, created.first_name);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.hire_date, created.hire_date);
        assert_eq!(updated.id, created.id);

        let stored = store.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_not_found_when_updating_an_unknown_id(store: InMemoryEmployeeStore) {
        let patch = EmployeePatch {
            salary: Some(80_000.0),
            ..EmployeePatch::default()
        };
        let updated = store.update("emp-unknown", patch).await.unwrap();
        assert!(updated.is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_allow_a_hire_date_overwrite_by_default(store: InMemoryEmployeeStore) {
        let created = store.create(fields("a")).await.unwrap();
        let rewritten = created.hire_date - chrono::Duration::days(30);
        let patch = EmployeePatch {
            hire_date: Some(rewritten),
            ..EmployeePatch::default()
        };

        let updated = store.update(&created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.hire_date, rewritten);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_hire_date_when_patching_is_denied() {
        let store = InMemoryEmployeeStore::new().deny_hire_date_patch();
        let created = store.create(fields("a")).await.unwrap();
        let patch = EmployeePatch {
            hire_date: Some(created.hire_date - chrono::Duration::days(30)),
            salary: Some(90_000.0),
            ..EmployeePatch::default()
        };

        let updated = store.update(&created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.hire_date, created.hire_date);
        assert_eq!(updated.salary, 90_000.0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_an_existing_record_exactly_once(store: InMemoryEmployeeStore) {
        let created = store.create(fields("a")).await.unwrap();

        assert!(store.delete(&created.id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(store.find_by_id(&created.id).await.unwrap(), None);

        assert!(!store.delete(&created.id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_paginate_in_insertion_order(store: InMemoryEmployeeStore) {
        let mut ids = Vec::new();
        for i in 0..7 {
            ids.push(store.create(fields(&i.to_string())).await.unwrap().id);
        }

        let first = store.find_all(1, 3).await.unwrap();
        let second = store.find_all(2, 3).await.unwrap();
        let third = store.find_all(3, 3).await.unwrap();

        let window: Vec<String> = first
            .data
            .iter()
            .chain(second.data.iter())
            .chain(third.data.iter())
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(window, ids);

        assert_eq!(first.pagination.total, 7);
        assert_eq!(first.pagination.total_pages, 3);
        assert!(!first.pagination.has_prev);
        assert!(first.pagination.has_next);
        assert!(second.pagination.has_prev);
        assert!(second.pagination.has_next);
        assert_eq!(third.data.len(), 1);
        assert!(!third.pagination.has_next);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_same_slice_for_repeated_calls(store: InMemoryEmployeeStore) {
        for i in 0..9 {
            store.create(fields(&i.to_string())).await.unwrap();
        }
        let first = store.find_all(2, 4).await.unwrap();
        let again = store.find_all(2, 4).await.unwrap();
        assert_eq!(first.data, again.data);
        assert_eq!(first.pagination, again.pagination);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_an_empty_page_past_the_end(store: InMemoryEmployeeStore) {
        for i in 0..3 {
            store.create(fields(&i.to_string())).await.unwrap();
        }
        let page = store.find_all(5, 10).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_an_empty_page_for_the_largest_page_number(
        store: InMemoryEmployeeStore,
    ) {
        store.create(fields("a")).await.unwrap();

        let page = store.find_all(u64::MAX, 100).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.page, u64::MAX);
        assert_eq!(page.pagination.total, 1);
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_zero_pages_for_an_empty_table(store: InMemoryEmployeeStore) {
        let page = store.find_all(1, 10).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.total_pages, 0);
        assert!(!page.pagination.has_next);
        assert!(!page.pagination.has_prev);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_out_of_range_pagination_inputs(store: InMemoryEmployeeStore) {
        assert!(store.find_all(0, 10).await.is_err());
        assert!(store.find_all(1, 0).await.is_err());
        assert!(store.find_all(1, 101).await.is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_pagination_order_stable_across_a_delete(
        store: InMemoryEmployeeStore,
    ) {
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(store.create(fields(&i.to_string())).await.unwrap().id);
        }
        store.delete(&ids[1]).await.unwrap();
        ids.remove(1);

        let page = store.find_all(1, 10).await.unwrap();
        let remaining: Vec<String> = page.data.iter().map(|e| e.id.clone()).collect();
        assert_eq!(remaining, ids);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_seed_the_requested_number_of_records(store: InMemoryEmployeeStore) {
        store.seed(25).await.expect("seed failed");
        assert_eq!(store.count().await.unwrap(), 25);

        let page = store.find_all(1, 25).await.unwrap();
        for employee in &page.data {
            assert!(employee.salary >= 0.0);
            assert!(employee.is_active);
            assert!(!employee.email.is_empty());
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_operation_when_offline() {
        let mut store = InMemoryEmployeeStore::new();
        store.toggle_offline();

        let error = store.create(fields("a")).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<StoreError>(),
            Some(StoreError::Unavailable(_))
        ));
        assert!(store.find_by_id("emp-1").await.is_err());
        assert!(store.find_all(1, 10).await.is_err());
        assert!(store.update("emp-1", EmployeePatch::default()).await.is_err());
        assert!(store.delete("emp-1").await.is_err());
        assert!(store.count().await.is_err());
    }
}
