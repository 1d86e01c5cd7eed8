//! Generic concurrent table backing every repository.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_core::traits::repository::Repository;
use haven_core::types::pagination::{PageRequest, PageResponse};

use crate::record::Record;

/// Rows keyed by id plus an optional unique secondary index.
///
/// Lock order is rows before keys. Lookups through the index copy the id out
/// and release the index guard before touching the rows.
#[derive(Debug, Clone)]
pub struct MemoryTable<E> {
    rows: Arc<DashMap<String, E>>,
    keys: Arc<DashMap<String, String>>,
}

impl<E> Default for MemoryTable<E> {
    fn default() -> Self {
        Self {
            rows: Arc::new(DashMap::new()),
            keys: Arc::new(DashMap::new()),
        }
    }
}

impl<E: Record> MemoryTable<E> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Row by primary key.
    pub fn get(&self, id: &str) -> Option<E> {
        self.rows.get(id).map(|row| row.value().clone())
    }

    /// Row by unique secondary key.
    pub fn get_by_key(&self, key: &str) -> Option<E> {
        let id = self.keys.get(key).map(|entry| entry.value().clone())?;
        self.get(&id)
    }

    /// All rows, newest first.
    pub fn all(&self) -> Vec<E> {
        self.select(|_| true)
    }

    /// Rows matching `predicate`, newest first.
    pub fn select(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        let mut rows: Vec<E> = self
            .rows
            .iter()
            .filter(|row| predicate(row.value()))
            .map(|row| row.value().clone())
            .collect();
        rows.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        rows
    }

    /// Number of rows matching `predicate`.
    pub fn count_where(&self, predicate: impl Fn(&E) -> bool) -> u64 {
        self.rows.iter().filter(|row| predicate(row.value())).count() as u64
    }

    /// Number of rows.
    pub fn len(&self) -> u64 {
        self.rows.len() as u64
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Applies `change` to a row in place and returns the updated row.
    ///
    /// `change` must not alter the row's unique key.
    pub fn modify(&self, id: &str, change: impl FnOnce(&mut E)) -> Option<E> {
        let mut row = self.rows.get_mut(id)?;
        change(row.value_mut());
        Some(row.value().clone())
    }

    fn insert_row(&self, entity: E) -> AppResult<E> {
        match self.rows.entry(entity.id().to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "{} already exists",
                E::NAME
            ))),
            Entry::Vacant(slot) => {
                if let Some(key) = entity.unique_key() {
                    match self.keys.entry(key) {
                        Entry::Occupied(_) => {
                            return Err(AppError::conflict(format!(
                                "{} already exists",
                                E::NAME
                            )));
                        }
                        Entry::Vacant(index) => {
                            index.insert(entity.id().to_string());
                        }
                    }
                }
                debug!(table = E::NAME, id = entity.id(), "Row inserted");
                Ok(slot.insert(entity).value().clone())
            }
        }
    }

    fn replace_row(&self, entity: E) -> AppResult<E> {
        let mut row = self
            .rows
            .get_mut(entity.id())
            .ok_or_else(|| AppError::not_found(format!("{} not found", E::NAME)))?;

        let old_key = row.value().unique_key();
        let new_key = entity.unique_key();
        if old_key != new_key {
            if let Some(key) = new_key {
                match self.keys.entry(key) {
                    Entry::Occupied(taken) if taken.get() != entity.id() => {
                        return Err(AppError::conflict(format!(
                            "{} already exists",
                            E::NAME
                        )));
                    }
                    Entry::Occupied(_) => {}
                    Entry::Vacant(index) => {
                        index.insert(entity.id().to_string());
                    }
                }
            }
            if let Some(key) = old_key {
                self.keys.remove_if(&key, |_, id| id == entity.id());
            }
        }

        *row.value_mut() = entity;
        Ok(row.value().clone())
    }

    fn remove_row(&self, id: &str) -> bool {
        match self.rows.remove(id) {
            Some((_, entity)) => {
                if let Some(key) = entity.unique_key() {
                    self.keys.remove_if(&key, |_, owner| owner == id);
                }
                debug!(table = E::NAME, id, "Row removed");
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl<E: Record> Repository<E, str> for MemoryTable<E> {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<E>> {
        Ok(self.get(id))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<E>> {
        Ok(PageResponse::from_items(self.all(), page))
    }

    async fn create(&self, entity: E) -> AppResult<E> {
        self.insert_row(entity)
    }

    async fn update(&self, entity: E) -> AppResult<E> {
        self.replace_row(entity)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.remove_row(id))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.len())
    }
}
