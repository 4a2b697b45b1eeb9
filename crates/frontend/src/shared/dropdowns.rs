//! Reference lists for select and checkbox-group controls.
//!
//! Lists are fetched concurrently and served through a process-wide
//! read-through cache. Writes to an entity that feeds a list invalidate it.

use crate::shared::api::{client, ApiError};
use contracts::shared::dropdown::{DropdownItem, DropdownKey};
use contracts::shared::metadata::EntityDescriptor;
use contracts::shared::pagination::ListResponse;
use futures_util::future::join_all;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

pub type DropdownMap = BTreeMap<DropdownKey, Vec<DropdownItem>>;

pub static DROPDOWN_CACHE: Lazy<DropdownCache> = Lazy::new(DropdownCache::default);

/// Run every fetch concurrently and keep each outcome next to its key
async fn fetch_slots<F, Fut>(
    keys: &[DropdownKey],
    fetch: F,
) -> Vec<(DropdownKey, Result<Vec<DropdownItem>, ApiError>)>
where
    F: Fn(DropdownKey) -> Fut,
    Fut: Future<Output = Result<Vec<DropdownItem>, ApiError>>,
{
    let results = join_all(keys.iter().map(|key| fetch(*key))).await;
    keys.iter().copied().zip(results).collect()
}

/// Fan-out load. A failed fetch is logged and leaves its slot empty.
pub async fn load_all<F, Fut>(keys: &[DropdownKey], fetch: F) -> DropdownMap
where
    F: Fn(DropdownKey) -> Fut,
    Fut: Future<Output = Result<Vec<DropdownItem>, ApiError>>,
{
    fetch_slots(keys, fetch)
        .await
        .into_iter()
        .map(|(key, result)| (key, items_or_empty(key, result)))
        .collect()
}

fn items_or_empty(key: DropdownKey, result: Result<Vec<DropdownItem>, ApiError>) -> Vec<DropdownItem> {
    match result {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to load {} dropdown: {}", key.as_str(), e);
            Vec::new()
        }
    }
}

#[derive(Debug, Default)]
pub struct DropdownCache {
    entries: Mutex<DropdownMap>,
}

impl DropdownCache {
    fn entries(&self) -> MutexGuard<'_, DropdownMap> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, key: DropdownKey) -> Option<Vec<DropdownItem>> {
        self.entries().get(&key).cloned()
    }

    pub fn put(&self, key: DropdownKey, items: Vec<DropdownItem>) {
        self.entries().insert(key, items);
    }

    pub fn invalidate(&self, key: DropdownKey) {
        if self.entries().remove(&key).is_some() {
            log::debug!("Dropdown cache invalidated: {}", key.as_str());
        }
    }

    /// Drop the list a write to `descriptor` makes stale, if it feeds one
    pub fn invalidate_fed_by(&self, descriptor: &EntityDescriptor) {
        if let Some(key) = descriptor.info.feeds_dropdown {
            self.invalidate(key);
        }
    }

    /// Forget every list; a new session may see different references
    pub fn clear(&self) {
        self.entries().clear();
    }

    /// Serve hits from memory, fetch the misses concurrently and cache
    /// only the lists that loaded
    pub async fn load_all<F, Fut>(&self, keys: &[DropdownKey], fetch: F) -> DropdownMap
    where
        F: Fn(DropdownKey) -> Fut,
        Fut: Future<Output = Result<Vec<DropdownItem>, ApiError>>,
    {
        let mut map = DropdownMap::new();
        let mut misses = Vec::new();
        for key in keys {
            match self.get(*key) {
                Some(items) => {
                    map.insert(*key, items);
                }
                None => misses.push(*key),
            }
        }

        for (key, result) in fetch_slots(&misses, fetch).await {
            if let Ok(items) = &result {
                self.put(key, items.clone());
            }
            map.insert(key, items_or_empty(key, result));
        }
        map
    }
}

/// GET one reference list; paged and bare-array answers are both accepted
pub async fn fetch_dropdown(key: DropdownKey) -> Result<Vec<DropdownItem>, ApiError> {
    let response: ListResponse<DropdownItem> = client::get_json(key.path()).await?;
    Ok(response.into_page().results)
}

/// Everything a form for `descriptor` needs, through the shared cache
pub async fn load_for(descriptor: &EntityDescriptor) -> DropdownMap {
    let keys = descriptor.dropdowns();
    log::debug!(
        "Loading {} dropdowns for {}",
        keys.len(),
        descriptor.info.entity_name
    );
    DROPDOWN_CACHE.load_all(&keys, fetch_dropdown).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_facility::FACILITY;
    use contracts::domain::a009_admission::ADMISSION;
    use std::cell::Cell;

    fn item(id: i64, label: &str) -> DropdownItem {
        DropdownItem {
            id,
            label: label.to_string(),
        }
    }

    async fn fake_fetch(key: DropdownKey) -> Result<Vec<DropdownItem>, ApiError> {
        match key {
            DropdownKey::Levels => Ok(vec![item(7, "Bachelor")]),
            DropdownKey::Districts => Err(ApiError::Status(500)),
            _ => Ok(vec![item(1, key.as_str())]),
        }
    }

    #[tokio::test]
    async fn test_one_failure_leaves_others_populated() {
        let keys = [DropdownKey::Levels, DropdownKey::Districts, DropdownKey::Facilities];
        let map = load_all(&keys, fake_fetch).await;

        assert_eq!(map.len(), 3);
        assert_eq!(map[&DropdownKey::Levels], vec![item(7, "Bachelor")]);
        assert!(map[&DropdownKey::Districts].is_empty());
        assert_eq!(map[&DropdownKey::Facilities], vec![item(1, "facilities")]);
    }

    #[tokio::test]
    async fn test_cache_hits_skip_fetch_until_invalidated() {
        let cache = DropdownCache::default();
        let calls = Cell::new(0);
        let counting = |key| {
            calls.set(calls.get() + 1);
            fake_fetch(key)
        };
        let keys = [DropdownKey::Levels, DropdownKey::Districts];

        cache.load_all(&keys, counting).await;
        assert_eq!(calls.get(), 2);
        // failed lists are not cached
        assert!(cache.get(DropdownKey::Districts).is_none());

        let map = cache.load_all(&keys, counting).await;
        assert_eq!(calls.get(), 3);
        assert_eq!(map[&DropdownKey::Levels], vec![item(7, "Bachelor")]);

        cache.invalidate(DropdownKey::Levels);
        cache.load_all(&[DropdownKey::Levels], counting).await;
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_writes_evict_only_the_fed_list() {
        let cache = DropdownCache::default();
        cache.put(DropdownKey::Facilities, vec![item(3, "Library")]);
        cache.put(DropdownKey::Levels, vec![item(7, "Bachelor")]);

        cache.invalidate_fed_by(&FACILITY);
        assert!(cache.get(DropdownKey::Facilities).is_none());
        assert!(cache.get(DropdownKey::Levels).is_some());

        // admissions feed no list
        cache.invalidate_fed_by(&ADMISSION);
        assert!(cache.get(DropdownKey::Levels).is_some());

        cache.clear();
        assert!(cache.get(DropdownKey::Levels).is_none());
    }
}
