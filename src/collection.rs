use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record kept in a [`Collection`] must implement.
pub trait Entity: Clone + Debug {
    type Id: Eq + Hash + Copy + Display + Debug;
    type Patch: Debug;

    /// Get the ID of the entity
    fn id(&self) -> Self::Id;

    /// Apply a single-field change in place
    fn on_update(&mut self, patch: Self::Patch);
}

// =============================================================================
// 2. THE ORDERED, KEYED STORE
// =============================================================================

/// Records kept in insertion order, with point lookup by id.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Entity> Collection<T> {
    /// Builds a collection from seed records. A repeated id overwrites the
    /// earlier record in place.
    pub fn from_seed(seed: impl IntoIterator<Item = T>) -> Self {
        let mut collection = Self::default();
        for item in seed {
            collection.upsert(item);
        }
        collection
    }

    fn upsert(&mut self, item: T) {
        match self.index.get(&item.id()) {
            Some(&position) => self.items[position] = item,
            None => {
                self.index.insert(item.id(), self.items.len());
                self.items.push(item);
            }
        }
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    /// Overwrites the record with `item`'s id. Hands `item` back when no such
    /// record exists, leaving the collection untouched.
    pub fn replace(&mut self, item: T) -> Result<T, T> {
        match self.index.get(&item.id()) {
            Some(&position) => Ok(std::mem::replace(&mut self.items[position], item)),
            None => Err(item),
        }
    }
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Bushel {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct Relabel(String);

    impl Entity for Bushel {
        type Id = u32;
        type Patch = Relabel;

        fn id(&self) -> u32 {
            self.id
        }

        fn on_update(&mut self, patch: Relabel) {
            self.label = patch.0;
        }
    }

    fn bushel(id: u32, label: &str) -> Bushel {
        Bushel { id, label: label.to_string() }
    }

    #[test]
    fn test_seed_keeps_insertion_order() {
        let collection = Collection::from_seed(vec![bushel(3, "c"), bushel(1, "a"), bushel(2, "b")]);
        let ids: Vec<u32> = collection.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(collection.get(1).map(|c| c.label.as_str()), Some("a"));
    }

    #[test]
    fn test_duplicate_seed_id_overwrites_in_place() {
        let collection = Collection::from_seed(vec![bushel(1, "a"), bushel(2, "b"), bushel(1, "z")]);
        assert_eq!(collection.list().len(), 2);
        assert_eq!(collection.list()[0].label, "z");
    }

    #[test]
    fn test_replace_missing_returns_item() {
        let mut collection = Collection::from_seed(vec![bushel(1, "a")]);
        let rejected = collection.replace(bushel(9, "x")).unwrap_err();
        assert_eq!(rejected, bushel(9, "x"));
        assert_eq!(collection.list(), &[bushel(1, "a")]);
    }

    #[test]
    fn test_replace_and_patch() {
        let mut collection = Collection::from_seed(vec![bushel(1, "a")]);
        let mut edited = collection.get(1).cloned().unwrap();
        edited.on_update(Relabel("b".into()));

        let previous = collection.replace(edited).unwrap();
        assert_eq!(previous.label, "a");
        assert_eq!(collection.get(1).unwrap().label, "b");
    }
}
