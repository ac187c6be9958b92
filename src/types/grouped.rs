use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A key to value mapping that remembers the order in which keys were first inserted.
///
/// Grouping operations rely on this to report groups in order of first appearance in the
/// input, which a plain `HashMap` cannot guarantee.
#[derive(Debug, Clone)]
pub struct Grouped<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>
}

impl<K, V> Grouped<K, V>
where
    K: Eq + Hash + Clone
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new()
        }
    }

    /// Returns the value stored under `key`, inserting `default()` at the end if the key is new.
    pub fn entry_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V
    {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.clone(), position);
                self.entries.push((key, default()));
                position
            }
        };

        &mut self.entries[position].1
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized
    {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K, V> Default for Grouped<K, V>
where
    K: Eq + Hash + Clone
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for Grouped<K, V>
where
    K: PartialEq,
    V: PartialEq
{
    /// Two groupings are equal only if they hold the same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> IntoIterator for Grouped<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
