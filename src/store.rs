use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};
use std::str::FromStr;

use num_traits::CheckedAdd;
use tracing::{debug, trace};

use crate::value::{Value, ValueType};
use crate::{Error, Result};

type Key = String;

/// The Store owns every key and its value. It is a plain single-owner structure: there is no
/// locking inside, callers that share it between threads wrap it themselves (for example in an
/// `Arc<Mutex<Store>>`).
///
/// The generic layer (`get`, `set`, `remove`, `exists`) never looks at value types. The typed
/// accessors below it are what commands go through, and they fail with `Error::WrongType` before
/// touching anything when a key holds a different variant.
#[derive(Debug, Default)]
pub struct Store {
    keys: HashMap<Key, Value>,
}

impl Store {
    pub fn new() -> Store {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Store {
        Store {
            keys: HashMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.keys.get(key)
    }

    /// Inserts or replaces the value at `key`, whatever variant was there before.
    pub fn set(&mut self, key: String, value: Value) {
        trace!(key = %key, value_type = %value.value_type(), "setting key");
        self.keys.insert(key, value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let removed = self.keys.remove(key);
        if removed.is_some() {
            trace!(key, "removed key");
        }
        removed
    }

    pub fn exists(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    pub fn size(&self) -> usize {
        self.keys.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.keys.keys()
    }

    pub fn get_string(&self, key: &str) -> Result<Option<&String>> {
        match self.keys.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(wrong_type(key, ValueType::String, other)),
        }
    }

    pub fn get_list(&self, key: &str) -> Result<Option<&VecDeque<String>>> {
        match self.keys.get(key) {
            None => Ok(None),
            Some(Value::List(list)) => Ok(Some(list)),
            Some(other) => Err(wrong_type(key, ValueType::List, other)),
        }
    }

    pub fn get_list_mut(&mut self, key: &str) -> Result<Option<&mut VecDeque<String>>> {
        match self.keys.get_mut(key) {
            None => Ok(None),
            Some(Value::List(list)) => Ok(Some(list)),
            Some(other) => Err(wrong_type(key, ValueType::List, other)),
        }
    }

    /// Returns the list at `key`, creating an empty one if the key is absent.
    pub fn list_or_default(&mut self, key: &str) -> Result<&mut VecDeque<String>> {
        match self.entry_or_insert_with(key, || Value::List(VecDeque::new())) {
            Value::List(list) => Ok(list),
            other => Err(wrong_type(key, ValueType::List, other)),
        }
    }

    pub fn get_set(&self, key: &str) -> Result<Option<&HashSet<String>>> {
        match self.keys.get(key) {
            None => Ok(None),
            Some(Value::Set(set)) => Ok(Some(set)),
            Some(other) => Err(wrong_type(key, ValueType::Set, other)),
        }
    }

    pub fn get_set_mut(&mut self, key: &str) -> Result<Option<&mut HashSet<String>>> {
        match self.keys.get_mut(key) {
            None => Ok(None),
            Some(Value::Set(set)) => Ok(Some(set)),
            Some(other) => Err(wrong_type(key, ValueType::Set, other)),
        }
    }

    /// Returns the set at `key`, creating an empty one if the key is absent.
    pub fn set_or_default(&mut self, key: &str) -> Result<&mut HashSet<String>> {
        match self.entry_or_insert_with(key, || Value::Set(HashSet::new())) {
            Value::Set(set) => Ok(set),
            other => Err(wrong_type(key, ValueType::Set, other)),
        }
    }

    /// Adds `increment` to the integer stored as a string at `key` and returns the new value. An
    /// absent key counts as zero. The stored value is left as it was on any error.
    pub fn incr_by<T>(&mut self, key: &str, increment: T) -> Result<T>
    where
        T: FromStr + ToString + CheckedAdd + Default,
    {
        let current = match self.get_string(key)? {
            Some(s) => s.parse::<T>().map_err(|_| Error::NotAnInteger)?,
            None => T::default(),
        };

        let value = current.checked_add(&increment).ok_or(Error::Overflow)?;
        self.set(key.to_string(), Value::String(value.to_string()));

        Ok(value)
    }

    // Never overwrites: an existing value of another variant is handed back for the caller to
    // reject.
    fn entry_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> Value) -> &mut Value {
        match self.keys.entry(key.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(key, "creating key");
                entry.insert(default())
            }
        }
    }
}

fn wrong_type(key: &str, expected: ValueType, actual: &Value) -> Error {
    let actual = actual.value_type();
    debug!(key, %expected, %actual, "rejecting command on wrong value type");
    Error::WrongType { expected, actual }
}
