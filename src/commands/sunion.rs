use crate::commands::executable::Executable;
use crate::commands::sorted_members;
use crate::reply::Reply;
use crate::store::Store;

/// Returns the members of the union of the sets stored at `first` and `second`. Missing keys
/// are treated as empty sets.
///
/// Ref: <https://redis.io/docs/latest/commands/sunion/>
#[derive(Debug, Clone, PartialEq)]
pub struct SUnion {
    pub first: String,
    pub second: String,
}

impl Executable for SUnion {
    fn exec(self, store: &mut Store) -> Reply {
        let (first, second) = match (store.get_set(&self.first), store.get_set(&self.second)) {
            (Ok(first), Ok(second)) => (first, second),
            (Err(err), _) | (_, Err(err)) => return err.into(),
        };

        let members = match (first, second) {
            (Some(first), Some(second)) => sorted_members(first.union(second)),
            (Some(set), None) | (None, Some(set)) => sorted_members(set.iter()),
            (None, None) => vec![],
        };

        Reply::Array(members)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::value::Value;

    fn sunion(store: &mut Store, first: &str, second: &str) -> Reply {
        SUnion {
            first: first.to_string(),
            second: second.to_string(),
        }
        .exec(store)
    }

    fn set(members: &[&str]) -> Value {
        Value::Set(members.iter().map(|s| s.to_string()).collect::<HashSet<_>>())
    }

    #[test]
    fn empty_sets() {
        let mut store = Store::new();

        assert_eq!(sunion(&mut store, "fds8fd", "fds089"), Reply::Array(vec![]));
    }

    #[test]
    fn with_missing_set() {
        let mut store = Store::new();
        store.set("set1".to_string(), set(&["a", "b"]));

        let expected = Reply::Array(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(sunion(&mut store, "set1", "fdsfsd"), expected);
        assert_eq!(sunion(&mut store, "fdsfsd", "set1"), expected);
    }

    #[test]
    fn collapses_duplicates() {
        let mut store = Store::new();
        store.set("set1".to_string(), set(&["a", "b"]));
        store.set("set2".to_string(), set(&["b", "c"]));

        assert_eq!(
            sunion(&mut store, "set1", "set2"),
            Reply::Array(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn wrong_type() {
        let mut store = Store::new();
        store.set("set1".to_string(), set(&["a"]));
        store.set("string".to_string(), Value::from("a"));

        assert!(sunion(&mut store, "set1", "string").is_error());
        assert!(sunion(&mut store, "string", "missing").is_error());
    }
}
