use crate::commands::executable::Executable;
use crate::commands::sorted_members;
use crate::reply::Reply;
use crate::store::Store;

/// Returns the members present in both the set stored at `first` and the one stored at `second`.
/// A missing key is an empty set, so the intersection with it is empty.
///
/// Ref: <https://redis.io/docs/latest/commands/sinter/>
#[derive(Debug, Clone, PartialEq)]
pub struct SInter {
    pub first: String,
    pub second: String,
}

impl Executable for SInter {
    fn exec(self, store: &mut Store) -> Reply {
        let (first, second) = match (store.get_set(&self.first), store.get_set(&self.second)) {
            (Ok(first), Ok(second)) => (first, second),
            (Err(err), _) | (_, Err(err)) => return err.into(),
        };

        let members = match (first, second) {
            (Some(first), Some(second)) => sorted_members(first.intersection(second)),
            _ => vec![],
        };

        Reply::Array(members)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::value::Value;

    fn sinter(store: &mut Store, first: &str, second: &str) -> Reply {
        SInter {
            first: first.to_string(),
            second: second.to_string(),
        }
        .exec(store)
    }

    fn set(members: &[&str]) -> Value {
        Value::Set(members.iter().map(|s| s.to_string()).collect::<HashSet<_>>())
    }

    #[test]
    fn with_missing_sets() {
        let mut store = Store::new();
        assert_eq!(sinter(&mut store, "bla1", "bla5"), Reply::Array(vec![]));

        store.set("set1".to_string(), set(&["a", "b", "c"]));
        assert_eq!(sinter(&mut store, "set1", "blabal"), Reply::Array(vec![]));
        assert_eq!(sinter(&mut store, "blablab", "set1"), Reply::Array(vec![]));
    }

    #[test]
    fn common_members() {
        let mut store = Store::new();
        store.set("set1".to_string(), set(&["a", "b", "c"]));
        store.set("set2".to_string(), set(&["d", "e", "f"]));

        assert_eq!(sinter(&mut store, "set1", "set2"), Reply::Array(vec![]));

        store.set("set1".to_string(), set(&["a", "b", "c", "d"]));
        assert_eq!(
            sinter(&mut store, "set1", "set2"),
            Reply::Array(vec!["d".to_string()])
        );
    }

    #[test]
    fn wrong_type() {
        let mut store = Store::new();
        store.set("list".to_string(), Value::List(Default::default()));

        assert!(sinter(&mut store, "missing", "list").is_error());
    }
}
