use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Returns the number of members of the set stored at `key`, `0` if the key does not exist.
///
/// Ref: <https://redis.io/docs/latest/commands/scard/>
#[derive(Debug, Clone, PartialEq)]
pub struct SCard {
    pub key: String,
}

impl Executable for SCard {
    fn exec(self, store: &mut Store) -> Reply {
        store
            .get_set(&self.key)
            .map(|set| set.map_or(0, |set| set.len()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::value::Value;

    #[test]
    fn existing_set() {
        let mut store = Store::new();
        store.set(
            "set".to_string(),
            Value::Set(HashSet::from(["a", "b", "c"].map(String::from))),
        );

        let cmd = SCard {
            key: "set".to_string(),
        };
        assert_eq!(cmd.exec(&mut store), Reply::Integer(3));
    }

    #[test]
    fn missing_key() {
        let mut store = Store::new();

        let cmd = SCard {
            key: "rdsardsa".to_string(),
        };
        assert_eq!(cmd.exec(&mut store), Reply::Integer(0));
    }

    #[test]
    fn wrong_type() {
        let mut store = Store::new();
        store.set("string".to_string(), Value::from("abc"));

        let cmd = SCard {
            key: "string".to_string(),
        };
        assert!(cmd.exec(&mut store).is_error());
    }
}
