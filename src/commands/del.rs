use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Removes the given keys and returns how many of them existed. Deleting a missing key is not an
/// error.
///
/// Ref: <https://redis.io/docs/latest/commands/del/>
#[derive(Debug, Clone, PartialEq)]
pub struct Del {
    pub keys: Vec<String>,
}

impl Executable for Del {
    fn exec(self, store: &mut Store) -> Reply {
        let mut count = 0;
        for key in self.keys {
            if store.remove(&key).is_some() {
                count += 1;
            }
        }
        Reply::Integer(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn delete_twice() {
        let mut store = Store::new();
        store.set("a".to_string(), Value::from("hello world"));
        store.set("ab".to_string(), Value::from("yoyo"));

        let cmd = Del {
            keys: vec!["a".to_string()],
        };
        assert_eq!(cmd.clone().exec(&mut store), Reply::Integer(1));
        assert!(!store.exists("a"));
        assert!(store.exists("ab"));

        assert_eq!(cmd.exec(&mut store), Reply::Integer(0));
    }

    #[test]
    fn multiple_keys() {
        let mut store = Store::new();
        store.set("foo".to_string(), Value::from("1"));
        store.set("bar".to_string(), Value::from("2"));

        let cmd = Del {
            keys: vec!["foo".to_string(), "bar".to_string(), "baz".to_string()],
        };
        assert_eq!(cmd.exec(&mut store), Reply::Integer(2));
        assert_eq!(store.size(), 0);
    }
}
