use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Get the value of `key`. If the key does not exist the special value `nil` is returned. An
/// error is returned if the value stored at `key` is not a string.
///
/// Ref: <https://redis.io/docs/latest/commands/get/>
#[derive(Debug, Clone, PartialEq)]
pub struct Get {
    pub key: String,
}

impl Executable for Get {
    fn exec(self, store: &mut Store) -> Reply {
        store.get_string(&self.key).map(|s| s.cloned()).into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::value::Value;

    #[test]
    fn existing_key() {
        let mut store = Store::new();
        store.set(String::from("key1"), Value::from("1"));

        let cmd = Get {
            key: String::from("key1"),
        };

        assert_eq!(cmd.exec(&mut store), Reply::Str("1".to_string()));
    }

    #[test]
    fn missing_key() {
        let mut store = Store::new();

        let cmd = Get {
            key: String::from("key1"),
        };

        assert_eq!(cmd.exec(&mut store), Reply::Nil);
    }

    #[test]
    fn wrong_type() {
        let mut store = Store::new();
        store.set(String::from("key1"), Value::List(VecDeque::new()));

        let cmd = Get {
            key: String::from("key1"),
        };

        assert!(cmd.exec(&mut store).is_error());
    }
}
