use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Increments the number stored at key by one. A missing key is set to `1`.
///
/// Ref: <https://redis.io/docs/latest/commands/incr/>
#[derive(Debug, Clone, PartialEq)]
pub struct Incr {
    pub key: String,
}

impl Executable for Incr {
    fn exec(self, store: &mut Store) -> Reply {
        store.incr_by(&self.key, 1i64).into()
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
        store.set(String::from("counter"), Value::from("123"));

        let cmd = Incr {
            key: "counter".to_string(),
        };
        assert_eq!(cmd.exec(&mut store), Reply::Integer(124));

        assert_eq!(store.get("counter"), Some(&Value::from("124")));
    }

    #[test]
    fn non_existing_key() {
        let mut store = Store::new();

        for expected in 1..=3 {
            let cmd = Incr {
                key: "key1".to_string(),
            };
            assert_eq!(cmd.exec(&mut store), Reply::Integer(expected));
        }

        assert_eq!(store.get("key1"), Some(&Value::from("3")));
    }

    #[test]
    fn negative_value() {
        let mut store = Store::new();
        store.set(String::from("key1"), Value::from("-1"));

        let cmd = Incr {
            key: "key1".to_string(),
        };
        assert_eq!(cmd.exec(&mut store), Reply::Integer(0));
    }

    #[test]
    fn non_integer_value() {
        let mut store = Store::new();
        store.set(String::from("key1"), Value::from("hello world"));

        let cmd = Incr {
            key: "key1".to_string(),
        };
        assert_eq!(
            cmd.clone().exec(&mut store),
            Reply::Error("Cannot increment non-integer".to_string())
        );
        assert_eq!(
            cmd.exec(&mut store),
            Reply::Error("Cannot increment non-integer".to_string())
        );

        assert_eq!(store.get("key1"), Some(&Value::from("hello world")));
    }

    #[test]
    fn trailing_garbage() {
        let mut store = Store::new();
        store.set(String::from("key1"), Value::from("12 "));

        let cmd = Incr {
            key: "key1".to_string(),
        };
        assert!(cmd.exec(&mut store).is_error());
        assert_eq!(store.get("key1"), Some(&Value::from("12 ")));
    }

    #[test]
    fn out_of_range() {
        let mut store = Store::new();
        store.set(String::from("key1"), Value::from("9223372036854775807"));

        let cmd = Incr {
            key: "key1".to_string(),
        };
        assert_eq!(
            cmd.exec(&mut store),
            Reply::Error("increment or decrement would overflow".to_string())
        );

        assert_eq!(
            store.get("key1"),
            Some(&Value::from("9223372036854775807"))
        );
    }

    #[test]
    fn wrong_type() {
        let mut store = Store::new();
        store.set(String::from("key1"), Value::List(VecDeque::new()));

        let cmd = Incr {
            key: "key1".to_string(),
        };
        assert_eq!(
            cmd.exec(&mut store),
            Reply::Error(
                "WRONGTYPE Operation against a key holding the wrong kind of value".to_string()
            )
        );
        assert_eq!(store.get("key1"), Some(&Value::List(VecDeque::new())));
    }
}
