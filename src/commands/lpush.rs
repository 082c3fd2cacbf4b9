use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Inserts `value` at the head of the list stored at `key`, creating the list if the key does not
/// exist. Returns the length of the list after the push.
///
/// Ref: <https://redis.io/docs/latest/commands/lpush/>
#[derive(Debug, Clone, PartialEq)]
pub struct LPush {
    pub key: String,
    pub value: String,
}

impl Executable for LPush {
    fn exec(self, store: &mut Store) -> Reply {
        match store.list_or_default(&self.key) {
            Ok(list) => {
                list.push_front(self.value);
                Reply::from(list.len())
            }
            Err(err) => err.into(),
        }
    }
}
