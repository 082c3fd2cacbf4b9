use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Inserts `value` at the tail of the list stored at `key`, creating the list if the key does not
/// exist. Returns the length of the list after the push.
///
/// Ref: <https://redis.io/docs/latest/commands/rpush/>
#[derive(Debug, Clone, PartialEq)]
pub struct RPush {
    pub key: String,
    pub value: String,
}

impl Executable for RPush {
    fn exec(self, store: &mut Store) -> Reply {
        match store.list_or_default(&self.key) {
            Ok(list) => {
                list.push_back(self.value);
                Reply::from(list.len())
            }
            Err(err) => err.into(),
        }
    }
}
