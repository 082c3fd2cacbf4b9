use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Removes and returns the last element of the list stored at `key`. Returns `nil` when the list
/// is empty or the key does not exist.
///
/// Ref: <https://redis.io/docs/latest/commands/rpop/>
#[derive(Debug, Clone, PartialEq)]
pub struct RPop {
    pub key: String,
}

impl Executable for RPop {
    fn exec(self, store: &mut Store) -> Reply {
        store
            .get_list_mut(&self.key)
            .map(|list| list.and_then(|list| list.pop_back()))
            .into()
    }
}
