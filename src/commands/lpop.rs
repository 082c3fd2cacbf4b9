use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Removes and returns the first element of the list stored at `key`. Returns `nil` when the list
/// is empty or the key does not exist. An emptied list stays in place as an empty list.
///
/// Ref: <https://redis.io/docs/latest/commands/lpop/>
#[derive(Debug, Clone, PartialEq)]
pub struct LPop {
    pub key: String,
}

impl Executable for LPop {
    fn exec(self, store: &mut Store) -> Reply {
        store
            .get_list_mut(&self.key)
            .map(|list| list.and_then(|list| list.pop_front()))
            .into()
    }
}
