use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Returns the length of the list stored at `key`, `0` if the key does not exist.
///
/// Ref: <https://redis.io/docs/latest/commands/llen/>
#[derive(Debug, Clone, PartialEq)]
pub struct LLen {
    pub key: String,
}

impl Executable for LLen {
    fn exec(self, store: &mut Store) -> Reply {
        store
            .get_list(&self.key)
            .map(|list| list.map_or(0, |list| list.len()))
            .into()
    }
}
