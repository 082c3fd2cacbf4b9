use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Returns the number of keys in the store.
///
/// Ref: <https://redis.io/docs/latest/commands/dbsize/>
#[derive(Debug, Clone, PartialEq)]
pub struct DBSize;

impl Executable for DBSize {
    fn exec(self, store: &mut Store) -> Reply {
        Reply::from(store.size())
    }
}
