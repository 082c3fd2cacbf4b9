use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Decrements the number stored at key by one.
///
/// Ref: <https://redis.io/docs/latest/commands/decr/>
#[derive(Debug, Clone, PartialEq)]
pub struct Decr {
    pub key: String,
}

impl Executable for Decr {
    fn exec(self, store: &mut Store) -> Reply {
        store.incr_by(&self.key, -1i64).into()
    }
}
