use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Increments the number stored at key by `increment`.
///
/// Ref: <https://redis.io/docs/latest/commands/incrby/>
#[derive(Debug, Clone, PartialEq)]
pub struct IncrBy {
    pub key: String,
    pub increment: i64,
}

impl Executable for IncrBy {
    fn exec(self, store: &mut Store) -> Reply {
        store.incr_by(&self.key, self.increment).into()
    }
}
