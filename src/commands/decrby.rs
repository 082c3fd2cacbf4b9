use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;
use crate::Error;

/// Decrements the number stored at key by `decrement`.
///
/// Ref: <https://redis.io/docs/latest/commands/decrby/>
#[derive(Debug, Clone, PartialEq)]
pub struct DecrBy {
    pub key: String,
    pub decrement: i64,
}

impl Executable for DecrBy {
    fn exec(self, store: &mut Store) -> Reply {
        // `i64::MIN` has no positive counterpart.
        let Some(increment) = self.decrement.checked_neg() else {
            return Error::Overflow.into();
        };

        store.incr_by(&self.key, increment).into()
    }
}
