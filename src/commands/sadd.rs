use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Adds `member` to the set stored at `key`, creating the set if needed. Returns `1` if the member
/// was added and `0` if it was already there.
///
/// Ref: <https://redis.io/docs/latest/commands/sadd/>
#[derive(Debug, Clone, PartialEq)]
pub struct SAdd {
    pub key: String,
    pub member: String,
}

impl Executable for SAdd {
    fn exec(self, store: &mut Store) -> Reply {
        store
            .set_or_default(&self.key)
            .map(|set| set.insert(self.member))
            .into()
    }
}
