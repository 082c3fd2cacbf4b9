use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Removes `member` from the set stored at `key`. Returns `1` if the member was removed and `0` if
/// either the key or the member does not exist. A set emptied this way stays as an empty set.
///
/// Ref: <https://redis.io/docs/latest/commands/srem/>
#[derive(Debug, Clone, PartialEq)]
pub struct SRem {
    pub key: String,
    pub member: String,
}

impl Executable for SRem {
    fn exec(self, store: &mut Store) -> Reply {
        store
            .get_set_mut(&self.key)
            .map(|set| set.is_some_and(|set| set.remove(&self.member)))
            .into()
    }
}
