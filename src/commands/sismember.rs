use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Returns `1` if `member` belongs to the set stored at `key`, `0` otherwise, including when the
/// key does not exist.
///
/// Ref: <https://redis.io/docs/latest/commands/sismember/>
#[derive(Debug, Clone, PartialEq)]
pub struct SIsMember {
    pub key: String,
    pub member: String,
}

impl Executable for SIsMember {
    fn exec(self, store: &mut Store) -> Reply {
        store
            .get_set(&self.key)
            .map(|set| set.is_some_and(|set| set.contains(&self.member)))
            .into()
    }
}
