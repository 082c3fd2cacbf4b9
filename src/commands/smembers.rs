use crate::commands::executable::Executable;
use crate::commands::sorted_members;
use crate::reply::Reply;
use crate::store::Store;

/// Returns all the members of the set stored at `key`.
///
/// Ref: <https://redis.io/docs/latest/commands/smembers/>
#[derive(Debug, Clone, PartialEq)]
pub struct SMembers {
    pub key: String,
}

impl Executable for SMembers {
    fn exec(self, store: &mut Store) -> Reply {
        store
            .get_set(&self.key)
            .map(|set| sorted_members(set.into_iter().flatten()))
            .into()
    }
}
