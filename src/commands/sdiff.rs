use crate::commands::executable::Executable;
use crate::commands::sorted_members;
use crate::reply::Reply;
use crate::store::Store;

/// Returns the members of the set stored at `first` that are not in the set stored at `second`.
/// Missing keys are treated as empty sets.
///
/// Ref: <https://redis.io/docs/latest/commands/sdiff/>
#[derive(Debug, Clone, PartialEq)]
pub struct SDiff {
    pub first: String,
    pub second: String,
}

impl Executable for SDiff {
    fn exec(self, store: &mut Store) -> Reply {
        let (first, second) = match (store.get_set(&self.first), store.get_set(&self.second)) {
            (Ok(first), Ok(second)) => (first, second),
            (Err(err), _) | (_, Err(err)) => return err.into(),
        };

        let members = match (first, second) {
            (Some(first), Some(second)) => sorted_members(first.difference(second)),
            (Some(first), None) => sorted_members(first.iter()),
            (None, _) => vec![],
        };

        Reply::Array(members)
    }
}
