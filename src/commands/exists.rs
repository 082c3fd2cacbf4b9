use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Returns how many of the given keys exist, whatever their type. With a single key the reply is
/// `1` or `0`.
///
/// Ref: <https://redis.io/docs/latest/commands/exists/>
#[derive(Debug, Clone, PartialEq)]
pub struct Exists {
    pub keys: Vec<String>,
}

impl Executable for Exists {
    fn exec(self, store: &mut Store) -> Reply {
        let count = self.keys.iter().filter(|key| store.exists(key)).count();
        Reply::from(count)
    }
}
