use glob_match::glob_match;

use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Returns all keys matching `pattern`, sorted.
///
/// Ref: <https://redis.io/commands/keys>
#[derive(Debug, Clone, PartialEq)]
pub struct Keys {
    pub pattern: String,
}

impl Executable for Keys {
    fn exec(self, store: &mut Store) -> Reply {
        let mut res: Vec<String> = store
            .keys()
            .filter(|key| glob_match(&self.pattern, key))
            .cloned()
            .collect();
        res.sort();

        Reply::Array(res)
    }
}
