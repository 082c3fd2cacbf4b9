use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;
use crate::value::Value;

/// Set `key` to hold the string `value`. Any previous value is overwritten, whatever its type.
///
/// Ref: <https://redis.io/docs/latest/commands/set/>
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub key: String,
    pub value: String,
}

impl Executable for Set {
    fn exec(self, store: &mut Store) -> Reply {
        store.set(self.key, Value::String(self.value));
        Reply::ok()
    }
}
