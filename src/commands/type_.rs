use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// Returns the string representation of the type of the value stored at `key`: `string`, `list`
/// or `set`. If the key does not exist, `none` is returned.
///
/// Ref: <https://redis.io/docs/latest/commands/type/>
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub key: String,
}

impl Executable for Type {
    fn exec(self, store: &mut Store) -> Reply {
        let type_ = store
            .get(&self.key)
            .map(|value| value.value_type().to_string())
            .unwrap_or_else(|| "none".to_string());

        Reply::Str(type_)
    }
}
