use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;
use crate::utils::range;

/// Returns the elements of the list stored at `key` between `start` and `end`, both inclusive.
/// Negative offsets count from the end of the list and out of range offsets are clamped onto the
/// first or last element, so `0 99` returns a whole three element list and `5 10` its last element.
///
/// Ref: <https://redis.io/docs/latest/commands/lrange/>
#[derive(Debug, Clone, PartialEq)]
pub struct LRange {
    pub key: String,
    pub start: i64,
    pub end: i64,
}

impl Executable for LRange {
    fn exec(self, store: &mut Store) -> Reply {
        let list = match store.get_list(&self.key) {
            Ok(Some(list)) => list,
            Ok(None) => return Reply::Array(vec![]),
            Err(err) => return err.into(),
        };

        let elements: Vec<String> = match range::normalize(self.start, self.end, list.len()) {
            Some(range) => list.range(range).cloned().collect(),
            None => vec![],
        };

        Reply::Array(elements)
    }
}
