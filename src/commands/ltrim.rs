use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;
use crate::utils::range;

/// Trims the list stored at `key` so that it only contains the elements between `start` and
/// `end`, both inclusive, with the same offset rules as `LRANGE`. A list trimmed down to nothing
/// is kept as an empty list. Trimming a missing key does nothing.
///
/// Ref: <https://redis.io/docs/latest/commands/ltrim/>
#[derive(Debug, Clone, PartialEq)]
pub struct LTrim {
    pub key: String,
    pub start: i64,
    pub end: i64,
}

impl Executable for LTrim {
    fn exec(self, store: &mut Store) -> Reply {
        let list = match store.get_list_mut(&self.key) {
            Ok(Some(list)) => list,
            Ok(None) => return Reply::ok(),
            Err(err) => return err.into(),
        };

        match range::normalize(self.start, self.end, list.len()) {
            Some(range) => {
                list.truncate(range.end() + 1);
                list.drain(..*range.start());
            }
            None => list.clear(),
        }

        Reply::ok()
    }
}
