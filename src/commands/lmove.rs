use std::collections::VecDeque;

use strum_macros::{Display, EnumString};

use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

/// One end of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn pop(self, list: &mut VecDeque<String>) -> Option<String> {
        match self {
            Side::Left => list.pop_front(),
            Side::Right => list.pop_back(),
        }
    }

    pub fn push(self, list: &mut VecDeque<String>, value: String) {
        match self {
            Side::Left => list.push_front(value),
            Side::Right => list.push_back(value),
        }
    }
}

/// Atomically pops an element from the `from` side of the list stored at `source` and pushes it
/// to the `to` side of the list stored at `destination`, creating the destination list when
/// needed. Returns the moved element, or `nil` when the source list is empty or missing.
///
/// Source and destination may be the same key, which rotates the list.
///
/// Ref: <https://redis.io/docs/latest/commands/lmove/>
#[derive(Debug, Clone, PartialEq)]
pub struct LMove {
    pub source: String,
    pub destination: String,
    pub from: Side,
    pub to: Side,
}

impl Executable for LMove {
    fn exec(self, store: &mut Store) -> Reply {
        // Both keys are type-checked before popping so that a failing move leaves the source
        // untouched.
        if let Err(err) = store.get_list(&self.destination) {
            return err.into();
        }

        let element = match store.get_list_mut(&self.source) {
            Ok(list) => list.and_then(|list| self.from.pop(list)),
            Err(err) => return err.into(),
        };

        let Some(element) = element else {
            return Reply::Nil;
        };

        match store.list_or_default(&self.destination) {
            Ok(list) => {
                self.to.push(list, element.clone());
                Reply::Str(element)
            }
            Err(err) => {
                // Unreachable after the check above; the element goes back rather than being lost.
                if let Ok(Some(source)) = store.get_list_mut(&self.source) {
                    self.from.push(source, element);
                }
                err.into()
            }
        }
    }
}
