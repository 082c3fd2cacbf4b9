use crate::reply::Reply;
use crate::store::Store;

pub trait Executable {
    fn exec(self, store: &mut Store) -> Reply;
}
