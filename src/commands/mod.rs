pub mod dbsize;
pub mod decr;
pub mod decrby;
pub mod del;
pub mod executable;
pub mod exists;
pub mod get;
pub mod incr;
pub mod incrby;
pub mod keys;
pub mod llen;
pub mod lmove;
pub mod lpop;
pub mod lpush;
pub mod lrange;
pub mod ltrim;
pub mod rpop;
pub mod rpush;
pub mod sadd;
pub mod scard;
pub mod sdiff;
pub mod set;
pub mod sinter;
pub mod sismember;
pub mod smembers;
pub mod srem;
pub mod sunion;
pub mod type_;

use itertools::Itertools;
use tracing::debug;

use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::Store;

use dbsize::DBSize;
use decr::Decr;
use decrby::DecrBy;
use del::Del;
use exists::Exists;
use get::Get;
use incr::Incr;
use incrby::IncrBy;
use keys::Keys;
use llen::LLen;
use lmove::LMove;
use lpop::LPop;
use lpush::LPush;
use lrange::LRange;
use ltrim::LTrim;
use rpop::RPop;
use rpush::RPush;
use sadd::SAdd;
use scard::SCard;
use sdiff::SDiff;
use set::Set;
use sinter::SInter;
use sismember::SIsMember;
use smembers::SMembers;
use srem::SRem;
use sunion::SUnion;
use type_::Type;

pub use lmove::Side;

/// Every command the store understands. A server layer builds one of these from a request and
/// runs it with `exec`; the reply it gets back is the only outcome of the command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    DBSize(DBSize),
    Decr(Decr),
    DecrBy(DecrBy),
    Del(Del),
    Exists(Exists),
    Get(Get),
    Incr(Incr),
    IncrBy(IncrBy),
    Keys(Keys),
    Set(Set),
    Type(Type),

    LLen(LLen),
    LMove(LMove),
    LPop(LPop),
    LPush(LPush),
    LRange(LRange),
    LTrim(LTrim),
    RPop(RPop),
    RPush(RPush),

    SAdd(SAdd),
    SCard(SCard),
    SDiff(SDiff),
    SInter(SInter),
    SIsMember(SIsMember),
    SMembers(SMembers),
    SRem(SRem),
    SUnion(SUnion),
}

impl Executable for Command {
    fn exec(self, store: &mut Store) -> Reply {
        debug!(command = ?self, "executing command");

        match self {
            Command::DBSize(cmd) => cmd.exec(store),
            Command::Decr(cmd) => cmd.exec(store),
            Command::DecrBy(cmd) => cmd.exec(store),
            Command::Del(cmd) => cmd.exec(store),
            Command::Exists(cmd) => cmd.exec(store),
            Command::Get(cmd) => cmd.exec(store),
            Command::Incr(cmd) => cmd.exec(store),
            Command::IncrBy(cmd) => cmd.exec(store),
            Command::Keys(cmd) => cmd.exec(store),
            Command::Set(cmd) => cmd.exec(store),
            Command::Type(cmd) => cmd.exec(store),
            Command::LLen(cmd) => cmd.exec(store),
            Command::LMove(cmd) => cmd.exec(store),
            Command::LPop(cmd) => cmd.exec(store),
            Command::LPush(cmd) => cmd.exec(store),
            Command::LRange(cmd) => cmd.exec(store),
            Command::LTrim(cmd) => cmd.exec(store),
            Command::RPop(cmd) => cmd.exec(store),
            Command::RPush(cmd) => cmd.exec(store),
            Command::SAdd(cmd) => cmd.exec(store),
            Command::SCard(cmd) => cmd.exec(store),
            Command::SDiff(cmd) => cmd.exec(store),
            Command::SInter(cmd) => cmd.exec(store),
            Command::SIsMember(cmd) => cmd.exec(store),
            Command::SMembers(cmd) => cmd.exec(store),
            Command::SRem(cmd) => cmd.exec(store),
            Command::SUnion(cmd) => cmd.exec(store),
        }
    }
}

// Set members have no order of their own; replies list them sorted so they are stable.
fn sorted_members<'a>(members: impl Iterator<Item = &'a String>) -> Vec<String> {
    members.cloned().sorted().collect()
}
