// https://redis.io/docs/reference/protocol-spec

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::Error;

static CRLF: &[u8; 2] = b"\r\n";

/// The outcome of every command. A server layer maps each variant onto its own wire
/// representation; `serialize` is the RESP projection of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Nil,
    Error(String),
    Integer(i64),
    Str(String),
    Array(Vec<String>),
}

impl Reply {
    pub fn ok() -> Reply {
        Reply::Str("OK".to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    pub fn serialize(&self) -> Bytes {
        let mut buf = BytesMut::new();
        self.write_to(&mut buf);
        buf.freeze()
    }

    fn write_to(&self, buf: &mut BytesMut) {
        match self {
            Reply::Nil => {
                buf.put_u8(u8::from(DataType::Null));
                buf.put_slice(CRLF);
            }
            Reply::Error(msg) => {
                buf.put_u8(u8::from(DataType::SimpleError));
                buf.put_slice(msg.as_bytes());
                buf.put_slice(CRLF);
            }
            Reply::Integer(i) => {
                buf.put_u8(u8::from(DataType::Integer));
                buf.put_slice(i.to_string().as_bytes());
                buf.put_slice(CRLF);
            }
            Reply::Str(s) => put_bulk(buf, s),
            Reply::Array(items) => {
                buf.put_u8(u8::from(DataType::Array));
                buf.put_slice(items.len().to_string().as_bytes());
                buf.put_slice(CRLF);
                for item in items {
                    put_bulk(buf, item);
                }
            }
        }
    }
}

// $<length>\r\n<data>\r\n
fn put_bulk(buf: &mut BytesMut, s: &str) {
    let length = s.len().to_string();
    buf.reserve(1 + length.len() + CRLF.len() + s.len() + CRLF.len());
    buf.put_u8(u8::from(DataType::BulkString));
    buf.put_slice(length.as_bytes());
    buf.put_slice(CRLF);
    buf.put_slice(s.as_bytes());
    buf.put_slice(CRLF);
}

impl From<Error> for Reply {
    fn from(err: Error) -> Self {
        Reply::Error(err.to_string())
    }
}

impl From<i64> for Reply {
    fn from(i: i64) -> Self {
        Reply::Integer(i)
    }
}

impl From<usize> for Reply {
    fn from(n: usize) -> Self {
        Reply::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

// Booleans travel as 0/1 integers.
impl From<bool> for Reply {
    fn from(b: bool) -> Self {
        Reply::Integer(i64::from(b))
    }
}

impl From<String> for Reply {
    fn from(s: String) -> Self {
        Reply::Str(s)
    }
}

impl From<Option<String>> for Reply {
    fn from(s: Option<String>) -> Self {
        s.map(Reply::Str).unwrap_or(Reply::Nil)
    }
}

impl From<Vec<String>> for Reply {
    fn from(items: Vec<String>) -> Self {
        Reply::Array(items)
    }
}

impl<T> From<crate::Result<T>> for Reply
where
    T: Into<Reply>,
{
    fn from(res: crate::Result<T>) -> Self {
        match res {
            Ok(value) => value.into(),
            Err(err) => err.into(),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Nil => write!(f, "(nil)"),
            Reply::Error(msg) => write!(f, "(error) {}", msg),
            Reply::Integer(i) => write!(f, "(integer) {}", i),
            Reply::Str(s) => write!(f, "\"{}\"", s),
            Reply::Array(items) if items.is_empty() => write!(f, "(empty array)"),
            Reply::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}) \"{}\"", i + 1, item)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug)]
enum DataType {
    SimpleError, // '-'
    Integer,     // ':'
    BulkString,  // '$'
    Array,       // '*'
    Null,        // '_'
}

impl From<DataType> for u8 {
    fn from(value: DataType) -> Self {
        match value {
            DataType::SimpleError => b'-',
            DataType::Integer => b':',
            DataType::BulkString => b'$',
            DataType::Array => b'*',
            DataType::Null => b'_',
        }
    }
}
