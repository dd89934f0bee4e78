//! Line-oriented JSON protocol over a [`Namespace`].
//!
//! One request per line:
//!
//! ```text
//! {"call": "julian_day", "args": [1981, 8, 22, 11.35]}
//! {"const": "SEFLG_SPEED"}
//! ```
//!
//! One response per line, `{"ok": <value>}` or
//! `{"error": {"kind": "...", "message": "..."}}`.

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::Backend;
use crate::error::{ErrorKind, HostError};
use crate::namespace::Namespace;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Request {
    Call {
        call: String,
        #[serde(default)]
        args: Vec<Value>,
    },
    Const {
        #[serde(rename = "const")]
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Ok(Value),
    Error(ErrorBody),
}

impl Response {
    fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Response::Error(ErrorBody {
            kind,
            message: message.into(),
        })
    }
}

impl From<HostError> for Response {
    fn from(err: HostError) -> Self {
        Response::error(err.kind(), err.to_string())
    }
}

/// Execute one parsed request
pub fn handle_request<B: Backend>(ns: &mut Namespace<B>, request: Request) -> Response {
    match request {
        Request::Call { call, args } => match ns.call(&call, &args) {
            Ok(value) => Response::Ok(value),
            Err(err) => {
                warn!("{} failed: {}", call, err);
                err.into()
            }
        },
        Request::Const { name } => match ns.constant(&name) {
            Some(value) => Response::Ok(Value::from(value)),
            None => Response::error(ErrorKind::Unknown, format!("undefined constant '{name}'")),
        },
    }
}

/// Parse and execute one request line
pub fn handle_line<B: Backend>(ns: &mut Namespace<B>, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            debug!("request: {:?}", request);
            handle_request(ns, request)
        }
        Err(e) => Response::error(ErrorKind::Type, format!("malformed request: {e}")),
    }
}

/// Serve requests from `input` until end of input, returning the number handled.
///
/// Blank lines are skipped. Every other line gets exactly one response line.
pub fn run<B, R, W>(ns: &mut Namespace<B>, input: R, mut output: W) -> io::Result<usize>
where
    B: Backend,
    R: BufRead,
    W: Write,
{
    let mut handled = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(ns, &line);
        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
        handled += 1;
    }
    Ok(handled)
}
