// src/checker/http.rs
// =============================================================================
// This module checks if a single URL is alive by making one HTTP GET request.
//
// Classification:
// - Could not get a response at all (DNS, refused, reset, timeout) -> Error
// - Got a response with status 200                                 -> Ok
// - Got any other status                                           -> the status line
//
// Only failures are interesting to the rest of the program: an Ok outcome is
// never sent anywhere. Note that "any other status" really means any: a 204 or
// a 302 that wasn't followed is reported just like a 404.
//
// Rust concepts:
// - Enums with data: LinkStatus::Failed carries the reason
// - Display: how an outcome turns into a "<url>: <reason>" line
// - Ownership: the Response is dropped before we return, which hands the
//   connection back to the client's pool
// =============================================================================

use std::fmt;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

// Why a probe failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// No HTTP response was received (connection, DNS, TLS, timeout...)
    Transport {
        /// The underlying error, kept for logs and JSON output only
        detail: String,
    },
    /// The server answered with something other than 200
    Status {
        #[serde(serialize_with = "serialize_status")]
        code: StatusCode,
    },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Transport failures are deliberately terse on the report line
            FailureReason::Transport { .. } => f.write_str("Error"),
            // StatusCode's Display is the status line, e.g. "404 Not Found"
            FailureReason::Status { code } => write!(f, "{}", code),
        }
    }
}

fn serialize_status<S: serde::Serializer>(code: &StatusCode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u16(code.as_u16())
}

// The status of a link after checking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinkStatus {
    /// 200 OK
    Ok,
    /// Anything else
    Failed(FailureReason),
}

// The result of probing one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// The URL exactly as it appeared in the manifest
    pub url: String,
    #[serde(flatten)]
    pub status: LinkStatus,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self.status, LinkStatus::Ok)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            LinkStatus::Ok => write!(f, "{}: OK", self.url),
            LinkStatus::Failed(reason) => write!(f, "{}: {}", self.url, reason),
        }
    }
}

// Probes a single URL with one GET request
//
// Parameters:
//   client: shared reqwest client (cloning it is cheap, it's an Arc inside)
//   url: the URL to check, already accepted by is_valid_url
//
// There is no retry here. Whether the request can time out is decided by how
// the client was built (see fanout::coordinator).
pub async fn probe(client: &Client, url: String) -> Outcome {
    let status = match client.get(&url).send().await {
        Ok(response) => {
            let code = response.status();
            // We only need the status line. Dropping the response without
            // reading the body closes it out and releases the connection.
            drop(response);
            classify_status(code)
        }
        Err(error) => {
            debug!(%url, %error, "request failed");
            LinkStatus::Failed(FailureReason::Transport {
                detail: error.to_string(),
            })
        }
    };

    Outcome { url, status }
}

// Only an exact 200 counts as alive
fn classify_status(code: StatusCode) -> LinkStatus {
    if code == StatusCode::OK {
        LinkStatus::Ok
    } else {
        LinkStatus::Failed(FailureReason::Status { code })
    }
}
