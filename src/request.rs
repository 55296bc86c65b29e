use crate::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;
use std::io::Read;
use tracing::trace;

/// Implemented by every EC2 value object.
///
/// The JSON helpers read and write the AWS CLI document shape
/// (`aws ec2 describe-instances` output, `--cli-input-json` input), not the
/// EC2 query wire format.
pub trait Ec2Model: Serialize + DeserializeOwned + Display + Sized {
    const NAME: &'static str;

    fn from_json(json: &str) -> Result<Self> {
        trace!(model = Self::NAME, bytes = json.len(), "parsing document");
        serde_json::from_str(json).with_context(|| f!("can't parse {} document", Self::NAME))
    }

    fn from_reader(reader: impl Read) -> Result<Self> {
        trace!(model = Self::NAME, "parsing document from reader");
        serde_json::from_reader(reader).with_context(|| f!("can't read {} document", Self::NAME))
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).with_context(|| f!("can't serialize {}", Self::NAME))
    }

    fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).with_context(|| f!("can't serialize {}", Self::NAME))
    }
}

/// Parameters of one EC2 API action.
pub trait Ec2Request: Ec2Model {
    /// The `Action` the transport sends, e.g. `DescribeImages`.
    const ACTION: &'static str;
}

/// A request whose results come back in pages.
///
/// The pagination loop belongs to the caller's transport; this only exposes
/// the token attributes it needs to drive one.
pub trait Paginated {
    fn next_token(&self) -> Option<&str>;
    fn set_next_token(&mut self, token: Option<String>);
    fn max_results(&self) -> Option<i32>;
}
