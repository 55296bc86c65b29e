//! Value objects for the Amazon EC2 API.
//!
//! Every request and resource shape is a record of independently optional
//! attributes with getters, `set_*` setters, chainable `with_*` builders,
//! attribute-wise equality, `hash_code` and a `{Name: value}` display form.
//! Signing, transport, retries and wire marshaling live elsewhere.
//!
//! ```
//! use ec2_model::*;
//!
//! let request = DescribeImagesRequest::new()
//!     .with_image_ids(["ami-1", "ami-2"])
//!     .with_dry_run(true);
//! assert_eq!(request.image_ids().unwrap(), ["ami-1", "ami-2"]);
//! assert_eq!(request.dry_run(), Some(true));
//! assert!(request.filters().is_none());
//!
//! let json = request.to_json()?;
//! assert_eq!(json, r#"{"ImageIds":["ami-1","ami-2"],"DryRun":true}"#);
//! assert_eq!(DescribeImagesRequest::from_json(&json)?, request);
//! assert_eq!(DescribeImagesRequest::ACTION, "DescribeImages");
//! # Ok::<(), anyhow::Error>(())
//! ```
#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod attribute;
pub mod model;
pub mod prelude;
pub mod request;
pub mod types;

pub use attribute::Timestamp;
pub use model::*;
pub use request::{Ec2Model, Ec2Request, Paginated};
pub use types::*;
