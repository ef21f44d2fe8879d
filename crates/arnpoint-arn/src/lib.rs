//! ARN data model and parser for ArnPoint.
//!
//! This crate provides the resource-identifier half of endpoint resolution:
//! parsing the raw string a caller placed in the bucket field of an outbound
//! request into a structured [`ResourceArn`], and classifying the access-point
//! shapes the resolver cares about. Parsing is a pure function and performs no
//! normalization; every parsed component is an exact substring of the input.

mod arn;
mod error;

pub use arn::ResourceArn;
pub use error::{ArnResult, InvalidArn};
