#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

pub mod bigint;
pub mod ct;
pub mod decompose;
pub mod endomorphism;
pub mod mul;
pub mod params;
pub mod point;
pub mod recode;
pub mod table;

#[cfg(any(test, feature = "dev"))]
pub mod dev;

pub use crate::{
    endomorphism::{G1Endomorphism, G2Endomorphism},
    params::EndoParams,
    point::{CurvePoint, FieldElement},
};

pub use subtle;

pub use crate::mul::{scalar_mul_endo, scalar_mul_endo_m2w2};
