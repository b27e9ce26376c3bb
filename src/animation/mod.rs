//! Spring animation primitives for frame transitions.

pub mod group;
pub mod spring;

pub use group::{AnimationGroup, Channel};
pub use spring::{Spring, SpringParams};
