//! Aureole Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Aureole layout
//! engines and renderers. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Plan**: Placement requests and the plans computed for them ([`plan`] module)
//! - **Strategy**: Selection between ring and spiral placement ([`strategy::LayoutStrategy`])

pub mod geometry;
pub mod plan;
pub mod strategy;
