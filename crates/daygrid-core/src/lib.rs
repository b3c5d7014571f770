//! Daygrid Core Types and Definitions
//!
//! This crate provides the foundational types shared by the daygrid layout
//! engine and its callers. It includes:
//!
//! - **Identifiers**: Interned event identifiers ([`identifier::EventId`])
//! - **Time**: Minute-precision timestamps and half-open intervals ([`time`] module)
//! - **Events**: The input unit of a day layout ([`event::Event`])
//! - **Geometry**: Horizontal placement in percent of the day column ([`geometry::Position`])

pub mod event;
pub mod geometry;
pub mod identifier;
pub mod time;
