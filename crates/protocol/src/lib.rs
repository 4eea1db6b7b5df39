//! Wire types for the chessview action protocol.
//!
//! This crate contains the serde-serializable types for the one message the
//! client shell originates: outbound action events. These types represent the
//! "protocol layer" - the shape of data as it appears on the wire.
//!
//! The surrounding session protocol (view-tree streaming, request/response
//! framing, reconnection) belongs to the external session framework and is
//! deliberately absent here.

pub mod action;

pub use action::*;
