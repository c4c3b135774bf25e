//! Sailing physics simulation library
//!
//! Converts wind, sail, rudder, and keel state into the forces and torque that
//! drive a 2D rigid-body boat, and hands them to Rapier for integration.

pub mod config;
pub mod constants;
pub mod control;
pub mod drag;
pub mod error;
pub mod graphics;
pub mod input;
pub mod physics;
pub mod readout;
pub mod sail;
pub mod simulation;
pub mod trim;
pub mod wind;
