//! spherodyn: dense matrix algebra and rigid-sphere particle dynamics.
//!
//! This crate provides a small row-major matrix type with Gauss-Jordan
//! inversion, rotation/norm helpers for 3-D coordinate frames, and a
//! rigid-sphere particle whose 12-dimensional state advances by a
//! discrete-time linear state-space model.
//!
//! The design favors small, testable modules: matrices are value objects
//! (arithmetic never aliases operand storage), fallible operations return
//! explicit `Result`s, and the simulation core performs no I/O.
pub mod config;
pub mod error;
pub mod math;
pub mod particle;
