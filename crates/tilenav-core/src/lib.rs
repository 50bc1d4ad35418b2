//! **tilenav-core** — Tile-based navigation for 2D action games (core types).
//!
//! This crate provides the two coordinate vocabularies shared across the
//! *tilenav* ecosystem: [`Point`] for integer tile coordinates and [`Vec2`]
//! for continuous world coordinates.

pub mod geom;

pub use geom::{Point, Vec2};
