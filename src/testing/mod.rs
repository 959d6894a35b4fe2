// src/testing/mod.rs

pub mod mocks;

pub use mocks::{FailingFont, FixedWidthFont, MockMatrix, StaticLayouts, SurfaceLog, TextOp};
