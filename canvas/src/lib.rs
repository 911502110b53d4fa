//! Sky chart engine: constellation projection, viewport and input handling.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of one chart session: centering the projection on the
//! selected figure, mapping stars through the zoom/pan camera, breaking lines
//! at the RA seam, hit-testing stars under the pointer, and drawing the result.
//! The host JavaScript layer only wires DOM events to the engine and acts on
//! the returned [`engine::Action`]s (animation frames, tooltip, cursor).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`sky`] | Star catalog and constellation figure types |
//! | [`angle`] | Circular mean and RA wrap arithmetic |
//! | [`center`] | Per-figure projection center |
//! | [`projection`] | Equirectangular projection into base and screen space |
//! | [`camera`] | Anchored zoom/pan camera and coordinate conversions |
//! | [`segments`] | Seam-breaking path construction and star markers |
//! | [`hit`] | Hit-testing projected stars |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`frame`] | Redraw coalescing |
//! | [`render`] | Canvas 2D drawing |
//! | [`consts`] | Shared numeric constants (scale limits, hit radii, etc.) |

pub mod angle;
pub mod camera;
pub mod center;
pub mod consts;
pub mod engine;
pub mod frame;
pub mod hit;
pub mod input;
pub mod projection;
pub mod render;
pub mod segments;
pub mod sky;
