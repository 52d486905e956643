//! Hardware-independent chart rendering for balance-chart
//!
//! This crate turns a small ordered dataset into an animated line/area
//! chart: coordinate normalization, linear and smooth path construction,
//! grid drawing, a left-to-right reveal animation, and rasterization onto
//! any `embedded-graphics` RGB565 draw target.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on embedded
//! targets as well as desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod animation;
pub mod chart;
pub mod framebuffer;
pub mod layout;
pub mod sample_data;
pub mod ui;
