//! Impulse-response filtering.

mod convolver;

pub use convolver::{Convolver, DirectConvolver, apply_impulse_response, convolve};
