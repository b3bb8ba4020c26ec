//! irconv - Impulse-response filtering for sampled audio
//!
//! The pipeline has two steps:
//! 1. [`align`] re-times an impulse response from its native rate to the
//!    signal's rate by holding each coefficient for as long as it lasts.
//! 2. [`convolve`] runs a direct, same-length convolution of the signal with
//!    the aligned coefficients.
//!
//! [`apply_impulse_response`] chains the two for a [`Signal`]. With the `wav`
//! feature, [`signals::read_wav`] and [`signals::write_wav`] move audio in and
//! out of files; with `batch`, [`batch::run_batch`] applies many impulse
//! responses to one file in parallel.
//!
//! ```
//! use irconv::{ImpulseResponse, Signal, apply_impulse_response};
//!
//! let signal = Signal::new(vec![1.0, 2.0, 3.0, 4.0], 100.0).unwrap();
//! let ir = ImpulseResponse::new(vec![2.0, 0.5], 100.0).unwrap();
//! let out = apply_impulse_response(&signal, &ir).unwrap();
//! assert_eq!(out.samples(), &[3.0, 5.5, 8.0, 8.0]);
//! ```

#[cfg(feature = "batch")]
pub mod batch;
pub mod error;
pub mod filters;
pub mod impulse;
#[cfg(feature = "cli")]
pub mod logger;
pub mod signals;

// Re-export commonly used types at the crate root
pub use error::{Error, MalformedLine, RateRole, Result};
pub use filters::{Convolver, DirectConvolver, apply_impulse_response, convolve};
pub use impulse::{ImpulseResponse, align};
#[cfg(feature = "cli")]
pub use logger::ColorLogger;
pub use signals::{Recording, Signal};
