//! Pure transcript assembly and field extraction.
//!
//! This crate turns the loosely shaped message records returned by the
//! conversation service into a plain-text transcript and scans that
//! transcript for lead fields. It defines:
//!
//! - [`message_text`] / [`assemble_transcript`] - project message records
//!   into a single newline-joined transcript
//! - [`extract_name`] - ordered, case-insensitive name-cue pattern table
//! - [`extract_email`] - first email-shaped match in the transcript
//!
//! Everything here is pure: no I/O, no state, same output for the same
//! input every time. A failed extraction is a `None`, never an error.

mod email;
mod name;
mod transcript;

pub use email::extract_email;
pub use name::extract_name;
pub use transcript::{assemble_transcript, message_text};
