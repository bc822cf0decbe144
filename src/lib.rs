//! Classical substitution ciphers: Caesar, Vigenère and Playfair.
//!
//! The engine in [`adapters::cipher`] is a set of pure functions over
//! strings. Each cipher can also produce a [`core::models::trace::Trace`],
//! an ordered record of every character or pair it transformed, for
//! callers that want to show the process step by step.
//!
//! ```
//! use cipherplay::adapters::cipher::{caesar, playfair, vigenere};
//!
//! assert_eq!(caesar::encrypt("Hello", 3), "Khoor");
//! assert_eq!(vigenere::encrypt("ATTACKATDAWN", "LEMON"), "LXFOPVEFRNHR");
//! assert_eq!(playfair::normalize("balloon"), "BALXLOXONX");
//! ```
//!
//! These ciphers are historical curiosities and offer no security.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
