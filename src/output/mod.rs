//! Terminal output formatting
//!
//! All text the player sees is rendered here; the session itself never prints.

pub mod display;
pub mod formatters;

pub use display::{
    print_declined, print_final, print_guess_feedback, print_hint, print_interrupted,
    print_progress, print_rules,
};
