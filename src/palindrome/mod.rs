//! Palindromic number search.

pub mod finder;

pub use finder::{is_palindrome, longest_palindromic_numbers};
