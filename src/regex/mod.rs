//! Lazily compiled regular expressions

mod cache;
