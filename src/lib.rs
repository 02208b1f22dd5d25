#![forbid(unsafe_code)]
//! tree-noter — realigns trailing comments in `tree` output into a shared
//! column, or rewrites them with a repeated-separator decorator.

pub mod cli;
pub mod layout;
pub mod render;
pub mod split;
pub mod terminal;
