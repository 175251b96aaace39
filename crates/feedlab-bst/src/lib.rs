//! Binary search trees for feedlab.
//!
//! Both trees share one ordering rule: a key strictly less than the node's
//! key goes left, anything else (equal keys included) goes right. Duplicates
//! therefore accumulate in right subtrees.
//!
//! - [`StringBst`] is built per search request from post titles and answers
//!   case-insensitive substring queries in preorder.
//! - [`IntBst`] backs the interactive BST demo, validates raw input and
//!   stops growing at [`MAX_DEPTH`] levels.

mod int_bst;
mod string_bst;

pub use int_bst::{INTEGER_REQUIRED, IntBst, MAX_DEPTH, coerce_int};
pub use string_bst::{SearchReport, StringBst};
