//! Algorithms built on top of the geometric kernel. The only in-scope
//! algorithm is the Bentley–Ottmann sweep; see [`sweep`].

pub mod sweep;
