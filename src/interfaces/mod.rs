//! External encodings of loan requests and results.

pub mod csv;
