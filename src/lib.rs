extern crate dot;
extern crate itertools;
extern crate rustc_serialize;
extern crate thiserror;

pub mod paving;
pub mod tools;
