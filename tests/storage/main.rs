#[path = "../common/mod.rs"]
mod common;

mod backend_equivalence;
mod root_switching;
