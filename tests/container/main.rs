#[path = "../common/mod.rs"]
mod common;

mod corruption;
mod end_to_end;
mod roundtrip;
