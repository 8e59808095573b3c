//! Log targets, for filtering output with e.g. `RUST_LOG=powerset=debug`.

pub mod targets {
    pub const REFERENCE_LIST: &str = "reference_list";
    pub const POWERSET: &str = "powerset";
}
