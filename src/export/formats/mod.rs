pub mod apobec;
pub mod signatures;
