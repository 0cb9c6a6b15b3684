pub mod rerun;
