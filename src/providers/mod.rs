pub mod minetur;
