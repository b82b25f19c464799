#![allow(dead_code)]

pub mod artifacts;
pub mod config_env;
