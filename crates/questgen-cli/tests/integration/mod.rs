//! Integration tests for the questgen CLI
//!
//! Tests run the real binary against a directory mirror written with real
//! safetensors checkpoints and tokenizers. Nothing touches the network.
//!
//! # Test Categories
//! - `command_test`: download / load / list output
//! - `exit_code_test`: Failure conditions and exit codes

pub mod command_test;
pub mod exit_code_test;
pub mod helpers;
