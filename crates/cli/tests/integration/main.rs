//! CLI integration tests.
//!
//! These drive the `csglue` binary against a fake MSBuild script, so they only
//! run where `/bin/sh` is available.

#![cfg(unix)]

mod common;
mod glue_version_tests;
mod run_msbuild_tests;
