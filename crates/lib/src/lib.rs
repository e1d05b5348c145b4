//! csglue-lib: build helpers for the C# glue
//!
//! This crate provides the pieces the build system calls into:
//! - `locate`: finding the dotnet CLI, standalone MSBuild, Mono's MSBuild and the Mono SDK
//! - `msbuild`: running MSBuild with optional dependency tracking
//! - `deps`: reading MSBuild's dependency lists and writing make-style rules
//! - `version`: the glue version header
//! - `files`: artifact copying, stamp files and assembly listing

pub mod consts;
pub mod deps;
pub mod exec;
pub mod files;
pub mod locate;
pub mod msbuild;
pub mod platform;
pub mod version;

mod util;
