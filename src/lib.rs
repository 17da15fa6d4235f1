// Copyright 2026 the benchmatrix authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Benchmatrix
//!
//! `benchmatrix` regenerates the JMH benchmark sources that exercise
//! persistent/immutable collection libraries (lists, maps, sets, and their
//! builders) across several JVM implementations. Each run wipes the output
//! tree and re-emits the full cross product of collection kind × operation ×
//! backing implementation, so the generated tree always matches the catalogs
//! exactly.
//!
//! This crate contains the main library logic for the `bmx` CLI, but its
//! core modules (`catalog`, `plan`, `render`, `output`) could be used
//! independently.
//!
//! ## Core Modules
//!
//! * [`catalog`]: Static tables describing every benchmarked implementation
//!   (name, library package, capability flags, Kotlin API fragments), plus
//!   the validation pass that runs before generation.
//! * [`plan`]: The combination enumerator. Builds the deterministic list of
//!   generation units from the catalogs, filtering operations by capability.
//! * [`render`]: Renders one generation unit into complete source text:
//!   license header, do-not-edit marker, package, imports, and body.
//! * [`output`]: Wipes the previous output tree and writes every rendered
//!   unit to its package-derived path.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod plan;
pub mod render;
