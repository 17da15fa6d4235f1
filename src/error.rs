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
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error enum for the benchmatrix library.
#[derive(Error, Debug)]
pub enum BenchmatrixError {
  #[error("Catalog validation failed")]
  Catalog(#[from] CatalogError),

  #[error("Failed to regenerate the output tree")]
  Output(#[from] OutputError),
}

/// Mistakes in the static catalogs (src/catalog.rs). These are programmer
/// errors, caught before any filesystem work starts.
#[derive(Error, Debug)]
pub enum CatalogError {
  #[error("No implementations registered for the {kind} group")]
  EmptyGroup { kind: &'static str },

  #[error("Implementation '{name}' registered twice in the {kind} group")]
  DuplicateName {
    kind: &'static str,
    name: &'static str,
  },

  #[error("No implementation in the {kind} group is eligible for {operation}")]
  EmptyCombination {
    kind: &'static str,
    operation: &'static str,
  },

  #[error("Builder capability of '{name}' disagrees with the {kind} builder catalog")]
  BuilderMismatch {
    kind: &'static str,
    name: &'static str,
  },
}

/// Filesystem failures while resetting or writing the output tree
/// (src/output.rs). All fatal; the next run starts from a clean wipe.
#[derive(Error, Debug)]
pub enum OutputError {
  #[error("Failed to clear output root {}", .path.display())]
  Reset {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to create directory {}", .path.display())]
  CreateDir {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write {}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
