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
use chrono::Datelike;
use chrono::Utc;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use crate::catalog;
use crate::error::BenchmatrixError;
use crate::error::OutputError;
use crate::plan;
use crate::plan::GenerationUnit;

/// Outcome of a full regeneration.
#[derive(Debug)]
pub struct Summary {
  pub files_written: usize,
}

/// Runs the whole batch: validate the catalogs, wipe the previous output
/// tree, then render and write every planned file. The year is read from the
/// clock once, so a run never straddles a year boundary mid-tree.
pub fn regenerate(root: &Path) -> Result<Summary, BenchmatrixError> {
  catalog::validate()?;

  reset_output_root(root)?;

  let year = Utc::now().year();
  let units = plan::enumerate();
  tracing::info!("Planned {} source files", units.len());

  for unit in &units {
    let path = write_unit(root, unit, year)?;
    tracing::debug!("Wrote {}", path.display());
  }

  Ok(Summary {
    files_written: units.len(),
  })
}

/// Recursively deletes the previous output tree, deepest entries first,
/// leaving `root` absent. A root that never existed is fine; any other
/// failure aborts the run before generation starts, so a schema change can
/// never leave stale files behind.
pub fn reset_output_root(root: &Path) -> Result<(), OutputError> {
  match fs::remove_dir_all(root) {
    Ok(()) => {
      tracing::info!("Cleared previous output tree at {}", root.display());
      Ok(())
    }
    Err(source) if source.kind() == ErrorKind::NotFound => Ok(()),
    Err(source) => Err(OutputError::Reset {
      path: root.to_path_buf(),
      source,
    }),
  }
}

/// Resolves `root/<package as directories>/<file>.kt`, creates missing
/// parents, and writes the rendered text, overwriting anything in the way.
pub fn write_unit(
  root: &Path,
  unit: &GenerationUnit,
  year: i32,
) -> Result<PathBuf, OutputError> {
  let path = root.join(unit.relative_path());

  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
      path: parent.to_path_buf(),
      source,
    })?;
  }

  fs::write(&path, unit.render(year)).map_err(|source| OutputError::Write {
    path: path.clone(),
    source,
  })?;

  Ok(path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::BTreeMap;
  use std::collections::BTreeSet;
  use tempfile::tempdir;

  fn collect_files(root: &Path) -> BTreeSet<PathBuf> {
    fn walk(dir: &Path, root: &Path, acc: &mut BTreeSet<PathBuf>) {
      for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
          walk(&path, root, acc);
        } else {
          acc.insert(path.strip_prefix(root).unwrap().to_path_buf());
        }
      }
    }

    let mut acc = BTreeSet::new();
    if root.exists() {
      walk(root, root, &mut acc);
    }
    acc
  }

  fn read_tree(root: &Path) -> BTreeMap<PathBuf, String> {
    collect_files(root)
      .into_iter()
      .map(|rel| {
        let content = fs::read_to_string(root.join(&rel)).unwrap();
        (rel, content)
      })
      .collect()
  }

  #[test]
  fn reset_tolerates_a_missing_root() {
    let temp = tempdir().unwrap();
    reset_output_root(&temp.path().join("never-created")).unwrap();
  }

  #[test]
  fn reset_removes_nested_stale_trees() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("out");
    fs::create_dir_all(root.join("a/b/c")).unwrap();
    fs::write(root.join("a/b/c/stale.kt"), "stale").unwrap();

    reset_output_root(&root).unwrap();

    assert!(!root.exists());
  }

  #[test]
  fn write_unit_creates_parent_directories() {
    let temp = tempdir().unwrap();
    let unit = plan::enumerate().into_iter().next().unwrap();

    let path = write_unit(temp.path(), &unit, 2026).unwrap();

    assert_eq!(path, temp.path().join(unit.relative_path()));
    assert_eq!(fs::read_to_string(&path).unwrap(), unit.render(2026));
  }

  #[test]
  fn regeneration_matches_the_plan_exactly() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("out");

    // Stale leftovers, including ones shaped like a catalog entry that no
    // longer exists.
    fs::create_dir_all(root.join("benchmarks/oldlib/immutableList")).unwrap();
    fs::write(root.join("benchmarks/oldlib/immutableList/Add.kt"), "stale").unwrap();
    fs::write(root.join("benchmarks/oldlib/immutableList/Get.kt"), "stale").unwrap();
    fs::write(root.join("stray.txt"), "stale").unwrap();

    let summary = regenerate(&root).unwrap();

    let expected: BTreeSet<PathBuf> = plan::enumerate()
      .iter()
      .map(GenerationUnit::relative_path)
      .collect();
    assert_eq!(summary.files_written, expected.len());
    assert_eq!(collect_files(&root), expected);
  }

  #[test]
  fn rerunning_produces_an_identical_tree() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("out");

    regenerate(&root).unwrap();
    let first = read_tree(&root);

    regenerate(&root).unwrap();
    let second = read_tree(&root);

    assert_eq!(first, second);
  }
}
