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
use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn read_tree(root: &Path) -> BTreeMap<PathBuf, String> {
  fn walk(dir: &Path, root: &Path, acc: &mut BTreeMap<PathBuf, String>) {
    for entry in fs::read_dir(dir).unwrap() {
      let path = entry.unwrap().path();
      if path.is_dir() {
        walk(&path, root, acc);
      } else {
        let rel = path.strip_prefix(root).unwrap().to_path_buf();
        acc.insert(rel, fs::read_to_string(&path).unwrap());
      }
    }
  }

  let mut acc = BTreeMap::new();
  if root.exists() {
    walk(root, root, &mut acc);
  }
  acc
}

#[test]
fn test_generate_into_empty_root() {
  let temp = tempdir().unwrap();
  let root = temp.path().join("out");

  let mut cmd = Command::new(cargo::cargo_bin!("bmx"));
  cmd
    .arg("--output-root")
    .arg(&root)
    .env("CLICOLOR", "0");

  cmd
    .assert()
    .success()
    .stderr(predicate::str::contains("Generation complete"));

  let tree = read_tree(&root);
  assert!(!tree.is_empty());

  // A few known corners of the matrix.
  for expected in [
    "benchmarks/kotlin/immutableList/Add.kt",
    "benchmarks/vavrSorted/immutableMap/Get.kt",
    "benchmarks/clojure/immutableSet/builder/Remove.kt",
    "benchmarks/IntWrapper.kt",
    "benchmarks/commonUtils.kt",
  ] {
    assert!(
      tree.contains_key(Path::new(expected)),
      "missing {expected}"
    );
  }

  // Transients are not iterable, so the clojure builder packages carry no
  // Iterate file.
  assert!(!tree.contains_key(Path::new("benchmarks/clojure/immutableSet/builder/Iterate.kt")));
  assert!(tree.contains_key(Path::new("benchmarks/kotlin/immutableSet/builder/Iterate.kt")));

  // Every file opens with the license block and the marker right after it.
  for (path, content) in &tree {
    assert!(content.starts_with("/*\n"), "bad header in {}", path.display());
    assert!(
      content.contains("// Auto-generated file. DO NOT EDIT!"),
      "missing marker in {}",
      path.display()
    );
  }
}

#[test]
fn test_stale_files_do_not_survive_regeneration() {
  let temp = tempdir().unwrap();
  let root = temp.path().join("out");

  let stale_dir = root.join("benchmarks/droppedlib/immutableList");
  fs::create_dir_all(&stale_dir).unwrap();
  fs::write(stale_dir.join("Add.kt"), "// stale").unwrap();
  fs::write(stale_dir.join("Iterate.kt"), "// stale").unwrap();
  fs::write(root.join("notes.txt"), "stale").unwrap();

  let mut cmd = Command::new(cargo::cargo_bin!("bmx"));
  cmd
    .arg("--output-root")
    .arg(&root)
    .env("CLICOLOR", "0");

  cmd.assert().success();

  assert!(!root.join("benchmarks/droppedlib").exists());
  assert!(!root.join("notes.txt").exists());
  assert!(root.join("benchmarks/kotlin/immutableList/Add.kt").exists());
}

#[test]
fn test_two_runs_produce_identical_trees() {
  let temp = tempdir().unwrap();
  let root = temp.path().join("out");

  let mut first_run = Command::new(cargo::cargo_bin!("bmx"));
  first_run
    .arg("--output-root")
    .arg(&root)
    .env("CLICOLOR", "0");
  first_run.assert().success();
  let first = read_tree(&root);

  let mut second_run = Command::new(cargo::cargo_bin!("bmx"));
  second_run
    .arg("--output-root")
    .arg(&root)
    .env("CLICOLOR", "0");
  second_run.assert().success();
  let second = read_tree(&root);

  assert_eq!(first, second);
}
