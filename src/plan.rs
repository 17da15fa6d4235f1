use std::path::PathBuf;

use crate::catalog;
use crate::catalog::Implementation;
use crate::render;

/// The six benchmarked collection kinds, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
  List,
  ListBuilder,
  Map,
  MapBuilder,
  Set,
  SetBuilder,
}

impl Kind {
  pub const ALL: [Kind; 6] = [
    Kind::List,
    Kind::ListBuilder,
    Kind::Map,
    Kind::MapBuilder,
    Kind::Set,
    Kind::SetBuilder,
  ];

  pub fn impls(self) -> &'static [Implementation] {
    match self {
      Kind::List => catalog::LIST_IMPLS,
      Kind::ListBuilder => catalog::LIST_BUILDER_IMPLS,
      Kind::Map => catalog::MAP_IMPLS,
      Kind::MapBuilder => catalog::MAP_BUILDER_IMPLS,
      Kind::Set => catalog::SET_IMPLS,
      Kind::SetBuilder => catalog::SET_BUILDER_IMPLS,
    }
  }

  pub fn ops(self) -> &'static [Op] {
    match self {
      Kind::List | Kind::ListBuilder => {
        &[Op::Add, Op::Get, Op::Iterate, Op::Remove, Op::Set]
      }
      Kind::Map | Kind::MapBuilder => &[Op::Get, Op::Iterate, Op::Put, Op::Remove],
      Kind::Set | Kind::SetBuilder => {
        &[Op::Add, Op::Contains, Op::Iterate, Op::Remove]
      }
    }
  }

  /// Package path below the implementation segment, e.g. `immutableMap.builder`.
  pub fn segment(self) -> &'static str {
    match self {
      Kind::List => "immutableList",
      Kind::ListBuilder => "immutableList.builder",
      Kind::Map => "immutableMap",
      Kind::MapBuilder => "immutableMap.builder",
      Kind::Set => "immutableSet",
      Kind::SetBuilder => "immutableSet.builder",
    }
  }

  pub fn is_builder(self) -> bool {
    matches!(self, Kind::ListBuilder | Kind::MapBuilder | Kind::SetBuilder)
  }

  /// Map and set elements are `IntWrapper`s with a controlled hash
  /// distribution; lists hold plain ints and have no `hashCodeType` axis.
  pub fn hashed(self) -> bool {
    !matches!(self, Kind::List | Kind::ListBuilder)
  }
}

/// Benchmarked operations across all kinds. Each kind declares the subset
/// that applies to it via [`Kind::ops`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
  Add,
  Contains,
  Get,
  Iterate,
  Put,
  Remove,
  Set,
}

impl Op {
  /// Generated class and file name.
  pub fn file_name(self) -> &'static str {
    match self {
      Op::Add => "Add",
      Op::Contains => "Contains",
      Op::Get => "Get",
      Op::Iterate => "Iterate",
      Op::Put => "Put",
      Op::Remove => "Remove",
      Op::Set => "Set",
    }
  }

  pub fn requires_iterable(self) -> bool {
    matches!(self, Op::Iterate)
  }
}

/// How a planned file is rendered.
#[derive(Debug, Clone, Copy)]
pub enum Payload {
  Benchmark {
    kind: Kind,
    op: Op,
    imp: &'static Implementation,
  },
  KindUtils {
    kind: Kind,
    imp: &'static Implementation,
  },
  IntWrapper,
  CommonUtils,
}

/// One planned output file.
#[derive(Debug, Clone)]
pub struct GenerationUnit {
  /// Dot-separated target package, e.g. `benchmarks.kotlin.immutableList`.
  pub package: String,
  /// File name without the `.kt` extension.
  pub file_name: String,
  pub payload: Payload,
}

impl GenerationUnit {
  /// Path relative to the output root: package dots become separators.
  pub fn relative_path(&self) -> PathBuf {
    let mut path: PathBuf = self.package.split('.').collect();
    path.push(format!("{}.kt", self.file_name));
    path
  }

  pub fn render(&self, year: i32) -> String {
    render::render_unit(self, year)
  }
}

fn package_for(kind: Kind, imp: &Implementation) -> String {
  format!("benchmarks.{}.{}", imp.name, kind.segment())
}

/// Cross product of one kind's operations and its capability-filtered
/// implementations. Implementations stay outermost so each implementation's
/// files are written together, as the catalogs are ordered.
fn benchmark_units(kind: Kind, impls: &'static [Implementation]) -> Vec<GenerationUnit> {
  let mut units = Vec::new();

  for imp in impls {
    for op in kind.ops() {
      if op.requires_iterable() && !imp.caps.iterable {
        continue;
      }

      units.push(GenerationUnit {
        package: package_for(kind, imp),
        file_name: op.file_name().to_string(),
        payload: Payload::Benchmark {
          kind,
          op: *op,
          imp,
        },
      });
    }
  }

  units
}

/// Builds the full, deterministically ordered generation plan: the benchmark
/// groups in kind order, then the utility group (per-implementation `utils`
/// files in the same kind order, then the library-wide files).
pub fn enumerate() -> Vec<GenerationUnit> {
  let mut units = Vec::new();

  for kind in Kind::ALL {
    units.extend(benchmark_units(kind, kind.impls()));
  }

  for kind in Kind::ALL {
    for imp in kind.impls() {
      units.push(GenerationUnit {
        package: package_for(kind, imp),
        file_name: "utils".to_string(),
        payload: Payload::KindUtils { kind, imp },
      });
    }
  }

  units.push(GenerationUnit {
    package: "benchmarks".to_string(),
    file_name: "IntWrapper".to_string(),
    payload: Payload::IntWrapper,
  });
  units.push(GenerationUnit {
    package: "benchmarks".to_string(),
    file_name: "commonUtils".to_string(),
    payload: Payload::CommonUtils,
  });

  units
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::Capabilities;

  fn paths(units: &[GenerationUnit]) -> Vec<PathBuf> {
    units.iter().map(GenerationUnit::relative_path).collect()
  }

  #[test]
  fn plan_covers_the_full_matrix() {
    let units = enumerate();

    // One gated Iterate file per clojure transient catalog entry.
    let expected_benchmarks = 6 * 5 + (3 * 5 - 1) + 15 * 4 + (5 * 4 - 1) + 13 * 4 + (4 * 4 - 1);
    let expected_utils = 6 + 3 + 15 + 5 + 13 + 4;

    assert_eq!(units.len(), expected_benchmarks + expected_utils + 2);
  }

  #[test]
  fn all_paths_are_distinct() {
    let mut seen = paths(&enumerate());
    let total = seen.len();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), total);
  }

  #[test]
  fn groups_appear_in_fixed_kind_order() {
    let units = enumerate();

    let first_of = |segment: &str| {
      units
        .iter()
        .position(|u| u.package.ends_with(segment))
        .unwrap()
    };

    assert!(first_of("immutableList") < first_of("immutableList.builder"));
    assert!(first_of("immutableList.builder") < first_of("immutableMap"));
    assert!(first_of("immutableMap") < first_of("immutableMap.builder"));
    assert!(first_of("immutableMap.builder") < first_of("immutableSet"));
    assert!(first_of("immutableSet") < first_of("immutableSet.builder"));

    // Library-wide utilities close the plan.
    assert_eq!(units[units.len() - 2].file_name, "IntWrapper");
    assert_eq!(units[units.len() - 1].file_name, "commonUtils");
  }

  #[test]
  fn non_iterable_implementations_get_no_iterate_file() {
    for unit in enumerate() {
      if let Payload::Benchmark { op, imp, .. } = unit.payload {
        if op == Op::Iterate {
          assert!(imp.caps.iterable, "Iterate planned for {}", imp.name);
        }
      }
    }
  }

  #[test]
  fn enumeration_is_deterministic() {
    let first = enumerate();
    let second = enumerate();

    assert_eq!(paths(&first), paths(&second));

    for (a, b) in first.iter().zip(&second) {
      assert_eq!(a.render(2026), b.render(2026));
    }
  }

  #[test]
  fn filtering_drops_exactly_the_non_iterable_pairings() {
    const ITERABLE: Implementation = Implementation {
      name: "alpha",
      package: "example.alpha",
      imports: &[],
      type_name: "Alpha<Int>",
      empty: "Alpha.empty<Int>()",
      to_builder: Some("list.builder()"),
      persistent_add: Some("list = list.add(element)"),
      add: "builder.add(element)",
      lookup: "builder.get(index)",
      update: Some("builder.set(index, newValue)"),
      remove: "builder.removeAt(index)",
      iterate: "builder",
      caps: Capabilities::new(),
    };
    const OPAQUE: Implementation = Implementation {
      name: "beta",
      package: "example.beta",
      imports: &[],
      type_name: "Beta<Int>",
      empty: "Beta.empty<Int>()",
      to_builder: Some("list.builder()"),
      persistent_add: Some("list = list.add(element)"),
      add: "builder.add(element)",
      lookup: "builder.get(index)",
      update: Some("builder.set(index, newValue)"),
      remove: "builder.removeAt(index)",
      iterate: "builder",
      caps: Capabilities::new().not_iterable(),
    };
    static PAIR: [Implementation; 2] = [ITERABLE, OPAQUE];

    let units = benchmark_units(Kind::ListBuilder, &PAIR);

    // Five operations each, minus beta's Iterate.
    assert_eq!(units.len(), 9);
    let iterate_targets: Vec<&str> = units
      .iter()
      .filter_map(|u| match u.payload {
        Payload::Benchmark { op: Op::Iterate, imp, .. } => Some(imp.name),
        _ => None,
      })
      .collect();
    assert_eq!(iterate_targets, ["alpha"]);
  }
}
