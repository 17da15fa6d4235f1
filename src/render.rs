use std::fmt::Write;

use crate::catalog::Implementation;
use crate::plan::GenerationUnit;
use crate::plan::Kind;
use crate::plan::Op;
use crate::plan::Payload;

/// First non-header line of every generated file. Deliberately names no
/// generator internals: these files ship as plain benchmark sources.
const MARKER: &str = "// Auto-generated file. DO NOT EDIT!";

const YEAR_PLACEHOLDER: &str = "$YEAR";

const LICENSE_TEMPLATE: &str = "\
/*
 * Copyright 2016-$YEAR the benchmark authors.
 *
 * Licensed under the Apache License, Version 2.0 (the \"License\");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an \"AS IS\" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
";

const SIZE_PARAMS: &str = "BM_1, BM_10, BM_100, BM_1000, BM_10000, BM_100000, BM_1000000";
const PERCENTAGE_PARAMS: &str = "IP_100, IP_99_09, IP_95, IP_70, IP_50, IP_30, IP_0";

/// Renders the complete text of one planned file: license block, marker,
/// package declaration, sorted imports, body. Pure; the caller reads the
/// clock once per run and passes the year in.
pub fn render_unit(unit: &GenerationUnit, year: i32) -> String {
  let mut out = String::new();

  out.push_str(&LICENSE_TEMPLATE.replace(YEAR_PLACEHOLDER, &year.to_string()));
  out.push_str(MARKER);
  out.push_str("\n\n");

  let _ = writeln!(out, "package {}", unit.package);
  out.push('\n');

  let imports = imports_for(unit);
  for import in &imports {
    let _ = writeln!(out, "import {import}");
  }
  if !imports.is_empty() {
    out.push('\n');
  }

  match unit.payload {
    Payload::Benchmark { kind, op, imp } => benchmark(&mut out, kind, op, imp),
    Payload::KindUtils { kind, imp } => kind_utils(&mut out, kind, imp),
    Payload::IntWrapper => int_wrapper(&mut out),
    Payload::CommonUtils => common_utils(&mut out),
  }

  out
}

fn imports_for(unit: &GenerationUnit) -> Vec<&'static str> {
  let mut imports: Vec<&'static str> = match unit.payload {
    Payload::Benchmark { kind, op, imp } => {
      let mut list = vec![
        "benchmarks.*",
        "java.util.concurrent.TimeUnit",
        "org.openjdk.jmh.annotations.*",
      ];
      if uses_blackhole(kind, op) {
        list.push("org.openjdk.jmh.infra.Blackhole");
      }
      list.extend_from_slice(imp.imports);
      list
    }
    Payload::KindUtils { kind, imp } => {
      let mut list = Vec::from(imp.imports);
      // Builders need immutableSize, keyed kinds need IntWrapper.
      if kind.is_builder() || kind.hashed() {
        list.push("benchmarks.*");
      }
      list
    }
    Payload::IntWrapper => Vec::new(),
    Payload::CommonUtils => vec!["kotlin.random.Random"],
  };

  imports.sort_unstable();
  imports
}

fn uses_blackhole(kind: Kind, op: Op) -> bool {
  match op {
    Op::Get | Op::Contains | Op::Iterate => true,
    // Builder construction files carry read-back composites.
    Op::Add | Op::Put => kind.is_builder(),
    Op::Remove | Op::Set => false,
  }
}

/// The nonExisting distribution only makes sense where the measured
/// operation probes for absent keys. Builder removal rebuilds from the same
/// key list inside the measured method, so it cannot miss.
fn non_existing_axis(kind: Kind, op: Op) -> bool {
  match op {
    Op::Get | Op::Contains => true,
    Op::Remove => !kind.is_builder(),
    _ => false,
  }
}

/// Per-kind identifier conventions shared between benchmark and utils
/// rendering.
struct KindNames {
  /// Local name of the collection value, also used by catalog fragments.
  value: &'static str,
  /// Field holding the prepared element list for keyed kinds.
  elements: &'static str,
  /// Loop-local name of one element.
  operand: &'static str,
  /// Empty-instance helper emitted into persistent-kind utils.
  empty_helper: &'static str,
  /// Bulk-construction helper emitted into utils.
  builder_fn: &'static str,
}

fn names(kind: Kind) -> KindNames {
  match kind {
    Kind::List | Kind::ListBuilder => KindNames {
      value: "list",
      elements: "",
      operand: "element",
      empty_helper: "emptyPersistentList",
      builder_fn: "persistentListBuilderAdd",
    },
    Kind::Map | Kind::MapBuilder => KindNames {
      value: "map",
      elements: "keys",
      operand: "key",
      empty_helper: "emptyPersistentMap",
      builder_fn: "persistentMapBuilderPut",
    },
    Kind::Set | Kind::SetBuilder => KindNames {
      value: "set",
      elements: "elements",
      operand: "element",
      empty_helper: "emptyPersistentSet",
      builder_fn: "persistentSetBuilderAdd",
    },
  }
}

fn jmh_preamble(out: &mut String) {
  out.push_str(
    "@Fork(1)\n\
     @Warmup(iterations = 5)\n\
     @Measurement(iterations = 5)\n\
     @BenchmarkMode(Mode.AverageTime)\n\
     @OutputTimeUnit(TimeUnit.MICROSECONDS)\n\
     @State(Scope.Thread)\n",
  );
}

fn axes(out: &mut String, kind: Kind, op: Op, imp: &Implementation) {
  let _ = writeln!(out, "    @Param({SIZE_PARAMS})");
  let _ = writeln!(out, "    var size: Int = 0");
  out.push('\n');
  let _ = writeln!(out, "    @Param(\"{}\")", imp.name);
  let _ = writeln!(out, "    var implementation = \"\"");

  if kind.hashed() {
    let mut values = vec!["ASCENDING_HASH_CODE", "RANDOM_HASH_CODE"];
    if !imp.caps.sorted {
      values.push("COLLISION_HASH_CODE");
    }
    if non_existing_axis(kind, op) {
      values.push("NON_EXISTING_HASH_CODE");
    }
    out.push('\n');
    let _ = writeln!(out, "    @Param({})", values.join(", "));
    let _ = writeln!(out, "    var hashCodeType = \"\"");
  }

  if kind.is_builder() {
    out.push('\n');
    let _ = writeln!(out, "    @Param({PERCENTAGE_PARAMS})");
    let _ = writeln!(out, "    var immutablePercentage: Double = 0.0");
  }
}

fn benchmark(out: &mut String, kind: Kind, op: Op, imp: &Implementation) {
  jmh_preamble(out);
  let _ = writeln!(out, "open class {} {{", op.file_name());
  axes(out, kind, op, imp);

  match (kind, op) {
    (Kind::List, Op::Add) => list_add(out, imp),
    (Kind::List, Op::Get) => {
      list_setup(out);
      indexed_lookup(out, "getByIndex", imp);
    }
    (Kind::List, Op::Iterate) => {
      list_setup(out);
      iterate_method(out, "firstToLast", "element", imp);
    }
    (Kind::List, Op::Remove) => {
      list_setup(out);
      list_remove(out, "removeLast", "var list = this.list", "list", imp);
    }
    (Kind::List, Op::Set) => {
      list_setup(out);
      list_update(out, Some("var list = this.list"), "list", imp);
    }

    (Kind::ListBuilder, Op::Add) => list_builder_add(out, imp),
    (Kind::ListBuilder, Op::Get) => {
      list_builder_setup(out);
      indexed_lookup(out, "getByIndex", imp);
    }
    (Kind::ListBuilder, Op::Iterate) => {
      list_builder_setup(out);
      iterate_method(out, "firstToLast", "element", imp);
    }
    (Kind::ListBuilder, Op::Remove) => {
      let decl = "var builder = persistentListBuilderAdd(size, immutablePercentage)";
      list_remove(out, "addAndRemoveLast", decl, "builder", imp);
    }
    (Kind::ListBuilder, Op::Set) => {
      list_builder_setup(out);
      list_update(out, None, "builder", imp);
    }

    (Kind::Map, Op::Put) | (Kind::Set, Op::Add) => keyed_build(out, kind, imp),
    (Kind::Map, Op::Get) | (Kind::Set, Op::Contains) => {
      keyed_setup(out, kind, op);
      keyed_lookup(out, kind, imp);
    }
    (Kind::Map, Op::Iterate) => {
      keyed_setup(out, kind, op);
      iterate_method(out, "iterateEntries", "entry", imp);
    }
    (Kind::Set, Op::Iterate) => {
      keyed_setup(out, kind, op);
      iterate_method(out, "firstToLast", "element", imp);
    }
    (Kind::Map, Op::Remove) | (Kind::Set, Op::Remove) => {
      keyed_setup(out, kind, op);
      keyed_remove(out, kind, imp);
    }

    (Kind::MapBuilder, Op::Put) | (Kind::SetBuilder, Op::Add) => {
      keyed_builder_build(out, kind, imp)
    }
    (Kind::MapBuilder, Op::Get) | (Kind::SetBuilder, Op::Contains) => {
      keyed_builder_setup(out, kind, op);
      keyed_lookup(out, kind, imp);
    }
    (Kind::MapBuilder, Op::Iterate) => {
      keyed_builder_setup(out, kind, op);
      iterate_method(out, "iterateEntries", "entry", imp);
    }
    (Kind::SetBuilder, Op::Iterate) => {
      keyed_builder_setup(out, kind, op);
      iterate_method(out, "firstToLast", "element", imp);
    }
    (Kind::MapBuilder, Op::Remove) | (Kind::SetBuilder, Op::Remove) => {
      keyed_builder_remove(out, kind, imp)
    }

    _ => unreachable!("operation not registered for this kind"),
  }

  out.push_str("}\n");
}

// --- shared method shapes ---

fn bench_returning(out: &mut String, name: &str, ty: &str) {
  out.push('\n');
  out.push_str("    @Benchmark\n");
  let _ = writeln!(out, "    fun {name}(): {ty} {{");
}

fn bench_consuming(out: &mut String, name: &str) {
  out.push('\n');
  out.push_str("    @Benchmark\n");
  let _ = writeln!(out, "    fun {name}(bh: Blackhole) {{");
}

/// `repeat`-over-index read loop, consuming through the blackhole.
fn indexed_lookup(out: &mut String, name: &str, imp: &Implementation) {
  bench_consuming(out, name);
  out.push_str("        repeat(times = size) { index ->\n");
  let _ = writeln!(out, "            bh.consume({})", imp.lookup);
  out.push_str("        }\n    }\n");
}

fn iterate_method(out: &mut String, name: &str, loop_var: &str, imp: &Implementation) {
  bench_consuming(out, name);
  let _ = writeln!(out, "        for ({loop_var} in {}) {{", imp.iterate);
  let _ = writeln!(out, "            bh.consume({loop_var})");
  out.push_str("        }\n    }\n");
}

// --- list bodies ---

fn list_setup(out: &mut String) {
  out.push('\n');
  out.push_str("    private var list = emptyPersistentList()\n");
  out.push('\n');
  out.push_str("    @Setup(Level.Trial)\n    fun prepare() {\n");
  out.push_str("        list = persistentListAdd(size)\n");
  out.push_str("    }\n");
}

fn list_add(out: &mut String, imp: &Implementation) {
  bench_returning(out, "addLast", imp.type_name);
  out.push_str("        var list = emptyPersistentList()\n");
  out.push_str("        repeat(times = size) { element ->\n");
  let _ = writeln!(out, "            {}", imp.add);
  out.push_str("        }\n        return list\n    }\n");
}

fn list_remove(out: &mut String, name: &str, decl: &str, value: &str, imp: &Implementation) {
  bench_returning(out, name, imp.type_name);
  let _ = writeln!(out, "        {decl}");
  out.push_str("        var index = size - 1\n");
  out.push_str("        repeat(times = size) {\n");
  let _ = writeln!(out, "            {}", imp.remove);
  out.push_str("            index -= 1\n");
  out.push_str("        }\n");
  let _ = writeln!(out, "        return {value}");
  out.push_str("    }\n");
}

fn list_update(out: &mut String, decl: Option<&str>, value: &str, imp: &Implementation) {
  bench_returning(out, "setByIndex", imp.type_name);
  if let Some(decl) = decl {
    let _ = writeln!(out, "        {decl}");
  }
  out.push_str("        repeat(times = size) { index ->\n");
  out.push_str("            val newValue = index + size\n");
  let _ = writeln!(out, "            {}", imp.update.unwrap_or_default());
  out.push_str("        }\n");
  let _ = writeln!(out, "        return {value}");
  out.push_str("    }\n");
}

fn list_builder_setup(out: &mut String) {
  out.push('\n');
  out.push_str("    private var builder = persistentListBuilderAdd(0, 0.0)\n");
  out.push('\n');
  out.push_str("    @Setup(Level.Trial)\n    fun prepare() {\n");
  out.push_str("        builder = persistentListBuilderAdd(size, immutablePercentage)\n");
  out.push_str("    }\n");
}

fn list_builder_add(out: &mut String, imp: &Implementation) {
  bench_returning(out, "addLast", imp.type_name);
  out.push_str("        return persistentListBuilderAdd(size, immutablePercentage)\n");
  out.push_str("    }\n");

  bench_consuming(out, "addLastAndGet");
  out.push_str("        val builder = persistentListBuilderAdd(size, immutablePercentage)\n");
  out.push_str("        repeat(times = size) { index ->\n");
  let _ = writeln!(out, "            bh.consume({})", imp.lookup);
  out.push_str("        }\n    }\n");

  if imp.caps.iterable {
    bench_consuming(out, "addLastAndIterate");
    out.push_str("        val builder = persistentListBuilderAdd(size, immutablePercentage)\n");
    let _ = writeln!(out, "        for (element in {}) {{", imp.iterate);
    out.push_str("            bh.consume(element)\n");
    out.push_str("        }\n    }\n");
  }
}

// --- map and set bodies ---

fn elements_setup(out: &mut String, kind: Kind) {
  let n = names(kind);
  out.push('\n');
  let _ = writeln!(out, "    private var {} = listOf<IntWrapper>()", n.elements);
  out.push('\n');
  out.push_str("    @Setup(Level.Trial)\n    fun prepare() {\n");
  let _ = writeln!(out, "        {} = generateElements(hashCodeType, size)", n.elements);
  out.push_str("    }\n");
}

fn keyed_setup(out: &mut String, kind: Kind, op: Op) {
  let n = names(kind);
  let bulk = match kind {
    Kind::Map => "persistentMapPut(keys)",
    Kind::Set => "persistentSetAdd(elements)",
    _ => unreachable!(),
  };

  out.push('\n');
  let _ = writeln!(out, "    private var {} = listOf<IntWrapper>()", n.elements);
  let _ = writeln!(out, "    private var {} = {}()", n.value, n.empty_helper);
  out.push('\n');
  out.push_str("    @Setup(Level.Trial)\n    fun prepare() {\n");
  let _ = writeln!(out, "        {} = generateElements(hashCodeType, size)", n.elements);
  let _ = writeln!(out, "        {} = {bulk}", n.value);
  if non_existing_axis(kind, op) {
    out.push('\n');
    out.push_str("        if (hashCodeType == NON_EXISTING_HASH_CODE)\n");
    let _ = writeln!(out, "            {} = generateElements(hashCodeType, size)", n.elements);
  }
  out.push_str("    }\n");
}

fn keyed_build(out: &mut String, kind: Kind, imp: &Implementation) {
  let n = names(kind);
  let name = if kind == Kind::Map { "put" } else { "add" };

  elements_setup(out, kind);

  bench_returning(out, name, imp.type_name);
  let _ = writeln!(out, "        var {} = {}()", n.value, n.empty_helper);
  out.push_str("        repeat(times = size) { index ->\n");
  let _ = writeln!(out, "            val {} = {}[index]", n.operand, n.elements);
  let _ = writeln!(out, "            {}", imp.add);
  out.push_str("        }\n");
  let _ = writeln!(out, "        return {}", n.value);
  out.push_str("    }\n");
}

fn keyed_lookup(out: &mut String, kind: Kind, imp: &Implementation) {
  let n = names(kind);
  let name = match kind {
    Kind::Map | Kind::MapBuilder => "get",
    _ => "contains",
  };

  bench_consuming(out, name);
  out.push_str("        repeat(times = size) { index ->\n");
  let _ = writeln!(out, "            val {} = {}[index]", n.operand, n.elements);
  let _ = writeln!(out, "            bh.consume({})", imp.lookup);
  out.push_str("        }\n    }\n");
}

fn keyed_remove(out: &mut String, kind: Kind, imp: &Implementation) {
  let n = names(kind);

  bench_returning(out, "remove", imp.type_name);
  let _ = writeln!(out, "        var {} = this.{}", n.value, n.value);
  out.push_str("        repeat(times = size) { index ->\n");
  let _ = writeln!(out, "            val {} = {}[index]", n.operand, n.elements);
  let _ = writeln!(out, "            {}", imp.remove);
  out.push_str("        }\n");
  let _ = writeln!(out, "        return {}", n.value);
  out.push_str("    }\n");
}

fn builder_bulk_call(kind: Kind) -> &'static str {
  match kind {
    Kind::MapBuilder => "persistentMapBuilderPut(keys, immutablePercentage)",
    Kind::SetBuilder => "persistentSetBuilderAdd(elements, immutablePercentage)",
    _ => unreachable!(),
  }
}

fn keyed_builder_setup(out: &mut String, kind: Kind, op: Op) {
  let n = names(kind);
  let bulk = builder_bulk_call(kind);

  out.push('\n');
  let _ = writeln!(out, "    private var {} = listOf<IntWrapper>()", n.elements);
  let _ = writeln!(out, "    private var builder = {}(listOf(), 0.0)", n.builder_fn);
  out.push('\n');
  out.push_str("    @Setup(Level.Trial)\n    fun prepare() {\n");
  let _ = writeln!(out, "        {} = generateElements(hashCodeType, size)", n.elements);
  let _ = writeln!(out, "        builder = {bulk}");
  if non_existing_axis(kind, op) {
    out.push('\n');
    out.push_str("        if (hashCodeType == NON_EXISTING_HASH_CODE)\n");
    let _ = writeln!(out, "            {} = generateElements(hashCodeType, size)", n.elements);
  }
  out.push_str("    }\n");
}

fn keyed_builder_build(out: &mut String, kind: Kind, imp: &Implementation) {
  let n = names(kind);
  let bulk = builder_bulk_call(kind);
  let (primary, lookup_composite, iterate_composite, loop_var) = if kind == Kind::MapBuilder {
    ("put", "putAndGet", "putAndIterate", "entry")
  } else {
    ("add", "addAndContains", "addAndIterate", "element")
  };

  elements_setup(out, kind);

  bench_returning(out, primary, imp.type_name);
  let _ = writeln!(out, "        return {bulk}");
  out.push_str("    }\n");

  bench_consuming(out, lookup_composite);
  let _ = writeln!(out, "        val builder = {bulk}");
  out.push_str("        repeat(times = size) { index ->\n");
  let _ = writeln!(out, "            val {} = {}[index]", n.operand, n.elements);
  let _ = writeln!(out, "            bh.consume({})", imp.lookup);
  out.push_str("        }\n    }\n");

  if imp.caps.iterable {
    bench_consuming(out, iterate_composite);
    let _ = writeln!(out, "        val builder = {bulk}");
    let _ = writeln!(out, "        for ({loop_var} in {}) {{", imp.iterate);
    let _ = writeln!(out, "            bh.consume({loop_var})");
    out.push_str("        }\n    }\n");
  }
}

fn keyed_builder_remove(out: &mut String, kind: Kind, imp: &Implementation) {
  let n = names(kind);
  let bulk = builder_bulk_call(kind);
  let name = if kind == Kind::MapBuilder {
    "putAndRemove"
  } else {
    "addAndRemove"
  };

  elements_setup(out, kind);

  bench_returning(out, name, imp.type_name);
  let _ = writeln!(out, "        var builder = {bulk}");
  out.push_str("        repeat(times = size) { index ->\n");
  let _ = writeln!(out, "            val {} = {}[index]", n.operand, n.elements);
  let _ = writeln!(out, "            {}", imp.remove);
  out.push_str("        }\n        return builder\n    }\n");
}

// --- utility files ---

fn kind_utils(out: &mut String, kind: Kind, imp: &Implementation) {
  let n = names(kind);

  if !kind.is_builder() {
    let _ = writeln!(out, "fun {}(): {} = {}", n.empty_helper, imp.type_name, imp.empty);
    out.push('\n');
  }

  match kind {
    Kind::List => {
      let _ = writeln!(out, "fun persistentListAdd(size: Int): {} {{", imp.type_name);
      out.push_str("    var list = emptyPersistentList()\n");
      out.push_str("    repeat(times = size) { element ->\n");
      let _ = writeln!(out, "        {}", imp.add);
      out.push_str("    }\n    return list\n}\n");
    }
    Kind::Map | Kind::Set => {
      let (helper, arg) = if kind == Kind::Map {
        ("persistentMapPut", "keys")
      } else {
        ("persistentSetAdd", "elements")
      };
      let _ = writeln!(
        out,
        "fun {helper}({arg}: List<IntWrapper>): {} {{",
        imp.type_name
      );
      let _ = writeln!(out, "    var {} = {}()", n.value, n.empty_helper);
      let _ = writeln!(out, "    for ({} in {arg}) {{", n.operand);
      let _ = writeln!(out, "        {}", imp.add);
      out.push_str("    }\n");
      let _ = writeln!(out, "    return {}", n.value);
      out.push_str("}\n");
    }
    Kind::ListBuilder => {
      let _ = writeln!(
        out,
        "fun persistentListBuilderAdd(size: Int, immutablePercentage: Double): {} {{",
        imp.type_name
      );
      out.push_str("    val immutableSize = immutableSize(size, immutablePercentage)\n");
      out.push('\n');
      let _ = writeln!(out, "    var list = {}", imp.empty);
      out.push_str("    repeat(times = immutableSize) { element ->\n");
      let _ = writeln!(out, "        {}", imp.persistent_add.unwrap_or_default());
      out.push_str("    }\n");
      out.push('\n');
      let _ = writeln!(out, "    var builder = {}", imp.to_builder.unwrap_or_default());
      out.push_str("    for (element in immutableSize until size) {\n");
      let _ = writeln!(out, "        {}", imp.add);
      out.push_str("    }\n    return builder\n}\n");
    }
    Kind::MapBuilder | Kind::SetBuilder => {
      let arg = n.elements;
      let _ = writeln!(
        out,
        "fun {}({arg}: List<IntWrapper>, immutablePercentage: Double): {} {{",
        n.builder_fn, imp.type_name
      );
      let _ = writeln!(out, "    val immutableSize = immutableSize({arg}.size, immutablePercentage)");
      out.push('\n');
      let _ = writeln!(out, "    var {} = {}", n.value, imp.empty);
      out.push_str("    for (index in 0 until immutableSize) {\n");
      let _ = writeln!(out, "        val {} = {arg}[index]", n.operand);
      let _ = writeln!(out, "        {}", imp.persistent_add.unwrap_or_default());
      out.push_str("    }\n");
      out.push('\n');
      let _ = writeln!(out, "    var builder = {}", imp.to_builder.unwrap_or_default());
      let _ = writeln!(out, "    for (index in immutableSize until {arg}.size) {{");
      let _ = writeln!(out, "        val {} = {arg}[index]", n.operand);
      let _ = writeln!(out, "        {}", imp.add);
      out.push_str("    }\n    return builder\n}\n");
    }
  }
}

fn int_wrapper(out: &mut String) {
  out.push_str(
    "\
class IntWrapper(val obj: Int, val hashCode: Int) : Comparable<IntWrapper> {
    override fun hashCode(): Int {
        return hashCode
    }

    override fun equals(other: Any?): Boolean {
        if (this === other) return true
        if (other !is IntWrapper) return false
        return obj == other.obj && hashCode == other.hashCode
    }

    override fun compareTo(other: IntWrapper): Int {
        return obj.compareTo(other.obj)
    }
}
",
  );
}

fn common_utils(out: &mut String) {
  out.push_str(
    "\
const val BM_1 = \"1\"
const val BM_10 = \"10\"
const val BM_100 = \"100\"
const val BM_1000 = \"1000\"
const val BM_10000 = \"10000\"
const val BM_100000 = \"100000\"
const val BM_1000000 = \"1000000\"

const val ASCENDING_HASH_CODE = \"ascending\"
const val RANDOM_HASH_CODE = \"random\"
const val COLLISION_HASH_CODE = \"collision\"
const val NON_EXISTING_HASH_CODE = \"nonExisting\"

const val IP_100 = \"100.0\"
const val IP_99_09 = \"99.09\"
const val IP_95 = \"95.0\"
const val IP_70 = \"70.0\"
const val IP_50 = \"50.0\"
const val IP_30 = \"30.0\"
const val IP_0 = \"0.0\"

fun immutableSize(size: Int, immutablePercentage: Double): Int {
    return (size * immutablePercentage / 100.0).toInt()
}

fun generateElements(hashCodeType: String, size: Int): List<IntWrapper> {
    return when (hashCodeType) {
        ASCENDING_HASH_CODE -> List(size) { index -> IntWrapper(index, index) }
        RANDOM_HASH_CODE -> List(size) { index -> IntWrapper(index, Random.nextInt()) }
        COLLISION_HASH_CODE -> List(size) { index -> IntWrapper(index, Random.nextInt(size / 16 + 1)) }
        NON_EXISTING_HASH_CODE -> List(size) { IntWrapper(Random.nextInt(), Random.nextInt()) }
        else -> throw AssertionError(\"Unknown hashCodeType: $hashCodeType\")
    }
}
",
  );
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::plan;

  fn find(units: &[GenerationUnit], package: &str, file: &str) -> GenerationUnit {
    units
      .iter()
      .find(|u| u.package == package && u.file_name == file)
      .cloned()
      .unwrap_or_else(|| panic!("no unit {package}/{file}"))
  }

  fn first_body_line(text: &str) -> &str {
    text
      .lines()
      .find(|line| !line.starts_with("/*") && !line.starts_with(" *"))
      .unwrap()
  }

  #[test]
  fn marker_leads_every_file() {
    for unit in plan::enumerate() {
      let text = unit.render(2026);
      assert_eq!(first_body_line(&text), MARKER, "in {:?}", unit.relative_path());
    }
  }

  #[test]
  fn no_generator_internals_leak_into_output() {
    for unit in plan::enumerate() {
      let text = unit.render(2026);
      for leaked in ["GenerationUnit", "Payload", "KindUtils", "Implementation", "benchmatrix"] {
        assert!(
          !text.contains(leaked),
          "{leaked} leaked into {:?}",
          unit.relative_path()
        );
      }
    }
  }

  #[test]
  fn header_year_is_injected() {
    let units = plan::enumerate();
    let text = find(&units, "benchmarks", "IntWrapper").render(2031);
    assert!(text.contains("Copyright 2016-2031"));
    assert!(!text.contains(YEAR_PLACEHOLDER));
  }

  #[test]
  fn import_lists_are_sorted() {
    for unit in plan::enumerate() {
      let text = unit.render(2026);
      let imports: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("import "))
        .collect();
      let mut sorted = imports.clone();
      sorted.sort_unstable();
      assert_eq!(imports, sorted, "in {:?}", unit.relative_path());
    }
  }

  #[test]
  fn benchmark_files_carry_the_fixed_harness_settings() {
    let units = plan::enumerate();
    let text = find(&units, "benchmarks.kotlin.immutableList", "Add").render(2026);

    assert!(text.contains("@Fork(1)"));
    assert!(text.contains("@Warmup(iterations = 5)"));
    assert!(text.contains("@Measurement(iterations = 5)"));
    assert!(text.contains("@BenchmarkMode(Mode.AverageTime)"));
    assert!(text.contains("@OutputTimeUnit(TimeUnit.MICROSECONDS)"));
    assert!(text.contains("open class Add {"));
    assert!(text.contains("fun addLast(): PersistentList<Int> {"));
  }

  #[test]
  fn sorted_implementations_skip_the_collision_distribution() {
    let units = plan::enumerate();

    let sorted_get = find(&units, "benchmarks.paguroSorted.immutableMap", "Get").render(2026);
    assert!(!sorted_get.contains("COLLISION_HASH_CODE"));
    assert!(sorted_get.contains("NON_EXISTING_HASH_CODE"));

    let hashed_iterate = find(&units, "benchmarks.kotlin.immutableMap", "Iterate").render(2026);
    assert!(hashed_iterate.contains("COLLISION_HASH_CODE"));
    assert!(!hashed_iterate.contains("NON_EXISTING_HASH_CODE"));
  }

  #[test]
  fn transient_builders_render_without_iteration_composites() {
    let units = plan::enumerate();

    let clojure_add = find(&units, "benchmarks.clojure.immutableSet.builder", "Add").render(2026);
    assert!(!clojure_add.contains("Iterate"));
    assert!(clojure_add.contains("fun addAndContains(bh: Blackhole) {"));

    let kotlin_add = find(&units, "benchmarks.kotlin.immutableSet.builder", "Add").render(2026);
    assert!(kotlin_add.contains("fun addAndIterate(bh: Blackhole) {"));
  }

  #[test]
  fn utils_define_the_construction_helpers() {
    let units = plan::enumerate();

    let list_utils = find(&units, "benchmarks.kotlin.immutableList", "utils").render(2026);
    assert!(list_utils.contains("fun emptyPersistentList(): PersistentList<Int> = persistentListOf()"));
    assert!(list_utils.contains("fun persistentListAdd(size: Int): PersistentList<Int> {"));

    let builder_utils =
      find(&units, "benchmarks.capsule.immutableMap.builder", "utils").render(2026);
    assert!(builder_utils.contains(
      "fun persistentMapBuilderPut(keys: List<IntWrapper>, immutablePercentage: Double): Map.Transient<IntWrapper, String> {"
    ));
    assert!(builder_utils.contains("val immutableSize = immutableSize(keys.size, immutablePercentage)"));
  }

  #[test]
  fn common_files_define_the_shared_vocabulary() {
    let units = plan::enumerate();

    let common = find(&units, "benchmarks", "commonUtils").render(2026);
    assert!(common.contains("const val BM_1000000 = \"1000000\""));
    assert!(common.contains("const val IP_99_09 = \"99.09\""));
    assert!(common.contains("fun generateElements(hashCodeType: String, size: Int): List<IntWrapper> {"));

    let wrapper = find(&units, "benchmarks", "IntWrapper").render(2026);
    assert!(wrapper.contains("class IntWrapper(val obj: Int, val hashCode: Int) : Comparable<IntWrapper> {"));
  }
}
