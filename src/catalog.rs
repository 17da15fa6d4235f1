use crate::error::CatalogError;

/// Boolean properties of an implementation that gate which operations the
/// enumerator may pair it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
  /// The value can appear on the right-hand side of a Kotlin `for` loop.
  /// Clojure transients cannot, so their builders never get Iterate files.
  pub iterable: bool,
  /// Preserves insertion order (e.g. the linked variants).
  pub ordered: bool,
  /// Comparator-backed. Sorted structures do not hash, so the collision
  /// distribution is dropped from their `hashCodeType` axis.
  pub sorted: bool,
  /// A persistent implementation with a same-named entry in the matching
  /// builder catalog.
  pub builder: bool,
}

impl Capabilities {
  pub const fn new() -> Self {
    Self {
      iterable: true,
      ordered: false,
      sorted: false,
      builder: false,
    }
  }

  pub const fn with_builder(mut self) -> Self {
    self.builder = true;
    self
  }

  pub const fn ordered(mut self) -> Self {
    self.ordered = true;
    self
  }

  pub const fn sorted(mut self) -> Self {
    self.sorted = true;
    self
  }

  pub const fn not_iterable(mut self) -> Self {
    self.iterable = false;
    self
  }
}

/// One backing collection implementation under test, for one collection kind.
///
/// The same library appears once per kind it participates in (the list
/// "kotlin" and the map "kotlin" are distinct entries). Besides identity and
/// capabilities, an entry carries the Kotlin text fragments the renderer
/// splices into benchmark bodies. Fragments are written against fixed local
/// names: the collection value is `list`/`map`/`set`, a builder is `builder`,
/// and the operand is `element`, `key`, `index` or `newValue`.
///
/// For builder kinds, `empty` is the *persistent* empty instance (with
/// explicit type arguments, since nothing constrains the inference),
/// `to_builder` converts it, and `persistent_add` grows the persistent
/// prefix dictated by `immutablePercentage`.
#[derive(Debug, Clone, Copy)]
pub struct Implementation {
  /// Parameter value, package segment and log label, e.g. `kotlinOrdered`.
  pub name: &'static str,
  /// The library package this entry benchmarks.
  pub package: &'static str,
  /// Fully qualified names the fragments below rely on.
  pub imports: &'static [&'static str],
  /// Kotlin type of the benchmarked value (builder type for builder kinds).
  pub type_name: &'static str,
  pub empty: &'static str,
  pub to_builder: Option<&'static str>,
  pub persistent_add: Option<&'static str>,
  /// Add/put statement.
  pub add: &'static str,
  /// Get/contains expression.
  pub lookup: &'static str,
  /// List positional-overwrite statement.
  pub update: Option<&'static str>,
  pub remove: &'static str,
  /// Expression usable after `in` in a Kotlin `for` loop.
  pub iterate: &'static str,
  pub caps: Capabilities,
}

pub static LIST_IMPLS: &[Implementation] = &[
  Implementation {
    name: "kotlin",
    package: "kotlinx.collections.immutable",
    imports: &[
      "kotlinx.collections.immutable.PersistentList",
      "kotlinx.collections.immutable.persistentListOf",
    ],
    type_name: "PersistentList<Int>",
    empty: "persistentListOf()",
    to_builder: None,
    persistent_add: None,
    add: "list = list.add(element)",
    lookup: "list.get(index)",
    update: Some("list = list.set(index, newValue)"),
    remove: "list = list.removeAt(index)",
    iterate: "list",
    caps: Capabilities::new().with_builder(),
  },
  Implementation {
    name: "paguro",
    package: "org.organicdesign.fp.collections",
    imports: &[
      "org.organicdesign.fp.collections.ImList",
      "org.organicdesign.fp.collections.PersistentVector",
    ],
    type_name: "ImList<Int>",
    empty: "PersistentVector.empty()",
    to_builder: None,
    persistent_add: None,
    add: "list = list.append(element)",
    lookup: "list.get(index)",
    update: Some("list = list.replace(index, newValue)"),
    remove: "list = list.without(index)",
    iterate: "list",
    caps: Capabilities::new().with_builder(),
  },
  Implementation {
    name: "cyclops",
    package: "cyclops.data",
    imports: &["cyclops.data.Vector"],
    type_name: "Vector<Int>",
    empty: "Vector.empty()",
    to_builder: None,
    persistent_add: None,
    add: "list = list.plus(element)",
    lookup: "list.getOrElse(index, 0)",
    update: Some("list = list.updateAt(index, newValue)"),
    remove: "list = list.removeAt(index)",
    iterate: "list",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "clojure",
    package: "clojure.lang",
    imports: &["clojure.lang.PersistentVector"],
    type_name: "PersistentVector",
    empty: "PersistentVector.EMPTY",
    to_builder: None,
    persistent_add: None,
    add: "list = list.cons(element)",
    lookup: "list.nth(index)",
    update: Some("list = list.assocN(index, newValue)"),
    remove: "list = list.pop()",
    iterate: "list",
    caps: Capabilities::new().with_builder(),
  },
  Implementation {
    name: "scala",
    package: "scala.collection.immutable",
    imports: &[
      "scala.collection.immutable.Vector",
      "scala.jdk.javaapi.CollectionConverters.asJava",
    ],
    type_name: "Vector<Int>",
    empty: "Vector.empty()",
    to_builder: None,
    persistent_add: None,
    add: "list = list.appended(element)",
    lookup: "list.apply(index)",
    update: Some("list = list.updated(index, newValue)"),
    remove: "list = list.dropRight(1)",
    iterate: "asJava(list)",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "vavr",
    package: "io.vavr.collection",
    imports: &["io.vavr.collection.Vector"],
    type_name: "Vector<Int>",
    empty: "Vector.empty()",
    to_builder: None,
    persistent_add: None,
    add: "list = list.append(element)",
    lookup: "list.get(index)",
    update: Some("list = list.update(index, newValue)"),
    remove: "list = list.removeAt(index)",
    iterate: "list",
    caps: Capabilities::new(),
  },
];

pub static LIST_BUILDER_IMPLS: &[Implementation] = &[
  Implementation {
    name: "kotlin",
    package: "kotlinx.collections.immutable",
    imports: &[
      "kotlinx.collections.immutable.PersistentList",
      "kotlinx.collections.immutable.persistentListOf",
    ],
    type_name: "PersistentList.Builder<Int>",
    empty: "persistentListOf<Int>()",
    to_builder: Some("list.builder()"),
    persistent_add: Some("list = list.add(element)"),
    add: "builder.add(element)",
    lookup: "builder.get(index)",
    update: Some("builder.set(index, newValue)"),
    remove: "builder.removeAt(index)",
    iterate: "builder",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "paguro",
    package: "org.organicdesign.fp.collections",
    imports: &[
      "org.organicdesign.fp.collections.MutList",
      "org.organicdesign.fp.collections.PersistentVector",
    ],
    type_name: "MutList<Int>",
    empty: "PersistentVector.empty<Int>()",
    to_builder: Some("list.mutable()"),
    persistent_add: Some("list = list.append(element)"),
    add: "builder.append(element)",
    lookup: "builder.get(index)",
    update: Some("builder.replace(index, newValue)"),
    remove: "builder.remove(index)",
    iterate: "builder",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "clojure",
    package: "clojure.lang",
    imports: &[
      "clojure.lang.ITransientVector",
      "clojure.lang.PersistentVector",
    ],
    type_name: "ITransientVector",
    empty: "PersistentVector.EMPTY",
    to_builder: Some("list.asTransient() as ITransientVector"),
    persistent_add: Some("list = list.cons(element)"),
    add: "builder = builder.conj(element) as ITransientVector",
    lookup: "builder.nth(index)",
    update: Some("builder = builder.assocN(index, newValue)"),
    remove: "builder = builder.pop()",
    iterate: "builder",
    caps: Capabilities::new().not_iterable(),
  },
];

pub static MAP_IMPLS: &[Implementation] = &[
  Implementation {
    name: "kotlin",
    package: "kotlinx.collections.immutable",
    imports: &[
      "kotlinx.collections.immutable.PersistentMap",
      "kotlinx.collections.immutable.persistentHashMapOf",
    ],
    type_name: "PersistentMap<IntWrapper, String>",
    empty: "persistentHashMapOf()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.put(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.remove(key)",
    iterate: "map.entries",
    caps: Capabilities::new().with_builder(),
  },
  Implementation {
    name: "kotlinOrdered",
    package: "kotlinx.collections.immutable",
    imports: &[
      "kotlinx.collections.immutable.PersistentMap",
      "kotlinx.collections.immutable.persistentMapOf",
    ],
    type_name: "PersistentMap<IntWrapper, String>",
    empty: "persistentMapOf()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.put(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.remove(key)",
    iterate: "map.entries",
    caps: Capabilities::new().ordered().with_builder(),
  },
  Implementation {
    name: "capsule",
    package: "io.usethesource.capsule",
    imports: &[
      "io.usethesource.capsule.Map",
      "io.usethesource.capsule.core.PersistentTrieMap",
    ],
    type_name: "Map.Immutable<IntWrapper, String>",
    empty: "PersistentTrieMap.of()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.__put(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.__remove(key)",
    iterate: "map.entrySet()",
    caps: Capabilities::new().with_builder(),
  },
  Implementation {
    name: "paguro",
    package: "org.organicdesign.fp.collections",
    imports: &[
      "org.organicdesign.fp.collections.ImMap",
      "org.organicdesign.fp.collections.PersistentHashMap",
    ],
    type_name: "ImMap<IntWrapper, String>",
    empty: "PersistentHashMap.empty()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.assoc(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.without(key)",
    iterate: "map",
    caps: Capabilities::new().with_builder(),
  },
  Implementation {
    name: "paguroSorted",
    package: "org.organicdesign.fp.collections",
    imports: &[
      "org.organicdesign.fp.collections.ImSortedMap",
      "org.organicdesign.fp.collections.PersistentTreeMap",
    ],
    type_name: "ImSortedMap<IntWrapper, String>",
    empty: "PersistentTreeMap.empty()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.assoc(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.without(key)",
    iterate: "map",
    caps: Capabilities::new().sorted(),
  },
  Implementation {
    name: "cyclops",
    package: "cyclops.data",
    imports: &["cyclops.data.HashMap"],
    type_name: "HashMap<IntWrapper, String>",
    empty: "HashMap.empty()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.put(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.remove(key)",
    iterate: "map",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "cyclopsOrdered",
    package: "cyclops.data",
    imports: &["cyclops.data.LinkedMap"],
    type_name: "LinkedMap<IntWrapper, String>",
    empty: "LinkedMap.empty()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.put(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.remove(key)",
    iterate: "map",
    caps: Capabilities::new().ordered(),
  },
  Implementation {
    name: "cyclopsTrie",
    package: "cyclops.data",
    imports: &["cyclops.data.TrieMap"],
    type_name: "TrieMap<IntWrapper, String>",
    empty: "TrieMap.empty()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.put(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.remove(key)",
    iterate: "map",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "clojure",
    package: "clojure.lang",
    imports: &[
      "clojure.lang.IPersistentMap",
      "clojure.lang.PersistentHashMap",
    ],
    type_name: "IPersistentMap",
    empty: "PersistentHashMap.EMPTY",
    to_builder: None,
    persistent_add: None,
    add: "map = map.assoc(key, \"some value\")",
    lookup: "map.valAt(key)",
    update: None,
    remove: "map = map.without(key)",
    iterate: "map",
    caps: Capabilities::new().with_builder(),
  },
  Implementation {
    name: "clojureSorted",
    package: "clojure.lang",
    imports: &[
      "clojure.lang.IPersistentMap",
      "clojure.lang.PersistentTreeMap",
    ],
    type_name: "IPersistentMap",
    empty: "PersistentTreeMap.EMPTY",
    to_builder: None,
    persistent_add: None,
    add: "map = map.assoc(key, \"some value\")",
    lookup: "map.valAt(key)",
    update: None,
    remove: "map = map.without(key)",
    iterate: "map",
    caps: Capabilities::new().sorted(),
  },
  Implementation {
    name: "scala",
    package: "scala.collection.immutable",
    imports: &[
      "scala.collection.immutable.HashMap",
      "scala.jdk.javaapi.CollectionConverters.asJava",
    ],
    type_name: "HashMap<IntWrapper, String>",
    empty: "HashMap.empty()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.updated(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.removed(key)",
    iterate: "asJava(map)",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "scalaSorted",
    package: "scala.collection.immutable",
    imports: &[
      "scala.collection.immutable.TreeMap",
      "scala.jdk.javaapi.CollectionConverters.asJava",
    ],
    type_name: "TreeMap<IntWrapper, String>",
    empty: "TreeMap.empty()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.updated(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.removed(key)",
    iterate: "asJava(map)",
    caps: Capabilities::new().sorted(),
  },
  Implementation {
    name: "vavr",
    package: "io.vavr.collection",
    imports: &["io.vavr.collection.HashMap"],
    type_name: "HashMap<IntWrapper, String>",
    empty: "HashMap.empty()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.put(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.remove(key)",
    iterate: "map",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "vavrSorted",
    package: "io.vavr.collection",
    imports: &["io.vavr.collection.TreeMap"],
    type_name: "TreeMap<IntWrapper, String>",
    empty: "TreeMap.empty()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.put(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.remove(key)",
    iterate: "map",
    caps: Capabilities::new().sorted(),
  },
  Implementation {
    name: "vavrOrdered",
    package: "io.vavr.collection",
    imports: &["io.vavr.collection.LinkedHashMap"],
    type_name: "LinkedHashMap<IntWrapper, String>",
    empty: "LinkedHashMap.empty()",
    to_builder: None,
    persistent_add: None,
    add: "map = map.put(key, \"some value\")",
    lookup: "map.get(key)",
    update: None,
    remove: "map = map.remove(key)",
    iterate: "map",
    caps: Capabilities::new().ordered(),
  },
];

pub static MAP_BUILDER_IMPLS: &[Implementation] = &[
  Implementation {
    name: "kotlin",
    package: "kotlinx.collections.immutable",
    imports: &[
      "kotlinx.collections.immutable.PersistentMap",
      "kotlinx.collections.immutable.persistentHashMapOf",
    ],
    type_name: "PersistentMap.Builder<IntWrapper, String>",
    empty: "persistentHashMapOf<IntWrapper, String>()",
    to_builder: Some("map.builder()"),
    persistent_add: Some("map = map.put(key, \"some value\")"),
    add: "builder.put(key, \"some value\")",
    lookup: "builder.get(key)",
    update: None,
    remove: "builder.remove(key)",
    iterate: "builder.entries",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "kotlinOrdered",
    package: "kotlinx.collections.immutable",
    imports: &[
      "kotlinx.collections.immutable.PersistentMap",
      "kotlinx.collections.immutable.persistentMapOf",
    ],
    type_name: "PersistentMap.Builder<IntWrapper, String>",
    empty: "persistentMapOf<IntWrapper, String>()",
    to_builder: Some("map.builder()"),
    persistent_add: Some("map = map.put(key, \"some value\")"),
    add: "builder.put(key, \"some value\")",
    lookup: "builder.get(key)",
    update: None,
    remove: "builder.remove(key)",
    iterate: "builder.entries",
    caps: Capabilities::new().ordered(),
  },
  Implementation {
    name: "capsule",
    package: "io.usethesource.capsule",
    imports: &[
      "io.usethesource.capsule.Map",
      "io.usethesource.capsule.core.PersistentTrieMap",
    ],
    type_name: "Map.Transient<IntWrapper, String>",
    empty: "PersistentTrieMap.of<IntWrapper, String>()",
    to_builder: Some("map.asTransient()"),
    persistent_add: Some("map = map.__put(key, \"some value\")"),
    add: "builder.__put(key, \"some value\")",
    lookup: "builder.get(key)",
    update: None,
    remove: "builder.__remove(key)",
    iterate: "builder.entrySet()",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "paguro",
    package: "org.organicdesign.fp.collections",
    imports: &[
      "org.organicdesign.fp.collections.MutMap",
      "org.organicdesign.fp.collections.PersistentHashMap",
    ],
    type_name: "MutMap<IntWrapper, String>",
    empty: "PersistentHashMap.empty<IntWrapper, String>()",
    to_builder: Some("map.mutable()"),
    persistent_add: Some("map = map.assoc(key, \"some value\")"),
    add: "builder.assoc(key, \"some value\")",
    lookup: "builder.get(key)",
    update: None,
    remove: "builder.without(key)",
    iterate: "builder",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "clojure",
    package: "clojure.lang",
    imports: &[
      "clojure.lang.ITransientMap",
      "clojure.lang.PersistentHashMap",
    ],
    type_name: "ITransientMap",
    empty: "PersistentHashMap.EMPTY",
    to_builder: Some("map.asTransient() as ITransientMap"),
    persistent_add: Some("map = map.assoc(key, \"some value\")"),
    add: "builder = builder.assoc(key, \"some value\")",
    lookup: "builder.valAt(key)",
    update: None,
    remove: "builder = builder.without(key)",
    iterate: "builder",
    caps: Capabilities::new().not_iterable(),
  },
];

pub static SET_IMPLS: &[Implementation] = &[
  Implementation {
    name: "kotlin",
    package: "kotlinx.collections.immutable",
    imports: &[
      "kotlinx.collections.immutable.PersistentSet",
      "kotlinx.collections.immutable.persistentHashSetOf",
    ],
    type_name: "PersistentSet<IntWrapper>",
    empty: "persistentHashSetOf()",
    to_builder: None,
    persistent_add: None,
    add: "set = set.add(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.remove(element)",
    iterate: "set",
    caps: Capabilities::new().with_builder(),
  },
  Implementation {
    name: "kotlinOrdered",
    package: "kotlinx.collections.immutable",
    imports: &[
      "kotlinx.collections.immutable.PersistentSet",
      "kotlinx.collections.immutable.persistentSetOf",
    ],
    type_name: "PersistentSet<IntWrapper>",
    empty: "persistentSetOf()",
    to_builder: None,
    persistent_add: None,
    add: "set = set.add(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.remove(element)",
    iterate: "set",
    caps: Capabilities::new().ordered().with_builder(),
  },
  Implementation {
    name: "capsule",
    package: "io.usethesource.capsule",
    imports: &[
      "io.usethesource.capsule.Set",
      "io.usethesource.capsule.core.PersistentTrieSet",
    ],
    type_name: "Set.Immutable<IntWrapper>",
    empty: "PersistentTrieSet.of()",
    to_builder: None,
    persistent_add: None,
    add: "set = set.__insert(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.__remove(element)",
    iterate: "set",
    caps: Capabilities::new().with_builder(),
  },
  Implementation {
    name: "cyclops",
    package: "cyclops.data",
    imports: &["cyclops.data.HashSet"],
    type_name: "HashSet<IntWrapper>",
    empty: "HashSet.empty()",
    to_builder: None,
    persistent_add: None,
    add: "set = set.plus(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.removeValue(element)",
    iterate: "set",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "cyclopsTrie",
    package: "cyclops.data",
    imports: &["cyclops.data.TrieSet"],
    type_name: "TrieSet<IntWrapper>",
    empty: "TrieSet.empty()",
    to_builder: None,
    persistent_add: None,
    add: "set = set.plus(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.removeValue(element)",
    iterate: "set",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "cyclopsSorted",
    package: "cyclops.data",
    imports: &["cyclops.data.TreeSet", "java.util.Comparator"],
    type_name: "TreeSet<IntWrapper>",
    empty: "TreeSet.empty(Comparator.naturalOrder())",
    to_builder: None,
    persistent_add: None,
    add: "set = set.plus(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.removeValue(element)",
    iterate: "set",
    caps: Capabilities::new().sorted(),
  },
  Implementation {
    name: "clojure",
    package: "clojure.lang",
    imports: &[
      "clojure.lang.IPersistentSet",
      "clojure.lang.PersistentHashSet",
    ],
    type_name: "IPersistentSet",
    empty: "PersistentHashSet.EMPTY",
    to_builder: None,
    persistent_add: None,
    add: "set = set.cons(element) as IPersistentSet",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.disjoin(element)",
    iterate: "set",
    caps: Capabilities::new().with_builder(),
  },
  Implementation {
    name: "clojureSorted",
    package: "clojure.lang",
    imports: &[
      "clojure.lang.IPersistentSet",
      "clojure.lang.PersistentTreeSet",
    ],
    type_name: "IPersistentSet",
    empty: "PersistentTreeSet.EMPTY",
    to_builder: None,
    persistent_add: None,
    add: "set = set.cons(element) as IPersistentSet",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.disjoin(element)",
    iterate: "set",
    caps: Capabilities::new().sorted(),
  },
  Implementation {
    name: "scala",
    package: "scala.collection.immutable",
    imports: &[
      "scala.collection.immutable.HashSet",
      "scala.jdk.javaapi.CollectionConverters.asJava",
    ],
    type_name: "HashSet<IntWrapper>",
    empty: "HashSet.empty()",
    to_builder: None,
    persistent_add: None,
    add: "set = set.incl(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.excl(element)",
    iterate: "asJava(set)",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "scalaSorted",
    package: "scala.collection.immutable",
    imports: &[
      "scala.collection.immutable.TreeSet",
      "scala.jdk.javaapi.CollectionConverters.asJava",
    ],
    type_name: "TreeSet<IntWrapper>",
    empty: "TreeSet.empty()",
    to_builder: None,
    persistent_add: None,
    add: "set = set.incl(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.excl(element)",
    iterate: "asJava(set)",
    caps: Capabilities::new().sorted(),
  },
  Implementation {
    name: "vavr",
    package: "io.vavr.collection",
    imports: &["io.vavr.collection.HashSet"],
    type_name: "HashSet<IntWrapper>",
    empty: "HashSet.empty()",
    to_builder: None,
    persistent_add: None,
    add: "set = set.add(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.remove(element)",
    iterate: "set",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "vavrSorted",
    package: "io.vavr.collection",
    imports: &["io.vavr.collection.TreeSet"],
    type_name: "TreeSet<IntWrapper>",
    empty: "TreeSet.empty()",
    to_builder: None,
    persistent_add: None,
    add: "set = set.add(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.remove(element)",
    iterate: "set",
    caps: Capabilities::new().sorted(),
  },
  Implementation {
    name: "vavrOrdered",
    package: "io.vavr.collection",
    imports: &["io.vavr.collection.LinkedHashSet"],
    type_name: "LinkedHashSet<IntWrapper>",
    empty: "LinkedHashSet.empty()",
    to_builder: None,
    persistent_add: None,
    add: "set = set.add(element)",
    lookup: "set.contains(element)",
    update: None,
    remove: "set = set.remove(element)",
    iterate: "set",
    caps: Capabilities::new().ordered(),
  },
];

pub static SET_BUILDER_IMPLS: &[Implementation] = &[
  Implementation {
    name: "kotlin",
    package: "kotlinx.collections.immutable",
    imports: &[
      "kotlinx.collections.immutable.PersistentSet",
      "kotlinx.collections.immutable.persistentHashSetOf",
    ],
    type_name: "PersistentSet.Builder<IntWrapper>",
    empty: "persistentHashSetOf<IntWrapper>()",
    to_builder: Some("set.builder()"),
    persistent_add: Some("set = set.add(element)"),
    add: "builder.add(element)",
    lookup: "builder.contains(element)",
    update: None,
    remove: "builder.remove(element)",
    iterate: "builder",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "kotlinOrdered",
    package: "kotlinx.collections.immutable",
    imports: &[
      "kotlinx.collections.immutable.PersistentSet",
      "kotlinx.collections.immutable.persistentSetOf",
    ],
    type_name: "PersistentSet.Builder<IntWrapper>",
    empty: "persistentSetOf<IntWrapper>()",
    to_builder: Some("set.builder()"),
    persistent_add: Some("set = set.add(element)"),
    add: "builder.add(element)",
    lookup: "builder.contains(element)",
    update: None,
    remove: "builder.remove(element)",
    iterate: "builder",
    caps: Capabilities::new().ordered(),
  },
  Implementation {
    name: "capsule",
    package: "io.usethesource.capsule",
    imports: &[
      "io.usethesource.capsule.Set",
      "io.usethesource.capsule.core.PersistentTrieSet",
    ],
    type_name: "Set.Transient<IntWrapper>",
    empty: "PersistentTrieSet.of<IntWrapper>()",
    to_builder: Some("set.asTransient()"),
    persistent_add: Some("set = set.__insert(element)"),
    add: "builder.__insert(element)",
    lookup: "builder.contains(element)",
    update: None,
    remove: "builder.__remove(element)",
    iterate: "builder",
    caps: Capabilities::new(),
  },
  Implementation {
    name: "clojure",
    package: "clojure.lang",
    imports: &[
      "clojure.lang.ITransientSet",
      "clojure.lang.PersistentHashSet",
    ],
    type_name: "ITransientSet",
    empty: "PersistentHashSet.EMPTY",
    to_builder: Some("set.asTransient() as ITransientSet"),
    persistent_add: Some("set = set.cons(element) as PersistentHashSet"),
    add: "builder = builder.conj(element) as ITransientSet",
    lookup: "builder.contains(element)",
    update: None,
    remove: "builder = builder.disjoin(element)",
    iterate: "builder",
    caps: Capabilities::new().not_iterable(),
  },
];

static GROUPS: &[(&str, &[Implementation])] = &[
  ("list", LIST_IMPLS),
  ("list builder", LIST_BUILDER_IMPLS),
  ("map", MAP_IMPLS),
  ("map builder", MAP_BUILDER_IMPLS),
  ("set", SET_IMPLS),
  ("set builder", SET_BUILDER_IMPLS),
];

/// Persistent catalogs paired with the builder catalog their `builder`
/// capability must agree with.
static BUILDER_PAIRS: &[(&str, &[Implementation], &[Implementation])] = &[
  ("list", LIST_IMPLS, LIST_BUILDER_IMPLS),
  ("map", MAP_IMPLS, MAP_BUILDER_IMPLS),
  ("set", SET_IMPLS, SET_BUILDER_IMPLS),
];

/// Checks the static tables before any filesystem work. Violations are
/// programmer errors in the catalog, so generation refuses to start.
pub fn validate() -> Result<(), CatalogError> {
  for &(kind, impls) in GROUPS {
    if impls.is_empty() {
      return Err(CatalogError::EmptyGroup { kind });
    }

    for (position, imp) in impls.iter().enumerate() {
      if impls[..position].iter().any(|other| other.name == imp.name) {
        return Err(CatalogError::DuplicateName {
          kind,
          name: imp.name,
        });
      }
    }

    if !impls.iter().any(|imp| imp.caps.iterable) {
      return Err(CatalogError::EmptyCombination {
        kind,
        operation: "Iterate",
      });
    }
  }

  for &(kind, persistent, builders) in BUILDER_PAIRS {
    for imp in persistent {
      let registered = builders.iter().any(|b| b.name == imp.name);
      if imp.caps.builder != registered {
        return Err(CatalogError::BuilderMismatch {
          kind,
          name: imp.name,
        });
      }
    }
    for builder in builders {
      let flagged = persistent
        .iter()
        .any(|imp| imp.name == builder.name && imp.caps.builder);
      if !flagged {
        return Err(CatalogError::BuilderMismatch {
          kind,
          name: builder.name,
        });
      }
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn catalogs_pass_validation() {
    validate().unwrap();
  }

  #[test]
  fn group_sizes_match_the_registered_libraries() {
    assert_eq!(LIST_IMPLS.len(), 6);
    assert_eq!(LIST_BUILDER_IMPLS.len(), 3);
    assert_eq!(MAP_IMPLS.len(), 15);
    assert_eq!(MAP_BUILDER_IMPLS.len(), 5);
    assert_eq!(SET_IMPLS.len(), 13);
    assert_eq!(SET_BUILDER_IMPLS.len(), 4);
  }

  #[test]
  fn only_transients_are_opaque_to_iteration() {
    for (_, impls) in GROUPS {
      for imp in *impls {
        assert_eq!(
          imp.caps.iterable,
          !(imp.name == "clojure" && imp.to_builder.is_some()),
          "unexpected iterability for {}",
          imp.name
        );
      }
    }
  }

  #[test]
  fn builder_entries_carry_builder_fragments() {
    for imp in LIST_BUILDER_IMPLS
      .iter()
      .chain(MAP_BUILDER_IMPLS)
      .chain(SET_BUILDER_IMPLS)
    {
      assert!(imp.to_builder.is_some(), "{} misses to_builder", imp.name);
      assert!(
        imp.persistent_add.is_some(),
        "{} misses persistent_add",
        imp.name
      );
    }
  }

  #[test]
  fn lists_are_the_only_updatable_kind() {
    for imp in LIST_IMPLS.iter().chain(LIST_BUILDER_IMPLS) {
      assert!(imp.update.is_some());
    }
    for imp in MAP_IMPLS
      .iter()
      .chain(MAP_BUILDER_IMPLS)
      .chain(SET_IMPLS)
      .chain(SET_BUILDER_IMPLS)
    {
      assert!(imp.update.is_none());
    }
  }
}
