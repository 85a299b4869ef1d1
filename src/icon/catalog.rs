//! Layered icon lookup and the lazily fetched external icon set.
//!
//! An [`IconCatalog`] is passed explicitly to every render call. Lookup
//! order is runtime-registered → built-in curated → external set; the
//! first match wins.
//!
//! # Example
//!
//! ```
//! use brandmark_renderer::{ExternalIconSet, StaticIconSource};
//!
//! let source = StaticIconSource::new(
//!     r#"{ "anchor": { "viewBox": "0 0 24 24", "raw": "<circle cx=\"12\" cy=\"5\" r=\"3\"/>" } }"#,
//!     "lucide",
//! );
//! let external = ExternalIconSet::new(source);
//!
//! // The first call fetches; later calls reuse the cached snapshot.
//! let catalog = external.catalog();
//! assert!(catalog.get("lucide:anchor").is_some());
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use log::{debug, info, warn};

use super::{builtin, sanitize_definition, IconDefinition};
use crate::error::{BrandError, Result};

// ============================================================================
// IconSet
// ============================================================================

/// An immutable collection of icon definitions keyed by full id.
///
/// Definitions only enter through [`IconSet::insert`], so every icon in a
/// set has passed the markup allowlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconSet {
    icons: HashMap<String, IconDefinition>,
}

impl IconSet {
    /// Creates an empty icon set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an icon subset file.
    ///
    /// The file maps bare keys to definitions; each key is stored as
    /// `<namespace>:<key>` unless it already carries a namespace. Entries
    /// with unsafe raw markup are skipped.
    pub fn from_subset_json(json: &str, namespace: &str) -> Result<Self> {
        let entries: HashMap<String, IconDefinition> = serde_json::from_str(json)?;
        let mut set = Self::new();
        for (key, def) in entries {
            let id = if key.contains(':') {
                key
            } else {
                format!("{namespace}:{key}")
            };
            if let Err(err) = set.insert(id, def) {
                warn!("skipping {err}");
            }
        }
        Ok(set)
    }

    /// Adds an icon, replacing any existing definition with the same id.
    ///
    /// The definition is sanitized first; one that fails the markup
    /// allowlist is not added.
    pub fn insert(&mut self, id: impl Into<String>, def: IconDefinition) -> Result<()> {
        let id = id.into();
        let def = checked(&id, def)?;
        self.icons.insert(id, def);
        Ok(())
    }

    /// Looks up an icon by full id.
    pub fn get(&self, id: &str) -> Option<&IconDefinition> {
        self.icons.get(id)
    }

    /// Returns the number of icons in the set.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if the set contains no icons.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Returns an iterator over the icon ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }
}

fn checked(id: &str, def: IconDefinition) -> Result<IconDefinition> {
    sanitize_definition(def).map_err(|source| BrandError::UnsafeMarkup {
        id: id.to_string(),
        source,
    })
}

// ============================================================================
// IconCatalog
// ============================================================================

/// The icons a render call may reference.
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    runtime: HashMap<String, IconDefinition>,
    external: Option<Arc<IconSet>>,
}

impl IconCatalog {
    /// Creates a catalog with the curated built-ins only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an external icon set snapshot.
    ///
    /// Sets are sanitized on insertion, so nothing is checked here.
    pub fn with_external(mut self, set: Arc<IconSet>) -> Self {
        self.external = Some(set);
        self
    }

    /// Replaces or removes the external icon set snapshot.
    pub fn set_external(&mut self, set: Option<Arc<IconSet>>) {
        self.external = set;
    }

    /// Returns true if an external set is attached.
    pub fn has_external(&self) -> bool {
        self.external.is_some()
    }

    /// Registers an icon that takes precedence over every other layer.
    ///
    /// The definition goes through the same allowlist as icon sets; raw
    /// markup is stored in its rebuilt form.
    pub fn register(&mut self, id: impl Into<String>, def: IconDefinition) -> Result<()> {
        let id = id.into();
        let def = checked(&id, def).inspect_err(|err| warn!("rejecting runtime {err}"))?;
        debug!("registered runtime icon `{id}`");
        self.runtime.insert(id, def);
        Ok(())
    }

    /// Looks up an icon through the layers.
    pub fn get(&self, id: &str) -> Option<&IconDefinition> {
        self.runtime
            .get(id)
            .or_else(|| builtin::get(id))
            .or_else(|| self.external.as_deref().and_then(|set| set.get(id)))
    }

    /// Returns true if any layer defines `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Every resolvable id across all layers, sorted and deduplicated.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: BTreeSet<String> = self.runtime.keys().cloned().collect();
        ids.extend(builtin::ids().into_iter().map(str::to_string));
        if let Some(set) = &self.external {
            ids.extend(set.ids().map(str::to_string));
        }
        ids.into_iter().collect()
    }
}

// ============================================================================
// Icon Sources
// ============================================================================

/// Somewhere an external icon set can be fetched from.
///
/// Implementations that touch the network are responsible for their own
/// timeouts; a timeout is just another error.
pub trait IconSource: Send + Sync {
    fn fetch(&self) -> Result<IconSet>;
}

/// Reads a subset JSON file from disk.
#[derive(Debug, Clone)]
pub struct FileIconSource {
    path: PathBuf,
    namespace: String,
}

impl FileIconSource {
    pub fn new(path: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            namespace: namespace.into(),
        }
    }
}

impl IconSource for FileIconSource {
    fn fetch(&self) -> Result<IconSet> {
        let json = fs::read_to_string(&self.path).map_err(|source| BrandError::Io {
            path: self.path.clone(),
            source,
        })?;
        IconSet::from_subset_json(&json, &self.namespace)
    }
}

/// Serves a subset JSON document held in memory.
#[derive(Debug, Clone)]
pub struct StaticIconSource {
    json: String,
    namespace: String,
}

impl StaticIconSource {
    pub fn new(json: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            json: json.into(),
            namespace: namespace.into(),
        }
    }
}

impl IconSource for StaticIconSource {
    fn fetch(&self) -> Result<IconSet> {
        IconSet::from_subset_json(&self.json, &self.namespace)
    }
}

// ============================================================================
// ExternalIconSet
// ============================================================================

/// Fetches an icon set on first need and keeps it for the session.
///
/// At most one fetch succeeds per instance. A failed fetch is logged and
/// leaves the set unloaded, so icons from it resolve as unknown until a
/// later call loads it.
pub struct ExternalIconSet<S: IconSource> {
    source: S,
    loaded: Mutex<Option<Arc<IconSet>>>,
}

impl<S: IconSource> ExternalIconSet<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            loaded: Mutex::new(None),
        }
    }

    /// Returns the cached set, fetching it if this is the first need.
    pub fn get(&self) -> Option<Arc<IconSet>> {
        let mut loaded = self.loaded.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(set) = loaded.as_ref() {
            return Some(Arc::clone(set));
        }
        match self.source.fetch() {
            Ok(set) => {
                info!("loaded external icon set ({} icons)", set.len());
                let set = Arc::new(set);
                *loaded = Some(Arc::clone(&set));
                Some(set)
            }
            Err(err) => {
                warn!("external icon set unavailable: {err}");
                None
            }
        }
    }

    /// Returns the cached set without fetching.
    pub fn cached(&self) -> Option<Arc<IconSet>> {
        self.loaded
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(Arc::clone)
    }

    /// A catalog snapshot including the external set if it can be loaded.
    pub fn catalog(&self) -> IconCatalog {
        let mut catalog = IconCatalog::new();
        catalog.set_external(self.get());
        catalog
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{IconPath, MarkupError};
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SUBSET: &str = r#"{
        "anchor": { "viewBox": "0 0 24 24", "raw": "<circle cx=\"12\" cy=\"5\" r=\"3\"/>" },
        "sparkles": { "viewBox": "0 0 24 24", "raw": "<path d=\"M9 3l2 5\"/>" },
        "evil": { "viewBox": "0 0 24 24", "raw": "<script>alert(1)</script>" }
    }"#;

    struct CountingSource {
        calls: AtomicUsize,
        fail_first: bool,
    }

    impl IconSource for CountingSource {
        fn fetch(&self) -> Result<IconSet> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && call == 0 {
                return Err(BrandError::SourceUnavailable("timed out".into()));
            }
            IconSet::from_subset_json(SUBSET, "lucide")
        }
    }

    #[test]
    fn subset_keys_are_namespaced_and_unsafe_entries_skipped() {
        let set = IconSet::from_subset_json(SUBSET, "lucide").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.get("lucide:anchor").is_some());
        assert!(set.get("lucide:evil").is_none());
    }

    #[test]
    fn malformed_subset_is_an_error() {
        assert!(matches!(
            IconSet::from_subset_json("[1, 2", "lucide"),
            Err(BrandError::Json(_))
        ));
    }

    #[test]
    fn runtime_layer_wins_over_builtin_and_external() {
        let external = Arc::new(IconSet::from_subset_json(SUBSET, "lucide").unwrap());
        let mut catalog = IconCatalog::new().with_external(external);

        // Built-in beats external.
        assert!(!catalog.get("lucide:sparkles").unwrap().paths.is_empty());

        // Runtime beats built-in.
        catalog
            .register(
                "lucide:sparkles",
                IconDefinition::from_raw("0 0 24 24", "<path d=\"M1 1\"/>"),
            )
            .unwrap();
        assert!(catalog.get("lucide:sparkles").unwrap().raw.is_some());

        // External still serves what nobody else defines.
        assert!(catalog.get("lucide:anchor").is_some());
        assert!(catalog.get("lucide:missing").is_none());
    }

    #[test]
    fn register_rejects_unsafe_markup() {
        let mut catalog = IconCatalog::new();
        let def = IconDefinition::from_raw("0 0 24 24", r#"<g onload="x()"></g>"#);
        assert!(matches!(
            catalog.register("custom:bad", def),
            Err(BrandError::UnsafeMarkup {
                id,
                source: MarkupError::Attribute(_),
            }) if id == "custom:bad"
        ));
        assert!(!catalog.contains("custom:bad"));

        let good = IconDefinition::from_paths("0 0 24 24", vec![IconPath::filled("M0 0h1v1z")]);
        catalog.register("custom:good", good).unwrap();
        assert!(catalog.contains("custom:good"));
    }

    /// One payload per way past a naive filter.
    const HOSTILE: [&str; 6] = [
        r#"<g xmlns:s="http://www.w3.org/2000/svg"><s:script>alert(1)</s:script></g>"#,
        r#"<a href="&#106;avascript:alert(1)"><path d="M0 0"/></a>"#,
        r#"<path d="M0 0" style="fill:url(https://evil.example/x.svg#p)"/>"#,
        r#"<path d="M0 0" fill="url(https://evil.example/x.svg#p)"/>"#,
        r#"<use href="https://evil.example/sprite.svg#icon"/>"#,
        r#"<text x="0" y="10">hi</text>"#,
    ];

    #[test]
    fn register_rejects_every_hostile_payload() {
        let mut catalog = IconCatalog::new();
        for (i, raw) in HOSTILE.iter().enumerate() {
            let id = format!("custom:hostile-{i}");
            let result = catalog.register(id.as_str(), IconDefinition::from_raw("0 0 24 24", *raw));
            assert!(matches!(result, Err(BrandError::UnsafeMarkup { .. })), "{raw}");
            assert!(!catalog.contains(&id));
        }
    }

    #[test]
    fn set_insert_rejects_every_hostile_payload() {
        let mut set = IconSet::new();
        for raw in HOSTILE {
            let result = set.insert("lucide:hostile", IconDefinition::from_raw("0 0 24 24", raw));
            assert!(result.is_err(), "{raw}");
        }
        assert!(set.is_empty());

        let mut path = IconPath::filled("M0 0h1v1z");
        path.stroke = Some("url(https://evil.example/p)".into());
        let def = IconDefinition::from_paths("0 0 24 24", vec![path]);
        assert!(set.insert("iconsax:hostile", def).is_err());
    }

    #[test]
    fn external_sets_never_carry_hostile_payloads() {
        let entries: HashMap<String, IconDefinition> = HOSTILE
            .iter()
            .enumerate()
            .map(|(i, raw)| (format!("hostile-{i}"), IconDefinition::from_raw("0 0 24 24", *raw)))
            .chain([(
                "anchor".to_string(),
                IconDefinition::from_raw("0 0 24 24", r#"<circle cx="12" cy="5" r="3"/>"#),
            )])
            .collect();
        let json = serde_json::to_string(&entries).unwrap();

        let external = ExternalIconSet::new(StaticIconSource::new(json, "lucide"));
        let catalog = external.catalog();
        assert_eq!(catalog.ids().iter().filter(|id| id.contains("hostile")).count(), 0);
        assert!(catalog.contains("lucide:anchor"));
    }

    #[test]
    fn registered_markup_is_stored_rebuilt() {
        let mut catalog = IconCatalog::new();
        let raw = r#"<svg xmlns="http://www.w3.org/2000/svg"><!--><script>alert(1)</script>--><path d="M1 1"/></svg>"#;
        catalog
            .register("custom:tricky", IconDefinition::from_raw("0 0 24 24", raw))
            .unwrap();
        let stored = catalog.get("custom:tricky").unwrap().raw.as_deref().unwrap();
        assert_eq!(stored, r#"<path d="M1 1"/>"#);
    }

    #[test]
    fn ids_span_all_layers() {
        let external = Arc::new(IconSet::from_subset_json(SUBSET, "lucide").unwrap());
        let catalog = IconCatalog::new().with_external(external);
        let ids = catalog.ids();
        assert!(ids.contains(&"iconsax:star".to_string()));
        assert!(ids.contains(&"lucide:anchor".to_string()));
        assert_eq!(
            ids.iter().filter(|id| id.as_str() == "lucide:sparkles").count(),
            1
        );
    }

    #[test]
    fn external_set_fetches_at_most_once() {
        let external = ExternalIconSet::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail_first: false,
        });
        assert!(external.cached().is_none());

        let first = external.get().unwrap();
        let second = external.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(external.source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_fetch_fails_soft_and_retries() {
        let external = ExternalIconSet::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail_first: true,
        });

        let catalog = external.catalog();
        assert!(!catalog.has_external());
        assert!(catalog.get("lucide:anchor").is_none());

        let catalog = external.catalog();
        assert!(catalog.get("lucide:anchor").is_some());
        assert_eq!(external.source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn file_source_reads_subset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SUBSET.as_bytes()).unwrap();

        let set = FileIconSource::new(file.path(), "lucide").fetch().unwrap();
        assert!(set.get("lucide:anchor").is_some());
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = FileIconSource::new("/definitely/not/here.json", "lucide");
        assert!(matches!(source.fetch(), Err(BrandError::Io { .. })));
    }
}
