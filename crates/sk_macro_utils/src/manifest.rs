use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item};

const UMBRELLA_CRATES: [&str; 2] = ["sk_core", "sk"];
const MEMBER_PREFIX: &str = "sk_";

/// The dependency lists of the crate invoking a proc-macro, used to emit
/// paths that resolve from that crate.
///
/// ```rust
/// # use sk_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("sk_enums"));
/// ```
///
/// # Resolution
///
/// For `sk_enums`, looking at `[dependencies]` and then `[dev-dependencies]`:
///
/// - a direct dependency gives `::sk_enums`;
/// - otherwise a dependency on `sk_core` (or a rename to `sk`) gives
///   `::sk_core::enums` (or `::sk::enums`).
///
/// With neither, the result is `::sk_enums`. A crate expanding its own macros
/// makes that resolve with `extern crate self as sk_enums;`.
#[derive(Debug)]
pub struct Manifest {
    dependencies: BTreeSet<String>,
    dev_dependencies: BTreeSet<String>,
    modified: SystemTime,
}

impl Manifest {
    /// Reads the dependency names out of a `Cargo.toml` document.
    fn parse(source: &str, modified: SystemTime) -> Result<Self, toml_edit::TomlError> {
        let document = Document::parse(source)?;
        let names = |section: &str| match document.as_table().get(section) {
            Some(Item::Table(table)) => table.iter().map(|(key, _)| key.to_owned()).collect(),
            _ => BTreeSet::new(),
        };

        Ok(Self {
            dependencies: names("dependencies"),
            dev_dependencies: names("dev-dependencies"),
            modified,
        })
    }

    fn resolve_in(deps: &BTreeSet<String>, name: &str) -> Option<String> {
        if deps.contains(name) {
            return Some(format!("::{name}"));
        }
        let module = name.strip_prefix(MEMBER_PREFIX)?;
        UMBRELLA_CRATES
            .into_iter()
            .find(|umbrella| deps.contains(*umbrella))
            .map(|umbrella| format!("::{umbrella}::{module}"))
    }

    /// Returns the path of the workspace crate `name` as seen by the caller.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let path = Self::resolve_in(&self.dependencies, name)
            .or_else(|| Self::resolve_in(&self.dev_dependencies, name))
            .unwrap_or_else(|| format!("::{name}"));
        syn::parse_str(&path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Manifests are cached per `CARGO_MANIFEST_DIR` and re-read once the
    /// file's modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static CACHE: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = manifest_path();
        let modified = std::fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        {
            let cache = CACHE.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified == modified
            {
                return func(manifest);
            }
        }

        let manifest = read_manifest(&path, modified);
        let result = func(&manifest);
        CACHE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);
        result
    }
}

fn manifest_path() -> PathBuf {
    let Some(dir) = std::env::var_os("CARGO_MANIFEST_DIR") else {
        panic!("`CARGO_MANIFEST_DIR` is not set; proc-macros must be run by cargo");
    };
    PathBuf::from(dir).join("Cargo.toml")
}

fn read_manifest(path: &Path, modified: SystemTime) -> Manifest {
    let source = std::fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
    Manifest::parse(&source, modified)
        .unwrap_or_else(|_| panic!("cannot parse {}", path.display()))
}
