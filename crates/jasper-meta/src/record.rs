//! The persisted metadata record
//!
//! One flat `key=value` file per generated unit, written next to its
//! compiled artifact as `<qualified.Name>.meta`. A library built from
//! generated units ships these records instead of its original sources, so
//! loading must work when nothing but the compiled artifacts is available.
//!
//! Keys:
//! - `class`: qualified source name, for self-verification on reload
//! - `dependencies`: bracketed list of `<kindPrefix><qualifiedName>` tokens
//! - `js`: emitted target-file reference (absent when none)
//! - `jsNamespace`: resolved namespace (absent when never resolved)

use crate::descriptor::GeneratedUnit;
use crate::{MetaError, Result, UnitDescriptor, UnitKey};
use jasper_ast::TypeRegistry;
use jasper_graph::DependencyKind;
use log::warn;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CLASS_PROP: &str = "class";
const DEPENDENCIES_PROP: &str = "dependencies";
const JS_FILE_PROP: &str = "js";
const JS_NAMESPACE_PROP: &str = "jsNamespace";

/// Encode a dependency map as the bracketed token list; `[]` when empty
pub fn encode_dependencies(deps: &BTreeMap<UnitKey, DependencyKind>) -> String {
    let mut body = String::new();
    for (key, kind) in deps {
        if !body.is_empty() {
            body.push(',');
        }
        body.push_str(&kind.with_prefix(key.as_str()));
    }
    format!("[{}]", body)
}

/// Decode the bracketed token list back into a dependency map.
///
/// Malformed content degrades to an empty map rather than an error: trimmed
/// content of length <= 2, or content not enclosed in brackets (a corrupt or
/// foreign record).
pub fn decode_dependencies(value: &str) -> BTreeMap<UnitKey, DependencyKind> {
    let mut deps = BTreeMap::new();
    let value = value.trim();
    if value.len() <= 2 {
        return deps;
    }
    let Some(body) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) else {
        return deps;
    };
    for token in body.split(',') {
        let (kind, name) = DependencyKind::parse_token(token);
        if name.is_empty() {
            continue;
        }
        deps.insert(UnitKey::new(name), kind);
    }
    deps
}

/// Reads and writes metadata records in one artifact directory
#[derive(Debug, Clone)]
pub struct MetadataStore {
    dir: PathBuf,
}

impl MetadataStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Location of the record for a unit
    pub fn record_path(&self, qualified_name: &str) -> PathBuf {
        self.dir.join(format!("{}.meta", qualified_name))
    }

    /// Persist a generated unit's record. Write-once per generation pass;
    /// descriptors reconstructed by `load` refuse to be stored again.
    pub fn store(&self, unit: &GeneratedUnit) -> Result<()> {
        let name = unit.source_name();
        if unit.is_loaded() {
            return Err(MetaError::ReadOnly { unit: name.to_string() });
        }
        fs::create_dir_all(&self.dir).map_err(|e| MetaError::DirectoryCreation {
            unit: name.to_string(),
            path: self.dir.clone(),
            source: e,
        })?;

        let mut out = String::new();
        out.push_str(&format!("{}={}\n", CLASS_PROP, name));
        out.push_str(&format!(
            "{}={}\n",
            DEPENDENCIES_PROP,
            encode_dependencies(unit.dependency_map())
        ));
        if let Some(js) = unit.js_files().first() {
            out.push_str(&format!("{}={}\n", JS_FILE_PROP, js));
        }
        if let Some(ns) = unit.namespace() {
            out.push_str(&format!("{}={}\n", JS_NAMESPACE_PROP, ns));
        }

        fs::write(self.record_path(name), out).map_err(|e| MetaError::Io {
            unit: name.to_string(),
            source: e,
        })
    }

    /// Load a unit's record from its artifact location.
    ///
    /// A missing record is logged and degrades to empty metadata; downstream
    /// consumers tolerate partially known units. The namespace is always
    /// resolved on the way out: the record's value when present, else the
    /// declared annotation on the compiled artifact (records written by old
    /// compiler versions never carried the namespace key), else exactly `""`.
    pub fn load(&self, qualified_name: &str, registry: &TypeRegistry) -> Result<GeneratedUnit> {
        let path = self.record_path(qualified_name);
        let props = match fs::read_to_string(&path) {
            Ok(text) => parse_properties(&text),
            Err(_) => {
                warn!(
                    "missing metadata record for {} at {}; proceeding with empty metadata",
                    qualified_name,
                    path.display()
                );
                BTreeMap::new()
            }
        };

        if let Some(class) = props.get(CLASS_PROP) {
            if class != qualified_name {
                warn!(
                    "metadata record at {} declares class {} but {} was requested",
                    path.display(),
                    class,
                    qualified_name
                );
            }
        }

        let dependencies = props
            .get(DEPENDENCIES_PROP)
            .map(|v| decode_dependencies(v))
            .unwrap_or_default();

        let js_files = match props.get(JS_FILE_PROP) {
            Some(js) => {
                let js = js.trim();
                if js.is_empty() || js.chars().any(char::is_whitespace) {
                    return Err(MetaError::InvalidJsReference {
                        unit: qualified_name.to_string(),
                        reference: js.to_string(),
                    });
                }
                vec![js.to_string()]
            }
            None => Vec::new(),
        };

        let namespace = match props.get(JS_NAMESPACE_PROP) {
            Some(ns) => ns.clone(),
            None => registry
                .declared_namespace(qualified_name)
                .unwrap_or_default()
                .to_string(),
        };

        Ok(GeneratedUnit::from_record(
            qualified_name.to_string(),
            namespace,
            js_files,
            dependencies,
        ))
    }
}

fn parse_properties(text: &str) -> BTreeMap<String, String> {
    let mut props = BTreeMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            props.insert(key.trim().to_string(), value.to_string());
        }
    }
    props
}
