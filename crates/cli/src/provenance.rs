use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the subcommand and its parsed parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

/// Write the JSON document to `artifact` and a `<stem>.provenance.json` sidecar
/// next to it (code revision, library version, callsite, params, outputs).
#[track_caller]
pub fn write_with_sidecar<P: AsRef<Path>>(artifact: P, doc: &Value, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    if let Some(parent) = artifact.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(artifact, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", artifact.display()))?;

    let callsite = Location::caller();
    let sidecar = json!({
        "code_rev": current_git_rev(),
        "genmath_version": genmath::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(artifact = %artifact.display(), sidecar = %path.display(), "wrote output");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/bounds.json"));
        assert_eq!(derived, Path::new("/tmp/out/bounds.provenance.json"));
    }

    #[test]
    fn writes_document_and_sidecar() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("d.json");
        let doc = json!({"distance": 5.0});
        let payload = Payload {
            command: "distance",
            params: json!({"from": [0.0, 0.0], "to": [3.0, 4.0]}),
        };
        let sidecar = write_with_sidecar(&artifact, &doc, payload).unwrap();
        let written: Value = serde_json::from_slice(&fs::read(&artifact).unwrap()).unwrap();
        assert_eq!(written, doc);
        let parsed: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["command"], "distance");
        assert_eq!(parsed["genmath_version"], genmath::VERSION);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
