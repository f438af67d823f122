//! Document linting - static analysis of Swagger document files.
//!
//! Flags the authoring mistakes that make lookups fail at test time:
//! - JSON syntax errors and malformed document shapes
//! - operation payloads that won't decode during search
//! - parameter `$ref`s that don't resolve to a definition
//! - definitions referenced without an example payload
//!
//! A clean lint means `search` cannot hit a decode error and `examples`
//! cannot come up empty for any operation declared in the document.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::types::{Api, PathMethod, DEFINITIONS_PREFIX, HTTP_METHODS, PARAMETERS_KEY};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic message from linting.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub file: PathBuf,
    /// Path to the issue within the document (e.g., "/paths/<template>/get")
    pub path: String,
    pub message: String,
}

/// Result of linting a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Status of a linted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Error,
    Warning,
}

/// Result of linting a directory or set of files.
#[derive(Debug, Clone, Serialize)]
pub struct LintResult {
    pub path: PathBuf,
    pub files_checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub results: Vec<FileResult>,
}

impl LintResult {
    /// Returns true if all files passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }
}

/// Lint a file or directory.
///
/// If path is a directory, recursively finds all .json files.
/// If `strict` is true, warnings are treated as errors.
/// Returns aggregated results for all files.
pub fn lint(path: &Path, strict: bool) -> LintResult {
    let files = collect_document_files(path);
    let mut results = Vec::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;

    for file in &files {
        let file_result = lint_file(file, path);
        total_errors += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        total_warnings += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        results.push(file_result);
    }

    let failed = results
        .iter()
        .filter(|r| {
            if strict {
                r.status != FileStatus::Ok
            } else {
                r.status == FileStatus::Error
            }
        })
        .count();

    LintResult {
        path: path.to_path_buf(),
        files_checked: files.len(),
        passed: files.len() - failed,
        failed,
        errors: total_errors,
        warnings: total_warnings,
        results,
    }
}

/// Lint a single document file.
pub fn lint_file(file: &Path, base_path: &Path) -> FileResult {
    let mut diagnostics = Vec::new();

    // Syntax first (E001)
    let raw: Value = match std::fs::read_to_string(file)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
    {
        Ok(v) => v,
        Err(e) => {
            diagnostics.push(diagnostic(
                Severity::Error,
                "E001",
                file,
                "/",
                format!("syntax error: {}", e),
            ));
            return finish(file, base_path, diagnostics);
        }
    };

    // Top-level shape (E002)
    let api: Api = match serde_json::from_value(raw) {
        Ok(api) => api,
        Err(e) => {
            diagnostics.push(diagnostic(
                Severity::Error,
                "E002",
                file,
                "/",
                format!("invalid document: {}", e),
            ));
            return finish(file, base_path, diagnostics);
        }
    };

    if api.host.is_empty() {
        diagnostics.push(diagnostic(
            Severity::Warning,
            "W001",
            file,
            "/",
            "document has no host".to_string(),
        ));
    }
    if api.schemes.is_empty() {
        diagnostics.push(diagnostic(
            Severity::Warning,
            "W002",
            file,
            "/",
            "document declares no schemes".to_string(),
        ));
    }

    for (template, item) in &api.paths {
        check_path_item(&api, template, item, file, &mut diagnostics);
    }

    finish(file, base_path, diagnostics)
}

/// Check one path item: every method payload must decode and every
/// parameter reference must resolve.
fn check_path_item(
    api: &Api,
    template: &str,
    item: &Value,
    file: &Path,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let item_path = format!("/paths/{}", template);

    let Some(methods) = item.as_object() else {
        diagnostics.push(diagnostic(
            Severity::Error,
            "E002",
            file,
            &item_path,
            "path item is not an object".to_string(),
        ));
        return;
    };

    for (method, payload) in methods {
        if method == PARAMETERS_KEY {
            continue;
        }
        let method_path = format!("{}/{}", item_path, method);

        if !HTTP_METHODS.contains(&method.to_ascii_lowercase().as_str()) {
            diagnostics.push(diagnostic(
                Severity::Warning,
                "W003",
                file,
                &method_path,
                format!(
                    "unknown method \"{}\": expected {}",
                    method,
                    HTTP_METHODS.join(", ")
                ),
            ));
        }

        // Search decodes this lazily at query time; lint decodes it now (E003)
        let operation: PathMethod = match serde_json::from_value(payload.clone()) {
            Ok(op) => op,
            Err(e) => {
                diagnostics.push(diagnostic(
                    Severity::Error,
                    "E003",
                    file,
                    &method_path,
                    format!("operation does not decode: {}", e),
                ));
                continue;
            }
        };

        for (i, parameter) in operation.parameters.iter().enumerate() {
            let Some(schema) = &parameter.schema else {
                continue;
            };
            let ref_path = format!("{}/parameters/{}/schema/$ref", method_path, i);

            if !schema.reference.starts_with(DEFINITIONS_PREFIX) {
                diagnostics.push(diagnostic(
                    Severity::Error,
                    "E004",
                    file,
                    &ref_path,
                    format!(
                        "reference \"{}\" lacks the {} prefix",
                        schema.reference, DEFINITIONS_PREFIX
                    ),
                ));
            }

            match api.definitions.get(schema.definition_name()) {
                None => {
                    diagnostics.push(diagnostic(
                        Severity::Error,
                        "E005",
                        file,
                        &ref_path,
                        format!("definition not found: {}", schema.definition_name()),
                    ));
                }
                Some(definition) if definition.example.is_empty() => {
                    diagnostics.push(diagnostic(
                        Severity::Warning,
                        "W004",
                        file,
                        &ref_path,
                        format!(
                            "definition \"{}\" has no example",
                            schema.definition_name()
                        ),
                    ));
                }
                Some(_) => {}
            }
        }
    }
}

fn diagnostic(
    severity: Severity,
    code: &str,
    file: &Path,
    path: &str,
    message: String,
) -> Diagnostic {
    Diagnostic {
        severity,
        code: code.to_string(),
        file: file.to_path_buf(),
        path: path.to_string(),
        message,
    }
}

fn finish(file: &Path, base_path: &Path, diagnostics: Vec<Diagnostic>) -> FileResult {
    let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
    let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);

    let status = if has_errors {
        FileStatus::Error
    } else if has_warnings {
        FileStatus::Warning
    } else {
        FileStatus::Ok
    };

    FileResult {
        file: file.strip_prefix(base_path).unwrap_or(file).to_path_buf(),
        status,
        diagnostics,
    }
}

/// Collect all .json files in a path (file or directory).
fn collect_document_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            return vec![path.to_path_buf()];
        }
        return vec![];
    }

    let mut files = Vec::new();
    collect_files_recursive(path, &mut files);
    files.sort();
    files
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files_recursive(&path, files);
        } else if path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path);
        }
    }
}
