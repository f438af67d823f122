//! CLI integration tests for the swagger-probe binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("swagger-probe"))
}

// Helper to create a temp document file
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const PETSTORE: &str = r##"{
    "host": "petstore.example.com",
    "schemes": ["http", "https"],
    "paths": {
        "/pets/{id}": {
            "get": {
                "parameters": [
                    { "schema": { "$ref": "#/definitions/Pet" } }
                ]
            }
        },
        "/pets": {
            "post": {
                "parameters": [
                    { "schema": { "$ref": "#/definitions/NewPet" } },
                    { "schema": { "$ref": "#/definitions/Pet" } }
                ]
            }
        }
    },
    "definitions": {
        "Pet": { "example": "{\"id\":1}" },
        "NewPet": { "example": "{\"name\":\"rex\"}" }
    }
}"##;

mod domain_command {
    use super::*;

    #[test]
    fn prints_secure_base_url() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);

        cmd()
            .args(["domain", spec.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::diff("https://petstore.example.com\n"));
    }

    #[test]
    fn missing_file_exits_3() {
        cmd()
            .args(["domain", "/nonexistent/swagger.json"])
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn invalid_json_exits_2() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", "{ nope }");

        cmd()
            .args(["domain", spec.to_str().unwrap()])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("invalid JSON"));
    }
}

mod search_command {
    use super::*;

    #[test]
    fn prints_decoded_operation() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);

        cmd()
            .args(["search", spec.to_str().unwrap(), "GET", "/pets/42"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#/definitions/Pet"));
    }

    #[test]
    fn method_lookup_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);

        cmd()
            .args(["search", spec.to_str().unwrap(), "get", "/pets/42"])
            .assert()
            .success();
    }

    #[test]
    fn pretty_output() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);

        cmd()
            .args(["search", spec.to_str().unwrap(), "GET", "/pets/42", "--pretty"])
            .assert()
            .success()
            // Pretty output has newlines and indentation
            .stdout(predicate::str::contains("{\n"));
    }

    #[test]
    fn unknown_route_exits_1() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);

        cmd()
            .args(["search", spec.to_str().unwrap(), "PUT", "/pets/42"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("not found: PUT /pets/42"));
    }

    #[test]
    fn undecodable_operation_exits_2() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(
            &dir,
            "swagger.json",
            r#"{"paths": {"/pets": {"get": {"parameters": "bad"}}}}"#,
        );

        cmd()
            .args(["search", spec.to_str().unwrap(), "GET", "/pets"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("cannot decode operation"));
    }
}

mod examples_command {
    use super::*;

    #[test]
    fn one_body_per_line() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);

        cmd()
            .args(["examples", spec.to_str().unwrap(), "POST", "/pets"])
            .assert()
            .success()
            .stdout(predicate::str::diff("{\"name\":\"rex\"}\n{\"id\":1}\n"));
    }

    #[test]
    fn json_array_output() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);

        cmd()
            .args(["examples", spec.to_str().unwrap(), "GET", "/pets/42", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"["{\"id\":1}"]"#));
    }

    #[test]
    fn output_file() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);
        let output = dir.path().join("bodies.txt");

        cmd()
            .args([
                "examples",
                spec.to_str().unwrap(),
                "GET",
                "/pets/42",
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        // Verify file was written
        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "{\"id\":1}");
    }

    #[test]
    fn no_examples_exits_1() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(
            &dir,
            "swagger.json",
            r#"{"paths": {"/health": {"get": {}}}}"#,
        );

        cmd()
            .args(["examples", spec.to_str().unwrap(), "GET", "/health"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("example not found"));
    }

    #[test]
    fn unknown_route_exits_1() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);

        cmd()
            .args(["examples", spec.to_str().unwrap(), "DELETE", "/pets/42"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("not found: DELETE /pets/42"));
    }
}

mod lint_command {
    use super::*;

    #[test]
    fn clean_document_passes() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);

        cmd()
            .args(["lint", spec.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("all passed"));
    }

    #[test]
    fn broken_reference_fails() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(
            &dir,
            "swagger.json",
            r##"{
                "host": "h", "schemes": ["https"],
                "paths": { "/pets": { "get": { "parameters": [
                    { "schema": { "$ref": "#/definitions/Ghost" } }
                ] } } }
            }"##,
        );

        cmd()
            .args(["lint", spec.to_str().unwrap()])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("definition not found: Ghost"));
    }

    #[test]
    fn warnings_pass_unless_strict() {
        let dir = TempDir::new().unwrap();
        // No host, no schemes: warnings only
        let spec = write_temp_file(&dir, "swagger.json", r#"{"paths": {}}"#);

        cmd()
            .args(["lint", spec.to_str().unwrap()])
            .assert()
            .success();

        cmd()
            .args(["lint", spec.to_str().unwrap(), "--strict"])
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn json_format() {
        let dir = TempDir::new().unwrap();
        let spec = write_temp_file(&dir, "swagger.json", PETSTORE);

        cmd()
            .args(["lint", spec.to_str().unwrap(), "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""files_checked": 1"#));
    }

    #[test]
    fn lints_a_directory() {
        let dir = TempDir::new().unwrap();
        write_temp_file(&dir, "good.json", PETSTORE);
        write_temp_file(&dir, "bad.json", "{ nope }");

        cmd()
            .args(["lint", dir.path().to_str().unwrap()])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("2 files checked"));
    }

    #[test]
    fn missing_path_exits_2() {
        cmd()
            .args(["lint", "/nonexistent/dir"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("path not found"));
    }
}
