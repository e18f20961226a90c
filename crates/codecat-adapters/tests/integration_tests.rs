//! Integration tests for codecat-adapters.
//!
//! The full collect workflow is exercised twice: against real directories
//! (`LocalFilesystem` + tempfile) and against the in-memory double
//! (`MemoryFilesystem`).

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use codecat_adapters::{LocalFilesystem, MemoryFilesystem};
use codecat_core::{
    application::{CollectService, ports::SourceTree},
    domain::CollectionFilter,
    error::{CollectError, CollectResult},
};

fn local_service() -> CollectService {
    CollectService::new(Box::new(LocalFilesystem::new()), Box::new(LocalFilesystem::new()))
}

/// Build the reference tree:
/// `a/Foo.cs`, `a/obj/Bar.cs`, `b/widget.dart`, `b/Migrations/old.cs`.
fn scenario_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir_all(root.join("a/obj")).unwrap();
    fs::create_dir_all(root.join("b/Migrations")).unwrap();
    fs::write(root.join("a/Foo.cs"), "class Foo {}").unwrap();
    fs::write(root.join("a/obj/Bar.cs"), "class Bar {}").unwrap();
    fs::write(root.join("b/widget.dart"), "void main(){}").unwrap();
    fs::write(root.join("b/Migrations/old.cs"), "class Old {}").unwrap();

    temp
}

fn headers(bundle: &str) -> Vec<&str> {
    bundle
        .lines()
        .filter(|l| l.starts_with("// === Arquivo: "))
        .collect()
}

#[test]
fn scenario_collects_exactly_two_records() {
    let temp = scenario_tree();
    let output = temp.path().join("all_code.txt");

    let report = local_service().collect(temp.path(), &output).unwrap();
    assert_eq!(report.collected, 2);
    assert_eq!(report.failed, 0);

    let bundle = fs::read_to_string(&output).unwrap();
    let headers = headers(&bundle);
    assert_eq!(headers.len(), 2);
    assert!(headers[0].contains("a/Foo.cs") || headers[0].contains(r"a\Foo.cs"));
    assert!(headers[1].contains("b/widget.dart") || headers[1].contains(r"b\widget.dart"));

    assert!(bundle.contains("class Foo {}"));
    assert!(bundle.contains("void main(){}"));
    // pruned subtrees leave no trace, not even a header
    assert!(!bundle.contains("Bar.cs"));
    assert!(!bundle.contains("old.cs"));
}

#[test]
fn pruning_is_absolute_even_for_nested_matches() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("obj/nested/deeper")).unwrap();
    fs::write(root.join("obj/nested/deeper/Hidden.cs"), "hidden").unwrap();
    fs::write(root.join("Visible.cs"), "visible").unwrap();

    let output = root.join("out.txt");
    let report = local_service().collect(root, &output).unwrap();

    assert_eq!(report.collected, 1);
    let bundle = fs::read_to_string(&output).unwrap();
    assert!(bundle.contains("Visible.cs"));
    assert!(!bundle.contains("Hidden.cs"));
}

#[test]
fn extension_match_is_case_insensitive_on_disk() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("UPPER.CS"), "upper").unwrap();
    fs::write(temp.path().join("Widget.Dart"), "mixed").unwrap();
    fs::write(temp.path().join("lower.md"), "no").unwrap();

    let output = temp.path().join("out.txt");
    let report = local_service().collect(temp.path(), &output).unwrap();

    assert_eq!(report.collected, 2);
}

#[test]
fn round_trip_preserves_content_verbatim() {
    let temp = TempDir::new().unwrap();
    let content = "class Foo\n{\n\tint x;   \n\n}\n";
    fs::write(temp.path().join("Foo.cs"), content).unwrap();

    let output = temp.path().join("out.txt");
    local_service().collect(temp.path(), &output).unwrap();

    let bundle = fs::read_to_string(&output).unwrap();
    let after_header = bundle.split_once(" ===\n").unwrap().1;
    let body = after_header.strip_suffix("\n\n").unwrap();
    assert_eq!(body, content);
}

#[test]
fn two_runs_produce_byte_identical_output() {
    let temp = scenario_tree();
    let out_a = temp.path().join("first.txt");
    let out_b = temp.path().join("second.txt");

    let service = local_service();
    service.collect(temp.path(), &out_a).unwrap();
    service.collect(temp.path(), &out_b).unwrap();

    assert_eq!(fs::read(&out_a).unwrap(), fs::read(&out_b).unwrap());
}

#[test]
fn unreadable_file_gets_inline_error_record() {
    let temp = TempDir::new().unwrap();
    // invalid UTF-8 makes read_to_string fail regardless of the user the
    // tests run as (chmod tricks don't survive root)
    fs::write(temp.path().join("Broken.cs"), [0xff, 0xfe, 0x00, 0x01]).unwrap();
    fs::write(temp.path().join("Fine.cs"), "fine").unwrap();

    let output = temp.path().join("out.txt");
    let report = local_service().collect(temp.path(), &output).unwrap();

    assert_eq!(report.collected, 1);
    assert_eq!(report.failed, 1);

    let bundle = fs::read_to_string(&output).unwrap();
    assert!(bundle.contains("// ERRO AO LER"));
    assert!(bundle.contains("Broken.cs"));
    // no partial or garbled content leaked into the bundle
    assert!(bundle.contains("fine"));
}

#[test]
fn missing_root_yields_empty_bundle() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out.txt");

    let report = local_service()
        .collect(&temp.path().join("does-not-exist"), &output)
        .unwrap();

    assert_eq!(report.total(), 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn file_as_root_yields_empty_bundle() {
    let temp = TempDir::new().unwrap();
    let file_root = temp.path().join("plain.cs");
    fs::write(&file_root, "not a dir").unwrap();

    let output = temp.path().join("out.txt");
    let report = local_service().collect(&file_root, &output).unwrap();
    assert_eq!(report.total(), 0);
}

#[test]
fn unwritable_output_is_fatal() {
    let temp = scenario_tree();
    let output = temp.path().join("missing-parent/out.txt");

    let err = local_service().collect(temp.path(), &output).unwrap_err();
    assert!(matches!(err, CollectError::Application(_)));
    assert!(!output.exists());
}

#[test]
fn walk_order_is_sorted_by_name() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Zeta.cs"), "z").unwrap();
    fs::write(temp.path().join("Alpha.cs"), "a").unwrap();
    fs::write(temp.path().join("Mid.cs"), "m").unwrap();

    let walked: CollectResult<Vec<_>> =
        LocalFilesystem::new().walk(temp.path(), &CollectionFilter::default());
    let names: Vec<String> = walked
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, ["Alpha.cs", "Mid.cs", "Zeta.cs"]);
}

// ── MemoryFilesystem ──────────────────────────────────────────────────────────

fn memory_service(fs: &MemoryFilesystem) -> CollectService {
    CollectService::new(Box::new(fs.clone()), Box::new(fs.clone()))
}

#[test]
fn memory_full_workflow() {
    let fs = MemoryFilesystem::new();
    fs.add_file("src/a/Foo.cs", "class Foo {}");
    fs.add_file("src/a/obj/Bar.cs", "class Bar {}");
    fs.add_file("src/b/widget.dart", "void main(){}");
    fs.add_file("src/readme.md", "prose");

    let report = memory_service(&fs)
        .collect(Path::new("src"), Path::new("all_code.txt"))
        .unwrap();

    assert_eq!(report.collected, 2);
    let bundle = fs.output(Path::new("all_code.txt")).unwrap();
    assert_eq!(
        bundle,
        "// === Arquivo: src/a/Foo.cs ===\nclass Foo {}\n\n\
         // === Arquivo: src/b/widget.dart ===\nvoid main(){}\n\n"
    );
}

#[test]
fn memory_read_failure_injection() {
    let fs = MemoryFilesystem::new();
    fs.add_file("src/ok.cs", "ok");
    fs.mark_unreadable("src/locked.cs");

    let report = memory_service(&fs)
        .collect(Path::new("src"), Path::new("out.txt"))
        .unwrap();

    assert_eq!(report.collected, 1);
    assert_eq!(report.failed, 1);

    let bundle = fs.output(Path::new("out.txt")).unwrap();
    assert!(bundle.contains("// ERRO AO LER src/locked.cs: permission denied"));
}

#[test]
fn memory_output_is_truncated_between_runs() {
    let fs = MemoryFilesystem::new();
    fs.add_file("src/One.cs", "one");

    let service = memory_service(&fs);
    service
        .collect(Path::new("src"), Path::new("out.txt"))
        .unwrap();
    service
        .collect(Path::new("src"), Path::new("out.txt"))
        .unwrap();

    let bundle = fs.output(Path::new("out.txt")).unwrap();
    // one record, not two: the second run replaced the first
    assert_eq!(headers(&bundle).len(), 1);
}

#[test]
fn memory_pruning_matches_local_semantics() {
    let fs = MemoryFilesystem::new();
    fs.add_file("src/Migrations/2024_init.cs", "migration");
    fs.add_file("src/App.cs", "app");

    let walked = fs
        .walk(Path::new("src"), &CollectionFilter::default())
        .unwrap();

    assert_eq!(walked, vec![std::path::PathBuf::from("src/App.cs")]);
}

#[test]
fn memory_root_name_is_exempt_from_pruning() {
    // collecting *inside* a directory named like an excluded one still works
    let fs = MemoryFilesystem::new();
    fs.add_file("obj/Main.cs", "main");

    let walked = fs
        .walk(Path::new("obj"), &CollectionFilter::default())
        .unwrap();
    assert_eq!(walked.len(), 1);
}
