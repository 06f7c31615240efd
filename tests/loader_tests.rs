use gapic_metadata::{catalog, loader, registry, ClientVariant};
use std::fs;

#[test]
fn round_trip_is_structurally_equal() {
    let meta = catalog::database_admin();
    let json = loader::to_json_string(meta).expect("serialize");
    let back = loader::from_str(&json).expect("reparse");
    assert_eq!(*meta, back);

    // Key order differences in the source must not matter.
    let reordered = r#"{
        "schema": "1.0",
        "services": {"Svc": {"clients": {
            "grpc": {"libraryClient": "SvcClient", "rpcs": {"DoThing": {"methods": ["do_thing"]}}},
            "grpc-async": {"libraryClient": "SvcAsyncClient", "rpcs": {"DoThing": {"methods": ["do_thing"]}}},
            "rest": {"libraryClient": "SvcClient", "rpcs": {"DoThing": {"methods": ["do_thing"]}}}
        }}},
        "protoPackage": "acme.svc.v1",
        "libraryPackage": "acme.cloud.svc_v1",
        "language": "python",
        "comment": ""
    }"#;
    let meta = loader::from_str(reordered).expect("parse reordered");
    assert_eq!(meta.resolve("Svc", ClientVariant::Grpc, "DoThing").unwrap(), "do_thing");
}

#[test]
fn from_path_reports_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").expect("write");
    let e = loader::from_path(&path).unwrap_err();
    assert_eq!(e.code_str(), "parse_error");
    assert!(e.message().contains("broken.json"), "message was: {}", e.message());

    let e = loader::from_path(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(e.code_str(), "io_error");
}

#[test]
fn load_dir_collects_only_metadata_tables() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).expect("mkdir");
    fs::write(nested.join("database_admin.json"), catalog::DATABASE_ADMIN_JSON)
        .expect("write metadata");
    fs::write(dir.path().join("package.json"), r#"{"name": "not-a-table"}"#)
        .expect("write other json");
    fs::write(dir.path().join("notes.txt"), "plain text").expect("write text");

    let tables = loader::load_dir(dir.path()).expect("load_dir");
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].library_package, "google.cloud.spanner_admin_database_v1");
}

#[test]
fn load_dir_missing_root_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let e = loader::load_dir(dir.path().join("nope")).unwrap_err();
    assert_eq!(e.code_str(), "io_error");
}

#[test]
fn registry_serves_loaded_tables() {
    let json = catalog::DATABASE_ADMIN_JSON
        .replace("google.cloud.spanner_admin_database_v1", "example.cloud.spanner_copy_v1");
    let meta = loader::from_str(&json).expect("parse");
    registry::register(meta);

    let m = registry::resolve(
        "example.cloud.spanner_copy_v1",
        "DatabaseAdmin",
        ClientVariant::GrpcAsync,
        "RestoreDatabase",
    )
    .unwrap();
    assert_eq!(m, "restore_database");

    // Bundled default stays available alongside.
    let m = registry::resolve(
        "google.cloud.spanner_admin_database_v1",
        "DatabaseAdmin",
        ClientVariant::Grpc,
        "DropDatabase",
    )
    .unwrap();
    assert_eq!(m, "drop_database");
}
