//! Saving to a path and to a stream must produce identical bytes.

use std::fs;

use tandem::{
    Backend, DiagramBuilder, create_diagram,
    export::{Destination, save},
};

#[test]
fn test_path_and_stream_output_are_identical() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let builder = DiagramBuilder::default();

    for backend in Backend::ALL {
        let factory = builder.factory(backend).unwrap();
        let canvas = create_diagram(factory.as_ref()).unwrap();

        let path = dir.path().join(format!("diagram.{}", backend.file_extension()));
        save(canvas.as_ref(), Destination::Path(&path)).unwrap();

        let mut buffer = Vec::new();
        save(canvas.as_ref(), Destination::Stream(&mut buffer)).unwrap();

        let written = fs::read(&path).expect("Output file should exist");
        assert_eq!(written, buffer, "{backend} output differs");
        assert_eq!(String::from_utf8(buffer).unwrap(), canvas.render());
    }
}

#[test]
fn test_save_overwrites_existing_file() {
    let file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(file.path(), "stale content that is longer than a tiny canvas").unwrap();

    let builder = DiagramBuilder::default();
    builder
        .save(Backend::Grid, Destination::from(file.path()))
        .unwrap();

    let written = fs::read_to_string(file.path()).unwrap();
    assert!(!written.contains("stale"));
    assert_eq!(written, builder.render(Backend::Grid).unwrap());
}
