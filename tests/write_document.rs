use xdmf::prelude::*;

#[test]
fn document_references_datasets_by_location() {
    let coor = DatasetMeta::new(
        "file.h5".into(),
        "/coor".into(),
        vec![4, 2],
        Dtype::Float { bytes: 8 },
    );
    let conn = DatasetMeta::new(
        "file.h5".into(),
        "/conn".into(),
        vec![1, 4],
        Dtype::Int {
            signed: true,
            bytes: 4,
        },
    );

    let mut grid = Grid::default();
    grid.extend(unstructured(&coor, &conn, ElementType::Quadrilateral).unwrap());

    let target = std::env::temp_dir().join("xdmf_write_document.xdmf");
    xdmf::write(&target, &grid).unwrap();

    let output = std::fs::read_to_string(&target).unwrap();
    std::fs::remove_file(&target).unwrap();

    assert!(output.starts_with("<?xml version=\"1.0\"?>\n<Xdmf"));
    assert!(output.ends_with("</Xdmf>"));
    assert!(output.contains("<Domain>"));
    assert!(output.contains(r#"<Geometry GeometryType="XY">"#));
    assert!(output.contains(r#"<Topology NumberOfElements="1" TopologyType="Quadrilateral">"#));
    assert!(output.contains(">file.h5:/coor</DataItem>"));
    assert!(output.contains(">file.h5:/conn</DataItem>"));
}

#[test]
fn unsupported_dataset_type_produces_no_file() {
    let coor = DatasetMeta::new(
        "file.h5".into(),
        "/coor".into(),
        vec![4, 2],
        Dtype::Complex { bytes: 16 },
    );

    let target = std::env::temp_dir().join("xdmf_write_rejected.xdmf");
    let scoped = Scoped::new(&target, Grid::default());

    let err = Field::geometry(&coor).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { .. }));
    assert!(err.to_string().contains("/coor"));

    // composition failed before finish, so nothing was written
    drop(scoped);
    assert!(!target.exists());
}

#[test]
fn write_fails_on_missing_parent_directory() {
    let target = std::env::temp_dir()
        .join("xdmf_no_such_dir")
        .join("out.xdmf");

    let err = xdmf::write(&target, &Grid::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
