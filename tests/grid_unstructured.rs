use xdmf::prelude::*;

fn dataset(path: &str, shape: Vec<usize>, dtype: Dtype) -> DatasetMeta {
    DatasetMeta::new("tmp.h5".into(), path.into(), shape, dtype)
}

#[test]
fn unstructured_grid_document() {
    let coor = dataset("/coor", vec![6, 2], Dtype::Float { bytes: 8 });
    let conn = dataset(
        "/conn",
        vec![2, 4],
        Dtype::Int {
            signed: true,
            bytes: 4,
        },
    );
    let stress = dataset("/stress", vec![2], Dtype::Float { bytes: 8 });

    let target = std::env::temp_dir().join("xdmf_grid_unstructured.xdmf");

    let mut grid = Scoped::new(&target, Grid::default());
    grid.extend(unstructured(&coor, &conn, ElementType::Quadrilateral).unwrap());
    grid.push(Field::attribute(&stress, AttributeCenter::Cell).unwrap());
    grid.finish().unwrap();

    let expected = r#"<?xml version="1.0"?>
<Xdmf Version="3.0">
    <Domain>
        <Grid Name="Grid">
            <Geometry GeometryType="XY">
                <DataItem Dimensions="6 2" NumberType="Float" Precision="8" Format="HDF">tmp.h5:/coor</DataItem>
            </Geometry>
            <Topology NumberOfElements="2" TopologyType="Quadrilateral">
                <DataItem Dimensions="2 4" NumberType="Int" Precision="4" Format="HDF">tmp.h5:/conn</DataItem>
            </Topology>
            <Attribute AttributeType="Scalar" Center="Cell" Name="/stress">
                <DataItem Dimensions="2" NumberType="Float" Precision="8" Format="HDF">tmp.h5:/stress</DataItem>
            </Attribute>
        </Grid>
    </Domain>
</Xdmf>"#;

    let output = std::fs::read_to_string(&target).unwrap();
    std::fs::remove_file(&target).unwrap();

    assert_eq!(output, expected);
}
