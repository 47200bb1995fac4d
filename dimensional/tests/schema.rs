/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

#[cfg(feature = "schemars")]
#[test]
fn vector_schema() {
    use dimensional::DimensionVector;
    use schemars::schema_for;
    use serde_json::json;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(DimensionVector)).unwrap(),
    )
    .unwrap();

    [json!([-2, 1, 1, 0, 0, 0, 0]), json!([0, 0, 0, 0, 0, 0, 0])]
        .iter()
        .for_each(|example| {
            schema.validate(example).expect("schema validation failed");
        });

    [json!([1, 2, 3]), json!({ "Time": 1 }), json!("L/T")]
        .iter()
        .for_each(|example| {
            assert!(!schema.is_valid(example), "accepted {}", example);
        });
}

#[cfg(feature = "schemars")]
#[test]
fn base_dimension_schema() {
    use dimensional::BaseDimension;
    use schemars::schema_for;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(BaseDimension)).unwrap(),
    )
    .unwrap();

    BaseDimension::LIST.iter().for_each(|dimension| {
        let example = serde_json::to_value(dimension).unwrap();
        schema.validate(&example).expect("schema validation failed");
    });
}
