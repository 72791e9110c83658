//! End-to-end rendering of specification documents.

use calql::prelude::*;
use pretty_assertions::assert_eq;

const PROFILE_SPEC: &str = r#"{
  "preprocess_ops": [
    {
      "target": "time.sec",
      "op": { "op": { "name": "scale" }, "args": ["time.duration", "1e-6"] },
      "cond": { "attr_name": "time.duration", "op": "exist" }
    }
  ],
  "aggregate": { "list": [
    { "op": { "name": "sum" }, "args": ["time.sec"] },
    { "op": { "name": "count" } }
  ] },
  "select": { "selection": { "list": ["function", "time.sec"] }, "use_path": true },
  "groupby": { "selection": { "list": ["function"] }, "use_path": true },
  "filter": { "list": [ { "attr_name": "mpi.rank", "op": "equal", "value": "0" } ] },
  "sort": { "list": [ { "attribute": "time.sec", "order": "descending" } ] },
  "format": { "user": { "formatter": { "name": "tree" }, "kwargs": { "column-width": "48" } } },
  "aliases": { "time.sec": "Time" },
  "units": { "time.sec": "sec" }
}"#;

#[test]
fn test_profile_document() {
    let spec = calql::load::from_json_str(PROFILE_SPEC).unwrap();
    assert_eq!(
        calql::to_query_string(&spec),
        "let time.sec=scale(time.duration, 1e-6) if time.duration \
         aggregate sum(time.sec), count() \
         select path, function, time.sec as Time unit sec \
         group by path, function \
         where mpi.rank=0 \
         order by time.sec DESC \
         format tree(column-width=48)"
    );
}

#[test]
fn test_document_roundtrips_through_serde() {
    let spec = calql::load::from_json_str(PROFILE_SPEC).unwrap();
    let json = serde_json::to_string(&spec).unwrap();
    let again = calql::load::from_json_str(&json).unwrap();
    assert_eq!(spec, again);
    assert_eq!(spec.to_string(), again.to_string());
}

#[test]
fn test_toml_document() {
    let spec = calql::load::from_toml_str(
        r#"
        aggregate = { list = [ { op = { name = "inclusive_sum" }, args = ["time"] } ] }

        [select]
        selection = "all"

        [format.user]
        formatter = { name = "json" }
        "#,
    )
    .unwrap();
    assert_eq!(
        spec.to_string(),
        " aggregate inclusive_sum(time) select * format json"
    );
}

#[test]
fn test_catalog_constructors() {
    let spec = QuerySpec::new()
        .with_preprocess(PreprocessSpec::by_name("t", "truncate", ["time", "10"]).unwrap())
        .with_aggregate(AggregationOp::by_name("max", ["t"]).unwrap());
    assert_eq!(spec.to_string(), "let t=truncate(time, 10) aggregate max(t)");
    assert_eq!(
        spec.preprocess_ops[0].op.op.max_args,
        2,
        "catalog signature is attached"
    );

    let err = AggregationOp::by_name("median", ["t"]).unwrap_err();
    assert!(matches!(err, SpecError::UnknownFunction(name) if name == "median"));
}

#[test]
fn test_config_side_tables() {
    let config = Config::from_toml_str(
        r#"
        [units]
        "time.sec" = "s"
        "#,
    )
    .unwrap();
    let mut spec = QuerySpec::new().with_select(AttributeClause::list(["time.sec"]));
    config.apply(&mut spec);
    assert_eq!(spec.to_string(), " select time.sec unit s");
}

#[test]
fn test_concurrent_rendering() {
    let spec = calql::load::from_json_str(PROFILE_SPEC).unwrap();
    let expected = spec.to_string();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| spec.to_string())).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
