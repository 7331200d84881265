//! End-to-end tests over the public catalog API, exercising the paths a
//! benchmark driver takes: expand shorthand, look up routines and presets,
//! then generate keys for the planned runs.

use wtree_bench_catalog::{
    for_generator_id, key_counts, preset_for, routine_for, size_for, size_vector, CatalogError,
    CatalogReport, KeySpace, ReportFormat, RoutineMetadata, RunPlan,
};

#[test]
fn size_vector_matches_documented_example() {
    let v = size_vector(3, 16);
    assert_eq!(v.len(), 13);
    assert_eq!(v, key_counts());
    assert_eq!(v[0], 8);
    assert_eq!(*v.last().unwrap(), 32768);
}

#[test]
fn driver_expansion_path() {
    // A driver invoked with "a u m" enumerates 3 runs of 5M keys each.
    let plan = RunPlan::expand("a", "u", "m").unwrap();
    assert_eq!(plan.size, 5_000_000);
    assert_eq!(plan.runs().count(), 3);

    let routine = routine_for("full").unwrap();
    assert_eq!(routine.steps(), 6);
}

#[test]
fn routine_construction_contract() {
    let ok = RoutineMetadata::new(
        "mma",
        vec!["a".into(), "b".into(), "c".into()],
        vec!["a".into(), "b".into(), "c".into()],
        vec![true, false, true],
    );
    assert_eq!(ok.unwrap().steps(), 3);

    let err = RoutineMetadata::new(
        "mma",
        vec!["a".into(), "b".into(), "c".into()],
        vec!["a".into(), "b".into(), "c".into()],
        vec![true, false],
    );
    assert!(matches!(
        err.unwrap_err(),
        CatalogError::InvariantViolation { .. }
    ));
}

#[test]
fn preset_lookup_matches_documented_example() {
    let preset = preset_for("010").unwrap();
    assert_eq!(
        preset.knob("TARGETBYTES").unwrap(),
        &[64, 128, 256, 512, 1024]
    );
    assert!(matches!(
        preset_for("999").unwrap_err(),
        CatalogError::UnknownBuildId { .. }
    ));
}

#[test]
fn unknown_size_code_is_terminal() {
    assert!(size_for("zz").is_err());
}

#[test]
fn planned_runs_can_generate_keys() {
    let max_key = 1_000_000;
    let plan = RunPlan::expand("s", "a", "s").unwrap();
    for (_width, gen_id) in plan.runs() {
        let mut gen = for_generator_id(gen_id, 112233, max_key).unwrap();
        let mut space = KeySpace::new(max_key);
        for _ in 0..100 {
            let key = space.fresh_key(gen.as_mut());
            assert!(key <= max_key);
            assert!(space.contains(key));
        }
        assert_eq!(space.annotated(), 100);
    }
}

#[test]
fn report_covers_catalog_in_both_formats() {
    let report = CatalogReport::new();
    let output = report.generate(ReportFormat::Both);

    let json = output.json.unwrap();
    let md = output.markdown.unwrap();
    for code in ["\"s\"", "\"n\"", "\"m\"", "\"b\"", "\"l\"", "\"xs\"", "\"xl\""] {
        assert!(json.contains(code));
    }
    assert!(md.contains("| m | 5000000 |"));
    assert!(md.contains("### full (6 steps)"));
    assert!(md.contains("### Build 010"));
}
