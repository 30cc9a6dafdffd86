//! End-to-end properties of the composition pass

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;

use canary_compose::{
    compose, failure_alarm_attributes, AlertTarget, AlertingPlan, CanaryName, CanarySpec,
    ComposeContext, ComposeError,
};
use proptest::prelude::*;

fn source_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut f = File::create(dir.path().join("index.js")).unwrap();
    writeln!(f, "exports.handler = async () => {{}};").unwrap();
    dir
}

fn ctx<'a>(is_dev: bool, tags: &'a BTreeMap<String, String>) -> ComposeContext<'a> {
    ComposeContext {
        app_name: "WebApp",
        environment: "Prod",
        prefix: "ACME",
        is_dev,
        tags,
    }
}

#[test]
fn oversized_name_fails_before_any_resource_is_emitted() {
    let dir = source_dir();
    let result = CanarySpec::new(
        "us-east-1",
        "123",
        "b1",
        None,
        dir.path(),
        "this-canary-name-is-far-too-long",
    );
    // the spec cannot even be constructed, so nothing was emitted
    assert!(matches!(result, Err(ComposeError::NameTooLong { .. })));
}

#[test]
fn storage_statement_is_never_broader_than_the_bucket() {
    let dir = source_dir();
    let tags = BTreeMap::new();
    let spec = CanarySpec::new(
        "us-east-1",
        "123",
        "b1",
        None,
        dir.path(),
        "abcde-prod-e2esi",
    )
    .unwrap();
    let plan = compose(&spec, &ctx(true, &tags)).unwrap();

    let policy = plan
        .find_by_name("ACME-abcde-prod-e2esi-ExecutionPolicy")
        .unwrap();
    let statements = policy.attributes["policy"]["Statement"].as_array().unwrap();
    let storage = &statements[2];
    assert_eq!(
        storage["Resource"],
        serde_json::json!(["arn:aws:s3:::b1", "arn:aws:s3:::b1/*"])
    );
}

#[test]
fn parameter_statement_matches_the_exact_template() {
    let dir = source_dir();
    let tags = BTreeMap::new();
    let spec = CanarySpec::new(
        "us-east-1",
        "123",
        "b1",
        None,
        dir.path(),
        "abcde-prod-e2esi",
    )
    .unwrap();
    let plan = compose(&spec, &ctx(true, &tags)).unwrap();

    let policy = plan
        .find_by_name("ACME-abcde-prod-e2esi-ExecutionPolicy")
        .unwrap();
    let statements = policy.attributes["policy"]["Statement"].as_array().unwrap();
    assert_eq!(
        statements[3]["Resource"],
        serde_json::json!(["arn:aws:ssm:us-east-1:123:parameter/WebApp/Prod/Canary/savedItems/*"])
    );
}

#[test]
fn non_production_alarm_actions_always_empty() {
    let dir = source_dir();
    let tags = BTreeMap::new();
    for target in [None, Some(AlertTarget::new("arn:aws:sns:us-east-1:123:t"))] {
        let spec = CanarySpec::new(
            "us-east-1",
            "123",
            "b1",
            target,
            dir.path(),
            "abcde-prod-e2esi",
        )
        .unwrap();
        let plan = compose(&spec, &ctx(true, &tags)).unwrap();
        let alarm = plan
            .find_by_name("abcde-prod-e2esi-SyntheticsFailed-Alarm")
            .unwrap();
        assert_eq!(alarm.attributes["alarm_actions"], serde_json::json!([]));
    }
}

#[test]
fn production_alarm_actions_contain_exactly_the_target() {
    let dir = source_dir();
    let tags = BTreeMap::new();
    let spec = CanarySpec::new(
        "us-east-1",
        "123",
        "b1",
        Some(AlertTarget::new("arn:aws:sns:us-east-1:123:critical")),
        dir.path(),
        "abcde-prod-e2esi",
    )
    .unwrap();
    let plan = compose(&spec, &ctx(false, &tags)).unwrap();
    let alarm = plan
        .find_by_name("abcde-prod-e2esi-SyntheticsFailed-Alarm")
        .unwrap();
    let actions = alarm.attributes["alarm_actions"].as_array().unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0], "arn:aws:sns:us-east-1:123:critical");
}

#[test]
fn two_passes_over_identical_source_yield_distinct_bundle_paths() {
    let dir = source_dir();
    let tags = BTreeMap::new();
    let spec = CanarySpec::new(
        "us-east-1",
        "123",
        "b1",
        None,
        dir.path(),
        "abcde-prod-e2esi",
    )
    .unwrap();

    let path_of = |plan: &canary_compose::ValidatedPlan| {
        plan.find_by_name("abcde-prod-e2esi-synthetic-zip-file")
            .unwrap()
            .attributes["output_path"]
            .as_str()
            .unwrap()
            .to_string()
    };

    let first = compose(&spec, &ctx(true, &tags)).unwrap();
    let second = compose(&spec, &ctx(true, &tags)).unwrap();
    assert_ne!(path_of(&first), path_of(&second));
}

proptest! {
    /// No input combination changes the missing-data policy.
    #[test]
    fn missing_data_policy_is_invariant(
        name in "[a-z][a-z0-9-]{0,19}",
        is_dev in any::<bool>(),
        target in proptest::option::of("[a-z0-9:/-]{1,40}"),
    ) {
        let alerting = match AlertingPlan::resolve(
            is_dev,
            target.map(AlertTarget::new).as_ref(),
        ) {
            Ok(plan) => plan,
            // production without a target is rejected before an alarm exists
            Err(_) => return Ok(()),
        };
        let attrs = failure_alarm_attributes(&name, &alerting, &BTreeMap::new());
        prop_assert_eq!(attrs.treat_missing_data, "notBreaching");
        prop_assert!(attrs.insufficient_data_actions.is_empty());
    }

    /// Every lowercased name over 21 characters is rejected at construction.
    #[test]
    fn long_names_always_rejected(name in "[a-zA-Z-]{22,40}") {
        prop_assert!(
            matches!(CanaryName::new(&name), Err(ComposeError::NameTooLong { .. })),
            "expected NameTooLong for {:?}",
            name
        );
    }

    /// Names at or under the limit always construct, lowercased.
    #[test]
    fn short_names_always_accepted(name in "[a-zA-Z-]{1,21}") {
        let constructed = CanaryName::new(&name).unwrap();
        prop_assert_eq!(constructed.as_str(), name.to_lowercase());
    }
}
