//! Declaring delegations through the entry point, the registry, and
//! serialized configuration.

use oxide_delegate::{
    DelegateAttributes, DelegateError, DelegateOptions, Delegation, DelegationPlan,
    DelegationRegistry, Delegator, MethodGroup, Prefix,
};

#[derive(Default)]
struct RecordingHost {
    plans: Vec<DelegationPlan>,
}

impl Delegator for RecordingHost {
    fn delegate(&mut self, plan: &DelegationPlan) {
        self.plans.push(plan.clone());
    }
}

struct User;
struct Post;

#[test]
fn entry_point_forwards_methods_and_passthrough_options() {
    let mut host = RecordingHost::default();
    host.delegate_attributes(
        &["email"],
        DelegateOptions::new().to("account").allow_nil(true),
    )
    .unwrap();

    let plan = &host.plans[0];
    assert_eq!(plan.methods.len(), 9);
    assert_eq!(plan.options.to, "account");
    assert_eq!(plan.options.allow_nil, Some(true));
}

#[test]
fn entry_point_rejects_invalid_declarations_before_forwarding() {
    let mut host = RecordingHost::default();

    let err = host
        .delegate_attributes(&[], DelegateOptions::new().to("account"))
        .unwrap_err();
    assert_eq!(err, DelegateError::NoAttributes);

    let err = host
        .delegate_attributes(&["email"], DelegateOptions::new())
        .unwrap_err();
    assert_eq!(err, DelegateError::MissingTarget);

    assert!(host.plans.is_empty());
}

#[test]
fn registry_collects_declarations_per_model() {
    let registry = DelegationRegistry::new()
        .register::<User>(&["email"], DelegateOptions::new().to("account"))
        .unwrap()
        .register::<User>(
            &["name"],
            DelegateOptions::new()
                .to("profile")
                .only(&[MethodGroup::Reader]),
        )
        .unwrap()
        .register::<Post>(
            &["status"],
            DelegateOptions::new()
                .to("revision")
                .skip(&[MethodGroup::Dirty]),
        )
        .unwrap();

    assert_eq!(registry.delegations().len(), 3);
    assert_eq!(registry.plans_for::<User>().len(), 2);
    assert_eq!(registry.plans_for::<User>()[1].methods, ["name"]);
    assert_eq!(
        registry.plans_for::<Post>()[0].methods,
        ["status", "status=", "status?", "status_before_type_cast"]
    );
}

#[test]
fn options_can_come_from_configuration_data() {
    let options: DelegateOptions = serde_json::from_str(
        r#"{
            "to": "profile",
            "allow_nil": true,
            "prefix": "owner",
            "skip": ["dirty", "type_cast"]
        }"#,
    )
    .unwrap();

    assert_eq!(options.prefix, Some(Prefix::Custom("owner".to_string())));

    let delegation = Delegation::new(&["name"], options).unwrap();
    assert_eq!(delegation.methods(), ["name", "name=", "name?"]);
}

#[test]
fn unknown_configuration_keys_are_inert() {
    let options: DelegateOptions = serde_json::from_str(
        r#"{"to": "account", "autosave": true, "inverse_of": "user"}"#,
    )
    .unwrap();

    let delegation = Delegation::new(&["email"], options).unwrap();
    assert_eq!(delegation.groups(), MethodGroup::ALL);
}

#[test]
fn plans_serialize_for_codegen_consumers() {
    let delegation = Delegation::new(
        &["status"],
        DelegateOptions::new()
            .to("child")
            .only(&[MethodGroup::Reader, MethodGroup::Predicate]),
    )
    .unwrap();

    let json = serde_json::to_value(delegation.plan()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "methods": ["status", "status?"],
            "options": {"to": "child"}
        })
    );
}
