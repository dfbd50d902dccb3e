//! Registration-time validation of the router builder.

use switchyard::{
    AcceptError, ConfigurationError, Connectable, Connection, EffectRouterBuilder, EffectTag,
    sink,
};

mod common;
use common::{AppEffect, AppEvent, Dialog, Ghost, Increment, Log, Save, Toast, UiEffect, log};

const UI: EffectTag = EffectTag::new(&["ui"]);
const TOAST: EffectTag = EffectTag::new(&["ui", "toast"]);

fn builder() -> EffectRouterBuilder<AppEffect, AppEvent> {
    EffectRouterBuilder::named("app")
}

#[test]
fn test_unrelated_tags_register() {
    let router = builder()
        .add_action::<Increment, _>(|| {})
        .unwrap()
        .add_consumer(|_: &Log| {})
        .unwrap()
        .add_function(|save: &Save| AppEvent::Saved(save.id))
        .unwrap()
        .add_consumer(|_: &Toast| {})
        .unwrap()
        .add_consumer(|_: &Dialog| {})
        .unwrap()
        .add_action::<Ghost, _>(|| {})
        .unwrap()
        .build();

    assert_eq!(router.name(), "app");
    assert_eq!(router.tags().len(), 6);
    assert!(router.tags().contains(&TOAST));
}

#[test]
fn test_equal_tags_collide() {
    let result = builder()
        .add_action::<Log, _>(|| {})
        .unwrap()
        .add_consumer(|_: &Log| {});

    match result {
        Err(ConfigurationError::Collision { tag, existing }) => {
            assert_eq!(tag, EffectTag::new(&["log"]));
            assert_eq!(existing, tag);
        }
        Ok(_) => panic!("registering `log` twice should fail"),
    }
}

#[test]
fn test_descendant_after_ancestor_collides() {
    let result = builder()
        .add_consumer(|_: &UiEffect| {})
        .unwrap()
        .add_consumer(|_: &Toast| {});

    assert!(matches!(
        result,
        Err(ConfigurationError::Collision { tag, existing }) if tag == TOAST && existing == UI
    ));
}

#[test]
fn test_ancestor_after_descendant_collides() {
    let result = builder()
        .add_consumer(|_: &Toast| {})
        .unwrap()
        .add_consumer(|_: &UiEffect| {});

    assert!(matches!(
        result,
        Err(ConfigurationError::Collision { tag, existing }) if tag == UI && existing == TOAST
    ));
}

#[test]
fn test_collision_is_checked_against_every_binding() {
    let result = builder()
        .add_action::<Increment, _>(|| {})
        .unwrap()
        .add_consumer(|_: &Dialog| {})
        .unwrap()
        .add_action::<Save, _>(|| {})
        .unwrap()
        .add_action::<UiEffect, _>(|| {});

    let Err(err) = result else {
        panic!("`ui` should collide with `ui::dialog`");
    };
    assert_eq!(
        err.to_string(),
        "effect tags must not subsume each other: `ui` collides with existing `ui::dialog`"
    );
}

#[test]
fn test_empty_router_reports_every_value() {
    let router = builder().build();
    assert!(router.tags().is_empty());

    let mut connection = router.connect(sink(|_: AppEvent| {})).unwrap();

    for effect in [AppEffect::Increment(Increment), log("hello")] {
        let tag = switchyard::Effect::tag(&effect);
        match connection.accept(&effect) {
            Err(AcceptError::Unrouted { tag: reported }) => assert_eq!(reported, tag),
            other => panic!("expected unrouted error, got {other:?}"),
        }
    }

    connection.dispose().unwrap();
}
