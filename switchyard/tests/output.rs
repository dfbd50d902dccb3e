//! Consuming router events through a channel output.

use futures::StreamExt;
use switchyard::{Connectable, Connection, EffectRouterBuilder, output::channel};

mod common;
use common::{AppEffect, AppEvent, Save, Toast, save, toast};

#[tokio::test]
async fn test_channel_output_streams_events() {
    let router = EffectRouterBuilder::<AppEffect, AppEvent>::new()
        .add_function(|save: &Save| AppEvent::Saved(save.id))
        .unwrap()
        .add_function(|toast: &Toast| AppEvent::Shown(toast.text.clone()))
        .unwrap()
        .build();

    let (output, mut events) = channel();
    let mut connection = router.connect(output).unwrap();

    connection.accept(&save(7)).unwrap();
    assert_eq!(events.next().await, Some(AppEvent::Saved(7)));

    connection.accept(&toast("ready")).unwrap();
    connection.accept(&save(8)).unwrap();
    connection.dispose().unwrap();
    drop(connection);

    let rest: Vec<AppEvent> = events.collect().await;
    assert_eq!(
        rest,
        vec![AppEvent::Shown("ready".to_string()), AppEvent::Saved(8)]
    );
}
