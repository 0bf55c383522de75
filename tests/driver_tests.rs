use notepad::kernel::event::{Event, Notification};
use notepad::kernel::reactor::Reactor;
use notepad::outputs::mock_audio::RecordingPlayer;
use notepad::{NotepadConfig, SpellCast, SpellData, SpellType};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

fn setup() -> Reactor<RecordingPlayer> {
    let config = NotepadConfig {
        spells: vec![SpellData::new(SpellType::Fire, "19", true)],
        ..NotepadConfig::default()
    };
    Reactor::with_player(config, RecordingPlayer::new()).unwrap()
}

#[tokio::test]
async fn test_run_forwards_notifications_until_input_closes() {
    let (tx, rx) = mpsc::channel(100);
    let (notify_tx, mut notify_rx) = mpsc::channel(100);
    let mut reactor = setup();

    for event in [Event::press(1), Event::press(9)] {
        tx.send(event).await.unwrap();
    }
    drop(tx);

    let driver = tokio::spawn(async move {
        reactor.run(rx, notify_tx, CancellationToken::new()).await;
        reactor
    });

    let mut received = Vec::new();
    while let Some(n) = notify_rx.recv().await {
        received.push(n);
    }

    assert_eq!(
        received,
        vec![
            Notification::NodeSelected { node: 1 },
            Notification::NodeSelected { node: 9 },
            Notification::SpellCast(SpellCast { spell: SpellType::Fire, pattern: vec![1, 9] }),
        ]
    );

    let reactor = driver.await.unwrap();
    assert!(reactor.state().is_cooling_down(), "Loop stopped right after the cast");
    assert_eq!(reactor.player().names(), vec!["Node1"]);
}

#[tokio::test]
async fn test_run_stops_on_shutdown() {
    let (_tx, rx) = mpsc::channel::<Event>(100);
    let (notify_tx, _notify_rx) = mpsc::channel(100);
    let shutdown = CancellationToken::new();
    let mut reactor = setup();

    let token = shutdown.clone();
    let driver = tokio::spawn(async move {
        reactor.run(rx, notify_tx, token).await;
        reactor
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.cancel();

    let reactor = tokio::time::timeout(Duration::from_secs(2), driver)
        .await
        .expect("reactor should stop promptly")
        .unwrap();
    assert!(reactor.tick().frame > 0, "Loop should have ticked before shutdown");
}
