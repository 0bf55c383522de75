use notepad::kernel::event::Notification;
use notepad::kernel::reactor::Reactor;
use notepad::kernel::resolver::{encode_pattern, PatternResolver};
use notepad::kernel::spell::SpellRegistry;
use notepad::outputs::mock_audio::RecordingPlayer;
use notepad::{NotepadConfig, SpellCast, SpellData, SpellType};

fn setup(spells: Vec<SpellData>) -> Reactor<RecordingPlayer> {
    let config = NotepadConfig {
        cooldown_ms: 100,
        spells,
        ..NotepadConfig::default()
    };
    Reactor::with_player(config, RecordingPlayer::new()).unwrap()
}

fn trace(reactor: &mut Reactor<RecordingPlayer>, nodes: &[u32]) -> Option<SpellCast> {
    let mut last = None;
    for &node in nodes {
        for n in reactor.handle_selection(node) {
            if let Notification::SpellCast(cast) = n {
                last = Some(cast);
            }
        }
    }
    last
}

fn wait_cooldown(reactor: &mut Reactor<RecordingPlayer>) {
    for _ in 0..10 {
        reactor.tick_step(vec![]);
    }
    assert!(!reactor.state().is_cooling_down());
}

#[test]
fn test_resolution_is_deterministic() {
    let registry = SpellRegistry::new(vec![
        SpellData::new(SpellType::Fire, "19", true),
        SpellData::new(SpellType::Ice, "139", true),
    ]);

    for pattern in [vec![1, 9], vec![1, 3, 9], vec![1, 5, 9]] {
        let a = PatternResolver::resolve(&registry, &pattern);
        let b = PatternResolver::resolve(&registry, &pattern);
        assert_eq!(a, b);
        assert_eq!(a.pattern, pattern, "Outcome carries the full sequence");
    }
}

#[test]
fn test_registry_order_breaks_ties() {
    let registry = SpellRegistry::new(vec![
        SpellData::new(SpellType::Fire, "19", true),
        SpellData::new(SpellType::Ice, "19", true),
    ]);
    assert_eq!(PatternResolver::resolve(&registry, &[1, 9]).spell, SpellType::Fire);
}

#[test]
fn test_locked_templates_are_skipped() {
    let registry = SpellRegistry::new(vec![
        SpellData::new(SpellType::Fire, "19", false),
        SpellData::new(SpellType::Ice, "19", true),
    ]);
    assert_eq!(PatternResolver::resolve(&registry, &[1, 9]).spell, SpellType::Ice);

    let all_locked = SpellRegistry::new(vec![SpellData::new(SpellType::Fire, "19", false)]);
    assert_eq!(PatternResolver::resolve(&all_locked, &[1, 9]).spell, SpellType::None);
}

#[test]
fn test_wide_ids_collide_with_last_digit() {
    let registry = SpellRegistry::new(vec![SpellData::new(SpellType::Wind, "129", true)]);

    assert_eq!(encode_pattern(&[1, 12, 9]), "129");
    let cast = PatternResolver::resolve(&registry, &[1, 12, 9]);
    assert_eq!(cast.spell, SpellType::Wind);
    assert_eq!(cast.pattern, vec![1, 12, 9], "Raw ids survive even though the key is lossy");
}

#[test]
fn test_failed_cast_plays_wrong_cue() {
    let mut reactor = setup(vec![SpellData::new(SpellType::Fire, "19", true)]);

    let cast = trace(&mut reactor, &[1, 5, 9]).expect("capture should resolve");

    assert_eq!(cast, SpellCast { spell: SpellType::None, pattern: vec![1, 5, 9] });
    assert_eq!(reactor.player().names(), vec!["Node1", "Node5", "NodeWrong"]);
    let wrong = reactor.player().played.last().unwrap();
    assert_eq!(wrong.fade_out, 0.25);
    assert_eq!(wrong.target, "Player");
}

#[test]
fn test_unlock_enables_match() {
    let mut reactor = setup(vec![SpellData::new(SpellType::Fire, "19", false)]);

    assert_eq!(trace(&mut reactor, &[1, 9]).unwrap().spell, SpellType::None);

    assert!(reactor.unlock(SpellType::Fire));
    assert!(reactor.registry().is_unlocked(SpellType::Fire));
    wait_cooldown(&mut reactor);

    assert_eq!(trace(&mut reactor, &[1, 9]).unwrap().spell, SpellType::Fire);
}

#[test]
fn test_unlock_is_idempotent() {
    let mut reactor = setup(vec![SpellData::new(SpellType::Fire, "19", false)]);

    assert!(reactor.unlock(SpellType::Fire));
    let after_first = reactor.registry().clone();
    assert!(!reactor.unlock(SpellType::Fire), "Second unlock changes nothing");
    assert_eq!(reactor.registry(), &after_first);
}

#[test]
fn test_unlock_absent_spell_is_noop() {
    let mut reactor = setup(vec![SpellData::new(SpellType::Fire, "19", false)]);
    let before = reactor.registry().clone();

    assert!(!reactor.unlock(SpellType::Shield));
    assert_eq!(reactor.registry(), &before);
}

#[test]
fn test_unlock_flips_first_entry_only() {
    let mut reactor = setup(vec![
        SpellData::new(SpellType::Heal, "12", false),
        SpellData::new(SpellType::Heal, "19", false),
    ]);

    reactor.unlock(SpellType::Heal);

    let entries = reactor.registry().entries();
    assert!(entries[0].unlocked);
    assert!(!entries[1].unlocked);
    assert_eq!(trace(&mut reactor, &[1, 9]).unwrap().spell, SpellType::None);
}

#[test]
fn test_unlock_via_event() {
    let mut reactor = setup(vec![SpellData::new(SpellType::Earth, "1479", false)]);

    reactor.tick_step(vec![notepad::Event::Unlock(SpellType::Earth)]);

    assert!(reactor.registry().is_unlocked(SpellType::Earth));
}
