use std::time::Instant;

use rect_survival::config::*;
use rect_survival::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(UpgradeKind::Score, UpgradeKind::Score);
    assert_ne!(UpgradeKind::Score, UpgradeKind::AttackSpeed);
    assert_eq!(Direction::Up, Direction::Up);
    assert_ne!(Direction::Left, Direction::Right);

    let kind = UpgradeKind::AttackSpeed;
    assert_eq!(kind.clone(), UpgradeKind::AttackSpeed);
}

#[test]
fn default_player() {
    let p = Player::default();
    assert_eq!(p.hp, 10);
    assert_eq!(p.attack_speed, 1);
    assert_eq!(p.attack_counter, 0);
    assert_eq!(p.movement, Movement::default());
    assert_eq!((p.body.x, p.body.y), (50.0, 40.0));
    assert_eq!((p.body.width, p.body.height), (20.0, 20.0));
}

#[test]
fn upgrade_colours_follow_kind() {
    assert_eq!(UpgradeKind::Score.color(), Color::Orange);
    assert_eq!(UpgradeKind::AttackSpeed.color(), Color::LightGreen);
    assert_eq!(Color::LightGreen.to_string(), "lightgreen");
}

#[test]
fn entity_ref_dispatches_per_variant() {
    let player = Player::default();
    let enemy = Enemy { body: Body::at(1.0, 2.0, 30.0, 15.0), color: Color::Red };
    let bullet = Bullet { body: Body::at(3.0, 4.0, 10.0, 10.0), timer: 0 };
    let upgrade = Upgrade { body: Body::at(5.0, 6.0, 10.0, 10.0), kind: UpgradeKind::Score };

    assert_eq!(EntityRef::Player(&player).color(), Color::Green);
    assert_eq!(EntityRef::Enemy(&enemy).color(), Color::Red);
    assert_eq!(EntityRef::Bullet(&bullet).color(), Color::Black);
    assert_eq!(EntityRef::Upgrade(&upgrade).color(), Color::Orange);
    assert_eq!(EntityRef::Enemy(&enemy).body().width, 30.0);
    assert_eq!(EntityRef::Upgrade(&upgrade).body().y, 6.0);
}

#[test]
fn allocate_id_counts_up() {
    let mut s = GameState::empty(GameConfig::default(), Instant::now());
    assert_eq!(s.allocate_id(), 0);
    assert_eq!(s.allocate_id(), 1);
    assert_eq!(s.allocate_id(), 2);
    assert_eq!(s.next_id, 3);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState::empty(GameConfig::default(), Instant::now());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.body.x = 99.0;
    cloned.score = 999;
    let id = cloned.allocate_id();
    cloned.enemies.insert(id, Enemy { body: Body::at(5.0, 5.0, 10.0, 10.0), color: Color::Red });

    assert_eq!(original.player.body.x, PLAYER_START_X);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
    assert_eq!(original.next_id, 0);
}
