mod common;

use common::{GM, PLAYER, Table, to_gm, whisper};
use tracker_content::describe;
use tracker_core::ConditionKind;
use tracker_runtime::{Audience, Notice};

#[test]
fn only_the_gm_may_use_cc() {
    let table = Table::new();

    table.say(PLAYER, "!cc add shaken 2", &["goblin"]);

    assert!(table.marker_names("goblin").is_empty());
    assert_eq!(
        table.lines(),
        vec![whisper(PLAYER, "!cc can only be used by the GM")]
    );
}

#[test]
fn unknown_subcommand_is_reported() {
    let table = Table::new();

    table.gm("!cc dance", &["goblin"]);

    assert_eq!(
        table.lines(),
        vec![whisper(GM, "invalid command: !cc dance")]
    );
}

#[test]
fn unknown_condition_is_reported_per_token() {
    let table = Table::new();

    table.gm("!cc add sleepy", &["goblin", "valeros"]);

    assert_eq!(
        table.lines(),
        vec![
            whisper(GM, "Unknown condition sleepy"),
            whisper(GM, "Unknown condition sleepy"),
        ]
    );
}

#[test]
fn non_numeric_duration_is_rejected_before_touching_tokens() {
    let table = Table::new();
    table.set_order(&[("valeros", "20"), ("goblin", "10"), ("-1", "0")]);

    table.gm("!cc add shaken soon", &["goblin"]);

    assert!(table.marker_names("goblin").is_empty());
    assert_eq!(table.lines(), vec![whisper(GM, "Invalid duration soon")]);
}

#[test]
fn add_applies_to_every_selected_token() {
    let table = Table::new();
    table.set_order(&[("valeros", "20"), ("goblin", "10"), ("-1", "0")]);

    table.gm("!cc add Prone 0", &["goblin", "ezren"]);

    assert_eq!(table.marker_names("goblin"), vec!["path-condition-prone"]);
    assert_eq!(table.marker_names("ezren"), vec!["path-condition-prone"]);
    assert_eq!(
        table.lines(),
        vec![
            to_gm("Added Prone to Goblin"),
            (
                Audience::Controllers("char-ezren".into()),
                "You now have the Prone condition".to_owned()
            ),
            to_gm("Added Prone to Ezren"),
        ]
    );

    // Untimed conditions are not part of the ledger.
    table.gm("!cc show", &[]);
    assert_eq!(table.lines(), vec![whisper(GM, "No active conditions")]);
}

#[test]
fn re_adding_resets_the_duration() {
    let table = Table::new();
    table.set_order(&[("valeros", "20"), ("goblin", "10"), ("-1", "0")]);

    table.gm("!cc add shaken 4", &["goblin"]);
    table.gm("!cc add shaken 1", &["goblin"]);
    table.lines();

    table.gm("!cc show", &[]);
    assert_eq!(
        table.lines(),
        vec![whisper(GM, "Goblin:\n  - Shaken (duration: 1)")]
    );
    assert_eq!(table.marker_names("goblin"), vec!["path-condition-shaken"]);
}

#[test]
fn remove_without_marker_is_silent() {
    let table = Table::new();

    table.gm("!cc remove prone", &["goblin"]);

    assert!(table.lines().is_empty());
}

#[test]
fn clear_removes_everything_on_the_token() {
    let table = Table::new();
    table.set_order(&[("valeros", "20"), ("goblin", "10"), ("-1", "0")]);
    table.gm("!cc add shaken 2", &["goblin"]);
    table.gm("!cc add prone", &["goblin"]);
    table.lines();

    table.gm("!cc clear", &["goblin"]);

    assert!(table.marker_names("goblin").is_empty());
    assert_eq!(
        table.lines(),
        vec![
            to_gm("Removed Prone from Goblin"),
            to_gm("Removed Shaken from Goblin"),
        ]
    );

    table.gm("!cc show", &[]);
    assert_eq!(table.lines(), vec![whisper(GM, "No active conditions")]);
}

#[test]
fn show_groups_by_token_and_skips_tokens_out_of_the_fight() {
    let table = Table::new();
    table.set_order(&[
        ("valeros", "20"),
        ("goblin", "10"),
        ("ezren", "5"),
        ("-1", "0"),
    ]);
    table.gm("!cc add shaken 2", &["goblin"]);
    table.gm("!cc add blinded 3", &["ezren"]);
    table.gm("!cc add sickened 1", &["goblin"]);
    table.lines();

    // ezren drops out of initiative but keeps the condition.
    table.set_order(&[("valeros", "20"), ("goblin", "10"), ("-1", "0")]);
    table.gm("!cc show", &["valeros"]);

    assert_eq!(
        table.lines(),
        vec![whisper(
            GM,
            "Goblin:\n  - Sickened (duration: 1)\n  - Shaken (duration: 2)"
        )]
    );
}

#[test]
fn condition_reference_is_public_for_the_gm() {
    let table = Table::new();

    table.gm("!cond prone", &[]);

    assert_eq!(
        table.notices(),
        vec![(
            Audience::Everyone,
            Notice::ConditionReference {
                condition: ConditionKind::Prone,
                text: describe(ConditionKind::Prone),
            }
        )]
    );
}

#[test]
fn condition_reference_is_whispered_to_players() {
    let table = Table::new();

    table.say(PLAYER, "!cond list", &[]);
    table.say(PLAYER, "!cond Sleepy", &[]);

    let notices = table.notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].0, Audience::Player(PLAYER.into()));
    assert!(matches!(&notices[0].1, Notice::ConditionList(all) if all.len() == 34));
    assert_eq!(
        notices[1],
        (
            Audience::Player(PLAYER.into()),
            Notice::ConditionNotFound {
                name: "Sleepy".into()
            }
        )
    );
    assert_eq!(notices[1].1.to_string(), "Condition Sleepy not found.");
}

#[test]
fn ordinary_chat_is_ignored() {
    let table = Table::new();

    table.say(PLAYER, "I attack the goblin", &["goblin"]);
    table.gm("!roll 1d20", &["goblin"]);

    assert!(table.lines().is_empty());
}
