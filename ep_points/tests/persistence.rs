mod common;

use std::path::{Path, PathBuf};

use common::*;
use ep_config::BotConfig;
use ep_ledger::{JsonLedger, LedgerStore, SharedLedger};

const EVENT: &str = "Event Permission";
const EDITOR: &str = "EP Edit Permission";

fn ledger_file(dir: &Path) -> PathBuf {
    dir.join("ep_data.json")
}

fn seeded(path: &Path, entries: &[(&str, f64)]) -> SharedLedger {
    let mut ledger = JsonLedger::load(path);
    for (user, points) in entries {
        ledger.set(user, *points);
    }
    ledger.flush().unwrap();
    ep_ledger::shared(ledger)
}

async fn run(content: &str, roles: &[&str], ledger: &SharedLedger) -> FakeChat {
    let chat = FakeChat::new(content).with_roles(roles);
    ep_points::dispatch(&chat, ledger, &BotConfig::default()).await;
    chat
}

#[tokio::test]
async fn log_is_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = ledger_file(dir.path());
    let ledger = seeded(&path, &[("1", 2.0)]);

    run("!log Spar <@1> 3 EP <@2> 0.5 EP", &[EVENT], &ledger).await;

    let reloaded = JsonLedger::load(&path);
    assert_eq!(reloaded.get("1"), 5.0);
    assert_eq!(reloaded.get("2"), 0.5);
}

#[tokio::test]
async fn edit_is_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = ledger_file(dir.path());
    let ledger = seeded(&path, &[("1", 10.0)]);

    run("!edit ep <@1>4", &[EDITOR], &ledger).await;

    assert_eq!(JsonLedger::load(&path).get("1"), 4.0);
}

#[tokio::test]
async fn rejected_logs_leave_the_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = ledger_file(dir.path());
    let ledger = seeded(&path, &[("1", 4.0)]);
    let before = std::fs::read_to_string(&path).unwrap();

    for content in [
        "!log Raid <@1> 3 EP",
        "!log Spar <@1> three EP",
        "!log Spar <@2>",
    ] {
        run(content, &[EVENT], &ledger).await;
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }
    run("!log Spar <@1> 3 EP", &[], &ledger).await;
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn unwritable_ledger_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = ep_ledger::shared(JsonLedger::load(
        dir.path().join("missing").join("ep_data.json"),
    ));

    let chat = run("!log Spar <@1> 3 EP", &[EVENT], &ledger).await;
    assert_eq!(
        chat.messages_in(ORIGIN),
        vec!["❌ The EP change could not be saved."]
    );

    let chat = run("!edit ep <@1> 7", &[EDITOR], &ledger).await;
    assert_eq!(
        chat.messages_in(ORIGIN),
        vec!["❌ The EP change could not be saved."]
    );
}

#[tokio::test]
async fn huge_annotations_never_reach_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = ledger_file(dir.path());
    let ledger = seeded(&path, &[("2", 42.0)]);

    let content = format!("!log Spar <@1> {} EP", "9".repeat(400));
    let chat = run(&content, &[EVENT], &ledger).await;
    assert_eq!(
        chat.messages_in(ORIGIN),
        vec!["Could not find EP values for any mentioned user. The format must be: `@user # EP`"]
    );

    let reloaded = JsonLedger::load(&path);
    assert_eq!(reloaded.get("1"), 0.0);
    assert_eq!(reloaded.get("2"), 42.0);
}

#[tokio::test]
async fn overflowing_total_credits_nobody() {
    let dir = tempfile::tempdir().unwrap();
    let path = ledger_file(dir.path());
    let ledger = seeded(&path, &[("1", f64::MAX)]);

    let content = format!("!log Spar <@2> 3 EP <@1> 1{} EP", "0".repeat(308));
    let chat = run(&content, &[EVENT], &ledger).await;
    assert_eq!(
        chat.messages_in(ORIGIN),
        vec!["❌ That would put <@1> over the largest EP total I can store."]
    );
    assert_eq!(points(&ledger, 2).await, None);

    let reloaded = JsonLedger::load(&path);
    assert_eq!(reloaded.get("1"), f64::MAX);
    assert_eq!(reloaded.get("2"), 0.0);
}
