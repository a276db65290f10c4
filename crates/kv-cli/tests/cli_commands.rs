//! Integration tests for the kv-cli commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn kv() -> Command {
    Command::cargo_bin("kv").unwrap()
}

/// Run `kv play` with the given lines on stdin and return stdout.
fn play(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    let output = kv().arg("play").write_stdin(input).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

/// Replies only, in order: drops the banners and the echo lines.
fn replies(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|l| !l.starts_with("Было введено: "))
        .filter(|l| *l != "Игра начата" && *l != "Завершение игры...")
        .collect()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_prints_banners_and_echo() {
    kv().arg("play")
        .write_stdin("осмотреться\nзавершить\n")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Игра начата\n")
                .and(predicate::str::contains("Было введено: \"осмотреться\"\n"))
                .and(predicate::str::contains("Было введено: \"завершить\"\n"))
                .and(predicate::str::ends_with("Завершение игры...\n")),
        );
}

#[test]
fn play_is_the_default_command() {
    kv().write_stdin("осмотреться\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ты находишься на кухне"));
}

#[test]
fn play_stops_at_sentinel() {
    kv().arg("play")
        .write_stdin("quit\nидти коридор\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ничего интересного").not());
}

#[test]
fn play_survives_empty_input() {
    kv().arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout("Игра начата\nЗавершение игры...\n");
}

#[test]
fn play_without_echo() {
    kv().args(["play", "--no-echo"])
        .write_stdin("летать\n")
        .assert()
        .success()
        .stdout("Игра начата\nнеизвестная команда\nЗавершение игры...\n");
}

#[test]
fn play_unknown_command_ignores_operands() {
    let out = play(&["летать", "летать над крышей", ""]);
    assert_eq!(
        replies(&out),
        ["неизвестная команда", "неизвестная команда", "неизвестная команда"]
    );
}

#[test]
fn play_survives_invalid_utf8() {
    let mut input = b"\xff\xfe\n".to_vec();
    input.extend_from_slice("осмотреться\n".as_bytes());
    kv().arg("play")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Было введено: \"\\xff\\xfe\"\nнеизвестная команда\n")
                .and(predicate::str::contains("ты находишься на кухне")),
        );
}

#[test]
fn play_whitespace_tokenizer() {
    kv().args(["play", "--tokenizer", "whitespace", "--no-echo"])
        .write_stdin("идти   коридор\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ничего интересного"));
}

#[test]
fn play_strict_tokenizer_rejects_extra_spaces() {
    kv().args(["play", "--no-echo"])
        .write_stdin("идти   коридор\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "неверное количество аргументов для команды 'идти'",
        ));
}

#[test]
fn play_rejects_unknown_tokenizer() {
    kv().args(["play", "--tokenizer", "regex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tokenizer"));
}

#[test]
fn play_full_walkthrough() {
    let out = play(&[
        "осмотреться",
        "взять ключи",
        "идти коридор",
        "идти улица",
        "идти комната",
        "осмотреться",
        "надеть рюкзак",
        "взять ключи",
        "взять конспекты",
        "осмотреться",
        "идти коридор",
        "идти кухня",
        "осмотреться",
        "идти коридор",
        "применить ключи ключи",
        "идти улица",
        "идти домой",
        "идти кухня",
        "осмотреться",
        "завершить",
    ]);

    assert_eq!(
        replies(&out),
        [
            "ты находишься на кухне, на столе: чай, надо собрать рюкзак и идти в универ. можно пройти - коридор",
            "некуда класть",
            "ничего интересного. можно пройти - кухня, комната, улица",
            "дверь закрыта",
            "ты в своей комнате. можно пройти - коридор",
            "на столе: ключи, конспекты, на стуле: рюкзак. можно пройти - коридор",
            "вы надели: рюкзак",
            "предмет добавлен в инвентарь: ключи",
            "предмет добавлен в инвентарь: конспекты",
            "пустая комната. можно пройти - коридор",
            "ничего интересного. можно пройти - кухня, комната, улица",
            "кухня, ничего интересного. можно пройти - коридор",
            "ты находишься на кухне, на столе: чай, надо идти в универ. можно пройти - коридор",
            "ничего интересного. можно пройти - кухня, комната, улица",
            "дверь открыта",
            "на улице весна. можно пройти - домой",
            "ничего интересного. можно пройти - кухня, комната, улица",
            "кухня, ничего интересного. можно пройти - коридор",
            "ты находишься на кухне, на столе: чай, надо . можно пройти - коридор",
        ]
    );
}

#[test]
fn play_usage_errors() {
    let out = play(&["идти", "надеть", "взять a b", "применить ключи"]);
    assert_eq!(
        replies(&out),
        [
            "неверное количество аргументов для команды 'идти'",
            "неверное количество аргументов для команды 'надеть'",
            "неверное количество аргументов для команды 'взять'",
            "неверное количество аргументов для команды 'применить'",
        ]
    );
}

#[test]
fn play_keeps_stdout_clean_when_verbose() {
    kv().args(["-vv", "play", "--no-echo"])
        .write_stdin("идти коридор\n")
        .assert()
        .success()
        .stdout("Игра начата\nничего интересного. можно пройти - кухня, комната, улица\nЗавершение игры...\n");
}

// ---------------------------------------------------------------------------
// world
// ---------------------------------------------------------------------------

#[test]
fn world_dumps_json() {
    let output = kv().arg("world").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rooms = json["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 4);
    assert_eq!(rooms[0]["name"], "кухня");
    assert_eq!(json["start"], 0);
    assert_eq!(rooms[3]["locked"], true);
    assert_eq!(rooms[0]["goals"][1]["kind"]["type"], "reach_room");
}

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

#[test]
fn rooms_lists_every_room() {
    kv().arg("rooms")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("кухня")
                .and(predicate::str::contains("коридор"))
                .and(predicate::str::contains("комната"))
                .and(predicate::str::contains("улица"))
                .and(predicate::str::contains("рюкзак (wearable)"))
                .and(predicate::str::contains("дверь")),
        );
}
