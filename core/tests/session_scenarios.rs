// core/tests/session_scenarios.rs
//
// End-to-end composition scenarios driven through `run` with a scripted
// frontend.
//
// Tests cover:
// - Round trip from a text dictionary to committed text
// - Cycling candidates and committing the second match
// - Empty dictionary: every commit is a no-op
// - Gloss capacity boundary at load time
// - Buffer overflow and commit-without-selection

use hanzipad_core::{
    find_matches, nth, run, CompositionSession, DictionaryError, DictionaryStore, DisplayMode,
    Field, FieldLimits, FormatErrorKind, KeyEvent, ScriptedFrontend, PHONETIC_CAPACITY,
};
use std::sync::Arc;

const DICT: &str = "\
你 你 [ni3] /you (informal)/
好 好 [hao3] /good/well/proper/
安 安 [an1] /content/calm/still/
按 按 [an4] /to press/to push/
們 们 [men5] /plural marker for pronouns/
";

fn load(text: &str) -> Arc<DictionaryStore> {
    Arc::new(DictionaryStore::from_reader(text.as_bytes(), &FieldLimits::default()).unwrap())
}

fn session(text: &str, mode: DisplayMode) -> CompositionSession {
    CompositionSession::new(load(text), mode)
}

#[test]
fn typing_ni_and_committing_gives_ni() {
    let mut frontend = ScriptedFrontend::typing("ni").then([KeyEvent::Commit, KeyEvent::Quit]);
    let text = run(session(DICT, DisplayMode::Simplified), &mut frontend).unwrap();
    assert_eq!(text, "你");

    let frame = &frontend.frames()[2];
    assert_eq!(frame.phonetic, "ni");
    assert_eq!(frame.candidates.len(), 1);
    assert!(frame.candidates[0].selected);
    assert_eq!(frame.gloss.as_deref(), Some("/you (informal)/"));
}

#[test]
fn next_candidate_then_commit_takes_second_match() {
    let mut frontend = ScriptedFrontend::typing("a").then([KeyEvent::NextCandidate, KeyEvent::Commit]);
    let text = run(session(DICT, DisplayMode::Simplified), &mut frontend).unwrap();
    assert_eq!(text, "按");

    let frames = frontend.frames();
    // After typing "a": two candidates, first selected.
    let typed = &frames[1];
    assert_eq!(typed.candidates.len(), 2);
    assert_eq!(typed.selected_index(), Some(0));
    assert_eq!(typed.candidates[0].text, "安");

    // After next-candidate: second selected.
    let moved = &frames[2];
    assert_eq!(moved.selected_index(), Some(1));
    assert_eq!(moved.gloss.as_deref(), Some("/to press/to push/"));

    // After commit: buffer empty, text committed.
    let committed = &frames[3];
    assert_eq!(committed.phonetic, "");
    assert!(committed.candidates.is_empty());
    assert_eq!(committed.committed_text, "按");
}

#[test]
fn composing_several_characters_in_traditional_mode() {
    let mut frontend = ScriptedFrontend::typing("ni")
        .then([KeyEvent::Commit])
        .then("me".chars().map(KeyEvent::Char))
        .then([KeyEvent::Commit, KeyEvent::Quit]);
    let text = run(session(DICT, DisplayMode::Traditional), &mut frontend).unwrap();
    assert_eq!(text, "你們");
}

#[test]
fn empty_dictionary_never_commits() {
    let mut frontend = ScriptedFrontend::typing("ni").then([
        KeyEvent::Commit,
        KeyEvent::Char('a'),
        KeyEvent::NextCandidate,
        KeyEvent::Commit,
        KeyEvent::NextCandidate,
        KeyEvent::NextCandidate,
        KeyEvent::Commit,
        KeyEvent::Quit,
    ]);
    let text = run(session("", DisplayMode::Simplified), &mut frontend).unwrap();
    assert_eq!(text, "");
    assert!(frontend.frames().iter().all(|f| f.candidates.is_empty()));
}

#[test]
fn commit_after_cursor_runs_off_the_end_is_noop() {
    let mut frontend = ScriptedFrontend::typing("m").then([
        KeyEvent::NextCandidate,
        KeyEvent::Commit,
        KeyEvent::Quit,
    ]);
    let text = run(session(DICT, DisplayMode::Simplified), &mut frontend).unwrap();
    assert_eq!(text, "");
    // Buffer untouched by the no-op commit.
    assert_eq!(frontend.last_frame().unwrap().phonetic, "m");
}

#[test]
fn overflowing_the_buffer_starts_over() {
    let mut frontend = ScriptedFrontend::typing("abcdefgh").then([KeyEvent::Char('n'), KeyEvent::Commit]);
    let text = run(session(DICT, DisplayMode::Simplified), &mut frontend).unwrap();
    assert_eq!(text, "你");

    for frame in frontend.frames() {
        assert!(frame.phonetic.chars().count() <= PHONETIC_CAPACITY);
    }
    // The eighth character reset the buffer instead of being appended.
    assert_eq!(frontend.frames()[8].phonetic, "");
}

#[test]
fn nth_matches_enumeration_for_every_prefix() {
    let store = load(DICT);
    for prefix in ["a", "an", "h", "n", "m", "men5", "x", ""] {
        let matches: Vec<_> = find_matches(&store, prefix).collect();
        for (k, entry) in matches.iter().enumerate() {
            assert_eq!(nth(&store, prefix, k, DisplayMode::Simplified), Some(entry.simplified()));
        }
        assert_eq!(nth(&store, prefix, matches.len(), DisplayMode::Simplified), None);
    }
}

#[test]
fn gloss_at_capacity_loads_untruncated() {
    let limits = FieldLimits::default();
    let gloss = "g".repeat(limits.gloss);
    let line = format!("你 你 [ni3] {gloss}\n");
    let store = DictionaryStore::from_reader(line.as_bytes(), &limits).unwrap();
    assert_eq!(store.get(0).unwrap().gloss().len(), limits.gloss);
    assert_eq!(store.get(0).unwrap().gloss(), gloss);
}

#[test]
fn gloss_one_byte_over_capacity_is_format_error() {
    let limits = FieldLimits::default();
    let line = format!("你 你 [ni3] /you/\n好 好 [hao3] {}\n", "g".repeat(limits.gloss + 1));
    let err = DictionaryStore::from_reader(line.as_bytes(), &limits).unwrap_err();
    match err {
        DictionaryError::Format { line, kind } => {
            assert_eq!(line, 2);
            assert_eq!(
                kind,
                FormatErrorKind::FieldTooLong {
                    field: Field::Gloss,
                    len: limits.gloss + 1,
                    max: limits.gloss,
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn text_dictionary_file_loads_from_disk() {
    let path = std::env::temp_dir().join(format!("hanzipad_scenario_{}.txt", std::process::id()));
    // No trailing newline on the final record.
    std::fs::write(&path, DICT.trim_end()).unwrap();
    let store = DictionaryStore::open(&path, &FieldLimits::default()).unwrap();
    assert_eq!(store.len(), 5);
    assert_eq!(store.get(4).unwrap().traditional(), "們");
    let _ = std::fs::remove_file(path);
}
