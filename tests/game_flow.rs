//! End-to-end rounds through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::config::GameConfig;
use wordle_game::core::{Difficulty, Word};
use wordle_game::game::{Game, GameError, Outcome};
use wordle_game::stats::{KeyValueStore, MemoryStore, StatsStore};
use wordle_game::validation::{LookupError, Validator, from_fn};
use wordle_game::wordlists::WordCatalog;

const FILLERS: [&str; 8] = [
    "ABOUT", "ZEBRA", "CRANE", "SLATE", "PIANO", "MOUNT", "QUERY", "GLYPH",
];

fn game<K: KeyValueStore>(catalog: &WordCatalog, stats: StatsStore<K>, seed: u64) -> Game<'_, K> {
    Game::with_rng(catalog, Difficulty::Easy, stats, StdRng::seed_from_u64(seed))
}

fn type_word<K: KeyValueStore>(game: &mut Game<'_, K>, word: &str) {
    for ch in word.chars() {
        game.append_letter(ch);
    }
}

/// Words that are not the current secret
fn wrong_guesses<K: KeyValueStore>(game: &Game<'_, K>, n: usize) -> Vec<&'static str> {
    let secret = game.round().secret();
    FILLERS
        .into_iter()
        .filter(|w| *w != secret.as_str())
        .take(n)
        .collect()
}

fn play<K: KeyValueStore>(game: &mut Game<'_, K>, validator: &Validator<'_>, word: &str) -> Outcome {
    type_word(game, word);
    game.submit_guess(validator).unwrap().outcome
}

#[test]
fn win_in_three_records_stats_and_builds_summary() {
    let catalog = WordCatalog::embedded();
    let validator = Validator::offline(&catalog);
    let mut game = game(&catalog, StatsStore::load(MemoryStore::new()), 1);
    let secret = game.round().secret();

    for word in wrong_guesses(&game, 2) {
        assert_eq!(play(&mut game, &validator, word), Outcome::InProgress);
    }
    assert_eq!(play(&mut game, &validator, secret.as_str()), Outcome::Won);

    let stats = game.stats();
    assert_eq!((stats.played, stats.won), (1, 1));
    assert_eq!((stats.current_streak, stats.max_streak), (1, 1));

    let summary = game.summary().unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "Wordle (Easy) 3/6");
    assert_eq!(lines[1], "");
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "🟩🟩🟩🟩🟩");
}

#[test]
fn finished_round_accepts_no_more_guesses() {
    let catalog = WordCatalog::embedded();
    let validator = Validator::offline(&catalog);
    let mut game = game(&catalog, StatsStore::load(MemoryStore::new()), 2);
    let secret = game.round().secret();
    play(&mut game, &validator, secret.as_str());

    type_word(&mut game, "ABOUT");
    assert_eq!(game.round().current_input(), "");
    assert_eq!(game.begin_submit(), Err(GameError::RoundOver));
    assert_eq!(game.stats().played, 1);
}

#[test]
fn loss_after_six_guesses() {
    let catalog = WordCatalog::embedded();
    let validator = Validator::offline(&catalog);
    let mut game = game(&catalog, StatsStore::load(MemoryStore::new()), 3);

    let guesses = wrong_guesses(&game, 6);
    for word in &guesses[..5] {
        assert_eq!(play(&mut game, &validator, word), Outcome::InProgress);
    }
    assert_eq!(play(&mut game, &validator, guesses[5]), Outcome::Lost);

    let stats = game.stats();
    assert_eq!((stats.played, stats.won, stats.current_streak), (1, 0, 0));
    assert!(game.summary().unwrap().starts_with("Wordle (Easy) X/6\n\n"));
}

#[test]
fn streak_resets_on_loss_and_max_is_kept() {
    let catalog = WordCatalog::embedded();
    let validator = Validator::offline(&catalog);
    let mut game = game(&catalog, StatsStore::load(MemoryStore::new()), 4);

    for _ in 0..2 {
        let secret = game.round().secret();
        play(&mut game, &validator, secret.as_str());
        game.reset(Difficulty::Easy);
    }
    for word in wrong_guesses(&game, 6) {
        play(&mut game, &validator, word);
    }

    let stats = game.stats();
    assert_eq!(stats.played, 3);
    assert_eq!(stats.won, 2);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 2);
}

#[test]
fn abandoning_a_round_leaves_stats_alone() {
    let catalog = WordCatalog::embedded();
    let validator = Validator::offline(&catalog);
    let mut game = game(&catalog, StatsStore::load(MemoryStore::new()), 5);

    let first = wrong_guesses(&game, 1)[0];
    play(&mut game, &validator, first);
    game.reset(Difficulty::Hard);

    assert_eq!(game.round().difficulty(), Difficulty::Hard);
    assert!(game.round().guesses().is_empty());
    assert_eq!(game.stats().played, 0);
}

#[test]
fn rejected_word_keeps_round_unchanged() {
    let catalog = WordCatalog::embedded();
    let validator = Validator::new(&catalog, from_fn(|_| Ok(false)));
    let mut game = game(&catalog, StatsStore::load(MemoryStore::new()), 6);

    type_word(&mut game, "zzxqj");
    let err = game.submit_guess(&validator).unwrap_err();
    assert_eq!(err, GameError::InvalidWord(Word::new("zzxqj").unwrap()));
    assert!(game.round().guesses().is_empty());
    assert_eq!(game.round().current_input(), "ZZXQJ");
    assert_eq!(game.round().attempts_left(), 6);
}

#[test]
fn lookup_failure_accepts_the_guess() {
    let catalog = WordCatalog::embedded();
    let validator = Validator::new(&catalog, from_fn(|_| Err(LookupError::Unavailable)));
    let mut game = game(&catalog, StatsStore::load(MemoryStore::new()), 7);

    type_word(&mut game, "zzxqj");
    let submission = game.submit_guess(&validator).unwrap();
    assert_eq!(submission.guess.as_str(), "ZZXQJ");
    assert_eq!(game.round().guesses().len(), 1);
}

#[test]
fn every_secret_is_a_legal_guess() {
    let catalog = WordCatalog::embedded();
    let validator = Validator::new(&catalog, from_fn(|_| Ok(false)));

    for difficulty in Difficulty::ALL {
        for secret in catalog.tier(difficulty) {
            assert!(validator.is_acceptable(secret), "{secret} was rejected");
        }
    }
}

#[test]
fn statistics_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig {
        stats_dir: Some(dir.path().to_path_buf()),
        online: false,
        ..GameConfig::default()
    };
    let catalog = config.build_catalog().unwrap();
    let validator = Validator::new(&catalog, config.build_oracle());

    {
        let mut game = game(&catalog, config.open_stats(), 8);
        let secret = game.round().secret();
        play(&mut game, &validator, secret.as_str());
    }

    let reopened = config.open_stats();
    assert_eq!(reopened.stats().played, 1);
    assert_eq!(reopened.stats().won, 1);
    assert_eq!(reopened.stats().current_streak, 1);
}
