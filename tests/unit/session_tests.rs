//! Unit tests for session commands through the public API

use crate::mocks::ScriptedTargets;
use numguess::{
    Difficulty, FixedTargets, GameSession, GuessError, GuessOutcome, HintOutcome, HistoryEntry, RoundPhase,
};
use std::time::{Duration, Instant};

fn session_with_target(difficulty: Difficulty, target: u32) -> GameSession<FixedTargets> {
    let mut session = GameSession::new(FixedTargets::always(target));
    session.start_round(difficulty);
    session
}

#[cfg(test)]
mod start_round_tests {
    use super::*;

    #[test]
    fn test_each_difficulty_draws_from_its_range() {
        let targets = ScriptedTargets::new([10, 20, 30]);
        let draws = targets.draw_log();
        let mut session = GameSession::new(targets);

        session.start_round(Difficulty::Easy);
        assert_eq!(session.range_max(), 50);
        session.start_round(Difficulty::Medium);
        assert_eq!(session.range_max(), 100);
        session.start_round(Difficulty::Hard);
        assert_eq!(session.range_max(), 1000);

        assert_eq!(*draws.lock().unwrap(), vec![50, 100, 1000]);
    }

    #[test]
    fn test_reset_redraws_target() {
        let mut session = GameSession::new(FixedTargets::new([42, 7]));
        session.start_round(Difficulty::Medium);
        assert_eq!(session.submit_guess("42").unwrap().outcome, GuessOutcome::Correct);

        session.reset();
        assert_eq!(session.difficulty(), Difficulty::Medium);
        assert_eq!(session.submit_guess("42").unwrap().outcome, GuessOutcome::TooHigh);
        assert_eq!(session.submit_guess("7").unwrap().outcome, GuessOutcome::Correct);
    }

    #[test]
    fn test_restart_mid_round_discards_progress() {
        let mut session = session_with_target(Difficulty::Medium, 42);
        session.submit_guess("10").unwrap();
        session.request_hint().unwrap();

        session.start_round(Difficulty::Medium);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.hints_remaining(), 3);
        assert!(session.history().is_empty());
        assert_eq!(session.best_score(), None);
    }
}

#[cfg(test)]
mod submit_guess_tests {
    use super::*;

    #[test]
    fn test_scenario_medium_target_42() {
        let mut session = session_with_target(Difficulty::Medium, 42);

        let report = session.submit_guess("50").unwrap();
        assert_eq!((report.outcome, report.attempts), (GuessOutcome::TooHigh, 1));

        let report = session.submit_guess("abc").unwrap();
        assert_eq!((report.outcome, report.attempts), (GuessOutcome::Invalid, 2));

        let report = session.submit_guess("42").unwrap();
        assert_eq!((report.outcome, report.attempts), (GuessOutcome::Correct, 3));
        assert!(report.new_best);
        assert_eq!(session.best_score(), Some(3));
        assert!(!session.round_active());
    }

    #[test]
    fn test_zero_on_easy_is_out_of_range() {
        let mut session = session_with_target(Difficulty::Easy, 25);
        let report = session.submit_guess("0").unwrap();
        assert_eq!(report.outcome, GuessOutcome::OutOfRange);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.history().entries()[0].to_string(), "0 - Out of range");
    }

    #[test]
    fn test_malformed_inputs_are_invalid_attempts() {
        let mut session = session_with_target(Difficulty::Medium, 42);
        for (i, raw) in ["", "   ", "4.2", "forty-two", "99999999999999999999", "0x2A"].iter().enumerate() {
            let report = session.submit_guess(raw).unwrap();
            assert_eq!(report.outcome, GuessOutcome::Invalid, "input {:?}", raw);
            assert_eq!(report.attempts as usize, i + 1);
        }

        let texts: Vec<&str> = session.history().iter().map(|e| e.text()).collect();
        assert_eq!(texts[3], "forty-two");
    }

    #[test]
    fn test_signed_and_padded_numbers_parse() {
        let mut session = session_with_target(Difficulty::Medium, 42);
        assert_eq!(session.submit_guess("+41").unwrap().outcome, GuessOutcome::TooLow);
        assert_eq!(session.submit_guess("-1").unwrap().outcome, GuessOutcome::OutOfRange);
        assert_eq!(session.submit_guess(" 42\t").unwrap().outcome, GuessOutcome::Correct);
        assert_eq!(session.history().entries()[0].text(), "41");
    }

    #[test]
    fn test_guess_after_correct_is_invalid_state() {
        let mut session = session_with_target(Difficulty::Medium, 42);
        session.submit_guess("42").unwrap();

        let err = session.submit_guess("42").unwrap_err();
        assert!(matches!(err, GuessError::InvalidState { phase: RoundPhase::Won, .. }));
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.best_score(), Some(1));
    }

    #[test]
    fn test_guess_before_any_round_is_invalid_state() {
        let mut session = GameSession::new(FixedTargets::always(3));
        let err = session.submit_guess("3").unwrap_err();
        assert!(matches!(err, GuessError::InvalidState { phase: RoundPhase::NotStarted, .. }));
        assert!(session.history().is_empty());
    }
}

#[cfg(test)]
mod hint_tests {
    use super::*;

    #[test]
    fn test_hint_scenario_target_42() {
        let mut session = session_with_target(Difficulty::Medium, 42);
        match session.request_hint().unwrap() {
            HintOutcome::Window(window) => {
                assert_eq!(window.lower, 17);
                assert_eq!(window.upper, 67);
                assert_eq!(window.hints_remaining, 2);
            }
            HintOutcome::NoHintsLeft => panic!("first hint should succeed"),
        }
        assert_eq!(
            session.history().entries()[0],
            HistoryEntry::Hint { lower: 17, upper: 67 }
        );
    }

    #[test]
    fn test_fourth_hint_reports_none_left() {
        let mut session = session_with_target(Difficulty::Hard, 500);
        for expected in [2, 1, 0] {
            match session.request_hint().unwrap() {
                HintOutcome::Window(window) => assert_eq!(window.hints_remaining, expected),
                HintOutcome::NoHintsLeft => panic!("hint {} should succeed", 3 - expected),
            }
        }
        assert_eq!(session.request_hint().unwrap(), HintOutcome::NoHintsLeft);
        assert_eq!(session.hints_remaining(), 0);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_hint_window_clamped_near_edges() {
        let mut session = session_with_target(Difficulty::Easy, 2);
        match session.request_hint().unwrap() {
            HintOutcome::Window(window) => assert_eq!((window.lower, window.upper), (1, 14)),
            HintOutcome::NoHintsLeft => panic!("expected a window"),
        }

        let mut session = session_with_target(Difficulty::Easy, 50);
        match session.request_hint().unwrap() {
            HintOutcome::Window(window) => assert_eq!((window.lower, window.upper), (38, 50)),
            HintOutcome::NoHintsLeft => panic!("expected a window"),
        }
    }

    #[test]
    fn test_hint_after_win_is_invalid_state() {
        let mut session = session_with_target(Difficulty::Medium, 42);
        session.submit_guess("42").unwrap();
        assert!(session.request_hint().unwrap_err().is_invalid_state());
        assert_eq!(session.hints_remaining(), 3);
    }
}

#[cfg(test)]
mod elapsed_tests {
    use super::*;

    #[test]
    fn test_elapsed_is_a_pure_query() {
        let mut session = session_with_target(Difficulty::Medium, 42);
        let t0 = Instant::now();
        session.submit_guess_at("10", t0).unwrap();

        let before = session.snapshot(t0);
        for ms in [0, 100, 200, 5000] {
            session.elapsed_seconds(t0 + Duration::from_millis(ms));
        }
        assert_eq!(session.snapshot(t0), before);
        assert_eq!(session.elapsed_seconds(t0 + Duration::from_millis(5000)), Some(5.0));
    }

    #[test]
    fn test_elapsed_before_first_guess_is_none() {
        let mut session = session_with_target(Difficulty::Medium, 42);
        session.request_hint().unwrap();
        assert_eq!(session.elapsed_seconds(Instant::now()), None);
    }

    #[test]
    fn test_elapsed_earlier_than_start_saturates() {
        let mut session = session_with_target(Difficulty::Medium, 42);
        let t0 = Instant::now() + Duration::from_secs(10);
        session.submit_guess_at("10", t0).unwrap();
        assert_eq!(session.elapsed_seconds(t0 - Duration::from_secs(1)), Some(0.0));
    }
}
