use movie_quiz::domain::{catalog, Progress, SessionState};
use movie_quiz::{
    handle_event, initialize, Action, AppState, Config, Event, InputMode, MovieQuizError,
    QuizSession, Screen,
};

fn answers_for(mask: u16, len: usize) -> Vec<bool> {
    (0..len).map(|bit| mask & (1 << bit) != 0).collect()
}

#[test]
fn every_answer_sequence_scores_correctly() {
    let key: Vec<bool> = catalog::default_questions()
        .iter()
        .map(|q| q.correct_answer())
        .collect();
    assert_eq!(key.len(), 10);

    for mask in 0..1u16 << 10 {
        let answers = answers_for(mask, 10);
        let expected = answers.iter().zip(&key).filter(|(a, k)| a == k).count();

        let mut session = QuizSession::default();
        for (i, answer) in answers.iter().enumerate() {
            assert!(!session.is_finished(), "finished early at {i} for {mask:#b}");
            let outcome = session.record_answer(*answer).unwrap();
            assert_eq!(outcome.is_correct, *answer == key[i]);
            if i < 9 {
                assert_eq!(outcome.progress, Progress::Advanced { index: i + 1 });
            }
        }

        assert_eq!(session.state(), SessionState::Finished { score: expected });
        assert!(matches!(
            session.record_answer(true),
            Err(MovieQuizError::RoundFinished)
        ));
        assert_eq!(session.score(), expected);

        session.reset();
        assert_eq!(session.state(), SessionState::InProgress { index: 0 });
        assert_eq!(session.score(), 0);
    }
}

/// Drives one round through the event handler the way the plugin does:
/// answer, wait for the feedback timer, repeat.
fn play_round(state: &mut AppState, answers: &[bool]) {
    for answer in answers {
        assert!(state.accepts_answers());
        let (render, actions) = handle_event(state, &Event::Answer(*answer)).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleTimeout { seconds: 0.6 }]);

        // A second press during feedback is swallowed.
        let (render, actions) = handle_event(state, &Event::Answer(*answer)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());

        handle_event(state, &Event::FeedbackElapsed).unwrap();
    }
}

#[test]
fn full_round_through_the_handler() {
    let mut state = initialize(&Config::default());

    play_round(&mut state, &[true; 10]);

    let Screen::Result(result) = state.screen else {
        panic!("expected result screen, got {:?}", state.screen);
    };
    assert_eq!(result.to_string(), "6/10");
    assert!(!state.accepts_answers());

    let vm = state.compute_viewmodel(30, 80);
    let dialog = vm.dialog.expect("result dialog");
    assert_eq!(dialog.message, "Ваш результат: 6/10");

    let (render, _) = handle_event(&mut state, &Event::PlayAgain).unwrap();
    assert!(render);
    assert_eq!(state.screen, Screen::Question);
    assert_eq!(state.input_mode, InputMode::Accepting);
    assert_eq!(state.session.question_number(), "1/10");

    play_round(&mut state, &[true, true, true, true, true, true, false, false, false, false]);
    assert!(matches!(state.screen, Screen::Result(r) if r.score == 10));
}

#[test]
fn replay_before_last_timer_keeps_new_round_open() {
    let mut state = initialize(&Config::default());
    play_round(&mut state, &[false; 9]);

    handle_event(&mut state, &Event::Answer(false)).unwrap();
    assert!(matches!(state.screen, Screen::Result(_)));

    handle_event(&mut state, &Event::PlayAgain).unwrap();
    let (render, _) = handle_event(&mut state, &Event::FeedbackElapsed).unwrap();

    assert!(!render);
    assert!(state.accepts_answers());
    assert_eq!(state.session.answered(), 0);
}

#[test]
fn close_is_available_everywhere() {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::Answer(true)).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
    assert_eq!(actions, vec![Action::CloseFocus]);
}
