use grammar_master::error::Rejected;
use grammar_master::model::{Difficulty, Filter, GrammarPoint, QuizPhase};
use grammar_master::session::ResultTier;
use grammar_master::{QuestionBank, QuizApp, QuizSession, read_questions_embedded};

fn bank() -> QuestionBank {
    read_questions_embedded().expect("embedded bank")
}

fn answer(session: &QuizSession, bank: &QuestionBank, option: &str) -> QuizSession {
    session
        .select_option(bank, option)
        .and_then(|s| s.submit(bank))
        .expect("answer current question")
}

#[test]
fn unfiltered_walkthrough_matches_the_sample_data() {
    let bank = bank();
    let s = QuizSession::new();

    // q1: 'a' es correcta
    let s = answer(&s, &bank, "a");
    assert_eq!(s.score(), 1);
    assert!(s.is_submitted());
    let s = s.advance(&bank).expect("advance");
    assert_eq!(s.current_index(), 1);
    assert!(!s.is_submitted());
    assert_eq!(s.selected_option_id(), None);

    // q2: 'a' es incorrecta
    let s = answer(&s, &bank, "a");
    assert_eq!(s.score(), 1);
    assert!(s.is_submitted());
    let s = s.advance(&bank).expect("advance");
    assert_eq!(s.current_index(), 2);
}

#[test]
fn relative_clause_filter_finishes_with_full_marks() {
    let bank = bank();
    let s = QuizSession::new().set_filter(None, Some(Filter::Only(GrammarPoint::RelativeClause)));
    let ids: Vec<&str> = s.active_questions(&bank).iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, ["2"]);
    assert_eq!(s.current_index(), 0);

    let s = answer(&s, &bank, "b").advance(&bank).expect("advance");
    assert!(s.show_results());
    assert_eq!(s.phase(&bank), QuizPhase::Finished);
    assert_eq!(s.percentage(&bank), 100);

    let results = s.results_view(&bank);
    assert_eq!(results.tier, ResultTier::Master);
    assert_eq!(results.score_label(), "1 / 1");
    assert_eq!(results.review_topics, [GrammarPoint::RelativeClause]);
}

#[test]
fn empty_filter_combination_ignores_every_answer_action() {
    let bank = bank();
    let s = QuizSession::new().set_filter(
        Some(Filter::Only(Difficulty::Junior)),
        Some(Filter::Only(GrammarPoint::AbsoluteConstruction)),
    );
    assert_eq!(s.phase(&bank), QuizPhase::Idle);
    assert_eq!(s.select_option(&bank, "a"), Err(Rejected::NoActiveQuestion));
    assert_eq!(s.submit(&bank), Err(Rejected::NoActiveQuestion));
    assert_eq!(s.advance(&bank), Err(Rejected::NoActiveQuestion));

    let s = s.set_filter(Some(Filter::Only(Difficulty::Senior)), None);
    assert_eq!(s.phase(&bank), QuizPhase::Answering);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn score_never_exceeds_the_active_set() {
    let bank = bank();
    for difficulty in Difficulty::ALL {
        let mut s = QuizSession::new().set_filter(Some(Filter::Only(difficulty)), None);
        let total = s.active_len(&bank);
        while s.phase(&bank) != QuizPhase::Finished {
            let correct = s
                .current_question(&bank)
                .and_then(|q| q.correct_option())
                .map(|o| o.id.clone())
                .expect("correct option");
            s = answer(&s, &bank, &correct);
            // Un segundo envío no suma
            assert_eq!(s.submit(&bank), Err(Rejected::AlreadySubmitted));
            s = s.advance(&bank).expect("advance");
        }
        assert_eq!(s.score(), total);
        assert_eq!(s.percentage(&bank), 100);
    }
}

#[test]
fn app_restart_keeps_filters_and_zeroes_score() {
    let mut app = QuizApp::new(bank());
    app.cambiar_dificultad(Filter::Only(Difficulty::Middle));
    while app.phase() != QuizPhase::Finished {
        assert!(app.elegir_opcion("a"));
        assert!(app.enviar_respuesta());
        assert!(app.siguiente_pregunta());
    }
    assert_eq!(app.session.score(), 2);
    assert!(!app.siguiente_pregunta());

    app.reiniciar_quiz();
    assert_eq!(app.phase(), QuizPhase::Answering);
    assert_eq!(app.session.score(), 0);
    assert_eq!(app.session.difficulty_filter(), Filter::Only(Difficulty::Middle));
}
