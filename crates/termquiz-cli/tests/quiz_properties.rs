//! Property tests for the parse → pool → quiz pipeline.
//!
//! Each property is checked over many seeds rather than a single draw.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use termquiz_core::model::TermItem;
use termquiz_core::parser::parse_terms;
use termquiz_core::quiz::{generate_quiz, QuizQuestion, DEFAULT_QUESTION_COUNT};
use termquiz_core::session::QuizSession;

const SEEDS: u64 = 200;

fn finance_pool() -> Vec<TermItem> {
    vec![
        TermItem::new("주식", "기업의 소유권을 나타내는 증권"),
        TermItem::new("배당", "이익의 일부를 지급"),
        TermItem::new("PER", "주가수익비율"),
        TermItem::new("PBR", "주가순자산비율"),
    ]
}

fn ai_pool() -> Vec<TermItem> {
    [
        ("LLM", "large language model"),
        ("RAG", "retrieval augmented generation"),
        ("GPU", "graphics processing unit"),
        ("token", "unit of text a model reads"),
        ("embedding", "vector representation of text"),
        ("fine-tuning", "further training on task data"),
        ("prompt", "instruction given to a model"),
        ("hallucination", "confident but false output"),
        ("transformer", "attention-based network architecture"),
        ("inference", "running a trained model"),
        ("epoch", "one pass over the training data"),
        ("overfitting", "memorising instead of generalising"),
    ]
    .into_iter()
    .map(|(t, d)| TermItem::new(t, d))
    .collect()
}

fn description_for<'a>(pool: &'a [TermItem], q: &QuizQuestion) -> &'a str {
    &pool
        .iter()
        .find(|t| t.term == q.term)
        .expect("question term comes from the pool")
        .description
}

#[test]
fn tab_serialised_pairs_parse_back_exactly() {
    let pool = ai_pool();
    let text: String = pool
        .iter()
        .map(|t| format!("{}\t{}\n", t.term, t.description))
        .collect();
    assert_eq!(parse_terms(&text), pool);
}

#[test]
fn parsing_is_line_independent() {
    let a = "주식\t기업의 소유권";
    let b = "PBR    주가순자산비율";
    let mut separate = parse_terms(a);
    separate.extend(parse_terms(b));
    assert_eq!(parse_terms(&format!("{a}\n{b}")), separate);
}

#[test]
fn bulk_parse_scenario() {
    let terms = parse_terms("주식\t기업의 소유권\nPER\t\n  \nPBR    주가순자산비율");
    assert_eq!(
        terms,
        vec![
            TermItem::new("주식", "기업의 소유권"),
            TermItem::new("PBR", "주가순자산비율"),
        ]
    );
}

#[test]
fn correct_option_is_present_exactly_once() {
    let pool = ai_pool();
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for q in generate_quiz(&mut rng, &pool, DEFAULT_QUESTION_COUNT) {
            let answer = description_for(&pool, &q);
            assert_eq!(q.options[q.correct_index], answer);
            assert_eq!(q.options.iter().filter(|o| *o == answer).count(), 1);
            assert_eq!(q.option_count(), 4);
            let unique: HashSet<&String> = q.options.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }
}

#[test]
fn quiz_size_is_min_of_count_and_pool() {
    let pool = ai_pool();
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = (seed % 20) as usize;
        assert_eq!(
            generate_quiz(&mut rng, &pool, count).len(),
            count.min(pool.len())
        );
        assert!(generate_quiz(&mut rng, &[], count).is_empty());
    }
}

#[test]
fn finance_scenario_end_to_end() {
    let pool = finance_pool();
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let quiz = generate_quiz(&mut rng, &pool, 4);
        assert_eq!(quiz.len(), 4);

        let mut session = QuizSession::start(quiz.clone()).unwrap();
        for q in &quiz {
            assert!(q.option_count() <= 4);
            assert_eq!(q.options[q.correct_index], description_for(&pool, q));
            assert!(session.answer(q.correct_index).unwrap().correct);
        }
        assert!(session.is_finished());
        assert_eq!(session.percentage(), 100);
    }
}

#[test]
fn every_position_is_reachable_for_the_answer() {
    let pool = finance_pool();
    let mut positions = HashSet::new();
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for q in generate_quiz(&mut rng, &pool, 4) {
            positions.insert(q.correct_index);
        }
    }
    assert_eq!(positions, (0..4).collect());
}

#[test]
fn every_term_gets_asked_first_eventually() {
    let pool = ai_pool();
    let mut first_terms = HashSet::new();
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let quiz = generate_quiz(&mut rng, &pool, 1);
        first_terms.insert(quiz[0].term.clone());
    }
    assert_eq!(first_terms.len(), pool.len());
}
