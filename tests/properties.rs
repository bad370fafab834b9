use proptest::prelude::*;
use rustc_hash::FxHashMap;
use wordle_infogain::core::{Classification, Evaluator, Feedback, FeedbackCache, FeedbackSource, Word};
use wordle_infogain::solver::entropy::outcome_partition;
use wordle_infogain::solver::{SelectionPolicy, filter_candidates, select_guess};

// A three-letter alphabet makes duplicate letters the common case
fn word() -> impl Strategy<Value = Word> {
    "[a-c]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn word_list() -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(word(), 1..24)
}

fn counts(word: &Word) -> FxHashMap<u8, usize> {
    let mut map = FxHashMap::default();
    for &b in word.letters() {
        *map.entry(b).or_insert(0) += 1;
    }
    map
}

proptest! {
    #[test]
    fn self_feedback_is_all_correct(w in word()) {
        let feedback = Feedback::evaluate(&w, &w).unwrap();
        prop_assert!(feedback.is_solved());
        prop_assert_eq!(feedback.len(), w.len());
    }

    #[test]
    fn credited_letters_never_exceed_target_occurrences(guess in word(), target in word()) {
        let feedback = Feedback::evaluate(&guess, &target).unwrap();
        let available = counts(&target);

        let mut credited: FxHashMap<u8, usize> = FxHashMap::default();
        for (&letter, &class) in guess.letters().iter().zip(feedback.classifications()) {
            if class != Classification::Absent {
                *credited.entry(letter).or_insert(0) += 1;
            }
        }

        for (letter, n) in credited {
            prop_assert!(n <= available.get(&letter).copied().unwrap_or(0));
        }
    }

    #[test]
    fn correct_exactly_where_letters_match(guess in word(), target in word()) {
        let feedback = Feedback::evaluate(&guess, &target).unwrap();
        for (i, &class) in feedback.classifications().iter().enumerate() {
            let same = guess.letters()[i] == target.letters()[i];
            prop_assert_eq!(class == Classification::Correct, same);
        }
    }

    #[test]
    fn filter_keeps_true_target(candidates in word_list(), guess in word(), pick in any::<prop::sample::Index>()) {
        let target = pick.get(&candidates).clone();
        let feedback = Feedback::evaluate(&guess, &target).unwrap();

        let remaining = filter_candidates(&candidates, &guess, &feedback).unwrap();
        prop_assert!(remaining.contains(&target));
        prop_assert!(remaining.len() <= candidates.len());
    }

    #[test]
    fn filter_is_idempotent(candidates in word_list(), guess in word(), target in word()) {
        let feedback = Feedback::evaluate(&guess, &target).unwrap();

        let once = filter_candidates(&candidates, &guess, &feedback).unwrap();
        let twice = filter_candidates(&once, &guess, &feedback).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn partition_covers_every_candidate(candidates in word_list(), guess in word()) {
        let partition = outcome_partition(&Evaluator, &guess, &candidates).unwrap();
        let total: usize = partition.values().map(Vec::len).sum();
        prop_assert_eq!(total, candidates.len());
    }

    #[test]
    fn candidates_only_picks_a_candidate(candidates in word_list(), pool in word_list()) {
        let pick = select_guess(&candidates, &pool, SelectionPolicy::CandidatesOnly).unwrap();
        prop_assert!(candidates.contains(pick));
    }

    #[test]
    fn full_vocabulary_picks_from_pool(candidates in word_list(), pool in word_list()) {
        let pick = select_guess(&candidates, &pool, SelectionPolicy::FullVocabulary).unwrap();
        if candidates.len() == 1 {
            prop_assert_eq!(pick, &candidates[0]);
        } else {
            prop_assert!(pool.contains(pick));
        }
    }

    #[test]
    fn cache_matches_direct_evaluation(guess in word(), target in word()) {
        let cache = FeedbackCache::new();
        let first = cache.feedback(&guess, &target).unwrap();
        let second = cache.feedback(&guess, &target).unwrap();
        prop_assert_eq!(&first, &Feedback::evaluate(&guess, &target).unwrap());
        prop_assert_eq!(first, second);
    }
}

#[test]
fn regression_duplicate_letters() {
    use Classification::{Absent, Correct, Present};

    let guess = Word::new("aabbcc").unwrap();
    let target = Word::new("ababbc").unwrap();

    assert_eq!(
        Feedback::evaluate(&guess, &target).unwrap().classifications(),
        &[Correct, Present, Present, Correct, Absent, Correct]
    );
}

#[test]
fn end_to_end_exact_guess() {
    let vocabulary: Vec<Word> = ["abcde", "edcba", "aabbb"]
        .iter()
        .map(|w| Word::new(*w).unwrap())
        .collect();
    let target = Word::new("abcde").unwrap();
    let guess = Word::new("abcde").unwrap();

    let feedback = Feedback::evaluate(&guess, &target).unwrap();
    assert_eq!(feedback, Feedback::all_correct(5));

    let remaining = filter_candidates(&vocabulary, &guess, &feedback).unwrap();
    assert_eq!(remaining, vec![target]);
}
