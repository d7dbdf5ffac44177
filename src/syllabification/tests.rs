use super::{check_coverage, split_cluster, syllabify};
use crate::config::PhonologyConfig;
use crate::error::SyllabificationFailure;
use crate::types::Syllable;

fn phones(labels: &str) -> Vec<String> {
    labels.split_whitespace().map(str::to_string).collect()
}

fn phonology(onsets: &str) -> PhonologyConfig {
    PhonologyConfig::from_lists("p t k s n r l a i e o", "a i e o", onsets).expect("valid phonology")
}

fn flat(syllables: &[Syllable]) -> Vec<Vec<&str>> {
    syllables.iter().map(|s| s.phones().collect()).collect()
}

#[test]
fn worked_example_with_st_onset() {
    let result = syllabify(&phones("p t a s t i"), &phonology("p-t s-t")).unwrap();
    assert_eq!(flat(&result), [vec!["p", "t", "a"], vec!["s", "t", "i"]]);
}

#[test]
fn worked_example_without_st_onset() {
    let result = syllabify(&phones("p t a s t i"), &phonology("p-t t")).unwrap();
    assert_eq!(flat(&result), [vec!["p", "t", "a", "s"], vec!["t", "i"]]);
}

#[test]
fn whole_cluster_beats_shorter_onset() {
    let config = phonology("s-t t");
    let cluster = phones("s t");
    let (coda, onset) = split_cluster(&cluster, &config);
    assert!(coda.is_empty());
    assert_eq!(onset, ["s", "t"]);
}

#[test]
fn single_phone_onset_when_pair_is_not_declared() {
    let config = phonology("t");
    let cluster = phones("s t");
    let (coda, onset) = split_cluster(&cluster, &config);
    assert_eq!(coda, ["s"]);
    assert_eq!(onset, ["t"]);
}

#[test]
fn no_matching_suffix_keeps_cluster_in_coda() {
    let config = phonology("p-r");
    let cluster = phones("n s");
    let (coda, onset) = split_cluster(&cluster, &config);
    assert_eq!(coda, ["n", "s"]);
    assert!(onset.is_empty());
}

#[test]
fn onset_match_is_exact_sequence_not_partial() {
    // "s-t-r" declared, but the cluster suffix "t-r" alone is not.
    let config = phonology("s-t-r");
    let cluster = phones("n t r");
    let (coda, onset) = split_cluster(&cluster, &config);
    assert_eq!(coda, ["n", "t", "r"]);
    assert!(onset.is_empty());
}

#[test]
fn empty_cluster_splits_into_empty_parts() {
    let config = phonology("t");
    let (coda, onset) = split_cluster(&[], &config);
    assert!(coda.is_empty());
    assert!(onset.is_empty());
}

#[test]
fn no_vowel_gives_no_syllables() {
    let result = syllabify(&phones("p s t"), &phonology("s-t")).unwrap();
    assert!(result.is_empty());
    assert!(syllabify(&[], &phonology("")).unwrap().is_empty());
}

#[test]
fn leading_and_trailing_consonants_are_unconditional() {
    // "k" is not a declared onset, and "n s" is never offered to another syllable.
    let result = syllabify(&phones("k a n s"), &phonology("")).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].onset, ["k"]);
    assert_eq!(result[0].nucleus, "a");
    assert_eq!(result[0].coda, ["n", "s"]);
}

#[test]
fn adjacent_vowels_form_separate_syllables() {
    let result = syllabify(&phones("a i o"), &phonology("")).unwrap();
    assert_eq!(flat(&result), [vec!["a"], vec!["i"], vec!["o"]]);
}

#[test]
fn three_syllables_split_each_cluster_independently() {
    let input = phones("s t r a n t e l k o s");
    let result = syllabify(&input, &phonology("s-t-r t k")).unwrap();
    assert_eq!(
        flat(&result),
        [
            vec!["s", "t", "r", "a", "n"],
            vec!["t", "e", "l"],
            vec!["k", "o", "s"],
        ]
    );
}

#[test]
fn concatenation_reproduces_input() {
    let config = phonology("p-t s-t t k-r r");
    let inputs = [
        "a",
        "p t a",
        "a s t",
        "p a t a k a",
        "s t r i k r e n s t o l",
        "o a s p t i n",
        "t r a i e",
    ];
    for input in inputs {
        let input = phones(input);
        let syllables = syllabify(&input, &config).unwrap();
        let rebuilt = syllables
            .iter()
            .flat_map(|s| s.phones().map(str::to_string))
            .collect::<Vec<_>>();
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn unknown_phone_is_a_failure_not_partial_output() {
    let err = syllabify(&phones("p a x i"), &phonology("p")).unwrap_err();
    assert_eq!(
        err,
        SyllabificationFailure::UnknownPhone {
            phone: "x".to_string()
        }
    );
}

#[test]
fn coverage_check_reports_mismatch() {
    let syllable = Syllable {
        onset: Vec::new(),
        nucleus: "a".to_string(),
        coda: Vec::new(),
    };
    assert!(check_coverage(std::slice::from_ref(&syllable), 1).is_ok());
    assert_eq!(
        check_coverage(&[syllable], 2),
        Err(SyllabificationFailure::Inconsistent {
            covered: 1,
            expected: 2
        })
    );
}
