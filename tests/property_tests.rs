//! Property-based tests for the codec's round-trip guarantees.
//!
//! Inputs are built from runs so that long runs, digit runs and marker runs
//! show up far more often than in uniformly random strings.

use proptest::prelude::*;
use hashrle::{
    decode, decode_with_options, decompose, encode, encode_runs, expand, scan, CodecOptions,
    Error, Run,
};

fn run_text() -> impl Strategy<Value = String> {
    let runs = prop::collection::vec(
        (
            prop::sample::select(vec!['a', 'b', '1', '0', '9', '#', '\n', ' ', 'é']),
            1usize..25,
        ),
        0..12,
    );
    runs.prop_map(|runs| {
        runs.into_iter()
            .map(|(ch, count)| std::iter::repeat(ch).take(count).collect::<String>())
            .collect()
    })
}

/// Runs whose counts are either small or too large for any output buffer.
fn oversized_runs() -> impl Strategy<Value = Vec<Run>> {
    let count = prop_oneof![1usize..30, (usize::MAX / 2 + 1)..=usize::MAX];
    prop::collection::vec(
        (prop::sample::select(vec!['a', 'x', '#', 'é']), count)
            .prop_map(|(ch, count)| Run::new(ch, count)),
        1..6,
    )
}

proptest! {
    #[test]
    fn prop_round_trip(text in run_text()) {
        let encoded = encode(&text);
        prop_assert_eq!(decode(&encoded).unwrap(), text);
    }

    #[test]
    fn prop_round_trip_any_string(text in "\\PC{0,40}") {
        prop_assert_eq!(decode(&encode(&text)).unwrap(), text);
    }

    #[test]
    fn prop_repeated_encoding(text in run_text()) {
        let once = encode(&text);
        let twice = encode(&once);
        let back = decode(&decode(&twice).unwrap()).unwrap();
        prop_assert_eq!(back, text);
    }

    #[test]
    fn prop_scanner_recovers_encoder_tokens(text in run_text()) {
        let tokens = encode_runs(&decompose(&text));
        let encoded: String = tokens.iter().map(ToString::to_string).collect();
        prop_assert_eq!(scan(&encoded).unwrap(), tokens);
    }

    #[test]
    fn prop_runs_are_maximal(text in run_text()) {
        let runs = decompose(&text);
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].character, pair[1].character);
        }
        prop_assert!(runs.iter().all(|run| run.count >= 1));
        prop_assert_eq!(expand(&runs), text);
    }

    #[test]
    fn prop_decode_never_panics(input in "[a1#\n0-9]{0,30}") {
        let options = CodecOptions::new().with_max_decoded_len(10_000);
        let _ = decode_with_options(&input, &options);
    }

    #[test]
    fn prop_oversized_counts_are_errors(runs in oversized_runs()) {
        let encoded: String = encode_runs(&runs).iter().map(ToString::to_string).collect();
        let oversized = runs.iter().any(|run| run.count >= 30);

        match decode(&encoded) {
            Ok(decoded) => {
                prop_assert!(!oversized);
                prop_assert_eq!(decoded, expand(&runs));
            }
            Err(err) => {
                prop_assert!(oversized);
                prop_assert!(matches!(err, Error::OutputTooLarge(_)), "{:?}", err);
            }
        }
    }
}
