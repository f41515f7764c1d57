// Tests for the scan loop
use crate::*;

#[test]
fn test_exact_match() {
    assert_eq!(Matcher::new("hello", "hello").search(), MatchResult::Found(0));
}

#[test]
fn test_substring_in_middle() {
    assert_eq!(Matcher::new("abcXYZdef", "XYZ").search(), MatchResult::Found(3));
}

#[test]
fn test_no_occurrence() {
    assert_eq!(Matcher::new("abcdef", "xyz").search(), MatchResult::NotFound);
}

#[test]
fn test_pattern_longer_than_text() {
    let matcher = Matcher::new("ab", "abcd");
    assert_eq!(matcher.search(), MatchResult::NotFound);
    assert_eq!(matcher.search_index(), -1);
    // the cursor already starts past the end
    assert_eq!(matcher.scan().count(), 0);
}

#[test]
fn test_first_occurrence() {
    assert_eq!(Matcher::new("ababab", "ab").search(), MatchResult::Found(0));
    assert_eq!(Matcher::new("xxabxxab", "ab").search(), MatchResult::Found(2));
}

#[test]
fn test_empty_pattern() {
    assert_eq!(Matcher::new("", "").search(), MatchResult::Found(0));
    assert_eq!(Matcher::new("abc", "").search(), MatchResult::Found(0));

    let matcher = Matcher::new("abc", "");
    let steps: Vec<Step> = matcher.scan().collect();
    assert_eq!(
        steps,
        vec![Step {
            cursor: -1,
            matched: 0,
            outcome: StepOutcome::Found(0),
        }]
    );
}

#[test]
fn test_empty_text() {
    assert_eq!(Matcher::new("", "a").search(), MatchResult::NotFound);
    assert_eq!(Matcher::new("", "abc").search_index(), -1);
}

#[test]
fn test_idempotent() {
    let matcher = Matcher::new("abcXYZdef", "XYZ");
    let first = matcher.search();
    let second = matcher.search();
    assert_eq!(first, second);
    assert_eq!(matcher.search_index(), 3);
    assert_eq!(matcher.search_index(), 3);

    let missing = Matcher::new("abcdef", "xyz");
    assert_eq!(missing.search(), missing.search());
}

#[test]
fn test_scan_trace() {
    let matcher = Matcher::new("abcXYZdef", "XYZ");
    let steps: Vec<Step> = matcher.scan().collect();
    assert_eq!(
        steps,
        vec![
            Step {
                cursor: 2,
                matched: 0,
                outcome: StepOutcome::Slide {
                    probe: Some('c'),
                    slide_width: 2,
                    slide: 2,
                },
            },
            Step {
                cursor: 4,
                matched: 0,
                outcome: StepOutcome::Slide {
                    probe: Some('Y'),
                    slide_width: 1,
                    slide: 1,
                },
            },
            Step {
                cursor: 5,
                matched: 3,
                outcome: StepOutcome::Found(3),
            },
        ]
    );
}

#[test]
fn test_probe_is_one_past_matched_run() {
    // 'b' matches at cursor 1, so the shift comes from text[2] = 'a'
    let matcher = Matcher::new("xbab", "ab");
    let first = matcher.scan().next();
    assert_eq!(
        first,
        Some(Step {
            cursor: 1,
            matched: 1,
            outcome: StepOutcome::Slide {
                probe: Some('a'),
                slide_width: 1,
                // slide_width == matched, so the matched run is not subtracted
                slide: 1,
            },
        })
    );
    assert_eq!(matcher.search(), MatchResult::Found(2));
}

#[test]
fn test_boundary_exhausted() {
    let matcher = Matcher::new("xab", "zab");
    let steps: Vec<Step> = matcher.scan().collect();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].matched, 2);
    assert_eq!(steps[0].outcome, StepOutcome::Exhausted);
    assert_eq!(matcher.search(), MatchResult::NotFound);
}

#[test]
fn test_cursor_runs_off_the_end() {
    let matcher = Matcher::new("abcdef", "xyz");
    let cursors: Vec<isize> = matcher.scan().map(|step| step.cursor).collect();
    assert_eq!(cursors, vec![2, 4]);
}

#[test]
fn test_scan_is_fused() {
    let matcher = Matcher::new("hello", "hello");
    let mut scan = matcher.scan();
    assert!(scan.next().is_some());
    assert!(scan.next().is_none());
    assert!(scan.next().is_none());
}

#[test]
fn test_single_char_pattern_at_start() {
    assert_eq!(Matcher::new("a", "a").search(), MatchResult::Found(0));
    assert_eq!(Matcher::new("abc", "a").search(), MatchResult::Found(0));
}

#[test]
fn test_non_ascii_offsets_are_chars() {
    assert_eq!(
        Matcher::new("日本語のテキスト", "テキスト").search(),
        MatchResult::Found(4)
    );
}

#[test]
fn test_find() {
    assert_eq!(find("abcXYZdef", "XYZ"), MatchResult::Found(3));
    assert_eq!(find("abcdef", "xyz"), MatchResult::NotFound);
}

#[test]
fn test_accessors() {
    let matcher = Matcher::new("text", "ex");
    assert_eq!(matcher.text(), &['t', 'e', 'x', 't']);
    assert_eq!(matcher.pattern(), &['e', 'x']);
    assert_eq!(matcher.option(), &SearchOption::default());
}

#[test]
fn test_match_result_conversions() {
    assert_eq!(MatchResult::Found(7).to_index(), 7);
    assert_eq!(MatchResult::NotFound.to_index(), search_limits::NOT_FOUND_INDEX);
    assert_eq!(MatchResult::from(Some(2)), MatchResult::Found(2));
    assert_eq!(MatchResult::from(None), MatchResult::NotFound);
    assert_eq!(Option::<usize>::from(MatchResult::Found(4)), Some(4));
    assert!(MatchResult::Found(0).is_found());
    assert!(!MatchResult::NotFound.is_found());
    assert_eq!(MatchResult::Found(3).to_string(), "found at 3");
    assert_eq!(MatchResult::NotFound.to_string(), "not found");
}

#[test]
fn test_matchers_on_threads() {
    let handles: Vec<_> = [("hello world", "world", 6), ("abcXYZdef", "XYZ", 3)]
        .into_iter()
        .map(|(text, pattern, expected)| {
            let matcher = Matcher::new(text, pattern);
            std::thread::spawn(move || (matcher.search(), expected))
        })
        .collect();
    for handle in handles {
        let (result, expected) = handle.join().unwrap();
        assert_eq!(result, MatchResult::Found(expected));
    }
}
