#[cfg(test)]
mod verify {
    use relevance::analysis::*;
    use relevance::language::{Class, Highlight, Span};

    fn positions(highlights: &[Highlight]) -> Vec<usize> {
        let mut result: Vec<usize> = highlights
            .iter()
            .map(|h| h.start)
            .collect();
        result.sort();
        result
    }

    #[test]
    fn single_pair_matches_from_either_side() {
        let text = "(a)";

        for offset in 0..=3 {
            let result = analyze_at(text, offset);
            assert_eq!(positions(&result), vec![0, 2], "offset {}", offset);
            assert!(result
                .iter()
                .all(|h| h.class == Class::Matched));
        }
    }

    #[test]
    fn unmatched_opener_from_both_positions() {
        let text = "x (y";

        // cursor at the bracket, then just after it
        assert_eq!(
            analyze_at(text, 2),
            vec![Highlight::unmatched(Span::single(2))]
        );
        assert_eq!(
            analyze_at(text, 3),
            vec![Highlight::unmatched(Span::single(2))]
        );
    }

    #[test]
    fn unmatched_closer() {
        assert_eq!(
            analyze_at("a)", 2),
            vec![Highlight::unmatched(Span::single(1))]
        );
    }

    #[test]
    fn other_bracket_kinds() {
        let text = "[a, {b}]";
        assert_eq!(positions(&analyze_at(text, 0)), vec![0, 7]);
        assert_eq!(positions(&analyze_at(text, 5)), vec![4, 6]);
    }

    #[test]
    fn offsets_count_characters() {
        // two-byte characters before and inside the pair
        let text = "é(ü)";
        assert_eq!(positions(&analyze_at(text, 2)), vec![1, 3]);
        assert_eq!(match_bracket(text, 4), match_bracket(text, 3));
    }

    #[test]
    fn plain_text_gives_nothing() {
        assert!(analyze_at("names of files", 3).is_empty());
    }
}
