use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::PathBuf;

use dirwatch::watch::{scan_lines, DirectorySnapshot, TrackedFiles};
use proptest::prelude::*;

fn snapshot_of(names: &BTreeSet<String>) -> DirectorySnapshot {
    DirectorySnapshot::from_paths(names.iter().map(|n| PathBuf::from("/watched").join(n)))
}

// Small name pool so consecutive snapshots overlap often.
fn names_strategy() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("[a-e]\\.txt", 0..4)
}

// Lines drawn from a tiny vocabulary; roughly a third contain the magic text.
fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        prop_oneof![
            Just("plain".to_string()),
            Just("has MAGIC inside".to_string()),
            Just("magic lowercase".to_string()),
        ],
        0..30,
    )
}

proptest! {
    #[test]
    fn diff_reports_exact_set_differences(s1 in names_strategy(), s2 in names_strategy()) {
        let mut tracked = TrackedFiles::new();
        let first = tracked.diff(&snapshot_of(&s1));
        tracked.apply(&first);

        let second = snapshot_of(&s2);
        let diff = tracked.diff(&second);

        let expect_added: Vec<PathBuf> = s2
            .difference(&s1)
            .map(|n| PathBuf::from("/watched").join(n))
            .collect();
        let expect_removed: Vec<PathBuf> = s1
            .difference(&s2)
            .map(|n| PathBuf::from("/watched").join(n))
            .collect();
        prop_assert_eq!(&diff.added, &expect_added);
        prop_assert_eq!(&diff.removed, &expect_removed);

        tracked.apply(&diff);
        let now: Vec<PathBuf> = tracked.paths().map(|p| p.to_path_buf()).collect();
        let wanted: Vec<PathBuf> = second.iter().map(|p| p.to_path_buf()).collect();
        prop_assert_eq!(now, wanted);
    }

    #[test]
    fn incremental_scans_report_every_match_exactly_once(
        lines in lines_strategy(),
        cuts in proptest::collection::vec(0usize..30, 0..5),
    ) {
        let full: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let expected = scan_lines(Cursor::new(full.as_bytes()), 1, "MAGIC")?;

        // Grow the file in whole-line steps and scan after each step.
        let mut cuts: Vec<usize> = cuts.into_iter().map(|c| c.min(lines.len())).collect();
        cuts.push(lines.len());
        cuts.sort_unstable();

        let mut next_line = 1;
        let mut seen = Vec::new();
        for cut in cuts {
            let prefix: String = lines[..cut].iter().map(|l| format!("{l}\n")).collect();
            let outcome = scan_lines(Cursor::new(prefix.as_bytes()), next_line, "MAGIC")?;
            prop_assert!(outcome.next_line >= next_line);
            next_line = outcome.next_line;
            seen.extend(outcome.matches);
        }

        prop_assert_eq!(seen, expected.matches);
        prop_assert_eq!(next_line, lines.len() + 1);
    }

    #[test]
    fn shrinking_below_next_line_resets_to_length(
        lines in lines_strategy(),
        extra in 1usize..20,
    ) {
        let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let start = lines.len() + 1 + extra;

        let outcome = scan_lines(Cursor::new(content.as_bytes()), start, "MAGIC")?;
        prop_assert!(outcome.matches.is_empty());
        prop_assert_eq!(outcome.next_line, lines.len() + 1);
    }
}
