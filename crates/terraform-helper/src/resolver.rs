//! Narrowing an inventory down to exactly one document.

use crate::matcher::{find_exact_match, find_matches};
use crate::types::{DocsError, DocsResult, DocumentKind, SelectionOutcome};

/// Picks one candidate out of several, usually by asking a human.
pub trait Disambiguator {
    /// Return the chosen candidate, or an error describing why the choice
    /// was abandoned. `candidates` is never empty.
    fn select(&self, kind: DocumentKind, candidates: &[String]) -> Result<String, String>;
}

/// Classify the matches of `term` without asking anyone.
///
/// An exact (case-insensitive) match wins over any number of substring
/// matches.
pub fn classify(
    kind: DocumentKind,
    term: &str,
    inventory: &[String],
) -> DocsResult<SelectionOutcome> {
    let matches = find_matches(term, inventory);
    tracing::debug!(term, matches = matches.len(), "matched inventory");

    if matches.is_empty() {
        return Err(DocsError::NoMatches {
            kind,
            term: term.to_string(),
        });
    }

    if let Some(exact) = find_exact_match(term, &matches) {
        return Ok(SelectionOutcome::ExactMatch(exact.to_string()));
    }

    if matches.len() == 1 {
        let only = matches.into_iter().next().unwrap_or_default();
        return Ok(SelectionOutcome::SingleMatch(only));
    }

    Ok(SelectionOutcome::AmbiguousMatches(matches))
}

/// Resolve `term` to a single identifier, deferring to `disambiguator` only
/// when more than one non-exact match remains.
pub fn resolve(
    kind: DocumentKind,
    term: &str,
    inventory: &[String],
    disambiguator: &dyn Disambiguator,
) -> DocsResult<String> {
    match classify(kind, term, inventory)? {
        SelectionOutcome::ExactMatch(id) | SelectionOutcome::SingleMatch(id) => Ok(id),
        SelectionOutcome::AmbiguousMatches(candidates) => disambiguator
            .select(kind, &candidates)
            .map_err(DocsError::SelectionCancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Scripted stand-in for the interactive selector.
    struct Scripted {
        answer: Result<String, String>,
        seen: RefCell<Vec<Vec<String>>>,
    }

    impl Scripted {
        fn picking(name: &str) -> Self {
            Self {
                answer: Ok(name.to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn cancelling() -> Self {
            Self {
                answer: Err("interrupted".to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.seen.borrow().len()
        }
    }

    impl Disambiguator for Scripted {
        fn select(&self, _kind: DocumentKind, candidates: &[String]) -> Result<String, String> {
            self.seen.borrow_mut().push(candidates.to_vec());
            self.answer.clone()
        }
    }

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const R: DocumentKind = DocumentKind::Resource;

    #[test]
    fn test_ambiguous_goes_to_disambiguator_in_order() {
        let inv = items(&["aws_instance", "db_instance_profile", "launch_template"]);
        let picker = Scripted::picking("db_instance_profile");

        let got = resolve(R, "instance", &inv, &picker).unwrap();
        assert_eq!(got, "db_instance_profile");
        assert_eq!(
            picker.seen.borrow()[0],
            items(&["aws_instance", "db_instance_profile"])
        );
    }

    #[test]
    fn test_exact_match_wins_without_prompt() {
        let inv = items(&["instance", "aws_instance"]);
        let picker = Scripted::picking("aws_instance");

        assert_eq!(resolve(R, "instance", &inv, &picker).unwrap(), "instance");
        assert_eq!(picker.calls(), 0);
    }

    #[test]
    fn test_exact_match_wins_even_when_listed_last() {
        let inv = items(&["aws_instance", "spot_instance", "INSTANCE"]);
        assert_eq!(
            classify(R, "instance", &inv).unwrap(),
            SelectionOutcome::ExactMatch("INSTANCE".to_string())
        );
    }

    #[test]
    fn test_single_match() {
        let inv = items(&["aws_instance", "launch_template"]);
        let picker = Scripted::cancelling();
        assert_eq!(resolve(R, "launch", &inv, &picker).unwrap(), "launch_template");
        assert_eq!(picker.calls(), 0);
    }

    #[test]
    fn test_no_matches() {
        let inv = items(&["aws_instance"]);
        let err = resolve(R, "zz", &inv, &Scripted::cancelling()).unwrap_err();
        assert!(matches!(err, DocsError::NoMatches { ref term, .. } if term == "zz"));
    }

    #[test]
    fn test_cancelled_selection() {
        let inv = items(&["aws_instance", "spot_instance"]);
        let err = resolve(R, "instance", &inv, &Scripted::cancelling()).unwrap_err();
        assert!(matches!(err, DocsError::SelectionCancelled(_)));
    }

    #[test]
    fn test_classify_is_repeatable() {
        let inv = items(&["aws_instance", "db_instance_profile"]);
        let first = classify(R, "instance", &inv).unwrap();
        let second = classify(R, "instance", &inv).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first,
            SelectionOutcome::AmbiguousMatches(items(&["aws_instance", "db_instance_profile"]))
        );
    }
}
