//! Entry guard
//!
//! Validates the navigation trigger before the viewer renders anything.
//! Runs once per story ref, on activation only; playback-state changes
//! never re-trigger it.

use crate::types::EntryRequest;
use reel_core::StoryRef;

/// Outcome of the entry check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Entry is legitimate; proceed to load this story
    Enter(StoryRef),

    /// No rail context: redirect to the feed root, replacing the current
    /// navigation entry so back-navigation cannot re-enter the viewer
    RedirectReplace,

    /// Index/total missing or out of range: redirect to the feed root
    Redirect,
}

/// Check an entry request.
///
/// The rail-context check comes first: a bare deep link is rejected before
/// the parameters are even looked at, and no fetch is issued on either
/// rejection path.
pub fn check(request: &EntryRequest) -> GuardOutcome {
    if !request.from_rail {
        return GuardOutcome::RedirectReplace;
    }

    let (Some(index), Some(total)) = (request.index, request.total) else {
        return GuardOutcome::Redirect;
    };

    match StoryRef::new(index, total) {
        Ok(story) => GuardOutcome::Enter(story),
        Err(_) => GuardOutcome::Redirect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rail_entry_in_range_passes() {
        let outcome = check(&EntryRequest::from_rail(2, 3));
        match outcome {
            GuardOutcome::Enter(story) => {
                assert_eq!(story.index(), 2);
                assert_eq!(story.total(), 3);
            }
            other => panic!("expected Enter, got {other:?}"),
        }
    }

    #[test]
    fn deep_link_redirects_with_replace() {
        // Even with valid parameters, the missing rail context wins
        assert_eq!(
            check(&EntryRequest::deep_link(2, 3)),
            GuardOutcome::RedirectReplace
        );
    }

    #[test]
    fn out_of_range_redirects() {
        assert_eq!(check(&EntryRequest::from_rail(4, 3)), GuardOutcome::Redirect);
        assert_eq!(check(&EntryRequest::from_rail(0, 3)), GuardOutcome::Redirect);
    }

    #[test]
    fn missing_or_non_numeric_params_redirect() {
        assert_eq!(
            check(&EntryRequest::from_params("two", "3", true)),
            GuardOutcome::Redirect
        );
        assert_eq!(
            check(&EntryRequest::from_params("2", "", true)),
            GuardOutcome::Redirect
        );
    }
}
