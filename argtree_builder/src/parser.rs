mod matches;
mod scanner;

pub use matches::Matches;
pub use scanner::Scanner;

use crate::api::Element;
use crate::model::ElementPath;
use crate::prelude::Matcher;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Run a container's matching loop over every remaining token.
///
/// Each token is offered to the elements in declaration order; the first element to consume it wins and the loop restarts at the new position.
/// Tokens no element consumes become the extra content of the container at `path`.
pub(crate) fn parse_remainder(
    elements: &[Element],
    path: &ElementPath,
    scanner: &mut Scanner,
    matches: &mut Matches,
) {
    matches.activate(path);

    while let Some(token) = scanner.current() {
        let position = scanner.position();
        let matched = elements
            .iter()
            .enumerate()
            .any(|(index, element)| element.try_parse(&path.child(index), scanner, matches));

        if !matched {
            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "No element matched '{token}' at {position}; extra content of {path}.",
                    position = scanner.position()
                );
            }

            matches.push_extra(path, token);
            scanner.advance(1);
        }

        debug_assert!(
            scanner.position() > position,
            "internal error - the cursor must advance on every offered token"
        );
    }
}

/// Compare a token against a trigger, case-folded when `ignore_case`.
pub(crate) fn equals(token: &str, trigger: &str, ignore_case: bool) -> bool {
    if ignore_case {
        token
            .chars()
            .flat_map(char::to_uppercase)
            .eq(trigger.chars().flat_map(char::to_uppercase))
    } else {
        token == trigger
    }
}

/// Strip a trigger prefix from a token, case-folded when `ignore_case`.
pub(crate) fn strip_prefix<'t>(token: &'t str, prefix: &str, ignore_case: bool) -> Option<&'t str> {
    if !ignore_case {
        return token.strip_prefix(prefix);
    }

    let mut rest = token.char_indices();

    for p in prefix.chars() {
        match rest.next() {
            Some((_, t)) if t.to_uppercase().eq(p.to_uppercase()) => {}
            _ => return None,
        }
    }

    let offset = rest.next().map_or(token.len(), |(offset, _)| offset);
    Some(&token[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/Verbose", "/Verbose", false, true)]
    #[case("/verbose", "/Verbose", false, false)]
    #[case("/verbose", "/Verbose", true, true)]
    #[case("/VERBOSE", "/Verbose", true, true)]
    #[case("/Verbos", "/Verbose", true, false)]
    #[case("/Verbosee", "/Verbose", true, false)]
    #[case("", "", false, true)]
    fn trigger_equals(
        #[case] token: &str,
        #[case] trigger: &str,
        #[case] ignore_case: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(equals(token, trigger, ignore_case), expected);
    }

    #[rstest]
    #[case("Output=out.txt", "Output=", false, Some("out.txt"))]
    #[case("Output=", "Output=", false, Some(""))]
    #[case("output=out.txt", "Output=", false, None)]
    #[case("output=out.txt", "Output=", true, Some("out.txt"))]
    #[case("OUTPUT=Out.Txt", "Output=", true, Some("Out.Txt"))]
    #[case("OutputExtra=x", "Output=", false, None)]
    #[case("OutputExtra=x", "Output=", true, None)]
    #[case("Out", "Output=", true, None)]
    #[case("Ünï=ö", "üNÏ=", true, Some("ö"))]
    fn trigger_strip_prefix(
        #[case] token: &str,
        #[case] prefix: &str,
        #[case] ignore_case: bool,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(strip_prefix(token, prefix, ignore_case), expected);
    }
}
