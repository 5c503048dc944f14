//! README template rendering.
//!
//! The README template is a Markdown document containing marker comments
//! such as `<!-- MOTTO -->`. This module renders the fragments that replace
//! them and performs the literal substitution.

mod collapse;
mod error;
mod renderer;
mod token;

pub use collapse::collapse_markup;
pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer, REFRESH_INTERVAL_HOURS};
pub use token::Token;

/// Replaces every marker of each token in `replacements` with its fragment.
///
/// Markers are matched literally in a single left-to-right pass, so a
/// fragment is never rescanned for markers. Markers of tokens without a
/// replacement are left as they are.
#[must_use]
pub fn substitute(document: &str, replacements: &[(Token, &str)]) -> String {
    let markers: Vec<(String, &str)> = replacements
        .iter()
        .map(|(token, fragment)| (token.marker(), *fragment))
        .collect();

    let mut out = String::with_capacity(document.len());
    let mut rest = document;

    loop {
        let next = markers
            .iter()
            .filter_map(|(marker, fragment)| {
                rest.find(marker.as_str())
                    .map(|at| (at, marker.len(), *fragment))
            })
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, len, fragment)) => {
                out.push_str(&rest[..at]);
                out.push_str(fragment);
                rest = &rest[at + len..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_motto_marker() {
        let result = substitute("# Hi\n<!-- MOTTO -->\n", &[(Token::Motto, "Hello")]);

        assert_eq!(result, "# Hi\nHello\n");
        assert!(!result.contains("<!-- MOTTO -->"));
    }

    #[test]
    fn replaces_every_occurrence() {
        let result = substitute(
            "<!-- MOTTO --> and <!-- MOTTO -->",
            &[(Token::Motto, "x")],
        );

        assert_eq!(result, "x and x");
    }

    #[test]
    fn leaves_other_markers_untouched() {
        let template = "a <!-- FOOTER --> b <!-- MOTTO --> c";
        let result = substitute(template, &[(Token::Motto, "M")]);

        assert_eq!(result, "a <!-- FOOTER --> b M c");
    }

    #[test]
    fn unmatched_token_is_a_no_op() {
        let template = "no markers here <!-- OTHER -->";

        assert_eq!(substitute(template, &[(Token::Footer, "F")]), template);
        assert_eq!(substitute(template, &[]), template);
    }

    #[test]
    fn fragments_are_not_rescanned() {
        let result = substitute(
            "<!-- MOTTO --> <!-- FOOTER -->",
            &[(Token::Motto, "<!-- FOOTER -->"), (Token::Footer, "F")],
        );

        assert_eq!(result, "<!-- FOOTER --> F");
    }

    #[test]
    fn markers_match_literally() {
        let template = "<!--MOTTO--> <!-- motto -->";

        assert_eq!(substitute(template, &[(Token::Motto, "x")]), template);
    }
}
