//! Ordered resource-path segments and their escaping onto a base URL.

use std::fmt;

use url::Url;

use crate::Error;

/// Path segments that follow the base endpoint, in order.
///
/// Segments are kept unescaped; [`PathSegments::apply_to`] percent-encodes each one
/// so an identifier containing `/` or `?` stays inside its own segment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathSegments(Vec<String>);

impl PathSegments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one segment.
    pub fn push(mut self, segment: impl fmt::Display) -> Self {
        self.0.push(segment.to_string());
        self
    }

    /// Appends a segment only when one is present.
    pub fn push_opt(self, segment: Option<impl fmt::Display>) -> Self {
        match segment {
            Some(segment) => self.push(segment),
            None => self,
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rejects blank segments and dot segments, which would collapse or rewrite the path.
    pub fn validate(&self) -> Result<(), Error> {
        for segment in &self.0 {
            if segment.trim().is_empty() {
                return Err(Error::Validation(
                    "path segment must not be empty".to_string(),
                ));
            }
            if segment == "." || segment == ".." {
                return Err(Error::Validation(format!(
                    "path segment {:?} is not a valid identifier",
                    segment
                )));
            }
        }
        Ok(())
    }

    /// Returns `base` with every segment appended and escaped.
    pub fn apply_to(&self, base: &Url) -> Result<Url, Error> {
        self.validate()?;
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::Configuration(format!("base URL {} cannot carry a path", base))
            })?
            .pop_if_empty()
            .extend(self.0.iter());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://frc-api.firstinspires.org/v2.0").unwrap()
    }

    #[test]
    fn no_segments_keeps_base() {
        let url = PathSegments::new().apply_to(&base()).unwrap();
        insta::assert_snapshot!(url.as_str(), @"https://frc-api.firstinspires.org/v2.0");
    }

    #[test]
    fn segments_join_in_order() {
        let url = PathSegments::new()
            .push(2024)
            .push("schedule")
            .push("ilil")
            .apply_to(&base())
            .unwrap();
        insta::assert_snapshot!(url.as_str(), @"https://frc-api.firstinspires.org/v2.0/2024/schedule/ilil");
    }

    #[test]
    fn trailing_slash_on_base_is_absorbed() {
        let base = Url::parse("http://127.0.0.1:8080/v2.0/").unwrap();
        let url = PathSegments::new().push(2024).apply_to(&base).unwrap();
        insta::assert_snapshot!(url.as_str(), @"http://127.0.0.1:8080/v2.0/2024");
    }

    #[test]
    fn identifiers_are_escaped() {
        let url = PathSegments::new()
            .push("alliances")
            .push("il/il?x")
            .apply_to(&base())
            .unwrap();
        insta::assert_snapshot!(url.as_str(), @"https://frc-api.firstinspires.org/v2.0/alliances/il%2Fil%3Fx");
    }

    #[test]
    fn optional_segments() {
        let segments = PathSegments::new()
            .push("awards")
            .push_opt(None::<&str>)
            .push_opt(Some(118));
        assert_eq!(segments.as_slice(), &["awards".to_string(), "118".to_string()]);
    }

    #[test]
    fn empty_segment_rejected() {
        let result = PathSegments::new().push("matches").push("").apply_to(&base());
        assert!(matches!(result, Err(Error::Validation(_))));
        let result = PathSegments::new().push("  ").apply_to(&base());
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn dot_segments_rejected() {
        assert!(PathSegments::new().push("..").validate().is_err());
        assert!(PathSegments::new().push(".").validate().is_err());
        assert!(PathSegments::new().push("...").validate().is_ok());
    }

    #[test]
    fn opaque_base_is_a_configuration_error() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        let result = PathSegments::new().push(2024).apply_to(&base);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
