//! Reference-system identifiers.

use std::fmt;

use super::error::TransformError;

/// EPSG code of the fixed geographic target system (WGS84).
pub const WGS84_CODE: u32 = 4326;

/// A parsed coordinate reference system identifier.
///
/// Built from an authority string of the form `AUTHORITY:CODE`, e.g.
/// `EPSG:4326`. The authority is normalized to upper case. Immutable
/// once constructed.
///
/// # Examples
///
/// ```
/// use geocursor::transform::ReferenceSystem;
///
/// let srs = ReferenceSystem::parse("epsg:3857").unwrap();
/// assert_eq!(srs.authority(), "EPSG");
/// assert_eq!(srs.code(), 3857);
/// assert_eq!(srs.authid(), "EPSG:3857");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceSystem {
    authority: String,
    code: u32,
}

impl ReferenceSystem {
    /// Parse an `AUTHORITY:CODE` identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidAuthority`] when the string has
    /// no colon, an empty or non-alphabetic authority, or a non-numeric
    /// code.
    pub fn parse(authid: &str) -> Result<Self, TransformError> {
        let malformed = || TransformError::InvalidAuthority(authid.to_string());

        let (authority, code) = authid.split_once(':').ok_or_else(malformed)?;
        if authority.is_empty() || !authority.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(malformed());
        }
        let code: u32 = code.parse().map_err(|_| malformed())?;

        Ok(Self {
            authority: authority.to_ascii_uppercase(),
            code,
        })
    }

    /// The fixed geographic target system, WGS84 (`EPSG:4326`).
    pub fn wgs84() -> Self {
        Self {
            authority: String::from("EPSG"),
            code: WGS84_CODE,
        }
    }

    /// Upper-cased authority name (e.g. `EPSG`).
    #[inline]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Numeric code within the authority.
    #[inline]
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Canonical `AUTHORITY:CODE` form.
    pub fn authid(&self) -> String {
        format!("{}:{}", self.authority, self.code)
    }
}

impl fmt::Display for ReferenceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.authority, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_authority_case() {
        let srs = ReferenceSystem::parse("epsg:4326").unwrap();
        assert_eq!(srs, ReferenceSystem::wgs84());
    }

    #[test]
    fn test_parse_rejects_missing_colon() {
        let result = ReferenceSystem::parse("EPSG4326");
        assert!(matches!(
            result.unwrap_err(),
            TransformError::InvalidAuthority(_)
        ));
    }

    #[test]
    fn test_parse_rejects_empty_authority() {
        assert!(ReferenceSystem::parse(":4326").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_code() {
        assert!(ReferenceSystem::parse("EPSG:WGS84").is_err());
        assert!(ReferenceSystem::parse("EPSG:").is_err());
    }

    #[test]
    fn test_display_matches_authid() {
        let srs = ReferenceSystem::parse("EPSG:3857").unwrap();
        assert_eq!(format!("{srs}"), "EPSG:3857");
        assert_eq!(srs.authid(), "EPSG:3857");
    }
}
