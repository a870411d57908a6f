//! Destination rewriting for links.
//!
//! A link destination without a URL scheme refers to another document of the
//! same repository and becomes a platform-internal reference: the `doc:`
//! prefix followed by the destination with its file extension removed. Any
//! destination carrying a scheme (`https:`, `mailto:`, ...) is left untouched.
//! No filesystem lookup is done to check whether the target exists.
use log::warn;
use url::{ParseError, Url};

/// Prefix of platform-internal document references.
pub const INTERNAL_PREFIX: &str = "doc:";

/// Return true if `destination` carries a URL scheme.
///
/// Anything the URL parser rejects for lacking a base is relative and therefore
/// scheme-less. Every other outcome, including parse errors past the scheme,
/// means a scheme was present.
#[must_use]
pub fn has_scheme(destination: &str) -> bool {
  !matches!(Url::parse(destination), Err(ParseError::RelativeUrlWithoutBase))
}

/// Remove the file extension from the final path element of `destination`.
///
/// The extension is the suffix starting at the last `.` after the last `/`.
/// Only one extension is removed; anything following it (such as a fragment)
/// goes with it.
#[must_use]
pub fn strip_extension(destination: &str) -> &str {
  let name_start = destination.rfind('/').map_or(0, |slash| slash + 1);
  destination[name_start..]
    .rfind('.')
    .map_or(destination, |dot| &destination[..name_start + dot])
}

/// Rewrite a link destination for the documentation platform.
///
/// Scheme-less destinations become `doc:` references with the extension
/// stripped, scheme-bearing destinations are returned unchanged.
#[must_use]
pub fn rewrite_destination(destination: &str) -> String {
  if !has_scheme(destination) {
    return format!("{INTERNAL_PREFIX}{}", strip_extension(destination));
  }

  if let Err(e) = Url::parse(destination) {
    warn!("Leaving malformed link destination {destination:?} as-is: {e}");
  }
  destination.to_owned()
}
