// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Repository name normalization.
//!
//! A normalized name contains only lowercase ASCII alphanumeric characters and
//! underscores: every other character of the source (punctuation, whitespace,
//! non-ASCII letters) is replaced by a single `_`. The mapping is idempotent
//! and is the only key used to join repositories with curated metadata and
//! with the include/exclude lists.

use std::{borrow::Borrow, fmt};

use serde::Serialize;

/// Normalized repository name used as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,)]
#[serde(transparent)]
pub struct NormalizedName(String,);

impl NormalizedName
{
    /// Normalizes the provided repository name.
    ///
    /// Characters are mapped one by one, so the result has exactly as many
    /// characters as the lowercased source.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitfolio::NormalizedName;
    ///
    /// let key = NormalizedName::new("Weather-Dashboard",);
    /// assert_eq!(key.as_str(), "weather_dashboard");
    /// ```
    pub fn new(source: &str,) -> Self
    {
        let mut normalized = String::with_capacity(source.len(),);

        for candidate in source.chars().flat_map(char::to_lowercase,) {
            match candidate {
                'a'..='z' | '0'..='9' => normalized.push(candidate,),
                _ => normalized.push('_',),
            }
        }

        Self(normalized,)
    }

    /// Returns the normalized key as a string slice.
    pub fn as_str(&self,) -> &str
    {
        &self.0
    }

    /// Returns `true` when `needle` occurs anywhere inside this name.
    pub fn contains(&self, needle: &NormalizedName,) -> bool
    {
        self.0.contains(needle.as_str(),)
    }

    /// Returns `true` when the key has no characters at all.
    pub fn is_empty(&self,) -> bool
    {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedName
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(&self.0,)
    }
}

impl AsRef<str,> for NormalizedName
{
    fn as_ref(&self,) -> &str
    {
        &self.0
    }
}

impl Borrow<str,> for NormalizedName
{
    fn borrow(&self,) -> &str
    {
        &self.0
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::NormalizedName;

    proptest! {
        #[test]
        fn normalization_is_idempotent(input in "\\PC{0,48}") {
            let once = NormalizedName::new(&input);
            let twice = NormalizedName::new(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalized_names_contain_only_allowed_characters(input in "\\PC{0,48}") {
            let key = NormalizedName::new(&input);
            prop_assert!(key.as_str().chars().all(|ch| matches!(ch, 'a'..='z' | '0'..='9' | '_')));
        }
    }

    #[test]
    fn lowercases_and_replaces_hyphens()
    {
        assert_eq!(NormalizedName::new("HV-System-v2").as_str(), "hv_system_v2");
    }

    #[test]
    fn every_separator_becomes_its_own_underscore()
    {
        assert_eq!(NormalizedName::new("a--b c.d").as_str(), "a__b_c_d");
    }

    #[test]
    fn keeps_existing_underscores()
    {
        assert_eq!(NormalizedName::new("recording_system").as_str(), "recording_system");
    }

    #[test]
    fn replaces_non_ascii_letters()
    {
        assert_eq!(NormalizedName::new("café").as_str(), "caf_");
    }

    #[test]
    fn empty_input_stays_empty()
    {
        assert!(NormalizedName::new("").is_empty());
    }

    #[test]
    fn contains_matches_substrings()
    {
        let name = NormalizedName::new("kda-campusconnect",);
        assert!(name.contains(&NormalizedName::new("campus")));
        assert!(!name.contains(&NormalizedName::new("campus-connect")));
    }

    #[test]
    fn display_matches_as_str()
    {
        let name = NormalizedName::new("Weather Dashboard",);
        assert_eq!(name.to_string(), name.as_str());
    }
}
