//! Preference-ordered ranking of candidate URLs.

use std::collections::HashMap;

use tracing::warn;

use crate::config::SchemePreference;
use crate::uri::scheme_of;

/// Insertion-ordered mapping from scheme token to its URL group.
///
/// Duplicate schemes append to the existing group, so the first-seen order
/// of both schemes and the URLs within a scheme survives ranking.
#[derive(Debug, Default)]
struct SchemeUrlMap {
    order: Vec<String>,
    groups: HashMap<String, Vec<String>>,
}

impl SchemeUrlMap {
    fn push(&mut self, scheme: &str, url: String) {
        match self.groups.get_mut(scheme) {
            Some(group) => group.push(url),
            None => {
                self.order.push(scheme.to_string());
                self.groups.insert(scheme.to_string(), vec![url]);
            }
        }
    }

    fn remove(&mut self, scheme: &str) -> Option<Vec<String>> {
        let group = self.groups.remove(scheme)?;
        self.order.retain(|seen| seen != scheme);
        Some(group)
    }

    fn into_groups(self) -> impl Iterator<Item = Vec<String>> {
        let Self { order, mut groups } = self;
        order
            .into_iter()
            .filter_map(move |scheme| groups.remove(&scheme))
    }
}

/// Order candidate URLs by the configured scheme preference.
///
/// Each preferred scheme contributes its whole URL group in preference
/// order; the remaining groups follow in first-seen order. Ranking is a
/// permutation of its input except for entries whose scheme cannot be
/// determined, which are skipped.
pub fn rank_urls(urls: Vec<String>, preference: &SchemePreference) -> Vec<String> {
    let mut map = SchemeUrlMap::default();
    for url in urls {
        match scheme_of(&url) {
            Some(scheme) => {
                let scheme = scheme.to_string();
                map.push(&scheme, url);
            }
            None => warn!(%url, "skipping candidate URL without a scheme"),
        }
    }

    let mut ranked = Vec::new();
    for scheme in preference.schemes() {
        if let Some(group) = map.remove(scheme) {
            ranked.extend(group);
        }
    }
    for group in map.into_groups() {
        ranked.extend(group);
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|url| url.to_string()).collect()
    }

    #[test]
    fn no_preference_keeps_document_order() {
        let ranked = rank_urls(
            urls(&["synapse://x", "gs://y"]),
            &SchemePreference::default(),
        );

        assert_eq!(ranked, ["synapse://x", "gs://y"]);
    }

    #[test]
    fn preferred_schemes_come_first_in_preference_order() {
        let ranked = rank_urls(
            urls(&["synapse://s/p", "gs://g/p", "s3cmd://c/p", "s3://a/p"]),
            &SchemePreference::parse("gs, s3, s3cmd, synapse"),
        );

        assert_eq!(ranked, ["gs://g/p", "s3://a/p", "s3cmd://c/p", "synapse://s/p"]);
    }

    #[test]
    fn duplicate_schemes_merge_preserving_sub_order() {
        let ranked = rank_urls(
            urls(&["gs://a", "s3://b", "gs://c"]),
            &SchemePreference::parse("gs, s3"),
        );

        assert_eq!(ranked, ["gs://a", "gs://c", "s3://b"]);
    }

    #[test]
    fn unpreferred_schemes_trail_in_first_seen_order() {
        let ranked = rank_urls(
            urls(&["synapse://s", "ftp://f", "gs://g", "sbg://b"]),
            &SchemePreference::parse("gs"),
        );

        assert_eq!(ranked, ["gs://g", "synapse://s", "ftp://f", "sbg://b"]);
    }

    #[test]
    fn preferences_for_absent_schemes_are_ignored() {
        let ranked = rank_urls(
            urls(&["gs://g", "s3://a"]),
            &SchemePreference::parse("synapse, s3"),
        );

        assert_eq!(ranked, ["s3://a", "gs://g"]);
    }

    #[test]
    fn entries_without_a_scheme_are_dropped() {
        let ranked = rank_urls(
            urls(&["gs://g", "not-a-url", "s3://a"]),
            &SchemePreference::default(),
        );

        assert_eq!(ranked, ["gs://g", "s3://a"]);
    }

    #[test]
    fn ranking_is_a_permutation() {
        let input = urls(&["gs://1", "s3://2", "gs://3", "synapse://4", "ftp://5"]);
        let mut ranked = rank_urls(input.clone(), &SchemePreference::parse("ftp, s3"));
        let mut expected = input;

        ranked.sort();
        expected.sort();
        assert_eq!(ranked, expected);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(rank_urls(Vec::new(), &SchemePreference::parse("gs")).is_empty());
    }
}
