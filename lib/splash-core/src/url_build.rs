//! URL building helpers.
//!
//! Both helpers take a [`Url`] by value and return the transformed URL, so they
//! compose left-to-right: `add_query_to_url(append_pathname_to_url(base, p), q)`.

use url::Url;

/// Appends `pathname` to the path of `url`.
///
/// Segments are joined with exactly one `/`, whatever the trailing slash of the
/// base or the leading slash of `pathname`.
///
/// # Example
///
/// ```
/// use splash_core::append_pathname_to_url;
/// use url::Url;
///
/// let base = Url::parse("https://api.unsplash.com/v1/").unwrap();
/// let url = append_pathname_to_url(base, "/photos/random");
/// assert_eq!(url.as_str(), "https://api.unsplash.com/v1/photos/random");
/// ```
#[must_use]
pub fn append_pathname_to_url(mut url: Url, pathname: &str) -> Url {
    let pathname = pathname.trim_start_matches('/');
    if pathname.is_empty() {
        return url;
    }

    let base = url.path().trim_end_matches('/');
    let joined = format!("{base}/{pathname}");
    url.set_path(&joined);
    url
}

/// Adds query pairs to `url`.
///
/// Keys already present in `url` are replaced by the new ones; the other
/// existing pairs are kept in front.
#[must_use]
pub fn add_query_to_url(mut url: Url, pairs: &[(String, String)]) -> Url {
    if pairs.is_empty() {
        return url;
    }

    let existing: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !pairs.iter().any(|(new_key, _)| new_key == key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in existing.iter().chain(pairs) {
            query.append_pair(key, value);
        }
    }
    url
}
