//! "Did you mean" matching for unknown names

/// Pick the closest name to `query`, or `None` if nothing shares a prefix.
///
/// The first name (in iteration order) starting with the query wins,
/// ignoring case. Failing that, the name containing the longest leading
/// prefix of the query is chosen; on a tie the later name wins.
pub fn closest<'a, I>(query: &str, names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let names: Vec<&str> = names.into_iter().collect();
    if let Some(name) = names
        .iter()
        .copied()
        .find(|name| name.to_lowercase().starts_with(&query))
    {
        return Some(name);
    }

    let mut best: Option<(usize, &str)> = None;
    for name in names {
        let shared = shared_prefix_len(&query, &name.to_lowercase());
        if shared > 0 && best.is_none_or(|(len, _)| shared >= len) {
            best = Some((shared, name));
        }
    }
    best.map(|(_, name)| name)
}

/// Length in chars of the longest leading slice of `query` found anywhere
/// in `name`.
fn shared_prefix_len(query: &str, name: &str) -> usize {
    let ends: Vec<usize> = query
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .collect();
    ends.iter()
        .rposition(|&end| name.contains(&query[..end]))
        .map_or(0, |pos| pos + 1)
}
