use crate::models::Entity;

/// Prepends to `collection` every candidate it does not already hold.
///
/// Candidates are matched by identifier. `None` candidates and candidates
/// without an identifier are skipped, and a candidate repeated in the
/// argument list is only added once (first occurrence wins). When nothing
/// is added the original vector is handed back untouched.
pub fn merge_into_collection_if_missing<'a, E, I>(collection: Vec<E>, candidates: I) -> Vec<E>
where
    E: Entity,
    I: IntoIterator<Item = Option<&'a E>>,
{
    let mut known: Vec<String> = collection
        .iter()
        .filter_map(|item| item.id().map(str::to_owned))
        .collect();

    let mut to_add = Vec::new();
    for candidate in candidates.into_iter().flatten() {
        let Some(id) = candidate.id() else {
            continue;
        };
        if known.iter().any(|k| k == id) {
            continue;
        }
        known.push(id.to_owned());
        to_add.push(candidate.clone());
    }

    if to_add.is_empty() {
        return collection;
    }

    to_add.extend(collection);
    to_add
}

/// Tracking key for option and list rows: the entity identifier.
pub fn track_by_id<E: Entity>(_index: usize, item: &E) -> &str {
    item.id().unwrap_or_default()
}
