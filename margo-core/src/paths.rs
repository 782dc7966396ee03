//! Pure path joining for generated file and package paths.

/// Join path segments with normalized separators.
///
/// The result is rooted at `./` when called with no segments or an empty
/// first segment. Each later segment has a single leading `/` stripped and
/// the accumulated path has a single trailing `/` stripped before the two
/// are joined, so an explicit trailing `/` survives only on the final
/// segment. No filesystem access is involved.
pub fn merge_paths(segments: &[&str]) -> String {
    let mut merged = String::new();
    if segments.first().map_or(true, |first| first.is_empty()) {
        merged.push_str("./");
    }
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 {
            merged.push_str(segment);
            continue;
        }
        if merged.ends_with('/') {
            merged.pop();
        }
        merged.push('/');
        merged.push_str(segment.strip_prefix('/').unwrap_or(segment));
    }
    merged
}
