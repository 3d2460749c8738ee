use relative_path::RelativePath;
use std::collections::HashMap;

/// Caller-supplied mapping from relative link key (e.g. `"./section"`) to the
/// absolute URL it should point at after upload. Supplied fresh on every
/// parse; the engine never builds or retains one.
pub type LinkMap = HashMap<String, String>;

/// Rewrites relative link targets against a [`LinkMap`].
///
/// `base` is the linking file's directory relative to the tree root, so keys
/// are always root-relative no matter how deep the file sits or how mangled
/// the root path the caller walked from was (`..` segments and all).
#[derive(Debug, Clone, Copy)]
pub struct LinkResolver<'a> {
    map: &'a LinkMap,
    base: &'a RelativePath,
}

impl<'a> LinkResolver<'a> {
    pub fn new(map: &'a LinkMap, base: &'a RelativePath) -> Self {
        Self { map, base }
    }

    /// Resolver for content that lives at the tree root.
    pub fn rooted(map: &'a LinkMap) -> Self {
        Self::new(map, RelativePath::new(""))
    }

    /// Resolves a link target written in Markdown source.
    ///
    /// Absolute URLs pass through verbatim. Relative targets are normalized
    /// to a root-relative key and looked up exactly; a miss falls back to the
    /// target unchanged, leaving the caller to treat the link as broken.
    pub fn resolve(&self, target: &str) -> String {
        if target.contains("://") {
            return target.to_string();
        }
        match self.map.get(&self.map_key(target)) {
            Some(url) => url.clone(),
            None => target.to_string(),
        }
    }

    /// Normalizes `target` against the file's directory into the exact key
    /// shape the link map uses: `./`-prefixed and `.`/`..`-collapsed. Targets
    /// escaping the root keep their leading `..`.
    fn map_key(&self, target: &str) -> String {
        let normalized = self.base.join(target).normalize();
        let key = normalized.as_str();
        if key.starts_with("..") {
            key.to_string()
        } else {
            format!("./{key}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(&str, &str)]) -> LinkMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn mapped_target_resolves_to_url() {
        let map = map_of(&[("./section", "https://example.com/src/test")]);
        let resolver = LinkResolver::rooted(&map);
        assert_eq!(resolver.resolve("./section"), "https://example.com/src/test");
    }

    #[test]
    fn unmapped_target_passes_through() {
        let map = LinkMap::new();
        let resolver = LinkResolver::rooted(&map);
        assert_eq!(resolver.resolve("./missing"), "./missing");
    }

    #[test]
    fn absolute_url_is_verbatim() {
        let map = map_of(&[("./section", "https://example.com/section")]);
        let resolver = LinkResolver::rooted(&map);
        assert_eq!(
            resolver.resolve("https://other.example.com/"),
            "https://other.example.com/"
        );
    }

    #[test]
    fn nested_file_keys_are_root_relative() {
        let map = map_of(&[("./docs/section", "https://example.com/docs/section")]);
        let resolver = LinkResolver::new(&map, RelativePath::new("docs"));
        assert_eq!(
            resolver.resolve("./section"),
            "https://example.com/docs/section"
        );
    }

    #[test]
    fn parent_traversal_collapses_before_lookup() {
        let map = map_of(&[("./other", "https://example.com/other")]);
        let resolver = LinkResolver::new(&map, RelativePath::new("docs"));
        assert_eq!(resolver.resolve("../other"), "https://example.com/other");
    }

    #[test]
    fn target_escaping_the_root_keeps_its_dotdot_form() {
        let map = map_of(&[("../outside", "https://example.com/outside")]);
        let resolver = LinkResolver::rooted(&map);
        assert_eq!(resolver.resolve("../outside"), "https://example.com/outside");
    }
}
