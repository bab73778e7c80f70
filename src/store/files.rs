use crate::model::file_item::{Breadcrumb, FileItem};
use crate::seed::FILE_TREE;

/// Read-only view over the shared document tree.
pub struct FileCatalog {
    items: &'static [FileItem],
}

impl Default for FileCatalog {
    fn default() -> Self {
        Self {
            items: FILE_TREE.as_slice(),
        }
    }
}

/// `""`, `"/a/b/"` and `"a/b"` all become canonical `/`-rooted paths.
pub fn normalize_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    format!("/{}", parts.join("/"))
}

impl FileCatalog {
    /// Direct children of the folder at `path`.
    pub fn list_dir(&self, path: &str) -> Vec<FileItem> {
        let path = normalize_path(path);
        self.items
            .iter()
            .filter(|f| f.parent_path == path)
            .cloned()
            .collect()
    }

    /// Matches anywhere in the tree, regardless of the current folder.
    /// An empty query shows the folder at `current` instead.
    pub fn search(&self, query: &str, current: &str) -> Vec<FileItem> {
        if query.is_empty() {
            return self.list_dir(current);
        }
        self.items
            .iter()
            .filter(|f| f.matches(query))
            .cloned()
            .collect()
    }

    pub fn breadcrumbs(&self, path: &str) -> Vec<Breadcrumb> {
        let path = normalize_path(path);
        let mut trail = vec![Breadcrumb {
            name: "Home".to_string(),
            path: "/".to_string(),
        }];

        let mut current = String::new();
        for part in path.split('/').filter(|p| !p.is_empty()) {
            current.push('/');
            current.push_str(part);
            trail.push(Breadcrumb {
                name: part.to_string(),
                path: current.clone(),
            });
        }
        trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: Vec<FileItem>) -> Vec<String> {
        items.into_iter().map(|f| f.name).collect()
    }

    #[test]
    fn root_lists_top_level_folders() {
        let catalog = FileCatalog::default();
        assert_eq!(
            names(catalog.list_dir("/")),
            [
                "Financial Reports",
                "HR Documents",
                "Legal Documents",
                "Marketing Documents"
            ]
        );
        assert_eq!(catalog.list_dir("").len(), 4);
    }

    #[test]
    fn nested_listing_ignores_trailing_slash() {
        let catalog = FileCatalog::default();
        let listing = names(catalog.list_dir("/HR Documents/Policies/"));
        assert_eq!(listing, ["Remote_Work_Policy.pdf", "Leave_Policy.pdf"]);
        assert!(catalog.list_dir("/Nowhere").is_empty());
    }

    #[test]
    fn search_spans_the_whole_tree() {
        let catalog = FileCatalog::default();
        let hits = names(catalog.search("john doe", "/"));
        assert_eq!(hits, ["Q1_2024_Report.pdf", "Q4_2024_Report.pdf"]);

        // path matches pull in everything below a folder
        assert_eq!(catalog.search("monthly_analysis", "/HR Documents").len(), 3);
    }

    #[test]
    fn breadcrumbs_start_at_home() {
        let catalog = FileCatalog::default();
        assert_eq!(
            catalog.breadcrumbs("/"),
            vec![Breadcrumb {
                name: "Home".into(),
                path: "/".into()
            }]
        );

        let trail = catalog.breadcrumbs("/Financial Reports/Reports 2024");
        let paths: Vec<_> = trail.iter().map(|b| b.path.as_str()).collect();
        assert_eq!(
            paths,
            ["/", "/Financial Reports", "/Financial Reports/Reports 2024"]
        );
        assert_eq!(trail[2].name, "Reports 2024");
    }

    #[test]
    fn normalize_handles_missing_and_extra_slashes() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("a//b/"), "/a/b");
    }

    #[test]
    fn empty_search_falls_back_to_the_open_folder() {
        let catalog = FileCatalog::default();
        assert_eq!(
            names(catalog.search("", "/HR Documents")),
            names(catalog.list_dir("/HR Documents"))
        );
        assert_eq!(catalog.search("", "/").len(), 4);
    }
}
