//! Menu, side menu and breadcrumb construction.
//!
//! [`Navigator`] turns a [`PageContext`] into the navigation structures
//! consumed by templates. Each call scans the filesystem afresh; nothing is
//! cached between calls.
//!
//! # Error policy
//!
//! - The top-level menu scan is required: its failure is returned.
//! - Scans of menu children and of the side menu are optional: failures are
//!   logged and yield no entries.

use std::path::Path;

use serde::Serialize;

use crate::context::PageContext;
use crate::filter::{content_file_filter, is_navigable_directory};
use crate::link::{NavigationItem, build_link_in};
use crate::name::{DEFAULT_CONTENT_EXTENSION, KNOWN_EXTENSIONS, title_from_name_in};
use crate::scanner::{Entry, ScanError, scan};

/// Display text of the index document, compared case-insensitively.
const INDEX_TEXT: &str = "index";

/// Navigation settings.
#[derive(Clone, Debug)]
pub struct NavigatorConfig {
    /// Text of the first breadcrumb item.
    pub home_title: String,
    /// Extension of content files listed in the side menu (without the dot).
    pub content_extension: String,
    /// Extensions stripped from links and titles (without the dot).
    pub known_extensions: Vec<String>,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            home_title: "Home".to_owned(),
            content_extension: DEFAULT_CONTENT_EXTENSION.to_owned(),
            known_extensions: KNOWN_EXTENSIONS.iter().map(|&ext| ext.to_owned()).collect(),
        }
    }
}

/// One step of the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadCrumbItem {
    /// Display text.
    pub text: String,
    /// Link target.
    pub link: String,
}

/// Breadcrumb trail with the current page split out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Home followed by one item per base path segment.
    pub items: Vec<BreadCrumbItem>,
    /// Last segment item; `None` on the home page.
    pub current_page: Option<BreadCrumbItem>,
}

/// Everything templates need to render navigation around a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageNavigation {
    /// Top menu: directories with one level of children.
    pub menu: Vec<NavigationItem>,
    /// Sibling content files of the current document.
    pub side_menu: Vec<NavigationItem>,
    /// Breadcrumb trail, starting at Home.
    pub breadcrumb: Vec<BreadCrumbItem>,
    /// Last breadcrumb item, absent on the home page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<BreadCrumbItem>,
}

/// Builds navigation for documents.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    config: NavigatorConfig,
}

impl Navigator {
    /// Create a navigator.
    ///
    /// The content extension is always treated as a known extension.
    pub fn new(mut config: NavigatorConfig) -> Self {
        if !config.known_extensions.contains(&config.content_extension) {
            config
                .known_extensions
                .push(config.content_extension.clone());
        }
        Self { config }
    }

    /// Navigator configuration.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Build menu, side menu and breadcrumb for `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the menu directory cannot be listed.
    pub fn build(&self, ctx: &PageContext) -> Result<PageNavigation, ScanError> {
        let menu = self.menu(ctx)?;
        let side_menu = self.side_menu(ctx);
        let Breadcrumb {
            items: breadcrumb,
            current_page,
        } = self.breadcrumb(ctx);

        tracing::debug!(
            base_path = %ctx.base_path,
            menu = menu.len(),
            side_menu = side_menu.len(),
            breadcrumb = breadcrumb.len(),
            "Built navigation"
        );

        Ok(PageNavigation {
            menu,
            side_menu,
            breadcrumb,
            current_page,
        })
    }

    /// Navigable directories of `ctx.file_dir`, each with its own navigable
    /// subdirectories as children.
    ///
    /// The menu is relative to the current document's directory, not the
    /// document root: only a home context yields the site's top-level menu.
    /// Links are prefixed with [`PageContext::link_prefix`].
    ///
    /// Only one level of children is listed. An item without subdirectories
    /// has `children: None`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if `ctx.file_dir` cannot be listed.
    pub fn menu(&self, ctx: &PageContext) -> Result<Vec<NavigationItem>, ScanError> {
        let dirs = scan(&ctx.file_dir, is_navigable_directory)?;
        let prefix = ctx.link_prefix();

        let menu = dirs
            .iter()
            .map(|dir| {
                let mut item = self.link(dir, prefix);
                let children = self.menu_children(
                    &ctx.file_dir.join(&dir.name),
                    &format!("{prefix}{}/", dir.name),
                );
                if !children.is_empty() {
                    item.children = Some(children);
                }
                item
            })
            .collect();

        Ok(menu)
    }

    fn menu_children(&self, dir: &Path, prefix: &str) -> Vec<NavigationItem> {
        match scan(dir, is_navigable_directory) {
            Ok(entries) => entries.iter().map(|e| self.link(e, prefix)).collect(),
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "Menu entry has unreadable children");
                Vec::new()
            }
        }
    }

    /// Content files next to the current document, without the index.
    ///
    /// Links are prefixed with [`PageContext::link_prefix`].
    ///
    /// A directory that cannot be listed yields an empty side menu.
    pub fn side_menu(&self, ctx: &PageContext) -> Vec<NavigationItem> {
        self.try_side_menu(ctx).unwrap_or_else(|e| {
            if e.is_not_found() {
                tracing::debug!(path = %e.path.display(), "No directory for side menu");
            } else {
                tracing::warn!(error = %e, "Failed to build side menu");
            }
            Vec::new()
        })
    }

    /// Like [`side_menu`](Self::side_menu), but reports scan failures.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if `ctx.file_dir` cannot be listed.
    pub fn try_side_menu(&self, ctx: &PageContext) -> Result<Vec<NavigationItem>, ScanError> {
        let files = scan(
            &ctx.file_dir,
            content_file_filter(&self.config.content_extension),
        )?;

        Ok(files
            .iter()
            .map(|file| self.link(file, ctx.link_prefix()))
            .filter(|item| item.text.to_lowercase() != INDEX_TEXT)
            .collect())
    }

    /// Breadcrumb trail for `ctx.base_path`. Does not touch the filesystem.
    pub fn breadcrumb(&self, ctx: &PageContext) -> Breadcrumb {
        let mut items = vec![BreadCrumbItem {
            text: self.config.home_title.clone(),
            link: "/".to_owned(),
        }];

        let mut prefix = String::new();
        for segment in ctx
            .base_path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
        {
            items.push(BreadCrumbItem {
                text: title_from_name_in(segment, &self.config.known_extensions),
                link: format!("{prefix}/{segment}/"),
            });
            prefix.push('/');
            prefix.push_str(segment);
        }

        let current_page = if items.len() > 1 {
            items.last().cloned()
        } else {
            None
        };
        Breadcrumb {
            items,
            current_page,
        }
    }

    fn link(&self, entry: &Entry, prefix: &str) -> NavigationItem {
        build_link_in(entry, prefix, &self.config.known_extensions)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::scanner::ScanErrorKind;

    assert_impl_all!(Navigator: Send, Sync);

    fn item(text: &str, link: &str) -> NavigationItem {
        NavigationItem {
            text: text.to_owned(),
            link: link.to_owned(),
            children: None,
        }
    }

    fn crumb(text: &str, link: &str) -> BreadCrumbItem {
        BreadCrumbItem {
            text: text.to_owned(),
            link: link.to_owned(),
        }
    }

    fn context(file_dir: PathBuf, base_path: &str) -> PageContext {
        PageContext {
            file_path: file_dir.join("index.md"),
            file_dir,
            base_path: base_path.to_owned(),
            base_dir: base_path.to_owned(),
            is_home: base_path == "/",
        }
    }

    /// Create a small documentation tree:
    ///
    /// ```text
    /// index.md
    /// about.md
    /// _header.md
    /// .git/
    /// _drafts/
    /// api/
    /// docs/
    ///   index.md
    ///   getting-started.md
    ///   setup_guide.md
    ///   notes.txt
    ///   guide/
    ///     advanced/
    ///   reference/
    ///   .cache/
    /// ```
    fn create_site() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("index.md"), "# Home").unwrap();
        fs::write(root.join("about.md"), "# About").unwrap();
        fs::write(root.join("_header.md"), "header").unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::create_dir(root.join("_drafts")).unwrap();
        fs::create_dir(root.join("api")).unwrap();

        let docs = root.join("docs");
        fs::create_dir_all(docs.join("guide").join("advanced")).unwrap();
        fs::create_dir(docs.join("reference")).unwrap();
        fs::create_dir(docs.join(".cache")).unwrap();
        fs::write(docs.join("index.md"), "# Docs").unwrap();
        fs::write(docs.join("getting-started.md"), "# Start").unwrap();
        fs::write(docs.join("setup_guide.md"), "# Setup").unwrap();
        fs::write(docs.join("notes.txt"), "notes").unwrap();

        temp_dir
    }

    #[test]
    fn test_menu_lists_directories_with_children() {
        let site = create_site();
        let ctx = context(site.path().to_path_buf(), "/");

        let menu = Navigator::default().menu(&ctx).unwrap();

        assert_eq!(
            menu,
            vec![
                item("Api", "/api/"),
                NavigationItem {
                    text: "Docs".to_owned(),
                    link: "/docs/".to_owned(),
                    children: Some(vec![
                        item("Guide", "/docs/guide/"),
                        item("Reference", "/docs/reference/"),
                    ]),
                },
            ]
        );
    }

    #[test]
    fn test_menu_does_not_recurse_past_children() {
        let site = create_site();
        let ctx = context(site.path().to_path_buf(), "/");

        let menu = Navigator::default().menu(&ctx).unwrap();

        let docs = &menu[1];
        let guide = &docs.children.as_ref().unwrap()[0];
        assert_eq!(guide.text, "Guide");
        assert!(guide.children.is_none());
    }

    #[test]
    fn test_menu_item_without_subdirectories_has_no_children() {
        let site = create_site();
        let ctx = context(site.path().to_path_buf(), "/");

        let menu = Navigator::default().menu(&ctx).unwrap();

        assert_eq!(menu[0].text, "Api");
        assert_eq!(menu[0].children, None);
    }

    #[test]
    fn test_menu_uses_base_path_as_prefix() {
        let site = create_site();
        let ctx = context(site.path().join("docs"), "/docs/");

        let menu = Navigator::default().menu(&ctx).unwrap();

        assert_eq!(
            menu,
            vec![
                NavigationItem {
                    text: "Guide".to_owned(),
                    link: "/docs/guide/".to_owned(),
                    children: Some(vec![item("Advanced", "/docs/guide/advanced/")]),
                },
                item("Reference", "/docs/reference/"),
            ]
        );
    }

    #[test]
    fn test_menu_only_private_entries_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::create_dir(temp_dir.path().join("_layouts")).unwrap();
        fs::write(temp_dir.path().join(".env"), "").unwrap();
        let ctx = context(temp_dir.path().to_path_buf(), "/");

        let menu = Navigator::default().menu(&ctx).unwrap();

        assert!(menu.is_empty());
    }

    #[test]
    fn test_menu_missing_directory_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing");
        let ctx = context(missing.clone(), "/missing/");

        let err = Navigator::default().menu(&ctx).unwrap_err();

        assert_eq!(err.kind, ScanErrorKind::NotFound);
        assert_eq!(err.path, missing);
    }

    #[test]
    fn test_menu_children_unreadable_directory_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();

        let children =
            Navigator::default().menu_children(&temp_dir.path().join("gone"), "/gone/");

        assert!(children.is_empty());
    }

    #[test]
    fn test_side_menu_lists_content_files_without_index() {
        let site = create_site();
        let ctx = context(site.path().join("docs"), "/docs/");

        let side_menu = Navigator::default().side_menu(&ctx);

        assert_eq!(
            side_menu,
            vec![
                item("Getting started", "/docs/getting-started"),
                item("Setup guide", "/docs/setup_guide"),
            ]
        );
    }

    #[test]
    fn test_side_menu_at_root_skips_private_files() {
        let site = create_site();
        let ctx = context(site.path().to_path_buf(), "/");

        let side_menu = Navigator::default().side_menu(&ctx);

        assert_eq!(side_menu, vec![item("About", "/about")]);
    }

    #[test]
    fn test_side_menu_excludes_lowercase_index() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("index.md"), "").unwrap();
        fs::write(temp_dir.path().join("page.md"), "").unwrap();
        let ctx = context(temp_dir.path().to_path_buf(), "/");

        let side_menu = Navigator::default().side_menu(&ctx);

        assert_eq!(side_menu, vec![item("Page", "/page")]);
    }

    #[test]
    fn test_side_menu_excludes_uppercase_index() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("INDEX.md"), "").unwrap();
        fs::write(temp_dir.path().join("page.md"), "").unwrap();
        let ctx = context(temp_dir.path().to_path_buf(), "/");

        let side_menu = Navigator::default().side_menu(&ctx);

        assert_eq!(side_menu, vec![item("Page", "/page")]);
    }

    #[test]
    fn test_side_menu_missing_directory_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = context(temp_dir.path().join("missing"), "/missing/");

        let navigator = Navigator::default();

        assert!(navigator.side_menu(&ctx).is_empty());
        assert!(navigator.try_side_menu(&ctx).unwrap_err().is_not_found());
    }

    #[test]
    fn test_side_menu_custom_content_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("intro.markdown"), "").unwrap();
        fs::write(temp_dir.path().join("other.md"), "").unwrap();
        let ctx = context(temp_dir.path().to_path_buf(), "/");
        let navigator = Navigator::new(NavigatorConfig {
            content_extension: "markdown".to_owned(),
            ..NavigatorConfig::default()
        });

        let side_menu = navigator.side_menu(&ctx);

        assert_eq!(side_menu, vec![item("Intro", "/intro")]);
    }

    #[test]
    fn test_new_adds_content_extension_to_known() {
        let navigator = Navigator::new(NavigatorConfig {
            content_extension: "markdown".to_owned(),
            ..NavigatorConfig::default()
        });

        assert_eq!(
            navigator.config().known_extensions,
            vec!["html".to_owned(), "md".to_owned(), "markdown".to_owned()]
        );
    }

    #[test]
    fn test_breadcrumb_nested_path() {
        let ctx = context(PathBuf::from("/srv/docs/docs/guide"), "/docs/guide/");

        let breadcrumb = Navigator::default().breadcrumb(&ctx);

        assert_eq!(
            breadcrumb.items,
            vec![
                crumb("Home", "/"),
                crumb("Docs", "/docs/"),
                crumb("Guide", "/docs/guide/"),
            ]
        );
        assert_eq!(breadcrumb.current_page, Some(crumb("Guide", "/docs/guide/")));
    }

    #[test]
    fn test_breadcrumb_home_only() {
        let ctx = context(PathBuf::from("/srv/docs"), "/");

        let breadcrumb = Navigator::default().breadcrumb(&ctx);

        assert_eq!(breadcrumb.items, vec![crumb("Home", "/")]);
        assert_eq!(breadcrumb.current_page, None);
    }

    #[test]
    fn test_breadcrumb_empty_base_path() {
        let ctx = context(PathBuf::from("/srv/docs"), "");

        let breadcrumb = Navigator::default().breadcrumb(&ctx);

        assert_eq!(breadcrumb.items, vec![crumb("Home", "/")]);
        assert!(breadcrumb.current_page.is_none());
    }

    #[test]
    fn test_breadcrumb_skips_empty_segments_and_titles_names() {
        let ctx = context(PathBuf::from("/srv/docs"), "//user_guide//setup-notes.md");

        let breadcrumb = Navigator::default().breadcrumb(&ctx);

        assert_eq!(
            breadcrumb.items,
            vec![
                crumb("Home", "/"),
                crumb("User guide", "/user_guide/"),
                crumb("Setup notes", "/user_guide/setup-notes.md/"),
            ]
        );
    }

    #[test]
    fn test_breadcrumb_custom_home_title() {
        let navigator = Navigator::new(NavigatorConfig {
            home_title: "Start".to_owned(),
            ..NavigatorConfig::default()
        });
        let ctx = context(PathBuf::from("/srv/docs"), "/a/");

        let breadcrumb = navigator.breadcrumb(&ctx);

        assert_eq!(breadcrumb.items[0], crumb("Start", "/"));
    }

    #[test]
    fn test_build_combines_all_structures() {
        let site = create_site();
        let ctx = PageContext::resolve(site.path(), "/docs/").unwrap();

        let navigation = Navigator::default().build(&ctx).unwrap();

        assert_eq!(navigation.menu.len(), 2);
        assert_eq!(navigation.side_menu.len(), 2);
        assert_eq!(
            navigation.breadcrumb,
            vec![crumb("Home", "/"), crumb("Docs", "/docs/")]
        );
        assert_eq!(navigation.current_page, Some(crumb("Docs", "/docs/")));
    }

    #[test]
    fn test_build_document_request() {
        let site = create_site();
        let docs = site.path().join("docs");
        fs::write(docs.join("setup.md"), "# Setup").unwrap();
        let ctx = PageContext::resolve(site.path(), "/docs/setup").unwrap();

        let navigation = Navigator::default().build(&ctx).unwrap();

        let menu_links: Vec<_> = navigation.menu.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(menu_links, vec!["/docs/guide/", "/docs/reference/"]);
        assert_eq!(
            navigation.menu[0].children,
            Some(vec![item("Advanced", "/docs/guide/advanced/")])
        );
        assert_eq!(
            navigation.side_menu,
            vec![
                item("Getting started", "/docs/getting-started"),
                item("Setup", "/docs/setup"),
                item("Setup guide", "/docs/setup_guide"),
            ]
        );
        assert_eq!(
            navigation.breadcrumb,
            vec![
                crumb("Home", "/"),
                crumb("Docs", "/docs/"),
                crumb("Setup", "/docs/setup/"),
            ]
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let site = create_site();
        let ctx = PageContext::resolve(site.path(), "/").unwrap();
        let navigator = Navigator::default();

        let first = navigator.build(&ctx).unwrap();
        let second = navigator.build(&ctx).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_fails_when_menu_directory_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = context(temp_dir.path().join("missing"), "/missing/");

        let result = Navigator::default().build(&ctx);

        assert!(result.is_err());
    }

    #[test]
    fn test_page_navigation_serialization() {
        let navigation = PageNavigation {
            menu: vec![item("Docs", "/docs/")],
            side_menu: Vec::new(),
            breadcrumb: vec![crumb("Home", "/")],
            current_page: None,
        };

        let json = serde_json::to_value(&navigation).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "menu": [{"text": "Docs", "link": "/docs/"}],
                "side_menu": [],
                "breadcrumb": [{"text": "Home", "link": "/"}],
            })
        );
    }
}
