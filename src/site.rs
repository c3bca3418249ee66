//! Static route table for the portfolio pages.

use strum::{Display, VariantArray};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, VariantArray)]
pub enum View {
    Home,
    Inquiries,
    Blog,
    Portfolio,
    Thanks,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

pub static ROUTES: [RouteEntry; 5] = [
    RouteEntry {
        path: "/",
        name: "Home",
        view: View::Home,
    },
    RouteEntry {
        path: "/inquiries",
        name: "Inquiries",
        view: View::Inquiries,
    },
    RouteEntry {
        path: "/blog",
        name: "Blog",
        view: View::Blog,
    },
    RouteEntry {
        path: "/portfolio",
        name: "Portfolio",
        view: View::Portfolio,
    },
    RouteEntry {
        path: "/thanks",
        name: "Thank You",
        view: View::Thanks,
    },
];

/// Resolve a request path to its route entry. One trailing slash is ignored.
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    let path = match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) if trimmed.ends_with('/') => return None,
        Some(trimmed) => trimmed,
    };

    ROUTES.iter().find(|entry| entry.path == path)
}

/// Like [`resolve`] for a site mounted under `base_path`.
pub fn resolve_with_base(base_path: &str, path: &str) -> Option<&'static RouteEntry> {
    let base = base_path.trim_end_matches('/');
    if base.is_empty() {
        return resolve(path);
    }

    match path.strip_prefix(base)? {
        "" => resolve("/"),
        rest if rest.starts_with('/') => resolve(rest),
        _ => None,
    }
}

/// Public URL of an entry under `base_path`.
pub fn href(base_path: &str, entry: &RouteEntry) -> String {
    let base = base_path.trim_end_matches('/');
    if entry.path == "/" {
        return format!("{base}/");
    }

    format!("{base}{}", entry.path)
}

pub fn entry(view: View) -> &'static RouteEntry {
    ROUTES
        .iter()
        .find(|entry| entry.view == view)
        .unwrap_or(&ROUTES[0])
}
