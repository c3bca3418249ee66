use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::site::{self, ROUTES, RouteEntry, View};

pub const NOT_FOUND: &str = "Not Found";

pub struct NavLink {
    pub name: &'static str,
    pub href: String,
    pub active: bool,
}

/// Layout data shared by every page.
pub struct Page {
    pub title: String,
    pub nav: Vec<NavLink>,
    pub contact_endpoint: String,
    pub thanks_href: String,
}

pub struct Template {
    site_title: String,
    base_path: String,
    update_title: bool,
}

impl Template {
    pub fn new(config: &crate::config::SiteConfig) -> Self {
        Self {
            site_title: config.title.to_owned(),
            base_path: config.base_path.to_owned(),
            update_title: config.update_title,
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Page for a matched route, titled after the route name when enabled.
    pub fn page(&self, entry: &RouteEntry) -> Page {
        let title = if self.update_title {
            entry.name.to_owned()
        } else {
            self.site_title.to_owned()
        };

        self.page_with_title(title, Some(entry.view))
    }

    pub fn not_found_page(&self) -> Page {
        self.page_with_title(NOT_FOUND.to_owned(), None)
    }

    fn page_with_title(&self, title: String, current: Option<View>) -> Page {
        let nav = ROUTES
            .iter()
            .filter(|entry| entry.view != View::Thanks)
            .map(|entry| NavLink {
                name: entry.name,
                href: site::href(&self.base_path, entry),
                active: Some(entry.view) == current,
            })
            .collect();

        Page {
            title,
            nav,
            contact_endpoint: crate::routes::CONTACT_ENDPOINT.to_owned(),
            thanks_href: site::href(&self.base_path, site::entry(View::Thanks)),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("{err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(&state.config.site))
    }
}

#[derive(askama::Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: Page,
}

#[derive(askama::Template)]
#[template(path = "inquiries.html")]
pub struct InquiriesTemplate {
    pub page: Page,
}

#[derive(askama::Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub page: Page,
}

#[derive(askama::Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate {
    pub page: Page,
}

#[derive(askama::Template)]
#[template(path = "thanks.html")]
pub struct ThanksTemplate {
    pub page: Page,
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub page: Page,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_page_title_follows_route_name() {
        let template = Template::new(&SiteConfig::default());
        let page = template.page(site::entry(View::Thanks));

        assert_eq!(page.title, "Thank You");
    }

    #[test]
    fn test_page_title_fixed_when_updates_disabled() {
        let template = Template::new(&SiteConfig {
            title: "Jane Doe".to_owned(),
            update_title: false,
            ..SiteConfig::default()
        });
        let page = template.page(site::entry(View::Blog));

        assert_eq!(page.title, "Jane Doe");
    }

    #[test]
    fn test_nav_marks_current_route() {
        let template = Template::new(&SiteConfig::default());
        let page = template.page(site::entry(View::Portfolio));

        let active: Vec<_> = page.nav.iter().filter(|l| l.active).map(|l| l.name).collect();
        assert_eq!(active, vec!["Portfolio"]);
        assert!(page.nav.iter().all(|l| l.name != "Thank You"));
    }

    #[test]
    fn test_nav_links_use_base_path() {
        let template = Template::new(&SiteConfig {
            base_path: "/folio".to_owned(),
            ..SiteConfig::default()
        });
        let page = template.not_found_page();

        assert_eq!(page.nav[0].href, "/folio/");
        assert_eq!(page.thanks_href, "/folio/thanks");
        assert!(page.nav.iter().all(|l| !l.active));
    }
}
