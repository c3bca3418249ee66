use axum::{
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::{
    site::{self, View},
    template::{
        BlogTemplate, HomeTemplate, InquiriesTemplate, NotFoundTemplate, PortfolioTemplate,
        Template, ThanksTemplate,
    },
};

/// Renders the view the route table maps `uri` to, or the not-found page.
pub async fn page(template: Template, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD")],
            "Method Not Allowed",
        )
            .into_response();
    }

    let Some(entry) = site::resolve_with_base(template.base_path(), uri.path()) else {
        tracing::debug!(path = uri.path(), "No route matched");

        let page = template.not_found_page();
        return (StatusCode::NOT_FOUND, template.render(NotFoundTemplate { page }))
            .into_response();
    };

    let page = template.page(entry);

    match entry.view {
        View::Home => template.render(HomeTemplate { page }),
        View::Inquiries => template.render(InquiriesTemplate { page }),
        View::Blog => template.render(BlogTemplate { page }),
        View::Portfolio => template.render(PortfolioTemplate { page }),
        View::Thanks => template.render(ThanksTemplate { page }),
    }
}
