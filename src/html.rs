use maud::{DOCTYPE, Markup, PreEscaped, html};

// Class names, styled by `APP_STYLE`
pub const LINK_STYLE: &str = "link";
pub const PAGE_CONTAINER_STYLE: &str = "page";
pub const PAGE_HEADER_STYLE: &str = "page-header";
pub const MUTED_TEXT_STYLE: &str = "muted";
pub const LIST_STYLE: &str = "item-list";
pub const LIST_ITEM_STYLE: &str = "item";
const ERROR_STYLE: &str = "error-page";

/// The stylesheet for every page, inlined into the document head.
const APP_STYLE: &str = r#"
    body {
        margin: 0;
        font-family: system-ui, sans-serif;
        color: #111827;
        background: #f9fafb;
    }

    .page {
        max-width: 28rem;
        margin: 0 auto;
        padding: 2rem 1.5rem;
    }

    .page-header {
        display: flex;
        justify-content: space-between;
        align-items: flex-end;
    }

    .muted {
        color: #6b7280;
        font-size: 0.875rem;
    }

    .item-list {
        list-style: none;
        padding: 0;
    }

    .item {
        padding: 0.75rem 0;
        border-bottom: 1px solid #e5e7eb;
    }

    .link {
        color: #2563eb;
        text-decoration: underline;
    }

    .error-page {
        text-align: center;
        padding: 4rem 1rem;
    }

    .error-page h1 {
        font-size: 4.5rem;
        color: #2563eb;
        margin-bottom: 1rem;
    }

    .paginator {
        display: flex;
        gap: 0.5rem;
        align-items: center;
        justify-content: center;
        margin-top: 1.5rem;
    }

    .paginator .btn {
        min-width: 2.5rem;
        padding: 0.5rem 0.75rem;
        border: 1px solid #d1d5db;
        border-radius: 0.25rem;
        text-align: center;
        text-decoration: none;
    }

    .paginator .current-page {
        background: #2563eb;
        border-color: #2563eb;
        color: white;
        cursor: default;
    }

    .paginator .icon-chevron-left::before {
        content: "\2039";
    }

    .paginator .icon-chevron-right::before {
        content: "\203A";
    }
"#;

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Paginator" }
                style { (PreEscaped(APP_STYLE)) }
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str, home: &str) -> Markup {
    let content = html!(
        section class=(ERROR_STYLE)
        {
            h1 { (header) }

            p { strong { (description) } }

            p { (fix) }

            a href=(home) class=(LINK_STYLE)
            {
                "Back to the first page"
            }
        }
    );

    base(title, &content)
}
