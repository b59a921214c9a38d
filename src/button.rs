//! Button primitives shared by the pagination controls.
//!
//! [AnchorButton] is a link styled as a button and [Button] is a button that
//! does nothing on its own, e.g. to mark the current page.

use maud::{Markup, html};

use crate::class_names::combine_class_names;

/// The class every button primitive carries.
pub const BUTTON_CLASS: &str = "btn";

/// Where an [AnchorButton] points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    /// The link target.
    pub url: &'a str,
    /// Internal links navigate within the app, external links open in a new tab.
    pub internal: bool,
}

/// A link that looks like a button.
#[derive(Debug, Clone)]
pub struct AnchorButton<'a> {
    link: Link<'a>,
    class_name: Option<&'a str>,
    aria_label: Option<&'a str>,
}

impl<'a> AnchorButton<'a> {
    /// A link to `url` within the app.
    pub fn internal(url: &'a str) -> Self {
        Self::new(Link {
            url,
            internal: true,
        })
    }

    /// A link to `url` on another site.
    pub fn external(url: &'a str) -> Self {
        Self::new(Link {
            url,
            internal: false,
        })
    }

    /// Create a button for `link`.
    pub fn new(link: Link<'a>) -> Self {
        Self {
            link,
            class_name: None,
            aria_label: None,
        }
    }

    /// Add extra classes on top of [BUTTON_CLASS].
    pub fn class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    /// Label the link for assistive technology, e.g. when `content` is an icon.
    pub fn aria_label(mut self, aria_label: &'a str) -> Self {
        self.aria_label = Some(aria_label);
        self
    }

    /// Render the link around `content`.
    pub fn into_html(self, content: Markup) -> Markup {
        let class = combine_class_names([Some(BUTTON_CLASS), self.class_name]);

        if self.link.internal {
            html!(
                a href=(self.link.url) class=(class) aria-label=[self.aria_label]
                {
                    (content)
                }
            )
        } else {
            html!(
                a
                    href=(self.link.url)
                    class=(class)
                    aria-label=[self.aria_label]
                    target="_blank"
                    rel="nofollow noopener noreferrer"
                {
                    (content)
                }
            )
        }
    }
}

/// A button that is not a link.
#[derive(Debug, Clone, Default)]
pub struct Button<'a> {
    class_name: Option<&'a str>,
    is_current_page: bool,
}

impl<'a> Button<'a> {
    /// A plain button with only [BUTTON_CLASS].
    pub fn new() -> Self {
        Self::default()
    }

    /// Add extra classes on top of [BUTTON_CLASS].
    pub fn class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    /// Mark the button as the current page with `aria-current="page"`.
    pub fn current_page(mut self) -> Self {
        self.is_current_page = true;
        self
    }

    /// Render the button around `content`.
    pub fn into_html(self, content: Markup) -> Markup {
        let class = combine_class_names([Some(BUTTON_CLASS), self.class_name]);

        html!(
            button
                type="button"
                class=(class)
                aria-current=[self.is_current_page.then_some("page")]
            {
                (content)
            }
        )
    }
}
