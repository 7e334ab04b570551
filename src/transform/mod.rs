//! Page-level transforms run before rendering.
//!
//! Drop caps are stripped first so they never skew size statistics, then
//! running headers and footers are detected and removed, and finally each
//! page gets its body-size baseline. Failed page slots pass through as-is
//! and take no part in any statistic.

pub mod body_size;
pub mod drop_cap;
pub mod edges;

pub use body_size::{estimate_body_size, median};
pub use drop_cap::strip_drop_caps;
pub use edges::{detect_repeating_edges, remove_edges};

use crate::model::ExtractedPage;
use crate::options::Options;

/// Output of [`transform_pages`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    /// Transformed page slots, in original order
    pub pages: Vec<ExtractedPage>,
    /// Detected running header
    pub header: Option<String>,
    /// Detected running footer
    pub footer: Option<String>,
    /// Body-size baseline per page slot
    pub body_sizes: Vec<f32>,
}

/// Run the page transforms. The input is left untouched.
pub fn transform_pages(pages: &[ExtractedPage], options: &Options) -> Transformed {
    let mut pages: Vec<ExtractedPage> = pages
        .iter()
        .map(|slot| match slot {
            ExtractedPage::Text(page) => ExtractedPage::Text(strip_drop_caps(page)),
            failed => failed.clone(),
        })
        .collect();

    let (mut header, mut footer) = (None, None);
    if options.remove_headers_footers {
        (header, footer) = detect_repeating_edges(
            pages.iter().filter_map(ExtractedPage::text),
            options.header_footer_min_pages,
        );
        log::debug!("Detected header {:?}, footer {:?}", header, footer);

        if header.is_some() || footer.is_some() {
            pages = pages
                .iter()
                .map(|slot| match slot {
                    ExtractedPage::Text(page) => ExtractedPage::Text(remove_edges(
                        page,
                        header.as_deref(),
                        footer.as_deref(),
                    )),
                    failed => failed.clone(),
                })
                .collect();
        }
    }

    let body_sizes: Vec<f32> = pages
        .iter()
        .map(|slot| {
            slot.text().map_or(options.default_body_size, |page| {
                estimate_body_size(page, options.default_body_size)
            })
        })
        .collect();
    log::debug!("Body sizes: {:?}", body_sizes);

    Transformed {
        pages,
        header,
        footer,
        body_sizes,
    }
}
