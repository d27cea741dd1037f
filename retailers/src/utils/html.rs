use scraper::{ElementRef, Html, Selector};
use tracing::error;

use crate::errors::RetailerError;

pub(crate) fn element_to_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().into()
}

pub(crate) fn element_extract_attr(
    element: ElementRef,
    attr_name: &str,
) -> Result<String, RetailerError> {
    let Some(attr_value) = element.attr(attr_name) else {
        error!(
            "Failed to find attribute {} in element {:?}",
            attr_name, element
        );
        return Err(RetailerError::HtmlElementMissingAttribute(
            attr_name.into(),
            element.html(),
        ));
    };

    Ok(attr_value.trim().into())
}

/// First element matching `query_string` anywhere in the document
pub(crate) fn extract_element_from_document<'a>(
    html: &'a Html,
    query_string: &str,
) -> Result<ElementRef<'a>, RetailerError> {
    let Ok(selector) = Selector::parse(query_string) else {
        return Err(RetailerError::InvalidSelector(query_string.into()));
    };

    let Some(query_element) = html.select(&selector).next() else {
        error!("Failed to find element '{}' in page", query_string);

        return Err(RetailerError::HtmlMissingElement(query_string.into()));
    };

    Ok(query_element)
}
