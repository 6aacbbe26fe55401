use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use prefmap_shared::codec::share_url;
use prefmap_shared::{MapType, PreferenceStore};

use crate::map_view::MAP_SVG_ID;

pub(crate) const COPIED_DISPLAY_MS: u32 = 3_000;

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

/// Absolute share link for the current page origin.
pub fn current_share_url(map: MapType, store: &PreferenceStore) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    let origin = window.location().origin().map_err(js_err)?;
    share_url(&origin, map, store).map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyMethod {
    AsyncClipboard,
    Textarea,
}

impl CopyMethod {
    /// `navigator.clipboard` is absent outside secure contexts.
    fn for_clipboard(present: bool) -> Self {
        if present {
            Self::AsyncClipboard
        } else {
            Self::Textarea
        }
    }
}

fn has_clipboard(navigator: &web_sys::Navigator) -> bool {
    js_sys::Reflect::get(navigator, &JsValue::from_str("clipboard"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

/// Copy `text` with the async clipboard API, falling back to a hidden
/// textarea and `execCommand("copy")` when the API is missing or rejects.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let navigator = window.navigator();
    match CopyMethod::for_clipboard(has_clipboard(&navigator)) {
        CopyMethod::Textarea => {
            tracing::debug!("clipboard API unavailable, using fallback");
            fallback_copy(text)
        }
        CopyMethod::AsyncClipboard => {
            let promise = navigator.clipboard().write_text(text);
            match JsFuture::from(promise).await {
                Ok(_) => Ok(()),
                Err(e) => {
                    tracing::debug!(error = %js_err(e), "clipboard write rejected, using fallback");
                    fallback_copy(text)
                }
            }
        }
    }
}

fn fallback_copy(text: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let textarea = document
        .create_element("textarea")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map_err(|_| "textarea cast failed".to_owned())?;
    textarea.set_value(text);
    textarea
        .style()
        .set_property("position", "fixed")
        .map_err(js_err)?;
    textarea.style().set_property("opacity", "0").map_err(js_err)?;
    body.append_child(&textarea).map_err(js_err)?;
    textarea.select();

    let copied = document
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| "not an HTML document".to_owned())
        .and_then(|doc| doc.exec_command("copy").map_err(js_err));
    textarea.remove();

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err("copy command was rejected".to_owned()),
        Err(e) => Err(e),
    }
}

pub(crate) fn svg_file_name(map: MapType) -> String {
    format!("prefmap-{}.svg", map.as_str().to_ascii_lowercase())
}

/// Save the rendered map as a standalone `.svg` file.
pub fn download_svg(map: MapType) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let svg = document
        .get_element_by_id(MAP_SVG_ID)
        .ok_or("map is not rendered")?
        .outer_html();

    let parts = js_sys::Array::of1(&JsValue::from_str(&svg));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/svg+xml");
    let blob =
        web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let href = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor cast failed".to_owned())?;
    anchor.set_href(&href);
    anchor.set_download(&svg_file_name(map));
    anchor.click();
    web_sys::Url::revoke_object_url(&href).map_err(js_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CopyMethod, svg_file_name};
    use prefmap_shared::MapType;

    #[test]
    fn missing_clipboard_goes_straight_to_textarea() {
        assert_eq!(CopyMethod::for_clipboard(false), CopyMethod::Textarea);
        assert_eq!(CopyMethod::for_clipboard(true), CopyMethod::AsyncClipboard);
    }

    #[test]
    fn svg_file_is_named_after_the_map() {
        assert_eq!(svg_file_name(MapType::Usa), "prefmap-usa.svg");
        assert_eq!(svg_file_name(MapType::Japan), "prefmap-japan.svg");
    }
}
