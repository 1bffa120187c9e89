use crate::settings::Intensity;

/// DOM id of the injected `<style>` element. Fixed so the shim can locate a
/// prior instance and replace or remove it deterministically.
pub const STYLE_ELEMENT_ID: &str = "greyscale-web-extension";

/// The single CSS rule this system ever injects.
pub fn greyscale_css(intensity: Intensity) -> String {
    format!(
        "html {{\n  filter: grayscale({p}%) !important;\n  -webkit-filter: grayscale({p}%) !important;\n}}\n",
        p = intensity.percent()
    )
}
