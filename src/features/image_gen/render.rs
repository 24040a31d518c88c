//! Inline markup for generated images

use crate::features::settings::ImageSize;

pub const ALT_TEXT: &str = "Generated image";

/// Chat surfaces show images at half their generated size
pub fn display_dimensions(size: ImageSize) -> (u32, u32) {
    let (width, height) = size.dimensions();
    (width / 2, height / 2)
}

/// Render an `<img>` fragment; quotes in the URL are percent-encoded
pub fn render_image_tag(url: &str, size: ImageSize) -> String {
    let (width, height) = display_dimensions(size);
    let src = url.replace('\'', "%27");
    format!(
        "<img src='{src}' style='width: {width}px; height: {height}px;' alt='{ALT_TEXT}' />"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_square() {
        let markup = render_image_tag("https://x/y.png", ImageSize::Square);
        assert_eq!(
            markup,
            "<img src='https://x/y.png' style='width: 512px; height: 512px;' alt='Generated image' />"
        );
    }

    #[test]
    fn test_half_scale_dimensions() {
        assert_eq!(display_dimensions(ImageSize::Landscape), (896, 512));
        assert_eq!(display_dimensions(ImageSize::Portrait), (512, 896));
        assert_eq!(display_dimensions(ImageSize::Small), (128, 128));
    }

    #[test]
    fn test_quote_in_url_is_encoded() {
        let markup = render_image_tag("https://x/it's.png", ImageSize::Medium);
        assert!(markup.contains("src='https://x/it%27s.png'"));
        assert!(markup.contains("width: 256px"));
    }
}
