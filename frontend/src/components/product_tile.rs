use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdFavorite;
use dioxus_free_icons::icons::md_toggle_icons::MdStar;
use dioxus_free_icons::Icon;

use common::product::ProductObject;

const STAR_COUNT: usize = 5;

#[component]
pub fn ProductTile(product: ReadSignal<ProductObject>) -> Element {
    let ProductObject {
        small_image_url,
        provider,
        short_description,
        is_liked,
        rating,
        ..
    } = product.read().clone();
    let display_name = product.read().display_name();

    rsx! {
        div {
            class: "x-product-tile",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                height: 100%;
                padding: 12px;
                border-radius: 12px;
                background: white;
                color: #111827;
                box-shadow: 0 2px 8px rgba(0,0,0,0.06);
                position: relative;
            ",
            if is_liked == Some(true) {
                span {
                    title: "Liked",
                    style: "position: absolute; top: 10px; right: 10px; color: #B4487A;",
                    Icon { icon: MdFavorite, style: "width: 20px; height: 20px;" }
                }
            }
            img {
                src: "{small_image_url}",
                alt: "{display_name}",
                style: "width: 100%; height: 180px; object-fit: contain;",
            }
            div { style: "font-size: 16px; font-weight: 500;", "{display_name}" }
            div { style: "font-size: 13px; color: rgba(0,0,0,0.6);", "{provider.name}" }
            div {
                style: "font-size: 13px; line-height: 1.4; overflow: hidden; max-height: 3.6em;",
                "{short_description}"
            }
            RatingStars { rating }
        }
    }
}

/// Rating out of five, rounded to whole stars.
#[component]
pub fn RatingStars(rating: f64) -> Element {
    let filled = filled_stars(rating);
    rsx! {
        div {
            title: "{rating:.1}",
            style: "display: flex; flex-direction: row; align-items: center;",
            for i in 0..STAR_COUNT {
                span {
                    key: "{i}",
                    style: if i < filled { "color: #F59E0B;" } else { "color: #D1D5DB;" },
                    Icon { icon: MdStar, style: "width: 18px; height: 18px;" }
                }
            }
        }
    }
}

fn filled_stars(rating: f64) -> usize {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.round() as usize).min(STAR_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_rounded_and_clamped() {
        assert_eq!(filled_stars(0.0), 0);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(f64::NAN), 0);
        assert_eq!(filled_stars(3.4), 3);
        assert_eq!(filled_stars(3.5), 4);
        assert_eq!(filled_stars(7.0), 5);
    }
}
