/// Reusable UI components

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::favorite::Favorite;
use crate::view::Page;

#[derive(Properties, PartialEq)]
pub struct FavoriteRowProps {
    pub favorite: Favorite,
    /// Receives the URL to remove
    pub on_remove: Callback<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(FavoriteRow)]
pub fn favorite_row(props: &FavoriteRowProps) -> Html {
    let favorite = &props.favorite;
    let label = if favorite.title.trim().is_empty() {
        favorite.url.clone()
    } else {
        favorite.title.clone()
    };

    html! {
        <li class="favorite-item">
            <a class="favorite-link" href={favorite.url.clone()} target="_blank" title={favorite.url.clone()}>
                {label}
            </a>
            <Button
                onclick={props.on_remove.reform({
                    let url = favorite.url.clone();
                    move |_| url.clone()
                })}
                disabled={props.disabled}
                variant={ButtonVariant::Danger}
                size={ButtonSize::Small}
            >
                {"✗"}
            </Button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub page: Page,
    /// Receives the page number to show
    pub on_change: Callback<usize>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let page = &props.page;
    if page.total_pages <= 1 {
        return html! {};
    }

    let current = page.page;

    html! {
        <div class="pager">
            <Button
                onclick={props.on_change.reform(move |_| current.saturating_sub(1))}
                disabled={!page.has_prev()}
                variant={ButtonVariant::Secondary}
                size={ButtonSize::Small}
            >
                {"‹"}
            </Button>
            <span class="pager-label">{format!("{} / {}", page.page, page.total_pages)}</span>
            <Button
                onclick={props.on_change.reform(move |_| current + 1)}
                disabled={!page.has_next()}
                variant={ButtonVariant::Secondary}
                size={ButtonSize::Small}
            >
                {"›"}
            </Button>
        </div>
    }
}
