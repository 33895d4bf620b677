/// Popup UI for the favorites extension

use std::rc::Rc;

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chrome::{ChromeStorage, current_page, open_tabs};
use crate::favorite::FavoritesList;
use crate::store::FavoritesStore;
use crate::ui::components::{FavoriteRow, Pager};
use crate::view::{filter_favorites, paginate};

/// Shared by every handler so all operations go through one queue
type Store = Rc<FavoritesStore<ChromeStorage>>;

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Loading(String),
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let store: Store = use_memo((), |_| FavoritesStore::new(ChromeStorage));
    let favorites = use_state(FavoritesList::new);
    let state = use_state(|| AppState::Loading("Loading favorites...".to_string()));
    let search_query = use_state(String::new);
    let page = use_state(|| 1usize);

    // Load favorites on mount
    {
        let store = store.clone();
        let favorites = favorites.clone();
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = store
                    .list()
                    .await
                    .map_err(|e| format!("Failed to load favorites: {}", e));
                apply_result(result, &favorites, &state);
            });
            || ()
        });
    }

    // Favorite the active tab
    let on_add = {
        let store = store.clone();
        let favorites = favorites.clone();
        let state = state.clone();

        Callback::from(move |_| {
            let store = store.clone();
            let favorites = favorites.clone();
            let state = state.clone();

            state.set(AppState::Loading("Adding current page...".to_string()));

            spawn_local(async move {
                let result = match current_page().await {
                    Ok(candidate) => store
                        .add(candidate)
                        .await
                        .map_err(|e| format!("Failed to add favorite: {}", e)),
                    Err(e) => Err(e),
                };
                apply_result(result, &favorites, &state);
            });
        })
    };

    // Remove one entry
    let on_remove = {
        let store = store.clone();
        let favorites = favorites.clone();
        let state = state.clone();

        Callback::from(move |url: String| {
            let store = store.clone();
            let favorites = favorites.clone();
            let state = state.clone();

            spawn_local(async move {
                let result = store
                    .remove(&url)
                    .await
                    .map_err(|e| format!("Failed to remove favorite: {}", e));
                apply_result(result, &favorites, &state);
            });
        })
    };

    let on_clear = {
        let store = store.clone();
        let favorites = favorites.clone();
        let state = state.clone();
        let page = page.clone();

        Callback::from(move |_| {
            let store = store.clone();
            let favorites = favorites.clone();
            let state = state.clone();
            let page = page.clone();

            spawn_local(async move {
                match store.clear().await {
                    Ok(()) => {
                        favorites.set(FavoritesList::new());
                        page.set(1);
                        state.set(AppState::Idle);
                    }
                    Err(e) => {
                        state.set(AppState::Error(format!("Failed to clear favorites: {}", e)));
                    }
                }
            });
        })
    };

    let on_open_all = {
        let store = store.clone();
        let state = state.clone();

        Callback::from(move |_| {
            let store = store.clone();
            let state = state.clone();

            state.set(AppState::Loading("Opening favorites...".to_string()));

            spawn_local(async move {
                let result = match store.open_all().await {
                    Ok(urls) => open_tabs(&urls).await,
                    Err(e) => Err(format!("Failed to load favorites: {}", e)),
                };
                match result {
                    Ok(()) => state.set(AppState::Idle),
                    Err(e) => state.set(AppState::Error(e)),
                }
            });
        })
    };

    // Search handler
    let on_search_input = {
        let search_query = search_query.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search_query.set(input.value());
                page.set(1);
            }
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |n: usize| page.set(n))
    };

    let is_busy = matches!(*state, AppState::Loading(_));
    let filtered = filter_favorites(&favorites, &search_query);
    let current = paginate(&filtered, *page, store.config().page_size);

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Skeb Favorites"}</h1>

            <div class="flex-column-gap">
                <Button onclick={on_add} disabled={is_busy} variant={ButtonVariant::Primary} block={true}>
                    {"⭐ Favorite This Page"}
                </Button>
                <Button onclick={on_open_all} disabled={is_busy || favorites.is_empty()} variant={ButtonVariant::Secondary} block={true}>
                    {"📂 Open All"}
                </Button>
                <Button onclick={on_clear} disabled={is_busy || favorites.is_empty()} variant={ButtonVariant::Danger} block={true}>
                    {"🗑️ Clear All"}
                </Button>
            </div>

            // Status display
            {match &*state {
                AppState::Loading(msg) => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{msg}</p>
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Idle => html! {}
            }}

            // Search bar
            <div class="search-container">
                <input
                    type="text"
                    placeholder="Search titles or URLs..."
                    value={(*search_query).clone()}
                    oninput={on_search_input}
                    class="search-input"
                />
            </div>

            if current.items.is_empty() {
                <div class="empty-state">
                    if search_query.trim().is_empty() {
                        <p>{"No favorites yet."}</p>
                    } else {
                        <p>{"No favorites match your search."}</p>
                    }
                </div>
            } else {
                <ul class="favorite-list">
                    {for current.items.iter().map(|favorite| html! {
                        <FavoriteRow
                            key={favorite.url.clone()}
                            favorite={favorite.clone()}
                            on_remove={on_remove.clone()}
                            disabled={is_busy}
                        />
                    })}
                </ul>
            }

            <Pager page={current.clone()} on_change={on_page_change} />

            <p class="footer-popup">
                {format!("{} favorites", favorites.len())}
            </p>
        </div>
    }
}

// Helper functions

fn apply_result(
    result: Result<FavoritesList, String>,
    favorites: &UseStateHandle<FavoritesList>,
    state: &UseStateHandle<AppState>,
) {
    match result {
        Ok(list) => {
            favorites.set(list);
            state.set(AppState::Idle);
        }
        Err(e) => {
            log::error!("{}", e);
            state.set(AppState::Error(e));
        }
    }
}
