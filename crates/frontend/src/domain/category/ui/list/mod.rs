//! Category list with search, enable/disable toggles and guarded deletion.

use contracts::domain::category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::category::api;
use crate::shared::icons::icon;
use crate::shared::notify::{Flash, FlashMessages};

#[component]
pub fn CategoryList(refresh: RwSignal<u32>) -> impl IntoView {
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Category>);
    let flash = Flash::new();

    Effect::new(move |_| {
        refresh.get();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(list) => categories.set(list),
                Err(e) => flash.error(e),
            }
            loading.set(false);
        });
    });

    let filtered = move || {
        let term = search.get().to_lowercase();
        categories
            .get()
            .into_iter()
            .filter(|c| term.is_empty() || c.name.to_lowercase().contains(&term))
            .collect::<Vec<_>>()
    };

    let on_toggle = move |category: Category| {
        spawn_local(async move {
            match api::set_active(&category.id, !category.is_active).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => flash.error(e),
            }
        });
    };

    let on_confirm_delete = move |_| {
        let Some(category) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api::delete_category(&category.id).await {
                Ok(()) => {
                    flash.success("Categoría eliminada con éxito");
                    refresh.update(|n| *n += 1);
                }
                Err(e) => flash.error(e),
            }
        });
    };

    view! {
        <section class="list list--categories">
            <FlashMessages flash=flash />
            <div class="list__search">
                {icon("search")}
                <input
                    type="text"
                    placeholder="Buscar categoría..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="list__loading">"Cargando..."</p> }
            >
                <div class="card-grid">
                    <For
                        each=filtered
                        key=|category| category.id.clone()
                        children=move |category| {
                            let navigate = use_navigate();
                            let name = category.name.clone();
                            let is_active = category.is_active;
                            let edit_path = format!("/edit-category/{}", category.id);
                            let for_toggle = category.clone();
                            view! {
                                <div class=if is_active { "card" } else { "card card--inactive" }>
                                    <div class="card__body">
                                        <span class="card__name">{name}</span>
                                        <span class="card__badge">
                                            {if is_active { "Activa" } else { "Inactiva" }}
                                        </span>
                                    </div>
                                    <div class="card__actions">
                                        <button
                                            class="btn btn--edit"
                                            on:click=move |_| navigate(&edit_path, Default::default())
                                        >
                                            "Editar"
                                        </button>
                                        <button
                                            class="btn btn--toggle"
                                            title=if is_active { "Desactivar" } else { "Activar" }
                                            on:click=move |_| on_toggle(for_toggle.clone())
                                        >
                                            {icon("power")}
                                        </button>
                                        <button
                                            class="btn btn--delete"
                                            on:click=move |_| pending_delete.set(Some(category.clone()))
                                        >
                                            {icon("trash")}
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
            {move || pending_delete.get().map(|category| view! {
                <div class="modal-backdrop">
                    <div class="modal">
                        <p>
                            "¿Eliminar la categoría \""
                            {category.name.clone()}
                            "\"? Esta acción no se puede deshacer."
                        </p>
                        <div class="modal__actions">
                            <button class="btn" on:click=move |_| pending_delete.set(None)>
                                "Cancelar"
                            </button>
                            <button class="btn btn--delete" on:click=on_confirm_delete>
                                "Eliminar"
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </section>
    }
}
