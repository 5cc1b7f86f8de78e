//! Create form and edit screen for a single category.

use contracts::domain::category::CategoryDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::category::api;
use crate::shared::notify::{Flash, FlashMessages};

#[component]
pub fn CreateCategoryForm(refresh: RwSignal<u32>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let flash = Flash::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = CategoryDto {
            name: name.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            flash.error(e);
            return;
        }
        submitting.set(true);
        spawn_local(async move {
            match api::create_category(&dto).await {
                Ok(()) => {
                    flash.success("Categoría creada con éxito");
                    name.set(String::new());
                    refresh.update(|n| *n += 1);
                }
                Err(e) => flash.error(e),
            }
            submitting.set(false);
        });
    };

    view! {
        <form class="form form--inline" on:submit=on_submit>
            <FlashMessages flash=flash />
            <input
                type="text"
                placeholder="Nueva categoría"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Creando..." } else { "Crear" }}
            </button>
        </form>
    }
}

#[component]
pub fn EditCategoryPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = StoredValue::new(use_navigate());
    let name = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let flash = Flash::new();

    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    Effect::new(move |_| {
        let id = id.get();
        if id.is_empty() {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match api::fetch_category(&id).await {
                Ok(category) => name.set(category.name),
                Err(e) => flash.error(e),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = CategoryDto {
            name: name.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            flash.error(e);
            return;
        }
        let id = id.get_untracked();
        let navigate = navigate.get_value();
        submitting.set(true);
        spawn_local(async move {
            match api::update_category(&id, &dto).await {
                Ok(()) => navigate("/categories", Default::default()),
                Err(e) => {
                    flash.error(e);
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--edit-category">
            <h1 class="page__title">"Editar categoría"</h1>
            <FlashMessages flash=flash />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="list__loading">"Cargando..."</p> }
            >
                <form class="form" on:submit=on_submit>
                    <label>
                        "Nombre"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form__actions">
                        <a href="/categories" class="btn">"Cancelar"</a>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            "Guardar"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
