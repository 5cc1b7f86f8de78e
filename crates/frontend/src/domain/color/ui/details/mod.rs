//! Create form and edit screen for a single color.
//!
//! Hex codes are normalized to uppercase before they leave the form, so the
//! palette never stores the same code under two spellings.

use contracts::domain::color::ColorDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::color::api;
use crate::shared::notify::{Flash, FlashMessages};

#[component]
pub fn CreateColorForm(refresh: RwSignal<u32>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let hex = RwSignal::new("#000000".to_string());
    let submitting = RwSignal::new(false);
    let flash = Flash::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut dto = ColorDto {
            name: name.get_untracked().trim().to_string(),
            hex: hex.get_untracked(),
        };
        dto.normalize();
        if let Err(e) = dto.validate() {
            flash.error(e);
            return;
        }
        submitting.set(true);
        spawn_local(async move {
            match api::create_color(&dto).await {
                Ok(()) => {
                    flash.success("Color creado con éxito");
                    name.set(String::new());
                    hex.set("#000000".to_string());
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
                placeholder="Nuevo color"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="color"
                prop:value=move || hex.get()
                on:input=move |ev| hex.set(event_target_value(&ev))
            />
            <span
                class="color-swatch color-swatch--preview"
                style=move || format!("background-color: {}", hex.get())
            ></span>
            <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Creando..." } else { "Crear" }}
            </button>
        </form>
    }
}

#[component]
pub fn EditColorPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = StoredValue::new(use_navigate());
    let name = RwSignal::new(String::new());
    let hex = RwSignal::new("#000000".to_string());
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
            match api::fetch_color(&id).await {
                Ok(color) => {
                    name.set(color.name);
                    hex.set(color.hex);
                }
                Err(e) => flash.error(e),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut dto = ColorDto {
            name: name.get_untracked().trim().to_string(),
            hex: hex.get_untracked(),
        };
        dto.normalize();
        if let Err(e) = dto.validate() {
            flash.error(e);
            return;
        }
        let id = id.get_untracked();
        let navigate = navigate.get_value();
        submitting.set(true);
        spawn_local(async move {
            match api::update_color(&id, &dto).await {
                Ok(()) => navigate("/colors", Default::default()),
                Err(e) => {
                    flash.error(e);
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--edit-color">
            <h1 class="page__title">"Editar color"</h1>
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
                    <label>
                        "Color"
                        <input
                            type="color"
                            prop:value=move || hex.get()
                            on:input=move |ev| hex.set(event_target_value(&ev))
                        />
                    </label>
                    <span
                        class="color-swatch color-swatch--preview"
                        style=move || format!("background-color: {}", hex.get())
                    ></span>
                    <div class="form__actions">
                        <a href="/colors" class="btn">"Cancelar"</a>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            "Guardar"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
