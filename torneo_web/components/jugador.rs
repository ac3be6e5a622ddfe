use chrono::NaiveDate;
use dioxus::prelude::*;
use rust_i18n::t;

use torneo_app::forms::JugadorForm;
use torneo_types::jugador::Jugador;

use super::form::{FormActions, FormContext, TextField};

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// `YYYY-MM-DD`, the format of `<input type="date">`.
fn birth_date(value: &Option<NaiveDate>) -> String {
    value
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Create / edit form of a player. No field is mandatory.
#[component]
pub fn JugadorUpdatePage(title: String, form: JugadorForm, context: FormContext) -> Element {
    let id = form.id.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div { class: "content-box p-6 bg-white max-w-lg mx-auto",
            h2 { id: "jugador-update-heading", class: "text-xl font-bold text-gray-700 mb-6", "{title}" }
            if let Some(failure) = &context.failure {
                p { class: "mb-3 text-red-600 error", "{failure}" }
            }
            form {
                action: "/jugadores",
                method: "post",
                input { r#type: "hidden", name: "return_to", value: "{context.return_to}" }
                input { r#type: "hidden", name: "id", value: "{id}" }
                TextField {
                    label: t!("jugador.apodo").to_string(),
                    name: "apodo",
                    value: text(&form.apodo),
                    input_type: "text",
                    required: false,
                    errors: context.errors_for("apodo"),
                }
                TextField {
                    label: t!("jugador.nombre").to_string(),
                    name: "nombre",
                    value: text(&form.nombre),
                    input_type: "text",
                    required: false,
                    errors: context.errors_for("nombre"),
                }
                TextField {
                    label: t!("jugador.apellido").to_string(),
                    name: "apellido",
                    value: text(&form.apellido),
                    input_type: "text",
                    required: false,
                    errors: context.errors_for("apellido"),
                }
                TextField {
                    label: t!("jugador.fecha_de_nacimiento").to_string(),
                    name: "fechaDeNacimiento",
                    value: birth_date(&form.fecha_de_nacimiento),
                    input_type: "date",
                    required: false,
                    errors: context.errors_for("fechaDeNacimiento"),
                }
                FormActions { return_to: context.return_to.clone() }
            }
        }
    }
}

#[component]
pub fn JugadorListPage(jugadores: Vec<Jugador>) -> Element {
    let title = t!("jugador.list.title");
    let create = t!("jugador.list.create");
    let edit = t!("common.edit");

    rsx! {
        div { class: "content-box p-6 bg-white",
            div { class: "flex justify-between items-center mb-4",
                h2 { class: "text-xl font-bold text-gray-700", "{title}" }
                a { class: "btn-green", href: "/jugadores/new", "{create}" }
            }
            if jugadores.is_empty() {
                p { class: "text-gray-500", "{t!(\"common.empty\")}" }
            } else {
                table { class: "w-full text-sm",
                    thead {
                        tr {
                            th { "{t!(\"jugador.apodo\")}" }
                            th { "{t!(\"jugador.nombre\")}" }
                            th { "{t!(\"jugador.apellido\")}" }
                            th { "{t!(\"jugador.fecha_de_nacimiento\")}" }
                            th {}
                        }
                    }
                    tbody {
                        for jugador in jugadores.iter() {
                            tr {
                                td { "{text(&jugador.apodo)}" }
                                td { "{text(&jugador.nombre)}" }
                                td { "{text(&jugador.apellido)}" }
                                td { "{birth_date(&jugador.fecha_de_nacimiento)}" }
                                td {
                                    if let Some(id) = jugador.id {
                                        a { href: "/jugadores/{id}/edit", "{edit}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
