use dioxus::prelude::*;
use rust_i18n::t;

use torneo_app::forms::PartidaForm;
use torneo_types::partida::Partida;

use super::form::{FormActions, FormContext, TextField};

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Create / edit form of a match.
#[component]
pub fn PartidaUpdatePage(title: String, form: PartidaForm, context: FormContext) -> Element {
    let id = number(&form.id);

    rsx! {
        div { class: "content-box p-6 bg-white max-w-lg mx-auto",
            h2 { id: "partida-update-heading", class: "text-xl font-bold text-gray-700 mb-6", "{title}" }
            if let Some(failure) = &context.failure {
                p { class: "mb-3 text-red-600 error", "{failure}" }
            }
            form {
                action: "/partidas",
                method: "post",
                input { r#type: "hidden", name: "return_to", value: "{context.return_to}" }
                if form.id.is_some() {
                    div { class: "mb-3 text-sm text-gray-500",
                        "{t!(\"common.id\")}: {id}"
                    }
                }
                input { r#type: "hidden", name: "id", value: "{id}" }
                TextField {
                    label: t!("partida.ganador").to_string(),
                    name: "ganador",
                    value: text(&form.ganador),
                    input_type: "text",
                    required: true,
                    errors: context.errors_for("ganador"),
                }
                TextField {
                    label: t!("partida.perdedor").to_string(),
                    name: "perdedor",
                    value: text(&form.perdedor),
                    input_type: "text",
                    required: true,
                    errors: context.errors_for("perdedor"),
                }
                TextField {
                    label: t!("partida.puntos_del_ganador").to_string(),
                    name: "puntosDelGanador",
                    value: number(&form.puntos_del_ganador),
                    input_type: "number",
                    required: true,
                    errors: context.errors_for("puntosDelGanador"),
                }
                FormActions { return_to: context.return_to.clone() }
            }
        }
    }
}

#[component]
pub fn PartidaListPage(partidas: Vec<Partida>) -> Element {
    let title = t!("partida.list.title");
    let create = t!("partida.list.create");
    let edit = t!("common.edit");

    rsx! {
        div { class: "content-box p-6 bg-white",
            div { class: "flex justify-between items-center mb-4",
                h2 { class: "text-xl font-bold text-gray-700", "{title}" }
                a { class: "btn-green", href: "/partidas/new", "{create}" }
            }
            if partidas.is_empty() {
                p { class: "text-gray-500", "{t!(\"common.empty\")}" }
            } else {
                table { class: "w-full text-sm",
                    thead {
                        tr {
                            th { "{t!(\"common.id\")}" }
                            th { "{t!(\"partida.ganador\")}" }
                            th { "{t!(\"partida.perdedor\")}" }
                            th { "{t!(\"partida.puntos_del_ganador\")}" }
                            th {}
                        }
                    }
                    tbody {
                        for partida in partidas.iter() {
                            tr {
                                td { "{number(&partida.id)}" }
                                td { "{text(&partida.ganador)}" }
                                td { "{text(&partida.perdedor)}" }
                                td { "{number(&partida.puntos_del_ganador)}" }
                                td {
                                    if let Some(id) = partida.id {
                                        a { href: "/partidas/{id}/edit", "{edit}" }
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
